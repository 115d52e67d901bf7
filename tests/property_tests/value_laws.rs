use proptest::collection::vec;
use proptest::prelude::*;
use xapi_model::domain::{Person, SystemUuidGenerator, UuidGenerator};
use xapi_model::{Actor, Irl, Uuid};

use crate::generators;

proptest! {
    #[test]
    fn prop_with_choices_replaces_only_choices(
        interaction in generators::choice_interaction(),
        choices in vec(generators::interaction_component(), 0..4),
    ) {
        let before = interaction.clone();
        let updated = interaction.with_choices(Some(choices.clone()));

        prop_assert_eq!(updated.choices(), Some(choices.as_slice()));
        prop_assert_eq!(&interaction, &before);
        prop_assert_eq!(updated.definition(), interaction.definition());
        prop_assert_eq!(
            updated.correct_responses_pattern(),
            interaction.correct_responses_pattern()
        );
    }

    #[test]
    fn prop_clearing_a_list_makes_it_absent(interaction in generators::choice_interaction()) {
        let cleared = interaction.with_choices(None);
        let empty = interaction.with_choices(Some(Vec::new()));

        prop_assert_eq!(cleared.choices(), None);
        prop_assert_eq!(empty.choices().map(<[_]>::len), Some(0));
        prop_assert_ne!(&cleared, &empty);
        prop_assert_ne!(&empty, &cleared);
    }

    #[test]
    fn prop_equality_is_reflexive(
        interaction in generators::choice_interaction(),
        result in generators::statement_result(),
        group in generators::group(),
    ) {
        prop_assert_eq!(&interaction, &interaction.clone());
        prop_assert_eq!(&result, &result.clone());
        prop_assert_eq!(&group, &group.clone());
    }

    #[test]
    fn prop_asymmetric_score_is_unequal_both_ways(
        result in generators::statement_result(),
        score in generators::score(),
    ) {
        let without = result.with_score(None);
        let with = result.with_score(Some(score));

        prop_assert_ne!(&without, &with);
        prop_assert_ne!(&with, &without);
    }

    #[test]
    fn prop_group_equality_ignores_member_order(group in generators::group()) {
        let mut reversed = group.members().to_vec();
        reversed.reverse();
        let shuffled = group.with_members(reversed);

        prop_assert_eq!(&group, &shuffled);
        prop_assert_eq!(Actor::Group(group.clone()), Actor::Group(shuffled));
    }

    #[test]
    fn prop_group_with_extra_member_is_unequal(
        group in generators::group(),
        extra in generators::agent(),
    ) {
        let larger = group.with_added_member(extra);
        prop_assert_ne!(&group, &larger);
        prop_assert_ne!(&larger, &group);
        prop_assert_eq!(larger.members().len(), group.members().len() + 1);
    }

    #[test]
    fn prop_person_keeps_one_mbox_per_agent(agents in vec(generators::agent(), 0..6)) {
        let person = Person::create_from_agents(&agents).unwrap();
        let expected_names = agents.iter().filter(|agent| agent.name().is_some()).count();

        prop_assert_eq!(person.mboxes().len(), agents.len());
        prop_assert_eq!(person.names().len(), expected_names);
    }

    #[test]
    fn prop_uuid_string_round_trip(seed in any::<u8>()) {
        let generator = SystemUuidGenerator::default();
        let generated = match seed % 2 {
            0 => generator.uuid4(),
            _ => generator.uuid1(None, Some(u16::from(seed))),
        };

        let parsed = Uuid::from_string(&generated.to_string()).unwrap();
        prop_assert_eq!(parsed, generated);
        prop_assert!(Uuid::is_valid(&generated.to_string()));
    }

    #[test]
    fn prop_irl_rejects_whitespace(prefix in "[a-z]{1,8}", suffix in "[a-z]{1,8}") {
        let candidate = format!("https://example.com/{prefix} {suffix}");
        prop_assert!(Irl::from_string(candidate).is_err());
    }

    #[test]
    fn prop_uuid_name_based_versions_are_deterministic(name in "[a-z]{1,16}") {
        let generator = SystemUuidGenerator::default();
        let namespace = Uuid::from_string("6ba7b811-9dad-11d1-80b4-00c04fd430c8").unwrap();

        prop_assert_eq!(generator.uuid3(&namespace, &name), generator.uuid3(&namespace, &name));
        prop_assert_eq!(generator.uuid5(&namespace, &name).version(), 5);
    }
}
