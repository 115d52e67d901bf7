use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use proptest::string::string_regex;
use xapi_model::domain::{
    ChoiceInteractionDefinition, Definition, InteractionComponent, InverseFunctionalIdentifier,
    LanguageMap, Score, StatementResult,
};
use xapi_model::{Agent, Group, Iri};

/// Generate valid http IRIs
pub fn iri() -> impl Strategy<Value = Iri> {
    string_regex(r"http://example\.com/[a-z0-9]{1,12}(/[a-z0-9-]{1,8}){0,2}")
        .unwrap()
        .prop_filter_map("Invalid IRI", |s| Iri::from_string(s).ok())
}

/// Generate language maps with up to three entries
pub fn language_map() -> impl Strategy<Value = LanguageMap> {
    vec(
        (
            prop_oneof![Just("en-US"), Just("en-GB"), Just("de-DE"), Just("fr")],
            "[A-Za-z ]{1,20}",
        ),
        0..3,
    )
    .prop_map(LanguageMap::create)
}

/// Generate agents identified by a mailbox
pub fn agent() -> impl Strategy<Value = Agent> {
    (string_regex("[a-z]{1,8}").unwrap(), option::of("[A-Z][a-z]{1,10}")).prop_map(
        |(local, name)| {
            let mbox = Iri::from_string(format!("mailto:{local}@example.com")).unwrap();
            Agent::new(Some(InverseFunctionalIdentifier::from_mbox(mbox)), name)
        },
    )
}

/// Generate anonymous groups
pub fn group() -> impl Strategy<Value = Group> {
    (option::of("[A-Z][a-z]{1,10}"), vec(agent(), 0..5))
        .prop_map(|(name, members)| Group::new(None, name, members))
}

pub fn interaction_component() -> impl Strategy<Value = InteractionComponent> {
    ("[a-z]{1,8}", option::of(language_map()))
        .prop_map(|(id, description)| InteractionComponent::new(id, description))
}

pub fn definition() -> impl Strategy<Value = Definition> {
    (option::of(language_map()), option::of(language_map()), option::of(iri())).prop_map(
        |(name, description, activity_type)| {
            Definition::new(name, description, activity_type, None, None)
        },
    )
}

pub fn choice_interaction() -> impl Strategy<Value = ChoiceInteractionDefinition> {
    (
        definition(),
        option::of(vec("[a-z]{1,8}(\\[,\\][a-z]{1,8})?", 0..3)),
        option::of(vec(interaction_component(), 0..4)),
    )
        .prop_map(|(definition, pattern, choices)| {
            ChoiceInteractionDefinition::new(definition, pattern, choices)
        })
}

pub fn score() -> impl Strategy<Value = Score> {
    (
        option::of(-1.0f64..=1.0),
        option::of(prop_oneof![4 => 0.0f64..100.0, 1 => Just(f64::NAN)]),
        option::of(Just(0.0f64)),
        option::of(Just(100.0f64)),
    )
        .prop_map(|(scaled, raw, min, max)| Score::new(scaled, raw, min, max))
}

pub fn statement_result() -> impl Strategy<Value = StatementResult> {
    (
        option::of(score()),
        option::of(any::<bool>()),
        option::of(any::<bool>()),
        option::of("[a-z ]{0,20}"),
    )
        .prop_map(|(score, success, completion, response)| {
            StatementResult::new(score, success, completion, response, None, None)
        })
}
