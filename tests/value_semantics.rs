//! Copy-on-write and structural equality across the statement model

use rstest::rstest;
use xapi_model::domain::test_data::{actors, iris, uuids};
use xapi_model::domain::{
    Account, ChoiceInteractionDefinition, ContextActivities, Definition, Extensions,
    InteractionComponent, InteractionDefinition, InverseFunctionalIdentifier, LanguageMap,
    LikertInteractionDefinition, MatchingInteractionDefinition, PerformanceInteractionDefinition,
    Score, StatementId, StatementReference, StatementResult,
};
use xapi_model::{
    Activity, ActivityDefinition, Actor, Agent, Context, ErrorKind, Group, Iri, Irl, Person,
    Statement, StatementObject, SubStatement, Uuid, Verb,
};

fn iri(value: &str) -> Iri {
    Iri::from_string(value).unwrap()
}

fn agent(mbox: &str, name: &str) -> Agent {
    Agent::new(
        Some(InverseFunctionalIdentifier::from_mbox(iri(mbox))),
        Some(name.to_string()),
    )
}

fn component(id: &str) -> InteractionComponent {
    InteractionComponent::new(id, Some(LanguageMap::create([("en-US", id)])))
}

fn interaction(definition: impl Into<InteractionDefinition>) -> ActivityDefinition {
    ActivityDefinition::Interaction(definition.into())
}

fn course() -> Activity {
    Activity::new(iri(iris::ACTIVITY_COURSE), None)
}

fn sub_statement() -> SubStatement {
    SubStatement::new(
        Actor::Agent(agent(iris::MBOX_ALICE, actors::ALICE)),
        Verb::new(iri(iris::VERB_ATTEMPTED), None),
        course().into(),
    )
    .unwrap()
}

#[test]
fn person_aggregates_agents_in_order() {
    let alice = agent(iris::MBOX_ALICE, actors::ALICE);
    let bob = Agent::new(
        Some(InverseFunctionalIdentifier::from_account(Account::new(
            actors::ACCOUNT_NAME,
            Irl::from_string(iris::HOME_PAGE).unwrap(),
        ))),
        Some(actors::BOB.to_string()),
    );

    let person = Person::create_from_agents(&[alice, bob]).unwrap();

    assert_eq!(person.names(), [actors::ALICE, actors::BOB]);
    assert_eq!(person.mboxes(), [iri(iris::MBOX_ALICE)]);
    assert_eq!(person.accounts().len(), 1);
    assert_eq!(person.accounts()[0].name(), actors::ACCOUNT_NAME);
    assert!(person.mbox_sha1_sums().is_empty());
    assert!(person.open_ids().is_empty());
}

#[test]
fn person_rejects_anonymous_agents() {
    let err = Person::create_from_agents(&[
        agent(iris::MBOX_ALICE, actors::ALICE),
        Agent::new(None, Some(actors::CAROL.to_string())),
    ])
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Propagated);
}

#[rstest]
#[case::activity(course().into())]
#[case::agent(agent(iris::MBOX_CONFORMANCE, actors::BOB).into())]
#[case::group(Group::default().into())]
#[case::statement_reference(
    StatementReference::new(StatementId::from_string(uuids::STATEMENT_A).unwrap()).into()
)]
fn sub_statements_accept_non_nested_objects(#[case] object: StatementObject) {
    let replaced = sub_statement().with_object(object.clone()).unwrap();
    assert_eq!(replaced.object(), &object);
}

#[test]
fn sub_statements_cannot_nest() {
    let nested: StatementObject = sub_statement().into();

    let at_construction = SubStatement::new(
        Actor::Agent(Agent::default()),
        Verb::void().unwrap(),
        nested.clone(),
    );
    let through_mutator = sub_statement().with_object(nested.clone());

    assert_eq!(
        at_construction.unwrap_err().kind(),
        ErrorKind::InvariantViolation
    );
    assert_eq!(
        through_mutator.unwrap_err().kind(),
        ErrorKind::InvariantViolation
    );

    let statement = Statement::new(
        None,
        Actor::Agent(Agent::default()),
        Verb::void().unwrap(),
        nested,
    );
    assert!(statement.object().is_sub_statement());
}

#[rstest]
#[case::choice(
    interaction(ChoiceInteractionDefinition::default()),
    interaction(ChoiceInteractionDefinition::default().with_choices(Some(vec![])))
)]
#[case::likert(
    interaction(LikertInteractionDefinition::default()),
    interaction(LikertInteractionDefinition::default().with_scale(Some(vec![])))
)]
#[case::performance(
    interaction(PerformanceInteractionDefinition::default()),
    interaction(PerformanceInteractionDefinition::default().with_steps(Some(vec![])))
)]
#[case::matching_source(
    interaction(MatchingInteractionDefinition::default()),
    interaction(MatchingInteractionDefinition::default().with_source(Some(vec![])))
)]
#[case::matching_target(
    interaction(MatchingInteractionDefinition::default()),
    interaction(MatchingInteractionDefinition::default().with_target(Some(vec![])))
)]
fn absent_and_empty_lists_are_unequal(
    #[case] absent: ActivityDefinition,
    #[case] empty: ActivityDefinition,
) {
    assert_ne!(absent, empty);
    assert_ne!(empty, absent);
    assert_eq!(absent, absent.clone());
    assert_eq!(empty, empty.clone());
}

#[test]
fn interaction_component_lists_compare_by_position() {
    let forward = ChoiceInteractionDefinition::default()
        .with_choices(Some(vec![component("golf"), component("tetris")]));
    let backward = ChoiceInteractionDefinition::default()
        .with_choices(Some(vec![component("tetris"), component("golf")]));
    let shorter = ChoiceInteractionDefinition::default().with_choices(Some(vec![component("golf")]));

    assert_ne!(forward, backward);
    assert_ne!(forward, shorter);
    assert_ne!(shorter, forward);
}

#[test]
fn interaction_variants_never_compare_equal() {
    let definition = Definition::default().with_name(Some(LanguageMap::create([("en-US", "Q1")])));
    let choice = interaction(ChoiceInteractionDefinition::new(definition.clone(), None, None));
    let likert = interaction(LikertInteractionDefinition::new(definition.clone(), None, None));
    let basic: ActivityDefinition = definition.into();

    assert_ne!(choice, likert);
    assert_ne!(choice, basic);
    assert_eq!(choice.definition(), basic.definition());
}

#[test]
fn group_membership_ignores_order() {
    let alice = agent(iris::MBOX_ALICE, actors::ALICE);
    let bob = agent(iris::MBOX_CONFORMANCE, actors::BOB);
    let named = Group::default().with_name(Some(actors::GROUP_NAME.to_string()));

    let forward = named.with_members(vec![alice.clone(), bob.clone()]);
    let backward = named.with_members(vec![bob, alice.clone()]);
    let partial = named.with_members(vec![alice]);

    assert_eq!(forward, backward);
    assert_ne!(forward, partial);
    assert_ne!(partial, forward);
    assert_eq!(Actor::Group(forward), Actor::Group(backward));
}

#[test]
fn nested_mutation_leaves_every_level_untouched() {
    let statement = Statement::new(
        Some(StatementId::from_string(uuids::STATEMENT_A).unwrap()),
        Actor::Agent(agent(iris::MBOX_ALICE, actors::ALICE)),
        Verb::new(iri(iris::VERB_COMPLETED), None),
        course().into(),
    );
    let context = Context::new()
        .with_registration(Some(Uuid::from_string(uuids::REGISTRATION).unwrap()))
        .with_context_activities(Some(
            ContextActivities::default().with_added_parent_activity(course()),
        ));
    let result = StatementResult::default()
        .with_score(Some(Score::new(Some(0.9), None, None, None)))
        .with_extensions(Some(
            Extensions::new().with_extension(iri(iris::MORE_INFO), serde_json::json!(42)),
        ));

    let enriched = statement
        .with_context(Some(context.clone()))
        .with_result(Some(result.clone()));
    let rescored = enriched.with_result(Some(result.with_score(None)));

    assert_eq!(statement.context(), None);
    assert_eq!(enriched.context(), Some(&context));
    assert_eq!(enriched.result(), Some(&result));
    assert_eq!(rescored.result().and_then(StatementResult::score), None);
    assert_ne!(enriched, rescored);
    assert_eq!(enriched.context(), rescored.context());
}

#[test]
fn voiding_round_trip() {
    let statement = Statement::new(
        Some(StatementId::from_string(uuids::STATEMENT_B).unwrap()),
        Actor::Agent(agent(iris::MBOX_ALICE, actors::ALICE)),
        Verb::new(iri(iris::VERB_COMPLETED), None),
        course().into(),
    );
    let voiding = statement
        .void_statement(Actor::Agent(agent(iris::MBOX_CONFORMANCE, actors::BOB)))
        .unwrap();

    assert_eq!(voiding.verb().id().value(), iris::VERB_VOIDED);
    assert_eq!(
        voiding
            .object()
            .as_statement_reference()
            .map(|reference| reference.statement_id().to_string()),
        Some(uuids::STATEMENT_B.to_string())
    );
}

#[rstest]
#[case("not a url")]
#[case("")]
#[case("https://example.com/with space")]
#[case("relative/path")]
fn irl_rejects_non_urls(#[case] value: &str) {
    let err = Irl::from_string(value).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[rstest]
#[case("https://example.com/x")]
#[case("http://example.com/activities/quiz-1?attempt=2")]
fn irl_keeps_the_exact_text(#[case] value: &str) {
    assert_eq!(Irl::from_string(value).unwrap().value(), value);
}
