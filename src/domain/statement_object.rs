//! What a statement is about
//!
//! The object of a statement is one of a closed set of variants. Comparing
//! two objects of different variants is never equal and never inspects the
//! fields.

use derive_more::From;

use crate::domain::activity::Activity;
use crate::domain::actor::{Actor, Agent, Group};
use crate::domain::identifiers::StatementId;
use crate::domain::sub_statement::SubStatement;

/// Reference to another statement by its id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatementReference {
    statement_id: StatementId,
}

impl StatementReference {
    pub fn new(statement_id: StatementId) -> Self {
        Self { statement_id }
    }

    pub fn statement_id(&self) -> StatementId {
        self.statement_id
    }

    pub fn with_statement_id(&self, statement_id: StatementId) -> Self {
        Self { statement_id }
    }
}

#[derive(Debug, Clone, PartialEq, From)]
pub enum StatementObject {
    Activity(Activity),
    Actor(Actor),
    StatementReference(StatementReference),
    SubStatement(Box<SubStatement>),
}

impl StatementObject {
    pub fn as_activity(&self) -> Option<&Activity> {
        match self {
            StatementObject::Activity(activity) => Some(activity),
            _ => None,
        }
    }

    pub fn as_actor(&self) -> Option<&Actor> {
        match self {
            StatementObject::Actor(actor) => Some(actor),
            _ => None,
        }
    }

    pub fn as_statement_reference(&self) -> Option<&StatementReference> {
        match self {
            StatementObject::StatementReference(reference) => Some(reference),
            _ => None,
        }
    }

    pub fn as_sub_statement(&self) -> Option<&SubStatement> {
        match self {
            StatementObject::SubStatement(sub_statement) => Some(sub_statement.as_ref()),
            _ => None,
        }
    }

    pub fn is_sub_statement(&self) -> bool {
        matches!(self, StatementObject::SubStatement(_))
    }
}

impl From<SubStatement> for StatementObject {
    fn from(sub_statement: SubStatement) -> Self {
        StatementObject::SubStatement(Box::new(sub_statement))
    }
}

impl From<Agent> for StatementObject {
    fn from(agent: Agent) -> Self {
        StatementObject::Actor(Actor::Agent(agent))
    }
}

impl From<Group> for StatementObject {
    fn from(group: Group) -> Self {
        StatementObject::Actor(Actor::Group(group))
    }
}
