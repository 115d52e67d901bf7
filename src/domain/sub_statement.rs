//! A statement nested as the object of another statement
//!
//! Nesting is limited to one level: the object of a sub statement can be
//! anything except another sub statement. The check runs at construction and
//! again in [`SubStatement::with_object`], so a nested graph can never be
//! materialized.

use chrono::{DateTime, Utc};

use crate::domain::actor::Actor;
use crate::domain::attachment::Attachment;
use crate::domain::context::Context;
use crate::domain::result::StatementResult;
use crate::domain::statement_object::StatementObject;
use crate::domain::verb::Verb;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct SubStatement {
    actor: Actor,
    verb: Verb,
    object: StatementObject,
    result: Option<StatementResult>,
    context: Option<Context>,
    created: Option<DateTime<Utc>>,
    attachments: Option<Vec<Attachment>>,
}

fn ensure_not_nested(object: &StatementObject) -> Result<()> {
    if object.is_sub_statement() {
        tracing::warn!("refusing to nest a sub statement inside a sub statement");
        return Err(Error::NestedSubStatement);
    }
    Ok(())
}

impl SubStatement {
    pub fn new(actor: Actor, verb: Verb, object: StatementObject) -> Result<Self> {
        ensure_not_nested(&object)?;
        Ok(Self {
            actor,
            verb,
            object,
            result: None,
            context: None,
            created: None,
            attachments: None,
        })
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn verb(&self) -> &Verb {
        &self.verb
    }

    pub fn object(&self) -> &StatementObject {
        &self.object
    }

    pub fn result(&self) -> Option<&StatementResult> {
        self.result.as_ref()
    }

    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    /// When the events described by this sub statement occurred
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created
    }

    pub fn attachments(&self) -> Option<&[Attachment]> {
        self.attachments.as_deref()
    }

    /// Whether this sub statement voids another statement
    pub fn is_void_statement(&self) -> bool {
        self.verb.is_void_verb()
    }

    pub fn with_actor(&self, actor: Actor) -> Self {
        Self {
            actor,
            ..self.clone()
        }
    }

    pub fn with_verb(&self, verb: Verb) -> Self {
        Self {
            verb,
            ..self.clone()
        }
    }

    pub fn with_object(&self, object: StatementObject) -> Result<Self> {
        ensure_not_nested(&object)?;
        Ok(Self {
            object,
            ..self.clone()
        })
    }

    pub fn with_result(&self, result: Option<StatementResult>) -> Self {
        Self {
            result,
            ..self.clone()
        }
    }

    pub fn with_context(&self, context: Option<Context>) -> Self {
        Self {
            context,
            ..self.clone()
        }
    }

    pub fn with_created(&self, created: Option<DateTime<Utc>>) -> Self {
        Self {
            created,
            ..self.clone()
        }
    }

    pub fn with_attachments(&self, attachments: Option<Vec<Attachment>>) -> Self {
        Self {
            attachments,
            ..self.clone()
        }
    }
}
