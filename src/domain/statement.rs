//! Root statement aggregate
//!
//! Unlike a [`SubStatement`](crate::domain::sub_statement::SubStatement), a
//! statement may carry a sub statement as its object, along with the
//! bookkeeping an LRS attaches on storage: id, authority, stored timestamp
//! and version.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::actor::Actor;
use crate::domain::attachment::Attachment;
use crate::domain::context::Context;
use crate::domain::identifiers::StatementId;
use crate::domain::result::StatementResult;
use crate::domain::statement_object::{StatementObject, StatementReference};
use crate::domain::verb::Verb;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    id: Option<StatementId>,
    actor: Actor,
    verb: Verb,
    object: StatementObject,
    result: Option<StatementResult>,
    authority: Option<Actor>,
    created: Option<DateTime<Utc>>,
    stored: Option<DateTime<Utc>>,
    context: Option<Context>,
    attachments: Option<Vec<Attachment>>,
    version: Option<String>,
}

impl Statement {
    pub fn new(
        id: Option<StatementId>,
        actor: Actor,
        verb: Verb,
        object: StatementObject,
    ) -> Self {
        Self {
            id,
            actor,
            verb,
            object,
            result: None,
            authority: None,
            created: None,
            stored: None,
            context: None,
            attachments: None,
            version: None,
        }
    }

    pub fn id(&self) -> Option<StatementId> {
        self.id
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

    pub fn authority(&self) -> Option<&Actor> {
        self.authority.as_ref()
    }

    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created
    }

    pub fn stored(&self) -> Option<DateTime<Utc>> {
        self.stored
    }

    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    pub fn attachments(&self) -> Option<&[Attachment]> {
        self.attachments.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn is_void_statement(&self) -> bool {
        self.verb.is_void_verb()
    }

    /// Reference pointing at this statement
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingStatementId`] when the statement has no id yet.
    pub fn statement_reference(&self) -> Result<StatementReference> {
        let id = self.id.ok_or_else(|| {
            debug!("cannot reference a statement without an id");
            Error::MissingStatementId
        })?;
        Ok(StatementReference::new(id))
    }

    /// Builds the statement by which `actor` voids this one
    ///
    /// The voiding statement has no id of its own; its object is a reference
    /// to this statement.
    pub fn void_statement(&self, actor: Actor) -> Result<Statement> {
        let reference = self.statement_reference()?;
        Ok(Statement::new(None, actor, Verb::void()?, reference.into()))
    }

    pub fn with_id(&self, id: Option<StatementId>) -> Self {
        Self { id, ..self.clone() }
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

    pub fn with_object(&self, object: StatementObject) -> Self {
        Self {
            object,
            ..self.clone()
        }
    }

    pub fn with_result(&self, result: Option<StatementResult>) -> Self {
        Self {
            result,
            ..self.clone()
        }
    }

    pub fn with_authority(&self, authority: Option<Actor>) -> Self {
        Self {
            authority,
            ..self.clone()
        }
    }

    pub fn with_created(&self, created: Option<DateTime<Utc>>) -> Self {
        Self {
            created,
            ..self.clone()
        }
    }

    pub fn with_stored(&self, stored: Option<DateTime<Utc>>) -> Self {
        Self {
            stored,
            ..self.clone()
        }
    }

    pub fn with_context(&self, context: Option<Context>) -> Self {
        Self {
            context,
            ..self.clone()
        }
    }

    pub fn with_attachments(&self, attachments: Option<Vec<Attachment>>) -> Self {
        Self {
            attachments,
            ..self.clone()
        }
    }

    pub fn with_version(&self, version: Option<String>) -> Self {
        Self {
            version,
            ..self.clone()
        }
    }
}
