//! xAPI statement data model
//!
//! Every type here is an immutable value object. Changes go through `with_*`
//! methods that return a modified copy and leave the receiver untouched.

pub mod activity;
pub mod actor;
pub mod attachment;
pub mod context;
pub mod definition;
pub mod extensions;
pub mod identifiers;
pub mod interaction;
pub mod iri;
pub mod language_map;
pub mod person;
pub mod profile;
pub mod result;
pub mod statement;
pub mod statement_object;
pub mod sub_statement;
pub mod test_data;
pub mod verb;

pub use activity::Activity;
pub use actor::{Account, Actor, Agent, Group, InverseFunctionalIdentifier};
pub use attachment::Attachment;
pub use context::{Context, ContextActivities};
pub use definition::{ActivityDefinition, Definition};
pub use extensions::Extensions;
pub use identifiers::{StatementId, SystemUuidGenerator, Uuid, UuidGenerator};
pub use interaction::*;
pub use iri::{Iri, Irl};
pub use language_map::LanguageMap;
pub use person::Person;
pub use profile::{ActivityProfile, AgentProfile, ProfileId};
pub use result::{Score, StatementResult};
pub use statement::Statement;
pub use statement_object::{StatementObject, StatementReference};
pub use sub_statement::SubStatement;
pub use verb::{Verb, VOID_VERB_ID};
