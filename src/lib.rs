//! xAPI Model - immutable value objects for Experience API statements
//!
//! Statements, their actors, verbs, objects, results and contexts are plain
//! values: they are validated at construction, never mutated in place and
//! compared structurally.

pub mod config;
pub mod domain;
pub mod error;
pub mod telemetry;

pub use domain::{
    Activity, ActivityDefinition, Actor, Agent, Attachment, Context, Group, Iri, Irl, Person,
    Statement, StatementObject, SubStatement, Uuid, Verb,
};
pub use error::{Error, ErrorKind, Result};
