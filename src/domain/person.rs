//! Combined identity information from several agents
//!
//! A [`Person`] is never built field by field. It is derived from a list of
//! agents that are believed to describe the same individual, collecting every
//! name and identity channel in input order without deduplication.

use tracing::instrument;

use crate::domain::actor::{Account, Agent};
use crate::domain::iri::Iri;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    names: Vec<String>,
    mboxes: Vec<Iri>,
    mbox_sha1_sums: Vec<String>,
    open_ids: Vec<String>,
    accounts: Vec<Account>,
}

impl Person {
    /// Aggregates the identity data of `agents`
    ///
    /// Fails as a whole if any agent lacks an inverse functional identifier;
    /// such an agent cannot contribute identity data and is not skipped.
    #[instrument(skip(agents), fields(agent_count = agents.len()))]
    pub fn create_from_agents(agents: &[Agent]) -> Result<Self> {
        let mut person = Self::default();

        for (index, agent) in agents.iter().enumerate() {
            let identifier = agent.inverse_functional_identifier().ok_or_else(|| {
                tracing::warn!(index, "agent without inverse functional identifier");
                Error::MissingInverseFunctionalIdentifier { index }
            })?;

            if let Some(mbox) = identifier.mbox() {
                person.mboxes.push(mbox.clone());
            }
            if let Some(sum) = identifier.mbox_sha1_sum() {
                person.mbox_sha1_sums.push(sum.to_string());
            }
            if let Some(open_id) = identifier.open_id() {
                person.open_ids.push(open_id.to_string());
            }
            if let Some(account) = identifier.account() {
                person.accounts.push(account.clone());
            }
            if let Some(name) = agent.name() {
                person.names.push(name.to_string());
            }
        }

        Ok(person)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn mboxes(&self) -> &[Iri] {
        &self.mboxes
    }

    pub fn mbox_sha1_sums(&self) -> &[String] {
        &self.mbox_sha1_sums
    }

    pub fn open_ids(&self) -> &[String] {
        &self.open_ids
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}
