//! Profile documents scoped to an activity or an agent

use nutype::nutype;

use crate::domain::activity::Activity;
use crate::domain::actor::Agent;
use crate::error::{Error, Result};

/// Identifier of a profile document
#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct ProfileId(String);

impl ProfileId {
    pub fn from_string(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        Self::try_new(value.clone()).map_err(|_| {
            tracing::debug!(%value, "rejected profile id");
            Error::InvalidProfileId { value }
        })
    }

    pub fn value(&self) -> &str {
        self.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityProfile {
    profile_id: ProfileId,
    activity: Activity,
}

impl ActivityProfile {
    pub fn new(profile_id: ProfileId, activity: Activity) -> Self {
        Self {
            profile_id,
            activity,
        }
    }

    pub fn profile_id(&self) -> &ProfileId {
        &self.profile_id
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    pub fn with_profile_id(&self, profile_id: ProfileId) -> Self {
        Self {
            profile_id,
            ..self.clone()
        }
    }

    pub fn with_activity(&self, activity: Activity) -> Self {
        Self {
            activity,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentProfile {
    profile_id: ProfileId,
    agent: Agent,
}

impl AgentProfile {
    pub fn new(profile_id: ProfileId, agent: Agent) -> Self {
        Self { profile_id, agent }
    }

    pub fn profile_id(&self) -> &ProfileId {
        &self.profile_id
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn with_profile_id(&self, profile_id: ProfileId) -> Self {
        Self {
            profile_id,
            ..self.clone()
        }
    }

    pub fn with_agent(&self, agent: Agent) -> Self {
        Self {
            agent,
            ..self.clone()
        }
    }
}
