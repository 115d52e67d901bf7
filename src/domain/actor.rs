//! Actors: the agents and groups that perform statements
//!
//! An actor is identified through an [`InverseFunctionalIdentifier`]. The
//! xAPI standard intends the four identity channels to be mutually exclusive but
//! consumers must not rely on it, so the identifier carries all four as
//! independent optional fields without enforcing exclusivity.

use derive_more::From;

use crate::domain::iri::{Iri, Irl};

/// A user account on an existing system
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Account {
    name: String,
    home_page: Irl,
}

impl Account {
    pub fn new(name: impl Into<String>, home_page: Irl) -> Self {
        Self {
            name: name.into(),
            home_page,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn home_page(&self) -> &Irl {
        &self.home_page
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_home_page(&self, home_page: Irl) -> Self {
        Self {
            home_page,
            ..self.clone()
        }
    }
}

/// The identity channels that uniquely identify an actor
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct InverseFunctionalIdentifier {
    mbox: Option<Iri>,
    mbox_sha1_sum: Option<String>,
    open_id: Option<String>,
    account: Option<Account>,
}

impl InverseFunctionalIdentifier {
    pub fn from_mbox(mbox: Iri) -> Self {
        Self {
            mbox: Some(mbox),
            ..Self::default()
        }
    }

    pub fn from_mbox_sha1_sum(mbox_sha1_sum: impl Into<String>) -> Self {
        Self {
            mbox_sha1_sum: Some(mbox_sha1_sum.into()),
            ..Self::default()
        }
    }

    pub fn from_open_id(open_id: impl Into<String>) -> Self {
        Self {
            open_id: Some(open_id.into()),
            ..Self::default()
        }
    }

    pub fn from_account(account: Account) -> Self {
        Self {
            account: Some(account),
            ..Self::default()
        }
    }

    pub fn mbox(&self) -> Option<&Iri> {
        self.mbox.as_ref()
    }

    pub fn mbox_sha1_sum(&self) -> Option<&str> {
        self.mbox_sha1_sum.as_deref()
    }

    pub fn open_id(&self) -> Option<&str> {
        self.open_id.as_deref()
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn with_mbox(&self, mbox: Option<Iri>) -> Self {
        Self {
            mbox,
            ..self.clone()
        }
    }

    pub fn with_mbox_sha1_sum(&self, mbox_sha1_sum: Option<String>) -> Self {
        Self {
            mbox_sha1_sum,
            ..self.clone()
        }
    }

    pub fn with_open_id(&self, open_id: Option<String>) -> Self {
        Self {
            open_id,
            ..self.clone()
        }
    }

    pub fn with_account(&self, account: Option<Account>) -> Self {
        Self {
            account,
            ..self.clone()
        }
    }
}

/// A single person or system
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Agent {
    identifier: Option<InverseFunctionalIdentifier>,
    name: Option<String>,
}

impl Agent {
    pub fn new(identifier: Option<InverseFunctionalIdentifier>, name: Option<String>) -> Self {
        Self { identifier, name }
    }

    pub fn inverse_functional_identifier(&self) -> Option<&InverseFunctionalIdentifier> {
        self.identifier.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn with_inverse_functional_identifier(
        &self,
        identifier: Option<InverseFunctionalIdentifier>,
    ) -> Self {
        Self {
            identifier,
            ..self.clone()
        }
    }

    pub fn with_name(&self, name: Option<String>) -> Self {
        Self {
            name,
            ..self.clone()
        }
    }
}

/// A collection of agents acting together
///
/// Membership equality ignores order: two groups are equal when they have the
/// same number of members and every member of one is found in the other.
#[derive(Debug, Clone, Default)]
pub struct Group {
    identifier: Option<InverseFunctionalIdentifier>,
    name: Option<String>,
    members: Vec<Agent>,
}

impl Group {
    pub fn new(
        identifier: Option<InverseFunctionalIdentifier>,
        name: Option<String>,
        members: Vec<Agent>,
    ) -> Self {
        Self {
            identifier,
            name,
            members,
        }
    }

    pub fn inverse_functional_identifier(&self) -> Option<&InverseFunctionalIdentifier> {
        self.identifier.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn members(&self) -> &[Agent] {
        &self.members
    }

    /// Anonymous groups carry no identifier and are defined by their members
    pub fn is_anonymous(&self) -> bool {
        self.identifier.is_none()
    }

    pub fn with_inverse_functional_identifier(
        &self,
        identifier: Option<InverseFunctionalIdentifier>,
    ) -> Self {
        Self {
            identifier,
            ..self.clone()
        }
    }

    pub fn with_name(&self, name: Option<String>) -> Self {
        Self {
            name,
            ..self.clone()
        }
    }

    pub fn with_members(&self, members: Vec<Agent>) -> Self {
        Self {
            members,
            ..self.clone()
        }
    }

    pub fn with_added_member(&self, member: Agent) -> Self {
        let mut members = self.members.clone();
        members.push(member);
        self.with_members(members)
    }
}

impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.identifier == other.identifier
            && self.members.len() == other.members.len()
            && self
                .members
                .iter()
                .all(|member| other.members.contains(member))
            && other
                .members
                .iter()
                .all(|member| self.members.contains(member))
    }
}

impl Eq for Group {}

/// Either an agent or a group
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum Actor {
    Agent(Agent),
    Group(Group),
}

impl Actor {
    pub fn inverse_functional_identifier(&self) -> Option<&InverseFunctionalIdentifier> {
        match self {
            Actor::Agent(agent) => agent.inverse_functional_identifier(),
            Actor::Group(group) => group.inverse_functional_identifier(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Actor::Agent(agent) => agent.name(),
            Actor::Group(group) => group.name(),
        }
    }

    pub fn as_agent(&self) -> Option<&Agent> {
        match self {
            Actor::Agent(agent) => Some(agent),
            Actor::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Actor::Group(group) => Some(group),
            Actor::Agent(_) => None,
        }
    }
}
