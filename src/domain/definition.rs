//! Activity metadata
//!
//! [`Definition`] holds the descriptive fields every activity may carry.
//! Interaction activities (questions, surveys, assessments) extend it with
//! the response shape, see [`crate::domain::interaction`].

use derive_more::From;

use crate::domain::extensions::Extensions;
use crate::domain::interaction::InteractionDefinition;
use crate::domain::iri::{Iri, Irl};
use crate::domain::language_map::LanguageMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Definition {
    name: Option<LanguageMap>,
    description: Option<LanguageMap>,
    activity_type: Option<Iri>,
    more_info: Option<Irl>,
    extensions: Option<Extensions>,
}

impl Definition {
    pub fn new(
        name: Option<LanguageMap>,
        description: Option<LanguageMap>,
        activity_type: Option<Iri>,
        more_info: Option<Irl>,
        extensions: Option<Extensions>,
    ) -> Self {
        Self {
            name,
            description,
            activity_type,
            more_info,
            extensions,
        }
    }

    pub fn name(&self) -> Option<&LanguageMap> {
        self.name.as_ref()
    }

    pub fn description(&self) -> Option<&LanguageMap> {
        self.description.as_ref()
    }

    pub fn activity_type(&self) -> Option<&Iri> {
        self.activity_type.as_ref()
    }

    pub fn more_info(&self) -> Option<&Irl> {
        self.more_info.as_ref()
    }

    pub fn extensions(&self) -> Option<&Extensions> {
        self.extensions.as_ref()
    }

    pub fn with_name(&self, name: Option<LanguageMap>) -> Self {
        Self {
            name,
            ..self.clone()
        }
    }

    pub fn with_description(&self, description: Option<LanguageMap>) -> Self {
        Self {
            description,
            ..self.clone()
        }
    }

    pub fn with_activity_type(&self, activity_type: Option<Iri>) -> Self {
        Self {
            activity_type,
            ..self.clone()
        }
    }

    pub fn with_more_info(&self, more_info: Option<Irl>) -> Self {
        Self {
            more_info,
            ..self.clone()
        }
    }

    pub fn with_extensions(&self, extensions: Option<Extensions>) -> Self {
        Self {
            extensions,
            ..self.clone()
        }
    }
}

/// The definition attached to an activity
#[derive(Debug, Clone, PartialEq, From)]
pub enum ActivityDefinition {
    Basic(Definition),
    Interaction(InteractionDefinition),
}

impl ActivityDefinition {
    /// The descriptive fields shared by both kinds of definition
    pub fn definition(&self) -> &Definition {
        match self {
            ActivityDefinition::Basic(definition) => definition,
            ActivityDefinition::Interaction(interaction) => interaction.definition(),
        }
    }

    pub fn as_interaction(&self) -> Option<&InteractionDefinition> {
        match self {
            ActivityDefinition::Interaction(interaction) => Some(interaction),
            ActivityDefinition::Basic(_) => None,
        }
    }
}
