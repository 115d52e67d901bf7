//! Interaction activity definitions
//!
//! Interactions describe the expected response shape of an assessment item.
//! Every variant shares an [`InteractionBase`] (the activity [`Definition`]
//! plus the correct response patterns) and adds its own optional component
//! lists. Those lists are tri-state: `None` means the field was never set,
//! `Some(vec![])` means it was explicitly set to nothing, and the two compare
//! unequal.
//!
//! Equality compares the shared base first and the variant fields after it,
//! which is the declaration order of every variant struct.

use derive_more::{Display, From};

use crate::domain::definition::Definition;

/// Generates the shared accessors and copy-on-write mutators of an
/// interaction variant holding a `base: InteractionBase` field.
macro_rules! impl_interaction_base {
    ($name:ident, $interaction_type:expr) => {
        impl $name {
            pub const INTERACTION_TYPE: $crate::domain::interaction::InteractionType =
                $interaction_type;

            pub fn interaction_type(&self) -> $crate::domain::interaction::InteractionType {
                Self::INTERACTION_TYPE
            }

            pub fn definition(&self) -> &$crate::domain::definition::Definition {
                &self.base.definition
            }

            pub fn name(&self) -> Option<&$crate::domain::language_map::LanguageMap> {
                self.base.definition.name()
            }

            pub fn description(&self) -> Option<&$crate::domain::language_map::LanguageMap> {
                self.base.definition.description()
            }

            pub fn activity_type(&self) -> Option<&$crate::domain::iri::Iri> {
                self.base.definition.activity_type()
            }

            pub fn more_info(&self) -> Option<&$crate::domain::iri::Irl> {
                self.base.definition.more_info()
            }

            pub fn extensions(&self) -> Option<&$crate::domain::extensions::Extensions> {
                self.base.definition.extensions()
            }

            pub fn correct_responses_pattern(&self) -> Option<&[String]> {
                self.base.correct_responses_pattern.as_deref()
            }

            pub fn with_name(
                &self,
                name: Option<$crate::domain::language_map::LanguageMap>,
            ) -> Self {
                self.with_definition(self.base.definition.with_name(name))
            }

            pub fn with_description(
                &self,
                description: Option<$crate::domain::language_map::LanguageMap>,
            ) -> Self {
                self.with_definition(self.base.definition.with_description(description))
            }

            pub fn with_activity_type(
                &self,
                activity_type: Option<$crate::domain::iri::Iri>,
            ) -> Self {
                self.with_definition(self.base.definition.with_activity_type(activity_type))
            }

            pub fn with_more_info(&self, more_info: Option<$crate::domain::iri::Irl>) -> Self {
                self.with_definition(self.base.definition.with_more_info(more_info))
            }

            pub fn with_extensions(
                &self,
                extensions: Option<$crate::domain::extensions::Extensions>,
            ) -> Self {
                self.with_definition(self.base.definition.with_extensions(extensions))
            }

            pub fn with_correct_responses_pattern(&self, pattern: Option<Vec<String>>) -> Self {
                Self {
                    base: $crate::domain::interaction::InteractionBase {
                        correct_responses_pattern: pattern,
                        ..self.base.clone()
                    },
                    ..self.clone()
                }
            }

            fn with_definition(&self, definition: $crate::domain::definition::Definition) -> Self {
                Self {
                    base: $crate::domain::interaction::InteractionBase {
                        definition,
                        ..self.base.clone()
                    },
                    ..self.clone()
                }
            }
        }
    };
}

/// Generates a match over every `InteractionDefinition` variant
macro_rules! delegate_to_variant {
    ($self:ident, $method:ident) => {
        match $self {
            InteractionDefinition::Choice(v) => v.$method(),
            InteractionDefinition::Sequencing(v) => v.$method(),
            InteractionDefinition::Likert(v) => v.$method(),
            InteractionDefinition::Matching(v) => v.$method(),
            InteractionDefinition::Performance(v) => v.$method(),
            InteractionDefinition::TrueFalse(v) => v.$method(),
            InteractionDefinition::FillIn(v) => v.$method(),
            InteractionDefinition::LongFillIn(v) => v.$method(),
            InteractionDefinition::Numeric(v) => v.$method(),
            InteractionDefinition::Other(v) => v.$method(),
        }
    };
}

mod choice;
mod component;
mod likert;
mod matching;
mod performance;
mod simple;

pub use choice::{ChoiceInteractionDefinition, SequencingInteractionDefinition};
pub use component::InteractionComponent;
pub use likert::LikertInteractionDefinition;
pub use matching::MatchingInteractionDefinition;
pub use performance::PerformanceInteractionDefinition;
pub use simple::{
    FillInInteractionDefinition, LongFillInInteractionDefinition, NumericInteractionDefinition,
    OtherInteractionDefinition, TrueFalseInteractionDefinition,
};

/// The xAPI interaction type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum InteractionType {
    #[display("choice")]
    Choice,
    #[display("sequencing")]
    Sequencing,
    #[display("likert")]
    Likert,
    #[display("matching")]
    Matching,
    #[display("performance")]
    Performance,
    #[display("true-false")]
    TrueFalse,
    #[display("fill-in")]
    FillIn,
    #[display("long-fill-in")]
    LongFillIn,
    #[display("numeric")]
    Numeric,
    #[display("other")]
    Other,
}

/// Fields shared by every interaction variant
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionBase {
    definition: Definition,
    correct_responses_pattern: Option<Vec<String>>,
}

impl InteractionBase {
    pub fn new(definition: Definition, correct_responses_pattern: Option<Vec<String>>) -> Self {
        Self {
            definition,
            correct_responses_pattern,
        }
    }
}

/// Any interaction definition
#[derive(Debug, Clone, PartialEq, From)]
pub enum InteractionDefinition {
    Choice(ChoiceInteractionDefinition),
    Sequencing(SequencingInteractionDefinition),
    Likert(LikertInteractionDefinition),
    Matching(MatchingInteractionDefinition),
    Performance(PerformanceInteractionDefinition),
    TrueFalse(TrueFalseInteractionDefinition),
    FillIn(FillInInteractionDefinition),
    LongFillIn(LongFillInInteractionDefinition),
    Numeric(NumericInteractionDefinition),
    Other(OtherInteractionDefinition),
}

impl InteractionDefinition {
    pub fn interaction_type(&self) -> InteractionType {
        delegate_to_variant!(self, interaction_type)
    }

    pub fn definition(&self) -> &Definition {
        delegate_to_variant!(self, definition)
    }

    pub fn correct_responses_pattern(&self) -> Option<&[String]> {
        delegate_to_variant!(self, correct_responses_pattern)
    }
}
