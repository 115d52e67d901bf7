use super::{InteractionBase, InteractionComponent, InteractionType};
use crate::domain::definition::Definition;

/// Match items of a source list to items of a target list
///
/// Source and target are independent tri-state lists, both compared
/// positionally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchingInteractionDefinition {
    base: InteractionBase,
    source: Option<Vec<InteractionComponent>>,
    target: Option<Vec<InteractionComponent>>,
}

impl_interaction_base!(MatchingInteractionDefinition, InteractionType::Matching);

impl MatchingInteractionDefinition {
    pub fn new(
        definition: Definition,
        correct_responses_pattern: Option<Vec<String>>,
        source: Option<Vec<InteractionComponent>>,
        target: Option<Vec<InteractionComponent>>,
    ) -> Self {
        Self {
            base: InteractionBase::new(definition, correct_responses_pattern),
            source,
            target,
        }
    }

    pub fn source(&self) -> Option<&[InteractionComponent]> {
        self.source.as_deref()
    }

    pub fn target(&self) -> Option<&[InteractionComponent]> {
        self.target.as_deref()
    }

    pub fn with_source(&self, source: Option<Vec<InteractionComponent>>) -> Self {
        Self {
            source,
            ..self.clone()
        }
    }

    pub fn with_target(&self, target: Option<Vec<InteractionComponent>>) -> Self {
        Self {
            target,
            ..self.clone()
        }
    }

    /// Source and target components zipped by position
    pub fn pairs(&self) -> Vec<(&InteractionComponent, &InteractionComponent)> {
        self.source()
            .unwrap_or_default()
            .iter()
            .zip(self.target().unwrap_or_default())
            .collect()
    }
}
