use super::{InteractionBase, InteractionComponent, InteractionType};
use crate::domain::definition::Definition;

/// Perform a task made up of steps
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceInteractionDefinition {
    base: InteractionBase,
    steps: Option<Vec<InteractionComponent>>,
}

impl_interaction_base!(PerformanceInteractionDefinition, InteractionType::Performance);

impl PerformanceInteractionDefinition {
    pub fn new(
        definition: Definition,
        correct_responses_pattern: Option<Vec<String>>,
        steps: Option<Vec<InteractionComponent>>,
    ) -> Self {
        Self {
            base: InteractionBase::new(definition, correct_responses_pattern),
            steps,
        }
    }

    pub fn steps(&self) -> Option<&[InteractionComponent]> {
        self.steps.as_deref()
    }

    pub fn with_steps(&self, steps: Option<Vec<InteractionComponent>>) -> Self {
        Self {
            steps,
            ..self.clone()
        }
    }
}
