use super::{InteractionBase, InteractionComponent, InteractionType};
use crate::domain::definition::Definition;

/// Rate on a discrete scale
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LikertInteractionDefinition {
    base: InteractionBase,
    scale: Option<Vec<InteractionComponent>>,
}

impl_interaction_base!(LikertInteractionDefinition, InteractionType::Likert);

impl LikertInteractionDefinition {
    pub fn new(
        definition: Definition,
        correct_responses_pattern: Option<Vec<String>>,
        scale: Option<Vec<InteractionComponent>>,
    ) -> Self {
        Self {
            base: InteractionBase::new(definition, correct_responses_pattern),
            scale,
        }
    }

    pub fn scale(&self) -> Option<&[InteractionComponent]> {
        self.scale.as_deref()
    }

    pub fn with_scale(&self, scale: Option<Vec<InteractionComponent>>) -> Self {
        Self {
            scale,
            ..self.clone()
        }
    }
}
