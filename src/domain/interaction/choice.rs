use super::{InteractionBase, InteractionComponent, InteractionType};
use crate::domain::definition::Definition;

/// Select one or more options from a list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoiceInteractionDefinition {
    base: InteractionBase,
    choices: Option<Vec<InteractionComponent>>,
}

impl_interaction_base!(ChoiceInteractionDefinition, InteractionType::Choice);

impl ChoiceInteractionDefinition {
    pub fn new(
        definition: Definition,
        correct_responses_pattern: Option<Vec<String>>,
        choices: Option<Vec<InteractionComponent>>,
    ) -> Self {
        Self {
            base: InteractionBase::new(definition, correct_responses_pattern),
            choices,
        }
    }

    pub fn choices(&self) -> Option<&[InteractionComponent]> {
        self.choices.as_deref()
    }

    pub fn with_choices(&self, choices: Option<Vec<InteractionComponent>>) -> Self {
        Self {
            choices,
            ..self.clone()
        }
    }
}

/// Order the given options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SequencingInteractionDefinition {
    base: InteractionBase,
    choices: Option<Vec<InteractionComponent>>,
}

impl_interaction_base!(SequencingInteractionDefinition, InteractionType::Sequencing);

impl SequencingInteractionDefinition {
    pub fn new(
        definition: Definition,
        correct_responses_pattern: Option<Vec<String>>,
        choices: Option<Vec<InteractionComponent>>,
    ) -> Self {
        Self {
            base: InteractionBase::new(definition, correct_responses_pattern),
            choices,
        }
    }

    pub fn choices(&self) -> Option<&[InteractionComponent]> {
        self.choices.as_deref()
    }

    pub fn with_choices(&self, choices: Option<Vec<InteractionComponent>>) -> Self {
        Self {
            choices,
            ..self.clone()
        }
    }
}
