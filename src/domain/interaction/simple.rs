//! Interaction variants that only carry the shared base fields

use super::{InteractionBase, InteractionType};
use crate::domain::definition::Definition;

macro_rules! base_only_interaction {
    ($(#[$doc:meta])* $name:ident, $interaction_type:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            base: InteractionBase,
        }

        impl_interaction_base!($name, $interaction_type);

        impl $name {
            pub fn new(
                definition: Definition,
                correct_responses_pattern: Option<Vec<String>>,
            ) -> Self {
                Self {
                    base: InteractionBase::new(definition, correct_responses_pattern),
                }
            }
        }
    };
}

base_only_interaction!(
    /// Answer true or false
    TrueFalseInteractionDefinition,
    InteractionType::TrueFalse
);
base_only_interaction!(
    /// Short free-text answer
    FillInInteractionDefinition,
    InteractionType::FillIn
);
base_only_interaction!(
    /// Long free-text answer, such as an essay
    LongFillInInteractionDefinition,
    InteractionType::LongFillIn
);
base_only_interaction!(
    /// Numeric answer, optionally within a range
    NumericInteractionDefinition,
    InteractionType::Numeric
);
base_only_interaction!(
    /// Any interaction not covered by the other types
    OtherInteractionDefinition,
    InteractionType::Other
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::iri::Iri;
    use crate::domain::test_data::iris;

    #[test]
    fn test_true_false_with_pattern() {
        let interaction = TrueFalseInteractionDefinition::new(
            Definition::default(),
            Some(vec!["true".to_string()]),
        );

        assert_eq!(interaction.interaction_type(), InteractionType::TrueFalse);
        assert_eq!(
            interaction.correct_responses_pattern(),
            Some(&["true".to_string()][..])
        );
        assert_ne!(interaction, TrueFalseInteractionDefinition::default());
    }

    #[test]
    fn test_base_mutators_do_not_touch_source() {
        let original = NumericInteractionDefinition::default();
        let typed =
            original.with_activity_type(Some(Iri::from_string(iris::TYPE_INTERACTION).unwrap()));

        assert_eq!(original.activity_type(), None);
        assert_eq!(typed.activity_type().map(Iri::value), Some(iris::TYPE_INTERACTION));
    }

    #[test]
    fn test_every_simple_variant_reports_its_type() {
        assert_eq!(
            FillInInteractionDefinition::INTERACTION_TYPE,
            InteractionType::FillIn
        );
        assert_eq!(
            LongFillInInteractionDefinition::INTERACTION_TYPE,
            InteractionType::LongFillIn
        );
        assert_eq!(
            OtherInteractionDefinition::default().interaction_type(),
            InteractionType::Other
        );
    }
}
