use crate::domain::language_map::LanguageMap;

/// One selectable element of an interaction: a choice, a scale point, a
/// step or one side of a matching pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionComponent {
    id: String,
    description: Option<LanguageMap>,
}

impl InteractionComponent {
    pub fn new(id: impl Into<String>, description: Option<LanguageMap>) -> Self {
        Self {
            id: id.into(),
            description,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> Option<&LanguageMap> {
        self.description.as_ref()
    }

    pub fn with_id(&self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..self.clone()
        }
    }

    pub fn with_description(&self, description: Option<LanguageMap>) -> Self {
        Self {
            description,
            ..self.clone()
        }
    }
}
