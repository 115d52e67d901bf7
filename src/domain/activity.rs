use crate::domain::definition::ActivityDefinition;
use crate::domain::iri::Iri;

/// A thing that was acted upon, identified by an IRI
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    id: Iri,
    definition: Option<ActivityDefinition>,
}

impl Activity {
    pub fn new(id: Iri, definition: Option<ActivityDefinition>) -> Self {
        Self { id, definition }
    }

    pub fn id(&self) -> &Iri {
        &self.id
    }

    pub fn definition(&self) -> Option<&ActivityDefinition> {
        self.definition.as_ref()
    }

    pub fn with_id(&self, id: Iri) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }

    pub fn with_definition(&self, definition: Option<ActivityDefinition>) -> Self {
        Self {
            definition,
            ..self.clone()
        }
    }
}
