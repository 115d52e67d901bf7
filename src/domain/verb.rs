use crate::domain::iri::Iri;
use crate::domain::language_map::LanguageMap;
use crate::error::Result;

/// Id of the reserved verb that voids a previously stored statement
pub const VOID_VERB_ID: &str = "http://adlnet.gov/expapi/verbs/voided";

/// The action an actor performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verb {
    id: Iri,
    display: Option<LanguageMap>,
}

impl Verb {
    pub fn new(id: Iri, display: Option<LanguageMap>) -> Self {
        Self { id, display }
    }

    /// The reserved "voided" verb
    pub fn void() -> Result<Self> {
        let id = Iri::from_string(VOID_VERB_ID)?;
        Ok(Self::new(id, Some(LanguageMap::create([("en-US", "voided")]))))
    }

    pub fn id(&self) -> &Iri {
        &self.id
    }

    pub fn display(&self) -> Option<&LanguageMap> {
        self.display.as_ref()
    }

    pub fn is_void_verb(&self) -> bool {
        self.id.value() == VOID_VERB_ID
    }

    pub fn with_id(&self, id: Iri) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }

    pub fn with_display(&self, display: Option<LanguageMap>) -> Self {
        Self {
            display,
            ..self.clone()
        }
    }
}
