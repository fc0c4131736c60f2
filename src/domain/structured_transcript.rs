use serde::Deserialize;

/// Token-level transcript returned by polling providers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StructuredTranscript {
    #[serde(default)]
    pub monologues: Vec<Monologue>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Monologue {
    #[serde(default)]
    pub speaker: Option<u32>,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Monologue {
    pub fn speaker_label(&self, position: usize) -> String {
        match self.speaker {
            Some(speaker) => speaker.to_string(),
            None => position.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(default)]
    pub value: String,
}

impl Element {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Text,
            value: value.into(),
        }
    }

    pub fn punct(value: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Punct,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Punct,
    #[serde(other)]
    Unknown,
}
