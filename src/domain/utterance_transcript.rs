use serde::Deserialize;

/// Utterance-level transcript returned by upload based providers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UtteranceTranscript {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub utterances: Option<Vec<Utterance>>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Utterance {
    pub speaker: String,
    #[serde(default)]
    pub text: String,
}

impl Utterance {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
        }
    }
}
