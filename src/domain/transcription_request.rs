use super::{StoragePath, TranscriptionProvider};

/// Per-engine options resolved from the request form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscriptionOptions {
    pub punctuate: bool,
}

impl Default for TranscriptionOptions {
    fn default() -> Self {
        Self { punctuate: true }
    }
}

#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub upload: StoragePath,
    pub provider: TranscriptionProvider,
    pub options: TranscriptionOptions,
}

impl TranscriptionRequest {
    pub fn new(upload: StoragePath, provider: TranscriptionProvider, punctuate: bool) -> Self {
        Self {
            upload,
            provider,
            options: TranscriptionOptions { punctuate },
        }
    }
}

/// Interprets the `punctuate` form value. Only the exact string `"false"`
/// turns punctuation off.
pub fn parse_punctuate(value: Option<&str>) -> bool {
    value != Some("false")
}
