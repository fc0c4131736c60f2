use std::path::Path;

use async_trait::async_trait;

use crate::domain::TranscriptionOptions;

/// A remote speech-to-text provider that turns a local audio file into a
/// rendered, speaker attributed transcript.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        audio_path: &Path,
        options: &TranscriptionOptions,
    ) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("submission failed: {0}")]
    SubmissionFailed(String),
    #[error("job {job_id} failed: {reason}")]
    JobFailed { job_id: String, reason: String },
    #[error("job {job_id} still running after {attempts} status checks")]
    PollTimeout { job_id: String, attempts: u32 },
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
    #[error("missing credentials: {0}")]
    MissingCredentials(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("failed to read audio file: {0}")]
    Io(#[from] std::io::Error),
}
