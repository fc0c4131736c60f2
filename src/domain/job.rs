use super::JobStatus;

/// A transcription job as observed on the provider side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderJob {
    pub id: String,
    pub status: JobStatus,
    pub failure_detail: Option<String>,
}

impl ProviderJob {
    pub fn new(id: impl Into<String>, status: JobStatus) -> Self {
        Self {
            id: id.into(),
            status,
            failure_detail: None,
        }
    }

    pub fn with_failure_detail(mut self, detail: Option<String>) -> Self {
        self.failure_detail = detail;
        self
    }
}
