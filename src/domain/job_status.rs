use std::fmt;

/// Provider job state normalized to the three states the adapters act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobStatus {
    InProgress,
    Completed,
    Failed,
}

impl JobStatus {
    /// Maps a provider specific status string. Unknown values are treated as
    /// still running so that polling continues.
    pub fn from_provider(status: &str) -> Self {
        match status.to_ascii_lowercase().as_str() {
            "completed" | "transcribed" => JobStatus::Completed,
            "failed" | "error" => JobStatus::Failed,
            _ => JobStatus::InProgress,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::InProgress => "IN_PROGRESS",
            JobStatus::Completed => "COMPLETED",
            JobStatus::Failed => "FAILED",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
