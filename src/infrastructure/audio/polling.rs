use std::future::Future;
use std::time::Duration;

use crate::application::ports::TranscriptionError;
use crate::domain::{JobStatus, ProviderJob, UtteranceTranscript};

/// Fixed-interval status polling, optionally capped at a number of checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: Option<u32>,
}

impl PollPolicy {
    pub fn new(interval: Duration, max_attempts: Option<u32>) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }

    /// A `max_attempts` of zero means no cap.
    pub fn from_settings(interval_ms: u64, max_attempts: u32) -> Self {
        Self::new(
            Duration::from_millis(interval_ms),
            (max_attempts > 0).then_some(max_attempts),
        )
    }
}

/// Anything a status check returns that carries the provider's job state.
pub trait JobSnapshot {
    fn provider_job(&self) -> ProviderJob;
}

impl JobSnapshot for ProviderJob {
    fn provider_job(&self) -> ProviderJob {
        self.clone()
    }
}

impl JobSnapshot for UtteranceTranscript {
    fn provider_job(&self) -> ProviderJob {
        ProviderJob::new(self.id.clone(), JobStatus::from_provider(&self.status))
            .with_failure_detail(self.error.clone())
    }
}

/// Calls `check` until the job completes, fails, or the attempt cap is hit.
/// Sleeps between checks so other requests keep running.
pub async fn poll_until_terminal<T, F, Fut>(
    job_id: &str,
    policy: PollPolicy,
    mut check: F,
) -> Result<T, TranscriptionError>
where
    T: JobSnapshot,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, TranscriptionError>>,
{
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        let snapshot = check().await?;
        let job = snapshot.provider_job();

        tracing::debug!(job_id, attempt = attempts, status = %job.status, "Polled job status");

        match job.status {
            JobStatus::Completed => return Ok(snapshot),
            JobStatus::Failed => {
                return Err(TranscriptionError::JobFailed {
                    job_id: job_id.to_string(),
                    reason: job
                        .failure_detail
                        .unwrap_or_else(|| "provider reported failure".to_string()),
                });
            }
            JobStatus::InProgress => {}
        }

        if policy.max_attempts.is_some_and(|max| attempts >= max) {
            return Err(TranscriptionError::PollTimeout {
                job_id: job_id.to_string(),
                attempts,
            });
        }

        tokio::time::sleep(policy.interval).await;
    }
}

/// Turns a non-2xx response into an error message carrying status and body.
pub(super) async fn error_for_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, String> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    Err(format!("status {}: {}", status, body))
}
