use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart;
use serde::{Deserialize, Serialize};
use tokio_util::io::ReaderStream;

use super::polling::{PollPolicy, error_for_status, poll_until_terminal};
use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::application::services::render_monologues;
use crate::domain::{JobStatus, ProviderJob, StructuredTranscript, TranscriptionOptions};

const DEFAULT_BASE_URL: &str = "https://api.rev.ai/speechtotext/v1";
const TRANSCRIPT_MEDIA_TYPE: &str = "application/vnd.rev.transcript.v1.0+json";

/// Rev.ai asynchronous jobs: submit the file, poll the job, then fetch the
/// token-level transcript.
pub struct RevAiEngine {
    client: reqwest::Client,
    access_token: String,
    base_url: String,
    poll_policy: PollPolicy,
}

impl RevAiEngine {
    pub fn new(access_token: String, base_url: Option<String>, poll_policy: PollPolicy) -> Self {
        Self {
            client: reqwest::Client::new(),
            access_token,
            base_url: base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            poll_policy,
        }
    }

    async fn submit(
        &self,
        audio_path: &Path,
        options: &TranscriptionOptions,
    ) -> Result<ProviderJob, TranscriptionError> {
        let file = tokio::fs::File::open(audio_path).await?;
        let length = file.metadata().await?.len();
        let file_name = audio_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("audio")
            .to_string();

        let job_options = serde_json::to_string(&RevAiJobOptions {
            skip_punctuation: !options.punctuate,
        })
        .map_err(|e| TranscriptionError::SubmissionFailed(format!("options: {}", e)))?;

        let form = multipart::Form::new()
            .part(
                "media",
                multipart::Part::stream_with_length(
                    reqwest::Body::wrap_stream(ReaderStream::new(file)),
                    length,
                )
                .file_name(file_name),
            )
            .text("options", job_options);

        let response = self
            .client
            .post(format!("{}/jobs", self.base_url))
            .bearer_auth(&self.access_token)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::SubmissionFailed(format!("request: {}", e)))?;

        let response = error_for_status(response)
            .await
            .map_err(TranscriptionError::SubmissionFailed)?;

        let job: RevAiJob = response
            .json()
            .await
            .map_err(|e| TranscriptionError::MalformedResponse(format!("submit: {}", e)))?;

        Ok(job.into())
    }

    async fn job_details(&self, job_id: &str) -> Result<ProviderJob, TranscriptionError> {
        let response = self
            .client
            .get(format!("{}/jobs/{}", self.base_url, job_id))
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        let response = error_for_status(response)
            .await
            .map_err(TranscriptionError::ApiRequestFailed)?;

        let job: RevAiJob = response
            .json()
            .await
            .map_err(|e| TranscriptionError::MalformedResponse(format!("job details: {}", e)))?;

        Ok(job.into())
    }

    async fn transcript(&self, job_id: &str) -> Result<StructuredTranscript, TranscriptionError> {
        let response = self
            .client
            .get(format!("{}/jobs/{}/transcript", self.base_url, job_id))
            .bearer_auth(&self.access_token)
            .header(reqwest::header::ACCEPT, TRANSCRIPT_MEDIA_TYPE)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        let response = error_for_status(response)
            .await
            .map_err(TranscriptionError::ApiRequestFailed)?;

        response
            .json()
            .await
            .map_err(|e| TranscriptionError::MalformedResponse(format!("transcript: {}", e)))
    }
}

#[derive(Serialize)]
struct RevAiJobOptions {
    skip_punctuation: bool,
}

#[derive(Deserialize)]
struct RevAiJob {
    id: String,
    status: String,
    #[serde(default)]
    failure_detail: Option<String>,
}

impl From<RevAiJob> for ProviderJob {
    fn from(job: RevAiJob) -> Self {
        ProviderJob::new(job.id, JobStatus::from_provider(&job.status))
            .with_failure_detail(job.failure_detail)
    }
}

#[async_trait]
impl TranscriptionEngine for RevAiEngine {
    #[tracing::instrument(skip(self, options), fields(provider = "revai"))]
    async fn transcribe(
        &self,
        audio_path: &Path,
        options: &TranscriptionOptions,
    ) -> Result<String, TranscriptionError> {
        tracing::info!(punctuate = options.punctuate, "Submitting Rev.ai job");
        let job = self.submit(audio_path, options).await?;
        tracing::info!(job_id = %job.id, status = %job.status, "Rev.ai job submitted");

        let completed =
            poll_until_terminal(&job.id, self.poll_policy, || self.job_details(&job.id)).await?;

        let transcript = self.transcript(&completed.id).await?;
        tracing::info!(
            job_id = %completed.id,
            monologues = transcript.monologues.len(),
            "Rev.ai transcript fetched"
        );

        Ok(render_monologues(&transcript.monologues))
    }
}
