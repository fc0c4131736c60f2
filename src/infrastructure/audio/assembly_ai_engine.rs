use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs::File;
use tokio_util::io::ReaderStream;

use super::polling::{PollPolicy, error_for_status, poll_until_terminal};
use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::application::services::render_utterances;
use crate::domain::{TranscriptionOptions, UtteranceTranscript};

const DEFAULT_BASE_URL: &str = "https://api.assemblyai.com/v2";

/// AssemblyAI: upload the raw audio, create a transcript with speaker labels
/// and wait for it. The transcript record is deleted afterwards in the
/// background.
pub struct AssemblyAiEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    poll_policy: PollPolicy,
}

impl AssemblyAiEngine {
    pub fn new(api_key: String, base_url: Option<String>, poll_policy: PollPolicy) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            poll_policy,
        }
    }

    /// Streams the file body; it is never buffered whole.
    async fn upload(&self, audio: File) -> Result<String, TranscriptionError> {
        let response = self
            .client
            .post(format!("{}/upload", self.base_url))
            .header(reqwest::header::AUTHORIZATION, &self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(reqwest::Body::wrap_stream(ReaderStream::new(audio)))
            .send()
            .await
            .map_err(|e| TranscriptionError::SubmissionFailed(format!("upload: {}", e)))?;

        let response = error_for_status(response)
            .await
            .map_err(TranscriptionError::SubmissionFailed)?;

        let upload: UploadResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::MalformedResponse(format!("upload: {}", e)))?;

        Ok(upload.upload_url)
    }

    async fn create_transcript(
        &self,
        audio_url: &str,
    ) -> Result<UtteranceTranscript, TranscriptionError> {
        let request = TranscriptRequest {
            audio_url,
            speaker_labels: true,
        };

        let response = self
            .client
            .post(format!("{}/transcript", self.base_url))
            .header(reqwest::header::AUTHORIZATION, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TranscriptionError::SubmissionFailed(format!("create: {}", e)))?;

        let response = error_for_status(response)
            .await
            .map_err(TranscriptionError::SubmissionFailed)?;

        response
            .json()
            .await
            .map_err(|e| TranscriptionError::MalformedResponse(format!("create: {}", e)))
    }

    async fn fetch_transcript(
        &self,
        transcript_id: &str,
    ) -> Result<UtteranceTranscript, TranscriptionError> {
        let response = self
            .client
            .get(format!("{}/transcript/{}", self.base_url, transcript_id))
            .header(reqwest::header::AUTHORIZATION, &self.api_key)
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

    /// Fire-and-forget removal of the remote transcript record.
    fn schedule_cleanup(&self, transcript_id: String) {
        let client = self.client.clone();
        let api_key = self.api_key.clone();
        let url = format!("{}/transcript/{}", self.base_url, transcript_id);

        tokio::spawn(async move {
            let outcome = match client
                .delete(&url)
                .header(reqwest::header::AUTHORIZATION, api_key)
                .send()
                .await
            {
                Ok(response) => error_for_status(response).await.map(|_| ()),
                Err(e) => Err(format!("request: {}", e)),
            };

            match outcome {
                Ok(()) => tracing::debug!(transcript_id = %transcript_id, "Deleted remote transcript"),
                Err(e) => tracing::warn!(
                    transcript_id = %transcript_id,
                    error = %e,
                    "Failed to delete remote transcript"
                ),
            }
        });
    }
}

#[derive(Deserialize)]
struct UploadResponse {
    upload_url: String,
}

#[derive(Serialize)]
struct TranscriptRequest<'a> {
    audio_url: &'a str,
    speaker_labels: bool,
}

#[async_trait]
impl TranscriptionEngine for AssemblyAiEngine {
    #[tracing::instrument(skip(self, _options), fields(provider = "assemblyai"))]
    async fn transcribe(
        &self,
        audio_path: &Path,
        _options: &TranscriptionOptions,
    ) -> Result<String, TranscriptionError> {
        let audio = File::open(audio_path).await?;
        let bytes = audio.metadata().await?.len();
        tracing::info!(bytes, "Uploading audio to AssemblyAI");

        let audio_url = self.upload(audio).await?;
        let created = self.create_transcript(&audio_url).await?;
        tracing::info!(transcript_id = %created.id, status = %created.status, "AssemblyAI transcript created");

        let result = poll_until_terminal(&created.id, self.poll_policy, || {
            self.fetch_transcript(&created.id)
        })
        .await;

        self.schedule_cleanup(created.id.clone());

        let transcript = result?;
        tracing::info!(
            transcript_id = %transcript.id,
            utterances = transcript.utterances.as_ref().map_or(0, Vec::len),
            "AssemblyAI transcript completed"
        );

        Ok(render_utterances(&transcript))
    }
}
