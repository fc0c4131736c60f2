use std::any::Any;
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;

use crate::application::ports::{StagingStore, TranscriptionEngine, TranscriptionError};
use crate::domain::{StoragePath, TranscriptionProvider, TranscriptionRequest};

/// Routes a staged upload to the engine for the selected provider and owns the
/// staged file until the request is finished with it.
pub struct TranscriptionService {
    engines: HashMap<TranscriptionProvider, Arc<dyn TranscriptionEngine>>,
    staging_store: Arc<dyn StagingStore>,
}

impl TranscriptionService {
    pub fn new(staging_store: Arc<dyn StagingStore>) -> Self {
        Self {
            engines: HashMap::new(),
            staging_store,
        }
    }

    pub fn with_engine(
        mut self,
        provider: TranscriptionProvider,
        engine: Arc<dyn TranscriptionEngine>,
    ) -> Self {
        self.engines.insert(provider, engine);
        self
    }

    /// Transcribes the staged upload and deletes it afterwards, whatever the
    /// outcome. Deletion failures are logged and do not change the result.
    #[tracing::instrument(
        skip_all,
        fields(provider = %request.provider, upload = %request.upload)
    )]
    pub async fn handle(&self, request: TranscriptionRequest) -> Result<String, TranscribeError> {
        let result = self.dispatch(&request).await;

        match &result {
            Ok(transcript) => {
                tracing::info!(chars = transcript.len(), "Transcription succeeded")
            }
            Err(e) => tracing::error!(error = %e, "Transcription failed"),
        }

        self.discard(&request.upload).await;
        result
    }

    /// Deletes a staged upload, logging instead of failing.
    pub async fn discard(&self, upload: &StoragePath) {
        match self.staging_store.delete(upload).await {
            Ok(()) => tracing::info!(path = %upload, "Deleted staged upload"),
            Err(e) => tracing::warn!(error = %e, path = %upload, "Failed to delete staged upload"),
        }
    }

    async fn dispatch(&self, request: &TranscriptionRequest) -> Result<String, TranscribeError> {
        let engine = self
            .engines
            .get(&request.provider)
            .ok_or(TranscribeError::ProviderNotConfigured(request.provider))?;

        let audio_path = self.staging_store.resolve(&request.upload);
        tracing::debug!(path = %audio_path.display(), punctuate = request.options.punctuate, "Dispatching to engine");

        AssertUnwindSafe(engine.transcribe(&audio_path, &request.options))
            .catch_unwind()
            .await
            .map_err(|panic| TranscribeError::Aborted(panic_message(panic.as_ref())))?
            .map_err(TranscribeError::from)
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "engine panicked".to_string()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscribeError {
    #[error("no engine configured for provider {0}")]
    ProviderNotConfigured(TranscriptionProvider),
    #[error(transparent)]
    Transcription(#[from] TranscriptionError),
    #[error("transcription aborted: {0}")]
    Aborted(String),
}
