use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::TranscriptionProvider;

use super::assembly_ai_engine::AssemblyAiEngine;
use super::polling::PollPolicy;
use super::rev_ai_engine::RevAiEngine;

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn create(
        provider: TranscriptionProvider,
        api_key: Option<String>,
        base_url: Option<String>,
        poll_policy: PollPolicy,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        let key = api_key.filter(|k| !k.trim().is_empty()).ok_or_else(|| {
            TranscriptionError::MissingCredentials(format!(
                "API key required for provider {}",
                provider
            ))
        })?;

        match provider {
            TranscriptionProvider::RevAi => {
                Ok(Arc::new(RevAiEngine::new(key, base_url, poll_policy)))
            }
            TranscriptionProvider::AssemblyAi => {
                Ok(Arc::new(AssemblyAiEngine::new(key, base_url, poll_policy)))
            }
        }
    }
}
