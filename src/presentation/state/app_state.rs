use std::sync::Arc;

use crate::application::ports::StagingStore;
use crate::application::services::TranscriptionService;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub transcription_service: Arc<TranscriptionService>,
    pub staging_store: Arc<dyn StagingStore>,
    pub settings: Settings,
}
