mod staging_store;
mod transcription_engine;

pub use staging_store::{StagingStore, StagingStoreError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
