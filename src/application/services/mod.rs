mod transcript_renderer;
mod transcription_service;

pub use transcript_renderer::{
    NO_MONOLOGUES_PLACEHOLDER, NO_TRANSCRIPT_PLACEHOLDER, render_monologues, render_utterances,
};
pub use transcription_service::{TranscribeError, TranscriptionService};
