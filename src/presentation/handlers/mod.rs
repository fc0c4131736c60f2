mod health;
mod transcribe;

pub use health::health_handler;
pub use transcribe::{
    ErrorResponse, INVALID_PROVIDER_MESSAGE, NO_FILE_MESSAGE, TRANSCRIPTION_FAILED_MESSAGE,
    TranscribeResponse, UPLOAD_READ_FAILED_MESSAGE, transcribe_handler,
};
