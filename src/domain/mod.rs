mod job;
mod job_status;
mod storage_path;
mod structured_transcript;
mod transcription_provider;
mod transcription_request;
mod upload_id;
mod utterance_transcript;

pub use job::ProviderJob;
pub use job_status::JobStatus;
pub use storage_path::StoragePath;
pub use structured_transcript::{Element, ElementKind, Monologue, StructuredTranscript};
pub use transcription_provider::TranscriptionProvider;
pub use transcription_request::{TranscriptionOptions, TranscriptionRequest, parse_punctuate};
pub use upload_id::UploadId;
pub use utterance_transcript::{Utterance, UtteranceTranscript};
