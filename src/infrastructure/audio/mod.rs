mod assembly_ai_engine;
mod polling;
mod rev_ai_engine;
mod transcription_engine_factory;

pub use assembly_ai_engine::AssemblyAiEngine;
pub use polling::{JobSnapshot, PollPolicy, poll_until_terminal};
pub use rev_ai_engine::RevAiEngine;
pub use transcription_engine_factory::TranscriptionEngineFactory;
