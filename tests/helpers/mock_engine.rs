use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;

use duoscribe::application::ports::{TranscriptionEngine, TranscriptionError};
use duoscribe::domain::TranscriptionOptions;

pub enum MockBehavior {
    Succeed(String),
    Fail,
    Panic,
    WaitFor(Arc<Notify>, String),
}

pub struct MockEngine {
    behavior: MockBehavior,
    calls: AtomicUsize,
    seen: Mutex<Vec<SeenCall>>,
}

#[derive(Debug, Clone)]
pub struct SeenCall {
    pub path: PathBuf,
    pub file_existed: bool,
    pub options: TranscriptionOptions,
}

impl MockEngine {
    pub fn new(behavior: MockBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn succeeding(transcript: &str) -> Arc<Self> {
        Self::new(MockBehavior::Succeed(transcript.to_string()))
    }

    pub fn failing() -> Arc<Self> {
        Self::new(MockBehavior::Fail)
    }

    pub fn panicking() -> Arc<Self> {
        Self::new(MockBehavior::Panic)
    }

    /// Blocks inside `transcribe` until the returned handle is notified.
    pub fn gated(transcript: &str) -> (Arc<Self>, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let engine = Self::new(MockBehavior::WaitFor(gate.clone(), transcript.to_string()));
        (engine, gate)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<SeenCall> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranscriptionEngine for MockEngine {
    async fn transcribe(
        &self,
        audio_path: &Path,
        options: &TranscriptionOptions,
    ) -> Result<String, TranscriptionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(SeenCall {
            path: audio_path.to_path_buf(),
            file_existed: audio_path.exists(),
            options: *options,
        });

        match &self.behavior {
            MockBehavior::Succeed(transcript) => Ok(transcript.clone()),
            MockBehavior::Fail => Err(TranscriptionError::JobFailed {
                job_id: "mock-job".to_string(),
                reason: "mock failure".to_string(),
            }),
            MockBehavior::Panic => panic!("mock engine exploded"),
            MockBehavior::WaitFor(gate, transcript) => {
                gate.notified().await;
                Ok(transcript.clone())
            }
        }
    }
}
