use std::time::Duration;

use duoscribe::application::ports::TranscriptionError;
use duoscribe::domain::TranscriptionProvider;
use duoscribe::infrastructure::audio::{PollPolicy, TranscriptionEngineFactory};

fn policy() -> PollPolicy {
    PollPolicy::new(Duration::from_secs(1), Some(3))
}

#[test]
fn given_api_key_when_creating_each_provider_then_engine_is_built() {
    for provider in [TranscriptionProvider::RevAi, TranscriptionProvider::AssemblyAi] {
        let engine = TranscriptionEngineFactory::create(
            provider,
            Some("secret".to_string()),
            None,
            policy(),
        );
        assert!(engine.is_ok(), "{provider}");
    }
}

#[test]
fn given_missing_api_key_when_creating_engine_then_missing_credentials() {
    let result =
        TranscriptionEngineFactory::create(TranscriptionProvider::RevAi, None, None, policy());

    assert!(matches!(
        result,
        Err(TranscriptionError::MissingCredentials(_))
    ));
}

#[test]
fn given_blank_api_key_when_creating_engine_then_missing_credentials() {
    let result = TranscriptionEngineFactory::create(
        TranscriptionProvider::AssemblyAi,
        Some("   ".to_string()),
        None,
        policy(),
    );

    assert!(matches!(
        result,
        Err(TranscriptionError::MissingCredentials(_))
    ));
}
