use duoscribe::domain::{ElementKind, Monologue, StructuredTranscript, UtteranceTranscript};

#[test]
fn given_rev_ai_transcript_json_when_deserializing_then_elements_keep_order_and_kind() {
    let json = r#"{
        "monologues": [{
            "speaker": 1,
            "elements": [
                {"type": "text", "value": "Hello", "ts": 0.5, "end_ts": 0.9, "confidence": 1.0},
                {"type": "punct", "value": ","},
                {"type": "text", "value": "world", "ts": 1.0, "end_ts": 1.4, "confidence": 0.9},
                {"type": "unknown", "value": "<inaudible>"}
            ]
        }]
    }"#;

    let transcript: StructuredTranscript = serde_json::from_str(json).unwrap();
    let kinds: Vec<ElementKind> = transcript.monologues[0]
        .elements
        .iter()
        .map(|e| e.kind)
        .collect();

    assert_eq!(transcript.monologues[0].speaker, Some(1));
    assert_eq!(
        kinds,
        vec![
            ElementKind::Text,
            ElementKind::Punct,
            ElementKind::Text,
            ElementKind::Unknown
        ]
    );
    assert_eq!(transcript.monologues[0].elements[2].value, "world");
}

#[test]
fn given_payload_without_monologues_when_deserializing_then_monologues_are_empty() {
    let transcript: StructuredTranscript = serde_json::from_str("{}").unwrap();

    assert!(transcript.monologues.is_empty());
}

#[test]
fn given_monologue_without_speaker_when_labeling_then_position_is_used() {
    let monologue = Monologue::default();

    assert_eq!(monologue.speaker_label(3), "3");
}

#[test]
fn given_monologue_with_speaker_when_labeling_then_speaker_index_wins() {
    let monologue = Monologue {
        speaker: Some(7),
        elements: Vec::new(),
    };

    assert_eq!(monologue.speaker_label(0), "7");
}

#[test]
fn given_assembly_ai_payload_when_deserializing_then_utterances_are_read() {
    let json = r#"{
        "id": "abc",
        "status": "completed",
        "text": "Hi Bye",
        "utterances": [
            {"speaker": "A", "text": "Hi", "start": 0, "end": 400, "confidence": 0.9, "words": []},
            {"speaker": "B", "text": "Bye", "start": 500, "end": 900, "confidence": 0.8, "words": []}
        ]
    }"#;

    let transcript: UtteranceTranscript = serde_json::from_str(json).unwrap();
    let utterances = transcript.utterances.unwrap();

    assert_eq!(transcript.id, "abc");
    assert_eq!(utterances.len(), 2);
    assert_eq!(utterances[1].speaker, "B");
    assert_eq!(utterances[1].text, "Bye");
}

#[test]
fn given_assembly_ai_payload_with_null_utterances_when_deserializing_then_none() {
    let json = r#"{"id": "abc", "status": "queued", "text": null, "utterances": null}"#;

    let transcript: UtteranceTranscript = serde_json::from_str(json).unwrap();

    assert!(transcript.utterances.is_none());
    assert!(transcript.text.is_none());
}
