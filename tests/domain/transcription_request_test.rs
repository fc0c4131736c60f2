use duoscribe::domain::{
    StoragePath, TranscriptionOptions, TranscriptionProvider, TranscriptionRequest, UploadId,
    parse_punctuate,
};

#[test]
fn given_no_punctuate_field_when_parsing_then_punctuation_is_on() {
    assert!(parse_punctuate(None));
}

#[test]
fn given_false_when_parsing_punctuate_then_punctuation_is_off() {
    assert!(!parse_punctuate(Some("false")));
}

#[test]
fn given_other_values_when_parsing_punctuate_then_punctuation_is_on() {
    for raw in ["true", "", "no", "FALSE", "0", " false", "false\n"] {
        assert!(parse_punctuate(Some(raw)), "{raw:?}");
    }
}

#[test]
fn given_request_parts_when_building_then_options_carry_punctuate() {
    let upload = StoragePath::new(&UploadId::new(), "a.wav");
    let request = TranscriptionRequest::new(upload.clone(), TranscriptionProvider::AssemblyAi, false);

    assert_eq!(request.upload, upload);
    assert_eq!(request.provider, TranscriptionProvider::AssemblyAi);
    assert_eq!(request.options, TranscriptionOptions { punctuate: false });
}

#[test]
fn given_default_options_when_created_then_punctuation_is_on() {
    assert!(TranscriptionOptions::default().punctuate);
}
