mod structured_transcript_test;
mod transcription_request_test;
