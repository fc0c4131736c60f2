use crate::domain::{ElementKind, Monologue, Utterance, UtteranceTranscript};

pub const NO_MONOLOGUES_PLACEHOLDER: &str = "[No monologues found]";
pub const NO_TRANSCRIPT_PLACEHOLDER: &str = "[No transcript available]";

const BLOCK_SEPARATOR: &str = "\n\n";

/// Renders token-level monologues as `Speaker <label>: ...` blocks.
///
/// Monologues without a speaker index are labeled by their position. Within a
/// monologue a single space is written after an element only when the next
/// element is text, so punctuation stays attached to the preceding word.
pub fn render_monologues(monologues: &[Monologue]) -> String {
    if monologues.is_empty() {
        return NO_MONOLOGUES_PLACEHOLDER.to_string();
    }

    let mut transcript = String::new();
    for (position, monologue) in monologues.iter().enumerate() {
        transcript.push_str("Speaker ");
        transcript.push_str(&monologue.speaker_label(position));
        transcript.push_str(": ");

        let mut elements = monologue.elements.iter().peekable();
        while let Some(element) = elements.next() {
            if element.kind == ElementKind::Unknown {
                continue;
            }
            transcript.push_str(&element.value);
            if elements
                .peek()
                .is_some_and(|next| next.kind == ElementKind::Text)
            {
                transcript.push(' ');
            }
        }

        transcript.push_str(BLOCK_SEPARATOR);
    }

    transcript.trim().to_string()
}

/// Renders utterances one block per speaker turn, falling back to the flat
/// transcript text when the provider returned no utterances.
pub fn render_utterances(transcript: &UtteranceTranscript) -> String {
    let rendered = match transcript.utterances.as_deref() {
        Some(utterances) if !utterances.is_empty() => join_utterances(utterances),
        _ => transcript
            .text
            .as_deref()
            .filter(|text| !text.is_empty())
            .unwrap_or(NO_TRANSCRIPT_PLACEHOLDER)
            .to_string(),
    };

    rendered.trim().to_string()
}

fn join_utterances(utterances: &[Utterance]) -> String {
    utterances
        .iter()
        .map(|u| format!("Speaker {}: {}", u.speaker, u.text))
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}
