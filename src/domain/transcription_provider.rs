use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TranscriptionProvider {
    #[default]
    RevAi,
    AssemblyAi,
}

impl TranscriptionProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptionProvider::RevAi => "revai",
            TranscriptionProvider::AssemblyAi => "assemblyai",
        }
    }
}

impl FromStr for TranscriptionProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "revai" => Ok(TranscriptionProvider::RevAi),
            "assemblyai" => Ok(TranscriptionProvider::AssemblyAi),
            other => Err(format!("Invalid transcription provider: {}", other)),
        }
    }
}

impl fmt::Display for TranscriptionProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
