use std::fmt;

use super::UploadId;

const FALLBACK_FILENAME: &str = "audio";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    /// Builds `<upload id>/<filename>` from the final component of the client
    /// supplied name, restricted to a filesystem safe character set.
    pub fn new(upload_id: &UploadId, filename: &str) -> Self {
        Self(format!(
            "{}/{}",
            upload_id.as_uuid(),
            sanitize_filename(filename)
        ))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn sanitize_filename(filename: &str) -> String {
    let last = filename.rsplit(['/', '\\']).next().unwrap_or_default();

    let cleaned: String = last
        .trim()
        .trim_start_matches('.')
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        cleaned
    }
}
