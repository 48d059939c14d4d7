use serde::{Deserialize, Serialize};

/// Only this many characters of the uploaded text are analyzed. Anything
/// after is dropped silently, before upload and again on the server.
pub const MAX_CSV_CHARS: usize = 20_000;

/// Returns the longest prefix of `text` with at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Body of `POST /api/analysis`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Name of the uploaded file, used for logging only.
    #[serde(default)]
    pub file_name: String,
    /// File text, at most `MAX_CSV_CHARS` characters when built with `new`.
    pub csv: String,
}

impl AnalyzeRequest {
    /// Builds a request carrying only the part of `csv` that will be analyzed,
    /// so large uploads stay well under the server's body limit.
    pub fn new(file_name: impl Into<String>, csv: &str) -> Self {
        AnalyzeRequest {
            file_name: file_name.into(),
            csv: truncate_chars(csv, MAX_CSV_CHARS).to_string(),
        }
    }
}

/// Error body returned by `POST /api/analysis`. Carries a fixed message,
/// never the underlying cause.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnalyzeFailure {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_chars("a,b\n1,2", MAX_CSV_CHARS), "a,b\n1,2");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let text = "é".repeat(5);
        assert_eq!(truncate_chars(&text, 3), "ééé");
        assert_eq!(truncate_chars(&text, 5), text);
    }

    #[test]
    fn test_new_request_truncates_large_upload() {
        // quotes and newlines double in size once JSON-escaped
        let csv = "\"a\",\"b\"\n".repeat(1024 * 1024);
        let request = AnalyzeRequest::new("big.csv", &csv);
        assert_eq!(request.csv.chars().count(), MAX_CSV_CHARS);
        assert!(csv.starts_with(&request.csv));

        let body = serde_json::to_vec(&request).unwrap();
        assert!(body.len() < 64 * 1024);
    }

    #[test]
    fn test_new_request_keeps_small_upload() {
        let request = AnalyzeRequest::new("small.csv", "a,b\n1,2");
        assert_eq!(request.file_name, "small.csv");
        assert_eq!(request.csv, "a,b\n1,2");
    }
}
