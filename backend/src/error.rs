use std::fmt;

/// Anything that stops a remote analysis from producing a usable result.
///
/// The variants exist for the server log. Callers outside the analysis
/// service treat every variant the same way and only ever show the generic
/// failure message to the user.
#[derive(Debug)]
pub enum AnalysisError {
    /// The request never got a response (connection, TLS, timeout).
    Transport(String),
    /// The service answered with a non-success status.
    Status { status: u16, body: String },
    /// The service answered but produced no text candidate.
    EmptyResponse,
    /// The generated text is not JSON.
    MalformedJson(String),
    /// The generated JSON does not fit the analysis result shape.
    Schema(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::Transport(msg) => write!(f, "Request failed: {}", msg),
            AnalysisError::Status { status, body } => {
                write!(f, "API error ({}): {}", status, body)
            }
            AnalysisError::EmptyResponse => write!(f, "Model returned no content"),
            AnalysisError::MalformedJson(msg) => write!(f, "Model output is not JSON: {}", msg),
            AnalysisError::Schema(msg) => write!(f, "Model output does not match schema: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        AnalysisError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;
        match err.classify() {
            Category::Data => AnalysisError::Schema(err.to_string()),
            Category::Syntax | Category::Eof | Category::Io => {
                AnalysisError::MalformedJson(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::analysis::AnalysisResult;

    #[test]
    fn test_syntax_error_is_malformed_json() {
        let err = serde_json::from_str::<AnalysisResult>("{not json").unwrap_err();
        assert!(matches!(AnalysisError::from(err), AnalysisError::MalformedJson(_)));
    }

    #[test]
    fn test_truncated_json_is_malformed_json() {
        let err = serde_json::from_str::<AnalysisResult>(r#"{"summary": "o"#).unwrap_err();
        assert!(matches!(AnalysisError::from(err), AnalysisError::MalformedJson(_)));
    }

    #[test]
    fn test_shape_mismatch_is_schema_error() {
        let err = serde_json::from_str::<AnalysisResult>(r#"{"summary": 3}"#).unwrap_err();
        assert!(matches!(AnalysisError::from(err), AnalysisError::Schema(_)));
    }

    #[test]
    fn test_status_display() {
        let err = AnalysisError::Status {
            status: 503,
            body: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "API error (503): overloaded");
    }
}
