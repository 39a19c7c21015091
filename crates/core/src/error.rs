//! Core Error Types
//!
//! Classified failures of the prompt-to-structured-data pipeline. Every variant
//! is terminal for a single run; callers decide how to present them but must
//! not swallow any of them.

use thiserror::Error;

/// Number of characters carried in diagnostic snippets.
pub const SNIPPET_CHARS: usize = 200;

/// Error type for response extraction and schema validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The model returned no usable text
    #[error("Model returned an empty response")]
    EmptyResponse,

    /// No `{`...`}` span could be located in the response
    #[error("No JSON object found in response (first 200 chars: {})", escape_newlines(.snippet))]
    NoJsonFound { snippet: String },

    /// A candidate JSON span was found but could not be decoded
    #[error(
        "Response could not be decoded as JSON: {message} (first 200 chars: {})",
        escape_newlines(.snippet)
    )]
    UnparsableJson { snippet: String, message: String },

    /// Decoded JSON does not have the task record shape
    #[error("Schema error: {0}")]
    SchemaError(String),

    /// The model extracted zero tasks
    #[error("No tasks were extracted from the transcript")]
    EmptyTaskSet,
}

/// Result type alias for extraction errors
pub type ExtractionResult<T> = Result<T, ExtractionError>;

impl ExtractionError {
    /// Create a no-JSON error carrying the head of `text`
    pub fn no_json_found(text: &str) -> Self {
        Self::NoJsonFound {
            snippet: snippet(text),
        }
    }

    /// Create an unparsable-JSON error carrying the head of the attempted span
    pub fn unparsable(attempted: &str, err: &serde_json::Error) -> Self {
        Self::UnparsableJson {
            snippet: snippet(attempted),
            message: err.to_string(),
        }
    }

    /// Create a schema error
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::SchemaError(msg.into())
    }

    /// Short machine-friendly name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyResponse => "EmptyResponse",
            Self::NoJsonFound { .. } => "NoJsonFound",
            Self::UnparsableJson { .. } => "UnparsableJson",
            Self::SchemaError(_) => "SchemaError",
            Self::EmptyTaskSet => "EmptyTaskSet",
        }
    }

    /// Diagnostic snippet, when the variant carries one.
    pub fn snippet(&self) -> Option<&str> {
        match self {
            Self::NoJsonFound { snippet } | Self::UnparsableJson { snippet, .. } => Some(snippet),
            _ => None,
        }
    }
}

/// First [`SNIPPET_CHARS`] characters of `text`, cut on a char boundary.
pub fn snippet(text: &str) -> String {
    text.chars().take(SNIPPET_CHARS).collect()
}

fn escape_newlines(text: &str) -> String {
    text.replace('\n', "\\n")
}

impl From<ExtractionError> for String {
    fn from(err: ExtractionError) -> String {
        err.to_string()
    }
}
