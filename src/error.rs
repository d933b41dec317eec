//! Structured error types for document import.
//!
//! Only the document as a whole can fail. Per-node problems never surface
//! here; they become [`Diagnostic`](crate::diagnostics::Diagnostic)s and the
//! build carries on.

use thiserror::Error;

/// The error type returned by the fallible public API.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The input could not be decoded into a document at all.
    #[error("Failed to parse document: {source}{hint}")]
    Parse {
        source: serde_json::Error,
        /// Pre-formatted hint suffix, empty when there is nothing useful to say.
        hint: String,
    },

    /// The input decoded, but there is no root node to build from.
    #[error("Malformed document: no root node")]
    MissingRoot,

    /// A build-defaults override file could not be decoded.
    #[error("Invalid build defaults: {source}")]
    Defaults { source: serde_json::Error },
}

impl ImportError {
    /// Whether this error means the document itself is unusable, as opposed
    /// to a problem with the surrounding configuration.
    pub fn is_malformed_document(&self) -> bool {
        matches!(self, ImportError::Parse { .. } | ImportError::MissingRoot)
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters."
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the document schema. Check field types."
            }
            serde_json::error::Category::Eof => "Unexpected end of input. Is the JSON truncated?",
            serde_json::error::Category::Io => "",
        };
        let hint = if hint.is_empty() {
            String::new()
        } else {
            format!("\n  Hint: {}", hint)
        };
        ImportError::Parse { source: e, hint }
    }
}
