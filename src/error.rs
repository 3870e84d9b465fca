//! Error types for the conversion pipeline
//!
//! One enum covers every fatal condition: unreadable input, malformed JSON,
//! CSV failures, and a line trace without coordinate sequences. Absent
//! optional fields are not errors; they default at the use site.

use std::path::PathBuf;

/// Errors raised while converting a space file
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// IO error reading or writing a file
    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input JSON could not be parsed
    #[error("malformed json in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// CSV read or write failure
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The line trace lacks a coordinate sequence
    #[error("line trace missing coordinate sequence '{0}'")]
    LineTrace(&'static str),

    /// Input document has an unexpected top-level shape
    #[error("unexpected document shape: {0}")]
    Shape(String),
}

impl ExportError {
    /// Create IO error for path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create JSON parse error for path
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// Create shape error
    pub fn shape(message: impl Into<String>) -> Self {
        Self::Shape(message.into())
    }
}

/// Result type alias for conversion operations
pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display() {
        let err = ExportError::io(
            "data/space.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("data/space.json"));
    }

    #[test]
    fn line_trace_error_display() {
        let err = ExportError::LineTrace("x");
        assert_eq!(
            err.to_string(),
            "line trace missing coordinate sequence 'x'"
        );
    }
}
