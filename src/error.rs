//! Error types for the edgequake-md2article library.
//!
//! Only input and output plumbing can fail. Malformed Markdown is never an
//! error: the pipeline leaves syntax it does not recognise as literal text,
//! so [`ParseError`] covers reading the file, building a config, and
//! serialising the result.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the edgequake-md2article library.
#[derive(Debug, Error)]
pub enum ParseError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{}'\nTry: chmod +r {path:?}", .path.display())]
    PermissionDenied { path: PathBuf },

    /// The file exists but could not be read as UTF-8 text.
    #[error("Failed to read '{}': {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Output errors ─────────────────────────────────────────────────────
    /// The result could not be encoded as JSON.
    #[error("Failed to serialise result: {0}")]
    OutputSerialization(#[from] serde_json::Error),

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display() {
        let e = ParseError::FileNotFound {
            path: PathBuf::from("missing.md"),
        };
        assert_eq!(e.to_string(), "File not found: missing.md");
    }

    #[test]
    fn read_failed_keeps_source() {
        let e = ParseError::ReadFailed {
            path: PathBuf::from("bad.md"),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        };
        let msg = e.to_string();
        assert!(msg.contains("bad.md"), "got: {msg}");
        assert!(msg.contains("UTF-8"), "got: {msg}");
        assert!(std::error::Error::source(&e).is_some());
    }

    #[test]
    fn invalid_config_display() {
        let e = ParseError::InvalidConfig("title limit must be ≥ 1".into());
        assert!(e.to_string().starts_with("Invalid configuration"));
    }
}
