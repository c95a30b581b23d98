//! Configuration types for Markdown parsing.
//!
//! Every knob lives in [`ParseConfig`], built via [`ParseConfigBuilder`].
//! The defaults reproduce the documented behaviour exactly, so callers that
//! never touch the builder get the standard payload.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Title used when the document has no usable title line.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Maximum length, in characters, of a title taken from a plain text line.
pub const MAX_TITLE_CHARS: usize = 100;

/// Maximum length, in characters, of an image's `after_text` hint.
pub const MAX_CONTEXT_CHARS: usize = 100;

/// Configuration for a Markdown → article conversion.
///
/// # Example
/// ```rust
/// use edgequake_md2article::ParseConfig;
///
/// let config = ParseConfig::builder()
///     .fallback_title("Draft")
///     .build()
///     .unwrap();
/// assert_eq!(config.fallback_title, "Draft");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Title returned when no heading or text line is found. Default: `"Untitled"`.
    pub fallback_title: String,

    /// Truncation limit for titles taken from a plain line. Default: 100.
    ///
    /// H1/H2 titles are never truncated.
    pub max_title_chars: usize,

    /// Truncation limit for `after_text` on image records. Default: 100.
    pub max_context_chars: usize,

    /// Directory that relative image paths are joined onto.
    ///
    /// `None` means the directory containing the parsed file.
    pub base_dir: Option<PathBuf>,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            fallback_title: DEFAULT_TITLE.to_string(),
            max_title_chars: MAX_TITLE_CHARS,
            max_context_chars: MAX_CONTEXT_CHARS,
            base_dir: None,
        }
    }
}

impl ParseConfig {
    /// Create a new builder for `ParseConfig`.
    pub fn builder() -> ParseConfigBuilder {
        ParseConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ParseConfig`].
#[derive(Debug)]
pub struct ParseConfigBuilder {
    config: ParseConfig,
}

impl ParseConfigBuilder {
    pub fn fallback_title(mut self, title: impl Into<String>) -> Self {
        self.config.fallback_title = title.into();
        self
    }

    pub fn max_title_chars(mut self, n: usize) -> Self {
        self.config.max_title_chars = n;
        self
    }

    pub fn max_context_chars(mut self, n: usize) -> Self {
        self.config.max_context_chars = n;
        self
    }

    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.base_dir = Some(dir.into());
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ParseConfig, ParseError> {
        let c = &self.config;
        if c.fallback_title.trim().is_empty() {
            return Err(ParseError::InvalidConfig(
                "Fallback title must not be blank".into(),
            ));
        }
        if c.max_title_chars == 0 {
            return Err(ParseError::InvalidConfig(
                "Title limit must be ≥ 1".into(),
            ));
        }
        if c.max_context_chars == 0 {
            return Err(ParseError::InvalidConfig(
                "Context limit must be ≥ 1".into(),
            ));
        }
        Ok(self.config)
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// What the caller wants printed for a parsed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// The full [`crate::output::ParseResult`] as pretty-printed JSON. (default)
    #[default]
    Json,
    /// Only the rendered HTML fragment.
    Html,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let c = ParseConfig::default();
        assert_eq!(c.fallback_title, "Untitled");
        assert_eq!(c.max_title_chars, 100);
        assert_eq!(c.max_context_chars, 100);
        assert!(c.base_dir.is_none());
    }

    #[test]
    fn builder_sets_fields() {
        let c = ParseConfig::builder()
            .fallback_title("Draft")
            .max_title_chars(20)
            .max_context_chars(10)
            .base_dir("/tmp/articles")
            .build()
            .unwrap();
        assert_eq!(c.fallback_title, "Draft");
        assert_eq!(c.max_title_chars, 20);
        assert_eq!(c.max_context_chars, 10);
        assert_eq!(c.base_dir, Some(PathBuf::from("/tmp/articles")));
    }

    #[test]
    fn builder_rejects_zero_limits() {
        assert!(ParseConfig::builder().max_title_chars(0).build().is_err());
        assert!(ParseConfig::builder().max_context_chars(0).build().is_err());
    }

    #[test]
    fn builder_rejects_blank_fallback() {
        let err = ParseConfig::builder().fallback_title("  ").build().unwrap_err();
        assert!(matches!(err, ParseError::InvalidConfig(_)));
    }

    #[test]
    fn output_format_defaults_to_json() {
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }
}
