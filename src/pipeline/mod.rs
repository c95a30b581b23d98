//! Pipeline stages for Markdown-to-article conversion.
//!
//! Each submodule implements exactly one transformation step. Every stage
//! after `input` is a pure `&str → String` function, so each can be tested
//! without touching the filesystem.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ images ──▶ title ──▶ render
//! (read)    (strip)    (H1/H2)   (HTML)
//! ```
//!
//! 1. [`input`]  — check the path and read the whole file as UTF-8
//! 2. [`images`] — collect image records, remove image syntax
//! 3. [`title`]  — pick the title; drop the H1 line if that was the source
//! 4. [`render`] — ordered regex passes producing paste-ready HTML

pub mod images;
pub mod input;
pub mod render;
pub mod title;

/// Keep at most `max_chars` characters of `s`.
pub(crate) fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_is_char_based() {
        assert_eq!(truncate_chars("日本語テキスト", 3), "日本語");
        assert_eq!(truncate_chars("short", 100), "short");
    }
}
