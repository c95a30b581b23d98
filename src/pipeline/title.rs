//! Title extraction.
//!
//! Rules, first match wins (blank lines skipped):
//!
//! | Line            | Title                  | Markdown          |
//! |-----------------|------------------------|-------------------|
//! | `# Heading`     | heading text           | line removed      |
//! | `## Heading`    | heading text           | unchanged         |
//! | anything but `![` | line, truncated      | unchanged         |
//! | (none)          | fallback title         | unchanged         |
//!
//! An H1 is consumed because the publishing surface renders the title in its
//! own field; leaving it in the body would print it twice. An H2 stays in the
//! body as a section heading.

use crate::pipeline::truncate_chars;
use tracing::debug;

/// Extract the title and return `(title, markdown)`.
///
/// Only the H1 case changes the Markdown. In that case the returned text is
/// the whitespace-trimmed input with the heading line dropped.
pub fn extract_title(markdown: &str, fallback_title: &str, max_chars: usize) -> (String, String) {
    let lines: Vec<&str> = markdown.trim().split('\n').collect();

    for (idx, line) in lines.iter().enumerate() {
        let stripped = line.trim();
        if stripped.is_empty() {
            continue;
        }

        if let Some(rest) = stripped.strip_prefix("# ") {
            debug!("Title taken from H1 on line {}", idx + 1);
            let remaining: Vec<&str> = lines
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != idx)
                .map(|(_, l)| *l)
                .collect();
            return (rest.trim().to_string(), remaining.join("\n"));
        }

        if let Some(rest) = stripped.strip_prefix("## ") {
            debug!("Title taken from H2 on line {}", idx + 1);
            return (rest.trim().to_string(), markdown.to_string());
        }

        if !stripped.starts_with("![") {
            return (truncate_chars(stripped, max_chars), markdown.to_string());
        }
    }

    (fallback_title.to_string(), markdown.to_string())
}
