//! Result types produced by a parse.
//!
//! Field names and order here are the JSON wire format consumed by the
//! publishing side, so renaming a field is a breaking change.

use serde::{Deserialize, Serialize};

/// One image reference found in the source Markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Image path joined onto the base directory, or as written if absolute.
    pub path: String,
    /// Alt text between the brackets; may be empty.
    pub alt: String,
    /// Last non-blank line before the image, truncated. Empty at document start.
    pub after_text: String,
    /// Character offset of the `![` in the text the image was found in.
    ///
    /// Later pipeline steps may remove text (the H1 title line), so treat
    /// this as a placement hint rather than an index into the output.
    pub position: usize,
}

/// The complete publishing payload for one Markdown document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub title: String,
    /// Path of the first image in document order.
    pub cover_image: Option<String>,
    /// Every image after the cover, in document order.
    pub content_images: Vec<ImageRecord>,
    /// HTML fragment with the title H1 and all images removed.
    pub html: String,
    /// Absolute path of the parsed file.
    pub source_file: String,
}

/// Split extracted images into the cover path and the remaining content images.
pub fn split_cover(images: Vec<ImageRecord>) -> (Option<String>, Vec<ImageRecord>) {
    let mut iter = images.into_iter();
    let cover = iter.next().map(|img| img.path);
    (cover, iter.collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str) -> ImageRecord {
        ImageRecord {
            path: path.into(),
            alt: String::new(),
            after_text: String::new(),
            position: 0,
        }
    }

    #[test]
    fn split_cover_empty() {
        let (cover, rest) = split_cover(vec![]);
        assert!(cover.is_none());
        assert!(rest.is_empty());
    }

    #[test]
    fn split_cover_single() {
        let (cover, rest) = split_cover(vec![record("/a.png")]);
        assert_eq!(cover.as_deref(), Some("/a.png"));
        assert!(rest.is_empty());
    }

    #[test]
    fn split_cover_keeps_order() {
        let (cover, rest) = split_cover(vec![record("/a.png"), record("/b.png"), record("/c.png")]);
        assert_eq!(cover.as_deref(), Some("/a.png"));
        let paths: Vec<&str> = rest.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, ["/b.png", "/c.png"]);
    }

    #[test]
    fn json_field_order() {
        let result = ParseResult {
            title: "T".into(),
            cover_image: None,
            content_images: vec![],
            html: "<p>x</p>".into(),
            source_file: "/tmp/a.md".into(),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"title":"T","cover_image":null,"content_images":[],"html":"<p>x</p>","source_file":"/tmp/a.md"}"#
        );
    }
}
