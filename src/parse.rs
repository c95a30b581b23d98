//! Parse entry points.
//!
//! [`parse_file`] is what the CLI calls: read the file, run the pipeline,
//! attach the absolute source path. [`parse_str`] is the same pipeline over
//! an in-memory string, for callers that already hold the Markdown.

use crate::config::{OutputFormat, ParseConfig};
use crate::error::ParseError;
use crate::output::{split_cover, ParseResult};
use crate::pipeline::{images, input, render, title};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Parse a Markdown file into a publishing payload.
///
/// Relative image paths are resolved against the file's directory (or
/// `config.base_dir` when set), and `source_file` is the absolute path of
/// `path`.
///
/// # Errors
/// - [`ParseError::FileNotFound`] if `path` does not exist
/// - [`ParseError::PermissionDenied`] / [`ParseError::ReadFailed`] if it
///   cannot be read as UTF-8 text
pub fn parse_file(path: impl AsRef<Path>, config: &ParseConfig) -> Result<ParseResult, ParseError> {
    let path = path.as_ref();
    info!("Parsing markdown: {}", path.display());

    let content = input::read_markdown(path)?;
    let source_file = input::absolute_path(path)?;

    Ok(parse_str(&content, &source_file, config))
}

/// Run the pipeline over Markdown already in memory.
///
/// `source_file` is recorded verbatim in the result and its parent directory
/// is the default base for relative image paths. Pass an absolute path to
/// get absolute image paths.
pub fn parse_str(markdown: &str, source_file: &Path, config: &ParseConfig) -> ParseResult {
    let base_dir = config
        .base_dir
        .clone()
        .or_else(|| source_file.parent().map(Path::to_path_buf))
        .unwrap_or_else(PathBuf::new);

    // ── Step 1: Strip images ─────────────────────────────────────────────
    let (found, markdown) = images::extract_images(markdown, &base_dir, config.max_context_chars);

    // ── Step 2: Title (H1 removed from the body) ─────────────────────────
    let (title, markdown) =
        title::extract_title(&markdown, &config.fallback_title, config.max_title_chars);
    debug!("Title: {:?}", title);

    // ── Step 3: Render HTML ──────────────────────────────────────────────
    let html = render::markdown_to_html(&markdown);

    // ── Step 4: Assemble ─────────────────────────────────────────────────
    let (cover_image, content_images) = split_cover(found);
    info!(
        "Parsed '{}': cover={}, {} content image(s), {} bytes of HTML",
        title,
        cover_image.is_some(),
        content_images.len(),
        html.len()
    );

    ParseResult {
        title,
        cover_image,
        content_images,
        html,
        source_file: source_file.to_string_lossy().into_owned(),
    }
}

/// Serialise a result for printing.
///
/// JSON is pretty-printed with two-space indentation and non-ASCII text left
/// as-is; HTML is the bare fragment.
pub fn render_output(result: &ParseResult, format: OutputFormat) -> Result<String, ParseError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Html => Ok(result.html.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(md: &str) -> ParseResult {
        parse_str(md, Path::new("/articles/post.md"), &ParseConfig::default())
    }

    #[test]
    fn no_images_means_no_cover() {
        let r = parse("# Title\n\nBody");
        assert!(r.cover_image.is_none());
        assert!(r.content_images.is_empty());
    }

    #[test]
    fn single_image_is_cover_only() {
        let r = parse("# Title\n\n![hero](img/hero.png)\n\nBody");
        assert_eq!(r.cover_image.as_deref(), Some("/articles/img/hero.png"));
        assert!(r.content_images.is_empty());
    }

    #[test]
    fn later_images_are_content() {
        let r = parse("![c](c.png)\n\nFirst\n\n![a](a.png)\n\nSecond\n\n![b](/abs/b.png)");
        assert_eq!(r.cover_image.as_deref(), Some("/articles/c.png"));
        assert_eq!(r.content_images.len(), 2);
        assert_eq!(r.content_images[0].path, "/articles/a.png");
        assert_eq!(r.content_images[0].after_text, "First");
        assert_eq!(r.content_images[1].path, "/abs/b.png");
        assert_eq!(r.content_images[1].after_text, "Second");
        assert_eq!(r.title, "First");
    }

    #[test]
    fn h1_title_not_rendered() {
        let r = parse("# Hello\n\nWorld");
        assert_eq!(r.title, "Hello");
        assert_eq!(r.html, "<p>World</p>");
        assert!(!r.html.contains("Hello"));
    }

    #[test]
    fn h2_title_rendered() {
        let r = parse("## Hello\n\nWorld");
        assert_eq!(r.title, "Hello");
        assert!(r.html.contains("<h2>Hello</h2>"));
    }

    #[test]
    fn plain_text_document() {
        let r = parse("Just text here.");
        assert_eq!(r.title, "Just text here.");
        assert_eq!(r.html, "<p>Just text here.</p>");
    }

    #[test]
    fn image_only_document_falls_back() {
        let r = parse("![only](x.png)");
        assert_eq!(r.title, "Untitled");
        assert_eq!(r.html, "");
        assert_eq!(r.cover_image.as_deref(), Some("/articles/x.png"));
    }

    #[test]
    fn three_blank_lines_same_as_two() {
        assert_eq!(parse("A\n\n\n\nB").html, parse("A\n\nB").html);
    }

    #[test]
    fn base_dir_override() {
        let config = ParseConfig::builder().base_dir("/cdn/assets").build().unwrap();
        let r = parse_str("![x](x.png)", Path::new("/articles/post.md"), &config);
        assert_eq!(r.cover_image.as_deref(), Some("/cdn/assets/x.png"));
        assert_eq!(r.source_file, "/articles/post.md");
    }

    #[test]
    fn render_output_html_is_bare_fragment() {
        let r = parse("## A\n\nB");
        assert_eq!(render_output(&r, OutputFormat::Html).unwrap(), "<h2>A</h2><p>B</p>");
    }

    #[test]
    fn render_output_json_is_pretty_and_unescaped() {
        let r = parse("# Café\n\nTexte");
        let json = render_output(&r, OutputFormat::Json).unwrap();
        assert!(json.starts_with("{\n  \"title\": \"Café\""), "got: {json}");
        assert!(json.contains("\"cover_image\": null"));
        let back: ParseResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
