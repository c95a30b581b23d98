//! Image extraction: pull every `![alt](path)` out of the Markdown.
//!
//! The first image becomes the article cover and the rest are re-inserted by
//! hand on the publishing side, so each record carries the line of text it
//! followed (`after_text`) as a placement hint. The returned Markdown has all
//! image spans removed so the HTML renderer never sees them.

use crate::output::ImageRecord;
use crate::pipeline::truncate_chars;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::debug;

static RE_IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

static RE_EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Extract all images and return `(images, markdown_without_images)`.
///
/// Relative paths are joined onto `base_dir`; absolute paths are kept as
/// written. Nothing touches the filesystem.
pub fn extract_images(
    markdown: &str,
    base_dir: &Path,
    max_context_chars: usize,
) -> (Vec<ImageRecord>, String) {
    let mut images = Vec::new();
    // Running (byte, char) cursor so offsets are counted once, not per match.
    let mut last_byte = 0usize;
    let mut last_char = 0usize;

    for caps in RE_IMAGE.captures_iter(markdown) {
        let Some(m) = caps.get(0) else { continue };
        last_char += markdown[last_byte..m.start()].chars().count();
        last_byte = m.start();

        images.push(ImageRecord {
            path: resolve_image_path(&caps[2], base_dir),
            alt: caps[1].to_string(),
            after_text: preceding_line(&markdown[..m.start()], max_context_chars),
            position: last_char,
        });
    }
    debug!("Found {} image reference(s)", images.len());

    let stripped = RE_IMAGE.replace_all(markdown, "");
    let cleaned = RE_EXCESS_NEWLINES.replace_all(&stripped, "\n\n").into_owned();

    (images, cleaned)
}

/// Join a relative image path onto `base_dir`.
///
/// `.` segments and doubled separators are normalised away; `..` is kept.
fn resolve_image_path(raw: &str, base_dir: &Path) -> String {
    let path = Path::new(raw);
    if path.is_absolute() {
        return raw.to_string();
    }
    base_dir
        .join(path)
        .components()
        .collect::<PathBuf>()
        .to_string_lossy()
        .into_owned()
}

/// Last non-blank line of `before`, truncated to `max_chars` characters.
fn preceding_line(before: &str, max_chars: usize) -> String {
    before
        .trim()
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .last()
        .map(|line| truncate_chars(line, max_chars))
        .unwrap_or_default()
}
