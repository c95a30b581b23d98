//! Markdown → HTML rendering for rich-text paste.
//!
//! The publishing editor only understands a small set of constructs, so this
//! is not a CommonMark renderer. It applies 10 ordered rules, each a regex or
//! string pass over the output of the previous one:
//!
//! 1. `## ` lines → `<h2>`
//! 2. `### ` lines → `<h3>`
//! 3. `**bold**` → `<strong>`
//! 4. `*italic*` → `<em>` (after bold, so `**` pairs are already gone)
//! 5. `[text](url)` → `<a href>`
//! 6. `> ` lines → `<blockquote>`
//! 7. `- ` lines → `<li>`
//! 8. `1. ` lines → `<li>`
//! 9. runs of `<li>` → one `<ul>`
//! 10. blank-line separated blocks → `<p>` (block tags pass through)
//!
//! ## Known limitations
//!
//! Passes run over already-substituted text, so constructs that overlap
//! across passes (emphasis inside link text, stray `*`) can produce odd
//! spans. Numbered lists come out as `<ul>`: numbering is not preserved.
//! Nothing is HTML-escaped.
//!
//! A list container closes right after its last `</li>`. The newline that
//! followed the last item stays outside the `<ul>`, so text after a list
//! becomes its own `<p>` rather than being folded into the list block.

use once_cell::sync::Lazy;
use regex::Regex;

/// Block-level tags that paragraph segmentation leaves untouched.
const BLOCK_TAGS: [&str; 5] = ["<h2>", "<h3>", "<blockquote>", "<ul>", "<ol>"];

/// Convert Markdown (title and images already removed) to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> String {
    let s = render_h2(markdown);
    let s = render_h3(&s);
    let s = render_bold(&s);
    let s = render_italic(&s);
    let s = render_links(&s);
    let s = render_blockquotes(&s);
    let s = render_bullet_items(&s);
    let s = render_numbered_items(&s);
    let s = wrap_list_runs(&s);
    render_paragraphs(&s)
}

// ── Rules 1–2: Headings ─────────────────────────────────────────────────────

static RE_H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.+)$").unwrap());
static RE_H3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### (.+)$").unwrap());

fn render_h2(input: &str) -> String {
    RE_H2.replace_all(input, "<h2>${1}</h2>").into_owned()
}

fn render_h3(input: &str) -> String {
    RE_H3.replace_all(input, "<h3>${1}</h3>").into_owned()
}

// ── Rules 3–5: Inline spans ─────────────────────────────────────────────────

static RE_BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static RE_ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static RE_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

fn render_bold(input: &str) -> String {
    RE_BOLD.replace_all(input, "<strong>${1}</strong>").into_owned()
}

fn render_italic(input: &str) -> String {
    RE_ITALIC.replace_all(input, "<em>${1}</em>").into_owned()
}

fn render_links(input: &str) -> String {
    RE_LINK
        .replace_all(input, r#"<a href="${2}">${1}</a>"#)
        .into_owned()
}

// ── Rule 6: Blockquotes ─────────────────────────────────────────────────────

static RE_QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^> (.+)$").unwrap());

fn render_blockquotes(input: &str) -> String {
    RE_QUOTE
        .replace_all(input, "<blockquote>${1}</blockquote>")
        .into_owned()
}

// ── Rules 7–9: Lists ────────────────────────────────────────────────────────

static RE_BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^- (.+)$").unwrap());
static RE_NUMBERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\d+\. (.+)$").unwrap());
// A run ends at its last `</li>`; the newline after it stays outside the
// `<ul>` so a following paragraph still splits off on the blank line.
static RE_LIST_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<li>.*?</li>(?:\n?<li>.*?</li>)*").unwrap());

fn render_bullet_items(input: &str) -> String {
    RE_BULLET.replace_all(input, "<li>${1}</li>").into_owned()
}

fn render_numbered_items(input: &str) -> String {
    RE_NUMBERED.replace_all(input, "<li>${1}</li>").into_owned()
}

fn wrap_list_runs(input: &str) -> String {
    RE_LIST_RUN.replace_all(input, "<ul>${0}</ul>").into_owned()
}

// ── Rule 10: Paragraphs ─────────────────────────────────────────────────────

fn render_paragraphs(input: &str) -> String {
    let mut html = String::with_capacity(input.len() + 64);
    for block in input.split("\n\n") {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }
        if BLOCK_TAGS.iter().any(|tag| block.starts_with(tag)) {
            html.push_str(block);
        } else {
            html.push_str("<p>");
            html.push_str(&block.replace('\n', "<br>"));
            html.push_str("</p>");
        }
    }
    html
}

// ── Tests ────────────────────────────────────────────────────────────────────
