//! # edgequake-md2article
//!
//! Turn a Markdown article into a publishing payload for a rich-text article
//! editor: a title, a cover image, the remaining content images with
//! placement hints, and an HTML fragment ready to paste.
//!
//! ## Pipeline Overview
//!
//! ```text
//! Markdown file
//!  │
//!  ├─ 1. Input   read the whole file as UTF-8
//!  ├─ 2. Images  collect `![alt](path)` records, strip them from the text
//!  ├─ 3. Title   first H1 (consumed), H2 (kept) or plain line
//!  ├─ 4. Render  10 ordered regex passes → HTML fragment
//!  └─ 5. Output  ParseResult → JSON or bare HTML
//! ```
//!
//! The first image becomes `cover_image`; every later image is listed in
//! `content_images` together with the line of text it followed, so it can be
//! re-inserted at the right spot after pasting the HTML.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use edgequake_md2article::{parse_file, render_output, OutputFormat, ParseConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let result = parse_file("post.md", &ParseConfig::default())?;
//!     println!("{}", result.title);
//!     println!("{}", render_output(&result, OutputFormat::Json)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `md2article` binary (clap + anyhow + tracing-subscriber) |
//!
//! ## Supported Markdown
//!
//! H1–H3, `**bold**`, `*italic*`, `[links](url)`, `> quotes`, flat `-` and
//! `1.` lists, images and paragraphs. Anything else passes through as text.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod output;
pub mod parse;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{
    OutputFormat, ParseConfig, ParseConfigBuilder, DEFAULT_TITLE, MAX_CONTEXT_CHARS,
    MAX_TITLE_CHARS,
};
pub use error::ParseError;
pub use output::{ImageRecord, ParseResult};
pub use parse::{parse_file, parse_str, render_output};
