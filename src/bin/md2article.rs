//! CLI binary for edgequake-md2article.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ParseConfig` / `OutputFormat` and prints the result.

use anyhow::{Context, Result};
use clap::Parser;
use edgequake_md2article::{parse_file, render_output, OutputFormat, ParseConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Full payload as JSON (default)
  md2article post.md

  # Only the HTML fragment, e.g. to pipe into a clipboard tool
  md2article post.md --html-only | pbcopy

  # Same thing via --output
  md2article post.md --output html

OUTPUT (JSON):
  title           First H1 (removed from HTML), else first H2, else first line
  cover_image     Path of the first image, or null
  content_images  Remaining images: path, alt, after_text, position
  html            Article body with title and images stripped
  source_file     Absolute path of the input file

Relative image paths are resolved against the Markdown file's directory.
Set RUST_LOG (e.g. RUST_LOG=debug) to override the log level.
"#;

/// Parse a Markdown article into a title, cover image, content images and HTML.
#[derive(Parser, Debug)]
#[command(
    name = "md2article",
    version,
    about = "Parse a Markdown article into a title, cover image, content images and HTML",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Markdown file to parse.
    file: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value = "json")]
    output: FormatArg,

    /// Print only the HTML content (overrides --output).
    #[arg(long)]
    html_only: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all logs except errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Json,
    Html,
}

impl From<FormatArg> for OutputFormat {
    fn from(v: FormatArg) -> Self {
        match v {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Html => OutputFormat::Html,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // stdout carries the payload, so logs go to stderr and stay at WARN
    // unless asked for.
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Parse ────────────────────────────────────────────────────────────
    // No extra context here: a missing file must print exactly
    // "Error: File not found: <path>".
    let result = parse_file(&cli.file, &ParseConfig::default())?;

    let format = if cli.html_only {
        OutputFormat::Html
    } else {
        cli.output.into()
    };
    let rendered = render_output(&result, format)?;

    // ── Print ────────────────────────────────────────────────────────────
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{rendered}").context("Failed to write to stdout")?;

    Ok(())
}
