//! Input resolution: validate the user-supplied path and read it.
//!
//! The file is read in one blocking call. The handle lives only inside
//! [`read_markdown`], so it is closed on every return path, including a
//! failed UTF-8 decode. Line endings are normalised to `\n` on the way in;
//! every later stage splits on `\n` only.

use crate::error::ParseError;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read a Markdown file into memory.
///
/// A missing file is reported as [`ParseError::FileNotFound`]; that is the
/// one failure the CLI is expected to explain to the user.
pub fn read_markdown(path: &Path) -> Result<String, ParseError> {
    if !path.exists() {
        return Err(ParseError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut file = std::fs::File::open(path).map_err(|e| match e.kind() {
        ErrorKind::PermissionDenied => ParseError::PermissionDenied {
            path: path.to_path_buf(),
        },
        ErrorKind::NotFound => ParseError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ParseError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| ParseError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(normalise_line_endings(&content))
}

fn normalise_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

/// Make `path` absolute against the current directory without resolving symlinks.
pub fn absolute_path(path: &Path) -> Result<PathBuf, ParseError> {
    std::path::absolute(path).map_err(|e| ParseError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })
}
