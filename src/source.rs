//! Text acquisition helpers.
//!
//! Document-format parsing is out of scope; these helpers cover the thin
//! remainder: reading a text file, decoding owned bytes, and arbitrating
//! between candidate extractions of the same document.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Read a document as UTF-8 text.
pub fn load_text(path: impl AsRef<Path>) -> Result<String> {
    let bytes = fs::read(path)?;
    decode_text(&bytes)
}

/// Decode raw bytes as UTF-8 document text.
pub fn decode_text(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|err| Error::Encoding(err.to_string()))
}

/// Pick the fullest of several candidate extractions of one document.
///
/// Upstream text extraction tools disagree on how much of a page they
/// recover; the longest non-blank candidate wins, the first on a tie.
pub fn fullest_text<'a>(candidates: &[&'a str]) -> Option<&'a str> {
    let mut best: Option<&'a str> = None;
    for &text in candidates {
        if text.trim().is_empty() {
            continue;
        }
        if best.map_or(true, |b| text.len() > b.len()) {
            best = Some(text);
        }
    }
    best
}
