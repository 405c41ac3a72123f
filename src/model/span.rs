//! Located record headers and the text spans they own.

use serde::{Deserialize, Serialize};

/// A located occurrence of the record-header pattern.
///
/// Offsets are byte positions into the source text. Matches produced by
/// segmentation are ordered by `start` and never overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderMatch {
    /// Dotted numeric section code, e.g. "1.2" or "3.2.1".
    pub section: String,

    /// Disease title between the section code and the ICD10 marker.
    pub title: String,

    /// Classification code following the marker, to end of line.
    pub code: String,

    /// Byte offset where the header match begins.
    pub start: usize,

    /// Byte offset one past the end of the header match.
    pub end: usize,
}

/// One record's text: the header plus the borrowed body running from this
/// header's end to the next header's start (or end of text).
///
/// Spans partition the post-header remainder of the source: span `i` ends
/// exactly where span `i + 1`'s header begins, with no gaps or overlaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSpan<'a> {
    /// The header that opens this record.
    pub header: HeaderMatch,

    /// Everything between this header and the next.
    pub body: &'a str,
}

impl RecordSpan<'_> {
    /// Byte offset in the source text where the body begins.
    pub fn body_start(&self) -> usize {
        self.header.end
    }

    /// Byte offset in the source text one past the end of the body.
    pub fn body_end(&self) -> usize {
        self.header.end + self.body.len()
    }
}
