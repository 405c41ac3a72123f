//! Record boundary detection.

use regex::Regex;

use crate::model::{HeaderMatch, RecordSpan};

/// Locates record headers and partitions the document into per-record
/// spans.
///
/// A header line carries a dotted numeric section code, the disease title,
/// and the `ICD10 CODE:` marker followed by the code itself. Everything
/// between one header and the next belongs to the earlier record; the last
/// record runs to end of text. Zero matches is a legitimate outcome and
/// yields an empty vector.
pub struct RecordSegmenter {
    header: Regex,
}

impl RecordSegmenter {
    /// Create a segmenter with the header pattern compiled.
    pub fn new() -> Self {
        Self {
            // Three-part section codes must be tried before two-part ones
            // so "3.2.1" is not truncated to "3.2".
            header: Regex::new(r"(\d+\.\d+\.\d+|\d+\.\d+)\s+([^\n]+?)\s+ICD10\s+CODE:\s+([^\n]+)")
                .unwrap(),
        }
    }

    /// Partition the document text into record spans, in document order.
    pub fn segment<'a>(&self, text: &'a str) -> Vec<RecordSpan<'a>> {
        let headers: Vec<HeaderMatch> = self
            .header
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let header = HeaderMatch {
                    section: caps[1].trim().to_string(),
                    title: caps[2].trim().to_string(),
                    code: caps[3].trim().to_string(),
                    start: whole.start(),
                    end: whole.end(),
                };
                log::debug!(
                    "record header {:?} ({}) at {}..{}",
                    header.title,
                    header.section,
                    header.start,
                    header.end
                );
                Some(header)
            })
            .collect();

        let body_ends: Vec<usize> = headers
            .iter()
            .skip(1)
            .map(|next| next.start)
            .chain(std::iter::once(text.len()))
            .collect();

        headers
            .into_iter()
            .zip(body_ends)
            .map(|(header, body_end)| {
                let body = &text[header.end..body_end];
                RecordSpan { header, body }
            })
            .collect()
    }
}

impl Default for RecordSegmenter {
    fn default() -> Self {
        Self::new()
    }
}
