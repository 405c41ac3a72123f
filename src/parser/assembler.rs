//! Record assembly: segmentation, extraction, overrides, normalization.

use rayon::prelude::*;

use crate::model::{DiseaseRecord, RecordSpan, SubsectionLabel};
use crate::normalize::TextNormalizer;
use crate::parser::extractor::FieldExtractor;
use crate::parser::options::ExtractOptions;
use crate::parser::segmenter::RecordSegmenter;

/// Drives the pipeline from raw document text to assembled records.
///
/// Records are independent of one another, so per-span extraction can run
/// in parallel; output order always follows document order either way.
pub struct RecordAssembler {
    segmenter: RecordSegmenter,
    extractor: FieldExtractor,
    normalizer: TextNormalizer,
    options: ExtractOptions,
}

impl RecordAssembler {
    /// Create an assembler with default options.
    pub fn new() -> Self {
        Self::with_options(ExtractOptions::default())
    }

    /// Create an assembler with the given options.
    pub fn with_options(options: ExtractOptions) -> Self {
        Self {
            segmenter: RecordSegmenter::new(),
            extractor: FieldExtractor::new(options.description_fallback),
            normalizer: TextNormalizer::new(),
            options,
        }
    }

    /// Extract every disease record from the document text, in document
    /// order. Zero records is a legitimate result, not an error.
    pub fn assemble(&self, text: &str) -> Vec<DiseaseRecord> {
        let spans = self.segmenter.segment(text);
        if spans.is_empty() {
            log::warn!("no record headers found in {} bytes of text", text.len());
            return Vec::new();
        }
        log::info!("found {} disease sections", spans.len());

        if self.options.parallel {
            spans.par_iter().map(|span| self.assemble_one(span)).collect()
        } else {
            spans.iter().map(|span| self.assemble_one(span)).collect()
        }
    }

    fn assemble_one(&self, span: &RecordSpan<'_>) -> DiseaseRecord {
        log::debug!("processing {:?} ({})", span.header.title, span.header.code);

        let mut record = DiseaseRecord::new(
            span.header.section.clone(),
            span.header.title.clone(),
            span.header.code.clone(),
        );
        for label in SubsectionLabel::ALL {
            let mut raw = self.extractor.extract(label, span.body);
            if raw.is_empty() {
                if let Some(value) = self.options.overrides.get(&span.header.title, label) {
                    raw = value.to_string();
                }
            }
            record.set_field(label, self.normalizer.normalize(&raw));
        }
        record
    }
}

impl Default for RecordAssembler {
    fn default() -> Self {
        Self::new()
    }
}
