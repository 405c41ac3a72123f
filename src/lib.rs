//! # guidetab
//!
//! Clinical-guideline text segmentation and disease-record extraction.
//!
//! This library carves a semi-structured guideline document into
//! per-disease record spans and extracts a fixed schema of clinical
//! subsections from each span, trying progressively more permissive
//! strategies until one succeeds.
//!
//! ## Quick Start
//!
//! ```no_run
//! use guidetab::Guidetab;
//!
//! fn main() -> guidetab::Result<()> {
//!     // Extract records from guideline text
//!     let result = Guidetab::new().extract_file("guidelines.txt")?;
//!
//!     // Write the table and report coverage
//!     result.write_csv("diseases.csv")?;
//!     println!("{}", result.summary());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Cascading extraction**: strict anchored patterns down to a
//!   line-scan fallback, first non-empty result wins
//! - **Fixed schema**: twelve columns, identical shape for every record
//! - **Override table**: caller-supplied literals for known extraction
//!   gaps, applied only when extraction comes up empty
//! - **Tabular output**: CSV and JSON sinks plus a coverage summary
//! - **Parallel processing**: per-record extraction through Rayon

pub mod error;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{DiseaseRecord, HeaderMatch, OverrideTable, RecordSpan, SubsectionLabel, COLUMNS};
pub use normalize::TextNormalizer;
pub use parser::{
    DescriptionFallback, ExtractOptions, FieldExtractor, RecordAssembler, RecordSegmenter,
};
pub use render::{ColumnCoverage, ExtractionSummary, JsonFormat};

use std::path::Path;

/// Extract every disease record from guideline text.
///
/// # Example
///
/// ```
/// use guidetab::extract_records;
///
/// let text = "1.1 Malaria ICD10 CODE: B54\nCauses\nMosquito bites.\n";
/// let records = extract_records(text);
/// assert_eq!(records[0].name, "Malaria");
/// ```
pub fn extract_records(text: &str) -> Vec<DiseaseRecord> {
    RecordAssembler::new().assemble(text)
}

/// Extract records with custom options.
pub fn extract_records_with_options(text: &str, options: ExtractOptions) -> Vec<DiseaseRecord> {
    RecordAssembler::with_options(options).assemble(text)
}

/// Extract records from a guideline text file.
///
/// # Example
///
/// ```no_run
/// use guidetab::extract_file;
///
/// let records = extract_file("guidelines.txt").unwrap();
/// println!("{} records", records.len());
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<Vec<DiseaseRecord>> {
    let text = source::load_text(path)?;
    Ok(extract_records(&text))
}

/// Extract a guideline text file straight to a CSV file.
///
/// Returns the coverage summary for the run.
///
/// # Example
///
/// ```no_run
/// use guidetab::extract_file_to_csv;
///
/// let summary = extract_file_to_csv("guidelines.txt", "diseases.csv").unwrap();
/// println!("{}", summary);
/// ```
pub fn extract_file_to_csv<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<ExtractionSummary> {
    let records = extract_file(input)?;
    render::write_csv(&records, output)?;
    Ok(ExtractionSummary::from_records(&records))
}

/// Builder for configuring and running guideline extraction.
///
/// # Example
///
/// ```no_run
/// use guidetab::{Guidetab, SubsectionLabel};
///
/// let result = Guidetab::new()
///     .sequential()
///     .with_override("Anaphylactic Shock", SubsectionLabel::Causes, "Allergy to pollens.")
///     .extract_file("guidelines.txt")?;
///
/// let csv = result.to_csv()?;
/// # Ok::<(), guidetab::Error>(())
/// ```
pub struct Guidetab {
    options: ExtractOptions,
}

impl Guidetab {
    /// Create a new Guidetab builder.
    pub fn new() -> Self {
        Self {
            options: ExtractOptions::default(),
        }
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Set what Description receives when a span has no Causes cue.
    pub fn with_description_fallback(mut self, fallback: DescriptionFallback) -> Self {
        self.options = self.options.with_description_fallback(fallback);
        self
    }

    /// Add one override literal for a record title and label.
    pub fn with_override(
        mut self,
        title: impl Into<String>,
        label: SubsectionLabel,
        value: impl Into<String>,
    ) -> Self {
        self.options.overrides.insert(title, label, value);
        self
    }

    /// Replace the whole override table.
    pub fn with_overrides(mut self, overrides: OverrideTable) -> Self {
        self.options = self.options.with_overrides(overrides);
        self
    }

    /// Extract records from guideline text.
    pub fn extract(self, text: &str) -> GuidetabResult {
        let records = RecordAssembler::with_options(self.options).assemble(text);
        GuidetabResult { records }
    }

    /// Extract records from a guideline text file.
    pub fn extract_file<P: AsRef<Path>>(self, path: P) -> Result<GuidetabResult> {
        let text = source::load_text(path)?;
        Ok(self.extract(&text))
    }
}

impl Default for Guidetab {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of an extraction run.
pub struct GuidetabResult {
    records: Vec<DiseaseRecord>,
}

impl GuidetabResult {
    /// The extracted records, in document order.
    pub fn records(&self) -> &[DiseaseRecord] {
        &self.records
    }

    /// Consume the result and take ownership of the records.
    pub fn into_records(self) -> Vec<DiseaseRecord> {
        self.records
    }

    /// Render the records as CSV text.
    pub fn to_csv(&self) -> Result<String> {
        render::to_csv(&self.records)
    }

    /// Render the records as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.records, format)
    }

    /// Write the records to a CSV file.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        render::write_csv(&self.records, path)
    }

    /// Coverage summary for the run.
    pub fn summary(&self) -> ExtractionSummary {
        ExtractionSummary::from_records(&self.records)
    }
}
