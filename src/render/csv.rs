//! CSV rendering for extracted disease records.
//!
//! The header row is always written, even for zero records, so every
//! output file shares the same 12-column shape.

use std::path::Path;

use csv::WriterBuilder;

use crate::error::{Error, Result};
use crate::model::{DiseaseRecord, COLUMNS};

/// Render records as CSV text with the fixed header row.
pub fn to_csv(records: &[DiseaseRecord]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(&COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }

    let buffer = writer
        .into_inner()
        .map_err(|e| Error::Render(format!("CSV buffer error: {}", e)))?;
    String::from_utf8(buffer).map_err(|e| Error::Render(format!("CSV output error: {}", e)))
}

/// Write records to a CSV file with the fixed header row.
pub fn write_csv(records: &[DiseaseRecord], path: impl AsRef<Path>) -> Result<()> {
    let rendered = to_csv(records)?;
    std::fs::write(path, rendered)?;
    Ok(())
}
