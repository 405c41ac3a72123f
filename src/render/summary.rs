//! End-of-run coverage report over the extracted records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{DiseaseRecord, COLUMNS};

/// Non-empty count for one output column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnCoverage {
    /// Column name as it appears in tabular output.
    pub column: String,

    /// Number of records with a non-empty value in this column.
    pub non_empty: usize,
}

/// Statistics collected over an extraction run.
///
/// `Display` renders the end-of-run report: the record count, then one
/// coverage line per column in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionSummary {
    /// Number of records extracted.
    pub record_count: usize,

    /// Per-column coverage, in output column order.
    pub columns: Vec<ColumnCoverage>,
}

impl ExtractionSummary {
    /// Tally coverage over a finished record set.
    pub fn from_records(records: &[DiseaseRecord]) -> Self {
        let mut counts = [0usize; COLUMNS.len()];
        for record in records {
            for (count, value) in counts.iter_mut().zip(record.column_values()) {
                if !value.is_empty() {
                    *count += 1;
                }
            }
        }

        let columns = COLUMNS
            .iter()
            .zip(counts)
            .map(|(&column, non_empty)| ColumnCoverage {
                column: column.to_string(),
                non_empty,
            })
            .collect();

        Self {
            record_count: records.len(),
            columns,
        }
    }
}

impl fmt::Display for ExtractionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Extracted {} diseases", self.record_count)?;
        for coverage in &self.columns {
            writeln!(
                f,
                "{}: {} non-empty entries out of {}",
                coverage.column, coverage.non_empty, self.record_count
            )?;
        }
        Ok(())
    }
}
