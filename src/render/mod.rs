//! Rendering module for serializing extracted records.

mod csv;
mod json;
mod summary;

pub use self::csv::{to_csv, write_csv};
pub use json::{to_json, JsonFormat};
pub use summary::{ColumnCoverage, ExtractionSummary};
