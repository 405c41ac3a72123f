//! Data model for extracted disease records.
//!
//! This module defines the types that flow through the pipeline: located
//! header matches and their text spans, the fixed subsection schema, the
//! assembled record, and the caller-supplied override table. The model is
//! plain data; all matching logic lives in [`crate::parser`].

mod overrides;
mod record;
mod schema;
mod span;

pub use overrides::OverrideTable;
pub use record::DiseaseRecord;
pub use schema::{SubsectionLabel, COLUMNS};
pub use span::{HeaderMatch, RecordSpan};
