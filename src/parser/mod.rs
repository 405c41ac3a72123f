//! Guideline parsing module.

mod assembler;
mod extractor;
mod options;
mod segmenter;
mod strategy;

pub use assembler::RecordAssembler;
pub use extractor::FieldExtractor;
pub use options::{DescriptionFallback, ExtractOptions};
pub use segmenter::RecordSegmenter;
