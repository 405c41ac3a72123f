//! Extraction options and configuration.

use crate::model::OverrideTable;

/// Options for record extraction.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Whether to extract record fields in parallel across spans
    pub parallel: bool,

    /// What Description receives when a span has no Causes cue
    pub description_fallback: DescriptionFallback,

    /// Caller-supplied literals for known extraction gaps
    pub overrides: OverrideTable,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parallel per-record extraction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set the description fallback behavior.
    pub fn with_description_fallback(mut self, fallback: DescriptionFallback) -> Self {
        self.description_fallback = fallback;
        self
    }

    /// Replace the override table.
    pub fn with_overrides(mut self, overrides: OverrideTable) -> Self {
        self.overrides = overrides;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            description_fallback: DescriptionFallback::Empty,
            overrides: OverrideTable::new(),
        }
    }
}

/// Behavior of the Description field when the record span never mentions a
/// Causes block (the description is defined as the text before that cue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescriptionFallback {
    /// Leave the description empty
    #[default]
    Empty,
    /// Use the whole record span as the description
    WholeSpan,
}
