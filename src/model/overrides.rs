//! Externally supplied extraction overrides.

use std::collections::HashMap;

use crate::model::schema::SubsectionLabel;

/// Exception table mapping record title → subsection label → literal text,
/// used when extraction for that label comes back empty.
///
/// Some records carry a subsection in formatting no strategy can recover
/// (the content exists in the document but reaches the extractor mangled).
/// Callers register the known literals here instead of the engine
/// hard-coding them; the table is consulted only after every strategy has
/// failed, so a successful extraction always wins.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    entries: HashMap<String, HashMap<SubsectionLabel, String>>,
}

impl OverrideTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an override literal for a record title and label.
    ///
    /// Inserting again for the same title and label replaces the previous
    /// literal.
    pub fn insert(
        &mut self,
        title: impl Into<String>,
        label: SubsectionLabel,
        value: impl Into<String>,
    ) {
        self.entries
            .entry(title.into())
            .or_default()
            .insert(label, value.into());
    }

    /// Look up the override for a title/label pair.
    pub fn get(&self, title: &str, label: SubsectionLabel) -> Option<&str> {
        self.entries
            .get(title)
            .and_then(|fields| fields.get(&label))
            .map(String::as_str)
    }

    /// True when no overrides are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
