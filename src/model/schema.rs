//! The fixed output schema: subsection labels and column order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One canonical subsection name in the fixed record schema.
///
/// The set is closed. Guideline documents vary wildly in which subsections
/// a given disease actually carries, but every output row exposes exactly
/// these nine fields (plus the header fields), with absent subsections as
/// empty strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubsectionLabel {
    /// Free text between the record header and the causes block.
    Description,
    /// Aetiology block, spelled "Causes" or "Cause" in the source.
    Causes,
    /// "Clinical features" block.
    ClinicalFeature,
    /// "Differential diagnosis" block.
    DifferentialDiag,
    /// "Investigations" block.
    Investigations,
    /// "Management" block.
    Management,
    /// "Prevention" block.
    Prevention,
    /// "Classification of ..." block, or an indicator/stage table.
    Classification,
    /// Treatment levels-of-care block opened by the TREATMENT marker.
    TreatmentDetails,
}

impl SubsectionLabel {
    /// Every label in schema (output column) order.
    pub const ALL: [SubsectionLabel; 9] = [
        SubsectionLabel::Description,
        SubsectionLabel::Causes,
        SubsectionLabel::ClinicalFeature,
        SubsectionLabel::DifferentialDiag,
        SubsectionLabel::Investigations,
        SubsectionLabel::Management,
        SubsectionLabel::Prevention,
        SubsectionLabel::Classification,
        SubsectionLabel::TreatmentDetails,
    ];

    /// The column spelling used in tabular output.
    pub fn as_str(self) -> &'static str {
        match self {
            SubsectionLabel::Description => "Description",
            SubsectionLabel::Causes => "Causes",
            SubsectionLabel::ClinicalFeature => "Clinical_Feature",
            SubsectionLabel::DifferentialDiag => "Differential_Diag",
            SubsectionLabel::Investigations => "Investigations",
            SubsectionLabel::Management => "Management",
            SubsectionLabel::Prevention => "Prevention",
            SubsectionLabel::Classification => "Classification",
            SubsectionLabel::TreatmentDetails => "Treatment_Details",
        }
    }
}

impl fmt::Display for SubsectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output column names in serialization order: the three header fields
/// followed by every subsection label.
pub const COLUMNS: [&str; 12] = [
    "Section",
    "Disease_Name",
    "ICD10_Code",
    "Description",
    "Causes",
    "Clinical_Feature",
    "Differential_Diag",
    "Investigations",
    "Management",
    "Prevention",
    "Classification",
    "Treatment_Details",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_extend_labels() {
        assert_eq!(COLUMNS.len(), SubsectionLabel::ALL.len() + 3);
        for (column, label) in COLUMNS[3..].iter().zip(SubsectionLabel::ALL) {
            assert_eq!(*column, label.as_str());
        }
    }

    #[test]
    fn test_labels_distinct() {
        for (i, a) in SubsectionLabel::ALL.iter().enumerate() {
            for b in &SubsectionLabel::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_display_matches_column_spelling() {
        assert_eq!(SubsectionLabel::ClinicalFeature.to_string(), "Clinical_Feature");
        assert_eq!(SubsectionLabel::TreatmentDetails.to_string(), "Treatment_Details");
    }
}
