//! The assembled disease record.

use serde::{Deserialize, Serialize};

use crate::model::schema::SubsectionLabel;

/// One extracted disease record: header fields plus one normalized string
/// per subsection label.
///
/// Fields serialize under the exact column spellings tabular consumers
/// expect, so a sequence of records is CSV- and JSON-ready without further
/// mapping. Absent subsections are empty strings, never omitted; every
/// serialized row has the same column shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    /// Dotted numeric section identifier, e.g. "3.2.1".
    #[serde(rename = "Section")]
    pub section: String,

    /// Disease title from the header line.
    #[serde(rename = "Disease_Name")]
    pub name: String,

    /// Classification code following the ICD10 marker.
    #[serde(rename = "ICD10_Code")]
    pub icd10_code: String,

    /// Text between the header and the causes block.
    #[serde(rename = "Description")]
    pub description: String,

    /// Aetiology.
    #[serde(rename = "Causes")]
    pub causes: String,

    /// Presenting signs and symptoms.
    #[serde(rename = "Clinical_Feature")]
    pub clinical_feature: String,

    /// Conditions to rule out.
    #[serde(rename = "Differential_Diag")]
    pub differential_diag: String,

    /// Recommended diagnostic work-up.
    #[serde(rename = "Investigations")]
    pub investigations: String,

    /// Management guidance.
    #[serde(rename = "Management")]
    pub management: String,

    /// Preventive measures.
    #[serde(rename = "Prevention")]
    pub prevention: String,

    /// Severity or staging classification.
    #[serde(rename = "Classification")]
    pub classification: String,

    /// Treatment detail block (levels of care, dosing).
    #[serde(rename = "Treatment_Details")]
    pub treatment_details: String,
}

impl DiseaseRecord {
    /// Create a record carrying only the header fields.
    pub fn new(
        section: impl Into<String>,
        name: impl Into<String>,
        icd10_code: impl Into<String>,
    ) -> Self {
        Self {
            section: section.into(),
            name: name.into(),
            icd10_code: icd10_code.into(),
            ..Self::default()
        }
    }

    /// Read the value stored for a subsection label.
    pub fn field(&self, label: SubsectionLabel) -> &str {
        match label {
            SubsectionLabel::Description => &self.description,
            SubsectionLabel::Causes => &self.causes,
            SubsectionLabel::ClinicalFeature => &self.clinical_feature,
            SubsectionLabel::DifferentialDiag => &self.differential_diag,
            SubsectionLabel::Investigations => &self.investigations,
            SubsectionLabel::Management => &self.management,
            SubsectionLabel::Prevention => &self.prevention,
            SubsectionLabel::Classification => &self.classification,
            SubsectionLabel::TreatmentDetails => &self.treatment_details,
        }
    }

    /// All twelve values in column order, header fields first.
    pub fn column_values(&self) -> [&str; 12] {
        [
            &self.section,
            &self.name,
            &self.icd10_code,
            &self.description,
            &self.causes,
            &self.clinical_feature,
            &self.differential_diag,
            &self.investigations,
            &self.management,
            &self.prevention,
            &self.classification,
            &self.treatment_details,
        ]
    }

    /// Store the value for a subsection label.
    pub fn set_field(&mut self, label: SubsectionLabel, value: String) {
        match label {
            SubsectionLabel::Description => self.description = value,
            SubsectionLabel::Causes => self.causes = value,
            SubsectionLabel::ClinicalFeature => self.clinical_feature = value,
            SubsectionLabel::DifferentialDiag => self.differential_diag = value,
            SubsectionLabel::Investigations => self.investigations = value,
            SubsectionLabel::Management => self.management = value,
            SubsectionLabel::Prevention => self.prevention = value,
            SubsectionLabel::Classification => self.classification = value,
            SubsectionLabel::TreatmentDetails => self.treatment_details = value,
        }
    }
}
