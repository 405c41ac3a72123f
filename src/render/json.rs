//! JSON rendering for extracted disease records.

use crate::error::{Error, Result};
use crate::model::DiseaseRecord;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert extracted records to a JSON array.
pub fn to_json(records: &[DiseaseRecord], format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(records),
        JsonFormat::Compact => serde_json::to_string(records),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<DiseaseRecord> {
        let mut record = DiseaseRecord::new("1.1", "Malaria", "B54");
        record.causes = "Mosquito bites.".to_string();
        vec![record]
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"Disease_Name\": \"Malaria\""));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(json.contains("\"Causes\":\"Mosquito bites.\""));
        assert!(!json.contains('\n')); // Compact has no newlines
    }

    #[test]
    fn test_to_json_empty_slice_is_empty_array() {
        assert_eq!(to_json(&[], JsonFormat::Compact).unwrap(), "[]");
    }
}
