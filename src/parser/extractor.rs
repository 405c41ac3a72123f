//! Cascading field extraction over record spans.

use std::collections::HashMap;

use crate::model::SubsectionLabel;
use crate::parser::options::DescriptionFallback;
use crate::parser::strategy::Strategy;

/// Cascading extractor holding one strategy ladder per subsection label.
///
/// Extraction is total: any span yields a (possibly empty) string, a rung
/// that fails to match simply hands over to the next one, and exhausting
/// the ladder produces the empty string. Nothing here is an error.
pub struct FieldExtractor {
    ladders: HashMap<SubsectionLabel, Vec<Strategy>>,
}

impl FieldExtractor {
    /// Build the ladders for the whole schema.
    pub fn new(description_fallback: DescriptionFallback) -> Self {
        let ladders = SubsectionLabel::ALL
            .into_iter()
            .map(|label| (label, ladder_for(label, description_fallback)))
            .collect();
        Self { ladders }
    }

    /// Extract one subsection from a record span, first hit wins.
    pub fn extract(&self, label: SubsectionLabel, span: &str) -> String {
        self.ladders
            .get(&label)
            .and_then(|ladder| ladder.iter().find_map(|strategy| strategy.apply(span)))
            .unwrap_or_default()
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new(DescriptionFallback::default())
    }
}

fn ladder_for(label: SubsectionLabel, fallback: DescriptionFallback) -> Vec<Strategy> {
    match label {
        SubsectionLabel::Description => description_ladder(fallback),
        SubsectionLabel::Causes => labelled_ladder("Causes|Cause"),
        SubsectionLabel::ClinicalFeature => labelled_ladder("Clinical features"),
        SubsectionLabel::DifferentialDiag => labelled_ladder("Differential diagnosis"),
        SubsectionLabel::Investigations => labelled_ladder("Investigations"),
        SubsectionLabel::Management => labelled_ladder("Management"),
        SubsectionLabel::Prevention => labelled_ladder("Prevention"),
        SubsectionLabel::Classification => classification_ladder(),
        SubsectionLabel::TreatmentDetails => treatment_ladder(),
    }
}

/// Strict to permissive block patterns, then the line scan.
///
/// The two strict rungs demand a real terminating cue; only the broadest
/// rung accepts end-of-span, since a strict rung running to end of span
/// would swallow every later block whenever the document drops its colons.
/// Labels match at word boundaries, so a mid-word hit like "caused" never
/// arms a rung.
fn labelled_ladder(label: &str) -> Vec<Strategy> {
    vec![
        // Label closes its line; content runs to a two-word colon heading,
        // the treatment marker, or a numeric section code.
        Strategy::pattern(&format!(
            r"(?is)\b(?:{label})\b\s*\n(.*?)(?:\n[A-Z][a-z]+ [a-z]+:|\nTREATMENT|\n\d+\.\d+)"
        )),
        // Label may sit mid-line; the heading cue relaxes to one word.
        Strategy::pattern(&format!(
            r"(?is)\b(?:{label})\b(.*?)(?:\n[A-Z][a-z]+:|\n\d+\.\d+|\nTREATMENT)"
        )),
        // Any word at a line start terminates; catches inline labels.
        Strategy::pattern(&format!(
            r"(?is)\b(?:{label})\b(.*?)(?:\n[A-Z][a-z]+|\n\d+\.\d+|\z)"
        )),
        Strategy::line_scan(label),
    ]
}

/// The description is whatever precedes the causes block, not a labelled
/// subsection of its own.
fn description_ladder(fallback: DescriptionFallback) -> Vec<Strategy> {
    let mut ladder = vec![Strategy::pattern(r"(?s)\A(.*?)(?:\nCauses|\nCause)")];
    if fallback == DescriptionFallback::WholeSpan {
        // The fallback covers spans with no causes block at all; a span
        // whose pre-cue region is merely empty keeps an empty description.
        ladder.push(Strategy::whole_span_unless(r"\nCauses|\nCause"));
    }
    ladder
}

fn classification_ladder() -> Vec<Strategy> {
    vec![
        Strategy::pattern(r"(?s)(Classification of.*?)(?:\n[A-Z][a-z]+|\n\d+\.\d+|\z)"),
        // Indicator/stage column headers mark a classification table.
        Strategy::pattern(r"(?s)(Indicator.*?Stage)"),
    ]
}

fn treatment_ladder() -> Vec<Strategy> {
    vec![
        Strategy::pattern(r"(?s)(TREATMENT\s+LOC.*?)(?:\nNotes|\nPrevention|\n\d+\.\d+|\z)"),
        Strategy::pattern(r"(?s)(TREATMENT.*?)(?:\nNotes|\nPrevention|\n\d+\.\d+|\z)"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> FieldExtractor {
        FieldExtractor::default()
    }

    #[test]
    fn test_cue_based_termination() {
        let span = "Causes\nAllergy to bees.\nClinical features\nSwelling of lips.\n";
        let extractor = extractor();

        assert_eq!(extractor.extract(SubsectionLabel::Causes, span), "Allergy to bees.");
        assert_eq!(
            extractor.extract(SubsectionLabel::ClinicalFeature, span),
            "Swelling of lips."
        );
    }

    #[test]
    fn test_strict_rung_wins_on_colon_headings() {
        let span = "Causes\n~ streptococcus\n~ staphylococcus\nClinical features:\n~ fever\n";
        let got = extractor().extract(SubsectionLabel::Causes, span);
        assert_eq!(got, "~ streptococcus\n~ staphylococcus");
    }

    #[test]
    fn test_inline_label_extracted_by_broad_rung() {
        let span = "Management rest and oral fluids\nfollow up weekly\n";
        let got = extractor().extract(SubsectionLabel::Management, span);
        assert_eq!(got, "rest and oral fluids");
    }

    #[test]
    fn test_loose_rung_carries_past_blank_lines() {
        // Only the one-word-colon rung reaches past an interior blank
        // line; the line scan stops at it.
        let span = "wound Causes\nBacterial infection\n\nPoor hygiene\nNotes:\nkeep dry";
        let got = extractor().extract(SubsectionLabel::Causes, span);
        assert_eq!(got, "Bacterial infection\n\nPoor hygiene");
    }

    #[test]
    fn test_label_needs_word_boundary() {
        // "caused" inside the description must not arm any Causes rung.
        let span = "\nA febrile illness caused by parasites.\nCauses\nMosquito bites.\n";
        let got = extractor().extract(SubsectionLabel::Causes, span);
        assert_eq!(got, "Mosquito bites.");
    }

    #[test]
    fn test_absent_label_yields_empty() {
        let span = "Causes\nAllergy to bees.\n";
        let extractor = extractor();

        assert_eq!(extractor.extract(SubsectionLabel::Prevention, span), "");
        assert_eq!(extractor.extract(SubsectionLabel::DifferentialDiag, span), "");
    }

    #[test]
    fn test_extraction_is_total() {
        let garbage = [
            "",
            "\n\n\n",
            "\u{0}\u{1}\u{2} binary-ish",
            "1.2 Malformed ICD10 CODE: mid span\nCauses",
            "Causes Causes Causes",
            "~~~~~~",
        ];
        let extractor = extractor();
        for span in garbage {
            for label in SubsectionLabel::ALL {
                // Must not panic, whatever the span looks like.
                let _ = extractor.extract(label, span);
            }
        }
    }

    #[test]
    fn test_description_is_text_before_causes() {
        let span = "\nA mosquito-borne febrile illness.\nCauses\nPlasmodium parasites.\n";
        let got = extractor().extract(SubsectionLabel::Description, span);
        assert_eq!(got, "A mosquito-borne febrile illness.");
    }

    #[test]
    fn test_description_empty_without_causes_cue() {
        let span = "\nA mosquito-borne febrile illness.\n";
        assert_eq!(extractor().extract(SubsectionLabel::Description, span), "");
    }

    #[test]
    fn test_description_whole_span_fallback() {
        let span = "\nA mosquito-borne febrile illness.\n";
        let extractor = FieldExtractor::new(DescriptionFallback::WholeSpan);
        assert_eq!(
            extractor.extract(SubsectionLabel::Description, span),
            "A mosquito-borne febrile illness."
        );
    }

    #[test]
    fn test_whole_span_fallback_requires_absent_cue() {
        // Pre-cue region is empty but a causes block exists: the fallback
        // must not swallow the rest of the span.
        let span = "\nCauses\nMosquito bites.\n";
        let extractor = FieldExtractor::new(DescriptionFallback::WholeSpan);
        assert_eq!(extractor.extract(SubsectionLabel::Description, span), "");
    }

    #[test]
    fn test_description_singular_cue() {
        let span = "\nSudden severe reaction.\nCause\nBee venom.\n";
        assert_eq!(
            extractor().extract(SubsectionLabel::Description, span),
            "Sudden severe reaction."
        );
    }

    #[test]
    fn test_classification_keeps_cue_text() {
        let span = "intro\nClassification of dehydration\nmild moderate severe\n1.3 Next";
        let got = extractor().extract(SubsectionLabel::Classification, span);
        assert!(got.starts_with("Classification of dehydration"));
        assert!(!got.contains("1.3"));
    }

    #[test]
    fn test_classification_indicator_table_cue() {
        let span = "severity table\nIndicator mild moderate severe Stage\nrest";
        let got = extractor().extract(SubsectionLabel::Classification, span);
        assert_eq!(got, "Indicator mild moderate severe Stage");
    }

    #[test]
    fn test_treatment_anchored_on_marker() {
        let span = "overview\nTREATMENT\nLOC: HC3\n~ artesunate 2.4 mg/kg\nPrevention\nuse nets\n";
        let got = extractor().extract(SubsectionLabel::TreatmentDetails, span);
        assert_eq!(got, "TREATMENT\nLOC: HC3\n~ artesunate 2.4 mg/kg");
    }

    #[test]
    fn test_treatment_falls_back_to_bare_marker() {
        let span = "TREATMENT\n~ rehydrate\nNotes\nnone";
        let got = extractor().extract(SubsectionLabel::TreatmentDetails, span);
        assert_eq!(got, "TREATMENT\n~ rehydrate");
    }

    #[test]
    fn test_treatment_marker_is_case_sensitive() {
        let span = "treatment\n~ rehydrate\n";
        assert_eq!(extractor().extract(SubsectionLabel::TreatmentDetails, span), "");
    }
}
