//! Canonical cleanup of extracted subsection text.

use regex::Regex;

// Guards dash-bullet line breaks through the whitespace collapse.
const DASH_PLACEHOLDER: &str = "\u{0000}DASH\u{0000}";

/// Rewrites raw extracted field text into canonical cleaned form.
///
/// Guideline text arrives with `~` indicator glyphs standing in for list
/// bullets and with arbitrary line wrapping. Normalization turns each glyph
/// into a dash-prefixed line, collapses every other whitespace run into a
/// single space, and trims the result, leaving bullet breaks as the only
/// line structure in the output. NUL characters are stripped up front.
///
/// The operation is idempotent: `normalize(normalize(x)) == normalize(x)`.
pub struct TextNormalizer {
    bullet: Regex,
    dash_break: Regex,
    whitespace: Regex,
}

impl TextNormalizer {
    /// Create a normalizer with the rule set compiled.
    pub fn new() -> Self {
        Self {
            bullet: Regex::new(r"\s*~\s*").unwrap(),
            // A dash bullet needs trailing space or end-of-text; a bare
            // hyphen glued to content ("-5 mg") is not a bullet.
            dash_break: Regex::new(r"\s*\n[ \t]*-(?:[ \t]+|\z)").unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Clean one raw field. Empty input yields the empty string.
    pub fn normalize(&self, raw: &str) -> String {
        if raw.is_empty() {
            return String::new();
        }

        // Stray NULs in the input would counterfeit the placeholder.
        let raw = raw.replace('\u{0000}', "");
        // Indicator glyphs become dash-bullet lines.
        let text = self.bullet.replace_all(&raw, "\n- ");
        // Bullet breaks must survive the collapse, so park them in a
        // placeholder first and restore them after.
        let text = self.dash_break.replace_all(&text, DASH_PLACEHOLDER);
        let text = self.whitespace.replace_all(&text, " ");
        let text = text.replace(DASH_PLACEHOLDER, "\n- ");
        // Line-leading space artifact.
        let text = text.replace("\n ", "\n");
        text.trim().to_string()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
