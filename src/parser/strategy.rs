//! Extraction strategies: ordered attempts over one record span.

use regex::Regex;

// Subsection header spellings as they open a line in the source documents.
// The line scan treats any of these as the start of the next block.
const BLOCK_CUES: &str =
    "Causes|Cause|Clinical features|Differential diagnosis|Investigations|Management|Prevention|Classification|TREATMENT";

/// One extraction attempt over a record span.
///
/// A strategy either yields trimmed, non-empty content or nothing; it never
/// fails. Ladders run strategies in order and keep the first hit, so rungs
/// go from strict to permissive.
#[derive(Debug)]
pub enum Strategy {
    /// Regex whose first capture group is the content.
    Pattern(Regex),
    /// The trimmed span itself, yielded only when the cue pattern is absent.
    WholeSpanUnless(Regex),
    /// Line-oriented scan triggered by a label occurrence.
    LineScan(LineScan),
}

impl Strategy {
    /// Build a regex strategy. Group 1 of the pattern captures the content.
    pub fn pattern(pattern: &str) -> Self {
        Strategy::Pattern(Regex::new(pattern).unwrap())
    }

    /// Build the whole-span fallback, applied only when `cue` is absent.
    pub fn whole_span_unless(cue: &str) -> Self {
        Strategy::WholeSpanUnless(Regex::new(cue).unwrap())
    }

    /// Build the line-scan fallback for a label alternation.
    pub fn line_scan(label: &str) -> Self {
        Strategy::LineScan(LineScan::new(label))
    }

    /// Run this strategy over a span.
    pub fn apply(&self, span: &str) -> Option<String> {
        match self {
            Strategy::Pattern(re) => re
                .captures(span)
                .and_then(|caps| caps.get(1))
                .map(|content| content.as_str().trim())
                .filter(|content| !content.is_empty())
                .map(str::to_string),
            Strategy::WholeSpanUnless(cue) => (!cue.is_match(span))
                .then(|| span.trim())
                .filter(|content| !content.is_empty())
                .map(str::to_string),
            Strategy::LineScan(scan) => scan.apply(span),
        }
    }
}

/// Line-oriented fallback for spans whose formatting defeats every block
/// pattern.
///
/// Collection starts after the first line containing the label as a whole
/// word (case-insensitive) and stops at the first line that opens a new
/// block: a heading with a trailing colon, a numeric section code, another
/// known subsection cue, or a blank line. Collected lines are trimmed and
/// joined with newlines, keeping indicator and dash prefixes intact.
#[derive(Debug)]
pub struct LineScan {
    trigger: Regex,
    heading: Regex,
    section: Regex,
    block_cue: Regex,
}

impl LineScan {
    fn new(label: &str) -> Self {
        Self {
            trigger: Regex::new(&format!(r"(?i)\b(?:{label})\b")).unwrap(),
            heading: Regex::new(r"^[A-Z][a-z]+ ?[a-z]*:").unwrap(),
            section: Regex::new(r"^\d+\.\d+").unwrap(),
            block_cue: Regex::new(&format!(r"^(?:{BLOCK_CUES})\b")).unwrap(),
        }
    }

    fn apply(&self, span: &str) -> Option<String> {
        let mut found = false;
        let mut collected: Vec<&str> = Vec::new();

        for line in span.lines() {
            if !found {
                if self.trigger.is_match(line) {
                    found = true;
                }
                continue;
            }
            // Stop cues are tested against the untrimmed line.
            if self.heading.is_match(line)
                || self.section.is_match(line)
                || self.block_cue.is_match(line)
            {
                break;
            }
            let content = line.trim();
            if content.is_empty() {
                break;
            }
            collected.push(content);
        }

        if collected.is_empty() {
            None
        } else {
            Some(collected.join("\n"))
        }
    }
}
