//! Lexical matchers
//!
//! Each matcher scans one paragraph for a single class of issue. They run
//! in [`Phase`] order against a shared [`SpanAllocator`], so a span taken
//! by an earlier phase is never reported or recolored by a later one.

pub mod caps;
pub mod dictionary;
pub mod regional;
pub mod terminology;

use std::ops::Range;

use shared_types::{IssueKind, Severity};

use crate::allocator::SpanAllocator;

pub use caps::CapsMatcher;
pub use dictionary::DictionaryMatcher;
pub use regional::RegionalMatcher;
pub use terminology::{compile_rules, CompiledRule, TermMatcher};

/// Per-paragraph phases, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    RuleMatch,
    CapsCheck,
    SpellingVariantCheck,
    DictionaryCheck,
}

impl Phase {
    pub const ORDER: [Phase; 4] = [
        Phase::RuleMatch,
        Phase::CapsCheck,
        Phase::SpellingVariantCheck,
        Phase::DictionaryCheck,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Phase::RuleMatch => "rule_match",
            Phase::CapsCheck => "caps_check",
            Phase::SpellingVariantCheck => "spelling_variant_check",
            Phase::DictionaryCheck => "dictionary_check",
        }
    }
}

/// Paragraph text with a byte-to-character offset table
#[derive(Debug, Clone)]
pub struct ParagraphText<'a> {
    text: &'a str,
    /// Byte offset of every character, plus `text.len()` as a sentinel
    char_starts: Vec<usize>,
}

impl<'a> ParagraphText<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut char_starts: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        char_starts.push(text.len());
        Self { text, char_starts }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    pub fn char_len(&self) -> usize {
        self.char_starts.len() - 1
    }

    /// Convert a byte range from a regex match into character offsets
    pub fn to_char_range(&self, bytes: Range<usize>) -> Range<usize> {
        let to_char = |byte: usize| {
            self.char_starts
                .binary_search(&byte)
                .unwrap_or_else(|insert_at| insert_at)
        };
        to_char(bytes.start)..to_char(bytes.end)
    }
}

/// A character range to recolor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mark {
    pub span: Range<usize>,
    pub severity: Severity,
}

/// One reportable finding, before paragraph context is attached
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub kind: IssueKind,
    pub severity: Severity,
    pub matched_text: String,
    /// `None` for paragraph-level findings
    pub span: Option<Range<usize>>,
    pub message: String,
    pub suggestion: Option<String>,
}

impl Detection {
    pub fn start(&self) -> usize {
        self.span.as_ref().map_or(0, |s| s.start)
    }
}

/// What one phase produced for one paragraph
#[derive(Debug, Clone, Default)]
pub struct PhaseOutput {
    pub marks: Vec<Mark>,
    pub detections: Vec<Detection>,
}

impl PhaseOutput {
    /// Claim `span` and record both the mark and the detection
    pub(crate) fn claim_and_report(
        &mut self,
        claims: &mut SpanAllocator,
        span: Range<usize>,
        detection: impl FnOnce(Range<usize>) -> Detection,
    ) -> bool {
        if !claims.claim(span.clone()) {
            return false;
        }
        let detection = detection(span.clone());
        self.marks.push(Mark {
            span,
            severity: detection.severity,
        });
        self.detections.push(detection);
        true
    }
}

/// A stateless detector for one phase
pub trait Matcher {
    fn phase(&self) -> Phase;

    fn scan(&self, text: &ParagraphText<'_>, claims: &mut SpanAllocator) -> PhaseOutput;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_range_conversion() {
        let text = ParagraphText::new("naïve colour");
        assert_eq!(text.char_len(), 12);
        // "colour" starts at byte 7 (ï is two bytes) but char 6
        assert_eq!(text.to_char_range(7..13), 6..12);
        assert_eq!(text.to_char_range(0..2), 0..2);
    }

    #[test]
    fn test_phase_order() {
        let mut phases = Phase::ORDER.to_vec();
        phases.sort();
        assert_eq!(phases, Phase::ORDER.to_vec());
        assert_eq!(Phase::DictionaryCheck.name(), "dictionary_check");
    }

    #[test]
    fn test_claim_and_report_respects_claims() {
        let mut claims = SpanAllocator::new(10);
        let mut out = PhaseOutput::default();
        let make = |span: Range<usize>| Detection {
            kind: IssueKind::AllCapsWord,
            severity: Severity::Warning,
            matched_text: "ABC".to_string(),
            span: Some(span),
            message: String::new(),
            suggestion: None,
        };
        assert!(out.claim_and_report(&mut claims, 0..3, make));
        assert!(!out.claim_and_report(&mut claims, 2..5, make));
        assert_eq!(out.marks.len(), 1);
        assert_eq!(out.detections.len(), 1);
    }
}
