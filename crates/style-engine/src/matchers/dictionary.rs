use std::collections::HashSet;

use shared_types::{IssueKind, Severity};

use super::{Detection, Matcher, ParagraphText, Phase, PhaseOutput};
use crate::allocator::SpanAllocator;
use crate::lexicon::WordFrequency;
use crate::patterns::{is_alphabetic, WORD_PATTERN};

const MESSAGE: &str = "Word not recognized in American English dictionary.";

/// Flags words too rare in the reference language to be trusted.
///
/// Runs last, so terminology and regional spellings already claimed by an
/// earlier phase are never double-flagged as unknown words.
pub struct DictionaryMatcher<'d> {
    lexicon: &'d dyn WordFrequency,
    threshold: f64,
    allow: &'d HashSet<String>,
}

impl<'d> DictionaryMatcher<'d> {
    pub fn new(
        lexicon: &'d dyn WordFrequency,
        threshold: f64,
        allow: &'d HashSet<String>,
    ) -> Self {
        Self {
            lexicon,
            threshold,
            allow,
        }
    }

    pub fn is_recognized(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.allow.contains(&lower) || self.lexicon.frequency(&lower) >= self.threshold
    }
}

impl Matcher for DictionaryMatcher<'_> {
    fn phase(&self) -> Phase {
        Phase::DictionaryCheck
    }

    fn scan(&self, text: &ParagraphText<'_>, claims: &mut SpanAllocator) -> PhaseOutput {
        let mut out = PhaseOutput::default();
        for m in WORD_PATTERN.find_iter(text.as_str()) {
            let word = m.as_str();
            let span = text.to_char_range(m.start()..m.end());
            if !claims.is_free(&span) || !is_alphabetic(word) || self.is_recognized(word) {
                continue;
            }
            out.claim_and_report(claims, span, |span| Detection {
                kind: IssueKind::UnrecognizedWord,
                severity: Severity::Error,
                matched_text: word.to_string(),
                span: Some(span),
                message: MESSAGE.to_string(),
                suggestion: None,
            });
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{self, Lexicon};

    fn scan(lexicon: &dyn WordFrequency, allow: &HashSet<String>, text: &str) -> PhaseOutput {
        let para = ParagraphText::new(text);
        let mut claims = SpanAllocator::new(para.char_len());
        DictionaryMatcher::new(lexicon, 1e-6, allow).scan(&para, &mut claims)
    }

    #[test]
    fn test_rare_words_are_flagged() {
        let lexicon = Lexicon::from_pairs([("the", 0.05), ("fabric", 2e-5), ("greige", 4e-7)]);
        let out = scan(&lexicon, &HashSet::new(), "The greige fabric");
        let words: Vec<&str> = out.detections.iter().map(|d| d.matched_text.as_str()).collect();
        assert_eq!(words, vec!["greige"]);
        assert_eq!(out.detections[0].severity, Severity::Error);
        assert_eq!(out.detections[0].kind, IssueKind::UnrecognizedWord);
    }

    #[test]
    fn test_common_words_never_flagged() {
        let english = lexicon::english();
        let out = scan(&*english, &HashSet::new(), "The cotton is in the mill");
        assert!(out.detections.is_empty());
    }

    #[test]
    fn test_allow_list_and_apostrophes() {
        let lexicon = Lexicon::from_pairs([("the", 0.05)]);
        let allow: HashSet<String> = ["tencel".to_string()].into_iter().collect();
        let out = scan(&lexicon, &allow, "Tencel isn't the issue");
        let words: Vec<&str> = out.detections.iter().map(|d| d.matched_text.as_str()).collect();
        assert_eq!(words, vec!["issue"]);
    }

    #[test]
    fn test_claimed_words_are_skipped() {
        let lexicon = Lexicon::default();
        let para = ParagraphText::new("zorp blim");
        let mut claims = SpanAllocator::new(para.char_len());
        claims.claim(0..4);
        let allow = HashSet::new();
        let out = DictionaryMatcher::new(&lexicon, 1e-6, &allow).scan(&para, &mut claims);
        assert_eq!(out.detections.len(), 1);
        assert_eq!(out.detections[0].span, Some(5..9));
    }
}
