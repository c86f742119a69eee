use shared_types::{IssueKind, Severity};

use super::{Detection, Matcher, ParagraphText, Phase, PhaseOutput};
use crate::allocator::SpanAllocator;
use crate::patterns::{match_leading_case, WORD_PATTERN};
use crate::variants::SpellingVariants;

const MESSAGE: &str = "British spelling detected. Use American English.";

/// Flags words spelled per a non-preferred regional convention
#[derive(Debug, Clone)]
pub struct RegionalMatcher<'v> {
    variants: &'v SpellingVariants,
}

impl<'v> RegionalMatcher<'v> {
    pub fn new(variants: &'v SpellingVariants) -> Self {
        Self { variants }
    }
}

impl Matcher for RegionalMatcher<'_> {
    fn phase(&self) -> Phase {
        Phase::SpellingVariantCheck
    }

    fn scan(&self, text: &ParagraphText<'_>, claims: &mut SpanAllocator) -> PhaseOutput {
        let mut out = PhaseOutput::default();
        for m in WORD_PATTERN.find_iter(text.as_str()) {
            let word = m.as_str();
            let Some(preferred) = self.variants.preferred(word) else {
                continue;
            };
            let span = text.to_char_range(m.start()..m.end());
            out.claim_and_report(claims, span, |span| Detection {
                kind: IssueKind::RegionalSpelling,
                severity: Severity::Warning,
                matched_text: word.to_string(),
                span: Some(span),
                message: MESSAGE.to_string(),
                suggestion: Some(match_leading_case(word, preferred)),
            });
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str, pre_claimed: Option<std::ops::Range<usize>>) -> PhaseOutput {
        let variants = SpellingVariants::british_to_american();
        let para = ParagraphText::new(text);
        let mut claims = SpanAllocator::new(para.char_len());
        if let Some(range) = pre_claimed {
            claims.claim(range);
        }
        RegionalMatcher::new(&variants).scan(&para, &mut claims)
    }

    #[test]
    fn test_flags_british_spelling_preserving_case() {
        let out = scan("The Colour and the fibre", None);
        let found: Vec<(&str, Option<&str>)> = out
            .detections
            .iter()
            .map(|d| (d.matched_text.as_str(), d.suggestion.as_deref()))
            .collect();
        assert_eq!(found, vec![("Colour", Some("Color")), ("fibre", Some("fiber"))]);
        assert!(out.detections.iter().all(|d| d.severity == Severity::Warning));
        assert_eq!(out.detections[0].span, Some(4..10));
    }

    #[test]
    fn test_every_occurrence_is_reported() {
        let out = scan("colour, colour", None);
        assert_eq!(out.detections.len(), 2);
    }

    #[test]
    fn test_skips_claimed_spans_and_partial_words() {
        let out = scan("the colour is", Some(4..10));
        assert!(out.detections.is_empty());

        let out = scan("colourful multicolour colour's", None);
        assert!(out.detections.is_empty());
    }
}
