use shared_types::{IssueKind, Severity};

use super::{Detection, Mark, Matcher, ParagraphText, Phase, PhaseOutput};
use crate::allocator::SpanAllocator;
use crate::config::CapsConfig;
use crate::patterns::{is_all_caps, ALPHA_TOKEN_PATTERN};

pub const ALL_CAPS_SENTENCE: &str = "ALL CAPS sentence";
const SENTENCE_MESSAGE: &str =
    "Avoid full capitalization. Use sentence case unless this is an approved acronym.";
const WORD_MESSAGE: &str = "Avoid full capitalization unless this is an approved acronym.";

/// Flags shouting paragraphs as a whole and scattered capitals one by one
#[derive(Debug, Clone)]
pub struct CapsMatcher<'c> {
    config: &'c CapsConfig,
}

impl<'c> CapsMatcher<'c> {
    pub fn new(config: &'c CapsConfig) -> Self {
        Self { config }
    }

    /// Share of counted tokens that are fully uppercase, or `None` when the
    /// paragraph has no tokens long enough to count
    pub fn caps_ratio(&self, text: &str) -> Option<f64> {
        let (total, caps) = ALPHA_TOKEN_PATTERN
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|w| w.len() >= self.config.min_token_len)
            .fold((0usize, 0usize), |(total, caps), w| {
                (total + 1, caps + usize::from(is_all_caps(w)))
            });
        (total > 0).then(|| caps as f64 / total as f64)
    }
}

impl Matcher for CapsMatcher<'_> {
    fn phase(&self) -> Phase {
        Phase::CapsCheck
    }

    fn scan(&self, text: &ParagraphText<'_>, claims: &mut SpanAllocator) -> PhaseOutput {
        let mut out = PhaseOutput::default();
        let raw = text.as_str();
        let shouting = self
            .caps_ratio(raw)
            .map_or(false, |ratio| ratio >= self.config.sentence_ratio);

        let caps_tokens = ALPHA_TOKEN_PATTERN
            .find_iter(raw)
            .filter(|m| is_all_caps(m.as_str()));

        if shouting {
            // Color every uppercase run but report the paragraph once
            for m in caps_tokens.filter(|m| m.as_str().len() >= self.config.min_token_len) {
                let span = text.to_char_range(m.start()..m.end());
                if claims.claim(span.clone()) {
                    out.marks.push(Mark {
                        span,
                        severity: Severity::Warning,
                    });
                }
            }
            out.detections.push(Detection {
                kind: IssueKind::AllCapsSentence,
                severity: Severity::Warning,
                matched_text: ALL_CAPS_SENTENCE.to_string(),
                span: None,
                message: SENTENCE_MESSAGE.to_string(),
                suggestion: None,
            });
        } else {
            for m in caps_tokens.filter(|m| m.as_str().len() >= self.config.solo_min_len) {
                let span = text.to_char_range(m.start()..m.end());
                out.claim_and_report(claims, span, |span| Detection {
                    kind: IssueKind::AllCapsWord,
                    severity: Severity::Warning,
                    matched_text: m.as_str().to_string(),
                    span: Some(span),
                    message: WORD_MESSAGE.to_string(),
                    suggestion: None,
                });
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan_with(
        config: &CapsConfig,
        text: &str,
        pre_claimed: &[std::ops::Range<usize>],
    ) -> PhaseOutput {
        let para = ParagraphText::new(text);
        let mut claims = SpanAllocator::new(para.char_len());
        for range in pre_claimed {
            claims.claim(range.clone());
        }
        CapsMatcher::new(config).scan(&para, &mut claims)
    }

    #[test]
    fn test_shouting_paragraph_reports_once() {
        let config = CapsConfig::default();
        // THIS IS TEST are caps, "sentence" is not; "A" is too short to count
        let out = scan_with(&config, "THIS IS A TEST sentence", &[]);
        assert_eq!(out.detections.len(), 1);
        let issue = &out.detections[0];
        assert_eq!(issue.kind, IssueKind::AllCapsSentence);
        assert_eq!(issue.matched_text, "ALL CAPS sentence");
        assert_eq!(issue.span, None);
        let spans: Vec<_> = out.marks.iter().map(|m| m.span.clone()).collect();
        assert_eq!(spans, vec![0..4, 5..7, 10..14]);
    }

    #[test]
    fn test_scattered_acronyms_flagged_individually() {
        let config = CapsConfig::default();
        let out = scan_with(&config, "ABC is a normal case word", &[]);
        assert_eq!(out.detections.len(), 1);
        assert_eq!(out.detections[0].kind, IssueKind::AllCapsWord);
        assert_eq!(out.detections[0].matched_text, "ABC");
        assert_eq!(out.detections[0].span, Some(0..3));
    }

    #[test]
    fn test_short_caps_tokens_not_flagged_alone() {
        let config = CapsConfig::default();
        let out = scan_with(&config, "The EU and US agreed on new labelling rules", &[]);
        assert!(out.detections.is_empty());
        assert!(out.marks.is_empty());
    }

    #[test]
    fn test_claimed_spans_are_not_recolored() {
        let config = CapsConfig::default();
        let out = scan_with(&config, "GOTS CERTIFIED COTTON", &[0..4]);
        // Still one paragraph-level issue even though a span was taken
        assert_eq!(out.detections.len(), 1);
        assert_eq!(out.marks.len(), 2);

        let out = scan_with(&config, "We use GOTS certified cotton", &[7..11]);
        assert!(out.detections.is_empty());
    }

    #[test]
    fn test_ratio_threshold_is_inclusive_and_configurable() {
        let config = CapsConfig::default();
        let matcher = CapsMatcher::new(&config);
        // 3 of 5 tokens = 0.6
        assert_eq!(matcher.caps_ratio("AAA BBB CCC ddd eee"), Some(0.6));
        assert_eq!(
            scan_with(&config, "AAA BBB CCC ddd eee", &[]).detections[0].kind,
            IssueKind::AllCapsSentence
        );
        assert_eq!(matcher.caps_ratio("a 1 2"), None);

        let strict = CapsConfig {
            sentence_ratio: 0.9,
            ..CapsConfig::default()
        };
        let kinds: Vec<_> = scan_with(&strict, "AAA BBB CCC ddd eee", &[])
            .detections
            .iter()
            .map(|d| d.kind)
            .collect();
        assert_eq!(kinds, vec![IssueKind::AllCapsWord; 3]);
    }
}
