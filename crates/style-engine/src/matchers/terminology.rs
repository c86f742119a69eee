use std::collections::HashSet;

use regex::Regex;
use shared_types::{IssueKind, Rule, RuleSet};
use tracing::warn;

use super::{Detection, Mark, Matcher, ParagraphText, Phase, PhaseOutput};
use crate::allocator::SpanAllocator;
use crate::patterns::whole_word_pattern;

/// A rule with its whole-word regex built once per engine
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub rule: Rule,
    regex: Regex,
}

/// Compile rules in order, dropping empty patterns
pub fn compile_rules(rules: &RuleSet) -> Vec<CompiledRule> {
    rules
        .iter()
        .filter(|rule| rule.is_matchable())
        .filter_map(|rule| match Regex::new(&whole_word_pattern(&rule.pattern)) {
            Ok(regex) => Some(CompiledRule {
                rule: rule.clone(),
                regex,
            }),
            Err(e) => {
                warn!("Skipping rule {:?}: {}", rule.pattern, e);
                None
            }
        })
        .collect()
}

/// Custom terminology rules from the style guide
#[derive(Debug, Clone, Default)]
pub struct TermMatcher {
    rules: Vec<CompiledRule>,
}

impl TermMatcher {
    pub fn new(rules: &RuleSet) -> Self {
        Self {
            rules: compile_rules(rules),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every whole-word occurrence as `(start_byte, end_byte, rule)`, rule by
    /// rule in list order, left to right within a rule. Lazy; ignores claims.
    pub fn occurrences<'t>(
        &'t self,
        text: &'t str,
    ) -> impl Iterator<Item = (usize, usize, &'t Rule)> + 't {
        self.rules.iter().flat_map(move |compiled| {
            compiled
                .regex
                .find_iter(text)
                .map(move |m| (m.start(), m.end(), &compiled.rule))
        })
    }
}

impl Matcher for TermMatcher {
    fn phase(&self) -> Phase {
        Phase::RuleMatch
    }

    /// Every unclaimed occurrence is claimed and colored; only the first
    /// occurrence of each pattern in the paragraph is reported.
    fn scan(&self, text: &ParagraphText<'_>, claims: &mut SpanAllocator) -> PhaseOutput {
        let mut out = PhaseOutput::default();
        let mut reported: HashSet<&str> = HashSet::new();
        let raw = text.as_str();

        for (start, end, rule) in self.occurrences(raw) {
            let span = text.to_char_range(start..end);
            if !claims.claim(span.clone()) {
                continue;
            }
            out.marks.push(Mark {
                span: span.clone(),
                severity: rule.severity,
            });
            if reported.insert(rule.pattern.as_str()) {
                out.detections.push(Detection {
                    kind: IssueKind::Rule,
                    severity: rule.severity,
                    matched_text: raw[start..end].to_string(),
                    span: Some(span),
                    message: rule.message.clone(),
                    suggestion: rule.replacement.clone(),
                });
            }
        }

        out
    }
}
