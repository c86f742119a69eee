//! Style-guide annotation engine.
//!
//! Scans every paragraph of a [`Document`] for house-style violations,
//! recolors the offending characters in place and returns a
//! [`StyleReport`]. Per paragraph the matchers run in a fixed order:
//!
//! 1. custom terminology rules
//! 2. capitalization heuristic
//! 3. regional spelling variants
//! 4. dictionary rarity
//!
//! A span claimed by an earlier matcher is never recolored or reported by a
//! later one.

pub mod allocator;
pub mod config;
pub mod lexicon;
pub mod matchers;
pub mod paragraph;
pub mod patterns;
pub mod render;
pub mod report;
pub mod variants;
pub mod writer;

use std::collections::HashSet;
use std::sync::Arc;

use shared_types::{Document, Issue, RuleSet, StyleReport};
use tracing::{debug, info};

pub use config::{CapsConfig, ConfigError, EngineConfig, Palette};
pub use lexicon::{EnglishModel, LayeredFrequency, Lexicon, LexiconError, WordFrequency};
pub use render::{render_html, render_report};
pub use variants::SpellingVariants;

use matchers::{CapsMatcher, DictionaryMatcher, Matcher, RegionalMatcher, TermMatcher};
use report::ReportBuilder;

/// StyleEngine entry point
pub struct StyleEngine {
    config: EngineConfig,
    terms: TermMatcher,
    variants: SpellingVariants,
    lexicon: Arc<dyn WordFrequency>,
    allow_words: HashSet<String>,
}

impl StyleEngine {
    /// Engine with default configuration, the bundled English frequency
    /// model and British-to-American spelling variants
    pub fn new(rules: RuleSet) -> Self {
        let terms = TermMatcher::new(&rules);
        debug!("Compiled {} of {} style rules", terms.len(), rules.len());
        Self {
            config: EngineConfig::default(),
            terms,
            variants: SpellingVariants::british_to_american(),
            lexicon: lexicon::english(),
            allow_words: HashSet::new(),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.allow_words = config
            .allow_words
            .iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        self.config = config;
        self
    }

    pub fn with_lexicon(mut self, lexicon: Arc<dyn WordFrequency>) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn with_variants(mut self, variants: SpellingVariants) -> Self {
        self.variants = variants;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of rules that survived compilation
    pub fn rule_count(&self) -> usize {
        self.terms.len()
    }

    /// Recolor `document` in place and report every issue found, in
    /// paragraph order, then matcher order, then position.
    pub fn annotate_in_place(&self, document: &mut Document) -> StyleReport {
        let caps = CapsMatcher::new(&self.config.caps);
        let regional = RegionalMatcher::new(&self.variants);
        let dictionary = DictionaryMatcher::new(
            &*self.lexicon,
            self.config.rarity_threshold,
            &self.allow_words,
        );
        let matchers: [&dyn Matcher; 4] = [&self.terms, &caps, &regional, &dictionary];

        let mut builder = ReportBuilder::new(document.id.clone());
        let mut skipped = 0usize;
        for (idx, para) in document.paragraphs.iter_mut().enumerate() {
            if para.is_blank() {
                skipped += 1;
                continue;
            }
            let context = para.text();
            let detections = paragraph::annotate_paragraph(&matchers, &self.config.palette, para);
            builder.push_paragraph(idx + 1, &context, detections);
        }

        let report = builder.finish();
        info!(
            document_id = %report.document_id,
            paragraphs = document.paragraphs.len(),
            skipped,
            issues = report.issues.len(),
            "Style check complete"
        );
        report
    }

    /// Owned variant of [`StyleEngine::annotate_in_place`]
    pub fn annotate(&self, mut document: Document) -> (Document, StyleReport) {
        let report = self.annotate_in_place(&mut document);
        (document, report)
    }

    /// Check raw text, one paragraph per line (for testing)
    pub fn check_text(&self, text: &str) -> Vec<Issue> {
        let mut document = Document::from_plain_text("text", text);
        self.annotate_in_place(&mut document).issues
    }
}

impl Default for StyleEngine {
    fn default() -> Self {
        Self::new(RuleSet::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{IssueKind, Paragraph, Rgb, Rule, Run, Severity};

    fn engine(rules: Vec<Rule>) -> StyleEngine {
        StyleEngine::new(RuleSet::new(rules))
    }

    fn summary(issues: &[Issue]) -> Vec<(IssueKind, &str, usize)> {
        issues
            .iter()
            .map(|i| (i.kind, i.matched_text.as_str(), i.char_index))
            .collect()
    }

    #[test]
    fn test_rule_matches_whole_words_only() {
        let engine = engine(vec![Rule::new("colour", "Use the house term", Severity::Error)]);
        let issues = engine.check_text("colourful");
        assert!(issues.iter().all(|i| i.kind != IssueKind::Rule));

        let issues = engine.check_text("the colour is");
        assert_eq!(summary(&issues), vec![(IssueKind::Rule, "colour", 5)]);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].paragraph_index, 1);
    }

    #[test]
    fn test_shouting_paragraph_single_issue() {
        let issues = StyleEngine::default().check_text("THIS IS A TEST sentence");
        assert_eq!(
            summary(&issues),
            vec![(IssueKind::AllCapsSentence, "ALL CAPS sentence", 1)]
        );
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].span, None);
    }

    #[test]
    fn test_single_acronym_flagged_alone() {
        let issues = StyleEngine::default().check_text("ABC is a normal case word");
        assert_eq!(summary(&issues), vec![(IssueKind::AllCapsWord, "ABC", 1)]);
    }

    #[test]
    fn test_regional_spelling_keeps_source_case() {
        let engine = StyleEngine::default();
        let issues = engine.check_text("the colour is");
        assert_eq!(summary(&issues), vec![(IssueKind::RegionalSpelling, "colour", 5)]);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].suggestion.as_deref(), Some("color"));

        let issues = engine.check_text("Colour is key");
        assert_eq!(issues[0].matched_text, "Colour");
        assert_eq!(issues[0].suggestion.as_deref(), Some("Color"));
    }

    #[test]
    fn test_rare_word_flagged_common_word_not() {
        let issues = StyleEngine::default().check_text("the qwzxv yarn");
        assert_eq!(summary(&issues), vec![(IssueKind::UnrecognizedWord, "qwzxv", 5)]);
        assert_eq!(issues[0].severity, Severity::Error);
        assert!(StyleEngine::default().check_text("the the the").is_empty());
    }

    #[test]
    fn test_everyday_catalog_copy_is_recognized() {
        let engine = StyleEngine::default();
        let issues = engine.check_text(
            "The company sourced shirts, jackets and bottles from a labor union catalog yesterday.",
        );
        assert!(issues.iter().all(|i| i.kind != IssueKind::UnrecognizedWord), "{issues:?}");
        assert!(engine.check_text("The gray yarn").is_empty());
    }

    #[test]
    fn test_custom_rule_beats_spelling_variant() {
        let engine = engine(vec![Rule::new("colour", "Banned term", Severity::Advice)]);
        let mut doc = Document::from_plain_text("doc", "the colour is");
        let report = engine.annotate_in_place(&mut doc);
        assert_eq!(summary(&report.issues), vec![(IssueKind::Rule, "colour", 5)]);
        // Advice color, not the warning color the spelling matcher would use
        assert_eq!(doc.paragraphs[0].runs[0].color_at(4), Some(Rgb::YELLOW));
    }

    #[test]
    fn test_blank_paragraphs_skipped_but_counted() {
        let doc = Document::new(
            "doc",
            vec![
                Paragraph::plain(""),
                Paragraph::plain("   "),
                Paragraph::plain("the colour is"),
            ],
        );
        let (doc, report) = StyleEngine::default().annotate(doc);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].paragraph_index, 3);
        assert!(doc.paragraphs[1].runs[0].color_spans.is_empty());
    }

    #[test]
    fn test_repeated_rule_colored_every_time_reported_once() {
        let engine = engine(vec![Rule::new("sustainable", "Vague claim", Severity::Warning)]);
        let mut doc = Document::from_plain_text("doc", "Sustainable yarn and sustainable dye");
        let report = engine.annotate_in_place(&mut doc);
        assert_eq!(summary(&report.issues), vec![(IssueKind::Rule, "Sustainable", 1)]);
        let run = &doc.paragraphs[0].runs[0];
        assert_eq!(run.color_at(0), Some(Rgb::ORANGE));
        assert_eq!(run.color_at(21), Some(Rgb::ORANGE));
        assert_eq!(run.color_at(12), None);
    }

    #[test]
    fn test_issue_order_paragraph_then_phase_then_position() {
        let engine = engine(vec![Rule::new("organic cotton", "Capitalize", Severity::Error)
            .with_replacement("Organic Cotton")]);
        let issues = engine.check_text("qwzxv grey GOTS organic cotton\nthe colour");
        assert_eq!(
            summary(&issues),
            vec![
                (IssueKind::Rule, "organic cotton", 17),
                (IssueKind::AllCapsWord, "GOTS", 12),
                (IssueKind::RegionalSpelling, "grey", 7),
                (IssueKind::UnrecognizedWord, "qwzxv", 1),
                (IssueKind::RegionalSpelling, "colour", 5),
            ]
        );
        assert_eq!(issues[4].paragraph_index, 2);
        assert_eq!(issues[0].context, "qwzxv grey GOTS organic cotton");
    }

    #[test]
    fn test_match_straddling_runs_recolors_each_run() {
        let engine = engine(vec![Rule::new("organic cotton", "Capitalize", Severity::Error)]);
        let doc = Document::new(
            "doc",
            vec![Paragraph::new(vec![
                Run::new("our organ"),
                Run::new("ic cot"),
                Run::new("ton yarn"),
            ])],
        );
        let (doc, report) = engine.annotate(doc);
        assert_eq!(report.issues.len(), 1);
        let runs = &doc.paragraphs[0].runs;
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].color_at(3), None);
        assert_eq!(runs[0].color_at(4), Some(Rgb::RED));
        assert_eq!(runs[1].color_at(5), Some(Rgb::RED));
        assert_eq!(runs[2].color_at(2), Some(Rgb::RED));
        assert_eq!(runs[2].color_at(3), None);
        assert_eq!(doc.paragraphs[0].text(), "our organic cotton yarn");
    }

    #[test]
    fn test_config_allow_words_palette_and_thresholds() {
        let config = EngineConfig {
            allow_words: vec!["  Qwzxv ".to_string()],
            palette: Palette {
                warning: Rgb::new(0, 128, 255),
                ..Palette::default()
            },
            ..EngineConfig::default()
        };
        let engine = StyleEngine::default().with_config(config);
        let mut doc = Document::from_plain_text("doc", "qwzxv grey");
        let report = engine.annotate_in_place(&mut doc);
        assert_eq!(summary(&report.issues), vec![(IssueKind::RegionalSpelling, "grey", 7)]);
        assert_eq!(doc.paragraphs[0].runs[0].color_at(6), Some(Rgb::new(0, 128, 255)));
    }

    #[test]
    fn test_custom_lexicon_and_variants() {
        let lexicon = Lexicon::from_pairs([("the", 0.05), ("gray", 1e-4)]);
        let engine = StyleEngine::default()
            .with_lexicon(Arc::new(lexicon))
            .with_variants(SpellingVariants::from_pairs([("gray", "grey")]));
        let issues = engine.check_text("the gray yarn");
        assert_eq!(
            summary(&issues),
            vec![
                (IssueKind::RegionalSpelling, "gray", 5),
                (IssueKind::UnrecognizedWord, "yarn", 10),
            ]
        );
    }

    #[test]
    fn test_rule_count_skips_empty_patterns() {
        let engine = engine(vec![
            Rule::new("", "empty", Severity::Error),
            Rule::new("fibre", "Use fiber", Severity::Error),
        ]);
        assert_eq!(engine.rule_count(), 1);
    }
}
