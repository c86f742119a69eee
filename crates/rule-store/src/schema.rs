//! On-disk rule file shapes.
//!
//! Rule files have gone through two key-naming schemes:
//!
//! ```json
//! { "terminology": [...], "flag_only": [...] }
//! { "style_guide_rule": [...], "style_guide_caution": [...] }
//! ```
//!
//! Both load; saving always writes the second scheme.

use serde::{Deserialize, Serialize};
use shared_types::{Rule, Severity};

/// Known section keys, in the order their entries are emitted
pub const SECTION_ORDER: &[&str] = &[
    "terminology",
    "style_guide_rule",
    "flag_only",
    "style_guide_caution",
    "style_guide_advice",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Rule,
    Caution,
    Advice,
    Unknown,
}

impl SectionKind {
    pub fn classify(name: &str) -> Self {
        match name {
            "terminology" | "style_guide_rule" => SectionKind::Rule,
            "flag_only" | "style_guide_caution" => SectionKind::Caution,
            "style_guide_advice" => SectionKind::Advice,
            _ => SectionKind::Unknown,
        }
    }

    pub fn default_severity(self) -> Severity {
        match self {
            SectionKind::Rule | SectionKind::Unknown => Severity::Error,
            SectionKind::Caution => Severity::Warning,
            SectionKind::Advice => Severity::Advice,
        }
    }
}

/// One entry as it appears in a rule file. Every field is optional here;
/// normalization decides what is usable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRule {
    #[serde(rename = "match", default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub replace_with: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(rename = "type", default)]
    pub rule_type: Option<String>,
}

impl RawRule {
    /// Severity precedence: explicit `severity`, then legacy `type`, then
    /// the section default.
    pub fn resolve_severity(&self, section: SectionKind) -> Severity {
        if let Some(raw) = self.severity.as_deref() {
            match raw.parse::<Severity>() {
                Ok(severity) => return severity,
                Err(e) => tracing::warn!("Ignoring severity on rule {:?}: {}", self.pattern, e),
            }
        }
        match self.rule_type.as_deref() {
            Some("flag_only") => Severity::Warning,
            Some(_) => Severity::Error,
            None => section.default_severity(),
        }
    }

    /// Returns `None` when the entry has no `match` string at all
    pub fn normalize(self, section: SectionKind) -> Option<Rule> {
        let severity = self.resolve_severity(section);
        let pattern = self.pattern?;
        let replacement = self
            .replace_with
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());
        Some(Rule {
            pattern: pattern.trim().to_string(),
            replacement,
            message: self.message.unwrap_or_default().trim().to_string(),
            severity,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CanonicalRule<'a> {
    #[serde(rename = "match")]
    pub pattern: &'a str,
    pub replace_with: Option<&'a str>,
    pub message: &'a str,
    pub severity: Severity,
}

impl<'a> From<&'a Rule> for CanonicalRule<'a> {
    fn from(rule: &'a Rule) -> Self {
        Self {
            pattern: &rule.pattern,
            replace_with: rule.replacement.as_deref(),
            message: &rule.message,
            severity: rule.severity,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CanonicalFile<'a> {
    pub style_guide_rule: Vec<CanonicalRule<'a>>,
    pub style_guide_caution: Vec<CanonicalRule<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub style_guide_advice: Vec<CanonicalRule<'a>>,
}
