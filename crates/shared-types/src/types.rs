use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// How strongly a style guide entry should be enforced.
///
/// The persisted rule files use two vocabularies: the three-tier
/// `advice`/`warning`/`error` and the older two-tier `caution`/`rule`.
/// Both deserialize into this enum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Advice,
    #[serde(alias = "caution")]
    Warning,
    #[serde(alias = "rule")]
    Error,
}

impl Severity {
    /// Human label used in reports
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "Style guide rule",
            Severity::Warning => "Style guide caution",
            Severity::Advice => "Style guide advice",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Advice => "advice",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "advice" => Ok(Severity::Advice),
            "warning" | "caution" => Ok(Severity::Warning),
            "error" | "rule" => Ok(Severity::Error),
            other => Err(format!("unknown severity: {}", other)),
        }
    }
}

/// 24-bit font color, serialized as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const ORANGE: Rgb = Rgb::new(255, 165, 0);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("invalid color (expected #RRGGBB): {}", s));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TextPosition {
    pub start_offset: usize, // Character offset in the paragraph text
    pub end_offset: usize,   // Exclusive end character offset
}

/// Which detector produced an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Rule,
    AllCapsSentence,
    AllCapsWord,
    RegionalSpelling,
    UnrecognizedWord,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Issue {
    #[serde(rename = "match")]
    pub matched_text: String,
    pub kind: IssueKind,
    pub severity: Severity,
    pub message: String,
    pub suggestion: Option<String>,
    pub paragraph_index: usize, // 1-based
    pub char_index: usize,      // 1-based start offset
    pub span: Option<TextPosition>,
    pub context: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StyleReport {
    pub document_id: String,
    pub issues: Vec<Issue>,
    pub checked_at: u64,
}

impl StyleReport {
    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issues grouped by paragraph, in paragraph order
    pub fn by_paragraph(&self) -> BTreeMap<usize, Vec<&Issue>> {
        let mut grouped: BTreeMap<usize, Vec<&Issue>> = BTreeMap::new();
        for issue in &self.issues {
            grouped.entry(issue.paragraph_index).or_default().push(issue);
        }
        grouped
    }
}
