pub mod document;
pub mod rule;
pub mod types;

pub use document::{ColorSpan, Document, Paragraph, Run, RunStyle, Segment};
pub use rule::{Rule, RuleSet};
pub use types::{Issue, IssueKind, Rgb, Severity, StyleReport, TextPosition};
