//! Turns per-paragraph detections into the issue report

use shared_types::{Issue, StyleReport, TextPosition};

use crate::matchers::Detection;

/// Accumulates issues in paragraph order
#[derive(Debug)]
pub struct ReportBuilder {
    document_id: String,
    issues: Vec<Issue>,
}

impl ReportBuilder {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            issues: Vec::new(),
        }
    }

    /// Attach location and context to one paragraph's detections.
    /// `paragraph_index` is 1-based.
    pub fn push_paragraph(
        &mut self,
        paragraph_index: usize,
        context: &str,
        detections: impl IntoIterator<Item = Detection>,
    ) {
        self.issues.extend(
            detections
                .into_iter()
                .map(|detection| to_issue(detection, paragraph_index, context)),
        );
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn finish(self) -> StyleReport {
        StyleReport {
            document_id: self.document_id,
            issues: self.issues,
            checked_at: chrono::Utc::now().timestamp() as u64,
        }
    }
}

fn to_issue(detection: Detection, paragraph_index: usize, context: &str) -> Issue {
    // Paragraph-level findings point at the first character
    let char_index = detection.start() + 1;
    Issue {
        matched_text: detection.matched_text,
        kind: detection.kind,
        severity: detection.severity,
        message: detection.message,
        suggestion: detection.suggestion,
        paragraph_index,
        char_index,
        span: detection.span.map(|span| TextPosition {
            start_offset: span.start,
            end_offset: span.end,
        }),
        context: context.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{IssueKind, Severity};

    fn detection(span: Option<std::ops::Range<usize>>) -> Detection {
        Detection {
            kind: IssueKind::RegionalSpelling,
            severity: Severity::Warning,
            matched_text: "colour".to_string(),
            span,
            message: "British spelling detected. Use American English.".to_string(),
            suggestion: Some("color".to_string()),
        }
    }

    #[test]
    fn test_locations_are_one_based() {
        let mut builder = ReportBuilder::new("doc-1");
        builder.push_paragraph(3, "the colour is", vec![detection(Some(4..10))]);
        let report = builder.finish();
        let issue = &report.issues[0];
        assert_eq!(issue.paragraph_index, 3);
        assert_eq!(issue.char_index, 5);
        assert_eq!(
            issue.span,
            Some(TextPosition {
                start_offset: 4,
                end_offset: 10
            })
        );
        assert_eq!(issue.context, "the colour is");
        assert_eq!(report.document_id, "doc-1");
    }

    #[test]
    fn test_paragraph_level_issue_points_at_first_char() {
        let mut builder = ReportBuilder::new("doc");
        builder.push_paragraph(1, "LOUD TEXT", vec![detection(None)]);
        assert_eq!(builder.len(), 1);
        let report = builder.finish();
        assert_eq!(report.issues[0].char_index, 1);
        assert_eq!(report.issues[0].span, None);
    }
}
