//! Human-readable output: annotated HTML and a plain-text issue listing

use shared_types::{Document, Issue, IssueKind, Paragraph, Severity, StyleReport};

/// Longest paragraph context shown above a group of issues, in source chars
pub const MAX_SNIPPET: usize = 150;

/// Render an annotated document as a standalone HTML page
pub fn render_html(document: &Document) -> String {
    let body: String = document
        .paragraphs
        .iter()
        .map(|p| format!("  <p>{}</p>\n", render_paragraph(p)))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title}</title>
</head>
<body style="font-family: Georgia, serif; max-width: 800px; margin: 0 auto; padding: 20px;">
{body}</body>
</html>
"#,
        title = escape_html(&document.id),
        body = body
    )
}

fn render_paragraph(paragraph: &Paragraph) -> String {
    let mut html = String::new();
    for segment in paragraph.segments() {
        let mut inner = escape_html(segment.text);
        if segment.style.underline {
            inner = format!("<u>{}</u>", inner);
        }
        if segment.style.italic {
            inner = format!("<em>{}</em>", inner);
        }
        if segment.style.bold {
            inner = format!("<strong>{}</strong>", inner);
        }
        match segment.color {
            Some(color) => html.push_str(&format!(
                r#"<span style="color:{}">{}</span>"#,
                color.to_hex(),
                inner
            )),
            None => html.push_str(&inner),
        }
    }
    html
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Plain-text listing of a report, grouped by paragraph
pub fn render_report(report: &StyleReport) -> String {
    if report.is_clean() {
        return "No style guide issues found.\n".to_string();
    }

    let mut out = String::new();
    for (paragraph_index, issues) in report.by_paragraph() {
        out.push_str(&format!(
            "Paragraph {} context: {}\n\n",
            paragraph_index,
            highlighted_context(&issues)
        ));

        for issue in issues {
            out.push_str(&format!(
                "  [{}] {}\n",
                issue.severity.as_str().to_uppercase(),
                issue.severity.label()
            ));
            let matched = match issue.kind {
                IssueKind::AllCapsSentence => issue.matched_text.clone(),
                _ => format!("\"{}\"", issue.matched_text),
            };
            out.push_str(&format!("    Issue: {}\n", matched));
            out.push_str(&format!("    Explanation: {}\n", issue.message));
            if let Some(suggestion) = &issue.suggestion {
                out.push_str(&format!("    Suggestion: {}\n", suggestion));
            }
            out.push_str(&format!(
                "    Location: Paragraph {}, Character {}\n\n",
                issue.paragraph_index, issue.char_index
            ));
        }
    }

    out.push_str(&format!(
        "{} issue(s): {} error, {} warning, {} advice\n",
        report.issues.len(),
        report.count(Severity::Error),
        report.count(Severity::Warning),
        report.count(Severity::Advice),
    ));
    out
}

/// The paragraph on one line, cut to [`MAX_SNIPPET`] chars, with each
/// reported span wrapped in `**`. Span-less issues mark nothing.
fn highlighted_context(issues: &[&Issue]) -> String {
    let Some(first) = issues.first() else {
        return String::new();
    };
    let chars: Vec<char> = first.context.replace(['\n', '\r'], " ").chars().collect();
    let visible = chars.len().min(MAX_SNIPPET);

    let mut spans: Vec<(usize, usize)> = issues
        .iter()
        .filter_map(|issue| issue.span.as_ref())
        .map(|span| (span.start_offset, span.end_offset.min(visible)))
        .collect();
    spans.sort_unstable();

    let mut out = String::new();
    let mut pos = 0;
    for (start, end) in spans {
        if start < pos || start >= end {
            continue;
        }
        out.extend(&chars[pos..start]);
        out.push_str("**");
        out.extend(&chars[start..end]);
        out.push_str("**");
        pos = end;
    }
    out.extend(&chars[pos..visible]);

    if visible < chars.len() {
        out.truncate(out.trim_end().len());
        out.push_str("...");
    }
    out
}
