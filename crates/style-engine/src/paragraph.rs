//! One paragraph's pass through the matcher phases.
//!
//! RULE_MATCH -> CAPS_CHECK -> SPELLING_VARIANT_CHECK -> DICTIONARY_CHECK,
//! all sharing one [`SpanAllocator`] and one [`FormattingWriter`]. Blank
//! paragraphs are skipped by the caller.

use shared_types::Paragraph;
use tracing::debug;

use crate::allocator::SpanAllocator;
use crate::config::Palette;
use crate::matchers::{Detection, Matcher, ParagraphText};
use crate::writer::FormattingWriter;

/// Run `matchers` (already in phase order) over `paragraph`, recoloring it
/// in place. Detections come back phase by phase, left to right within a
/// phase.
pub fn annotate_paragraph(
    matchers: &[&dyn Matcher],
    palette: &Palette,
    paragraph: &mut Paragraph,
) -> Vec<Detection> {
    debug_assert!(matchers.windows(2).all(|w| w[0].phase() < w[1].phase()));

    let text = paragraph.text();
    let para_text = ParagraphText::new(&text);
    let mut claims = SpanAllocator::new(para_text.char_len());
    let mut writer = FormattingWriter::new(paragraph, palette);
    let mut detections = Vec::new();

    for matcher in matchers {
        let mut out = matcher.scan(&para_text, &mut claims);
        for mark in &out.marks {
            writer.apply(mark);
        }
        // Stable, so equal starts keep emission order
        out.detections.sort_by_key(Detection::start);
        debug!(
            phase = matcher.phase().name(),
            marks = out.marks.len(),
            issues = out.detections.len(),
            "phase complete"
        );
        detections.extend(out.detections);
    }

    detections
}
