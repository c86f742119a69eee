//! In-memory document model: paragraphs made of formatted runs.
//!
//! The flat text of a paragraph is the concatenation of its run texts.
//! Annotation never edits run text; it only layers [`ColorSpan`]s on top of
//! the runs, so the text and the run structure survive a pass unchanged.

use crate::types::Rgb;

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RunStyle {
    pub color: Option<Rgb>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

/// Color override for the run-local character range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColorSpan {
    pub start: usize,
    pub end: usize,
    pub color: Rgb,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Run {
    pub text: String,
    #[serde(default)]
    pub style: RunStyle,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub color_spans: Vec<ColorSpan>,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn styled(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            text: text.into(),
            style,
            color_spans: Vec::new(),
        }
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Recolor the run-local character range `[start, end)`
    pub fn recolor(&mut self, start: usize, end: usize, color: Rgb) {
        debug_assert!(start < end && end <= self.char_len());
        self.color_spans.push(ColorSpan { start, end, color });
    }

    /// Effective color of run-local character `index`
    pub fn color_at(&self, index: usize) -> Option<Rgb> {
        self.color_spans
            .iter()
            .rev()
            .find(|span| span.start <= index && index < span.end)
            .map(|span| span.color)
            .or(self.style.color)
    }
}

/// A maximal slice of a paragraph sharing one effective style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub color: Option<Rgb>,
    pub style: &'a RunStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Paragraph {
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn new(runs: Vec<Run>) -> Self {
        Self { runs }
    }

    /// Single unstyled run
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            runs: vec![Run::new(text)],
        }
    }

    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn is_blank(&self) -> bool {
        self.runs.iter().all(|r| r.text.trim().is_empty())
    }

    /// Split the paragraph into segments of uniform effective color.
    ///
    /// Segments never cross run boundaries, and concatenating their texts
    /// reproduces [`Paragraph::text`].
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let mut segments = Vec::new();
        for run in &self.runs {
            let mut seg_start_byte = 0;
            let mut seg_color = None;
            for (char_idx, (byte_idx, _)) in run.text.char_indices().enumerate() {
                let color = run.color_at(char_idx);
                if char_idx == 0 {
                    seg_color = color;
                } else if color != seg_color {
                    segments.push(Segment {
                        text: &run.text[seg_start_byte..byte_idx],
                        color: seg_color,
                        style: &run.style,
                    });
                    seg_start_byte = byte_idx;
                    seg_color = color;
                }
            }
            if seg_start_byte < run.text.len() {
                segments.push(Segment {
                    text: &run.text[seg_start_byte..],
                    color: seg_color,
                    style: &run.style,
                });
            }
        }
        segments
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Document {
    pub id: String,
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    pub fn new(id: impl Into<String>, paragraphs: Vec<Paragraph>) -> Self {
        Self {
            id: id.into(),
            paragraphs,
        }
    }

    /// One paragraph per line. Blank lines are kept as blank paragraphs so
    /// paragraph numbers line up with source lines.
    pub fn from_plain_text(id: impl Into<String>, text: &str) -> Self {
        let paragraphs = text
            .lines()
            .map(|line| Paragraph::plain(line.trim_end_matches('\r')))
            .collect();
        Self::new(id, paragraphs)
    }

    /// Flat text of every paragraph, in order
    pub fn paragraph_texts(&self) -> Vec<String> {
        self.paragraphs.iter().map(Paragraph::text).collect()
    }
}
