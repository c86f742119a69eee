//! Maps flat-text character offsets back onto a paragraph's runs and
//! recolors the covered characters.

use std::ops::Range;

use shared_types::{Paragraph, Rgb};

use crate::config::Palette;
use crate::matchers::Mark;

/// Offset-to-run lookup for one paragraph. Built once per paragraph pass
/// and dropped with it.
#[derive(Debug, Clone)]
pub struct RunIndex {
    /// Character offset at which each run begins
    run_starts: Vec<usize>,
    /// Owning run for every character offset
    char_to_run: Vec<usize>,
}

impl RunIndex {
    pub fn build(paragraph: &Paragraph) -> Self {
        let mut run_starts = Vec::with_capacity(paragraph.runs.len());
        let mut char_to_run = Vec::new();
        for (run_idx, run) in paragraph.runs.iter().enumerate() {
            run_starts.push(char_to_run.len());
            char_to_run.extend(std::iter::repeat(run_idx).take(run.char_len()));
        }
        Self {
            run_starts,
            char_to_run,
        }
    }

    pub fn char_len(&self) -> usize {
        self.char_to_run.len()
    }

    pub fn run_at(&self, offset: usize) -> usize {
        self.char_to_run[offset]
    }

    /// Run-local sub-ranges covered by `range`, as `(run, local range)`.
    ///
    /// Panics if `range` reaches past the paragraph; the index is always
    /// built from the same paragraph the offsets were computed on.
    pub fn split(&self, range: Range<usize>) -> Vec<(usize, Range<usize>)> {
        if range.start >= range.end {
            return Vec::new();
        }
        let first = self.char_to_run[range.start];
        let last = self.char_to_run[range.end - 1];
        (first..=last)
            .filter_map(|run_idx| {
                let run_start = self.run_starts[run_idx];
                let run_end = self
                    .run_starts
                    .get(run_idx + 1)
                    .copied()
                    .unwrap_or(self.char_to_run.len());
                let start = range.start.max(run_start);
                let end = range.end.min(run_end);
                (start < end).then(|| (run_idx, start - run_start..end - run_start))
            })
            .collect()
    }
}

/// Applies severity colors to one paragraph
pub struct FormattingWriter<'p> {
    paragraph: &'p mut Paragraph,
    index: RunIndex,
    palette: &'p Palette,
}

impl<'p> FormattingWriter<'p> {
    pub fn new(paragraph: &'p mut Paragraph, palette: &'p Palette) -> Self {
        let index = RunIndex::build(paragraph);
        Self {
            paragraph,
            index,
            palette,
        }
    }

    pub fn apply(&mut self, mark: &Mark) {
        let color = self.palette.color_for(mark.severity);
        self.paint(mark.span.clone(), color);
    }

    /// Recolor `[start, end)` in flat-text coordinates, run by run
    pub fn paint(&mut self, range: Range<usize>, color: Rgb) {
        for (run_idx, local) in self.index.split(range) {
            self.paragraph.runs[run_idx].recolor(local.start, local.end, color);
        }
    }
}
