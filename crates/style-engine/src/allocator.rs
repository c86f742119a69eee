use std::ops::Range;

/// Per-paragraph record of which character offsets already carry an
/// annotation. Claims are all-or-nothing: a range that overlaps any earlier
/// claim, even partially, is rejected whole.
#[derive(Debug, Clone)]
pub struct SpanAllocator {
    claimed: Vec<bool>,
}

impl SpanAllocator {
    /// Allocator for a paragraph of `char_len` characters
    pub fn new(char_len: usize) -> Self {
        Self {
            claimed: vec![false; char_len],
        }
    }

    pub fn is_free(&self, range: &Range<usize>) -> bool {
        range.start < range.end
            && range.end <= self.claimed.len()
            && !self.claimed[range.clone()].iter().any(|&c| c)
    }

    /// Claim every offset in `range` if none is taken yet
    pub fn claim(&mut self, range: Range<usize>) -> bool {
        if !self.is_free(&range) {
            return false;
        }
        self.claimed[range].iter_mut().for_each(|c| *c = true);
        true
    }

    pub fn is_claimed(&self, offset: usize) -> bool {
        self.claimed.get(offset).copied().unwrap_or(false)
    }

    pub fn claimed_count(&self) -> usize {
        self.claimed.iter().filter(|&&c| c).count()
    }
}
