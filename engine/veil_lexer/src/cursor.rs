//! Grapheme-level cursor over template source.

use unicode_segmentation::{GraphemeIndices, UnicodeSegmentation};

/// Forward iterator over the grapheme clusters of a source slice, with
/// one-slot lookahead.
///
/// Classification works on user-perceived characters rather than bytes or
/// code points so that multi-byte whitespace and symbols land in one piece.
/// Offsets are absolute byte offsets into the full source buffer, so regions
/// built from them line up with what the pattern scanner reports.
pub struct Graphemes<'source> {
    iter: GraphemeIndices<'source>,
    current: Option<(usize, &'source str)>,
    base: usize,
    end: usize,
}

impl<'source> Graphemes<'source> {
    /// Start iterating at byte offset `start` of `source`.
    ///
    /// # Contract
    ///
    /// `start` must fall on a character boundary of `source`.
    pub fn new(source: &'source str, start: usize) -> Self {
        let mut iter = source[start..].grapheme_indices(true);
        let current = iter.next();
        Self {
            iter,
            current,
            base: start,
            end: source.len(),
        }
    }

    /// The current grapheme cluster, or `None` once exhausted.
    pub fn current(&self) -> Option<&'source str> {
        self.current.map(|(_, grapheme)| grapheme)
    }

    /// Absolute byte offset of the current grapheme; the buffer length once
    /// exhausted.
    pub fn offset(&self) -> usize {
        match self.current {
            Some((relative, _)) => self.base + relative,
            None => self.end,
        }
    }

    /// Advance past the current grapheme, returning it.
    pub fn advance(&mut self) -> Option<&'source str> {
        let (_, grapheme) = self.current?;
        self.current = self.iter.next();
        Some(grapheme)
    }

    /// The grapheme after the current one, without advancing.
    pub fn peek(&self) -> Option<&'source str> {
        self.iter.as_str().graphemes(true).next()
    }
}
