//! Source location tracking for error reporting.
//!
//! Provides [`Span`] to track where tokens, AST nodes and errors occur in
//! SheetScript source.

use std::fmt;

/// A region of source text.
///
/// Stores the byte range for slicing and merging, plus the 1-indexed
/// line:column of the first byte for diagnostics.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Byte offset of the first byte.
    pub start: u32,
    /// Byte offset one past the last byte.
    pub end: u32,
    /// Line number of `start` (1-indexed).
    pub line: u32,
    /// Column number of `start` (1-indexed, byte-based).
    pub col: u32,
}

impl Span {
    /// Create a span covering `start..end` that begins at `line:col`.
    #[inline]
    pub fn new(start: u32, end: u32, line: u32, col: u32) -> Self {
        debug_assert!(start <= end);
        Self {
            start,
            end,
            line,
            col,
        }
    }

    /// Create a zero-length span at a position.
    #[inline]
    pub fn point(offset: u32, line: u32, col: u32) -> Self {
        Self::new(offset, offset, line, col)
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Whether this span is empty (zero length).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`.
    ///
    /// The line:column comes from whichever span starts first.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        let (first, _) = if self.start <= other.start {
            (self, other)
        } else {
            (other, self)
        };
        Span {
            start: first.start,
            end: self.end.max(other.end),
            line: first.line,
            col: first.col,
        }
    }

    /// Slice the covered text out of `source`.
    ///
    /// Returns `None` if the span does not fit `source`.
    pub fn slice<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start as usize..self.end as usize)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
