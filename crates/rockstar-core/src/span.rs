//! Source locations for diagnostics.
//!
//! Rockstar is line oriented: every statement lives on one line, so a
//! [`Span`] is a line number plus a byte column range within that line.

use std::fmt;
use std::ops::Range;

/// A region of a single source line.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column of the first byte (1-indexed).
    pub col: u32,
    /// Length in bytes.
    pub len: u32,
}

impl Span {
    #[inline]
    pub fn new(line: u32, col: u32, len: u32) -> Self {
        Self { line, col, len }
    }

    /// A zero-length span, used for end-of-line positions.
    #[inline]
    pub fn point(line: u32, col: u32) -> Self {
        Self { line, col, len: 0 }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Column one past the last byte covered.
    #[inline]
    pub fn end_col(&self) -> u32 {
        self.col + self.len
    }

    /// Extend this span up to the end of `other`.
    ///
    /// Both spans must be on the same line; a span from a later line is
    /// ignored and `self` is returned unchanged.
    #[inline]
    pub fn to(self, other: Span) -> Span {
        if other.line != self.line {
            return self;
        }
        let start = self.col.min(other.col);
        let end = self.end_col().max(other.end_col());
        Span::new(self.line, start, end - start)
    }

    /// Byte range of this span within its line's text.
    pub fn columns(&self) -> Range<usize> {
        let start = self.col.saturating_sub(1) as usize;
        start..start + self.len as usize
    }

    /// Slice the covered text out of the line this span refers to.
    pub fn slice<'a>(&self, line_text: &'a str) -> Option<&'a str> {
        line_text.get(self.columns())
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}+{}", self.line, self.col, self.len)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_line_and_column() {
        assert_eq!(Span::new(3, 15, 5).to_string(), "3:15");
    }

    #[test]
    fn to_covers_both_spans() {
        let put = Span::new(1, 1, 3);
        let target = Span::new(1, 14, 8);
        let stmt = put.to(target);
        assert_eq!(stmt.col, 1);
        assert_eq!(stmt.len, 21);
    }

    #[test]
    fn to_ignores_other_lines() {
        let first = Span::new(1, 4, 2);
        assert_eq!(first.to(Span::new(2, 1, 9)), first);
    }

    #[test]
    fn slice_extracts_text() {
        let line = "Shout Doctor Feelgood";
        let span = Span::new(1, 7, 15);
        assert_eq!(span.slice(line), Some("Doctor Feelgood"));
        assert_eq!(Span::new(1, 30, 2).slice(line), None);
    }

    #[test]
    fn point_is_empty() {
        assert!(Span::point(2, 9).is_empty());
        assert!(!Span::new(2, 9, 1).is_empty());
    }
}
