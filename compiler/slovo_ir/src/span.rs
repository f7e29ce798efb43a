//! Source location spans.

use std::fmt;

/// Byte range into the source text.
///
/// `start` is inclusive, `end` exclusive. Offsets are in bytes even though
/// the lexer walks code points, so a span can slice the original `&str`
/// directly.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Dummy span for synthesized tokens.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create a span from byte offsets, saturating at `u32::MAX`.
    ///
    /// Sources larger than 4 GiB still lex; their tail positions simply
    /// collapse onto the last representable offset.
    pub fn from_offsets(start: usize, end: usize) -> Self {
        let clamp = |v: usize| u32::try_from(v).unwrap_or(u32::MAX);
        Span {
            start: clamp(start),
            end: clamp(end),
        }
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// One-based line and column (in code points) of `start` within `source`.
    pub fn line_col(self, source: &str) -> (usize, usize) {
        let offset = (self.start as usize).min(source.len());
        let before = source.get(..offset).unwrap_or(source);
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_col_counts_code_points() {
        let source = "а: число = 1;\nбб = 2";
        // `=` on the second line sits after two two-byte letters and a space.
        let eq = source.rfind('=').unwrap_or(0);
        let span = Span::from_offsets(eq, eq + 1);
        assert_eq!(span.line_col(source), (2, 4));
    }

    #[test]
    fn line_col_first_position() {
        assert_eq!(Span::DUMMY.line_col("x"), (1, 1));
        assert_eq!(Span::DUMMY.line_col(""), (1, 1));
    }
}
