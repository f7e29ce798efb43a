//! Code-point cursor over the source text.
//!
//! Positions are byte offsets so they can be stored directly in a
//! [`Span`](slovo_ir::Span); movement is always by whole code points.

pub(crate) struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// Code point under the cursor, `None` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Code point after the current one.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next()?;
        chars.next()
    }

    /// Move past the current code point. No-op at end of input.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }

    /// Advance while `pred` holds for the current code point.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Advance up to (not past) the next `delim`.
    ///
    /// Returns `true` if the delimiter was found, `false` at end of input.
    pub(crate) fn eat_until(&mut self, delim: char) -> bool {
        match self.source[self.pos..].find(delim) {
            Some(offset) => {
                self.pos += offset;
                true
            }
            None => {
                self.pos = self.source.len();
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_by_code_points() {
        let mut cursor = Cursor::new("жx");
        assert_eq!(cursor.current(), Some('ж'));
        assert_eq!(cursor.peek(), Some('x'));
        cursor.advance();
        assert_eq!(cursor.pos(), 'ж'.len_utf8());
        assert_eq!(cursor.current(), Some('x'));
        assert_eq!(cursor.peek(), None);
        cursor.advance();
        assert!(cursor.is_eof());
        cursor.advance();
        assert!(cursor.is_eof());
    }

    #[test]
    fn eat_until_stops_before_delimiter() {
        let mut cursor = Cursor::new("абв\"г");
        assert!(cursor.eat_until('"'));
        assert_eq!(cursor.slice_from(0), "абв");
        assert_eq!(cursor.current(), Some('"'));

        let mut open = Cursor::new("абв");
        assert!(!open.eat_until('"'));
        assert!(open.is_eof());
    }
}
