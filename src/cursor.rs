//! Character cursor over an in-memory source buffer.
//!
//! The cursor is the only mutable state of a tokenization pass. It never
//! copies the source and never reads past the end of the buffer.

use crate::token::Position;

/// Scan position over a borrowed source string.
///
/// ```
/// use swiftlet_lexer::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a\nb");
/// assert_eq!(cursor.advance(), Some('a'));
/// assert_eq!(cursor.advance(), Some('\n'));
/// assert_eq!(cursor.position().line, 2);
/// assert_eq!(cursor.position().column, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Current location.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Character at the current offset, or `None` at end of input.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.source[self.offset..].chars().next()
    }

    /// Character `n` positions ahead; `peek_ahead(0)` is `peek()`.
    #[must_use]
    pub fn peek_ahead(&self, n: usize) -> Option<char> {
        self.source[self.offset..].chars().nth(n)
    }

    /// Consume the current character. At end of input this does nothing
    /// and returns `None`.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Consume characters while `pred` holds.
    pub fn advance_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.advance();
        }
    }

    /// Consume `expected` if it is the current character.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Source text from `start` (an earlier offset) up to the current
    /// offset.
    #[must_use]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.offset]
    }

    /// Text that has not been consumed yet.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_does_not_advance() {
        let cursor = Cursor::new("ab");
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek_ahead(1), Some('b'));
        assert_eq!(cursor.peek_ahead(2), None);
        assert_eq!(cursor.position(), Position::START);
    }

    #[test]
    fn advance_at_end_is_noop() {
        let mut cursor = Cursor::new("x");
        assert_eq!(cursor.advance(), Some('x'));
        assert!(cursor.is_at_end());
        let before = cursor.position();
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.position(), before);
    }

    #[test]
    fn newline_resets_column() {
        let mut cursor = Cursor::new("ab\ncd");
        cursor.advance_while(|c| c != 'c');
        let pos = cursor.position();
        assert_eq!(pos.offset, 3);
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 1);
    }

    #[test]
    fn multibyte_counts_one_column() {
        let mut cursor = Cursor::new("é1");
        cursor.advance();
        let pos = cursor.position();
        assert_eq!(pos.offset, 2);
        assert_eq!(pos.column, 2);
        assert_eq!(cursor.peek(), Some('1'));
    }

    #[test]
    fn slice_from_borrows_consumed_text() {
        let mut cursor = Cursor::new("hello world");
        cursor.advance_while(|c| c != ' ');
        assert_eq!(cursor.slice_from(0), "hello");
        assert!(cursor.eat(' '));
        assert!(!cursor.eat(' '));
        assert_eq!(cursor.rest(), "world");
    }
}
