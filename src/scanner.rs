//! The token scanner: one maximal-munch token per call.

use crate::classify::{CharClass, classify, is_digit, is_identifier_continue, is_whitespace};
use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::diagnostics::{LexError, LexErrorKind};
use crate::token::{Position, Token, TokenKind};

/// Operators tried before the single-character table.
static TWO_CHAR_OPERATORS: [(&str, TokenKind); 7] = [
    ("==", TokenKind::EqualEqual),
    ("!=", TokenKind::NotEqual),
    ("<=", TokenKind::LessEqual),
    (">=", TokenKind::GreaterEqual),
    ("&&", TokenKind::AndAnd),
    ("||", TokenKind::OrOr),
    ("->", TokenKind::Arrow),
];

static ONE_CHAR_OPERATORS: [(char, TokenKind); 19] = [
    ('+', TokenKind::Plus),
    ('-', TokenKind::Minus),
    ('*', TokenKind::Star),
    ('/', TokenKind::Slash),
    ('%', TokenKind::Percent),
    ('<', TokenKind::Less),
    ('>', TokenKind::Greater),
    ('!', TokenKind::Not),
    ('=', TokenKind::Equal),
    ('(', TokenKind::LParen),
    (')', TokenKind::RParen),
    ('{', TokenKind::LBrace),
    ('}', TokenKind::RBrace),
    ('[', TokenKind::LBracket),
    (']', TokenKind::RBracket),
    (',', TokenKind::Comma),
    (':', TokenKind::Colon),
    ('.', TokenKind::Dot),
    (';', TokenKind::Semicolon),
];

/// Produces tokens from a cursor using a shared configuration.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'cfg> {
    config: &'cfg LexerConfig,
}

impl<'cfg> Scanner<'cfg> {
    #[must_use]
    pub const fn new(config: &'cfg LexerConfig) -> Self {
        Self { config }
    }

    /// Skip whitespace and `//` comments. The comment's terminating
    /// newline is left to the whitespace loop.
    pub fn skip_trivia(&self, cursor: &mut Cursor<'_>) {
        loop {
            match cursor.peek() {
                Some(c) if is_whitespace(c) => {
                    cursor.advance();
                }
                Some('/') if cursor.peek_ahead(1) == Some('/') => {
                    cursor.advance_while(|c| c != '\n');
                }
                _ => break,
            }
        }
    }

    /// Scan one token starting at the cursor.
    ///
    /// On error the offending text has already been consumed, so calling
    /// again always makes progress.
    pub fn next_token(&self, cursor: &mut Cursor<'_>) -> Result<Token, LexError> {
        let start = cursor.position();
        let Some(ch) = cursor.peek() else {
            return Ok(Token {
                kind: TokenKind::EndOfInput,
                lexeme: String::new(),
                start,
                end: start,
            });
        };

        match classify(ch) {
            CharClass::Letter => Ok(self.scan_word(cursor, start)),
            CharClass::Digit => self.scan_number(cursor, start),
            CharClass::Quote => scan_string(cursor, start),
            CharClass::Operator => scan_operator(cursor, ch, start),
            CharClass::Whitespace => {
                self.skip_trivia(cursor);
                self.next_token(cursor)
            }
            CharClass::Other => {
                cursor.advance();
                Err(error(cursor, LexErrorKind::IllegalCharacter(ch), start))
            }
        }
    }

    fn scan_word(&self, cursor: &mut Cursor<'_>, start: Position) -> Token {
        cursor.advance_while(is_identifier_continue);
        let lexeme = cursor.slice_from(start.offset);
        let kind = self
            .config
            .lookup(lexeme)
            .cloned()
            .unwrap_or(TokenKind::Identifier);
        token(cursor, kind, start)
    }

    fn scan_number(&self, cursor: &mut Cursor<'_>, start: Position) -> Result<Token, LexError> {
        cursor.advance_while(is_digit);

        let is_float = cursor.peek() == Some('.') && cursor.peek_ahead(1).is_some_and(is_digit);
        if is_float {
            cursor.advance();
            cursor.advance_while(is_digit);
        }

        if self.config.strict_numbers() && has_malformed_tail(cursor) {
            loop {
                match cursor.peek() {
                    Some(c) if is_identifier_continue(c) => {
                        cursor.advance();
                    }
                    Some('.') if cursor.peek_ahead(1).is_some_and(is_digit) => {
                        cursor.advance();
                    }
                    _ => break,
                }
            }
            return Err(error(cursor, LexErrorKind::MalformedNumber, start));
        }

        let text = cursor.slice_from(start.offset).to_string();
        let kind = if is_float {
            TokenKind::FloatingLiteral(text)
        } else {
            TokenKind::IntegerLiteral(text)
        };
        Ok(token(cursor, kind, start))
    }
}

/// A number followed directly by a name character or another `.digit`.
fn has_malformed_tail(cursor: &Cursor<'_>) -> bool {
    match cursor.peek() {
        Some('.') => cursor.peek_ahead(1).is_some_and(is_digit),
        Some(c) => is_identifier_continue(c),
        None => false,
    }
}

fn scan_string(cursor: &mut Cursor<'_>, start: Position) -> Result<Token, LexError> {
    cursor.advance(); // opening quote

    let mut value = String::new();
    loop {
        match cursor.peek() {
            None | Some('\n') => {
                return Err(error(cursor, LexErrorKind::UnterminatedString, start));
            }
            Some('"') => {
                cursor.advance();
                break;
            }
            Some('\\') => {
                cursor.advance();
                match cursor.peek() {
                    None | Some('\n') => {
                        return Err(error(cursor, LexErrorKind::UnterminatedString, start));
                    }
                    Some(c) => {
                        cursor.advance();
                        match c {
                            'n' => value.push('\n'),
                            't' => value.push('\t'),
                            '"' => value.push('"'),
                            '\\' => value.push('\\'),
                            other => {
                                value.push('\\');
                                value.push(other);
                            }
                        }
                    }
                }
            }
            Some(c) => {
                cursor.advance();
                value.push(c);
            }
        }
    }

    Ok(token(cursor, TokenKind::StringLiteral(value), start))
}

fn scan_operator(cursor: &mut Cursor<'_>, ch: char, start: Position) -> Result<Token, LexError> {
    let rest = cursor.rest();
    if let Some((_, kind)) = TWO_CHAR_OPERATORS
        .iter()
        .find(|(pattern, _)| rest.starts_with(pattern))
    {
        cursor.advance();
        cursor.advance();
        return Ok(token(cursor, kind.clone(), start));
    }

    cursor.advance();
    ONE_CHAR_OPERATORS
        .iter()
        .find(|(c, _)| *c == ch)
        .map(|(_, kind)| token(cursor, kind.clone(), start))
        .ok_or_else(|| error(cursor, LexErrorKind::IllegalCharacter(ch), start))
}

fn token(cursor: &Cursor<'_>, kind: TokenKind, start: Position) -> Token {
    Token {
        kind,
        lexeme: cursor.slice_from(start.offset).to_string(),
        start,
        end: cursor.position(),
    }
}

fn error(cursor: &Cursor<'_>, kind: LexErrorKind, start: Position) -> LexError {
    LexError {
        kind,
        position: start,
        offending_text: cursor.slice_from(start.offset).to_string(),
    }
}
