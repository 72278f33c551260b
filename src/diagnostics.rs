use std::fmt;

use serde::Serialize;

use crate::token::Position;

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LexErrorKind {
    /// Character that cannot start any token.
    IllegalCharacter(char),
    /// String literal not closed before a newline or end of input.
    UnterminatedString,
    /// Numeric literal with a trailing letter or a second fraction,
    /// reported only in strict numeric mode.
    MalformedNumber,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalCharacter(ch) => {
                write!(f, "illegal character: {ch:?}")
            }
            Self::UnterminatedString => {
                write!(f, "unterminated string literal")
            }
            Self::MalformedNumber => {
                write!(f, "malformed number literal")
            }
        }
    }
}

/// Error produced during lexing. Never fatal: the scanner has already
/// moved past `offending_text` when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{kind} at line {}, column {}", position.line, position.column)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: Position,
    /// The source text consumed while recovering.
    pub offending_text: String,
}

/// Collects lexical errors over one tokenization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    errors: Vec<LexError>,
}

impl Diagnostics {
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn record(&mut self, error: LexError) {
        self.errors.push(error);
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.errors.len()
    }

    /// Recorded errors in source order.
    #[must_use]
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LexError> {
        self.errors.iter()
    }

    #[must_use]
    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a LexError;
    type IntoIter = std::slice::Iter<'a, LexError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl Extend<LexError> for Diagnostics {
    fn extend<T: IntoIterator<Item = LexError>>(&mut self, iter: T) {
        self.errors.extend(iter);
    }
}

/// One line per error, `line:column: message`.
impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", err.position, err.kind)?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}
