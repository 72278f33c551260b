//! Token stream driver.

use std::iter::FusedIterator;

use tracing::{debug, trace, warn};

use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::diagnostics::{Diagnostics, LexError};
use crate::scanner::Scanner;
use crate::token::Token;

/// Lazy token sequence over one source buffer.
///
/// Yields `Ok(token)` and `Err(error)` in source order, ends with exactly
/// one `EndOfInput` token, then returns `None` forever. Errors are also
/// recorded in [`Tokens::diagnostics`].
#[derive(Debug, Clone)]
pub struct Tokens<'src, 'cfg> {
    cursor: Cursor<'src>,
    scanner: Scanner<'cfg>,
    diagnostics: Diagnostics,
    produced: usize,
    finished: bool,
}

impl<'src, 'cfg> Tokens<'src, 'cfg> {
    pub(crate) fn new(source: &'src str, config: &'cfg LexerConfig) -> Self {
        debug!(target: "swiftlet::lexer", bytes = source.len(), "starting tokenization");
        Self {
            cursor: Cursor::new(source),
            scanner: Scanner::new(config),
            diagnostics: Diagnostics::new(),
            produced: 0,
            finished: false,
        }
    }

    /// Errors seen so far.
    #[must_use]
    pub const fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    #[must_use]
    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}

impl Iterator for Tokens<'_, '_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        self.scanner.skip_trivia(&mut self.cursor);
        match self.scanner.next_token(&mut self.cursor) {
            Ok(token) => {
                trace!(
                    target: "swiftlet::lexer",
                    kind = ?token.kind,
                    lexeme = %token.lexeme,
                    line = token.start.line,
                    column = token.start.column,
                    "token"
                );
                if token.is_eof() {
                    self.finished = true;
                    debug!(
                        target: "swiftlet::lexer",
                        tokens = self.produced,
                        errors = self.diagnostics.len(),
                        "tokenization finished"
                    );
                } else {
                    self.produced += 1;
                }
                Some(Ok(token))
            }
            Err(err) => {
                warn!(
                    target: "swiftlet::lexer",
                    line = err.position.line,
                    column = err.position.column,
                    "{}",
                    err.kind
                );
                self.diagnostics.record(err.clone());
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Tokens<'_, '_> {}

/// Every token of a buffer plus the errors met along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexed {
    /// Always ends with `EndOfInput`.
    pub tokens: Vec<Token>,
    pub diagnostics: Diagnostics,
}

impl Lexed {
    /// The tokens, or every recorded error if there was at least one.
    pub fn into_result(self) -> Result<Vec<Token>, Diagnostics> {
        if self.diagnostics.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.diagnostics)
        }
    }
}

/// Drain a token stream into a [`Lexed`].
#[must_use]
pub fn collect(mut stream: Tokens<'_, '_>) -> Lexed {
    let tokens: Vec<Token> = stream.by_ref().filter_map(Result::ok).collect();
    Lexed {
        tokens,
        diagnostics: stream.into_diagnostics(),
    }
}
