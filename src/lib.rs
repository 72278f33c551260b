//! Lexer for the Swiftlet language subset.
//!
//! Turns source text into a lazy stream of typed tokens with exact
//! source positions. Lexical errors never stop the scan: each one is
//! yielded in-line, recorded in a [`Diagnostics`] collection, and the
//! scanner carries on after the offending text.
//!
//! # Quick start
//!
//! ```
//! use swiftlet_lexer::{tokenize, TokenKind};
//!
//! let kinds: Vec<TokenKind> = tokenize("x <= 3.14")
//!     .filter_map(Result::ok)
//!     .map(|t| t.kind)
//!     .collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Identifier,
//!         TokenKind::LessEqual,
//!         TokenKind::FloatingLiteral("3.14".to_string()),
//!         TokenKind::EndOfInput,
//!     ]
//! );
//! ```
//!
//! ## Collect tokens and diagnostics together
//!
//! ```
//! use swiftlet_lexer::{lex, LexErrorKind};
//!
//! let lexed = lex("let a = 1 @ 2;");
//! assert_eq!(lexed.diagnostics.len(), 1);
//! assert_eq!(
//!     lexed.diagnostics.errors()[0].kind,
//!     LexErrorKind::IllegalCharacter('@')
//! );
//! assert!(lexed.tokens.last().is_some_and(|t| t.is_eof()));
//! ```

#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

use std::sync::LazyLock;

pub mod classify;
pub mod config;
pub mod cursor;
pub mod diagnostics;
pub mod scanner;
pub mod stream;
pub mod token;

pub use config::{ConfigError, LexerConfig, LexerConfigBuilder};
pub use diagnostics::{Diagnostics, LexError, LexErrorKind};
pub use scanner::Scanner;
pub use stream::{Lexed, Tokens};
pub use token::{Keyword, Position, Token, TokenKind};

/// Unified error type for library consumers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A single lexical error.
    #[error("{0}")]
    Lex(#[from] LexError),
    /// Every error from one pass.
    #[error("{0}")]
    Diagnostics(#[from] Diagnostics),
    /// A configuration that could not be loaded.
    #[error("{0}")]
    Config(#[from] ConfigError),
}

static DEFAULT_CONFIG: LazyLock<LexerConfig> = LazyLock::new(LexerConfig::default);

/// Tokenize with the default keyword table.
#[must_use]
pub fn tokenize(source: &str) -> Tokens<'_, 'static> {
    Tokens::new(source, &DEFAULT_CONFIG)
}

/// Tokenize with a caller-provided configuration.
#[must_use]
pub fn tokenize_with<'src, 'cfg>(source: &'src str, config: &'cfg LexerConfig) -> Tokens<'src, 'cfg> {
    Tokens::new(source, config)
}

/// Tokenize the whole buffer with the default configuration.
#[must_use]
pub fn lex(source: &str) -> Lexed {
    stream::collect(tokenize(source))
}

#[must_use]
pub fn lex_with(source: &str, config: &LexerConfig) -> Lexed {
    stream::collect(tokenize_with(source, config))
}

/// Tokenize and fail if any lexical error was found.
pub fn lex_str(source: &str) -> Result<Vec<Token>, Error> {
    Ok(lex(source).into_result()?)
}
