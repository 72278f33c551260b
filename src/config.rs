//! Scanner configuration.
//!
//! A [`LexerConfig`] is built once and shared by reference with every
//! tokenization call. It holds the keyword table (lexeme text to token
//! kind) and the numeric strictness switch.

use std::collections::HashMap;

use serde::Deserialize;

use crate::token::{Keyword, TokenKind};

/// Error raised while loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid lexer configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown keyword in configuration: {0:?}")]
    UnknownKeyword(String),
}

/// Immutable scanner configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerConfig {
    keywords: HashMap<String, TokenKind>,
    strict_numbers: bool,
}

/// On-disk shape of a configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    keywords: Option<Vec<String>>,
    strict_numbers: Option<bool>,
}

fn reserved_kind(word: &str) -> Option<TokenKind> {
    match word {
        "true" => Some(TokenKind::BooleanLiteral(true)),
        "false" => Some(TokenKind::BooleanLiteral(false)),
        _ => word.parse::<Keyword>().ok().map(TokenKind::Keyword),
    }
}

impl LexerConfig {
    /// Start from the default tables.
    #[must_use]
    pub fn builder() -> LexerConfigBuilder {
        LexerConfigBuilder {
            config: Self::default(),
        }
    }

    /// Parse a JSON configuration such as
    /// `{"keywords": ["let", "var", "true"], "strict_numbers": true}`.
    /// Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(text)?;
        let mut builder = Self::builder();
        if let Some(words) = file.keywords {
            builder = builder.clear_keywords();
            for word in words {
                let kind = reserved_kind(&word)
                    .ok_or_else(|| ConfigError::UnknownKeyword(word.clone()))?;
                builder.config.keywords.insert(word, kind);
            }
        }
        if let Some(strict) = file.strict_numbers {
            builder = builder.strict_numbers(strict);
        }
        Ok(builder.build())
    }

    /// Token kind for a complete identifier lexeme, if it is reserved.
    #[must_use]
    pub fn lookup(&self, lexeme: &str) -> Option<&TokenKind> {
        self.keywords.get(lexeme)
    }

    #[must_use]
    pub const fn strict_numbers(&self) -> bool {
        self.strict_numbers
    }

    /// Number of reserved words in the table.
    #[must_use]
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        let mut keywords: HashMap<String, TokenKind> = Keyword::ALL
            .into_iter()
            .map(|kw| (kw.as_str().to_string(), TokenKind::Keyword(kw)))
            .collect();
        keywords.insert("true".to_string(), TokenKind::BooleanLiteral(true));
        keywords.insert("false".to_string(), TokenKind::BooleanLiteral(false));
        Self {
            keywords,
            strict_numbers: false,
        }
    }
}

/// Consuming builder for [`LexerConfig`].
#[derive(Debug, Clone)]
pub struct LexerConfigBuilder {
    config: LexerConfig,
}

impl LexerConfigBuilder {
    /// Remove every reserved word, booleans included.
    #[must_use]
    pub fn clear_keywords(mut self) -> Self {
        self.config.keywords.clear();
        self
    }

    #[must_use]
    pub fn keyword(mut self, kw: Keyword) -> Self {
        self.config
            .keywords
            .insert(kw.as_str().to_string(), TokenKind::Keyword(kw));
        self
    }

    /// Lex `kw` as a plain identifier.
    #[must_use]
    pub fn without_keyword(mut self, kw: Keyword) -> Self {
        self.config.keywords.remove(kw.as_str());
        self
    }

    /// Toggle `true`/`false` as boolean literals.
    #[must_use]
    pub fn boolean_literals(mut self, enabled: bool) -> Self {
        if enabled {
            self.config
                .keywords
                .insert("true".to_string(), TokenKind::BooleanLiteral(true));
            self.config
                .keywords
                .insert("false".to_string(), TokenKind::BooleanLiteral(false));
        } else {
            self.config.keywords.remove("true");
            self.config.keywords.remove("false");
        }
        self
    }

    #[must_use]
    pub const fn strict_numbers(mut self, strict: bool) -> Self {
        self.config.strict_numbers = strict;
        self
    }

    #[must_use]
    pub fn build(self) -> LexerConfig {
        self.config
    }
}
