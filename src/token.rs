use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Source location for tokens and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    /// Byte offset from the start of the buffer.
    pub offset: usize,
    /// 1-based line.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl Position {
    /// Position of the first character of a buffer.
    pub const START: Self = Self {
        offset: 0,
        line: 1,
        column: 1,
    };
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Reserved words of the language, including the built-in type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    #[serde(rename = "let")]
    Let,
    #[serde(rename = "var")]
    Var,
    #[serde(rename = "func")]
    Func,
    #[serde(rename = "return")]
    Return,
    #[serde(rename = "if")]
    If,
    #[serde(rename = "else")]
    Else,
    #[serde(rename = "switch")]
    Switch,
    #[serde(rename = "case")]
    Case,
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "for")]
    For,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "while")]
    While,
    #[serde(rename = "repeat")]
    Repeat,
    #[serde(rename = "struct")]
    Struct,
    #[serde(rename = "Void")]
    Void,
    #[serde(rename = "Int")]
    Int,
    #[serde(rename = "Double")]
    Double,
    #[serde(rename = "Bool")]
    Bool,
    #[serde(rename = "String")]
    String,
}

impl Keyword {
    /// Every keyword, in table order.
    pub const ALL: [Self; 19] = [
        Self::Let,
        Self::Var,
        Self::Func,
        Self::Return,
        Self::If,
        Self::Else,
        Self::Switch,
        Self::Case,
        Self::Default,
        Self::For,
        Self::In,
        Self::While,
        Self::Repeat,
        Self::Struct,
        Self::Void,
        Self::Int,
        Self::Double,
        Self::Bool,
        Self::String,
    ];

    /// The source spelling of the keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Let => "let",
            Self::Var => "var",
            Self::Func => "func",
            Self::Return => "return",
            Self::If => "if",
            Self::Else => "else",
            Self::Switch => "switch",
            Self::Case => "case",
            Self::Default => "default",
            Self::For => "for",
            Self::In => "in",
            Self::While => "while",
            Self::Repeat => "repeat",
            Self::Struct => "struct",
            Self::Void => "Void",
            Self::Int => "Int",
            Self::Double => "Double",
            Self::Bool => "Bool",
            Self::String => "String",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Keyword {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kw| kw.as_str() == s)
            .ok_or(())
    }
}

/// Token kinds produced by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum TokenKind {
    /// Name that is not in the keyword table.
    Identifier,
    /// Reserved word.
    Keyword(Keyword),
    /// Decimal digit run, kept as text.
    IntegerLiteral(String),
    /// `digits.digits`, kept as text.
    FloatingLiteral(String),
    /// Double-quoted string; holds the decoded contents.
    StringLiteral(String),
    /// `true` or `false`.
    BooleanLiteral(bool),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `==`
    EqualEqual,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `!`
    Not,
    /// `=`
    Equal,
    /// `->`
    Arrow,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `.`
    Dot,
    /// `;`
    Semicolon,
    /// Zero-length terminator, always the last token of a stream.
    EndOfInput,
}

impl TokenKind {
    /// Short name used in listings, e.g. `Keyword(let)` or `LessEqual`.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Keyword(kw) => format!("Keyword({kw})"),
            Self::IntegerLiteral(_) => "IntegerLiteral".to_string(),
            Self::FloatingLiteral(_) => "FloatingLiteral".to_string(),
            Self::StringLiteral(_) => "StringLiteral".to_string(),
            Self::BooleanLiteral(_) => "BooleanLiteral".to_string(),
            other => format!("{other:?}"),
        }
    }
}

/// A single token with its kind, exact source text, and location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// The consumed source text, byte for byte.
    pub lexeme: String,
    pub start: Position,
    pub end: Position,
}

impl Token {
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_spelling_round_trips() {
        for kw in Keyword::ALL {
            assert_eq!(kw.as_str().parse::<Keyword>(), Ok(kw));
        }
        assert!("lets".parse::<Keyword>().is_err());
        assert!("void".parse::<Keyword>().is_err());
    }

    #[test]
    fn kind_names() {
        assert_eq!(TokenKind::Keyword(Keyword::Func).name(), "Keyword(func)");
        assert_eq!(
            TokenKind::IntegerLiteral("7".to_string()).name(),
            "IntegerLiteral"
        );
        assert_eq!(TokenKind::LessEqual.name(), "LessEqual");
    }

    #[test]
    fn position_display() {
        let pos = Position {
            offset: 10,
            line: 3,
            column: 4,
        };
        assert_eq!(pos.to_string(), "3:4");
        assert_eq!(Position::default(), Position::START);
    }
}
