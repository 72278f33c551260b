//! Character classes used to pick a scanning routine.

/// Coarse category of a token's first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Letter,
    Digit,
    Whitespace,
    Quote,
    Operator,
    Other,
}

#[must_use]
pub fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

#[must_use]
pub fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[must_use]
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Space, tab, line feed and carriage return. Other Unicode spacing is
/// not whitespace in this language.
#[must_use]
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

#[must_use]
pub const fn is_quote(c: char) -> bool {
    c == '"'
}

/// Characters that may begin an operator or punctuation token.
#[must_use]
pub const fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '+' | '-'
            | '*'
            | '/'
            | '%'
            | '<'
            | '>'
            | '!'
            | '='
            | '&'
            | '|'
            | '('
            | ')'
            | '{'
            | '}'
            | '['
            | ']'
            | ','
            | ':'
            | '.'
            | ';'
    )
}

#[must_use]
pub fn classify(c: char) -> CharClass {
    if is_identifier_start(c) {
        CharClass::Letter
    } else if is_digit(c) {
        CharClass::Digit
    } else if is_whitespace(c) {
        CharClass::Whitespace
    } else if is_quote(c) {
        CharClass::Quote
    } else if is_operator_char(c) {
        CharClass::Operator
    } else {
        CharClass::Other
    }
}
