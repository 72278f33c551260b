#![allow(dead_code)]

use swiftlet_lexer::{LexError, Token, TokenKind, tokenize};

/// Kinds of every successfully scanned token, `EndOfInput` included.
pub fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input)
        .filter_map(Result::ok)
        .map(|t| t.kind)
        .collect()
}

/// Tokens of an input that must lex without errors.
pub fn tokens(input: &str) -> Vec<Token> {
    tokenize(input)
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_else(|e| panic!("unexpected lex error: {e}\n--- input ---\n{input}"))
}

/// Rebuild the input from token lexemes, error texts, and the gaps
/// between them (skipped whitespace and comments).
pub fn reconstruct(input: &str) -> String {
    let mut out = String::new();
    let mut last = 0;
    for item in tokenize(input) {
        let (offset, text) = match &item {
            Ok(token) => (token.start.offset, token.lexeme.clone()),
            Err(LexError {
                position,
                offending_text,
                ..
            }) => (position.offset, offending_text.clone()),
        };
        assert!(
            offset >= last,
            "overlapping items at offset {offset} (previous end {last})"
        );
        out.push_str(&input[last..offset]);
        out.push_str(&text);
        last = offset + text.len();
    }
    out.push_str(&input[last..]);
    out
}
