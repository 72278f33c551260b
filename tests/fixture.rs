//! The conformance fixture exercises every construct of the language.

mod common;

use swiftlet_lexer::{Keyword, Token, TokenKind, lex};

const FIXTURE: &str = include_str!("fixtures/conformance.swift");

fn fixture_tokens() -> Vec<Token> {
    let lexed = lex(FIXTURE);
    assert!(
        lexed.diagnostics.is_empty(),
        "fixture produced diagnostics:\n{}",
        lexed.diagnostics
    );
    lexed.tokens
}

fn count(tokens: &[Token], kind: &TokenKind) -> usize {
    tokens.iter().filter(|t| &t.kind == kind).count()
}

#[test]
fn fixture_lexes_cleanly() {
    let tokens = fixture_tokens();
    let eof = tokens.last().unwrap();
    assert!(eof.is_eof());
    assert_eq!(eof.start.offset, FIXTURE.len());
    assert_eq!(eof.start.line, 153);
    assert_eq!(count(&tokens, &TokenKind::EndOfInput), 1);
}

#[test]
fn fixture_keyword_counts() {
    let tokens = fixture_tokens();
    assert_eq!(count(&tokens, &TokenKind::Keyword(Keyword::Func)), 4);
    assert_eq!(count(&tokens, &TokenKind::Keyword(Keyword::Struct)), 3);
    assert_eq!(count(&tokens, &TokenKind::Keyword(Keyword::Let)), 27);
    assert_eq!(count(&tokens, &TokenKind::Keyword(Keyword::Var)), 17);
    assert_eq!(count(&tokens, &TokenKind::Keyword(Keyword::Repeat)), 1);
}

#[test]
fn fixture_literals() {
    let tokens = fixture_tokens();
    let floats: Vec<_> = tokens
        .iter()
        .filter(|t| matches!(t.kind, TokenKind::FloatingLiteral(_)))
        .map(|t| t.lexeme.as_str())
        .collect();
    assert_eq!(floats, ["3.14", "2.5", "10.0", "20.0", "25.0", "2.0"]);

    let strings = tokens
        .iter()
        .filter(|t| matches!(t.kind, TokenKind::StringLiteral(_)))
        .count();
    assert_eq!(strings, 17);
    assert_eq!(count(&tokens, &TokenKind::BooleanLiteral(true)), 4);
}

#[test]
fn fixture_comments_never_surface() {
    let tokens = fixture_tokens();
    assert!(tokens.iter().all(|t| !t.lexeme.starts_with("//")));
    // Section headings live only in comments.
    assert!(!tokens.iter().any(|t| t.lexeme == "PRIMITIVE"));
}

#[test]
fn fixture_array_declaration() {
    let tokens = fixture_tokens();
    let start = tokens
        .iter()
        .position(|t| t.lexeme == "numbers")
        .unwrap();
    let kinds: Vec<_> = tokens[start - 1..start + 7]
        .iter()
        .map(|t| t.kind.clone())
        .collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Keyword(Keyword::Var),
            TokenKind::Identifier,
            TokenKind::LBracket,
            TokenKind::IntegerLiteral("5".to_string()),
            TokenKind::RBracket,
            TokenKind::Colon,
            TokenKind::Keyword(Keyword::Int),
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn fixture_nested_field_access() {
    let tokens = fixture_tokens();
    let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    let found = lexemes
        .windows(5)
        .any(|w| w == ["rect", ".", "topLeft", ".", "x"]);
    assert!(found);
}

#[test]
fn fixture_function_signature() {
    let tokens = fixture_tokens();
    let arrow = tokens
        .iter()
        .position(|t| t.kind == TokenKind::Arrow)
        .unwrap();
    assert_eq!(tokens[arrow - 1].kind, TokenKind::RParen);
    assert_eq!(tokens[arrow + 1].kind, TokenKind::Keyword(Keyword::Int));
    assert_eq!(tokens[arrow].start.line, 77);
}

#[test]
fn fixture_reconstructs() {
    assert_eq!(common::reconstruct(FIXTURE), FIXTURE);
}
