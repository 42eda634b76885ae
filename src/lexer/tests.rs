//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and punctuation
//! - Illegal characters
//! - End-of-input behaviour of both token sources

use super::{
    lexer::{tokenize, Lexer, TokenStream},
    tokens::{TokenKind, TokenSource},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.monkey".to_string()))
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "fn let true false if else return".to_string();
    let tokens = tokenize(source, Some("test.monkey".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
    assert_eq!(tokens.len(), 8);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore letter".to_string();
    let tokens = tokenize(source, Some("test.monkey".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
    // Keyword prefix does not make a keyword
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "letter");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("5 10 838383".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].value, "5");
    assert_eq!(tokens[1].value, "10");
    assert_eq!(tokens[2].value, "838383");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("= + - ! * / < > == !="),
        vec![
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Bang,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_delimiters() {
    assert_eq!(
        kinds("(){},;"),
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_let_statement() {
    let tokens = tokenize("let five = 5;".to_string(), None);

    assert_eq!(tokens.len(), 6);
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "five");
    assert_eq!(tokens[2].kind, TokenKind::Assign);
    assert_eq!(tokens[3].kind, TokenKind::Int);
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_function_literal() {
    assert_eq!(
        kinds("let add = fn(x, y) { x + y; };"),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Function,
            TokenKind::LParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::RBrace,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_illegal_characters() {
    let tokens = tokenize("let a = @;".to_string(), None);

    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].value, "@");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
}

#[test]
fn test_tokenize_multibyte_illegal_character() {
    let tokens = tokenize("é;".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].value, "é");
    assert_eq!(tokens[1].kind, TokenKind::Semicolon);
    assert_eq!(tokens[1].span.start.0, 2);
}

#[test]
fn test_tokenize_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("   \n\t  "), vec![TokenKind::EOF]);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let  x".to_string(), Some("span.monkey".to_string()));

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 6);
    assert_eq!(tokens[1].span.start.1.as_str(), "span.monkey");
}

#[test]
fn test_default_file_name() {
    let lexer = Lexer::new(String::from("x"), None);
    assert_eq!(lexer.file().as_str(), "shell");
}

#[test]
fn test_lexer_repeats_eof() {
    let mut lexer = Lexer::new(String::from("x"), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..5 {
        assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    }
}

#[test]
fn test_token_stream_repeats_eof_after_exhaustion() {
    let mut tokens = tokenize("let x".to_string(), None);
    tokens.pop(); // drop the EOF so the stream has to synthesize one
    let mut stream = TokenStream::new(tokens);

    assert_eq!(stream.next_token().kind, TokenKind::Let);
    assert_eq!(stream.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        assert_eq!(stream.next_token().kind, TokenKind::EOF);
    }
}

#[test]
fn test_token_stream_stops_at_first_eof() {
    let mut tokens = tokenize("let".to_string(), None);
    tokens.extend(tokenize("return".to_string(), None));
    let mut stream = TokenStream::new(tokens);

    assert_eq!(stream.next_token().kind, TokenKind::Let);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_token_kind_display() {
    assert_eq!(TokenKind::Identifier.to_string(), "IDENT");
    assert_eq!(TokenKind::Int.to_string(), "INT");
    assert_eq!(TokenKind::Assign.to_string(), "ASSIGN");
    assert_eq!(TokenKind::NotEq.to_string(), "NOT_EQ");
    assert_eq!(TokenKind::EOF.to_string(), "EOF");
}
