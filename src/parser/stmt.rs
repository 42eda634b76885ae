use crate::{
    ast::{
        ast::Stmt,
        statements::{Identifier, LetStmt, ReturnStmt},
    },
    lexer::tokens::{TokenKind, TokenSource},
    Span,
};

use super::{
    lookups::{stmt_kind, StmtKind},
    parser::Parser,
};

/// Routes on the current token. Returns `None` when no statement starts here
/// or the production was abandoned.
pub fn parse_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<Stmt> {
    let kind = match stmt_kind(parser.current_token_kind()) {
        Some(kind) => kind,
        None => {
            tracing::trace!(token = %parser.current_token_kind(), "no statement starts here");
            return None;
        }
    };

    match kind {
        StmtKind::Let => parse_let_stmt(parser).map(Stmt::Let),
        StmtKind::Return => parse_return_stmt(parser).map(Stmt::Return),
    }
}

/// `LET IDENT ASSIGN <expr> SEMICOLON`
pub fn parse_let_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<LetStmt> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }
    let name = Identifier::new(parser.current_token().clone());

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }

    // TODO: parse the bound expression once expression parsing exists
    let end = skip_expression(parser);

    Some(LetStmt {
        span: token.span.to(&end),
        token,
        name,
    })
}

/// `RETURN <expr> SEMICOLON`
pub fn parse_return_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<ReturnStmt> {
    let token = parser.current_token().clone();

    parser.advance();
    let end = skip_expression(parser);

    Some(ReturnStmt {
        span: token.span.to(&end),
        token,
    })
}

/// Advances until the current token is a semicolon or end of input, and
/// returns the span of that boundary token.
fn skip_expression<S: TokenSource>(parser: &mut Parser<S>) -> Span {
    while !parser
        .current_token()
        .is_one_of_many(&[TokenKind::Semicolon, TokenKind::EOF])
    {
        tracing::trace!(token = %parser.current_token_kind(), "skipping expression token");
        parser.advance();
    }

    parser.current_token().span.clone()
}
