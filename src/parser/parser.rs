//! Parser state and the top-level parse loop.
//!
//! The parser owns a lookahead cursor over its token source and a
//! diagnostics buffer. Grammar rules in `stmt` drive the cursor through the
//! methods here; `expect_peek` is the only place that records errors.

use crate::{
    ast::ast::Program,
    errors::{
        diagnostics::Diagnostics,
        errors::{Error, ErrorImpl},
    },
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind, TokenSource},
    },
};

use super::{cursor::Cursor, stmt::parse_stmt};

/// The main parser structure that maintains parsing state.
///
/// An instance parses one token stream. After `parse_program` returns, the
/// cursor sits on `EOF` and the diagnostics are final.
pub struct Parser<S: TokenSource> {
    /// Current and next token
    cursor: Cursor<S>,
    /// Errors recorded so far, in order
    diagnostics: Diagnostics,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser positioned on the first token of `source`.
    pub fn new(source: S) -> Self {
        Parser {
            cursor: Cursor::new(source),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.cursor.current()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.cursor.current().kind
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.cursor.current_is(kind)
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.cursor.peek_is(kind)
    }

    /// Moves the lookahead window one token forward.
    pub fn advance(&mut self) {
        self.cursor.advance();
    }

    /// Advances if the next token is of the expected kind.
    ///
    /// # Returns
    ///
    /// `true` after advancing. Otherwise records an `UnexpectedToken`
    /// diagnostic, leaves the cursor where it is, and returns `false`.
    pub fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.advance();
            return true;
        }

        self.peek_error(kind);
        false
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let peek = self.cursor.peek();
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                actual: peek.kind,
            },
            peek.span.start.clone(),
        );

        self.diagnostics.push(error);
    }

    /// Parses statements until end of input.
    ///
    /// Always returns a program; statements that failed to parse are simply
    /// missing from it and the reasons are available through `errors`.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                tracing::debug!(kind = ?stmt.get_stmt_type(), "parsed statement");
                program.statements.push(stmt);
            }
            self.advance();
        }

        tracing::debug!(
            statements = program.len(),
            errors = self.diagnostics.len(),
            "finished parsing program"
        );

        program
    }

    /// Messages for every error recorded so far, in order.
    pub fn errors(&self) -> Vec<String> {
        self.diagnostics.messages()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}

/// Lexes and parses `source` in one go.
///
/// # Arguments
///
/// * `source` - Program text
/// * `file` - Name used in positions, `"shell"` when absent
///
/// # Returns
///
/// The parser (for its diagnostics) and the parsed program.
pub fn parse(source: String, file: Option<String>) -> (Parser<Lexer>, Program) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    (parser, program)
}
