use crate::{lexer::tokens::Token, Span};

#[derive(Debug, Clone)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        let value = token.value.clone();
        Identifier { token, value }
    }
}

/// `let <name> = <expr>;`
///
/// The bound expression is consumed by the parser but not kept.
#[derive(Debug, Clone)]
pub struct LetStmt {
    pub token: Token,
    pub name: Identifier,
    pub span: Span,
}

/// `return <expr>;`
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub token: Token,
    pub span: Span,
}
