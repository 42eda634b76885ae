use std::slice::Iter;

use crate::Span;

use super::statements::{LetStmt, ReturnStmt};

/// Statement Types
///
/// The closed set of statement forms the parser can produce.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StmtType {
    LetStmt,
    ReturnStmt,
}

/// A single statement node.
///
/// New grammar rules are added as new variants, so every consumer matching
/// on a statement is checked for exhaustiveness.
#[derive(Debug, Clone)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
}

impl Stmt {
    /// Returns the type of the statement.
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::Let(_) => StmtType::LetStmt,
            Stmt::Return(_) => StmtType::ReturnStmt,
        }
    }

    /// Literal text of the token the statement starts with.
    pub fn token_literal(&self) -> &str {
        match self {
            Stmt::Let(stmt) => &stmt.token.value,
            Stmt::Return(stmt) => &stmt.token.value,
        }
    }

    /// Returns the span of the statement.
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Let(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
        }
    }

    pub fn as_let(&self) -> Option<&LetStmt> {
        match self {
            Stmt::Let(stmt) => Some(stmt),
            _ => None,
        }
    }

    pub fn as_return(&self) -> Option<&ReturnStmt> {
        match self {
            Stmt::Return(stmt) => Some(stmt),
            _ => None,
        }
    }
}

/// Root of the tree. Statements are kept in source order.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    /// Literal of the first statement's token, or an empty string.
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }
}
