use crate::lexer::tokens::TokenKind;

/// Statement productions the dispatcher knows how to start.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StmtKind {
    Let,
    Return,
}

/// Maps a statement-starting token to its production.
///
/// Anything else yields `None`; the dispatcher treats that as "no statement
/// here", not as an error.
pub fn stmt_kind(kind: TokenKind) -> Option<StmtKind> {
    match kind {
        TokenKind::Let => Some(StmtKind::Let),
        TokenKind::Return => Some(StmtKind::Return),
        _ => None,
    }
}
