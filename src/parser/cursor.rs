//! Two-token lookahead window over a token source.

use crate::lexer::tokens::{Token, TokenKind, TokenSource};

/// The parser's view of the input: the token under examination and the one
/// right after it.
///
/// `advance` is the only mutator. `peek` is always the token that follows
/// `current` in source order, and once `EOF` is reached both keep reporting it.
pub struct Cursor<S: TokenSource> {
    source: S,
    current: Token,
    peek: Token,
}

impl<S: TokenSource> Cursor<S> {
    /// Reads two tokens so that `current` and `peek` are both set.
    pub fn new(mut source: S) -> Self {
        let current = source.next_token();
        let peek = source.next_token();

        Cursor {
            source,
            current,
            peek,
        }
    }

    /// Shifts `peek` into `current` and pulls a fresh token into `peek`.
    pub fn advance(&mut self) {
        let next = self.source.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn peek(&self) -> &Token {
        &self.peek
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }
}
