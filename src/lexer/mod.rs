//! Lexical analysis module.
//!
//! This module contains the token source the parser pulls from. It handles:
//!
//! - The `TokenSource` abstraction (one token per call, `EOF` forever after)
//! - A regex-driven lexer over source text
//! - A stream over pre-built tokens
//! - Recognition of keywords, identifiers, integers, and operators

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
