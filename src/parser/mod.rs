//! Parser module for building the statement-level AST.
//!
//! This module contains the parser that transforms a stream of tokens
//! into a `Program`. It handles:
//!
//! - Two-token lookahead over any `TokenSource`
//! - Dispatch on the statement-starting token
//! - Let and return statements (expressions are skipped up to `;`)
//! - Non-fatal error recording
//!
//! A statement whose header is malformed is dropped and the parse carries on
//! from wherever the failed expectation left the cursor.

pub mod cursor;
pub mod lookups;
pub mod parser;
pub mod stmt;
