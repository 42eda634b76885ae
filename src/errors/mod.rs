//! Error types and diagnostic collection for the parser.
//!
//! This module defines the error values recorded while parsing. It includes:
//!
//! - Error structures with source position information
//! - The single parse error variant, an unexpected lookahead token
//! - Error formatting and optional suggestions
//! - The append-only diagnostics buffer owned by each parser

pub mod diagnostics;
pub mod errors;
