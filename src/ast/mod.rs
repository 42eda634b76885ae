//! AST (Abstract Syntax Tree) module
//! Contains the nodes the statement parser produces
//!
//! Submodules:
//! - ast: The program root and the statement enum
//! - statements: Definitions for the individual statement nodes
pub mod ast;
pub mod statements;
