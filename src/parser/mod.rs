//! Parser module for building the syntax tree.
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into a typed tree. It has one function per grammar
//! production and handles:
//!
//! - Top-level items (imports, declarations, functions, the entry block)
//! - Statements (declarations, assignments, calls, if/while/for, return)
//! - Right-nested arithmetic expressions and single comparisons
//! - Non-fatal error reporting through a diagnostic sink
//!
//! Productions that share a token prefix are chosen with lookahead
//! predicates (`is_decl`, `is_func`, ...) that peek ahead using the
//! parser's checkpoint stack and always rewind before returning.

pub mod expr;
pub mod items;
pub mod lookups;
pub mod parser;
pub mod predicates;
pub mod stmt;
pub mod types;
