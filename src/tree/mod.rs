//! Generic labeled tree.
//!
//! The parser produces the typed AST in [`crate::ast`]; this module lowers
//! it into plain labeled nodes for positional inspection and debug dumps.
//! The dump format is for humans and is not meant to be parsed back.

pub mod lower;
pub mod node;

#[cfg(test)]
mod tests;
