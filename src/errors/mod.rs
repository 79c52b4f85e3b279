//! Error types and diagnostic reporting for the front end.
//!
//! This module defines the error types produced while scanning and
//! parsing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing and parsing
//! - The diagnostic sink the parser reports into
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
