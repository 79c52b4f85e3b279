/// AST (Abstract Syntax Tree) module
/// Contains the typed tree the parser produces
///
/// Submodules:
/// - ast: Program and top-level items
/// - expressions: Operands, arithmetic expressions and conditions
/// - statements: Statements, declarations and blocks
/// - types: Data types named by type keywords
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
