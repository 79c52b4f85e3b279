use std::slice::Iter;

use super::{
    statements::{Block, Declaration},
    types::DataType,
};

/// `int name(int: a, int: b) { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub return_type: DataType,
    pub name: String,
    pub params: Vec<Declaration>,
    pub body: Block,
}

/// `import "path";`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub path: String,
}

/// `entry { ... }`, the program's starting block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub body: Block,
}

/// Top-level item. A program is a flat sequence of these, each an
/// independent root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Import(Import),
    Declaration(Declaration),
    Function(Function),
    Entry(Entry),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub items: Vec<Item>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
