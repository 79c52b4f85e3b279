use std::{mem, slice::Iter};

use super::{
    expressions::{Condition, Expr},
    types::DataType,
};

/// `{ ... }`, a compound statement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    pub body: Vec<Stmt>,
}

impl Block {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

// Nested bodies are flattened into one worklist before they are freed.
impl Drop for Block {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.body);

        while let Some(stmt) = pending.pop() {
            match stmt {
                Stmt::Compound(mut block) => pending.append(&mut block.body),
                Stmt::If(mut if_stmt) => {
                    pending.append(&mut if_stmt.body.body);
                    if let Some(else_body) = if_stmt.else_body.take() {
                        pending.push(*else_body);
                    }
                }
                Stmt::While(mut while_stmt) => pending.append(&mut while_stmt.body.body),
                Stmt::For(mut for_stmt) => {
                    pending.append(&mut for_stmt.body.body);
                    if let Some(init) = for_stmt.init.take() {
                        pending.push(*init);
                    }
                }
                _ => {}
            }
        }
    }
}

/// `int: x` or `int: x = <expr>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub data_type: DataType,
    pub name: String,
    pub initializer: Option<Expr>,
}

/// `x = <expr>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub target: String,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStmt {
    pub condition: Condition,
    pub body: Block,
    /// Either a `Stmt::Compound` or a chained `Stmt::If`.
    pub else_body: Option<Box<Stmt>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhileStmt {
    pub condition: Condition,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForStmt {
    /// A declaration or an assignment.
    pub init: Option<Box<Stmt>>,
    pub condition: Option<Condition>,
    pub step: Option<Assignment>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallStmt {
    pub callee: String,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Declaration(Declaration),
    Assignment(Assignment),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    Call(CallStmt),
    Return(ReturnStmt),
    Compound(Block),
    /// A lone `;`.
    Empty,
    /// No statement starts with this token; holds its text.
    Unknown(String),
}
