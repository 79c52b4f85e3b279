//! Lowering from the typed AST into the generic labeled tree.

use crate::ast::{
    ast::{Entry, Function, Import, Item, Program},
    expressions::{Condition, Expr, Operand},
    statements::{Block, CallStmt, Declaration, ForStmt, IfStmt, ReturnStmt, Stmt, WhileStmt},
    types::DataType,
};

use crate::stack::ensure_sufficient_stack;

use super::node::Node;

/// Lowers every top-level item into its own root node.
pub fn lower_program(program: &Program) -> Vec<Node> {
    program.iter().map(Node::from).collect()
}

impl From<&Item> for Node {
    fn from(item: &Item) -> Self {
        match item {
            Item::Import(import) => lower_import(import),
            Item::Declaration(declaration) => lower_declaration(declaration),
            Item::Function(function) => lower_function(function),
            Item::Entry(entry) => lower_entry(entry),
        }
    }
}

impl From<&Stmt> for Node {
    fn from(stmt: &Stmt) -> Self {
        ensure_sufficient_stack(|| lower_stmt(stmt))
    }
}

fn lower_stmt(stmt: &Stmt) -> Node {
    match stmt {
        Stmt::Declaration(declaration) => lower_declaration(declaration),
        Stmt::Assignment(assignment) => lower_assignment(&assignment.target, &assignment.value),
        Stmt::If(if_stmt) => lower_if(if_stmt),
        Stmt::While(while_stmt) => lower_while(while_stmt),
        Stmt::For(for_stmt) => lower_for(for_stmt),
        Stmt::Call(call) => lower_call(call),
        Stmt::Return(ret) => lower_return(ret),
        Stmt::Compound(block) => lower_block(block),
        Stmt::Empty => Node::new("empty"),
        Stmt::Unknown(text) => Node::wrap("unknown", Node::leaf(text)),
    }
}

impl From<&Expr> for Node {
    fn from(expr: &Expr) -> Self {
        let mut spine = vec![];
        let mut current = expr;

        let tail = loop {
            match current {
                Expr::Operand(operand) => break lower_operand(operand),
                Expr::Binary { op, left, right } => {
                    spine.push((op, left));
                    current = right.as_ref();
                }
            }
        };

        spine.into_iter().rev().fold(tail, |right, (op, left)| {
            Node::new(op.tag()).with(lower_operand(left)).with(right)
        })
    }
}

impl From<&Condition> for Node {
    fn from(condition: &Condition) -> Self {
        match condition {
            Condition::Operand(operand) => lower_operand(operand),
            Condition::Compare { op, left, right } => Node::new(op.tag())
                .with(lower_operand(left))
                .with(lower_operand(right)),
        }
    }
}

fn lower_operand(operand: &Operand) -> Node {
    let label = match operand {
        Operand::Identifier(_) => "identifier",
        Operand::Literal(_) => "literal",
        Operand::Error(_) => "error",
    };
    Node::wrap(label, Node::leaf(operand.text()))
}

fn lower_data_type(data_type: &DataType) -> Node {
    Node::wrap("data_type", Node::leaf(data_type.name()))
}

fn lower_declaration(declaration: &Declaration) -> Node {
    let mut node = Node::new("declaration")
        .with(lower_data_type(&declaration.data_type))
        .with(Node::wrap("identifier", Node::leaf(&declaration.name)));

    if let Some(value) = &declaration.initializer {
        node.push(lower_assignment(&declaration.name, value));
    }

    node
}

fn lower_assignment(target: &str, value: &Expr) -> Node {
    Node::new("assignment")
        .with(Node::wrap("identifier", Node::leaf(target)))
        .with(Node::wrap("expression", Node::from(value)))
}

fn lower_block(block: &Block) -> Node {
    let mut node = Node::new("compound");
    for stmt in block.iter() {
        node.push(Node::from(stmt));
    }
    node
}

fn lower_if(if_stmt: &IfStmt) -> Node {
    let mut node = Node::new("if")
        .with(Node::wrap("condition", Node::from(&if_stmt.condition)))
        .with(lower_block(&if_stmt.body));

    if let Some(else_body) = &if_stmt.else_body {
        node.push(Node::wrap("else", Node::from(else_body.as_ref())));
    }

    node
}

fn lower_while(while_stmt: &WhileStmt) -> Node {
    Node::new("while")
        .with(Node::wrap("condition", Node::from(&while_stmt.condition)))
        .with(lower_block(&while_stmt.body))
}

fn lower_for(for_stmt: &ForStmt) -> Node {
    let mut node = Node::new("for");

    if let Some(init) = &for_stmt.init {
        node.push(Node::wrap("init", Node::from(init.as_ref())));
    }
    if let Some(condition) = &for_stmt.condition {
        node.push(Node::wrap("condition", Node::from(condition)));
    }
    if let Some(step) = &for_stmt.step {
        node.push(Node::wrap("step", lower_assignment(&step.target, &step.value)));
    }

    node.with(lower_block(&for_stmt.body))
}

fn lower_call(call: &CallStmt) -> Node {
    let mut args = Node::new("args");
    for arg in &call.args {
        args.push(Node::wrap("expression", Node::from(arg)));
    }

    Node::new("call")
        .with(Node::wrap("identifier", Node::leaf(&call.callee)))
        .with(args)
}

fn lower_return(ret: &ReturnStmt) -> Node {
    let node = Node::new("return");
    match &ret.value {
        Some(value) => node.with(Node::wrap("expression", Node::from(value))),
        None => node,
    }
}

fn lower_import(import: &Import) -> Node {
    Node::wrap("import", Node::leaf(&import.path))
}

fn lower_function(function: &Function) -> Node {
    let mut params = Node::new("params");
    for param in &function.params {
        params.push(lower_declaration(param));
    }

    Node::new("function")
        .with(lower_data_type(&function.return_type))
        .with(Node::wrap("identifier", Node::leaf(&function.name)))
        .with(params)
        .with(lower_block(&function.body))
}

fn lower_entry(entry: &Entry) -> Node {
    Node::wrap("entry", lower_block(&entry.body))
}
