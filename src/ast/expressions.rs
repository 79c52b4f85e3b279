use std::mem;

/// A single identifier or literal; the only operand forms the grammar has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Identifier(String),
    Literal(String),
    /// Neither an identifier nor a literal was found. Holds the text of the
    /// token that was there instead.
    Error(String),
}

impl Operand {
    pub fn text(&self) -> &str {
        match self {
            Operand::Identifier(text) | Operand::Literal(text) | Operand::Error(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Multi,
    Div,
    Unknown(String),
}

impl BinaryOp {
    /// Tag used as the node label in the generic tree.
    pub fn tag(&self) -> &str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Multi => "multi",
            BinaryOp::Div => "div",
            BinaryOp::Unknown(_) => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareOp {
    Equals,
    Unknown(String),
}

impl CompareOp {
    pub fn tag(&self) -> &str {
        match self {
            CompareOp::Equals => "equals",
            CompareOp::Unknown(_) => "unknown",
        }
    }
}

/// Arithmetic expression.
///
/// Chains always nest to the right: `a + b - c` is `add(a, sub(b, c))`,
/// whatever the operators are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Operand(Operand),
    Binary {
        op: BinaryOp,
        left: Operand,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn identifier(name: &str) -> Self {
        Expr::Operand(Operand::Identifier(String::from(name)))
    }

    pub fn literal(value: &str) -> Self {
        Expr::Operand(Operand::Literal(String::from(value)))
    }

    fn placeholder() -> Self {
        Expr::Operand(Operand::Error(String::new()))
    }

    pub fn binary(op: BinaryOp, left: Operand, right: Expr) -> Self {
        Expr::Binary {
            op,
            left,
            right: Box::new(right),
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let Expr::Binary { right, .. } = self else {
            return;
        };

        // Unlink the right spine one node at a time
        let mut next = mem::replace(right.as_mut(), Expr::placeholder());
        loop {
            let inner = match &mut next {
                Expr::Binary { right, .. } => mem::replace(right.as_mut(), Expr::placeholder()),
                Expr::Operand(_) => break,
            };
            next = inner;
        }
    }
}

/// A single comparison, or a bare operand when no comparison follows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Operand(Operand),
    Compare {
        op: CompareOp,
        left: Operand,
        right: Operand,
    },
}
