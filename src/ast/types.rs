use std::fmt::Display;

/// A data type named by a type keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    Int,
    Char,
    Bool,
    Byte,
    /// A type keyword the front end does not know, with its original text.
    Unknown(String),
}

impl DataType {
    /// Canonical name used as the leaf label in the generic tree.
    pub fn name(&self) -> &str {
        match self {
            DataType::Int => "int",
            DataType::Char => "char",
            DataType::Bool => "bool",
            DataType::Byte => "byte",
            DataType::Unknown(_) => "unknown",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, DataType::Unknown(_))
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataType::Unknown(text) => write!(f, "unknown({})", text),
            _ => write!(f, "{}", self.name()),
        }
    }
}
