use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::ast::{
    expressions::{BinaryOp, CompareOp},
    types::DataType,
};

lazy_static! {
    pub static ref MATH_OP_LOOKUP: HashMap<&'static str, BinaryOp> = {
        let mut map = HashMap::new();
        map.insert("+", BinaryOp::Add);
        map.insert("-", BinaryOp::Sub);
        map.insert("*", BinaryOp::Multi);
        map.insert("/", BinaryOp::Div);
        map
    };

    pub static ref COMPARE_OP_LOOKUP: HashMap<&'static str, CompareOp> = {
        let mut map = HashMap::new();
        map.insert("==", CompareOp::Equals);
        map
    };

    pub static ref DATA_TYPE_LOOKUP: HashMap<&'static str, DataType> = {
        let mut map = HashMap::new();
        map.insert("int", DataType::Int);
        map.insert("char", DataType::Char);
        map.insert("bool", DataType::Bool);
        map.insert("byte", DataType::Byte);
        map
    };
}

/// Maps operator text to its tag. Unlisted text maps to `Unknown`.
pub fn lookup_math_op(symbol: &str) -> BinaryOp {
    MATH_OP_LOOKUP
        .get(symbol)
        .cloned()
        .unwrap_or_else(|| BinaryOp::Unknown(String::from(symbol)))
}

pub fn lookup_compare_op(symbol: &str) -> CompareOp {
    COMPARE_OP_LOOKUP
        .get(symbol)
        .cloned()
        .unwrap_or_else(|| CompareOp::Unknown(String::from(symbol)))
}

pub fn lookup_data_type(name: &str) -> DataType {
    DATA_TYPE_LOOKUP
        .get(name)
        .cloned()
        .unwrap_or_else(|| DataType::Unknown(String::from(name)))
}
