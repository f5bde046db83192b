//! Abstract syntax tree for parsed Camel statements

pub mod nodes;

pub use nodes::{BinaryOp, Expr, Program, Statement};
