//! Grammar definitions for the Camel assignment-statement language

pub mod ast;
pub mod keywords;

// Re-export AST types
pub use ast::nodes::{BinaryOp, Expr, Program, Statement};

// Re-export keywords
pub use keywords::{is_reserved_keyword, Keyword};
