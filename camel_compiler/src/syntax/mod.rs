//! Syntax analysis: the recursive-descent parser
//!
//! Recognizes the same statement language as the finite-state validator, but
//! with full expression structure: precedence across `+ - * /` and
//! parenthesized sub-expressions. LL(1): every production is chosen by
//! looking at the current token only.

pub mod error;
pub mod parser;

use crate::grammar::ast::nodes::Program;
use crate::lexical::Scanner;

pub use error::{SyntaxError, SyntaxResult};
pub use parser::Parser;

/// Parse a source string with a fresh scanner of its own
pub fn parse(source: &str) -> SyntaxResult<Program> {
    let mut parser = Parser::new(Scanner::new(source))?;
    parser.parse_program()
}
