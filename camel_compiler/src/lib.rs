// Internal modules
pub mod automaton;
pub mod config;
pub mod grammar;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod syntax;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use automaton::{validate, InputClass, State, TransitionRecord, ValidationOutcome};
pub use grammar::ast::nodes::{BinaryOp, Expr, Program, Statement};
pub use lexical::{tokenize, LexerError, Scanner};
pub use pipeline::{analyze, AnalysisReport, PipelineError};
pub use syntax::{parse, SyntaxError};
pub use tokens::{Token, TokenKind};
