//! Shared utility types for the Camel Compiler

pub mod span;

pub use span::{Position, SourceMap, Span};
