//! Token model for the Camel language
//!
//! Pure data: the closed `TokenKind` enumeration and the `Token` record the
//! scanner produces and every downstream consumer reads.

pub mod token;

pub use token::{is_operator_symbol, is_special_char, Token, TokenKind};
