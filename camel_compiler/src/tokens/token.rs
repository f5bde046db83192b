//! Token kinds and the token value-carrier record
//!
//! The `Token` shape is a rendering contract with the presentation layer:
//! `kind`, `text`, `position` in that order, where `position` is the
//! zero-based character offset of the token's first character in the source.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed classification of lexical units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// User-defined names
    Identifier,
    /// Reserved words
    Keyword,
    /// Assignment, arithmetic, and comparison operators
    Operator,
    /// Statement terminator and punctuation
    SpecialChar,
    /// Integer literals
    Number,
    /// Sentinel emitted exactly once after the last real token
    EndOfInput,
}

impl TokenKind {
    /// Human-readable label used by result tables. Total: every kind maps,
    /// and the sentinel falls back to its raw name.
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Identifier => "Identifier",
            Self::Keyword => "Keyword",
            Self::Operator => "Operator",
            Self::SpecialChar => "SpecialChar",
            Self::Number => "Number",
            Self::EndOfInput => "EndOfInput",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_label())
    }
}

/// A classified lexical unit with its source text and position
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// What class of token this is
    pub kind: TokenKind,
    /// The exact source text of the lexeme (empty for the sentinel)
    pub text: String,
    /// Zero-based character offset of the first character
    pub position: usize,
}

impl Token {
    /// Create a token
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Create the end-of-input sentinel at the given offset
    pub fn end_of_input(position: usize) -> Self {
        Self {
            kind: TokenKind::EndOfInput,
            text: String::new(),
            position,
        }
    }

    /// Check if this token is the end-of-input sentinel
    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Check if this token is an identifier
    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }

    /// Check if this token is a number literal
    pub fn is_number(&self) -> bool {
        self.kind == TokenKind::Number
    }

    /// Check if this token is an operator with the given source text
    pub fn is_operator(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == symbol
    }

    /// Check if this token is a special character with the given source text
    pub fn is_special_char(&self, symbol: &str) -> bool {
        self.kind == TokenKind::SpecialChar && self.text == symbol
    }

    /// Character length of the lexeme
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// True for the zero-length sentinel
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text shown in diagnostics: the lexeme, or a marker for the sentinel
    pub fn display_text(&self) -> &str {
        if self.is_end_of_input() {
            "<end of input>"
        } else {
            &self.text
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_text())
    }
}

// === CLASSIFICATION HELPERS ===

/// Check if a symbol character sequence is an operator
pub fn is_operator_symbol(symbol: &str) -> bool {
    matches!(
        symbol,
        "=" | "+" | "-" | "*" | "/" | "%" | "<" | ">" | "<=" | ">=" | "==" | "!="
    )
}

/// Check if a character is a special (punctuation) character
pub fn is_special_char(ch: char) -> bool {
    matches!(ch, ';' | '(' | ')' | ',')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_labels_are_total() {
        let kinds = [
            TokenKind::Identifier,
            TokenKind::Keyword,
            TokenKind::Operator,
            TokenKind::SpecialChar,
            TokenKind::Number,
            TokenKind::EndOfInput,
        ];

        for kind in kinds {
            assert!(!kind.display_label().is_empty());
        }
        assert_eq!(TokenKind::SpecialChar.display_label(), "SpecialChar");
        assert_eq!(TokenKind::EndOfInput.display_label(), "EndOfInput");
    }

    #[test]
    fn test_token_predicates() {
        let eq = Token::new(TokenKind::Operator, "=", 2);
        assert!(eq.is_operator("="));
        assert!(!eq.is_operator("+"));

        let semi = Token::new(TokenKind::SpecialChar, ";", 10);
        assert!(semi.is_special_char(";"));
        assert!(!semi.is_identifier());

        let five = Token::new(TokenKind::Number, "5", 8);
        assert!(five.is_number());
        assert!(!five.is_identifier());

        let eof = Token::end_of_input(11);
        assert!(eof.is_end_of_input());
        assert!(eof.is_empty());
        assert_eq!(eof.display_text(), "<end of input>");
    }

    #[test]
    fn test_operator_symbol_set() {
        for op in ["=", "+", "-", "*", "/", "%", "<=", ">=", "==", "!="] {
            assert!(is_operator_symbol(op), "{} should be an operator", op);
        }
        assert!(!is_operator_symbol("@"));
        assert!(!is_operator_symbol(";"));
    }

    #[test]
    fn test_token_serializes_with_fixed_fields() {
        let token = Token::new(TokenKind::Identifier, "x", 0);
        let json = serde_json::to_string(&token).expect("serializable");
        assert_eq!(json, r#"{"kind":"Identifier","text":"x","position":0}"#);
    }
}
