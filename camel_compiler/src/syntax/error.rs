//! Error types for syntax analysis
//!
//! A parse stops at the first mismatch and surfaces the expected construct,
//! the token actually found, and its character offset.

use crate::lexical::LexerError;
use crate::logging::{codes, Code};
use crate::tokens::Token;

pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Syntax analysis errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyntaxError {
    #[error("Unexpected token: expected {expected}, found '{found}' at offset {position}")]
    UnexpectedToken {
        expected: String,
        found: String,
        position: usize,
    },

    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEndOfInput { expected: String },

    #[error("Trailing input after statement terminator: '{found}' at offset {position}")]
    TrailingInput { found: String, position: usize },

    #[error("Maximum expression nesting depth exceeded at offset {position}")]
    MaxParseDepth { position: usize },

    #[error(transparent)]
    Lexical(#[from] LexerError),
}

impl SyntaxError {
    /// Create an unexpected-token error from the token actually found
    pub fn unexpected_token(expected: &str, found: &Token) -> Self {
        Self::UnexpectedToken {
            expected: expected.to_string(),
            found: found.display_text().to_string(),
            position: found.position,
        }
    }

    /// Create an unexpected-end-of-input error
    pub fn unexpected_end_of_input(expected: &str) -> Self {
        Self::UnexpectedEndOfInput {
            expected: expected.to_string(),
        }
    }

    /// Create a trailing-input error
    pub fn trailing_input(found: &Token) -> Self {
        Self::TrailingInput {
            found: found.display_text().to_string(),
            position: found.position,
        }
    }

    /// Get error code for the global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::UnexpectedToken { .. } => codes::syntax::UNEXPECTED_TOKEN,
            Self::UnexpectedEndOfInput { .. } => codes::syntax::UNEXPECTED_END_OF_INPUT,
            Self::TrailingInput { .. } => codes::syntax::TRAILING_INPUT,
            Self::MaxParseDepth { .. } => codes::syntax::MAX_RECURSION_DEPTH,
            Self::Lexical(inner) => inner.error_code(),
        }
    }

    /// Character offset of the failure, where one exists
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::TrailingInput { position, .. }
            | Self::MaxParseDepth { position } => Some(*position),
            Self::UnexpectedEndOfInput { .. } => None,
            Self::Lexical(inner) => inner.offset(),
        }
    }

    /// Check if this error is recoverable by editing the input
    pub fn is_recoverable(&self) -> bool {
        codes::is_recoverable(self.error_code().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{Token, TokenKind};

    #[test]
    fn test_unexpected_token_carries_position() {
        let found = Token::new(TokenKind::Identifier, "y", 2);
        let error = SyntaxError::unexpected_token("'='", &found);

        assert_eq!(error.position(), Some(2));
        assert_eq!(error.error_code().as_str(), "E050");

        let message = error.to_string();
        assert!(message.contains("'='"));
        assert!(message.contains("'y'"));
        assert!(message.contains("offset 2"));
    }

    #[test]
    fn test_end_of_input_has_no_position() {
        let error = SyntaxError::unexpected_end_of_input("expression");
        assert_eq!(error.position(), None);
        assert_eq!(error.error_code().as_str(), "E051");
    }

    #[test]
    fn test_lexical_errors_keep_their_code() {
        let inner = LexerError::InvalidCharacter {
            character: '@',
            offset: 6,
            line: 1,
            column: 7,
        };
        let error = SyntaxError::from(inner);

        assert_eq!(error.error_code().as_str(), "E020");
        assert_eq!(error.position(), Some(6));
    }

    #[test]
    fn test_depth_error_is_not_recoverable() {
        let error = SyntaxError::MaxParseDepth { position: 40 };
        assert!(!error.is_recoverable());
        assert_eq!(error.error_code().as_str(), "E087");
    }
}
