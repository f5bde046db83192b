//! Finite-state syntactic validation
//!
//! An explicit DFA decides whether a token stream has the statement shape
//! `identifier = identifier (operator identifier)* ;`. The transition table
//! is first-class data, kept separate from the drive loop so its shape stays
//! auditable and testable on its own.

pub mod state;
pub mod table;
pub mod validator;

use crate::lexical::{self, LexerError};

pub use state::{InputClass, State};
pub use table::TransitionTable;
pub use validator::{TransitionRecord, ValidationOutcome, Validator};

/// Validate a source string with a fresh scanner of its own
pub fn validate(source: &str) -> Result<ValidationOutcome, LexerError> {
    let tokens = lexical::tokenize(source)?;
    Ok(Validator::new().run(&tokens))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_reference_statement() {
        let outcome = validate("x = y + 5 ;").expect("lexes");
        assert!(outcome.accepted);
        assert_eq!(outcome.final_state, State::Accept);
    }

    #[test]
    fn test_validate_rejects_missing_rhs() {
        let outcome = validate("x = ;").expect("lexes");
        assert!(!outcome.accepted);
        assert_ne!(outcome.final_state, State::Accept);
    }

    #[test]
    fn test_validate_is_deterministic() {
        let first = validate("x = y + 5 ;").expect("lexes");
        let second = validate("x = y + 5 ;").expect("lexes");
        assert_eq!(first.trace, second.trace);
        assert_eq!(first.accepted, second.accepted);
    }

    #[test]
    fn test_validate_propagates_lexical_errors() {
        assert!(validate("x = y @ 5 ;").is_err());
    }
}
