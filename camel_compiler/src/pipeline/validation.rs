//! Startup validation of the analysis pipeline
//!
//! Checks that every diagnostic code the phases can emit is present in the
//! metadata registry, and that the logging configuration is sane.

use crate::logging::codes;

/// Validate pipeline wiring before accepting analysis requests
pub fn validate_pipeline() -> Result<(), String> {
    let required_codes = [
        codes::lexical::INVALID_CHARACTER,
        codes::lexical::INVALID_NUMBER,
        codes::lexical::IDENTIFIER_TOO_LONG,
        codes::lexical::NUMBER_TOO_LONG,
        codes::lexical::TOO_MANY_TOKENS,
        codes::syntax::UNEXPECTED_TOKEN,
        codes::syntax::UNEXPECTED_END_OF_INPUT,
        codes::syntax::TRAILING_INPUT,
        codes::syntax::MAX_RECURSION_DEPTH,
        codes::automaton::NO_TRANSITION,
        codes::automaton::TRACE_LIMIT_EXCEEDED,
    ];

    for code in &required_codes {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Diagnostic code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    crate::logging::config::validate_config()
        .map_err(|e| format!("Logging configuration invalid: {}", e))?;

    Ok(())
}
