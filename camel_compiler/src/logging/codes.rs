//! Consolidated error codes and classification system
//!
//! Single source of truth for all error codes, their metadata, and
//! classification functions. Code constants and their behavioral metadata
//! live together in one place.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Lexical analysis error codes
pub mod lexical {
    use super::Code;

    pub const INVALID_CHARACTER: Code = Code::new("E020");
    pub const INVALID_NUMBER: Code = Code::new("E022");
    pub const IDENTIFIER_TOO_LONG: Code = Code::new("E023");
    pub const NUMBER_TOO_LONG: Code = Code::new("E024");
    pub const TOO_MANY_TOKENS: Code = Code::new("E027");
}

/// Syntax analysis error codes
pub mod syntax {
    use super::Code;

    pub const UNEXPECTED_TOKEN: Code = Code::new("E050");
    pub const UNEXPECTED_END_OF_INPUT: Code = Code::new("E051");
    pub const TRAILING_INPUT: Code = Code::new("E052");
    pub const MAX_RECURSION_DEPTH: Code = Code::new("E087");
}

/// Finite-state validation diagnostic codes
pub mod automaton {
    use super::Code;

    pub const NO_TRANSITION: Code = Code::new("E060");
    pub const TRACE_LIMIT_EXCEEDED: Code = Code::new("E061");
}

/// Success codes for completed operations
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I002");
    pub const VALIDATION_COMPLETE: Code = Code::new("I003");
    pub const PARSE_COMPLETE: Code = Code::new("I004");
    pub const ANALYSIS_COMPLETE: Code = Code::new("I006");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

static METADATA_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    METADATA_REGISTRY.get_or_init(|| {
        let entries = [
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                true,
                "Internal error in the analysis core",
                "Report this as a bug; the input did not cause it",
            ),
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                true,
                "Global subsystem initialization failed",
                "Check runtime configuration and retry startup",
            ),
            ErrorMetadata::new(
                "E020",
                "Lexical",
                Severity::High,
                true,
                false,
                "Source contains a character outside every token class",
                "Remove or replace the character at the reported offset",
            ),
            ErrorMetadata::new(
                "E022",
                "Lexical",
                Severity::High,
                true,
                false,
                "Numeric literal does not fit in a 64-bit integer",
                "Use a smaller number",
            ),
            ErrorMetadata::new(
                "E023",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "Identifier exceeds the configured length limit",
                "Shorten the identifier",
            ),
            ErrorMetadata::new(
                "E024",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "Numeric literal exceeds the configured digit limit",
                "Shorten the number",
            ),
            ErrorMetadata::new(
                "E027",
                "Lexical",
                Severity::High,
                false,
                false,
                "Token count limit exceeded while scanning",
                "Split the input or raise the compile-time limit",
            ),
            ErrorMetadata::new(
                "E050",
                "Syntax",
                Severity::High,
                true,
                false,
                "Parser found a token that does not fit the grammar",
                "Compare the reported token against the expected construct",
            ),
            ErrorMetadata::new(
                "E051",
                "Syntax",
                Severity::High,
                true,
                false,
                "Input ended while a construct was still open",
                "Complete the statement; it must end with ';'",
            ),
            ErrorMetadata::new(
                "E052",
                "Syntax",
                Severity::Medium,
                true,
                false,
                "Tokens remain after the statement terminator",
                "Remove everything after the ';'",
            ),
            ErrorMetadata::new(
                "E087",
                "Syntax",
                Severity::Critical,
                false,
                true,
                "Maximum parser recursion depth exceeded",
                "Reduce expression nesting",
            ),
            ErrorMetadata::new(
                "E060",
                "Automaton",
                Severity::Low,
                true,
                false,
                "No transition defined for the current state and input class",
                "The statement shape is invalid; see the transition trace",
            ),
            ErrorMetadata::new(
                "E061",
                "Automaton",
                Severity::Medium,
                true,
                false,
                "Transition trace length limit reached",
                "Split the input or raise the compile-time limit",
            ),
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Look up full metadata for a code (None for success/unknown codes)
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    registry().get(code)
}

/// Get the human-readable description for a code
pub fn get_description(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|m| m.description)
        .unwrap_or("Unknown error")
}

/// Get the category for a code
pub fn get_category(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|m| m.category)
        .unwrap_or("Unknown")
}

/// Get the severity for a code (unknown codes default to Low)
pub fn get_severity(code: &str) -> Severity {
    get_error_metadata(code)
        .map(|m| m.severity)
        .unwrap_or(Severity::Low)
}

/// Get the recommended action for a code
pub fn get_action(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|m| m.recommended_action)
        .unwrap_or("No specific action available")
}

/// Check whether an error with this code should halt processing
pub fn requires_halt(code: &str) -> bool {
    get_error_metadata(code)
        .map(|m| m.requires_halt)
        .unwrap_or(false)
}

/// Check whether an error with this code is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_metadata(code)
        .map(|m| m.recoverable)
        .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_all_error_constants() {
        let all_codes = [
            system::INTERNAL_ERROR,
            system::INITIALIZATION_FAILURE,
            lexical::INVALID_CHARACTER,
            lexical::INVALID_NUMBER,
            lexical::IDENTIFIER_TOO_LONG,
            lexical::NUMBER_TOO_LONG,
            lexical::TOO_MANY_TOKENS,
            syntax::UNEXPECTED_TOKEN,
            syntax::UNEXPECTED_END_OF_INPUT,
            syntax::TRAILING_INPUT,
            syntax::MAX_RECURSION_DEPTH,
            automaton::NO_TRANSITION,
            automaton::TRACE_LIMIT_EXCEEDED,
        ];

        for code in all_codes {
            assert!(
                get_error_metadata(code.as_str()).is_some(),
                "missing metadata for {}",
                code
            );
            assert_ne!(get_description(code.as_str()), "Unknown error");
        }
    }

    #[test]
    fn test_classification_helpers() {
        assert_eq!(get_category("E020"), "Lexical");
        assert_eq!(get_category("E050"), "Syntax");
        assert_eq!(get_category("E060"), "Automaton");
        assert_eq!(get_severity("ERR001"), Severity::Critical);
        assert!(requires_halt("ERR001"));
        assert!(!is_recoverable("ERR001"));
        assert!(is_recoverable("E050"));
        assert!(!requires_halt("E050"));
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        assert_eq!(get_description("E999"), "Unknown error");
        assert_eq!(get_category("E999"), "Unknown");
        assert_eq!(get_severity("E999"), Severity::Low);
        assert!(!requires_halt("E999"));
    }

    #[test]
    fn test_success_codes_have_no_error_metadata() {
        assert!(get_error_metadata(success::TOKENIZATION_COMPLETE.as_str()).is_none());
        assert!(get_error_metadata(success::ANALYSIS_COMPLETE.as_str()).is_none());
    }
}
