//! Analysis pipeline: one source string in, three independent results out
//!
//! Mirrors the presentation layer's contract: the token table, the
//! finite-state validation, and the parse each get a fresh scanner over the
//! full source, and a failure in one never prevents the others from
//! completing and reporting their own outcome.

mod error;
mod result;
mod validation;

// Re-export public types
pub use error::PipelineError;
pub use result::AnalysisReport;
pub use validation::validate_pipeline;

use crate::logging::codes;
use crate::{automaton, lexical, log_debug, log_error, log_success, syntax};
use std::time::Instant;

/// Run all three consumers over one source string.
///
/// Each consumer owns its own scanner; scanner state is never shared. The
/// report carries each phase's own `Result` so the caller can render partial
/// outcomes (the original display shows whichever tables still apply).
pub fn analyze(source: &str) -> AnalysisReport {
    let start_time = Instant::now();

    log_debug!("Starting analysis request",
        "source_length" => source.chars().count()
    );

    // Phase 1: lexical table (fresh scanner)
    let (tokens, metrics) = match lexical::tokenize_with_metrics(source) {
        Ok((tokens, metrics)) => {
            log_success!(codes::success::TOKENIZATION_COMPLETE,
                "Lexical analysis completed",
                "token_count" => tokens.len(),
                "identifiers" => metrics.identifier_tokens,
                "operators" => metrics.operator_tokens
            );
            (Ok(tokens), Some(metrics))
        }
        Err(error) => {
            log_error!(error.error_code(), "Lexical analysis failed",
                "error" => error
            );
            (Err(error), None)
        }
    };

    // Phase 2: finite-state validation (fresh scanner)
    let validation = match automaton::validate(source) {
        Ok(outcome) => {
            log_success!(codes::success::VALIDATION_COMPLETE,
                "Finite-state validation completed",
                "accepted" => outcome.accepted,
                "final_state" => outcome.final_state,
                "transitions" => outcome.trace.len()
            );
            Ok(outcome)
        }
        Err(error) => {
            log_error!(error.error_code(), "Validation could not tokenize its input",
                "error" => error
            );
            Err(error)
        }
    };

    // Phase 3: parse (fresh scanner)
    let parse = match syntax::parse(source) {
        Ok(program) => {
            log_success!(codes::success::PARSE_COMPLETE,
                "Parse completed",
                "target" => program.statement.target
            );
            Ok(program)
        }
        Err(error) => {
            log_error!(error.error_code(), "Parse failed",
                "error" => error
            );
            Err(error)
        }
    };

    let report = AnalysisReport {
        source: source.to_string(),
        tokens,
        metrics,
        validation,
        parse,
        duration: start_time.elapsed(),
    };

    report.log_outcome();
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::State;

    #[test]
    fn test_analyze_reference_statement() {
        let report = analyze("x = y + 5 ;");

        assert!(report.fully_successful());
        assert_eq!(report.token_count(), 6);

        let validation = report.validation.as_ref().expect("validated");
        assert!(validation.accepted);
        assert_eq!(validation.final_state, State::Accept);

        let program = report.parse.as_ref().expect("parsed");
        assert_eq!(program.statement.target, "x");

        let metrics = report.metrics.as_ref().expect("metrics collected");
        assert_eq!(metrics.total_tokens, 6);
    }

    #[test]
    fn test_parser_failure_does_not_abort_other_phases() {
        // Rejected by the grammar, but perfectly lexable
        let report = analyze("x y = 5 ;");

        assert!(report.tokens.is_ok());
        assert!(report.validation.is_ok());
        assert!(report.parse.is_err());

        // The validator reports its own verdict independently
        let validation = report.validation.as_ref().expect("validated");
        assert!(!validation.accepted);
    }

    #[test]
    fn test_lexical_failure_is_consistent_across_phases() {
        // All three consumers scan from the beginning, so all three see
        // the same invalid character and fail whole
        let report = analyze("x = y @ 5 ;");

        assert!(report.tokens.is_err());
        assert!(report.validation.is_err());
        assert!(report.parse.is_err());
    }

    #[test]
    fn test_analyze_empty_source() {
        let report = analyze("");

        assert_eq!(report.token_count(), 0);
        let validation = report.validation.as_ref().expect("validated");
        assert!(!validation.accepted);
        assert_eq!(validation.final_state, State::Q0);
        assert!(report.parse.is_err());
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let first = analyze("x = y + 5 ;");
        let second = analyze("x = y + 5 ;");

        assert_eq!(first.tokens, second.tokens);
        assert_eq!(
            first.validation.as_ref().expect("validated").trace,
            second.validation.as_ref().expect("validated").trace
        );
        assert_eq!(first.parse, second.parse);
    }
}
