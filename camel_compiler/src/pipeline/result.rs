//! Combined analysis report for one source string
//!
//! Holds the independent outcome of each consumer plus the text rendering
//! the presentation layer displays: the transition table, the lexical token
//! table, and the parser output.

use crate::automaton::ValidationOutcome;
use crate::grammar::ast::nodes::Program;
use crate::lexical::{LexerError, LexicalMetrics};
use crate::pipeline::PipelineError;
use crate::syntax::SyntaxError;
use crate::tokens::Token;
use crate::utils::SourceMap;
use std::time::Duration;

/// Everything one analysis request produced
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// The source string that was analyzed
    pub source: String,
    /// Lexical table: tokens in source order (sentinel excluded)
    pub tokens: Result<Vec<Token>, LexerError>,
    /// Scan metrics, present when lexing succeeded
    pub metrics: Option<LexicalMetrics>,
    /// Finite-state validation outcome with its transition trace
    pub validation: Result<ValidationOutcome, LexerError>,
    /// Parse result: AST on success, positioned error otherwise
    pub parse: Result<Program, SyntaxError>,
    /// Wall-clock time of the whole request
    pub duration: Duration,
}

impl AnalysisReport {
    /// True when all three consumers completed without an error value.
    /// A validator rejection still counts as completed.
    pub fn fully_successful(&self) -> bool {
        self.tokens.is_ok() && self.validation.is_ok() && self.parse.is_ok()
    }

    /// Number of tokens in the lexical table (0 when lexing failed)
    pub fn token_count(&self) -> usize {
        self.tokens.as_ref().map(|t| t.len()).unwrap_or(0)
    }

    /// The first phase error, in phase order, when any phase failed
    pub fn first_error(&self) -> Option<PipelineError> {
        if let Err(error) = &self.tokens {
            return Some(error.clone().into());
        }
        if let Err(error) = &self.validation {
            return Some(error.clone().into());
        }
        if let Err(error) = &self.parse {
            return Some(error.clone().into());
        }
        None
    }

    /// Render the three result sections as text
    pub fn render(&self) -> String {
        let mut out = String::new();
        let source_map = SourceMap::new(self.source.clone());

        out.push_str("=== State Transitions ===\n");
        match &self.validation {
            Ok(outcome) => {
                out.push_str(&format!(
                    "{:<15} {:<12} {:<12} {:<12} {:<12}\n",
                    "Current State", "Input Type", "Next State", "Token Value", "Final State?"
                ));
                for record in &outcome.trace {
                    out.push_str(&format!(
                        "{:<15} {:<12} {:<12} {:<12} {:<12}\n",
                        record.from_state.as_str(),
                        record.input_class.as_str(),
                        record.to_state.as_str(),
                        record.token_text,
                        if record.is_final { "Yes" } else { "No" }
                    ));
                }
                out.push_str(&format!(
                    "Result: {} (final state {})\n",
                    if outcome.accepted {
                        "accepted"
                    } else {
                        "not accepted"
                    },
                    outcome.final_state
                ));
            }
            Err(error) => {
                out.push_str(&format!("Validation failed: {}\n", error));
            }
        }

        out.push_str("\n=== Lexical Analysis ===\n");
        match &self.tokens {
            Ok(tokens) => {
                out.push_str(&format!(
                    "{:<15} {:<15} {:<10}\n",
                    "Token", "TokenType", "Position"
                ));
                for token in tokens {
                    out.push_str(&format!(
                        "{:<15} {:<15} {:<10}\n",
                        token.text,
                        token.kind.display_label(),
                        token.position
                    ));
                }
                if let Some(metrics) = &self.metrics {
                    out.push_str(&format!(
                        "{} tokens: {} identifiers, {} keywords, {} numbers, {} operators, {} special\n",
                        metrics.total_tokens,
                        metrics.identifier_tokens,
                        metrics.keyword_tokens,
                        metrics.number_tokens,
                        metrics.operator_tokens,
                        metrics.special_tokens
                    ));
                }
            }
            Err(error) => {
                out.push_str(&format!("Lexical analysis failed: {}\n", error));
                if let Some(offset) = error.offset() {
                    out.push_str(&source_map.format_error(offset, 1, &error.to_string()));
                }
            }
        }

        out.push_str("\n=== Parser Output ===\n");
        match &self.parse {
            Ok(program) => {
                out.push_str(&program.derivation());
                out.push_str(&format!(
                    "parsed: {} = {} ;\n",
                    program.statement.target,
                    program.statement.value.to_infix()
                ));
            }
            Err(error) => {
                out.push_str(&format!("Parsing failed: {}\n", error));
                if let Some(offset) = error.position() {
                    out.push_str(&source_map.format_error(offset, 1, &error.to_string()));
                }
            }
        }

        out
    }

    /// Log the request outcome through the global logging service
    pub fn log_outcome(&self) {
        crate::log_success!(
            crate::logging::codes::success::ANALYSIS_COMPLETE,
            "Analysis request completed",
            "token_count" => self.token_count(),
            "accepted" => self
                .validation
                .as_ref()
                .map(|v| v.accepted)
                .unwrap_or(false),
            "parsed" => self.parse.is_ok(),
            "duration_ms" => format!("{:.2}", self.duration.as_secs_f64() * 1000.0)
        );
    }
}
