//! Lexical analysis module
//!
//! Provides the on-demand `Scanner` plus whole-string convenience wrappers.
//! The scanner is single-pass and stateful: each consumer (validator, parser,
//! token table) creates its own instance over the full source string.

pub mod scanner;

use crate::config::runtime::LexicalPreferences;
use crate::tokens::Token;

pub use scanner::{tokenize, LexerError, LexicalMetrics, Scanner};

/// Create a fresh scanner bound to a source string
pub fn create_scanner(source: &str) -> Scanner<'_> {
    Scanner::new(source)
}

/// Create a fresh scanner with custom runtime preferences
pub fn create_scanner_with_preferences(
    source: &str,
    preferences: LexicalPreferences,
) -> Scanner<'_> {
    Scanner::with_preferences(source, preferences)
}

/// Tokenize and return both the tokens and the scan metrics
pub fn tokenize_with_metrics(source: &str) -> Result<(Vec<Token>, LexicalMetrics), LexerError> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = scanner.next_token()?;
        if token.is_end_of_input() {
            break;
        }
        tokens.push(token);
    }

    let metrics = scanner.metrics().clone();
    Ok((tokens, metrics))
}
