//! Core lexical scanner implementation
//!
//! Single-pass, on-demand tokenizer. One scanner is bound to one source
//! string and owned by exactly one consumer; positions come from the cursor,
//! never from re-locating lexemes in the text afterwards.

use crate::config::constants::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::grammar::keywords::is_reserved_keyword;
use crate::logging::codes;
use crate::tokens::{is_operator_symbol, is_special_char, Token, TokenKind};
use crate::utils::{Position, Span};
use crate::{log_debug, log_error};

/// Lexical analysis errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexerError {
    #[error("Invalid character: '{character}' at offset {offset} (line {line}, column {column})")]
    InvalidCharacter {
        character: char,
        offset: usize,
        line: u32,
        column: u32,
    },

    #[error("Invalid number: '{text}' does not fit a 64-bit integer at offset {offset}")]
    InvalidNumber { text: String, offset: usize },

    #[error("Identifier too long: {length} characters (max {MAX_IDENTIFIER_LENGTH}) at offset {offset}")]
    IdentifierTooLong { length: usize, offset: usize },

    #[error("Number too long: {length} digits (max {MAX_NUMBER_LENGTH}) at offset {offset}")]
    NumberTooLong { length: usize, offset: usize },

    #[error("Too many tokens: {count} (max {MAX_TOKEN_COUNT})")]
    TooManyTokens { count: usize },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::InvalidCharacter { .. } => codes::lexical::INVALID_CHARACTER,
            LexerError::InvalidNumber { .. } => codes::lexical::INVALID_NUMBER,
            LexerError::IdentifierTooLong { .. } => codes::lexical::IDENTIFIER_TOO_LONG,
            LexerError::NumberTooLong { .. } => codes::lexical::NUMBER_TOO_LONG,
            LexerError::TooManyTokens { .. } => codes::lexical::TOO_MANY_TOKENS,
        }
    }

    /// Character offset of the failure, where one exists
    pub fn offset(&self) -> Option<usize> {
        match self {
            LexerError::InvalidCharacter { offset, .. }
            | LexerError::InvalidNumber { offset, .. }
            | LexerError::IdentifierTooLong { offset, .. }
            | LexerError::NumberTooLong { offset, .. } => Some(*offset),
            LexerError::TooManyTokens { .. } => None,
        }
    }
}

/// Per-scan token distribution metrics
#[derive(Debug, Default, Clone)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub identifier_tokens: usize,
    pub keyword_tokens: usize,
    pub number_tokens: usize,
    pub operator_tokens: usize,
    pub special_tokens: usize,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token) {
        self.total_tokens += 1;

        match token.kind {
            TokenKind::Identifier => self.identifier_tokens += 1,
            TokenKind::Keyword => self.keyword_tokens += 1,
            TokenKind::Number => self.number_tokens += 1,
            TokenKind::Operator => self.operator_tokens += 1,
            TokenKind::SpecialChar => self.special_tokens += 1,
            TokenKind::EndOfInput => {}
        }
    }
}

/// Single-pass scanner over one source string
pub struct Scanner<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    position: Position,
    reached_end: bool,
    token_count: usize,
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            position: Position::start(),
            reached_end: false,
            token_count: 0,
            metrics: LexicalMetrics::default(),
            preferences: LexicalPreferences::default(),
        }
    }

    pub fn with_preferences(source: &'a str, preferences: LexicalPreferences) -> Self {
        Self {
            chars: source.chars().peekable(),
            position: Position::start(),
            reached_end: false,
            token_count: 0,
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    /// Get metrics collected so far
    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    /// Current cursor position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Produce the next token in source order.
    ///
    /// After the input is exhausted this keeps returning the `EndOfInput`
    /// sentinel; it never fails past end of input.
    pub fn next_token(&mut self) -> Result<Token, LexerError> {
        if self.reached_end {
            return Ok(Token::end_of_input(self.position.offset));
        }

        self.skip_whitespace();

        let start = self.position;
        let ch = match self.chars.peek() {
            Some(&ch) => ch,
            None => {
                self.reached_end = true;
                return Ok(Token::end_of_input(self.position.offset));
            }
        };

        if self.token_count >= MAX_TOKEN_COUNT {
            let error = LexerError::TooManyTokens {
                count: self.token_count,
            };
            log_error!(error.error_code(), "Token limit exceeded",
                "count" => self.token_count,
                "limit" => MAX_TOKEN_COUNT
            );
            return Err(error);
        }

        let token = match ch {
            'a'..='z' | 'A'..='Z' | '_' => self.scan_word(start)?,
            '0'..='9' => self.scan_number(start)?,
            '=' | '<' | '>' | '!' => self.scan_comparison_or_assign(start)?,
            '+' | '-' | '*' | '/' | '%' => {
                self.advance();
                Token::new(TokenKind::Operator, ch.to_string(), start.offset)
            }
            _ if is_special_char(ch) => {
                self.advance();
                Token::new(TokenKind::SpecialChar, ch.to_string(), start.offset)
            }
            _ => {
                let error = LexerError::InvalidCharacter {
                    character: ch,
                    offset: start.offset,
                    line: start.line,
                    column: start.column,
                };
                let message = if self.preferences.include_position_in_errors {
                    format!(
                        "Lexical analysis failed at line {}, column {}",
                        start.line, start.column
                    )
                } else {
                    "Lexical analysis failed".to_string()
                };
                log_error!(error.error_code(), &message,
                    span = Span::single(start),
                    "character" => ch,
                    "offset" => start.offset
                );
                return Err(error);
            }
        };

        self.token_count += 1;
        if self.preferences.collect_detailed_metrics {
            self.metrics.record_token(&token);
        }

        Ok(token)
    }

    // ========================================================================
    // Private scanning methods
    // ========================================================================

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.position = self.position.advance(ch);
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if ch == ' ' || ch == '\t' || ch == '\r' || ch == '\n' {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn scan_word(&mut self, start: Position) -> Result<Token, LexerError> {
        let mut word = String::new();

        while let Some(&ch) = self.chars.peek() {
            match ch {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '_' => {
                    word.push(ch);
                    self.advance();
                }
                _ => break,
            }
        }

        if word.chars().count() > MAX_IDENTIFIER_LENGTH {
            return Err(LexerError::IdentifierTooLong {
                length: word.chars().count(),
                offset: start.offset,
            });
        }

        let kind = if is_reserved_keyword(&word) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };

        Ok(Token::new(kind, word, start.offset))
    }

    fn scan_number(&mut self, start: Position) -> Result<Token, LexerError> {
        let mut digits = String::new();

        while let Some(&ch) = self.chars.peek() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if digits.len() > MAX_NUMBER_LENGTH {
            return Err(LexerError::NumberTooLong {
                length: digits.len(),
                offset: start.offset,
            });
        }

        if digits.parse::<i64>().is_err() {
            return Err(LexerError::InvalidNumber {
                text: digits,
                offset: start.offset,
            });
        }

        Ok(Token::new(TokenKind::Number, digits, start.offset))
    }

    fn scan_comparison_or_assign(&mut self, start: Position) -> Result<Token, LexerError> {
        let first = self.advance().unwrap_or_default();
        let paired = self.chars.peek() == Some(&'=');

        let text = match (first, paired) {
            ('=', true) | ('<', true) | ('>', true) | ('!', true) => {
                self.advance();
                format!("{}=", first)
            }
            ('=', false) => "=".to_string(),
            ('<', false) => "<".to_string(),
            ('>', false) => ">".to_string(),
            ('!', false) => {
                // '!' only exists as the first half of '!='
                return Err(LexerError::InvalidCharacter {
                    character: '!',
                    offset: start.offset,
                    line: start.line,
                    column: start.column,
                });
            }
            _ => unreachable!("caller checked the first character"),
        };

        debug_assert!(is_operator_symbol(&text));
        Ok(Token::new(TokenKind::Operator, text, start.offset))
    }
}

impl std::fmt::Debug for Scanner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("position", &self.position)
            .field("reached_end", &self.reached_end)
            .field("token_count", &self.token_count)
            .finish()
    }
}

/// Collect the real tokens of a source string from a fresh scanner.
/// The `EndOfInput` sentinel marks the end and is not included.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexerError> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = scanner.next_token()?;
        if token.is_end_of_input() {
            break;
        }
        tokens.push(token);
    }

    log_debug!("Tokenization finished",
        "token_count" => tokens.len(),
        "source_length" => source.chars().count()
    );

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn kinds_and_texts(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
        tokens.iter().map(|t| (t.kind, t.text.as_str())).collect()
    }

    #[test]
    fn test_round_trip_reference_statement() {
        let tokens = tokenize("x = y + 5 ;").expect("lexes");

        assert_eq!(
            kinds_and_texts(&tokens),
            vec![
                (TokenKind::Identifier, "x"),
                (TokenKind::Operator, "="),
                (TokenKind::Identifier, "y"),
                (TokenKind::Operator, "+"),
                (TokenKind::Number, "5"),
                (TokenKind::SpecialChar, ";"),
            ]
        );

        // Positions are cursor-derived: strictly increasing, non-overlapping
        assert_eq!(
            tokens.iter().map(|t| t.position).collect::<Vec<_>>(),
            vec![0, 2, 4, 6, 8, 10]
        );
        for pair in tokens.windows(2) {
            assert!(pair[0].position + pair[0].len() <= pair[1].position);
        }
    }

    #[test]
    fn test_whitespace_only_yields_empty_sequence() {
        for source in ["", " ", "   \t  \n  \r\n "] {
            let tokens = tokenize(source).expect("lexes");
            assert!(tokens.is_empty(), "{:?} should yield no tokens", source);
        }
    }

    #[test]
    fn test_end_of_input_is_idempotent() {
        let mut scanner = Scanner::new("x ;");

        let mut token = scanner.next_token().expect("token");
        while !token.is_end_of_input() {
            token = scanner.next_token().expect("token");
        }

        let end_offset = token.position;
        for _ in 0..5 {
            let again = scanner.next_token().expect("sentinel");
            assert!(again.is_end_of_input());
            assert_eq!(again.position, end_offset);
        }
    }

    #[test]
    fn test_repeated_lexemes_get_distinct_positions() {
        let tokens = tokenize("x = x + x ;").expect("lexes");
        let x_positions: Vec<usize> = tokens
            .iter()
            .filter(|t| t.text == "x")
            .map(|t| t.position)
            .collect();
        assert_eq!(x_positions, vec![0, 4, 8]);
    }

    #[test]
    fn test_keywords_are_classified() {
        let tokens = tokenize("if x while").expect("lexes");
        assert_eq!(
            kinds_and_texts(&tokens),
            vec![
                (TokenKind::Keyword, "if"),
                (TokenKind::Identifier, "x"),
                (TokenKind::Keyword, "while"),
            ]
        );
    }

    #[test]
    fn test_paired_operators() {
        let tokens = tokenize("a <= b == c != d >= e < f > g").expect("lexes");
        let ops: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Operator)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(ops, vec!["<=", "==", "!=", ">=", "<", ">"]);
    }

    #[test]
    fn test_invalid_character_reports_offset() {
        let error = tokenize("x = y @ 5 ;").expect_err("@ is not lexable");
        assert_matches!(
            error,
            LexerError::InvalidCharacter {
                character: '@',
                offset: 6,
                ..
            }
        );
        assert_eq!(error.error_code().as_str(), "E020");
    }

    #[test]
    fn test_bare_bang_is_invalid() {
        let error = tokenize("x ! y").expect_err("bare ! is not an operator");
        assert_matches!(error, LexerError::InvalidCharacter { character: '!', offset: 2, .. });
    }

    #[test]
    fn test_number_overflow_is_invalid() {
        // 19 digits, larger than i64::MAX
        let error = tokenize("x = 9999999999999999999 ;").expect_err("overflows i64");
        assert_matches!(error, LexerError::InvalidNumber { offset: 4, .. });
    }

    #[test]
    fn test_identifiers_may_contain_digits_and_underscores() {
        let tokens = tokenize("total_2 = value_1 ;").expect("lexes");
        assert_eq!(tokens[0].text, "total_2");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[2].text, "value_1");
    }

    #[test]
    fn test_metrics_distribution() {
        let mut scanner = Scanner::new("x = y + 5 ;");
        loop {
            let token = scanner.next_token().expect("lexes");
            if token.is_end_of_input() {
                break;
            }
        }

        let metrics = scanner.metrics();
        assert_eq!(metrics.total_tokens, 6);
        assert_eq!(metrics.identifier_tokens, 2);
        assert_eq!(metrics.operator_tokens, 2);
        assert_eq!(metrics.number_tokens, 1);
        assert_eq!(metrics.special_tokens, 1);
        assert_eq!(metrics.keyword_tokens, 0);
    }

    #[test]
    fn test_multiline_positions() {
        let tokens = tokenize("x =\n  y ;").expect("lexes");
        // Offsets count characters across lines, including the newline
        assert_eq!(
            tokens.iter().map(|t| t.position).collect::<Vec<_>>(),
            vec![0, 2, 6, 8]
        );
    }

    #[test]
    fn test_cursor_stops_at_end_of_source() {
        let source = "x = 1 ;";
        let mut scanner = Scanner::new(source);
        while !scanner.next_token().expect("token").is_end_of_input() {}
        assert_eq!(scanner.position().offset, source.chars().count());
    }
}
