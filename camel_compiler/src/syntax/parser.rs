//! Recursive-descent parser implementation
//!
//! The parser owns a fresh scanner and pulls tokens on demand, holding one
//! token of lookahead. Grammar:
//!
//! ```text
//! program    := statement
//! statement  := identifier '=' expression ';'
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := identifier | number | '(' expression ')'
//! ```

use crate::config::constants::compile_time::syntax::MAX_PARSE_DEPTH;
use crate::config::runtime::SyntaxPreferences;
use crate::grammar::ast::nodes::{BinaryOp, Expr, Program, Statement};
use crate::lexical::Scanner;
use crate::log_debug;
use crate::syntax::error::{SyntaxError, SyntaxResult};
use crate::tokens::{Token, TokenKind};

/// Recursive-descent parser bound to one scanner
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    current: Token,
    group_depth: usize,
    preferences: SyntaxPreferences,
}

impl<'a> Parser<'a> {
    /// Bind a fresh scanner and prime the one-token lookahead
    pub fn new(mut scanner: Scanner<'a>) -> SyntaxResult<Self> {
        let current = scanner.next_token()?;
        Ok(Self {
            scanner,
            current,
            group_depth: 0,
            preferences: SyntaxPreferences::default(),
        })
    }

    /// Bind with custom runtime preferences
    pub fn with_preferences(
        mut scanner: Scanner<'a>,
        preferences: SyntaxPreferences,
    ) -> SyntaxResult<Self> {
        let current = scanner.next_token()?;
        Ok(Self {
            scanner,
            current,
            group_depth: 0,
            preferences,
        })
    }

    /// Parse the whole program: one assignment statement, then end of input
    pub fn parse_program(&mut self) -> SyntaxResult<Program> {
        self.trace_step("program");

        let statement = self.parse_statement()?;

        if !self.current.is_end_of_input() {
            return Err(SyntaxError::trailing_input(&self.current));
        }

        Ok(Program { statement })
    }

    // ========================================================================
    // Productions
    // ========================================================================

    fn parse_statement(&mut self) -> SyntaxResult<Statement> {
        self.trace_step("statement");

        let (target, target_position) = self.expect_identifier()?;
        self.expect_operator("=")?;
        let value = self.parse_expression()?;
        self.expect_special_char(";")?;

        Ok(Statement {
            target,
            target_position,
            value,
        })
    }

    fn parse_expression(&mut self) -> SyntaxResult<Expr> {
        self.trace_step("expression");

        let mut expr = self.parse_term()?;

        while self.current.is_operator("+") || self.current.is_operator("-") {
            let op = if self.current.is_operator("+") {
                BinaryOp::Add
            } else {
                BinaryOp::Subtract
            };
            self.advance()?;
            let rhs = self.parse_term()?;
            expr = Expr::binary(op, expr, rhs);
        }

        Ok(expr)
    }

    fn parse_term(&mut self) -> SyntaxResult<Expr> {
        self.trace_step("term");

        let mut expr = self.parse_factor()?;

        while self.current.is_operator("*") || self.current.is_operator("/") {
            let op = if self.current.is_operator("*") {
                BinaryOp::Multiply
            } else {
                BinaryOp::Divide
            };
            self.advance()?;
            let rhs = self.parse_factor()?;
            expr = Expr::binary(op, expr, rhs);
        }

        Ok(expr)
    }

    fn parse_factor(&mut self) -> SyntaxResult<Expr> {
        self.trace_step("factor");

        match self.current.kind {
            TokenKind::Identifier => {
                let expr = Expr::Identifier {
                    name: self.current.text.clone(),
                    position: self.current.position,
                };
                self.advance()?;
                Ok(expr)
            }
            TokenKind::Number => {
                let value = match self.current.text.parse::<i64>() {
                    Ok(value) => value,
                    Err(_) => {
                        return Err(SyntaxError::unexpected_token("number", &self.current));
                    }
                };
                let expr = Expr::Number {
                    value,
                    position: self.current.position,
                };
                self.advance()?;
                Ok(expr)
            }
            TokenKind::SpecialChar if self.current.text == "(" => {
                let position = self.current.position;

                if self.group_depth >= MAX_PARSE_DEPTH {
                    return Err(SyntaxError::MaxParseDepth { position });
                }

                self.advance()?;
                self.group_depth += 1;
                let inner = self.parse_expression()?;
                self.group_depth -= 1;
                self.expect_special_char(")")?;

                Ok(Expr::Grouping {
                    inner: Box::new(inner),
                    position,
                })
            }
            TokenKind::EndOfInput => Err(SyntaxError::unexpected_end_of_input(
                "identifier, number, or '('",
            )),
            _ => Err(SyntaxError::unexpected_token(
                "identifier, number, or '('",
                &self.current,
            )),
        }
    }

    // ========================================================================
    // Token expectation helpers
    // ========================================================================

    fn advance(&mut self) -> SyntaxResult<()> {
        self.current = self.scanner.next_token()?;
        Ok(())
    }

    fn expect_identifier(&mut self) -> SyntaxResult<(String, usize)> {
        match self.current.kind {
            TokenKind::Identifier => {
                let name = self.current.text.clone();
                let position = self.current.position;
                self.advance()?;
                Ok((name, position))
            }
            TokenKind::EndOfInput => Err(SyntaxError::unexpected_end_of_input("identifier")),
            _ => Err(SyntaxError::unexpected_token("identifier", &self.current)),
        }
    }

    fn expect_operator(&mut self, symbol: &str) -> SyntaxResult<()> {
        if self.current.is_operator(symbol) {
            self.advance()
        } else if self.current.is_end_of_input() {
            Err(SyntaxError::unexpected_end_of_input(&format!(
                "'{}'",
                symbol
            )))
        } else {
            Err(SyntaxError::unexpected_token(
                &format!("'{}'", symbol),
                &self.current,
            ))
        }
    }

    fn expect_special_char(&mut self, symbol: &str) -> SyntaxResult<()> {
        if self.current.is_special_char(symbol) {
            self.advance()
        } else if self.current.is_end_of_input() {
            Err(SyntaxError::unexpected_end_of_input(&format!(
                "'{}'",
                symbol
            )))
        } else {
            Err(SyntaxError::unexpected_token(
                &format!("'{}'", symbol),
                &self.current,
            ))
        }
    }

    fn trace_step(&self, production: &str) {
        if self.preferences.log_parse_steps {
            log_debug!("Entering production",
                "production" => production,
                "current" => self.current.display_text(),
                "offset" => self.current.position
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::parse;
    use assert_matches::assert_matches;

    #[test]
    fn test_parses_reference_statement() {
        let program = parse("x = y + 5 ;").expect("parses");

        assert_eq!(program.statement.target, "x");
        assert_eq!(program.statement.target_position, 0);
        assert_eq!(
            program.statement.value,
            Expr::binary(
                BinaryOp::Add,
                Expr::Identifier {
                    name: "y".to_string(),
                    position: 4
                },
                Expr::Number {
                    value: 5,
                    position: 8
                },
            )
        );
    }

    #[test]
    fn test_multiplication_binds_tighter_than_addition() {
        let program = parse("x = 2 + 3 * 4 ;").expect("parses");

        // The product must nest under the sum, never the other way around
        assert_eq!(
            program.statement.value,
            Expr::binary(
                BinaryOp::Add,
                Expr::Number {
                    value: 2,
                    position: 4
                },
                Expr::binary(
                    BinaryOp::Multiply,
                    Expr::Number {
                        value: 3,
                        position: 8
                    },
                    Expr::Number {
                        value: 4,
                        position: 12
                    },
                ),
            )
        );
        assert_eq!(program.statement.value.to_infix(), "(2 + (3 * 4))");
    }

    #[test]
    fn test_same_precedence_associates_left() {
        let program = parse("x = 8 - 3 - 1 ;").expect("parses");
        assert_eq!(program.statement.value.to_infix(), "((8 - 3) - 1)");
    }

    #[test]
    fn test_parentheses_override_precedence() {
        let program = parse("x = ( 2 + 3 ) * 4 ;").expect("parses");
        assert_eq!(program.statement.value.to_infix(), "((2 + 3) * 4)");
        assert_matches!(
            program.statement.value,
            Expr::Binary {
                op: BinaryOp::Multiply,
                ..
            }
        );
    }

    #[test]
    fn test_error_points_at_second_identifier() {
        let error = parse("x y = 5 ;").expect_err("two identifiers before =");
        assert_matches!(
            error,
            SyntaxError::UnexpectedToken { position: 2, .. }
        );
        if let SyntaxError::UnexpectedToken { expected, found, .. } = error {
            assert_eq!(found, "y");
            assert!(expected.contains('='));
        }
    }

    #[test]
    fn test_missing_terminator_is_reported() {
        let error = parse("x = y + 5").expect_err("missing ;");
        assert_matches!(error, SyntaxError::UnexpectedEndOfInput { .. });
    }

    #[test]
    fn test_missing_operand_is_reported() {
        let error = parse("x = y + ;").expect_err("operator without rhs");
        assert_matches!(error, SyntaxError::UnexpectedToken { position: 8, .. });
    }

    #[test]
    fn test_empty_input_is_reported() {
        let error = parse("").expect_err("nothing to parse");
        assert_matches!(error, SyntaxError::UnexpectedEndOfInput { .. });
    }

    #[test]
    fn test_trailing_tokens_are_rejected() {
        let error = parse("x = y ; z").expect_err("trailing token");
        assert_matches!(error, SyntaxError::TrailingInput { position: 8, .. });
    }

    #[test]
    fn test_keyword_target_is_rejected() {
        let error = parse("if = y ;").expect_err("keyword is not an identifier");
        assert_matches!(error, SyntaxError::UnexpectedToken { position: 0, .. });
    }

    #[test]
    fn test_comparison_operator_is_lexable_but_not_parsable() {
        let error = parse("x = y < 5 ;").expect_err("< is outside the expression grammar");
        assert_matches!(error, SyntaxError::UnexpectedToken { position: 6, .. });
    }

    #[test]
    fn test_unmatched_close_paren() {
        let error = parse("x = ( y + 5 ;").expect_err("missing )");
        assert_matches!(error, SyntaxError::UnexpectedToken { position: 12, .. });
    }

    #[test]
    fn test_deeply_nested_groups_hit_depth_limit() {
        let open = "( ".repeat(MAX_PARSE_DEPTH + 1);
        let close = ") ".repeat(MAX_PARSE_DEPTH + 1);
        let source = format!("x = {}1 {};", open, close);

        let error = parse(&source).expect_err("exceeds depth limit");
        assert_matches!(error, SyntaxError::MaxParseDepth { .. });
    }

    #[test]
    fn test_nested_groups_within_limit_parse() {
        let source = "x = ( ( ( 1 ) ) ) ;";
        let program = parse(source).expect("parses");
        assert_eq!(program.statement.value.to_infix(), "1");
    }

    #[test]
    fn test_parser_with_step_tracing_preferences() {
        let preferences = SyntaxPreferences {
            log_parse_steps: true,
        };
        let scanner = Scanner::new("x = 1 ;");
        let mut parser = Parser::with_preferences(scanner, preferences).expect("primes");
        let program = parser.parse_program().expect("parses");
        assert_eq!(program.statement.target, "x");
    }
}
