//! Automaton states and input classification
use crate::tokens::{Token, TokenKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed state set of the statement automaton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    /// Initial state, before any token
    #[serde(rename = "q0")]
    Q0,
    /// Seen the assignment target
    #[serde(rename = "q1")]
    Q1,
    /// Seen `=`
    #[serde(rename = "q2")]
    Q2,
    /// Seen an operand; a terminator or an operator may follow
    #[serde(rename = "q3")]
    Q3,
    /// Seen an operator; another operand must follow
    #[serde(rename = "q4")]
    Q4,
    /// Terminal: statement accepted
    #[serde(rename = "q_accept")]
    Accept,
    /// Terminal: no transition existed for the input
    #[serde(rename = "q_error")]
    Error,
}

impl State {
    /// Display name as shown in the transition table
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Q0 => "q0",
            Self::Q1 => "q1",
            Self::Q2 => "q2",
            Self::Q3 => "q3",
            Self::Q4 => "q4",
            Self::Accept => "q_accept",
            Self::Error => "q_error",
        }
    }

    /// Terminal states have no outgoing transitions
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Accept | Self::Error)
    }

    /// States flagged as final in the transition trace. `q1` and `q3` are
    /// the resting points of a well-formed prefix; `q_accept` ends one.
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Q1 | Self::Q3 | Self::Accept)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse token category used for transition table lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputClass {
    /// Identifiers and numbers (operands)
    #[serde(rename = "letter")]
    Letter,
    /// The assignment operator `=`
    #[serde(rename = "=")]
    Assign,
    /// Any other operator
    #[serde(rename = "operator")]
    Operator,
    /// The statement terminator `;`
    #[serde(rename = "special")]
    Special,
    /// Everything unclassified (keywords, other punctuation)
    #[serde(rename = "other")]
    Other,
}

impl InputClass {
    /// Display name as shown in the transition table
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Letter => "letter",
            Self::Assign => "=",
            Self::Operator => "operator",
            Self::Special => "special",
            Self::Other => "other",
        }
    }

    /// Classify a token. Total: every token gets exactly one class.
    pub fn classify(token: &Token) -> Self {
        match token.kind {
            TokenKind::Identifier | TokenKind::Number => Self::Letter,
            TokenKind::Operator => {
                if token.text == "=" {
                    Self::Assign
                } else {
                    Self::Operator
                }
            }
            TokenKind::SpecialChar => {
                if token.text == ";" {
                    Self::Special
                } else {
                    Self::Other
                }
            }
            TokenKind::Keyword | TokenKind::EndOfInput => Self::Other,
        }
    }
}

impl fmt::Display for InputClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
