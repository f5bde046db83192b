//! AST node definitions
//!
//! The parse result is a `Program` holding the single assignment statement.
//! Its derivation rendering is the textual artifact shown by the presentation
//! layer: deterministic, non-empty on success, and shaped so that `*` and `/`
//! visibly bind tighter than `+` and `-`.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators the expression grammar understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// Source symbol for this operator
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Derivation label for this operator
    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Parse an operator from its source symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Expression tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// A variable reference
    Identifier { name: String, position: usize },
    /// An integer literal
    Number { value: i64, position: usize },
    /// A binary operation; precedence is structural, not stored
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// A parenthesized sub-expression
    Grouping { inner: Box<Expr>, position: usize },
}

impl Expr {
    /// Create a binary node
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Character offset of the leftmost token of this expression
    pub fn position(&self) -> usize {
        match self {
            Self::Identifier { position, .. }
            | Self::Number { position, .. }
            | Self::Grouping { position, .. } => *position,
            Self::Binary { lhs, .. } => lhs.position(),
        }
    }

    /// Fully parenthesized infix rendering (unambiguous, used in reports)
    pub fn to_infix(&self) -> String {
        match self {
            Self::Identifier { name, .. } => name.clone(),
            Self::Number { value, .. } => value.to_string(),
            Self::Binary { op, lhs, rhs } => {
                format!("({} {} {})", lhs.to_infix(), op.symbol(), rhs.to_infix())
            }
            Self::Grouping { inner, .. } => inner.to_infix(),
        }
    }

    fn render(&self, prefix: &str, is_last: bool, out: &mut String) {
        let connector = if is_last { "`-- " } else { "|-- " };
        let child_prefix = if is_last {
            format!("{}    ", prefix)
        } else {
            format!("{}|   ", prefix)
        };

        match self {
            Self::Identifier { name, .. } => {
                out.push_str(&format!("{}{}identifier '{}'\n", prefix, connector, name));
            }
            Self::Number { value, .. } => {
                out.push_str(&format!("{}{}number {}\n", prefix, connector, value));
            }
            Self::Binary { op, lhs, rhs } => {
                out.push_str(&format!("{}{}{}\n", prefix, connector, op.label()));
                lhs.render(&child_prefix, false, out);
                rhs.render(&child_prefix, true, out);
            }
            Self::Grouping { inner, .. } => {
                out.push_str(&format!("{}{}group\n", prefix, connector));
                inner.render(&child_prefix, true, out);
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_infix())
    }
}

/// One assignment statement: `identifier = expression ;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// Assignment target name
    pub target: String,
    /// Character offset of the target identifier
    pub target_position: usize,
    /// Right-hand side expression
    pub value: Expr,
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} ;", self.target, self.value.to_infix())
    }
}

/// A parsed program: exactly one assignment statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub statement: Statement,
}

impl Program {
    /// Deterministic derivation rendering of the parse
    pub fn derivation(&self) -> String {
        let mut out = String::new();
        out.push_str("program\n");
        out.push_str("`-- statement\n");
        out.push_str(&format!(
            "    |-- target '{}'\n",
            self.statement.target
        ));
        out.push_str("    `-- expression\n");
        self.statement.value.render("        ", true, &mut out);
        out
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.derivation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str, position: usize) -> Expr {
        Expr::Identifier {
            name: name.to_string(),
            position,
        }
    }

    fn number(value: i64, position: usize) -> Expr {
        Expr::Number { value, position }
    }

    #[test]
    fn test_infix_rendering() {
        let expr = Expr::binary(
            BinaryOp::Add,
            number(2, 4),
            Expr::binary(BinaryOp::Multiply, number(3, 8), number(4, 12)),
        );
        assert_eq!(expr.to_infix(), "(2 + (3 * 4))");
    }

    #[test]
    fn test_derivation_non_empty_and_deterministic() {
        let program = Program {
            statement: Statement {
                target: "x".to_string(),
                target_position: 0,
                value: Expr::binary(BinaryOp::Add, ident("y", 4), number(5, 8)),
            },
        };

        let first = program.derivation();
        let second = program.derivation();
        assert!(!first.is_empty());
        assert_eq!(first, second);
        assert!(first.contains("target 'x'"));
        assert!(first.contains("add"));
        assert!(first.contains("identifier 'y'"));
        assert!(first.contains("number 5"));
    }

    #[test]
    fn test_expression_position_is_leftmost() {
        let expr = Expr::binary(BinaryOp::Subtract, ident("a", 4), number(1, 8));
        assert_eq!(expr.position(), 4);
    }

    #[test]
    fn test_operator_symbols() {
        assert_eq!(BinaryOp::from_symbol("+"), Some(BinaryOp::Add));
        assert_eq!(BinaryOp::from_symbol("%"), None);
        assert_eq!(BinaryOp::Divide.symbol(), "/");
    }
}
