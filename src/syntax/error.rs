//! Contains the error types that can occur while reordering an expression into postfix form.

use std::fmt::Display;

use crate::{
    base::log::{Message, Severity},
    lexical::token::Operator,
};

/// Result type for conversion operations.
pub type ParseResult<T> = Result<T, Error>;

/// An enumeration containing all kinds of syntactic errors that can occur while converting an
/// expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    MismatchedParentheses(#[from] MismatchedParentheses),
    #[error(transparent)]
    UnaryMinusNotSupported(#[from] UnaryMinusNotSupported),
    #[error(transparent)]
    OperatorInUnaryPosition(#[from] OperatorInUnaryPosition),
}

/// Is an enumeration of the two parenthesis kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Parenthesis {
    /// (
    Left,
    /// )
    Right,
}

impl Parenthesis {
    /// Returns the character of the parenthesis.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Left => '(',
            Self::Right => ')',
        }
    }
}

/// A parenthesis has no matching counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MismatchedParentheses {
    /// The parenthesis that was left without a partner.
    pub unmatched: Parenthesis,
}

impl Display for MismatchedParentheses {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self.unmatched {
            Parenthesis::Left => format!(
                "mismatched parentheses: `{}` is never closed",
                Parenthesis::Left.as_char()
            ),
            Parenthesis::Right => format!(
                "mismatched parentheses: `{}` has no opening partner",
                Parenthesis::Right.as_char()
            ),
        };

        write!(f, "{}", Message::new(Severity::Error, message))
    }
}

impl std::error::Error for MismatchedParentheses {}

/// A `-` appeared where an operand was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnaryMinusNotSupported;

impl Display for UnaryMinusNotSupported {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, "unary minus is not supported"),
            Message::new(Severity::Help, "write the negation as a subtraction, e.g. `(0 - 3)`")
        )
    }
}

impl std::error::Error for UnaryMinusNotSupported {}

/// A binary operator other than `-` appeared where an operand was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperatorInUnaryPosition {
    /// The misplaced operator.
    pub operator: Operator,
}

impl Display for OperatorInUnaryPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!(
            "operator `{}` is in unary position, expected a number or `(`",
            self.operator
        );
        write!(f, "{}", Message::new(Severity::Error, message))
    }
}

impl std::error::Error for OperatorInUnaryPosition {}
