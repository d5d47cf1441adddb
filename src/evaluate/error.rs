//! Errors that can occur while evaluating a postfix expression.

use std::fmt::Display;

use itertools::Itertools as _;

use crate::{
    base::log::{Message, Severity},
    lexical::token::{Operator, Token},
    util,
};

/// Errors that can occur while evaluating a postfix expression.
#[allow(clippy::module_name_repetitions, missing_docs)]
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    EmptyExpression(#[from] EmptyExpression),
    #[error(transparent)]
    StackUnderflow(#[from] StackUnderflow),
    #[error(transparent)]
    DivisionByZero(#[from] DivisionByZero),
    #[error(transparent)]
    LeftoverStackItems(#[from] LeftoverStackItems),
    #[error(transparent)]
    UnexpectedToken(#[from] UnexpectedToken),
}

/// The result of an evaluation.
pub type EvaluateResult<T> = Result<T, Error>;

/// The postfix expression has no tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyExpression;

impl Display for EmptyExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Message::new(Severity::Error, "empty expression"))
    }
}

impl std::error::Error for EmptyExpression {}

/// An operator was reached with fewer than two values on the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StackUnderflow {
    /// The operator that was missing operands.
    pub operator: Operator,
}

impl Display for StackUnderflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!(
            "stack underflow: operator `{}` needs two operands",
            self.operator
        );
        write!(f, "{}", Message::new(Severity::Error, message))
    }
}

impl std::error::Error for StackUnderflow {}

/// The right operand of a division is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DivisionByZero;

impl Display for DivisionByZero {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Message::new(Severity::Error, "division by zero"))
    }
}

impl std::error::Error for DivisionByZero {}

/// More than one value remained on the stack after all tokens were processed.
#[derive(Debug, Clone, PartialEq)]
pub struct LeftoverStackItems {
    /// The values left on the stack, bottom first.
    pub stack: Vec<f64>,
}

impl Display for LeftoverStackItems {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!(
            "leftover stack items: [{}]",
            self.stack.iter().copied().map(util::format_number).join(", ")
        );

        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, message),
            Message::new(Severity::Help, "an operator is missing between two operands")
        )
    }
}

impl std::error::Error for LeftoverStackItems {}

/// A token that cannot appear in postfix order, i.e. a parenthesis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnexpectedToken {
    /// The offending token.
    pub token: Token,
}

impl Display for UnexpectedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!("unexpected token `{}` in postfix expression", self.token);
        write!(f, "{}", Message::new(Severity::Error, message))
    }
}

impl std::error::Error for UnexpectedToken {}
