//! Stack machine reducing a postfix expression to a single number.

use crate::lexical::token::{Operator, Token};

use super::error::{
    DivisionByZero, EmptyExpression, EvaluateResult, LeftoverStackItems, StackUnderflow,
    UnexpectedToken,
};

/// An evaluator for postfix expressions.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    stack: Vec<f64>,
}

impl Evaluator {
    /// Evaluates the given postfix tokens.
    ///
    /// # Errors
    /// - [`super::Error::EmptyExpression`] If there are no tokens.
    /// - [`super::Error::StackUnderflow`] If an operator has fewer than two operands.
    /// - [`super::Error::DivisionByZero`] If the right operand of a division is zero.
    /// - [`super::Error::LeftoverStackItems`] If more than one value remains at the end.
    /// - [`super::Error::UnexpectedToken`] If the tokens contain a parenthesis.
    #[tracing::instrument(level = "debug", skip_all, fields(tokens = postfix.len()))]
    pub fn evaluate(postfix: &[Token]) -> EvaluateResult<f64> {
        if postfix.is_empty() {
            return Err(EmptyExpression.into());
        }

        let mut evaluator = Self {
            stack: Vec::with_capacity(postfix.len()),
        };

        for token in postfix {
            evaluator.handle_token(*token)?;
        }

        let value = evaluator.finish()?;

        tracing::trace!(%value, "Evaluated postfix expression");

        Ok(value)
    }

    fn handle_token(&mut self, token: Token) -> EvaluateResult<()> {
        match token {
            Token::Number(value) => self.stack.push(value),
            Token::Operator(operator) => {
                let value = self.apply(operator)?;
                self.stack.push(value);
            }
            Token::LeftParenthesis | Token::RightParenthesis => {
                return Err(UnexpectedToken { token }.into());
            }
        }

        Ok(())
    }

    /// Pops the right and then the left operand and applies `operator` to them.
    fn apply(&mut self, operator: Operator) -> EvaluateResult<f64> {
        let (Some(rhs), Some(lhs)) = (self.stack.pop(), self.stack.pop()) else {
            return Err(StackUnderflow { operator }.into());
        };

        if operator == Operator::Divide && rhs == 0.0 {
            return Err(DivisionByZero.into());
        }

        tracing::trace!(%lhs, %operator, %rhs, "Applying operator");

        Ok(operator.apply(lhs, rhs))
    }

    /// Returns the single value left on the stack.
    fn finish(self) -> EvaluateResult<f64> {
        if self.stack.len() == 1 {
            Ok(self.stack[0])
        } else {
            Err(LeftoverStackItems { stack: self.stack }.into())
        }
    }
}
