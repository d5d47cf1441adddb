//! The shunting-yard converter reordering infix tokens into postfix order.

use crate::lexical::token::{Operator, Token};

use super::error::{
    MismatchedParentheses, OperatorInUnaryPosition, Parenthesis, ParseResult,
    UnaryMinusNotSupported,
};

/// Category of the most recently handled token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Previous {
    Start,
    Value,
    Operator,
    LeftParenthesis,
}

impl Previous {
    /// Whether an operator following this category would have no left operand.
    fn expects_operand(self) -> bool {
        matches!(self, Self::Start | Self::Operator | Self::LeftParenthesis)
    }
}

/// Working state of a single conversion.
#[derive(Debug)]
pub(super) struct ShuntingYard {
    output: Vec<Token>,
    operators: Vec<Token>,
    previous: Previous,
}

impl ShuntingYard {
    /// Creates a converter sized for `capacity` input tokens.
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            output: Vec::with_capacity(capacity),
            operators: Vec::with_capacity(capacity),
            previous: Previous::Start,
        }
    }

    /// Handles the next infix token.
    pub(super) fn handle_token(&mut self, token: Token) -> ParseResult<()> {
        match token {
            Token::Number(_) => {
                self.output.push(token);
                self.previous = Previous::Value;
            }
            Token::LeftParenthesis => {
                self.operators.push(token);
                self.previous = Previous::LeftParenthesis;
            }
            Token::RightParenthesis => {
                self.handle_right_parenthesis()?;
                self.previous = Previous::Value;
            }
            Token::Operator(operator) => {
                self.handle_operator(operator)?;
                self.previous = Previous::Operator;
            }
        }

        Ok(())
    }

    /// Moves operators to the output until the matching `(` is popped.
    fn handle_right_parenthesis(&mut self) -> ParseResult<()> {
        while let Some(top) = self.operators.pop() {
            if top == Token::LeftParenthesis {
                return Ok(());
            }

            self.output.push(top);
        }

        Err(MismatchedParentheses {
            unmatched: Parenthesis::Right,
        }
        .into())
    }

    /// Moves operators binding at least as tight to the output, then pushes `operator`.
    fn handle_operator(&mut self, operator: Operator) -> ParseResult<()> {
        if self.previous.expects_operand() {
            return Err(match operator {
                Operator::Subtract => UnaryMinusNotSupported.into(),
                operator => OperatorInUnaryPosition { operator }.into(),
            });
        }

        // ties pop as well, every operator is left-associative
        while let Some(&Token::Operator(top)) = self.operators.last() {
            if top.precedence() < operator.precedence() {
                break;
            }

            self.operators.pop();
            self.output.push(Token::Operator(top));
        }

        self.operators.push(Token::Operator(operator));

        Ok(())
    }

    /// Drains the remaining operators and returns the postfix tokens.
    pub(super) fn finish(mut self) -> ParseResult<Vec<Token>> {
        while let Some(top) = self.operators.pop() {
            match top {
                Token::LeftParenthesis => {
                    return Err(MismatchedParentheses {
                        unmatched: Parenthesis::Left,
                    }
                    .into())
                }
                Token::RightParenthesis => {
                    return Err(MismatchedParentheses {
                        unmatched: Parenthesis::Right,
                    }
                    .into())
                }
                Token::Operator(_) | Token::Number(_) => self.output.push(top),
            }
        }

        Ok(self.output)
    }
}
