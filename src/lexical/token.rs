//! Contains the [`Token`] enum and its related types.

use std::fmt::Display;

use enum_as_inner::EnumAsInner;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::{base::source::SourceIterator, util};

use super::{
    error::{ExpectedDigitAfterDecimalPoint, InvalidCharacter, InvalidNumberLiteral},
    Error,
};

/// Is an enumeration representing the binary operators of an expression.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Is an error that is returned when a character cannot be converted into an [`Operator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
#[error("`{0}` is not an operator.")]
pub struct OperatorParseError(pub char);

impl TryFrom<char> for Operator {
    type Error = OperatorParseError;

    fn try_from(character: char) -> Result<Self, Self::Error> {
        Self::iter()
            .find(|operator| operator.as_char() == character)
            .ok_or(OperatorParseError(character))
    }
}

impl Operator {
    /// Gets the symbol of the operator.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Binding strength of the operator. Higher binds tighter.
    #[must_use]
    pub fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }

    /// Computes `lhs <operator> rhs`.
    ///
    /// Division by zero is not checked here and follows IEEE 754.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Is an enumeration containing all kinds of tokens of an arithmetic expression.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, EnumAsInner)]
#[allow(missing_docs)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    LeftParenthesis,
    RightParenthesis,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => f.write_str(&util::format_number(*value)),
            Self::Operator(operator) => write!(f, "{operator}"),
            Self::LeftParenthesis => f.write_str("("),
            Self::RightParenthesis => f.write_str(")"),
        }
    }
}

impl From<f64> for Token {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Operator> for Token {
    fn from(operator: Operator) -> Self {
        Self::Operator(operator)
    }
}

/// Is an error that can occur when invoking the [`Token::tokenize`] method.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[allow(missing_docs)]
pub enum TokenizeError {
    #[error(transparent)]
    LexicalError(#[from] Error),

    #[error("the iterator argument is at the end of the expression.")]
    EndOfSourceCodeIteratorArgument,
}

impl Token {
    /// Whether the character separates tokens without being one.
    fn is_whitespace(character: char) -> bool {
        matches!(character, ' ' | '\t' | '\n' | '\r')
    }

    /// Handles a sequence of digits with an optional fractional part.
    fn handle_numeric_literal(iter: &mut SourceIterator, start: usize) -> Result<Self, Error> {
        // integer part, the first digit was already consumed
        iter.walk_while(|character| character.is_ascii_digit());

        if let Some((_, '.')) = iter.peek() {
            iter.next();

            let fraction_start = iter.offset();
            iter.walk_while(|character| character.is_ascii_digit());

            if iter.offset() == fraction_start {
                return Err(ExpectedDigitAfterDecimalPoint { position: start }.into());
            }
        }

        let literal = iter.slice_from(start);

        literal
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Self::Number)
            .ok_or_else(|| {
                InvalidNumberLiteral {
                    literal: literal.to_string(),
                    position: start,
                }
                .into()
            })
    }

    /// Lexes the expression from the given iterator.
    ///
    /// Whitespace in front of the token is skipped. After the token is made, the iterator is left
    /// at the next character that is not part of the token.
    ///
    /// # Errors
    /// - [`TokenizeError::EndOfSourceCodeIteratorArgument`] - Only whitespace is left in the
    ///   expression.
    /// - [`TokenizeError::LexicalError`] - The next token is malformed.
    pub fn tokenize(iter: &mut SourceIterator) -> Result<Self, TokenizeError> {
        iter.walk_while(Self::is_whitespace);

        let (start, character) = iter
            .next()
            .ok_or(TokenizeError::EndOfSourceCodeIteratorArgument)?;

        match character {
            '(' => Ok(Self::LeftParenthesis),
            ')' => Ok(Self::RightParenthesis),
            '0'..='9' => Ok(Self::handle_numeric_literal(iter, start)?),
            _ => Operator::try_from(character).map(Self::Operator).map_err(|_| {
                TokenizeError::LexicalError(
                    InvalidCharacter {
                        character,
                        position: start,
                    }
                    .into(),
                )
            }),
        }
    }
}
