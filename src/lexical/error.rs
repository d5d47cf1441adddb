use std::fmt::Display;

use crate::base::log::{Message, Severity};

/// Represents an error that occurred during the lexical analysis of an expression.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidCharacter(#[from] InvalidCharacter),
    #[error(transparent)]
    ExpectedDigitAfterDecimalPoint(#[from] ExpectedDigitAfterDecimalPoint),
    #[error(transparent)]
    InvalidNumberLiteral(#[from] InvalidNumberLiteral),
}

impl Error {
    /// Byte position in the expression where the error was detected.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter(err) => err.position,
            Self::ExpectedDigitAfterDecimalPoint(err) => err.position,
            Self::InvalidNumberLiteral(err) => err.position,
        }
    }
}

/// Expression contains a character that does not start any token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub struct InvalidCharacter {
    /// The offending character.
    pub character: char,

    /// Byte position of the character.
    pub position: usize,
}

impl Display for InvalidCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!(
            "invalid character {:?} at position {}",
            self.character, self.position
        );
        write!(f, "{}", Message::new(Severity::Error, message))
    }
}

/// A number literal has a decimal point that is not followed by a digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub struct ExpectedDigitAfterDecimalPoint {
    /// Byte position where the number literal starts.
    pub position: usize,
}

impl Display for ExpectedDigitAfterDecimalPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!(
            "expected digit after the decimal point of the number starting at position {}",
            self.position
        );
        write!(f, "{}", Message::new(Severity::Error, message))
    }
}

/// A number literal could not be converted into a finite floating-point value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub struct InvalidNumberLiteral {
    /// The text of the literal.
    pub literal: String,

    /// Byte position where the number literal starts.
    pub position: usize,
}

impl Display for InvalidNumberLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!(
            "invalid number literal `{}` at position {}",
            self.literal, self.position
        );
        write!(f, "{}", Message::new(Severity::Error, message))
    }
}
