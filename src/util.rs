//! Utility functions for rendering tokens and numbers back to text.

use itertools::Itertools as _;

use crate::lexical::token::Token;

/// Formats a number the way it is shown to the user.
///
/// Integral values are printed without a fractional part, everything else uses the shortest
/// decimal representation that parses back to the same value.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // also covers negative zero
        "0".to_string()
    } else if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Formats tokens separated by single spaces.
#[must_use]
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens.iter().join(" ")
}

/// Formats postfix tokens separated by single spaces, leaving out parentheses.
#[must_use]
pub fn format_postfix(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter(|token| token.is_number() || token.is_operator())
        .join(" ")
}
