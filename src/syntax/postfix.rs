//! Contains the [`Postfix`] struct.

use std::fmt::{Debug, Display};

use derive_more::Deref;

use crate::{lexical::token::Token, util};

use super::{error::ParseResult, shunting_yard::ShuntingYard};

/// Is a list of [`Token`]s in postfix (reverse polish) order.
///
/// A [`Postfix`] created by [`Postfix::from_infix`] contains only numbers and operators.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, PartialEq, Default, Deref)]
pub struct Postfix {
    #[deref]
    tokens: Vec<Token>,
}

impl Debug for Postfix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl Display for Postfix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&util::format_postfix(&self.tokens))
    }
}

impl From<Vec<Token>> for Postfix {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl Postfix {
    /// Reorders infix tokens into postfix order using the shunting-yard algorithm.
    ///
    /// `+ -` bind weaker than `* /` and all four operators are left-associative. Parentheses
    /// are consumed and do not appear in the output.
    ///
    /// # Errors
    /// - [`super::Error::MismatchedParentheses`] - A `)` has no opening partner or a `(` is never
    ///   closed.
    /// - [`super::Error::UnaryMinusNotSupported`] - A `-` appears where an operand is expected.
    /// - [`super::Error::OperatorInUnaryPosition`] - Any other operator appears where an operand
    ///   is expected.
    #[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
    pub fn from_infix(tokens: &[Token]) -> ParseResult<Self> {
        let mut shunting_yard = ShuntingYard::with_capacity(tokens.len());

        for token in tokens {
            shunting_yard.handle_token(*token)?;
        }

        let tokens = shunting_yard.finish()?;

        tracing::trace!(count = tokens.len(), "Converted expression to postfix");

        Ok(Self { tokens })
    }

    /// Dissolves this struct into the list of tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> {
        self.tokens
    }
}
