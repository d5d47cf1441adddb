//! Contains the [`TokenStream`] struct.

use std::fmt::{Debug, Display};

use derive_more::Deref;

use crate::{base::source::SourceIterator, util};

use super::{
    token::{Token, TokenizeError},
    Error,
};

/// Is an ordered list of [`Token`]s in the order they appear in the expression.
///
/// This struct is the final output of the lexical analysis phase and is meant to be used by the
/// next stage of the calculator.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, PartialEq, Default, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl Debug for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl Display for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&util::format_tokens(&self.tokens))
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl TokenStream {
    /// Tokenizes the given expression.
    ///
    /// This function calls [`Token::tokenize()`] repeatedly until the expression is exhausted.
    ///
    /// # Errors
    /// - The first [`Error`] encountered; no tokens are returned in that case.
    #[tracing::instrument(level = "debug", skip_all, fields(length = source.len()))]
    pub fn tokenize(source: &str) -> Result<Self, Error> {
        let mut tokens = Vec::new();
        let mut source_iterator = SourceIterator::new(source);

        loop {
            match Token::tokenize(&mut source_iterator) {
                Ok(token) => tokens.push(token),
                Err(TokenizeError::EndOfSourceCodeIteratorArgument) => break,
                Err(TokenizeError::LexicalError(err)) => return Err(err),
            }
        }

        tracing::trace!(count = tokens.len(), "Tokenized expression");

        Ok(Self { tokens })
    }

    /// Dissolves this struct into the list of tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> {
        self.tokens
    }
}
