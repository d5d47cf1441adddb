/// An error that occurred while evaluating an expression.
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum Error {
    #[error("Tokenizer error: {0}")]
    LexicalError(#[from] crate::lexical::Error),
    #[error("Shunting Yard error: {0}")]
    SyntaxError(#[from] crate::syntax::Error),
    #[error("RPN eval error: {0}")]
    EvaluateError(#[from] crate::evaluate::Error),
}

impl Error {
    /// Byte position in the expression that the error points at, if it has one.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::LexicalError(err) => Some(err.position()),
            Self::SyntaxError(_) | Self::EvaluateError(_) => None,
        }
    }
}

/// A specialized [`Result`] type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
