//! The `rpncalc` arithmetic expression calculator.
//!
//! An expression is evaluated in three stages: it is split into tokens, the tokens are reordered
//! into postfix order with the shunting-yard algorithm, and the postfix tokens are reduced on a
//! value stack.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod base;
pub mod evaluate;
pub mod lexical;
pub mod syntax;
pub mod util;

use getset::{CopyGetters, Getters};

use base::{Handler, Result};
use evaluate::Evaluator;
use lexical::{token::Token, token_stream::TokenStream};
use syntax::postfix::Postfix;

/// Converts the given expression to tokens.
///
/// # Errors
/// - If the expression contains a character or number literal that is not valid.
pub fn tokenize(source: &str, handler: &impl Handler<base::Error>) -> Result<TokenStream> {
    TokenStream::tokenize(source).map_err(|err| report(err, handler))
}

/// Reorders the given infix tokens into postfix order.
///
/// # Errors
/// - If the parentheses are not balanced.
/// - If an operator appears where an operand is expected.
pub fn to_postfix(tokens: &[Token], handler: &impl Handler<base::Error>) -> Result<Postfix> {
    Postfix::from_infix(tokens).map_err(|err| report(err, handler))
}

/// Computes the value of the given postfix tokens.
///
/// # Errors
/// - If there are no tokens.
/// - If the tokens do not reduce to exactly one value.
/// - If a division by zero occurs.
pub fn evaluate_postfix(postfix: &[Token], handler: &impl Handler<base::Error>) -> Result<f64> {
    Evaluator::evaluate(postfix).map_err(|err| report(err, handler))
}

/// Evaluates the given expression, running all three stages.
///
/// The error of the first failing stage is passed to `handler` and returned.
///
/// # Errors
/// - If tokenizing the expression fails.
/// - If converting the tokens to postfix order fails.
/// - If evaluating the postfix tokens fails.
#[tracing::instrument(level = "debug", skip(handler))]
pub fn evaluate(source: &str, handler: &impl Handler<base::Error>) -> Result<Evaluation> {
    let tokens = tokenize(source, handler)?;
    let postfix = to_postfix(&tokens, handler)?;
    let value = evaluate_postfix(&postfix, handler)?;

    Ok(Evaluation {
        tokens,
        postfix,
        value,
    })
}

/// Passes the stage error to the handler and returns it as a crate error.
fn report<E>(err: E, handler: &impl Handler<base::Error>) -> base::Error
where
    E: Into<base::Error>,
{
    let err = err.into();
    handler.receive(err.clone());
    err
}

/// The outputs of every stage of a successful evaluation.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct Evaluation {
    /// Get the tokens of the expression.
    #[get = "pub"]
    tokens: TokenStream,
    /// Get the tokens in postfix order.
    #[get = "pub"]
    postfix: Postfix,
    /// Get the value of the expression.
    #[get_copy = "pub"]
    value: f64,
}
