//! The evaluate module is responsible for reducing a postfix expression to its value.

mod error;
#[doc(inline)]
#[allow(clippy::module_name_repetitions)]
pub use error::{
    DivisionByZero, EmptyExpression, Error, EvaluateResult, LeftoverStackItems, StackUnderflow,
    UnexpectedToken,
};

mod evaluator;
#[doc(inline)]
pub use evaluator::Evaluator;
