//! This module contains the infix-to-postfix converter of the calculator.

pub mod error;
pub mod postfix;
mod shunting_yard;

#[doc(inline)]
pub use error::Error;
