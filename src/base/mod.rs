//! The base module contains the functionality shared by every stage of the calculator.

pub mod source;

mod error;
#[doc(inline)]
pub use error::{Error, Result};

mod diagnostic;
pub use diagnostic::{Handler, PrintHandler, SilentHandler, VoidHandler};

pub mod log;
