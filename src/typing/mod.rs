//! Runtime assertions that read like sentences.
//!
//! An [`Inquiry`] borrows a value and checks it against requirements which can't be expressed in
//! the type system: that a number is positive, that some text isn't blank, that a dynamically
//! typed value is of a particular type. Failures are reported as an [`ArgumentError`] or
//! [`TypeError`] whose message names the value and the requirement it broke, e.g.
//! `speed must be positive (-1.0 given)`.

mod error;
mod inquiry;
mod tests;

pub use error::*;
pub use inquiry::*;
