//! Objects that stand in for missing or not yet available values.
//!
//! [`NullObject`] answers every conversion with an empty result. [`InertRecorder`] accepts calls
//! from a fixed shape, a method name and its arguments, and keeps them in a log instead of acting
//! on them.

mod null_object;
mod recorder;

pub use null_object::*;
pub use recorder::*;
