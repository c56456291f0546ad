//! A module containing [`Bindings`], the explicitly declared name table that registries scan in
//! place of a language level constant lookup, and [`ScopeHandle`] for declaring bindings within
//! a single scope.

mod bindings;
mod tests;

pub use bindings::{Bindings, ScopeHandle};
