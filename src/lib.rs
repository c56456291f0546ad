//! This crate is a small collection of extensions for writing programs that talk about named
//! things.
//!
//! # Purpose
//! Models, simulations and configuration-heavy programs tend to create lots of objects that people
//! want to refer to by name: species, places, reactions, units. Doing the bookkeeping for that by
//! hand means a map from names to values in every corner of the program, each with its own rules
//! for collisions. The [`naming`] module does it once.
//!
//! Alongside it live a couple of helpers that keep coming up in the same kind of code:
//! - [`null`]: null objects and inert recorders, which stand in for values that are missing or
//!   not available yet.
//! - [`typing`]: runtime checks that produce readable errors, for requirements the type system
//!   can't express.
//!
//! # Method
//! Naming is built around [`Registry`](naming::Registry), which maps instances to unique names
//! while only holding weak references to them. Names can be assigned directly or discovered from
//! [`Bindings`](naming::Bindings), an explicitly declared table of named references. Everything
//! is single-threaded: registries are shared through [`Rc`](std::rc::Rc) and mutated through
//! [`RefCell`](std::cell::RefCell), so they are neither [`Send`] nor [`Sync`].
//!
//! # Error Handling
//! Errors are strongly typed: every failure is a struct implementing
//! [`Error`](std::error::Error), and each operation returns an enum of exactly the failures it can
//! produce. These enums convert into broader ones (ending at [`naming::Error`]) so callers that
//! don't care about the distinction can use `?` throughout.
//!
//! # Logging
//! Registry mutations are logged through [`tracing`] at the `debug` and `trace` levels. The crate
//! never installs a subscriber itself; the `demo` binary shows one way to do so.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod naming;
pub mod null;
pub mod typing;

pub(crate) mod util;
