//! Naming of instances through a per-type or shared [`Registry`].
//!
//! # Purpose
//! Some objects are best referred to by name: the species in a model, the places of a net, the
//! units of a simulation. A [`Registry`] keeps track of such instances and of their names, making
//! sure that a name refers to at most one instance at a time.
//!
//! # Method
//! Names are either assigned directly, or discovered from [`Bindings`]: a table of named
//! references that the program declares, much like named constants. Whenever a name is needed and
//! some instances are still unnamed, the registry scans its bindings and names every instance it
//! finds there. Instances created without a name are *avid*, meaning that the first binding found
//! for them wins, even against an instance already holding that name.
//!
//! Three optional [`Hooks`] customize a registry: one observes new instances, one may rewrite or
//! reject candidate names and one transforms names as they are read.
//!
//! # Example
//! ```
//! use std::rc::Rc;
//! use y_support::naming::Registry;
//!
//! let species = Registry::<&str>::new();
//! let water = species.instantiate("H2O");
//! species.bindings().bind("Chemistry", "Water", water.rc());
//!
//! assert_eq!(species.scan().unwrap(), 0);
//! assert_eq!(water.name().unwrap().unwrap(), "Water");
//! assert!(Rc::ptr_eq(&species.find("Water").unwrap(), water.rc()));
//! ```

mod bindings;
mod error;
mod hooks;
mod name;
mod registry;
mod tests;

pub use bindings::*;
pub use error::*;
pub use hooks::*;
pub use name::*;
pub use registry::*;
