//! A module containing [`Registry`] and associated types.
//!
//! [`RegistryBuilder`] configures a registry, [`Instance`] wraps a registered value with its
//! registry, and [`InstanceOptions`], [`Query`] and [`Forgotten`] are the arguments and results
//! of individual operations.
//!
//! [`Registry`] is also re-exported under the parent module.

mod builder;
mod instance;
mod options;
mod registry;
mod scan;
mod store;

pub use builder::*;
pub use instance::*;
pub use options::*;
pub use registry::*;
pub use store::InstanceId;
