use std::fmt::{self, Debug, Formatter};
use std::ops::Deref;
use std::rc::Rc;

use super::{Forgotten, Registry};
use crate::naming::{InstanceId, Name, NamingError, QueryError, SetNameError};

/// A registered value together with a handle to its [`Registry`], giving access to the naming
/// operations of a single instance.
///
/// Instance dereferences to the value. It holds a strong reference, the registry itself doesn't.
pub struct Instance<T: ?Sized + 'static> {
    instance: Rc<T>,
    registry: Registry<T>,
}

impl<T: ?Sized + 'static> Instance<T> {
    pub(crate) const fn new(instance: Rc<T>, registry: Registry<T>) -> Instance<T> {
        Instance {
            instance,
            registry,
        }
    }

    pub fn id(&self) -> InstanceId {
        InstanceId::of(&self.instance)
    }

    pub const fn rc(&self) -> &Rc<T> {
        &self.instance
    }

    pub fn into_rc(self) -> Rc<T> {
        self.instance
    }

    pub const fn registry(&self) -> &Registry<T> {
        &self.registry
    }

    /// See [`Registry::name_of`].
    pub fn name(&self) -> Result<Option<Name>, NamingError> {
        self.registry.name_of(&self.instance)
    }

    /// See [`Registry::set_name`].
    pub fn set_name(&self, name: &str) -> Result<(), SetNameError> {
        self.registry.set_name(&self.instance, name)
    }

    /// See [`Registry::steal_name`].
    pub fn steal_name(&self, name: &str) -> Result<(), SetNameError> {
        self.registry.steal_name(&self.instance, name)
    }

    pub fn is_named(&self) -> Result<bool, NamingError> {
        self.registry.is_named(&self.instance)
    }

    /// Removes this instance from its registry. The value itself is returned to the caller as part
    /// of the [`Forgotten`] entry.
    pub fn forget(self) -> Result<Forgotten<T>, QueryError> {
        self.registry.forget(&self.instance)
    }
}

impl<T: ?Sized + 'static> Deref for Instance<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.instance
    }
}

impl<T: ?Sized + 'static> Clone for Instance<T> {
    fn clone(&self) -> Self {
        Instance {
            instance: Rc::clone(&self.instance),
            registry: self.registry.clone(),
        }
    }
}

impl<T: ?Sized + Debug + 'static> Debug for Instance<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("id", &self.id())
            .field("registry", &self.registry.label())
            .field("value", &&*self.instance)
            .finish()
    }
}
