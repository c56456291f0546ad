use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use super::{Name, Rejection};

pub type InstantiateHook<T> = Box<dyn Fn(&Rc<T>)>;

pub type NameAssignHook<T> = Box<dyn Fn(&str, &Rc<T>, Option<&Name>) -> Result<String, Rejection>>;

pub type NameQueryHook = Box<dyn Fn(&Name) -> Name>;

/// The user extension points of a [`Registry`](super::Registry). Every hook is optional and
/// behaves as the identity when absent.
pub struct Hooks<T: ?Sized> {
    pub(crate) on_instantiate: Option<InstantiateHook<T>>,
    pub(crate) on_name_assign: Option<NameAssignHook<T>>,
    pub(crate) on_name_query: Option<NameQueryHook>,
}

impl<T: ?Sized> Hooks<T> {
    pub(crate) const fn is_empty(&self) -> bool {
        self.on_instantiate.is_none()
            && self.on_name_assign.is_none()
            && self.on_name_query.is_none()
    }

    pub(crate) fn instantiated(&self, instance: &Rc<T>) {
        if let Some(hook) = &self.on_instantiate {
            hook(instance);
        }
    }

    pub(crate) fn assign(
        &self,
        candidate: &str,
        instance: &Rc<T>,
        previous: Option<&Name>,
    ) -> Result<String, Rejection> {
        match &self.on_name_assign {
            Some(hook) => hook(candidate, instance, previous),
            None => Ok(candidate.into()),
        }
    }

    pub(crate) fn query(&self, stored: Name) -> Name {
        match &self.on_name_query {
            Some(hook) => hook(&stored),
            None => stored,
        }
    }
}

impl<T: ?Sized> Default for Hooks<T> {
    fn default() -> Self {
        Hooks {
            on_instantiate: None,
            on_name_assign: None,
            on_name_query: None,
        }
    }
}

impl<T: ?Sized> Debug for Hooks<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_instantiate", &self.on_instantiate.is_some())
            .field("on_name_assign", &self.on_name_assign.is_some())
            .field("on_name_query", &self.on_name_query.is_some())
            .finish()
    }
}
