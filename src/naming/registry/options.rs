use std::rc::Rc;

use super::Instance;
use crate::naming::{InstanceId, Name};

/// Naming options applied when an instance is created, mirroring the keyword options of a
/// constructor: an optional `name`, whether that name may be taken from another instance, and
/// whether an unnamed instance is avid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstanceOptions {
    pub(crate) name: Option<String>,
    pub(crate) steal: bool,
    pub(crate) avid: Option<bool>,
}

impl InstanceOptions {
    pub fn new() -> InstanceOptions {
        InstanceOptions::default()
    }

    /// Names the new instance, failing if the name is taken.
    pub fn named<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self.steal = false;
        self
    }

    /// Names the new instance, evicting any current holder of the name.
    pub fn stealing<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self.steal = true;
        self
    }

    /// Sets whether an instance created without a name is avid. Defaults to true.
    pub const fn avid(mut self, avid: bool) -> Self {
        self.avid = Some(avid);
        self
    }

    pub(crate) fn is_avid(&self) -> bool {
        self.name.is_none() && self.avid.unwrap_or(true)
    }
}

/// Selects an entry of a registry, either by one of its names or by the instance itself.
pub enum Query<'a, T: ?Sized> {
    Name(&'a str),
    Instance(&'a Rc<T>),
}

impl<T: ?Sized> Clone for Query<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Query<'_, T> {}

impl<'a, T: ?Sized> From<&'a str> for Query<'a, T> {
    fn from(value: &'a str) -> Self {
        Query::Name(value)
    }
}

impl<'a, T: ?Sized> From<&'a String> for Query<'a, T> {
    fn from(value: &'a String) -> Self {
        Query::Name(value)
    }
}

impl<'a, T: ?Sized> From<&'a Name> for Query<'a, T> {
    fn from(value: &'a Name) -> Self {
        Query::Name(value.as_str())
    }
}

impl<'a, T: ?Sized> From<&'a Rc<T>> for Query<'a, T> {
    fn from(value: &'a Rc<T>) -> Self {
        Query::Instance(value)
    }
}

impl<'a, T: ?Sized + 'static> From<&'a Instance<T>> for Query<'a, T> {
    fn from(value: &'a Instance<T>) -> Self {
        Query::Instance(value.rc())
    }
}

/// An entry removed from a registry by [`forget`](super::Registry::forget).
#[derive(Debug)]
pub struct Forgotten<T: ?Sized> {
    pub id: InstanceId,
    pub instance: Option<Rc<T>>,
    pub name: Option<Name>,
    pub avid: bool,
}
