use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::rc::{Rc, Weak};

use indexmap::{IndexMap, IndexSet};
use tracing::trace;

use crate::naming::Name;

/// The identity of a registered instance: the address of its shared allocation.
///
/// A registry keeps a [`Weak`] to each instance it tracks, so the allocation (and with it the
/// address) can't be reused for another value while the InstanceId is in use.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(usize);

impl InstanceId {
    /// Returns the identity of the value behind `instance`.
    pub fn of<T: ?Sized>(instance: &Rc<T>) -> InstanceId {
        InstanceId(Rc::as_ptr(instance).cast::<()>() as usize)
    }

    pub(crate) fn of_weak<T: ?Sized>(instance: &Weak<T>) -> InstanceId {
        InstanceId(Weak::as_ptr(instance).cast::<()>() as usize)
    }
}

impl Display for InstanceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#<0x{:x}>", self.0)
    }
}

impl Debug for InstanceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

pub(crate) struct Entry<T: ?Sized> {
    pub(crate) instance: Weak<T>,
    pub(crate) name: Option<Name>,
    pub(crate) avid: bool,
}

impl<T: ?Sized> Entry<T> {
    fn is_live(&self) -> bool {
        self.instance.strong_count() > 0
    }
}

/// The instance <-> name mapping behind a registry. The Store knows nothing about hooks or name
/// formats, it only keeps names unique and entries in insertion order.
pub(crate) struct Store<T: ?Sized> {
    entries: IndexMap<InstanceId, Entry<T>>,
    names: HashMap<Name, InstanceId>,
}

impl<T: ?Sized> Store<T> {
    pub(crate) fn new() -> Store<T> {
        Store {
            entries: IndexMap::new(),
            names: HashMap::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Drops the entries of instances that no longer have any strong references, releasing their
    /// names. Returns the number of entries removed.
    pub(crate) fn purge(&mut self) -> usize {
        let before = self.entries.len();
        let names = &mut self.names;

        self.entries.retain(|id, entry| {
            if entry.is_live() {
                return true;
            }

            if let Some(name) = &entry.name {
                names.remove(name);
            }
            trace!(instance = %id, name = ?entry.name, "purged dropped instance");
            false
        });

        before - self.entries.len()
    }

    /// Adds `instance` without a name. Returns false if it was already present, in which case the
    /// existing entry is left untouched.
    pub(crate) fn register(&mut self, instance: &Rc<T>, avid: bool) -> bool {
        let id = InstanceId::of(instance);
        if self.entries.contains_key(&id) {
            return false;
        }

        self.entries.insert(id, Entry {
            instance: Rc::downgrade(instance),
            name: None,
            avid,
        });
        true
    }

    pub(crate) fn unregister(&mut self, id: InstanceId) -> Option<Entry<T>> {
        let entry = self.entries.shift_remove(&id)?;
        if let Some(name) = &entry.name {
            self.names.remove(name);
        }
        Some(entry)
    }

    pub(crate) fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.names.clear();
        count
    }

    pub(crate) fn get(&self, id: InstanceId) -> Option<&Entry<T>> {
        self.entries.get(&id)
    }

    pub(crate) fn contains(&self, id: InstanceId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Returns the instance currently holding `name`.
    pub(crate) fn holder(&self, name: &str) -> Option<InstanceId> {
        self.names.get(name).copied()
    }

    /// Binds `name` to the instance `id`, returning its previous name. The caller must make sure
    /// that `name` is free.
    pub(crate) fn bind(&mut self, id: InstanceId, name: Name) -> Option<Name> {
        debug_assert!(self.holder(&name).is_none_or(|holder| holder == id));

        let entry = self.entries.get_mut(&id)?;
        let previous = entry.name.replace(name.clone());
        if let Some(previous) = &previous {
            self.names.remove(previous);
        }
        self.names.insert(name, id);
        previous
    }

    /// Removes the name of `id`, leaving the instance registered.
    pub(crate) fn unname(&mut self, id: InstanceId) -> Option<Name> {
        let name = self.entries.get_mut(&id)?.name.take()?;
        self.names.remove(&name);
        Some(name)
    }

    pub(crate) fn set_avid(&mut self, id: InstanceId, avid: bool) {
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.avid = avid;
        }
    }

    /// The identities a scan has to look for: every unnamed or avid instance.
    pub(crate) fn todo(&self) -> IndexSet<InstanceId> {
        self.entries.iter()
            .filter(|(_, entry)| entry.is_live() && (entry.name.is_none() || entry.avid))
            .map(|(id, _)| *id)
            .collect()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (InstanceId, &Entry<T>)> {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }

    /// Upgrades the instances of all entries matching `filter`, in insertion order.
    pub(crate) fn collect<F>(&self, filter: F) -> Vec<Rc<T>>
    where
        F: Fn(&Entry<T>) -> bool,
    {
        self.entries.values()
            .filter(|entry| filter(entry))
            .filter_map(|entry| entry.instance.upgrade())
            .collect()
    }
}
