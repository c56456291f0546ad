use std::cell::{Ref, RefCell, RefMut};
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use indexmap::IndexSet;
use tracing::debug;

use super::store::Store;
use super::builder::default_label;
use super::{Forgotten, Instance, InstanceOptions, Query, RegistryBuilder};
use crate::naming::{
    Bindings, Hooks, InstanceId, Name, NameFormat, NameTakenError, NamingError, NotFoundError,
    QueryError, RejectedNameError, SetNameError, Subject,
};
use crate::util::fmt::DebugRaw;

/// A namespace of instances and their unique names.
///
/// The registry keeps a weak reference to every instance it tracks, so being registered never
/// keeps an instance alive. Entries of dropped instances are purged, and their names released,
/// the next time the registry is used.
///
/// Instances are named explicitly with [`set_name`](Registry::set_name) and
/// [`steal_name`](Registry::steal_name), or discovered by a [`scan`](Registry::scan) over the
/// registry's [`Bindings`]. Queries for a name run a scan first whenever there are unnamed or
/// avid instances, so declaring a binding is enough to name an instance.
///
/// Registry is a shared handle. Clones refer to the same namespace, which is how several handles
/// (or, with `T = dyn Trait`, several concrete types) share one set of names.
///
/// # Avid Instances
/// An avid instance takes its name from the first binding a scan finds for it, evicting any
/// other instance currently holding that name. Instances created without a name are avid unless
/// requested otherwise through [`InstanceOptions::avid`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of instances in the Registry.
/// - `b`: The number of declared bindings.
///
/// | Method | Complexity |
/// |-|-|
/// | `register` | `O(n)`* |
/// | `set_name` | `O(n)`* |
/// | `name_of` | `O(n)`*, `O(n + b)`** |
/// | `find` | `O(n)`*, `O(n + b)`** |
/// | `scan` | `O(n + b)` |
///
/// \* Every operation starts by purging dropped instances, which visits each entry once.
///
/// \** When unnamed or avid instances exist, a scan is performed first. `find` only scans for
/// lookups by name.
pub struct Registry<T: ?Sized + 'static> {
    inner: Rc<Inner<T>>,
}

struct Inner<T: ?Sized + 'static> {
    label: String,
    store: RefCell<Store<T>>,
    format: NameFormat,
    bindings: Bindings,
    skipped: IndexSet<String>,
    hooks: Hooks<T>,
}

impl<T: ?Sized + 'static> Registry<T> {
    /// Creates a registry with the default configuration.
    pub fn new() -> Registry<T> {
        Registry::from_parts(
            default_label::<T>(),
            NameFormat::default(),
            Bindings::default(),
            IndexSet::new(),
            Hooks::default(),
        )
    }

    pub fn builder() -> RegistryBuilder<T> {
        RegistryBuilder::new()
    }

    pub(crate) fn from_parts(
        label: String,
        format: NameFormat,
        bindings: Bindings,
        skipped: IndexSet<String>,
        hooks: Hooks<T>,
    ) -> Registry<T> {
        Registry {
            inner: Rc::new(Inner {
                label,
                store: RefCell::new(Store::new()),
                format,
                bindings,
                skipped,
                hooks,
            }),
        }
    }

    pub fn label(&self) -> &str {
        &self.inner.label
    }

    pub fn name_format(&self) -> NameFormat {
        self.inner.format
    }

    /// Returns the bindings this registry scans.
    pub fn bindings(&self) -> &Bindings {
        &self.inner.bindings
    }

    /// Returns true if both handles refer to the same namespace.
    pub fn shares_namespace_with(&self, other: &Registry<T>) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn skipped(&self) -> &IndexSet<String> {
        &self.inner.skipped
    }

    pub(crate) fn store(&self) -> Ref<'_, Store<T>> {
        self.inner.store.borrow()
    }

    /// Borrows the store mutably, purging dropped instances first.
    pub(crate) fn store_mut(&self) -> RefMut<'_, Store<T>> {
        let mut store = self.inner.store.borrow_mut();
        let purged = store.purge();
        if purged > 0 {
            debug!(registry = %self.inner.label, purged, "released names of dropped instances");
        }
        store
    }

    pub(crate) fn not_found(&self, subject: Subject) -> NotFoundError {
        NotFoundError {
            subject,
            registry: self.inner.label.clone(),
        }
    }

    /// Returns the live instance `id` and its avid flag.
    pub(crate) fn live(&self, id: InstanceId) -> Option<(Rc<T>, bool)> {
        let store = self.store();
        let entry = store.get(id)?;
        Some((entry.instance.upgrade()?, entry.avid))
    }

    // Registry Store

    /// Adds `instance` without a name. Registering an instance twice has no effect. Returns true
    /// if the instance was newly added.
    ///
    /// Unlike the `instantiate` and `adopt` family, this doesn't run the `on_instantiate` hook and
    /// the instance isn't avid.
    pub fn register(&self, instance: &Rc<T>) -> bool {
        let added = self.store_mut().register(instance, false);
        if added {
            debug!(registry = %self.inner.label, instance = %InstanceId::of(instance), "registered");
        }
        added
    }

    /// Removes `instance` and its name, returning true if it was registered. Other references to
    /// the instance are unaffected.
    pub fn unregister(&self, instance: &Rc<T>) -> bool {
        let id = InstanceId::of(instance);
        let removed = self.store_mut().unregister(id);
        if let Some(entry) = &removed {
            debug!(registry = %self.inner.label, instance = %id, name = ?entry.name, "unregistered");
        }
        removed.is_some()
    }

    /// Returns true if `instance` is registered.
    pub fn contains(&self, instance: &Rc<T>) -> bool {
        self.store_mut().contains(InstanceId::of(instance))
    }

    /// Returns the number of live instances.
    pub fn len(&self) -> usize {
        self.store_mut().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns all live instances, in the order they were registered.
    pub fn instances(&self) -> Vec<Rc<T>> {
        self.store_mut().collect(|_| true)
    }

    /// Returns the instances that currently have no name.
    pub fn unnamed_instances(&self) -> Vec<Rc<T>> {
        self.store_mut().collect(|entry| entry.name.is_none())
    }

    /// Returns the instances that are still avid.
    pub fn avid_instances(&self) -> Vec<Rc<T>> {
        self.store_mut().collect(|entry| entry.avid)
    }

    /// Returns the names of all named instances in registration order, as exposed by the
    /// `on_name_query` hook.
    pub fn names(&self) -> Vec<Name> {
        let stored: Vec<Name> = self.store_mut()
            .iter()
            .filter_map(|(_, entry)| entry.name.clone())
            .collect();

        stored.into_iter().map(|name| self.inner.hooks.query(name)).collect()
    }

    // Instantiation

    fn admit(&self, instance: Rc<T>, avid: bool) -> Instance<T> {
        let id = InstanceId::of(&instance);
        self.store_mut().register(&instance, avid);
        debug!(registry = %self.inner.label, instance = %id, avid, "instantiated");

        self.inner.hooks.instantiated(&instance);
        Instance::new(instance, self.clone())
    }

    /// Registers an existing shared value as a new instance, running the `on_instantiate` hook.
    /// The instance is avid.
    pub fn adopt(&self, instance: Rc<T>) -> Instance<T> {
        self.admit(instance, true)
    }

    /// Registers an existing shared value as a new instance, running the `on_instantiate` hook and
    /// then applying the naming `options`.
    ///
    /// If naming fails the instance is unregistered again before the error is returned.
    pub fn adopt_with(
        &self,
        instance: Rc<T>,
        options: InstanceOptions,
    ) -> Result<Instance<T>, NamingError> {
        let instance = self.admit(instance, options.is_avid());

        if let Some(name) = &options.name {
            let result = self.assign(instance.id(), instance.rc(), name, options.steal);
            if let Err(error) = result {
                self.store_mut().unregister(instance.id());
                return match error {
                    SetNameError::Naming(e) => Err(e),
                    // A hook forgot the instance, which leaves nothing to undo.
                    SetNameError::NotFound(_) => Ok(instance),
                };
            }
        }

        Ok(instance)
    }

    // Naming Protocol

    /// Assigns `candidate` to `instance`, failing if another instance holds the name.
    ///
    /// The candidate is first passed through the `on_name_assign` hook and the result validated
    /// against the registry's [`NameFormat`]. Assigning an instance its current name does nothing.
    pub fn set_name(&self, instance: &Rc<T>, candidate: &str) -> Result<(), SetNameError> {
        self.assign(InstanceId::of(instance), instance, candidate, false)?;
        Ok(())
    }

    /// Assigns `candidate` to `instance`, evicting the current holder of the name if there is
    /// one. The evicted instance stays registered, without a name.
    pub fn steal_name(&self, instance: &Rc<T>, candidate: &str) -> Result<(), SetNameError> {
        self.assign(InstanceId::of(instance), instance, candidate, true)?;
        Ok(())
    }

    /// Runs the naming protocol, returning the instance the name was stolen from, if any.
    pub(crate) fn assign(
        &self,
        id: InstanceId,
        instance: &Rc<T>,
        candidate: &str,
        avid: bool,
    ) -> Result<Option<InstanceId>, SetNameError> {
        let previous = {
            let store = self.store_mut();
            let entry = store.get(id).ok_or_else(|| self.not_found(Subject::Instance(id)))?;
            entry.name.clone()
        };

        if previous.as_ref().is_some_and(|name| name == candidate) {
            return Ok(None);
        }

        let accepted = self.inner.hooks.assign(candidate, instance, previous.as_ref())
            .map_err(|rejection| NamingError::from(RejectedNameError {
                name: candidate.into(),
                instance: id,
                reason: rejection.reason,
            }))?;
        let name = self.inner.format.validate(&accepted).map_err(NamingError::from)?;

        let mut store = self.store_mut();
        // The hook may have forgotten the instance.
        if !store.contains(id) {
            return Err(self.not_found(Subject::Instance(id)).into());
        }

        let evicted = match store.holder(&name) {
            Some(holder) if holder == id => {
                store.set_avid(id, false);
                return Ok(None);
            },
            Some(holder) if !avid => {
                return Err(NamingError::from(NameTakenError {
                    name,
                    holder,
                    claimant: id,
                }).into());
            },
            Some(holder) => {
                store.unname(holder);
                debug!(
                    registry = %self.inner.label,
                    name = %name,
                    evicted = %holder,
                    instance = %id,
                    "name stolen from its holder"
                );
                Some(holder)
            },
            None => None,
        };

        store.bind(id, name.clone());
        store.set_avid(id, false);
        debug!(registry = %self.inner.label, instance = %id, name = %name, ?previous, "named");
        Ok(evicted)
    }

    /// Returns the name of `instance` as exposed by the `on_name_query` hook, or None if it has no
    /// name. If there are unnamed or avid instances, a scan is performed first.
    ///
    /// An instance that isn't registered (anymore) has no name.
    pub fn name_of(&self, instance: &Rc<T>) -> Result<Option<Name>, NamingError> {
        let id = InstanceId::of(instance);
        if !self.store_mut().contains(id) {
            return Ok(None);
        }

        self.scan()?;

        let stored = self.store().get(id).and_then(|entry| entry.name.clone());
        Ok(stored.map(|name| self.inner.hooks.query(name)))
    }

    pub fn is_named(&self, instance: &Rc<T>) -> Result<bool, NamingError> {
        Ok(self.name_of(instance)?.is_some())
    }

    /// Returns the instance selected by `query`. A lookup by name scans first if necessary, and
    /// is matched against the stored names, not the ones exposed by the `on_name_query` hook.
    pub fn find<'a, Q: Into<Query<'a, T>>>(&self, query: Q) -> Result<Rc<T>, QueryError> {
        let id = self.resolve(query.into())?;
        self.live(id)
            .map(|(instance, _)| instance)
            .ok_or_else(|| self.not_found(Subject::Instance(id)).into())
    }

    // Only lookups by name depend on bindings, so only they scan.
    fn resolve(&self, query: Query<'_, T>) -> Result<InstanceId, QueryError> {
        match query {
            Query::Name(name) => {
                self.scan()?;
                self.store_mut()
                    .holder(name)
                    .ok_or_else(|| self.not_found(Subject::Name(Name::from(name))).into())
            },
            Query::Instance(instance) => {
                let id = InstanceId::of(instance);
                if self.store_mut().contains(id) {
                    Ok(id)
                } else {
                    Err(self.not_found(Subject::Instance(id)).into())
                }
            },
        }
    }

    /// Removes the entry selected by `query`, returning what was removed. Forgetting an instance
    /// never scans, so it works even while a scan is failing.
    pub fn forget<'a, Q: Into<Query<'a, T>>>(&self, query: Q) -> Result<Forgotten<T>, QueryError> {
        let id = self.resolve(query.into())?;
        let entry = self.store_mut().unregister(id)
            .ok_or_else(|| self.not_found(Subject::Instance(id)))?;

        debug!(registry = %self.inner.label, instance = %id, name = ?entry.name, "forgotten");
        Ok(Forgotten {
            id,
            instance: entry.instance.upgrade(),
            name: entry.name,
            avid: entry.avid,
        })
    }

    /// Removes every entry that has no name, returning how many were removed.
    pub fn forget_unnamed(&self) -> usize {
        let mut store = self.store_mut();
        let unnamed: Vec<InstanceId> = store.iter()
            .filter(|(_, entry)| entry.name.is_none())
            .map(|(id, _)| id)
            .collect();

        for id in &unnamed {
            store.unregister(*id);
        }
        debug!(registry = %self.inner.label, count = unnamed.len(), "forgot unnamed instances");
        unnamed.len()
    }

    /// Removes every entry, returning how many were removed.
    pub fn forget_all(&self) -> usize {
        let count = self.store_mut().clear();
        debug!(registry = %self.inner.label, count, "forgot all instances");
        count
    }
}

impl<T: 'static> Registry<T> {
    /// Creates a new avid instance from `value`, running the `on_instantiate` hook.
    pub fn instantiate(&self, value: T) -> Instance<T> {
        self.adopt(Rc::new(value))
    }

    /// Creates a new instance from `value`, running the `on_instantiate` hook and then applying
    /// the naming `options`.
    pub fn instantiate_with(
        &self,
        value: T,
        options: InstanceOptions,
    ) -> Result<Instance<T>, NamingError> {
        self.adopt_with(Rc::new(value), options)
    }
}

impl<T: ?Sized + 'static> Clone for Registry<T> {
    fn clone(&self) -> Self {
        Registry {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized + 'static> Default for Registry<T> {
    fn default() -> Self {
        Registry::new()
    }
}

impl<T: ?Sized + 'static> Debug for Registry<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let store = self.store();
        let entries: Vec<DebugRaw> = store.iter()
            .map(|(id, entry)| DebugRaw(format!(
                "{id} => {}{}",
                entry.name.as_ref().map_or("-".into(), Name::to_string),
                if entry.avid { " (avid)" } else { "" },
            )))
            .collect();

        f.debug_struct("Registry")
            .field("label", &self.inner.label)
            .field("format", &self.inner.format)
            .field("entries", &entries)
            .field("skipped", &self.inner.skipped)
            .field("hooks", &self.inner.hooks)
            .finish()
    }
}
