use std::cell::RefCell;
use std::fmt::{self, Debug, Formatter};
use std::rc::{Rc, Weak};

use indexmap::{IndexMap, IndexSet};
use tracing::trace;

use crate::naming::{InstanceId, Name};
use crate::util::fmt::DebugRaw;

/// Something a binding can point at. The trait erases the type of the target so that one set of
/// Bindings can hold values tracked by registries of different types.
pub(crate) trait Target {
    /// The identity of the target, or None if it can no longer be accessed.
    fn id(&self) -> Option<InstanceId>;
}

impl<U: ?Sized> Target for Rc<U> {
    fn id(&self) -> Option<InstanceId> {
        Some(InstanceId::of(self))
    }
}

impl<U: ?Sized> Target for Weak<U> {
    fn id(&self) -> Option<InstanceId> {
        (self.strong_count() > 0).then(|| InstanceId::of_weak(self))
    }
}

type Scope = IndexMap<Name, Box<dyn Target>>;

/// A table of named bindings, grouped by scope, which a [`Registry`](crate::naming::Registry)
/// scans to discover names for its instances.
///
/// Binding a value here is the equivalent of declaring a named constant for it: the binding
/// holds a strong reference, unless it was made with [`bind_weak`](Bindings::bind_weak). Scopes
/// and the bindings within them are kept in declaration order, which is the order scans visit
/// them in.
///
/// Bindings is a shared handle, cloning it yields another handle to the same table.
#[derive(Clone, Default)]
pub struct Bindings {
    scopes: Rc<RefCell<IndexMap<String, Scope>>>,
}

/// A single binding as seen by a scan.
pub(crate) struct Visit {
    pub(crate) scope: String,
    pub(crate) name: Name,
    pub(crate) target: Option<InstanceId>,
}

impl Bindings {
    pub fn new() -> Bindings {
        Bindings::default()
    }

    /// Returns a handle for declaring bindings within `scope`.
    pub fn scope<S: Into<String>>(&self, scope: S) -> ScopeHandle {
        ScopeHandle {
            bindings: self.clone(),
            scope: scope.into(),
        }
    }

    /// Binds `name` within `scope` to `target`, keeping it alive. Returns true if an existing
    /// binding was replaced.
    ///
    /// Binding names aren't validated here, a registry applies its own name format when it picks
    /// the binding up.
    pub fn bind<U: ?Sized + 'static>(&self, scope: &str, name: &str, target: &Rc<U>) -> bool {
        self.insert(scope, name, Box::new(Rc::clone(target)))
    }

    /// Binds `name` within `scope` to `target` without keeping it alive. Once the target is
    /// dropped, scans skip the binding.
    pub fn bind_weak<U: ?Sized + 'static>(&self, scope: &str, name: &str, target: &Rc<U>) -> bool {
        self.insert(scope, name, Box::new(Rc::downgrade(target)))
    }

    fn insert(&self, scope: &str, name: &str, target: Box<dyn Target>) -> bool {
        trace!(scope, name, "binding declared");
        self.scopes.borrow_mut()
            .entry(scope.into())
            .or_default()
            .insert(Name::from(name), target)
            .is_some()
    }

    /// Removes the binding `name` from `scope`, returning true if it existed.
    pub fn unbind(&self, scope: &str, name: &str) -> bool {
        let mut scopes = self.scopes.borrow_mut();
        match scopes.get_mut(scope) {
            Some(bindings) => bindings.shift_remove(name).is_some(),
            None => false,
        }
    }

    /// Removes `scope` and every binding in it.
    pub fn remove_scope(&self, scope: &str) -> bool {
        self.scopes.borrow_mut().shift_remove(scope).is_some()
    }

    /// Returns the identity of the live value bound to `name` within `scope`.
    pub fn lookup(&self, scope: &str, name: &str) -> Option<InstanceId> {
        self.scopes.borrow()
            .get(scope)?
            .get(name)?
            .id()
    }

    /// Returns the names of all scopes, in declaration order.
    pub fn scopes(&self) -> Vec<String> {
        self.scopes.borrow().keys().cloned().collect()
    }

    /// Returns the total number of bindings across all scopes, including stale ones.
    pub fn len(&self) -> usize {
        self.scopes.borrow().values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Captures every binding outside of the `skipped` scopes, in scan order. Working from a
    /// snapshot leaves hooks free to declare or remove bindings while a scan is running.
    pub(crate) fn snapshot(&self, skipped: &IndexSet<String>) -> Vec<Visit> {
        self.scopes.borrow()
            .iter()
            .filter(|(scope, _)| {
                let skip = skipped.contains(*scope);
                if skip {
                    trace!(scope = %scope, "skipping denylisted scope");
                }
                !skip
            })
            .flat_map(|(scope, bindings)| bindings.iter().map(move |(name, target)| Visit {
                scope: scope.clone(),
                name: name.clone(),
                target: target.id(),
            }))
            .collect()
    }
}

impl Debug for Bindings {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let scopes = self.scopes.borrow();
        f.debug_map()
            .entries(scopes.iter().map(|(scope, bindings)| (
                DebugRaw(scope.clone()),
                DebugRaw(format!("{:?}", bindings.iter()
                    .map(|(name, target)| DebugRaw(match target.id() {
                        Some(id) => format!("{name} => {id}"),
                        None => format!("{name} => <stale>"),
                    }))
                    .collect::<Vec<_>>()
                )),
            )))
            .finish()
    }
}

/// A [`Bindings`] handle fixed to one scope.
#[derive(Debug, Clone)]
pub struct ScopeHandle {
    bindings: Bindings,
    scope: String,
}

impl ScopeHandle {
    pub fn name(&self) -> &str {
        &self.scope
    }

    pub fn bind<U: ?Sized + 'static>(&self, name: &str, target: &Rc<U>) -> bool {
        self.bindings.bind(&self.scope, name, target)
    }

    pub fn bind_weak<U: ?Sized + 'static>(&self, name: &str, target: &Rc<U>) -> bool {
        self.bindings.bind_weak(&self.scope, name, target)
    }

    pub fn unbind(&self, name: &str) -> bool {
        self.bindings.unbind(&self.scope, name)
    }

    pub fn lookup(&self, name: &str) -> Option<InstanceId> {
        self.bindings.lookup(&self.scope, name)
    }
}
