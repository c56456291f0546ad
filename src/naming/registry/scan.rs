use tracing::{debug, trace};

use super::Registry;
use crate::naming::{NamingError, SetNameError};

impl<T: ?Sized + 'static> Registry<T> {
    /// Looks through the registry's [`Bindings`](crate::naming::Bindings) for names of unnamed
    /// and avid instances, returning the number of instances that are still unnamed afterwards.
    ///
    /// Scopes and their bindings are visited in declaration order, skipping the scopes excluded
    /// by the registry's configuration and bindings whose target has been dropped. When a binding
    /// points at an instance being looked for:
    /// - An avid instance loses its avidity and takes the name, evicting any current holder. The
    ///   evicted instance is looked for again in the remaining bindings.
    /// - Any other instance is named as if by [`set_name`](Registry::set_name).
    ///
    /// Bindings whose name is rejected by the `on_name_assign` hook or doesn't satisfy the name
    /// format are passed over.
    ///
    /// # Errors
    /// If a non-avid instance is bound to a name held by another instance, the scan stops with
    /// [`NamingError::NameTaken`]. Names assigned before that point are kept.
    pub fn scan(&self) -> Result<usize, NamingError> {
        let mut todo = self.store_mut().todo();
        if todo.is_empty() {
            return Ok(0);
        }

        trace!(registry = %self.label(), pending = todo.len(), "scanning bindings");

        for visit in self.bindings().snapshot(self.skipped()) {
            if todo.is_empty() {
                break;
            }

            let Some(id) = visit.target else {
                trace!(scope = %visit.scope, name = %visit.name, "skipping stale binding");
                continue;
            };

            if !todo.contains(&id) {
                continue;
            }

            let Some((instance, avid)) = self.live(id) else {
                todo.shift_remove(&id);
                continue;
            };

            if avid {
                self.store_mut().set_avid(id, false);
            }

            match self.assign(id, &instance, &visit.name, avid) {
                Ok(evicted) => {
                    trace!(scope = %visit.scope, name = %visit.name, instance = %id, avid, "bound");
                    todo.shift_remove(&id);
                    // Bindings later in the sweep may still name the evicted instance.
                    if let Some(evicted) = evicted {
                        todo.insert(evicted);
                    }
                },
                Err(SetNameError::NotFound(_)) => {
                    todo.shift_remove(&id);
                },
                Err(SetNameError::Naming(e)) if e.is_name_taken() => return Err(e),
                Err(SetNameError::Naming(e)) => {
                    debug!(scope = %visit.scope, name = %visit.name, error = %e, "binding passed over");
                    if avid {
                        self.store_mut().set_avid(id, true);
                    }
                },
            }
        }

        let remaining = todo.len();
        debug!(registry = %self.label(), remaining, "scan finished");
        Ok(remaining)
    }
}
