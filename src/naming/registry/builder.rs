use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use indexmap::IndexSet;

use super::Registry;
use crate::naming::{
    Bindings, ConfigurationError, HookAlreadySetError, Hooks, Name, NameFormat, Rejection,
    SharedNamespaceError,
};

/// A builder for configuring a [`Registry`], available via [`Registry::builder`].
///
/// Every option has a logical default: the registry is labelled after `T`, uses
/// [`NameFormat::Constant`], owns a fresh [`Bindings`] table and has no hooks. Joining an
/// existing registry with [`namespace`](RegistryBuilder::namespace) shares that registry's store
/// and configuration, so it can't be combined with any other option.
pub struct RegistryBuilder<T: ?Sized + 'static> {
    label: Option<String>,
    namespace: Option<Registry<T>>,
    format: Option<NameFormat>,
    bindings: Option<Bindings>,
    skipped: IndexSet<String>,
    hooks: Hooks<T>,
    error: Option<ConfigurationError>,
}

impl<T: ?Sized + 'static> RegistryBuilder<T> {
    pub fn new() -> RegistryBuilder<T> {
        RegistryBuilder {
            label: None,
            namespace: None,
            format: None,
            bindings: None,
            skipped: IndexSet::new(),
            hooks: Hooks::default(),
            error: None,
        }
    }

    /// Sets the label used in logs and error messages.
    pub fn label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Shares the store of `namespace` rather than creating a new one.
    pub fn namespace(mut self, namespace: &Registry<T>) -> Self {
        self.namespace = Some(namespace.clone());
        self
    }

    pub fn name_format(mut self, format: NameFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Scans `bindings` instead of a table owned by the registry.
    pub fn bindings(mut self, bindings: &Bindings) -> Self {
        self.bindings = Some(bindings.clone());
        self
    }

    /// Excludes `scope` from every scan.
    pub fn skip_scope<S: Into<String>>(mut self, scope: S) -> Self {
        self.skipped.insert(scope.into());
        self
    }

    pub fn on_instantiate<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Rc<T>) + 'static,
    {
        if self.hooks.on_instantiate.is_some() {
            self.fail(HookAlreadySetError { hook: "on_instantiate" });
        }
        self.hooks.on_instantiate = Some(Box::new(hook));
        self
    }

    /// Sets the hook every candidate name passes through before it is validated. The hook
    /// receives the candidate, the instance and its previous name, and returns the name to assign
    /// or a [`Rejection`].
    pub fn on_name_assign<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, &Rc<T>, Option<&Name>) -> Result<String, Rejection> + 'static,
    {
        if self.hooks.on_name_assign.is_some() {
            self.fail(HookAlreadySetError { hook: "on_name_assign" });
        }
        self.hooks.on_name_assign = Some(Box::new(hook));
        self
    }

    /// Sets the transformation applied to stored names whenever they are read.
    pub fn on_name_query<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Name) -> Name + 'static,
    {
        if self.hooks.on_name_query.is_some() {
            self.fail(HookAlreadySetError { hook: "on_name_query" });
        }
        self.hooks.on_name_query = Some(Box::new(hook));
        self
    }

    // Only the first error is reported.
    fn fail<E: Into<ConfigurationError>>(&mut self, error: E) {
        self.error.get_or_insert(error.into());
    }

    pub fn build(self) -> Result<Registry<T>, ConfigurationError> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let Some(namespace) = self.namespace else {
            let label = self.label.unwrap_or_else(default_label::<T>);
            return Ok(Registry::from_parts(
                label,
                self.format.unwrap_or_default(),
                self.bindings.unwrap_or_default(),
                self.skipped,
                self.hooks,
            ));
        };

        let conflict = if self.label.is_some() {
            Some("label")
        } else if self.format.is_some() {
            Some("name_format")
        } else if self.bindings.is_some() {
            Some("bindings")
        } else if !self.skipped.is_empty() {
            Some("skip_scope")
        } else if !self.hooks.is_empty() {
            Some("hooks")
        } else {
            None
        };

        match conflict {
            Some(option) => Err(SharedNamespaceError { option }.into()),
            None => Ok(namespace),
        }
    }
}

impl<T: ?Sized + 'static> Default for RegistryBuilder<T> {
    fn default() -> Self {
        RegistryBuilder::new()
    }
}

impl<T: ?Sized + 'static> Debug for RegistryBuilder<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("label", &self.label)
            .field("namespace", &self.namespace.as_ref().map(Registry::label))
            .field("format", &self.format)
            .field("bindings", &self.bindings)
            .field("skipped", &self.skipped)
            .field("hooks", &self.hooks)
            .field("error", &self.error)
            .finish()
    }
}

/// The type name of `T` without its module path, e.g. `Animal` for `my_crate::zoo::Animal`.
/// Tuples, arrays and slices keep their full name.
pub(crate) fn default_label<T: ?Sized>() -> String {
    let name = std::any::type_name::<T>();
    // Generic arguments and element types may contain paths of their own.
    let end = name.find(['<', '(', '[']).unwrap_or(name.len());
    match name[..end].rfind("::") {
        Some(index) => name[index + 2..].into(),
        None => name.into(),
    }
}
