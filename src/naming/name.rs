use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Deref;
use std::rc::Rc;

use super::InvalidNameError;

/// A name, as stored in a [`Registry`](super::Registry).
///
/// A Name itself is just a cheaply clonable string. Validation happens when a name is assigned
/// to an instance, using the [`NameFormat`] of the registry.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(Rc<str>);

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Name {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Name(Rc::from(value))
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Name(Rc::from(value))
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

/// The rule a candidate has to satisfy before it can be bound to an instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameFormat {
    /// The first character is an uppercase letter, followed by letters, digits or underscores.
    /// This mirrors the rules for constant identifiers and is the default.
    #[default]
    Constant,
    /// Any non-empty name without whitespace.
    Any,
    /// A user supplied predicate.
    Custom(fn(&str) -> bool),
}

impl NameFormat {
    /// Returns true if `name` satisfies this format.
    pub fn accepts(&self, name: &str) -> bool {
        match self {
            NameFormat::Constant => {
                let mut chars = name.chars();
                match chars.next() {
                    Some(first) if first.is_uppercase() => {
                        chars.all(|c| c.is_alphanumeric() || c == '_')
                    },
                    _ => false,
                }
            },
            NameFormat::Any => !name.is_empty() && !name.chars().any(char::is_whitespace),
            NameFormat::Custom(predicate) => predicate(name),
        }
    }

    pub(crate) fn validate(&self, name: &str) -> Result<Name, InvalidNameError> {
        if self.accepts(name) {
            Ok(Name::from(name))
        } else {
            Err(InvalidNameError {
                name: name.into(),
                format: *self,
            })
        }
    }

    pub(crate) const fn describe(&self) -> &'static str {
        match self {
            NameFormat::Constant => "an uppercase letter followed by letters, digits or '_'",
            NameFormat::Any => "a non-empty name without whitespace",
            NameFormat::Custom(_) => "the registry's custom name format",
        }
    }
}
