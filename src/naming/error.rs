use std::fmt::{self, Formatter};

use derive_more::{Display, Error, From, IsVariant};

use super::{InstanceId, Name, NameFormat};

#[derive(Debug, Display, Clone, Error)]
#[display("invalid name {name:?}, expected {}", format.describe())]
pub struct InvalidNameError {
    pub name: String,
    pub format: NameFormat,
}

#[derive(Debug, Display, Clone, Error)]
#[display("name {name} is already taken by {holder}, unable to assign it to {claimant}")]
pub struct NameTakenError {
    pub name: Name,
    pub holder: InstanceId,
    pub claimant: InstanceId,
}

#[derive(Debug, Display, Clone, Error)]
#[display("name {name:?} rejected for {instance}: {reason}")]
pub struct RejectedNameError {
    pub name: String,
    pub instance: InstanceId,
    pub reason: String,
}

/// Returned by an `on_name_assign` hook to refuse a candidate name.
#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("{reason}")]
pub struct Rejection {
    pub reason: String,
}

impl Rejection {
    pub fn new<R: Into<String>>(reason: R) -> Rejection {
        Rejection { reason: reason.into() }
    }
}

#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum NamingError {
    InvalidName(InvalidNameError),
    NameTaken(NameTakenError),
    Rejected(RejectedNameError),
}

/// What a failed lookup was looking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    Instance(InstanceId),
    Name(Name),
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Instance(id) => write!(f, "instance {id}"),
            Subject::Name(name) => write!(f, "name {name}"),
        }
    }
}

#[derive(Debug, Display, Clone, Error)]
#[display("{subject} is not registered in {registry}")]
pub struct NotFoundError {
    pub subject: Subject,
    pub registry: String,
}

#[derive(Debug, Display, Clone, Error)]
#[display("hook {hook} has already been set")]
pub struct HookAlreadySetError {
    pub hook: &'static str,
}

#[derive(Debug, Display, Clone, Error)]
#[display("option {option} conflicts with a shared namespace, which keeps its own configuration")]
pub struct SharedNamespaceError {
    pub option: &'static str,
}

#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum ConfigurationError {
    HookAlreadySet(HookAlreadySetError),
    SharedNamespace(SharedNamespaceError),
}

#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum SetNameError {
    Naming(NamingError),
    NotFound(NotFoundError),
}

#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum QueryError {
    Naming(NamingError),
    NotFound(NotFoundError),
}

impl From<SetNameError> for QueryError {
    fn from(value: SetNameError) -> Self {
        match value {
            SetNameError::Naming(e) => e.into(),
            SetNameError::NotFound(e) => e.into(),
        }
    }
}

/// Any error produced by this module, for callers that don't need to tell operations apart.
#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum Error {
    Naming(NamingError),
    NotFound(NotFoundError),
    Configuration(ConfigurationError),
}

impl From<SetNameError> for Error {
    fn from(value: SetNameError) -> Self {
        match value {
            SetNameError::Naming(e) => e.into(),
            SetNameError::NotFound(e) => e.into(),
        }
    }
}

impl From<QueryError> for Error {
    fn from(value: QueryError) -> Self {
        match value {
            QueryError::Naming(e) => e.into(),
            QueryError::NotFound(e) => e.into(),
        }
    }
}
