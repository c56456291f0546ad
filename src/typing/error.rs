use derive_more::{Display, Error, From, IsVariant};

/// A value didn't satisfy a requirement.
#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("{subject} must {requirement} ({found} given)")]
pub struct ArgumentError {
    pub subject: String,
    pub requirement: String,
    pub found: String,
}

/// A dynamically typed value turned out to be of the wrong type.
#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("{subject} must be of type {expected}")]
pub struct TypeError {
    pub subject: String,
    pub expected: &'static str,
}

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum InquiryError {
    Argument(ArgumentError),
    Type(TypeError),
}
