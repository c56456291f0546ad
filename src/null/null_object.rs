use std::fmt::{self, Display, Formatter};

/// A stand-in for a missing value which answers every conversion with an empty result.
///
/// A NullObject may carry a signature telling null objects of different origins apart, so code
/// that receives one can check that it is the null object it expected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NullObject {
    signature: Option<String>,
}

impl NullObject {
    pub const fn new() -> NullObject {
        NullObject {
            signature: None,
        }
    }

    pub fn with_signature<S: Into<String>>(signature: S) -> NullObject {
        NullObject {
            signature: Some(signature.into()),
        }
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// Returns true if this null object carries `signature`. Passing None matches any null
    /// object.
    pub fn is_null_object(&self, signature: Option<&str>) -> bool {
        match signature {
            Some(signature) => self.signature.as_deref() == Some(signature),
            None => true,
        }
    }

    pub const fn to_vec<T>(&self) -> Vec<T> {
        Vec::new()
    }

    pub const fn to_f64(&self) -> f64 {
        0.0
    }

    pub const fn to_i64(&self) -> i64 {
        0
    }

    /// A description for debugging output, e.g. `NullObject(missing species)`.
    pub fn inspect(&self) -> String {
        match &self.signature {
            Some(signature) => format!("NullObject({signature})"),
            None => "NullObject".into(),
        }
    }
}

/// Displays as an empty string.
impl Display for NullObject {
    fn fmt(&self, _: &mut Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}
