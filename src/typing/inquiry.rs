use std::any::{self, Any};
use std::fmt::Debug;
use std::ops::RangeBounds;

use super::{ArgumentError, TypeError};

const DEFAULT_SUBJECT: &str = "value";

/// Starts an [`Inquiry`] into `value`.
pub fn inquire<V: ?Sized>(value: &V) -> Inquiry<'_, V> {
    Inquiry {
        value,
        subject: DEFAULT_SUBJECT.into(),
    }
}

/// A chain of runtime checks on a borrowed value.
///
/// Every check consumes the Inquiry and hands it back if the value complies, so checks compose
/// with `?`:
/// ```
/// use y_support::typing::inquire;
///
/// let speed = 12.5_f64;
/// let checked = inquire(&speed).named("speed").positive()?.in_range(0.0..=100.0)?.value();
/// assert_eq!(*checked, 12.5);
///
/// let error = inquire(&-3).named("count").non_negative().unwrap_err();
/// assert_eq!(error.to_string(), "count must be non-negative (-3 given)");
/// # Ok::<(), y_support::typing::ArgumentError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Inquiry<'a, V: ?Sized> {
    value: &'a V,
    subject: String,
}

impl<'a, V: ?Sized> Inquiry<'a, V> {
    /// Sets how the value is referred to in error messages. Defaults to `value`.
    pub fn named<S: Into<String>>(mut self, subject: S) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Ends the inquiry, returning the value.
    pub fn value(self) -> &'a V {
        self.value
    }
}

impl<'a, V: ?Sized + Debug> Inquiry<'a, V> {
    fn fail<R: Into<String>>(&self, requirement: R) -> ArgumentError {
        ArgumentError {
            subject: self.subject.clone(),
            requirement: requirement.into(),
            found: format!("{:?}", self.value),
        }
    }

    /// Checks that `check` holds for the value. The `requirement` completes the sentence
    /// "<subject> must ..." in the error message.
    pub fn comply<F>(self, requirement: &str, check: F) -> Result<Self, ArgumentError>
    where
        F: FnOnce(&V) -> bool,
    {
        if check(self.value) {
            Ok(self)
        } else {
            Err(self.fail(requirement))
        }
    }

    /// Checks that `check` does not hold for the value. The `description` completes the sentence
    /// "<subject> must not ...".
    pub fn refuse<F>(self, description: &str, check: F) -> Result<Self, ArgumentError>
    where
        F: FnOnce(&V) -> bool,
    {
        if check(self.value) {
            Err(self.fail(format!("not {description}")))
        } else {
            Ok(self)
        }
    }

    pub fn equal<U: ?Sized + Debug>(self, other: &U) -> Result<Self, ArgumentError>
    where
        V: PartialEq<U>,
    {
        if self.value == other {
            Ok(self)
        } else {
            Err(self.fail(format!("be equal to {other:?}")))
        }
    }

    pub fn not_equal<U: ?Sized + Debug>(self, other: &U) -> Result<Self, ArgumentError>
    where
        V: PartialEq<U>,
    {
        if self.value == other {
            Err(self.fail(format!("not be equal to {other:?}")))
        } else {
            Ok(self)
        }
    }

    /// Checks that the value equals one of `options`.
    pub fn one_of<U: Debug>(self, options: &[U]) -> Result<Self, ArgumentError>
    where
        V: PartialEq<U>,
    {
        if options.iter().any(|option| self.value == option) {
            Ok(self)
        } else {
            Err(self.fail(format!("be one of {options:?}")))
        }
    }
}

impl<'a, V: PartialOrd + Default + Debug> Inquiry<'a, V> {
    /// Checks that the value is greater than its type's default, i.e. zero for numbers.
    pub fn positive(self) -> Result<Self, ArgumentError> {
        if *self.value > V::default() {
            Ok(self)
        } else {
            Err(self.fail("be positive"))
        }
    }

    /// Checks that the value is not less than its type's default. NaN doesn't qualify.
    pub fn non_negative(self) -> Result<Self, ArgumentError> {
        if *self.value >= V::default() {
            Ok(self)
        } else {
            Err(self.fail("be non-negative"))
        }
    }
}

impl<'a, V: PartialOrd + Debug> Inquiry<'a, V> {
    pub fn in_range<R: RangeBounds<V> + Debug>(self, range: R) -> Result<Self, ArgumentError> {
        if range.contains(self.value) {
            Ok(self)
        } else {
            Err(self.fail(format!("be within {range:?}")))
        }
    }
}

impl<'a, V: AsRef<str> + Debug + ?Sized> Inquiry<'a, V> {
    /// Checks that the text contains something other than whitespace.
    pub fn present(self) -> Result<Self, ArgumentError> {
        if self.value.as_ref().trim().is_empty() {
            Err(self.fail("be present"))
        } else {
            Ok(self)
        }
    }

    /// Checks that the text is empty or consists of whitespace only.
    pub fn blank(self) -> Result<Self, ArgumentError> {
        if self.value.as_ref().trim().is_empty() {
            Ok(self)
        } else {
            Err(self.fail("be blank"))
        }
    }
}

impl<'a, E: Debug> Inquiry<'a, [E]> {
    pub fn not_empty(self) -> Result<Self, ArgumentError> {
        if self.value.is_empty() {
            Err(self.fail("not be empty"))
        } else {
            Ok(self)
        }
    }

    /// Checks `check` for every element, naming the first offending element in the error.
    pub fn each<F>(self, requirement: &str, check: F) -> Result<Self, ArgumentError>
    where
        F: Fn(&E) -> bool,
    {
        match self.value.iter().position(|element| !check(element)) {
            Some(index) => Err(ArgumentError {
                subject: format!("{}[{index}]", self.subject),
                requirement: requirement.into(),
                found: format!("{:?}", self.value[index]),
            }),
            None => Ok(self),
        }
    }
}

impl<'a> Inquiry<'a, dyn Any> {
    /// Checks that the value is a `U`, continuing the inquiry with the concrete value.
    pub fn kind_of<U: Any>(self) -> Result<Inquiry<'a, U>, TypeError> {
        match self.value.downcast_ref::<U>() {
            Some(value) => Ok(Inquiry {
                value,
                subject: self.subject,
            }),
            None => Err(TypeError {
                subject: self.subject,
                expected: any::type_name::<U>(),
            }),
        }
    }
}
