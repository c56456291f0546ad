use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use tracing::trace;

/// One call received by an [`InertRecorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall<A = String> {
    pub method: String,
    pub args: Vec<A>,
}

impl<A: Debug> Display for RecordedCall<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.method)?;
        for (index, arg) in self.args.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{arg:?}")?;
        }
        write!(f, ")")
    }
}

/// An object that does nothing but remember how it was created and which calls it received.
///
/// Recorders stand in for a real collaborator while it isn't available: the calls are logged in
/// order and can later be inspected, or replayed against the real thing with
/// [`replay`](InertRecorder::replay).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InertRecorder<A = String> {
    init_args: Vec<A>,
    calls: Vec<RecordedCall<A>>,
}

impl<A> InertRecorder<A> {
    pub fn new<I: IntoIterator<Item = A>>(init_args: I) -> InertRecorder<A> {
        InertRecorder {
            init_args: init_args.into_iter().collect(),
            calls: Vec::new(),
        }
    }

    /// Logs a call of `method` with `args`, returning the recorder so calls can be chained.
    pub fn record<I: IntoIterator<Item = A>>(&mut self, method: &str, args: I) -> &mut Self {
        let call = RecordedCall {
            method: method.into(),
            args: args.into_iter().collect(),
        };
        trace!(method, args = call.args.len(), "call recorded");
        self.calls.push(call);
        self
    }

    /// Returns the arguments the recorder was created with.
    pub fn init_args(&self) -> &[A] {
        &self.init_args
    }

    /// Returns every recorded call, oldest first.
    pub fn recorded(&self) -> &[RecordedCall<A>] {
        &self.calls
    }

    /// Returns the recorded calls of `method`, oldest first.
    pub fn calls_to<'a>(&'a self, method: &'a str) -> impl Iterator<Item = &'a RecordedCall<A>> {
        self.calls.iter().filter(move |call| call.method == method)
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Removes and returns every recorded call.
    pub fn take(&mut self) -> Vec<RecordedCall<A>> {
        mem::take(&mut self.calls)
    }

    /// Feeds every recorded call to `target` in order, stopping at the first error.
    pub fn replay<F, E>(&self, mut target: F) -> Result<(), E>
    where
        F: FnMut(&str, &[A]) -> Result<(), E>,
    {
        self.calls.iter().try_for_each(|call| target(&call.method, &call.args))
    }
}

impl<A> Default for InertRecorder<A> {
    fn default() -> Self {
        InertRecorder {
            init_args: Vec::new(),
            calls: Vec::new(),
        }
    }
}
