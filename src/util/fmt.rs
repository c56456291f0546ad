use std::fmt::{self, Debug, Formatter};

/// Debug formats as the contained string verbatim, without the quotes and escapes a [`String`]
/// would get. Used to print registry entries and bindings as `Name => #<0x..>`.
pub(crate) struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
