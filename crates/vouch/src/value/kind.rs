//! Runtime shape classification for [`Value`](super::Value).
//!
//! Every rule on a [`Chain`](crate::Chain) dispatches on the [`Kind`] that was
//! computed when the chain was built, so the set of kinds is closed and the
//! matches over it are exhaustive.

use std::fmt;

/// Coarse shape of a [`Value`](super::Value).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Kind {
    /// Absent value.
    Nil,
    /// `true` / `false`.
    Bool,
    /// Signed integer family.
    Int,
    /// Unsigned integer family.
    Uint,
    /// Floating point family.
    Float,
    /// Complex number.
    Complex,
    /// UTF-8 text.
    String,
    /// Fixed-size sequence.
    Array,
    /// Growable sequence.
    Slice,
    /// Key/value collection.
    Map,
    /// Reference to another value.
    Pointer,
    /// Message queue snapshot.
    Channel,
    /// Anything the rules cannot look inside.
    Other,
}

impl Kind {
    /// Lowercase name used in logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float => "float",
            Self::Complex => "complex",
            Self::String => "string",
            Self::Array => "array",
            Self::Slice => "slice",
            Self::Map => "map",
            Self::Pointer => "pointer",
            Self::Channel => "channel",
            Self::Other => "other",
        }
    }

    /// Integer, unsigned or float. Complex numbers are not ordered and so
    /// are not numeric for comparison rules.
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int | Self::Uint | Self::Float)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
