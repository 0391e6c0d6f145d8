//! Strongly typed, zero-cost identifier wrappers.
//!
//! `NodeId` and `SegmentId` are dense indices assigned by the graph builder
//! and are only meaningful for the graph that issued them.  `CrossingId` is
//! the external identifier carried by the source tables and survives graph
//! rebuilds and pruning.

use std::fmt;

/// Generate a typed dense-index wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of a crossing in a built `StreetGraph`.
    pub struct NodeId(u32);
}

typed_id! {
    /// Index of an undirected street segment in a built `StreetGraph`.
    pub struct SegmentId(u32);
}

/// External crossing identifier as published in the node table
/// (`GIP_OBJECTID` in the Vienna feed).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossingId(pub i64);

impl fmt::Display for CrossingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "crossing {}", self.0)
    }
}

impl From<i64> for CrossingId {
    #[inline]
    fn from(raw: i64) -> Self {
        CrossingId(raw)
    }
}
