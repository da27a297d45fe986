//! Traits and types used for identifying nodes and edges in graphs.
//!
//! All types that are supposed to be used as node/edge identifiers must
//! implement [`IdType`] trait. The identity is the sole join key across all
//! auxiliary structures of the algorithms, so it must be stable for the
//! lifetime of a graph.
//!
//! The default ID types are [`NodeId`] and [`EdgeId`], both backed by `u64`.

use std::{fmt, hash::Hash};

/// A unique identification of a node or edge in a graph.
///
/// Every ID is representable by an integer. Algorithms use [`as_bits`] for
/// deterministic ordering (e.g., when reporting components sorted by
/// identity) and never assume that the integers form a contiguous range.
///
/// [`as_bits`]: IdType::as_bits
pub trait IdType: Clone + Ord + Hash + fmt::Debug {
    /// Converts an ID into the corresponding `u64`.
    fn as_bits(&self) -> u64;

    /// Converts an `u64` into the corresponding ID.
    fn from_bits(bits: u64) -> Self;
}

/// The default representation of a node identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u64);

/// The default representation of an edge identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub u64);

macro_rules! impl_int_id {
    ($id_ty:ident) => {
        impl IdType for $id_ty {
            fn as_bits(&self) -> u64 {
                self.0
            }

            fn from_bits(bits: u64) -> Self {
                Self(bits)
            }
        }

        impl From<u64> for $id_ty {
            fn from(bits: u64) -> Self {
                Self(bits)
            }
        }

        impl From<$id_ty> for u64 {
            fn from(id: $id_ty) -> Self {
                id.0
            }
        }

        impl fmt::Display for $id_ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

impl_int_id!(NodeId);
impl_int_id!(EdgeId);

impl IdType for u64 {
    fn as_bits(&self) -> u64 {
        *self
    }

    fn from_bits(bits: u64) -> Self {
        bits
    }
}

impl IdType for u32 {
    fn as_bits(&self) -> u64 {
        *self as u64
    }

    fn from_bits(bits: u64) -> Self {
        bits as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_conversion() {
        assert_eq!(NodeId::from(42).as_bits(), 42);
        assert_eq!(EdgeId::from_bits(7), EdgeId(7));
        assert_eq!(u64::from(NodeId(3)), 3);
    }

    #[test]
    fn ordering_follows_bits() {
        let mut ids = vec![NodeId(5), NodeId(1), NodeId(3)];
        ids.sort();
        assert_eq!(ids, vec![NodeId(1), NodeId(3), NodeId(5)]);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(12).to_string(), "12");
    }
}
