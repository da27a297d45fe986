//! Markers distinguishing directed and undirected graphs.
//!
//! Algorithms ask [`EdgeType::is_directed`] once when their configuration is
//! resolved and never ask about the graph kind again.

/// Orientation of an edge relative to the node whose neighbors are queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The edge leaves the node (successor relation).
    Outgoing,
    /// The edge enters the node (predecessor relation).
    Incoming,
}

impl Direction {
    /// Position of the direction in per-node `[outgoing, incoming]` storage.
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Direction::Outgoing => 0,
            Direction::Incoming => 1,
        }
    }
}

/// Edges are symmetric, direction is only an artifact of the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Undirected {}

/// Edges go from their source to their destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directed {}

pub trait EdgeType: sealed::Sealed + 'static {
    fn is_directed() -> bool;
}

impl EdgeType for Undirected {
    fn is_directed() -> bool {
        false
    }
}

impl EdgeType for Directed {
    fn is_directed() -> bool {
        true
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Undirected {}
    impl Sealed for super::Directed {}
}
