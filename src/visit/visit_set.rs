use std::{collections::HashSet, hash::BuildHasher};

use fixedbitset::FixedBitSet;

use crate::core::id::IdType;

/// Set of nodes already visited by a traversal.
pub trait VisitSet<I> {
    /// Marks the node as visited. Returns `false` if it already was.
    fn visit(&mut self, index: I) -> bool;
    fn is_visited(&self, index: &I) -> bool;
    fn visited_count(&self) -> usize;
    fn reset_visited(&mut self);
}

impl<I: IdType, S: BuildHasher> VisitSet<I> for HashSet<I, S> {
    fn visit(&mut self, index: I) -> bool {
        self.insert(index)
    }

    fn is_visited(&self, index: &I) -> bool {
        self.contains(index)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}

// Indexed by dense slots, see `CompactIdMap`.
impl VisitSet<usize> for FixedBitSet {
    fn visit(&mut self, index: usize) -> bool {
        if self.len() <= index {
            self.grow(index + 1);
        }
        !self.put(index)
    }

    fn is_visited(&self, index: &usize) -> bool {
        self.contains(*index)
    }

    fn visited_count(&self) -> usize {
        self.count_ones(..)
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}
