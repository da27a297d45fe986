//! Hash-based set of node identities with value semantics.
//!
//! Cloning produces an independent set. Set algebra returns new sets or
//! modifies the receiver in place, never an alias of the operand.

use std::{fmt, hash::Hash};

use rustc_hash::FxHashSet;

#[derive(Clone)]
pub struct NodeSet<I> {
    inner: FxHashSet<I>,
}

impl<I: Hash + Eq + Clone> NodeSet<I> {
    pub fn new() -> Self {
        Self {
            inner: FxHashSet::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut inner = FxHashSet::default();
        inner.reserve(capacity);
        Self { inner }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn contains(&self, id: &I) -> bool {
        self.inner.contains(id)
    }

    pub fn insert(&mut self, id: I) -> bool {
        self.inner.insert(id)
    }

    pub fn remove(&mut self, id: &I) -> bool {
        self.inner.remove(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &I> + '_ {
        self.inner.iter()
    }

    /// Returns an arbitrary element.
    pub fn first(&self) -> Option<&I> {
        self.inner.iter().next()
    }

    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.union_with(other);
        result
    }

    pub fn intersection(&self, other: &Self) -> Self {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        small
            .iter()
            .filter(|id| large.contains(id))
            .cloned()
            .collect()
    }

    pub fn union_with(&mut self, other: &Self) {
        self.inner.extend(other.iter().cloned());
    }

    pub fn intersect_with(&mut self, other: &Self) {
        self.inner.retain(|id| other.contains(id));
    }

    /// Number of elements in the intersection, without materializing it.
    pub fn intersection_count(&self, other: &Self) -> usize {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        small.iter().filter(|id| large.contains(id)).count()
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        self.inner.is_subset(&other.inner)
    }

    pub fn into_sorted_vec(self) -> Vec<I>
    where
        I: Ord,
    {
        let mut vec = self.inner.into_iter().collect::<Vec<_>>();
        vec.sort_unstable();
        vec
    }
}

impl<I: Hash + Eq + Clone> Default for NodeSet<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq> PartialEq for NodeSet<I> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<I: Hash + Eq> Eq for NodeSet<I> {}

impl<I: fmt::Debug> fmt::Debug for NodeSet<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inner.iter()).finish()
    }
}

impl<I: Hash + Eq + Clone> FromIterator<I> for NodeSet<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<I: Hash + Eq + Clone> Extend<I> for NodeSet<I> {
    fn extend<T: IntoIterator<Item = I>>(&mut self, iter: T) {
        self.inner.extend(iter);
    }
}

impl<I> IntoIterator for NodeSet<I> {
    type Item = I;
    type IntoIter = std::collections::hash_set::IntoIter<I>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_is_independent() {
        let mut a = NodeSet::from_iter([1, 2, 3]);
        let b = a.clone();

        a.remove(&1);

        assert!(!a.contains(&1));
        assert!(b.contains(&1));
    }

    #[test]
    fn algebra() {
        let a = NodeSet::from_iter([1, 2, 3]);
        let b = NodeSet::from_iter([2, 3, 4]);

        assert_eq!(a.union(&b), NodeSet::from_iter([1, 2, 3, 4]));
        assert_eq!(a.intersection(&b), NodeSet::from_iter([2, 3]));
        assert_eq!(a.intersection_count(&b), 2);
        assert!(NodeSet::from_iter([2]).is_subset(&a));
    }

    #[test]
    fn in_place_algebra() {
        let mut a = NodeSet::from_iter([1, 2, 3]);
        a.intersect_with(&NodeSet::from_iter([3, 1, 9]));
        assert_eq!(a.clone().into_sorted_vec(), vec![1, 3]);

        a.union_with(&NodeSet::from_iter([7]));
        assert_eq!(a.into_sorted_vec(), vec![1, 3, 7]);
    }

    #[test]
    fn equality_ignores_order() {
        assert_eq!(NodeSet::from_iter([3, 1]), NodeSet::from_iter([1, 3]));
        assert_ne!(NodeSet::from_iter([1]), NodeSet::from_iter([1, 2]));
    }
}
