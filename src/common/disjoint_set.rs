//! Union-find over node identities with path compression and union by rank.

use std::hash::Hash;

use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    index: FxHashMap<T, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl<T> DisjointSet<T>
where
    T: Hash + Eq + Clone,
{
    /// Creates a singleton set for every element.
    pub fn new<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut index = FxHashMap::default();
        for element in elements {
            let next = index.len();
            index.entry(element).or_insert(next);
        }

        let len = index.len();
        Self {
            index,
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative slot of the set containing the element.
    ///
    /// # Panics
    ///
    /// Panics if the element was not given in [`new`](DisjointSet::new).
    pub fn find(&mut self, element: &T) -> usize {
        let slot = self.slot(element);
        self.find_slot(slot)
    }

    /// Merges the sets of the two elements. Returns `false` if they were
    /// already in the same set.
    pub fn union(&mut self, a: &T, b: &T) -> bool {
        let a = self.find(a);
        let b = self.find(b);

        if a == b {
            return false;
        }

        match self.rank[a].cmp(&self.rank[b]) {
            std::cmp::Ordering::Less => self.parent[a] = b,
            std::cmp::Ordering::Greater => self.parent[b] = a,
            std::cmp::Ordering::Equal => {
                self.parent[b] = a;
                self.rank[a] += 1;
            }
        }

        true
    }

    pub fn same_set(&mut self, a: &T, b: &T) -> bool {
        self.find(a) == self.find(b)
    }

    fn slot(&self, element: &T) -> usize {
        match self.index.get(element) {
            Some(&slot) => slot,
            None => panic!("element is not in the disjoint set"),
        }
    }

    fn find_slot(&mut self, slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Path compression.
        let mut current = slot;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }
}
