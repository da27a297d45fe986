use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Mapping from graph node identities to a contiguous sequence of slots that
/// can be used for indexing dense auxiliary arrays in algorithms.
///
/// The order of slots follows the order of the iterator the map was
/// constructed from.
///
/// * memory used: _O(N)_
/// * slot to real mapping: _O(1)_
/// * real to slot mapping: _O(1)_ expected
#[derive(Debug, Clone)]
pub struct CompactIdMap<I> {
    ids: Vec<I>,
    slots: FxHashMap<I, usize>,
}

impl<I: Hash + Eq + Clone> CompactIdMap<I> {
    /// Constructs the map from the iterator of IDs. Duplicates are ignored.
    pub fn new<A>(iter: A) -> Self
    where
        A: IntoIterator<Item = I>,
    {
        let mut ids = Vec::new();
        let mut slots = FxHashMap::default();

        for id in iter {
            if !slots.contains_key(&id) {
                slots.insert(id.clone(), ids.len());
                ids.push(id);
            }
        }

        Self { ids, slots }
    }

    /// Returns the number of IDs in the map.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the map contains no IDs.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Maps given slot to the corresponding real ID in the original graph.
    pub fn to_real(&self, slot: usize) -> Option<&I> {
        self.ids.get(slot)
    }

    /// Maps given real ID from the original graph to its slot.
    pub fn to_virt(&self, id: &I) -> Option<usize> {
        self.slots.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &I> + '_ {
        self.ids.iter()
    }

    pub fn into_ids(self) -> Vec<I> {
        self.ids
    }
}
