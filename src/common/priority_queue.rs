//! Binary heap with decrease-key.
//!
//! Unlike [`BinaryHeap`](std::collections::BinaryHeap), the queue tracks the
//! position of every key so that the priority of an already queued key can be
//! lowered in place. A key is in the queue at most once.

use std::hash::Hash;

use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct PriorityQueue<K, P> {
    heap: Vec<(K, P)>,
    position: FxHashMap<K, usize>,
}

impl<K, P> PriorityQueue<K, P>
where
    K: Hash + Eq + Clone,
    P: Ord,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut position = FxHashMap::default();
        position.reserve(capacity);

        Self {
            heap: Vec::with_capacity(capacity),
            position,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.position.contains_key(key)
    }

    pub fn priority(&self, key: &K) -> Option<&P> {
        self.position.get(key).map(|&i| &self.heap[i].1)
    }

    /// Inserts a key that is not queued yet.
    ///
    /// # Panics
    ///
    /// Panics if the key is already in the queue.
    pub fn push(&mut self, key: K, priority: P) {
        assert!(!self.contains(&key), "key is already queued");

        let i = self.heap.len();
        self.position.insert(key.clone(), i);
        self.heap.push((key, priority));
        self.sift_up(i);
    }

    /// Removes the key with minimum priority.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty. Callers track emptiness via
    /// [`len`](PriorityQueue::len).
    pub fn pop(&mut self) -> (K, P) {
        assert!(!self.heap.is_empty(), "pop from an empty priority queue");

        let last = self.heap.len() - 1;
        self.swap(0, last);

        let (key, priority) = match self.heap.pop() {
            Some(entry) => entry,
            None => unreachable!(),
        };
        self.position.remove(&key);

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        (key, priority)
    }

    /// Lowers the priority of a queued key. Returns `true` if the new priority
    /// was lower and the queue was updated.
    ///
    /// # Panics
    ///
    /// Panics if the key is not in the queue.
    pub fn decrease(&mut self, key: &K, priority: P) -> bool {
        let i = match self.position.get(key) {
            Some(&i) => i,
            None => panic!("decreasing priority of a key that is not queued"),
        };

        if priority < self.heap[i].1 {
            self.heap[i].1 = priority;
            self.sift_up(i);
            true
        } else {
            false
        }
    }

    /// Pushes the key if it is not queued, or decreases its priority
    /// otherwise.
    pub fn push_or_decrease(&mut self, key: K, priority: P) -> bool {
        if self.contains(&key) {
            self.decrease(&key, priority)
        } else {
            self.push(key, priority);
            true
        }
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[i].1 >= self.heap[parent].1 {
                break;
            }

            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();

        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;

            if left < len && self.heap[left].1 < self.heap[smallest].1 {
                smallest = left;
            }

            if right < len && self.heap[right].1 < self.heap[smallest].1 {
                smallest = right;
            }

            if smallest == i {
                break;
            }

            self.swap(i, smallest);
            i = smallest;
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }

        self.heap.swap(i, j);
        self.position.insert(self.heap[i].0.clone(), i);
        self.position.insert(self.heap[j].0.clone(), j);
    }
}

impl<K, P> Default for PriorityQueue<K, P>
where
    K: Hash + Eq + Clone,
    P: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn pop_in_priority_order() {
        let mut queue = PriorityQueue::new();

        queue.push('a', 5);
        queue.push('b', 1);
        queue.push('c', 3);

        assert_eq!(queue.pop(), ('b', 1));
        assert_eq!(queue.pop(), ('c', 3));
        assert_eq!(queue.pop(), ('a', 5));
        assert!(queue.is_empty());
    }

    #[test]
    fn decrease_reorders() {
        let mut queue = PriorityQueue::new();

        queue.push('a', 5);
        queue.push('b', 4);
        queue.push('c', 3);

        assert!(queue.decrease(&'a', 1));
        assert_eq!(queue.priority(&'a'), Some(&1));
        assert_eq!(queue.pop(), ('a', 1));
    }

    #[test]
    fn decrease_with_higher_priority_is_noop() {
        let mut queue = PriorityQueue::new();

        queue.push('a', 2);
        queue.push('b', 3);

        assert!(!queue.decrease(&'a', 10));
        assert_eq!(queue.pop(), ('a', 2));
    }

    #[test]
    fn push_or_decrease() {
        let mut queue = PriorityQueue::new();

        assert!(queue.push_or_decrease('a', 4));
        assert!(queue.push_or_decrease('a', 2));
        assert!(!queue.push_or_decrease('a', 3));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop(), ('a', 2));
    }

    #[test]
    #[should_panic(expected = "pop from an empty priority queue")]
    fn pop_empty() {
        let mut queue = PriorityQueue::<u32, u32>::new();
        queue.pop();
    }

    #[test]
    #[should_panic(expected = "not queued")]
    fn decrease_missing() {
        let mut queue = PriorityQueue::<u32, u32>::new();
        queue.push(1, 1);
        queue.decrease(&2, 0);
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_pops_sorted(priorities in proptest::collection::vec(0u32..1000, 0..64), decreases in proptest::collection::vec((0usize..64, 0u32..1000), 0..32)) {
            let mut queue = PriorityQueue::new();
            let mut expected = priorities.clone();

            for (key, &priority) in priorities.iter().enumerate() {
                queue.push(key, priority);
            }

            for (key, priority) in decreases {
                if key < expected.len() && priority < expected[key] {
                    expected[key] = priority;
                    prop_assert!(queue.decrease(&key, priority));
                }
            }

            let mut popped = Vec::new();
            while !queue.is_empty() {
                let (key, priority) = queue.pop();
                prop_assert_eq!(expected[key], priority);
                popped.push(priority);
            }

            expected.sort_unstable();
            prop_assert_eq!(popped, expected);
        }
    }
}
