//! Find [single source shortest paths] and their distances in a graph.
//!
//! See available parameters [here](ShortestPathTreeBuilder#implementations).
//!
//! The tree is computed by Dijkstra's algorithm using a priority queue with
//! decrease-key. All edge costs reachable from the source must be
//! non-negative, a negative cost aborts the run with
//! [`Error::NegativeCost`].
//!
//! [single source shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#Single-source_shortest_paths
//!
//! # Examples
//!
//! ```
//! use pathgraph::{
//!     algo::ShortestPathTree,
//!     core::{id::NodeId, GraphAdd},
//!     storage::AdjList,
//! };
//!
//! let mut graph = AdjList::new_undirected();
//!
//! let [prague, bratislava, vienna, munich, nuremberg, florence, rome] =
//!     [0, 1, 2, 3, 4, 5, 6].map(NodeId::from);
//!
//! for city in [prague, bratislava, vienna, munich, nuremberg, florence, rome] {
//!     graph.add_node(city);
//! }
//!
//! for (from, to, km) in [
//!     (prague, bratislava, 328u32),
//!     (prague, nuremberg, 297),
//!     (prague, vienna, 293),
//!     (bratislava, vienna, 79),
//!     (nuremberg, munich, 170),
//!     (vienna, munich, 402),
//!     (vienna, florence, 863),
//!     (munich, florence, 646),
//!     (florence, rome, 278),
//! ] {
//!     graph.add_edge(from, to, km);
//! }
//!
//! let tree = ShortestPathTree::on(&graph).run(rome).unwrap();
//! let (path, distance) = tree.path_to(&prague);
//!
//! assert_eq!(distance, 1391);
//! assert_eq!(path, vec![rome, florence, munich, nuremberg, prague]);
//! ```

use thiserror::Error;

use crate::{
    common::CompactIdMap,
    core::{GraphBase, Weight},
};

mod builder;
mod dijkstra;

pub use builder::ShortestPathTreeBuilder;

pub(crate) use dijkstra::dijkstra;

/// Shortest paths and their distances from a single source node.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct ShortestPathTree<W, G: GraphBase> {
    source: G::NodeId,
    nodes: CompactIdMap<G::NodeId>,
    dist: Vec<W>,
    pred: Vec<Option<usize>>,
}

impl<W, G> ShortestPathTree<W, G>
where
    G: GraphBase,
    W: Weight,
{
    pub(crate) fn empty(source: G::NodeId) -> Self {
        Self {
            source,
            nodes: CompactIdMap::new(None),
            dist: Vec::new(),
            pred: Vec::new(),
        }
    }

    /// Source node where the search was started.
    pub fn source(&self) -> &G::NodeId {
        &self.source
    }

    /// Returns the path distance between the source node and the given node.
    ///
    /// The distance is [infinite](crate::core::Weight::inf) if the node is
    /// not reachable from the source or is not in the graph.
    pub fn dist(&self, to: &G::NodeId) -> W {
        self.nodes
            .to_virt(to)
            .map(|slot| self.dist[slot].clone())
            .unwrap_or_else(W::inf)
    }

    /// Returns `true` if there is a path from the source to the node.
    pub fn is_reachable(&self, to: &G::NodeId) -> bool {
        self.nodes
            .to_virt(to)
            .is_some_and(|slot| self.is_reachable_slot(slot))
    }

    /// Returns the path from the source to the given node (both inclusive)
    /// and its distance.
    ///
    /// For unreachable nodes, the path is empty and the distance is
    /// infinite.
    pub fn path_to(&self, to: &G::NodeId) -> (Vec<G::NodeId>, W) {
        if !self.is_reachable(to) {
            return (Vec::new(), W::inf());
        }

        let mut path = vec![to.clone()];
        path.extend(self.reconstruct(to));
        path.reverse();

        (path, self.dist(to))
    }

    /// Returns an iterator over nodes on the path between the given node and
    /// the source node, in this order, excluding the given node.
    ///
    /// The iterator is empty for unreachable nodes and for the source.
    pub fn reconstruct(&self, to: &G::NodeId) -> PathReconstruction<'_, G> {
        PathReconstruction {
            curr: self.nodes.to_virt(to),
            nodes: &self.nodes,
            pred: &self.pred,
        }
    }

    /// Iterates over all nodes reachable from the source together with their
    /// distances.
    pub fn reachable(&self) -> impl Iterator<Item = (&G::NodeId, &W)> + '_ {
        (0..self.dist.len())
            .filter(|&slot| self.is_reachable_slot(slot))
            .filter_map(|slot| Some((self.nodes.to_real(slot)?, &self.dist[slot])))
    }

    fn is_reachable_slot(&self, slot: usize) -> bool {
        self.pred[slot].is_some() || self.nodes.to_real(slot) == Some(&self.source)
    }
}

pub struct PathReconstruction<'a, G: GraphBase> {
    curr: Option<usize>,
    nodes: &'a CompactIdMap<G::NodeId>,
    pred: &'a [Option<usize>],
}

impl<'a, G: GraphBase> Iterator for PathReconstruction<'a, G> {
    type Item = G::NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.pred.get(self.curr?).copied().flatten();
        self.curr = next;
        next.and_then(|slot| self.nodes.to_real(slot).cloned())
    }
}

/// The error encountered during a [`ShortestPathTree`] or
/// [`AllShortestPaths`](crate::algo::AllShortestPaths) run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An edge with negative cost encountered.
    #[error("edge with negative cost encountered")]
    NegativeCost,
}
