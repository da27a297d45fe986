//! Find shortest paths between all pairs of nodes, including all co-equal
//! shortest paths.
//!
//! The single-source relaxation of Dijkstra's algorithm is run from every
//! node. Besides the predecessor that first achieved the minimal distance,
//! every other predecessor achieving the same distance is recorded, which
//! yields a directed acyclic graph of all shortest paths per source (as long
//! as there are no zero-cost cycles).
//!
//! Distances are stored in a dense |V|×|V| matrix.
//!
//! # Examples
//!
//! ```
//! use pathgraph::{
//!     algo::AllShortestPaths,
//!     core::{id::NodeId, GraphAdd},
//!     storage::AdjList,
//! };
//!
//! let mut graph = AdjList::new_undirected();
//!
//! let [a, b, c, d] = [0, 1, 2, 3].map(NodeId::from);
//! for node in [a, b, c, d] {
//!     graph.add_node(node);
//! }
//!
//! // Two paths of equal length from a to d.
//! graph.add_edge(a, b, ());
//! graph.add_edge(a, c, ());
//! graph.add_edge(b, d, ());
//! graph.add_edge(c, d, ());
//!
//! let paths = AllShortestPaths::<u32, _>::on(&graph)
//!     .uniform()
//!     .run()
//!     .unwrap();
//!
//! let (_, dist, unique) = paths.between(&a, &d);
//! assert_eq!(dist, 2);
//! assert!(!unique);
//!
//! let (all, _) = paths.all_between(&a, &d);
//! assert_eq!(all, vec![vec![a, b, d], vec![a, c, d]]);
//! ```

use std::marker::PhantomData;

use fixedbitset::FixedBitSet;
use tracing::{debug, instrument};

use crate::{
    common::{matrix, CompactIdMap, PriorityQueue},
    core::{
        base::EdgeRef,
        cost::{ExplicitCost, GetCost, GraphCost, Uniform, Zero},
        GraphBase, Neighbors, NodeList, Weight,
    },
    visit::VisitSet,
};

use super::{setup::Setup, shortest_paths::Error};

/// Shortest paths and their distances between all pairs of nodes.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct AllShortestPaths<W, G: GraphBase> {
    nodes: CompactIdMap<G::NodeId>,
    dist: Vec<W>,
    // Co-equal predecessors for every (source, target) pair. The first one is
    // the predecessor that achieved the minimal distance first.
    pred: Vec<Vec<usize>>,
}

impl<W, G> AllShortestPaths<W, G>
where
    G: GraphBase,
    W: Weight,
{
    /// Returns the distance of the shortest path from `from` to `to`, or
    /// infinity if there is no path.
    pub fn dist(&self, from: &G::NodeId, to: &G::NodeId) -> W {
        match self.slots(from, to) {
            Some((i, j)) => self.dist[self.index(i, j)].clone(),
            None => W::inf(),
        }
    }

    /// Returns a shortest path from `from` to `to`, its distance and whether
    /// the path is the only shortest path.
    ///
    /// If there is no path, the returned path is empty and the distance is
    /// infinite.
    pub fn between(&self, from: &G::NodeId, to: &G::NodeId) -> (Vec<G::NodeId>, W, bool) {
        let Some((i, j)) = self.slots(from, to) else {
            return (Vec::new(), W::inf(), false);
        };

        if !self.is_reachable(i, j) {
            return (Vec::new(), W::inf(), false);
        }

        let mut unique = true;
        let mut path = vec![j];
        let mut curr = j;

        while curr != i {
            let preds = &self.pred[self.index(i, curr)];
            unique &= preds.len() == 1;
            curr = preds[0];
            path.push(curr);
        }

        (self.to_real_path(path), self.dist[self.index(i, j)].clone(), unique)
    }

    /// Returns all shortest paths from `from` to `to` in lexicographic order
    /// and their distance.
    ///
    /// Only simple paths are returned, even in the presence of zero-cost
    /// cycles.
    pub fn all_between(&self, from: &G::NodeId, to: &G::NodeId) -> (Vec<Vec<G::NodeId>>, W) {
        let Some((i, j)) = self.slots(from, to) else {
            return (Vec::new(), W::inf());
        };

        if !self.is_reachable(i, j) {
            return (Vec::new(), W::inf());
        }

        let mut paths = Vec::new();
        let mut stack = vec![vec![j]];

        while let Some(partial) = stack.pop() {
            let Some(&last) = partial.last() else {
                continue;
            };

            if last == i {
                paths.push(self.to_real_path(partial));
                continue;
            }

            for &pred in &self.pred[self.index(i, last)] {
                if !partial.contains(&pred) {
                    let mut next = partial.clone();
                    next.push(pred);
                    stack.push(next);
                }
            }
        }

        paths.sort();
        (paths, self.dist[self.index(i, j)].clone())
    }

    /// Nodes of the graph in the order used for indexing.
    pub fn nodes(&self) -> impl Iterator<Item = &G::NodeId> + '_ {
        self.nodes.iter()
    }

    fn slots(&self, from: &G::NodeId, to: &G::NodeId) -> Option<(usize, usize)> {
        Some((self.nodes.to_virt(from)?, self.nodes.to_virt(to)?))
    }

    fn index(&self, i: usize, j: usize) -> usize {
        matrix::index(i, j, self.nodes.len())
    }

    fn is_reachable(&self, i: usize, j: usize) -> bool {
        i == j || !self.pred[self.index(i, j)].is_empty()
    }

    // The path is collected from the target to the source.
    fn to_real_path(&self, mut path: Vec<usize>) -> Vec<G::NodeId> {
        path.reverse();
        path.into_iter()
            .filter_map(|slot| self.nodes.to_real(slot).cloned())
            .collect()
    }
}

pub struct AllShortestPathsBuilder<'a, W, G, C> {
    graph: &'a G,
    cost: C,
    ty: PhantomData<fn() -> W>,
}

impl<W, G> AllShortestPaths<W, G>
where
    G: GraphBase,
{
    pub fn on(graph: &G) -> AllShortestPathsBuilder<'_, W, G, GraphCost> {
        AllShortestPathsBuilder {
            graph,
            cost: GraphCost,
            ty: PhantomData,
        }
    }
}

impl<'a, W, G, C> AllShortestPathsBuilder<'a, W, G, C>
where
    G: GraphBase,
{
    pub fn cost<F>(self, cost: F) -> AllShortestPathsBuilder<'a, W, G, ExplicitCost<F>>
    where
        F: Fn(&EdgeRef<G::NodeId, G::EdgeId>) -> W,
        W: Weight,
    {
        AllShortestPathsBuilder {
            graph: self.graph,
            cost: ExplicitCost(cost),
            ty: PhantomData,
        }
    }

    pub fn uniform(self) -> AllShortestPathsBuilder<'a, W, G, Uniform> {
        AllShortestPathsBuilder {
            graph: self.graph,
            cost: Uniform,
            ty: PhantomData,
        }
    }

    pub fn run(self) -> Result<AllShortestPaths<W, G>, Error>
    where
        G: Neighbors + NodeList,
        C: GetCost<G, W>,
        W: Weight,
    {
        let AllShortestPathsBuilder { graph, cost, .. } = self;
        dijkstra_all(&Setup::new(graph, cost, Zero))
    }
}

#[instrument(level = "debug", skip_all, fields(nodes = setup.graph.node_count()))]
fn dijkstra_all<W, G, C, H>(setup: &Setup<'_, G, C, H>) -> Result<AllShortestPaths<W, G>, Error>
where
    G: Neighbors + NodeList,
    C: GetCost<G, W>,
    W: Weight,
{
    let nodes = CompactIdMap::new(setup.graph.nodes_by_id());
    let n = nodes.len();

    let mut dist = vec![W::inf(); matrix::size_of(n)];
    let mut pred = vec![Vec::new(); matrix::size_of(n)];

    let mut settled = FixedBitSet::with_capacity(n);
    let mut queue = PriorityQueue::<usize, W::Ord>::with_capacity(n);

    for i in 0..n {
        settled.reset_visited();

        dist[matrix::index(i, i, n)] = W::zero();
        queue.push(i, W::zero().into());

        while !queue.is_empty() {
            let (k, k_dist) = queue.pop();
            let k_dist: W = k_dist.into();
            settled.visit(k);

            let Some(node) = nodes.to_real(k).cloned() else {
                continue;
            };

            for neighbor in setup.successors(&node) {
                let edge_cost: W = setup.edge_cost(&neighbor);

                if !W::is_unsigned() && edge_cost < W::zero() {
                    debug!(edge = ?neighbor.edge, "negative edge cost");
                    return Err(Error::NegativeCost);
                }

                let Some(j) = nodes.to_virt(&neighbor.id) else {
                    continue;
                };

                // The source has no predecessors.
                if j == i {
                    continue;
                }

                let ij = matrix::index(i, j, n);
                let joint = k_dist.clone().saturating_add(edge_cost);

                if joint < dist[ij] {
                    dist[ij] = joint.clone();
                    pred[ij].clear();
                    pred[ij].push(k);

                    if !settled.is_visited(&j) {
                        queue.push_or_decrease(j, joint.into());
                    }
                } else if joint == dist[ij] && dist[ij] < W::inf() && !pred[ij].contains(&k) {
                    pred[ij].push(k);
                }
            }
        }
    }

    debug!("finished");

    Ok(AllShortestPaths { nodes, dist, pred })
}
