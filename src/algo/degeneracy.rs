//! Find the [degeneracy] ordering of the nodes and the [k-core]
//! decomposition of a graph.
//!
//! Nodes are repeatedly removed in the order of the smallest number of
//! remaining neighbors. The largest such number seen at the time of removal
//! is the *core number* of the removed node, and the largest core number in
//! the graph is its degeneracy. The resulting order lists the nodes in
//! reverse removal order, so every node has at most `degeneracy` neighbors
//! preceding it.
//!
//! Edge direction is ignored, and self-loops and parallel edges do not
//! contribute to the degree.
//!
//! [degeneracy]: https://en.wikipedia.org/wiki/Degeneracy_(graph_theory)
//! [k-core]: https://en.wikipedia.org/wiki/Degeneracy_(graph_theory)#k-Cores
//!
//! # Examples
//!
//! ```
//! use pathgraph::{
//!     algo::Degeneracy,
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
//! // Triangle with a pendant node.
//! graph.add_edge(a, b, ());
//! graph.add_edge(b, c, ());
//! graph.add_edge(c, a, ());
//! graph.add_edge(c, d, ());
//!
//! let ordering = Degeneracy::on(&graph).run();
//!
//! assert_eq!(ordering.degeneracy(), 2);
//! assert_eq!(ordering.shell(1), &[d]);
//! assert_eq!(ordering.core(2).len(), 3);
//! ```

use std::{marker::PhantomData, ops::Range};

use tracing::{debug, instrument, trace};

use crate::{
    common::{CompactIdMap, NodeSet},
    core::{GraphBase, Neighbors, NodeList},
};

/// Degeneracy ordering and k-core decomposition of a graph.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct VertexOrdering<G: GraphBase> {
    order: Vec<G::NodeId>,
    // Ranges into `order`, indexed by core number.
    shells: Vec<Range<usize>>,
}

impl<G> VertexOrdering<G>
where
    G: GraphBase,
{
    /// Nodes in degeneracy order.
    pub fn order(&self) -> &[G::NodeId] {
        &self.order
    }

    /// The maximum core number, zero for an empty graph.
    pub fn degeneracy(&self) -> usize {
        self.shells.len().saturating_sub(1)
    }

    /// Nodes with core number exactly `k`.
    pub fn shell(&self, k: usize) -> &[G::NodeId] {
        match self.shells.get(k) {
            Some(range) => &self.order[range.clone()],
            None => &[],
        }
    }

    /// Nodes of the k-core, that is, nodes with core number at least `k`.
    pub fn core(&self, k: usize) -> &[G::NodeId] {
        match self.shells.get(k) {
            Some(range) => &self.order[..range.end],
            None => &[],
        }
    }

    /// Returns an iterator of the shells in increasing order of the core
    /// number.
    pub fn shells(&self) -> impl Iterator<Item = &[G::NodeId]> + '_ {
        self.shells.iter().map(|range| &self.order[range.clone()])
    }

    pub fn into_order(self) -> Vec<G::NodeId> {
        self.order
    }
}

/// Degeneracy ordering computation.
///
/// See [module](self) documentation for more details and example.
pub struct Degeneracy<G>(PhantomData<fn() -> G>);

pub struct DegeneracyBuilder<'a, G> {
    graph: &'a G,
}

impl<G> Degeneracy<G>
where
    G: GraphBase,
{
    pub fn on(graph: &G) -> DegeneracyBuilder<'_, G> {
        DegeneracyBuilder { graph }
    }
}

impl<'a, G> DegeneracyBuilder<'a, G>
where
    G: GraphBase,
{
    pub fn run(self) -> VertexOrdering<G>
    where
        G: Neighbors + NodeList,
    {
        let nodes = CompactIdMap::new(self.graph.nodes_by_id());
        let adjacency = simple_adjacency(self.graph, &nodes);
        let (order, shells) = vertex_ordering(&adjacency);

        VertexOrdering {
            order: order
                .into_iter()
                .filter_map(|slot| nodes.to_real(slot).cloned())
                .collect(),
            shells,
        }
    }
}

/// Neighbor sets by slot, ignoring direction, self-loops and parallel edges.
pub(crate) fn simple_adjacency<G>(graph: &G, nodes: &CompactIdMap<G::NodeId>) -> Vec<NodeSet<usize>>
where
    G: Neighbors,
{
    nodes
        .iter()
        .enumerate()
        .map(|(slot, node)| {
            graph
                .neighbors_undirected(node)
                .filter_map(|neighbor| nodes.to_virt(&neighbor.id))
                .filter(|&neighbor| neighbor != slot)
                .collect()
        })
        .collect()
}

#[instrument(level = "debug", skip_all, fields(nodes = adjacency.len()))]
pub(crate) fn vertex_ordering(adjacency: &[NodeSet<usize>]) -> (Vec<usize>, Vec<Range<usize>>) {
    let n = adjacency.len();

    // Number of neighbors not yet removed, `None` once removed.
    let mut degree = adjacency
        .iter()
        .map(|neighbors| Some(neighbors.len()))
        .collect::<Vec<_>>();

    let max_degree = adjacency.iter().map(NodeSet::len).max().unwrap_or(0);

    // Bucket of nodes by remaining degree and position of each node in its
    // bucket.
    let mut buckets = vec![Vec::new(); max_degree + 1];
    let mut position = vec![0; n];

    for slot in 0..n {
        let bucket = &mut buckets[adjacency[slot].len()];
        position[slot] = bucket.len();
        bucket.push(slot);
    }

    let mut removed = Vec::with_capacity(n);
    // Number of removed nodes per core number.
    let mut shell_sizes = vec![0usize];
    let mut k = 0;
    let mut lowest = 0;

    for _ in 0..n {
        // Remaining degrees decrease by at most one per removal.
        let Some(i) = (lowest..buckets.len()).find(|&i| !buckets[i].is_empty()) else {
            break;
        };
        lowest = i.saturating_sub(1);

        if i > k {
            k = i;
            shell_sizes.resize(k + 1, 0);
        }

        let Some(slot) = buckets[i].pop() else {
            break;
        };

        degree[slot] = None;
        removed.push(slot);
        shell_sizes[k] += 1;
        trace!(slot, core = k, "removed");

        for &neighbor in adjacency[slot].iter() {
            let Some(d) = degree[neighbor] else {
                continue;
            };

            // Move the neighbor one bucket down.
            let pos = position[neighbor];
            buckets[d].swap_remove(pos);
            if let Some(&moved) = buckets[d].get(pos) {
                position[moved] = pos;
            }

            position[neighbor] = buckets[d - 1].len();
            buckets[d - 1].push(neighbor);
            degree[neighbor] = Some(d - 1);
        }
    }

    removed.reverse();

    // The highest shell is at the front.
    let mut shells = Vec::with_capacity(shell_sizes.len());
    let mut end = removed.len();
    for size in shell_sizes {
        shells.push(end - size..end);
        end -= size;
    }

    if n == 0 {
        shells.clear();
    }

    debug!(degeneracy = shells.len().saturating_sub(1), "finished");

    (removed, shells)
}
