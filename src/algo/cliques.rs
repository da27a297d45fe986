//! Find all [maximal cliques] of a graph.
//!
//! A clique is a set of mutually adjacent nodes and it is maximal if no other
//! node can be added to it. The enumeration uses the [Bron–Kerbosch
//! algorithm] with pivoting, with the top-level calls seeded in the
//! [degeneracy](super::degeneracy) order to bound the branching.
//!
//! Edge direction is ignored and self-loops are not considered. An isolated
//! node forms a maximal clique on its own.
//!
//! The search is recursive with depth bounded by the size of the largest
//! clique.
//!
//! [maximal cliques]: https://en.wikipedia.org/wiki/Clique_(graph_theory)
//! [Bron–Kerbosch algorithm]:
//!     https://en.wikipedia.org/wiki/Bron%E2%80%93Kerbosch_algorithm
//!
//! # Examples
//!
//! ```
//! use pathgraph::{
//!     algo::{MaximalCliques, Pivot},
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
//! graph.add_edge(a, b, ());
//! graph.add_edge(b, c, ());
//! graph.add_edge(c, a, ());
//! graph.add_edge(c, d, ());
//!
//! let cliques = MaximalCliques::on(&graph).pivot(Pivot::MaxCoverage).run();
//!
//! assert_eq!(cliques, vec![vec![a, b, c], vec![c, d]]);
//! ```

use std::marker::PhantomData;

use tracing::{debug, instrument};

use crate::{
    common::{CompactIdMap, NodeSet},
    core::{GraphBase, Neighbors, NodeList},
};

use super::degeneracy::{simple_adjacency, vertex_ordering};

/// Choice of the pivot in the Bron–Kerbosch algorithm.
///
/// Only the neighbors of the pivot are skipped as candidates in a branch,
/// so a pivot with many candidate neighbors makes fewer recursive calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pivot {
    /// The first available node of the candidates, or of the excluded nodes
    /// if there are no candidates. Cheap to choose.
    #[default]
    First,
    /// The node maximizing the number of its neighbors among the candidates
    /// (Tomita, Tanaka and Takahashi). More expensive to choose, but prunes
    /// more branches on dense graphs.
    MaxCoverage,
}

/// Maximal clique enumeration.
///
/// See [module](self) documentation for more details and example.
pub struct MaximalCliques<G>(PhantomData<fn() -> G>);

pub struct MaximalCliquesBuilder<'a, G> {
    graph: &'a G,
    pivot: Pivot,
}

impl<G> MaximalCliques<G>
where
    G: GraphBase,
{
    pub fn on(graph: &G) -> MaximalCliquesBuilder<'_, G> {
        MaximalCliquesBuilder {
            graph,
            pivot: Pivot::default(),
        }
    }
}

impl<'a, G> MaximalCliquesBuilder<'a, G>
where
    G: GraphBase,
{
    pub fn pivot(self, pivot: Pivot) -> Self {
        Self { pivot, ..self }
    }

    /// Returns all maximal cliques, each sorted by node identity, in
    /// lexicographic order.
    #[instrument(level = "debug", skip_all, fields(pivot = ?self.pivot))]
    pub fn run(self) -> Vec<Vec<G::NodeId>>
    where
        G: Neighbors + NodeList,
    {
        let nodes = CompactIdMap::new(self.graph.nodes_by_id());
        let adjacency = simple_adjacency(self.graph, &nodes);
        let (order, _) = vertex_ordering(&adjacency);

        let mut search = BronKerbosch {
            adjacency: &adjacency,
            pivot: self.pivot,
            cliques: Vec::new(),
        };

        let mut candidates = (0..nodes.len()).collect::<NodeSet<_>>();
        let mut excluded = NodeSet::new();

        for node in order {
            let neighbors = &adjacency[node];

            search.expand(
                &mut vec![node],
                candidates.intersection(neighbors),
                excluded.intersection(neighbors),
            );

            candidates.remove(&node);
            excluded.insert(node);
        }

        let mut cliques = search
            .cliques
            .into_iter()
            .map(|clique| {
                let mut clique = clique
                    .into_iter()
                    .filter_map(|slot| nodes.to_real(slot).cloned())
                    .collect::<Vec<_>>();
                clique.sort();
                clique
            })
            .collect::<Vec<_>>();

        cliques.sort();

        debug!(cliques = cliques.len(), "finished");

        cliques
    }
}

// Accumulates the cliques found during the recursion.
struct BronKerbosch<'a> {
    adjacency: &'a [NodeSet<usize>],
    pivot: Pivot,
    cliques: Vec<Vec<usize>>,
}

impl<'a> BronKerbosch<'a> {
    fn expand(
        &mut self,
        clique: &mut Vec<usize>,
        mut candidates: NodeSet<usize>,
        mut excluded: NodeSet<usize>,
    ) {
        if candidates.is_empty() && excluded.is_empty() {
            self.cliques.push(clique.clone());
            return;
        }

        let adjacency = self.adjacency;
        let pivot_neighbors = self.choose_pivot(&candidates, &excluded);

        let branches = candidates
            .iter()
            .filter(|node| !pivot_neighbors.contains(*node))
            .copied()
            .collect::<Vec<_>>();

        for node in branches {
            let neighbors = &adjacency[node];

            clique.push(node);
            self.expand(
                clique,
                candidates.intersection(neighbors),
                excluded.intersection(neighbors),
            );
            clique.pop();

            candidates.remove(&node);
            excluded.insert(node);
        }
    }

    fn choose_pivot(&self, candidates: &NodeSet<usize>, excluded: &NodeSet<usize>) -> &'a NodeSet<usize> {
        let pivot = match self.pivot {
            Pivot::First => candidates.first().or_else(|| excluded.first()).copied(),
            Pivot::MaxCoverage => candidates
                .iter()
                .chain(excluded.iter())
                .max_by_key(|&&node| candidates.intersection_count(&self.adjacency[node]))
                .copied(),
        };

        match pivot {
            Some(pivot) => &self.adjacency[pivot],
            None => panic!("pivot candidate set is empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use crate::{
        core::{
            id::NodeId,
            marker::{Directed, Undirected},
        },
        infra::{
            proptest::graph_undirected,
            testing::{create_complete, create_from_edges},
        },
        storage::AdjList,
    };

    use super::*;

    const PIVOTS: [Pivot; 2] = [Pivot::First, Pivot::MaxCoverage];

    fn v(id: u64) -> NodeId {
        NodeId(id)
    }

    fn cliques(ids: &[&[u64]]) -> Vec<Vec<NodeId>> {
        ids.iter()
            .map(|clique| clique.iter().copied().map(v).collect())
            .collect()
    }

    fn adjacent<G>(graph: &G, a: &G::NodeId, b: &G::NodeId) -> bool
    where
        G: Neighbors,
    {
        graph.neighbors_undirected(a).any(|neighbor| &neighbor.id == b)
    }

    // Exhaustive search over all subsets.
    fn brute_force(graph: &AdjList<(), Undirected>) -> Vec<Vec<NodeId>> {
        let nodes = graph.nodes_by_id().collect::<Vec<_>>();
        let n = nodes.len();

        let is_clique = |mask: u32| {
            (0..n).all(|i| {
                (i + 1..n).all(|j| {
                    mask & (1 << i) == 0
                        || mask & (1 << j) == 0
                        || adjacent(graph, &nodes[i], &nodes[j])
                })
            })
        };

        let mut result = Vec::new();
        for mask in 1..(1u32 << n) {
            if !is_clique(mask) {
                continue;
            }

            let maximal = (0..n).all(|i| mask & (1 << i) != 0 || !is_clique(mask | (1 << i)));
            if maximal {
                let mut clique = (0..n)
                    .filter(|i| mask & (1 << i) != 0)
                    .map(|i| nodes[i])
                    .collect::<Vec<_>>();
                clique.sort();
                result.push(clique);
            }
        }

        result.sort();
        result
    }

    #[test]
    fn basic() {
        let graph: AdjList<(), Undirected> = create_from_edges(
            7,
            [
                (1, 2, ()),
                (1, 5, ()),
                (2, 3, ()),
                (2, 5, ()),
                (3, 4, ()),
                (4, 5, ()),
                (4, 6, ()),
            ],
        );

        for pivot in PIVOTS {
            assert_eq!(
                MaximalCliques::on(&graph).pivot(pivot).run(),
                cliques(&[&[0], &[1, 2, 5], &[2, 3], &[3, 4], &[4, 5], &[4, 6]]),
                "{pivot:?}"
            );
        }
    }

    #[test]
    fn complete() {
        let graph = create_complete::<(), Undirected>(6);

        for pivot in PIVOTS {
            assert_eq!(
                MaximalCliques::on(&graph).pivot(pivot).run(),
                cliques(&[&[0, 1, 2, 3, 4, 5]])
            );
        }
    }

    #[test]
    fn directed_edges_are_undirected() {
        let graph: AdjList<(), Directed> = create_from_edges(3, [(0, 1, ()), (1, 2, ()), (2, 0, ())]);

        assert_eq!(MaximalCliques::on(&graph).run(), cliques(&[&[0, 1, 2]]));
    }

    #[test]
    fn self_loop_ignored() {
        let graph: AdjList<(), Undirected> = create_from_edges(2, [(0, 0, ()), (0, 1, ())]);

        assert_eq!(MaximalCliques::on(&graph).run(), cliques(&[&[0, 1]]));
    }

    #[test]
    fn empty() {
        let graph = AdjList::<(), Undirected>::new();

        assert!(MaximalCliques::on(&graph).run().is_empty());
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_cliques_maximal(graph in graph_undirected(any::<()>()).max_size(24)) {
            let result = MaximalCliques::on(&graph).pivot(Pivot::MaxCoverage).run();

            for clique in &result {
                for (i, a) in clique.iter().enumerate() {
                    for b in &clique[i + 1..] {
                        prop_assert!(adjacent(&graph, a, b));
                    }
                }

                let extendable = graph
                    .nodes_by_id()
                    .filter(|node| !clique.contains(node))
                    .any(|node| clique.iter().all(|member| adjacent(&graph, &node, member)));
                prop_assert!(!extendable);
            }

            let sets = result
                .iter()
                .map(|clique| clique.iter().copied().collect::<BTreeSet<_>>())
                .collect::<Vec<_>>();

            for (i, a) in sets.iter().enumerate() {
                for (j, b) in sets.iter().enumerate() {
                    prop_assert!(i == j || !a.is_subset(b));
                }
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_cliques_brute_force(graph in graph_undirected(any::<()>()).max_size(10)) {
            let expected = brute_force(&graph);

            for pivot in PIVOTS {
                prop_assert_eq!(&MaximalCliques::on(&graph).pivot(pivot).run(), &expected);
            }
        }
    }
}
