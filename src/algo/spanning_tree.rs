//! Find a [minimum spanning tree] (or forest) of a graph.
//!
//! See available parameters [here](SpanningTreeBuilder#implementations).
//!
//! Edge direction is ignored, every edge connects its endpoints in both
//! directions. If the graph is not connected, the result is a minimum
//! spanning forest with one tree per connected component. Different
//! algorithms may choose different edges when there are ties, but the total
//! cost is always the same.
//!
//! The result can be written into another graph with
//! [`write_into`](SpanningTree::write_into).
//!
//! [minimum spanning tree]: https://en.wikipedia.org/wiki/Minimum_spanning_tree
//!
//! # Examples
//!
//! ```
//! use pathgraph::{
//!     algo::SpanningTree,
//!     core::{id::NodeId, EdgeList, GraphAdd, NodeList},
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
//! graph.add_edge(a, b, 1u32);
//! graph.add_edge(b, c, 2);
//! graph.add_edge(a, c, 3);
//! graph.add_edge(c, d, 1);
//!
//! let tree = SpanningTree::on(&graph).kruskal().run();
//! assert_eq!(tree.total(), 4);
//!
//! let mut output = AdjList::new_undirected();
//! tree.write_into(&mut output).unwrap();
//!
//! assert_eq!(output.node_count(), 4);
//! assert_eq!(output.edge_count(), 3);
//! ```

use thiserror::Error;

use crate::core::{
    base::EdgeRef, error::AddEdgeErrorKind, GraphAdd, GraphBase, NodeList, Weight,
};

mod builder;
mod kruskal;
mod prim;

pub use builder::SpanningTreeBuilder;

/// Minimum spanning tree (or forest) of a graph.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct SpanningTree<W, G: GraphBase> {
    nodes: Vec<G::NodeId>,
    edges: Vec<(EdgeRef<G::NodeId, G::EdgeId>, W)>,
    total: W,
}

impl<W, G> SpanningTree<W, G>
where
    G: GraphBase,
    W: Weight,
{
    fn new(nodes: Vec<G::NodeId>, edges: Vec<(EdgeRef<G::NodeId, G::EdgeId>, W)>) -> Self {
        let total = edges
            .iter()
            .fold(W::zero(), |total, (_, cost)| total.saturating_add(cost.clone()));

        Self {
            nodes,
            edges,
            total,
        }
    }

    /// Edges of the tree with their costs, in the order they were chosen.
    pub fn edges(&self) -> &[(EdgeRef<G::NodeId, G::EdgeId>, W)] {
        &self.edges
    }

    /// Nodes spanned by the tree, that is, all nodes of the graph.
    pub fn nodes(&self) -> &[G::NodeId] {
        &self.nodes
    }

    /// Total cost of the tree.
    pub fn total(&self) -> W {
        self.total.clone()
    }

    /// Adds all nodes and edges of the tree to `dst`, with edge costs as
    /// attributes.
    ///
    /// The destination must not contain any of the nodes. This is checked
    /// before any modification, so `dst` is left untouched on error.
    pub fn write_into<D>(&self, dst: &mut D) -> Result<(), Error>
    where
        D: GraphAdd<W> + NodeList + GraphBase<NodeId = G::NodeId>,
    {
        if self.nodes.iter().any(|node| dst.contains_node(node)) {
            return Err(Error::DestinationNotDisjoint);
        }

        for node in self.nodes.iter() {
            dst.try_add_node(node.clone())
                .map_err(|_| Error::DestinationNotDisjoint)?;
        }

        for (edge, cost) in self.edges.iter() {
            dst.try_add_edge(&edge.from, &edge.to, cost.clone())
                .map_err(|error| Error::AddEdge(error.kind))?;
        }

        Ok(())
    }
}

/// The error encountered when writing a [`SpanningTree`] into a graph.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The destination graph already contains a node of the tree.
    #[error("destination graph is not disjoint from the tree")]
    DestinationNotDisjoint,
    /// The destination graph refused an edge of the tree.
    #[error("adding tree edge failed: {0}")]
    AddEdge(AddEdgeErrorKind),
}

/// Algorithm for [`SpanningTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Algo {
    /// [Prim's algorithm](https://en.wikipedia.org/wiki/Prim%27s_algorithm)
    /// in its simplest, set-based form.
    ///
    /// In every step, all edges of the graph are scanned and the cheapest one
    /// crossing the boundary of the tree is taken. This gives O(|V|·|E|) time
    /// complexity, but there is no auxiliary structure besides the set of
    /// nodes in the tree.
    ///
    /// # Use cases
    ///
    /// * Small graphs.
    Prim,

    /// [Prim's algorithm](https://en.wikipedia.org/wiki/Prim%27s_algorithm)
    /// with a priority queue keyed by the cheapest known edge into each node.
    ///
    /// # Use cases
    ///
    /// * Dense graphs.
    PrimHeap,

    /// [Kruskal's
    /// algorithm](https://en.wikipedia.org/wiki/Kruskal%27s_algorithm).
    ///
    /// Edges are sorted by cost and added one by one unless they would close
    /// a cycle, which is detected using a disjoint-set structure. Ties are
    /// broken by the order of the edges in the graph.
    ///
    /// # Use cases
    ///
    /// * Sparse graphs.
    Kruskal,
}

mod algo {
    use super::Algo;

    #[derive(Debug)]
    pub struct AnyAlgo;

    #[derive(Debug)]
    pub struct SpecificAlgo(pub Option<Algo>);

    #[derive(Debug)]
    pub struct Prim;

    #[derive(Debug)]
    pub struct PrimHeap;

    #[derive(Debug)]
    pub struct Kruskal;

    pub trait Resolve {
        fn resolve(&self) -> Algo;
    }

    impl Resolve for AnyAlgo {
        fn resolve(&self) -> Algo {
            Algo::Kruskal
        }
    }

    impl Resolve for SpecificAlgo {
        fn resolve(&self) -> Algo {
            self.0.unwrap_or(Algo::Kruskal)
        }
    }

    impl Resolve for Prim {
        fn resolve(&self) -> Algo {
            Algo::Prim
        }
    }

    impl Resolve for PrimHeap {
        fn resolve(&self) -> Algo {
            Algo::PrimHeap
        }
    }

    impl Resolve for Kruskal {
        fn resolve(&self) -> Algo {
            Algo::Kruskal
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::{
        algo::ConnectedComponents,
        common::DisjointSet,
        core::{
            id::{EdgeId, NodeId},
            marker::{Directed, Undirected},
            EdgeList,
        },
        infra::{proptest::graph_undirected, testing::create_from_edges},
        storage::AdjList,
    };

    use super::*;

    const ALGOS: [Algo; 3] = [Algo::Prim, Algo::PrimHeap, Algo::Kruskal];

    fn v(id: u64) -> NodeId {
        NodeId(id)
    }

    fn create_basic_graph() -> AdjList<u32, Undirected> {
        create_from_edges(
            5,
            [
                (0, 1, 2),
                (0, 3, 6),
                (1, 2, 3),
                (1, 3, 8),
                (1, 4, 5),
                (2, 4, 7),
                (3, 4, 9),
            ],
        )
    }

    fn assert_forest<G>(tree: &SpanningTree<u32, G>, graph: &G)
    where
        G: NodeList + crate::core::Neighbors,
    {
        let components = ConnectedComponents::on(graph).run().len();

        assert_eq!(
            tree.edges().len(),
            graph.node_count() - components,
            "forest has wrong number of edges"
        );

        let mut sets = DisjointSet::new(graph.nodes_by_id());
        for (edge, _) in tree.edges() {
            assert!(sets.union(&edge.from, &edge.to), "tree contains cycle");
        }
    }

    #[test]
    fn basic() {
        let graph = create_basic_graph();

        for algo in ALGOS {
            let tree = SpanningTree::on(&graph).using(algo).run();

            assert_eq!(tree.total(), 16, "{algo:?}");
            assert_forest(&tree, &graph);
        }
    }

    #[test]
    fn basic_edges() {
        let graph = create_basic_graph();
        let tree = SpanningTree::on(&graph).prim().run();

        let mut costs = tree.edges().iter().map(|(_, cost)| *cost).collect::<Vec<_>>();
        costs.sort();

        assert_eq!(costs, vec![2, 3, 5, 6]);
    }

    #[test]
    fn disconnected_forest() {
        let graph: AdjList<u32, Undirected> = create_from_edges(
            7,
            [(0, 1, 4), (1, 2, 1), (0, 2, 2), (3, 4, 5), (4, 5, 1), (3, 5, 1)],
        );

        for algo in ALGOS {
            let tree = SpanningTree::on(&graph).using(algo).run();

            assert_eq!(tree.total(), 5, "{algo:?}");
            assert_eq!(tree.nodes().len(), 7);
            assert_forest(&tree, &graph);
        }
    }

    #[test]
    fn directed_edges_are_undirected() {
        // Node 0 is reachable only against the edge direction.
        let graph: AdjList<u32, Directed> = create_from_edges(3, [(1, 0, 1), (2, 0, 2), (1, 2, 5)]);

        for algo in ALGOS {
            let tree = SpanningTree::on(&graph).using(algo).run();

            assert_eq!(tree.total(), 3, "{algo:?}");
            assert_eq!(tree.edges().len(), 2);
        }
    }

    #[test]
    fn explicit_cost() {
        let graph = create_basic_graph();

        // Every edge costs the sum of its endpoint identities.
        for algo in ALGOS {
            let tree = SpanningTree::on(&graph)
                .cost(|edge: &EdgeRef<NodeId, EdgeId>| edge.from.0 + edge.to.0)
                .using(algo)
                .run();

            // Edges 0-1 (1), 0-3 (3), 1-2 (3) and 1-4 (5).
            assert_eq!(tree.total(), 12, "{algo:?}");
        }
    }

    #[test]
    fn uniform_cost() {
        let graph = create_basic_graph();
        let tree = SpanningTree::<u32, _>::on(&graph).uniform().run();

        assert_eq!(tree.total(), 4);
    }

    #[test]
    fn total_saturates() {
        let graph: AdjList<u8, Undirected> = create_from_edges(3, [(0, 1, 200), (1, 2, 200)]);

        for algo in ALGOS {
            let tree = SpanningTree::on(&graph).using(algo).run();

            assert_eq!(tree.edges().len(), 2);
            assert_eq!(tree.total(), u8::MAX, "{algo:?}");
        }
    }

    #[test]
    fn empty() {
        let graph = AdjList::<u32, Undirected>::new();

        for algo in ALGOS {
            let tree = SpanningTree::on(&graph).using(algo).run();

            assert!(tree.edges().is_empty());
            assert_eq!(tree.total(), 0);
        }
    }

    #[test]
    fn write_into() {
        let graph = create_basic_graph();
        let tree = SpanningTree::on(&graph).run();

        let mut output = AdjList::<u32, Undirected>::new();
        tree.write_into(&mut output).unwrap();

        assert_eq!(output.node_count(), 5);
        assert_eq!(output.edge_count(), 4);
        assert!(output.contains_edge_between(&v(0), &v(1)));
        assert!(!output.contains_edge_between(&v(3), &v(4)));
    }

    #[test]
    fn write_into_not_disjoint() {
        let graph = create_basic_graph();
        let tree = SpanningTree::on(&graph).run();

        let mut output = AdjList::<u32, Undirected>::new();
        output.add_node(v(4));

        assert_matches!(
            tree.write_into(&mut output),
            Err(Error::DestinationNotDisjoint)
        );
        assert_eq!(output.node_count(), 1);
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_spanning_tree_equal_totals(graph in graph_undirected(any::<u8>().prop_map(u32::from)).connected()) {
            let prim = SpanningTree::on(&graph).prim().run();
            let prim_heap = SpanningTree::on(&graph).prim_heap().run();
            let kruskal = SpanningTree::on(&graph).kruskal().run();

            prop_assert_eq!(prim.total(), kruskal.total());
            prop_assert_eq!(prim_heap.total(), kruskal.total());

            assert_forest(&prim, &graph);
            assert_forest(&prim_heap, &graph);
            assert_forest(&kruskal, &graph);
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_spanning_forest(graph in graph_undirected(any::<u8>().prop_map(u32::from))) {
            for algo in ALGOS {
                let tree = SpanningTree::on(&graph).using(algo).run();
                assert_forest(&tree, &graph);
            }
        }
    }
}
