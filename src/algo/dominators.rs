//! Find [dominators] and post-dominators of every node in a control flow
//! graph.
//!
//! Node `d` *dominates* node `n` if every path from the start node to `n`
//! goes through `d`. Symmetrically, `d` *post-dominates* `n` if every path
//! from `n` to the end node goes through `d`. Every node dominates itself.
//!
//! The sets are computed by iterating the data-flow equation
//! `dom(n) = {n} ∪ ⋂ dom(p)` over the predecessors `p` of `n` (successors for
//! post-dominators) until a fixed point is reached. All possible dominators
//! are reported, not only the immediate ones.
//!
//! Nodes other than the start without any predecessor keep the set of all
//! nodes: they are unreachable from the start, so they are vacuously
//! dominated by everything. The same holds for nodes reachable only from such
//! nodes.
//!
//! [dominators]: https://en.wikipedia.org/wiki/Dominator_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use pathgraph::{
//!     algo::Dominators,
//!     core::{id::NodeId, GraphAdd},
//!     storage::AdjList,
//! };
//!
//! let mut cfg = AdjList::new_directed();
//!
//! let [entry, then, otherwise, exit] = [0, 1, 2, 3].map(NodeId::from);
//! for block in [entry, then, otherwise, exit] {
//!     cfg.add_node(block);
//! }
//!
//! cfg.add_edge(entry, then, ());
//! cfg.add_edge(entry, otherwise, ());
//! cfg.add_edge(then, exit, ());
//! cfg.add_edge(otherwise, exit, ());
//!
//! let dominators = Dominators::on(&cfg).run(entry);
//!
//! assert!(dominators.dominates(&entry, &exit));
//! assert!(!dominators.dominates(&then, &exit));
//! ```

use std::marker::PhantomData;

use tracing::{debug, instrument};

use crate::{
    common::{CompactIdMap, NodeSet},
    core::{GraphBase, Neighbors, NodeList},
};

use super::setup::Setup;

/// Dominator sets of all nodes of a graph.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct DominatorMap<G: GraphBase> {
    root: G::NodeId,
    nodes: CompactIdMap<G::NodeId>,
    sets: Vec<NodeSet<G::NodeId>>,
}

impl<G> DominatorMap<G>
where
    G: GraphBase,
{
    /// The start node for dominators, the end node for post-dominators.
    pub fn root(&self) -> &G::NodeId {
        &self.root
    }

    /// Returns the set of nodes dominating `node`, including `node` itself,
    /// or `None` if the node is not in the graph.
    pub fn dominators_of(&self, node: &G::NodeId) -> Option<&NodeSet<G::NodeId>> {
        self.nodes.to_virt(node).map(|slot| &self.sets[slot])
    }

    /// Returns `true` if `dominator` dominates `node`.
    pub fn dominates(&self, dominator: &G::NodeId, node: &G::NodeId) -> bool {
        self.dominators_of(node)
            .map(|set| set.contains(dominator))
            .unwrap_or(false)
    }

    /// Returns an iterator of nodes and their dominator sets.
    pub fn iter(&self) -> impl Iterator<Item = (&G::NodeId, &NodeSet<G::NodeId>)> + '_ {
        self.nodes.iter().zip(self.sets.iter())
    }
}

/// Dominators with respect to a start node.
///
/// See [module](self) documentation for more details and example.
pub struct Dominators<G>(PhantomData<fn() -> G>);

/// Post-dominators with respect to an end node.
///
/// See [module](self) documentation for more details and example.
pub struct PostDominators<G>(PhantomData<fn() -> G>);

pub struct DominatorsBuilder<'a, G> {
    graph: &'a G,
    post: bool,
}

impl<G> Dominators<G>
where
    G: GraphBase,
{
    pub fn on(graph: &G) -> DominatorsBuilder<'_, G> {
        DominatorsBuilder { graph, post: false }
    }
}

impl<G> PostDominators<G>
where
    G: GraphBase,
{
    pub fn on(graph: &G) -> DominatorsBuilder<'_, G> {
        DominatorsBuilder { graph, post: true }
    }
}

impl<'a, G> DominatorsBuilder<'a, G>
where
    G: GraphBase,
{
    /// Runs the computation from `root`, the start node for dominators or the
    /// end node for post-dominators.
    pub fn run(self, root: G::NodeId) -> DominatorMap<G>
    where
        G: Neighbors + NodeList,
    {
        fixed_point(&Setup::structural(self.graph), root, self.post)
    }
}

#[instrument(level = "debug", skip_all, fields(root = ?root, post = post))]
fn fixed_point<G, C, H>(setup: &Setup<'_, G, C, H>, root: G::NodeId, post: bool) -> DominatorMap<G>
where
    G: Neighbors + NodeList,
{
    let nodes = CompactIdMap::new(setup.graph.nodes_by_id());
    let all = nodes.iter().cloned().collect::<NodeSet<_>>();
    let root_slot = nodes.to_virt(&root);

    let mut sets = (0..nodes.len())
        .map(|slot| {
            if Some(slot) == root_slot {
                std::iter::once(root.clone()).collect()
            } else {
                all.clone()
            }
        })
        .collect::<Vec<_>>();

    let mut passes = 0;
    let mut changed = true;

    while changed {
        changed = false;
        passes += 1;

        for (slot, node) in nodes.iter().enumerate() {
            if Some(slot) == root_slot {
                continue;
            }

            let incoming = if post {
                setup.successors(node)
            } else {
                setup.predecessors(node)
            };

            let mut preds = incoming.filter_map(|neighbor| nodes.to_virt(&neighbor.id));

            let Some(first) = preds.next() else {
                continue;
            };

            let mut dom = sets[first].clone();
            for pred in preds {
                dom.intersect_with(&sets[pred]);
            }
            dom.insert(node.clone());

            if dom != sets[slot] {
                sets[slot] = dom;
                changed = true;
            }
        }
    }

    debug!(passes, "fixed point reached");

    DominatorMap { root, nodes, sets }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rustc_hash::FxHashSet;

    use crate::{
        core::{
            id::{IdType, NodeId},
            marker::{Directed, Direction, Undirected},
            GraphAdd,
        },
        infra::{proptest::graph_directed, testing::create_from_edges},
        storage::AdjList,
    };

    use super::*;

    fn v(id: u64) -> NodeId {
        NodeId(id)
    }

    fn set(ids: &[u64]) -> NodeSet<NodeId> {
        ids.iter().copied().map(v).collect()
    }

    // Entry, loop header with two branches, latch and exit.
    fn create_cfg() -> AdjList<(), Directed> {
        create_from_edges(
            6,
            [
                (0, 1, ()),
                (1, 2, ()),
                (1, 3, ()),
                (2, 4, ()),
                (3, 4, ()),
                (4, 1, ()),
                (4, 5, ()),
            ],
        )
    }

    // Whether `to` is reachable from `from` while `blocked` is removed.
    fn reachable_avoiding(
        graph: &AdjList<(), Directed>,
        from: NodeId,
        to: NodeId,
        blocked: NodeId,
        dir: Direction,
    ) -> bool {
        let mut visited = FxHashSet::default();
        let mut stack = vec![from];

        while let Some(node) = stack.pop() {
            if node == blocked || !visited.insert(node) {
                continue;
            }

            if node == to {
                return true;
            }

            stack.extend(graph.neighbors_directed(&node, dir).map(|n| n.id));
        }

        false
    }

    #[test]
    fn dominators_basic() {
        let graph = create_cfg();
        let dominators = Dominators::on(&graph).run(v(0));

        assert_eq!(dominators.root(), &v(0));
        assert_eq!(dominators.dominators_of(&v(0)), Some(&set(&[0])));
        assert_eq!(dominators.dominators_of(&v(1)), Some(&set(&[0, 1])));
        assert_eq!(dominators.dominators_of(&v(2)), Some(&set(&[0, 1, 2])));
        assert_eq!(dominators.dominators_of(&v(3)), Some(&set(&[0, 1, 3])));
        assert_eq!(dominators.dominators_of(&v(4)), Some(&set(&[0, 1, 4])));
        assert_eq!(dominators.dominators_of(&v(5)), Some(&set(&[0, 1, 4, 5])));
    }

    #[test]
    fn post_dominators_basic() {
        let graph = create_cfg();
        let post = PostDominators::on(&graph).run(v(5));

        assert_eq!(post.dominators_of(&v(5)), Some(&set(&[5])));
        assert_eq!(post.dominators_of(&v(4)), Some(&set(&[4, 5])));
        assert_eq!(post.dominators_of(&v(2)), Some(&set(&[2, 4, 5])));
        assert_eq!(post.dominators_of(&v(3)), Some(&set(&[3, 4, 5])));
        assert_eq!(post.dominators_of(&v(1)), Some(&set(&[1, 4, 5])));
        assert_eq!(post.dominators_of(&v(0)), Some(&set(&[0, 1, 4, 5])));
    }

    #[test]
    fn unreachable_keeps_all_nodes() {
        let mut graph = create_cfg();
        graph.add_node(v(6));
        graph.add_node(v(7));
        graph.add_edge(v(6), v(7), ());

        let dominators = Dominators::on(&graph).run(v(0));
        let all = set(&[0, 1, 2, 3, 4, 5, 6, 7]);

        assert_eq!(dominators.dominators_of(&v(6)), Some(&all));
        assert_eq!(dominators.dominators_of(&v(7)), Some(&all));
        assert!(dominators.dominates(&v(3), &v(7)));
    }

    #[test]
    fn unknown_node() {
        let graph = create_cfg();
        let dominators = Dominators::on(&graph).run(v(0));

        assert_eq!(dominators.dominators_of(&v(42)), None);
        assert!(!dominators.dominates(&v(0), &v(42)));
    }

    #[test]
    fn undirected_uses_neighbors() {
        // Path 0 - 1 - 2.
        let graph: AdjList<(), Undirected> = create_from_edges(3, [(0, 1, ()), (1, 2, ())]);
        let dominators = Dominators::on(&graph).run(v(0));

        assert_eq!(dominators.dominators_of(&v(2)), Some(&set(&[0, 1, 2])));
    }

    #[test]
    fn iter_covers_all_nodes() {
        let graph = create_cfg();
        let dominators = Dominators::on(&graph).run(v(0));

        let mut nodes = dominators.iter().map(|(node, _)| *node).collect::<Vec<_>>();
        nodes.sort();

        assert_eq!(nodes, (0..6).map(v).collect::<Vec<_>>());
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_dominators_block_all_paths(graph in graph_directed(any::<()>()).max_size(12), start: u64) {
            let n = graph.node_count() as u64;
            prop_assume!(n > 0);

            let start = NodeId::from_bits(start % n);
            let dominators = Dominators::on(&graph).run(start);

            for node in graph.nodes_by_id() {
                let reachable = reachable_avoiding(&graph, start, node, v(u64::MAX), Direction::Outgoing);
                if !reachable {
                    continue;
                }

                for candidate in graph.nodes_by_id() {
                    if candidate == node || candidate == start {
                        continue;
                    }

                    let blocks = !reachable_avoiding(&graph, start, node, candidate, Direction::Outgoing);
                    prop_assert_eq!(dominators.dominates(&candidate, &node), blocks);
                }
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_post_dominators_block_all_paths(graph in graph_directed(any::<()>()).max_size(12), end: u64) {
            let n = graph.node_count() as u64;
            prop_assume!(n > 0);

            let end = NodeId::from_bits(end % n);
            let post = PostDominators::on(&graph).run(end);

            for node in graph.nodes_by_id() {
                let reaches = reachable_avoiding(&graph, end, node, v(u64::MAX), Direction::Incoming);
                if !reaches {
                    continue;
                }

                for candidate in graph.nodes_by_id() {
                    if candidate == node || candidate == end {
                        continue;
                    }

                    let blocks = !reachable_avoiding(&graph, end, node, candidate, Direction::Incoming);
                    prop_assert_eq!(post.dominates(&candidate, &node), blocks);
                }
            }
        }
    }
}
