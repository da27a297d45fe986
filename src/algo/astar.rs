//! Find the [shortest path] between a pair of nodes using the [A*] search
//! algorithm.
//!
//! The search is guided by a heuristic estimating the remaining cost to the
//! goal. Costs and the heuristic default to the capabilities of the graph
//! ([`Coster`](crate::core::Coster) and
//! [`HeuristicCoster`](crate::core::HeuristicCoster)). With the zero
//! heuristic, the search is equivalent to Dijkstra's algorithm terminated at
//! the goal.
//!
//! # Preconditions
//!
//! The returned path is optimal only if the heuristic is *admissible*, that
//! is, it never overestimates the true remaining cost. Because nodes are
//! closed once they are expanded, the heuristic should also be *consistent*
//! (`h(u) <= cost(u, v) + h(v)` for every edge). Neither property is enforced.
//! In debug builds, observed violations of consistency are reported as
//! warnings through `tracing`.
//!
//! Edge costs must be non-negative.
//!
//! [shortest path]: https://en.wikipedia.org/wiki/Shortest_path_problem
//! [A*]: https://en.wikipedia.org/wiki/A*_search_algorithm
//!
//! # Examples
//!
//! ```
//! use pathgraph::{
//!     algo::AStar,
//!     core::{id::NodeId, GraphAdd},
//!     storage::AdjList,
//! };
//!
//! // A 3x3 grid where node (x, y) has identity 3 * y + x.
//! let mut graph = AdjList::new_undirected();
//!
//! for id in 0..9 {
//!     graph.add_node(NodeId(id));
//! }
//!
//! for y in 0..3 {
//!     for x in 0..3 {
//!         let id = 3 * y + x;
//!         if x < 2 {
//!             graph.add_edge(NodeId(id), NodeId(id + 1), 1u32);
//!         }
//!         if y < 2 {
//!             graph.add_edge(NodeId(id), NodeId(id + 3), 1u32);
//!         }
//!     }
//! }
//!
//! let manhattan = |from: &NodeId, goal: &NodeId| {
//!     let (fx, fy) = (from.0 % 3, from.0 / 3);
//!     let (gx, gy) = (goal.0 % 3, goal.0 / 3);
//!     (fx.abs_diff(gx) + fy.abs_diff(gy)) as u32
//! };
//!
//! let result = AStar::on(&graph)
//!     .heuristic(manhattan)
//!     .run(NodeId(0), NodeId(8));
//!
//! assert_eq!(result.cost, 4);
//! assert_eq!(result.path.len(), 5);
//! ```

use std::marker::PhantomData;

use fixedbitset::FixedBitSet;
use tracing::{debug, instrument, trace};

use crate::{
    common::{CompactIdMap, PriorityQueue},
    core::{
        base::EdgeRef,
        cost::{
            ExplicitCost, ExplicitHeuristic, GetCost, GetHeuristic, GraphCost, GraphHeuristic,
            Uniform, Zero,
        },
        id::IdType,
        GraphBase, Neighbors, NodeList, Weight,
    },
    visit::VisitSet,
};

use super::setup::Setup;

/// Result of the A* search.
///
/// If the goal is not reachable from the start, the path is empty and the
/// cost is zero. This is a regular outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct AStarPath<W, NI> {
    /// Nodes of the path from start to goal, both inclusive.
    pub path: Vec<NI>,
    /// Total cost of the path.
    pub cost: W,
    /// Number of nodes expanded during the search.
    pub expanded: usize,
}

impl<W, NI> AStarPath<W, NI> {
    /// Returns `true` if the goal was reached.
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Entry point of the A* search.
///
/// See [module](self) documentation for more details and example.
pub struct AStar<W, G>(PhantomData<fn() -> (W, G)>);

pub struct AStarBuilder<'a, W, G, C, H> {
    graph: &'a G,
    cost: C,
    heuristic: H,
    ty: PhantomData<fn() -> W>,
}

impl<W, G> AStar<W, G>
where
    G: GraphBase,
{
    pub fn on(graph: &G) -> AStarBuilder<'_, W, G, GraphCost, GraphHeuristic> {
        AStarBuilder {
            graph,
            cost: GraphCost,
            heuristic: GraphHeuristic,
            ty: PhantomData,
        }
    }
}

impl<'a, W, G, C, H> AStarBuilder<'a, W, G, C, H>
where
    G: GraphBase,
{
    pub fn cost<F>(self, cost: F) -> AStarBuilder<'a, W, G, ExplicitCost<F>, H>
    where
        F: Fn(&EdgeRef<G::NodeId, G::EdgeId>) -> W,
        W: Weight,
    {
        AStarBuilder {
            graph: self.graph,
            cost: ExplicitCost(cost),
            heuristic: self.heuristic,
            ty: PhantomData,
        }
    }

    pub fn uniform(self) -> AStarBuilder<'a, W, G, Uniform, H> {
        AStarBuilder {
            graph: self.graph,
            cost: Uniform,
            heuristic: self.heuristic,
            ty: PhantomData,
        }
    }

    /// Uses the given function as the heuristic. It takes precedence over the
    /// [`HeuristicCoster`](crate::core::HeuristicCoster) capability of the
    /// graph.
    pub fn heuristic<F>(self, heuristic: F) -> AStarBuilder<'a, W, G, C, ExplicitHeuristic<F>>
    where
        F: Fn(&G::NodeId, &G::NodeId) -> W,
        W: Weight,
    {
        AStarBuilder {
            graph: self.graph,
            cost: self.cost,
            heuristic: ExplicitHeuristic(heuristic),
            ty: PhantomData,
        }
    }

    /// Estimates zero for every node, turning the search into Dijkstra's
    /// algorithm stopped at the goal.
    pub fn zero_heuristic(self) -> AStarBuilder<'a, W, G, C, Zero> {
        AStarBuilder {
            graph: self.graph,
            cost: self.cost,
            heuristic: Zero,
            ty: PhantomData,
        }
    }

    pub fn run(self, start: G::NodeId, goal: G::NodeId) -> AStarPath<W, G::NodeId>
    where
        G: Neighbors + NodeList,
        C: GetCost<G, W>,
        H: GetHeuristic<G, W>,
        W: Weight,
    {
        let AStarBuilder {
            graph,
            cost,
            heuristic,
            ..
        } = self;
        astar(&Setup::new(graph, cost, heuristic), start, goal)
    }
}

#[instrument(level = "debug", skip_all, fields(start = ?start, goal = ?goal))]
fn astar<W, G, C, H>(
    setup: &Setup<'_, G, C, H>,
    start: G::NodeId,
    goal: G::NodeId,
) -> AStarPath<W, G::NodeId>
where
    G: Neighbors + NodeList,
    C: GetCost<G, W>,
    H: GetHeuristic<G, W>,
    W: Weight,
{
    let nodes = CompactIdMap::new(setup.graph.nodes_by_id());

    let (Some(start_slot), Some(goal_slot)) = (nodes.to_virt(&start), nodes.to_virt(&goal)) else {
        debug!("start or goal not in the graph");
        return not_found(0);
    };

    let n = nodes.len();
    let mut g_score = vec![W::inf(); n];
    let mut pred = vec![None; n];
    let mut closed = FixedBitSet::with_capacity(n);
    let mut open = PriorityQueue::<usize, W::Ord>::with_capacity(n);
    let mut expanded = 0;

    g_score[start_slot] = W::zero();
    open.push(start_slot, setup.heuristic::<W>(&start, &goal).into());

    while !open.is_empty() {
        let (slot, _) = open.pop();
        expanded += 1;

        if slot == goal_slot {
            let path = reconstruct(&nodes, &pred, goal_slot);
            debug!(expanded, "goal reached");
            return AStarPath {
                path,
                cost: g_score[goal_slot].clone(),
                expanded,
            };
        }

        closed.visit(slot);

        let Some(node) = nodes.to_real(slot).cloned() else {
            continue;
        };

        #[cfg(debug_assertions)]
        let node_h: W = setup.heuristic(&node, &goal);

        for neighbor in setup.successors(&node) {
            let Some(next) = nodes.to_virt(&neighbor.id) else {
                continue;
            };

            let edge_cost: W = setup.edge_cost(&neighbor);

            #[cfg(debug_assertions)]
            {
                let next_h: W = setup.heuristic(&neighbor.id, &goal);
                if node_h > edge_cost.clone().saturating_add(next_h) {
                    tracing::warn!(from = ?node, to = ?neighbor.id, "inconsistent heuristic");
                }
            }

            if closed.is_visited(&next) {
                continue;
            }

            let tentative = g_score[slot].clone().saturating_add(edge_cost);

            if tentative < g_score[next] {
                trace!(node = ?neighbor.id, "improved");
                g_score[next] = tentative.clone();
                pred[next] = Some(slot);

                let f_score = tentative.saturating_add(setup.heuristic::<W>(&neighbor.id, &goal));
                open.push_or_decrease(next, f_score.into());
            }
        }
    }

    debug!(expanded, "goal not reachable");
    not_found(expanded)
}

fn not_found<W: Weight, NI>(expanded: usize) -> AStarPath<W, NI> {
    AStarPath {
        path: Vec::new(),
        cost: W::zero(),
        expanded,
    }
}

fn reconstruct<NI: IdType>(nodes: &CompactIdMap<NI>, pred: &[Option<usize>], goal: usize) -> Vec<NI> {
    let mut path = Vec::new();
    let mut curr = Some(goal);

    while let Some(slot) = curr {
        if let Some(id) = nodes.to_real(slot) {
            path.push(id.clone());
        }
        curr = pred[slot];
    }

    path.reverse();
    path
}
