use fixedbitset::FixedBitSet;
use tracing::{debug, instrument, trace};

use crate::{
    algo::setup::Setup,
    common::{CompactIdMap, PriorityQueue},
    core::{base::EdgeRef, cost::GetCost, EdgeList, Neighbors, NodeList, Weight},
};

use super::SpanningTree;

#[instrument(level = "debug", skip_all, fields(nodes = setup.graph.node_count()))]
pub fn prim<W, G, C, H>(setup: &Setup<'_, G, C, H>) -> SpanningTree<W, G>
where
    G: NodeList + EdgeList,
    C: GetCost<G, W>,
    W: Weight,
{
    let graph = setup.graph;
    let nodes = CompactIdMap::new(graph.nodes_by_id());
    let n = nodes.len();

    let mut in_tree = FixedBitSet::with_capacity(n);
    let mut tree = Vec::with_capacity(n.saturating_sub(1));

    for root in 0..n {
        if in_tree.contains(root) {
            continue;
        }

        // A new tree of the forest.
        in_tree.insert(root);

        loop {
            let mut best: Option<(EdgeRef<G::NodeId, G::EdgeId>, W, usize)> = None;

            for id in graph.edges_by_id() {
                let Some((from, to)) = graph.endpoints(&id) else {
                    continue;
                };

                let (Some(u), Some(v)) = (nodes.to_virt(&from), nodes.to_virt(&to)) else {
                    continue;
                };

                let outside = match (in_tree.contains(u), in_tree.contains(v)) {
                    (true, false) => v,
                    (false, true) => u,
                    _ => continue,
                };

                let edge = EdgeRef::new(id, from, to);
                let cost: W = setup.cost_of(&edge);

                let is_better = match best {
                    Some((_, ref best_cost, _)) => cost < *best_cost,
                    None => true,
                };

                if is_better {
                    best = Some((edge, cost, outside));
                }
            }

            let Some((edge, cost, outside)) = best else {
                break;
            };

            trace!(from = ?edge.from, to = ?edge.to, "edge added");
            in_tree.insert(outside);
            tree.push((edge, cost));
        }
    }

    debug!(tree_edges = tree.len(), "finished");

    SpanningTree::new(nodes.into_ids(), tree)
}

#[instrument(level = "debug", skip_all, fields(nodes = setup.graph.node_count()))]
pub fn prim_heap<W, G, C, H>(setup: &Setup<'_, G, C, H>) -> SpanningTree<W, G>
where
    G: Neighbors + NodeList,
    C: GetCost<G, W>,
    W: Weight,
{
    let graph = setup.graph;
    let nodes = CompactIdMap::new(graph.nodes_by_id());
    let n = nodes.len();

    let mut in_tree = FixedBitSet::with_capacity(n);
    // The cheapest known edge connecting a node to the tree.
    let mut best: Vec<Option<(EdgeRef<G::NodeId, G::EdgeId>, W)>> = vec![None; n];
    let mut queue = PriorityQueue::<usize, W::Ord>::with_capacity(n);
    let mut tree = Vec::with_capacity(n.saturating_sub(1));

    for root in 0..n {
        if in_tree.contains(root) {
            continue;
        }

        queue.push(root, W::zero().into());

        while !queue.is_empty() {
            let (slot, _) = queue.pop();
            in_tree.insert(slot);

            if let Some((edge, cost)) = best[slot].take() {
                trace!(from = ?edge.from, to = ?edge.to, "edge added");
                tree.push((edge, cost));
            }

            let Some(node) = nodes.to_real(slot) else {
                continue;
            };

            // Edge direction is irrelevant for spanning trees.
            for neighbor in graph.neighbors_undirected(node) {
                let Some(next) = nodes.to_virt(&neighbor.id) else {
                    continue;
                };

                if in_tree.contains(next) {
                    continue;
                }

                let cost: W = setup.edge_cost(&neighbor);

                let is_better = match best[next] {
                    Some((_, ref best_cost)) => cost < *best_cost,
                    None => true,
                };

                if is_better {
                    best[next] = Some((neighbor.to_edge(), cost.clone()));
                    queue.push_or_decrease(next, cost.into());
                }
            }
        }
    }

    debug!(tree_edges = tree.len(), "finished");

    SpanningTree::new(nodes.into_ids(), tree)
}
