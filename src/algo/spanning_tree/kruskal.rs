use tracing::{debug, instrument, trace};

use crate::{
    algo::setup::Setup,
    common::DisjointSet,
    core::{base::EdgeRef, cost::GetCost, EdgeList, NodeList, Weight},
};

use super::SpanningTree;

#[instrument(level = "debug", skip_all, fields(edges = setup.graph.edge_count()))]
pub fn kruskal<W, G, C, H>(setup: &Setup<'_, G, C, H>) -> SpanningTree<W, G>
where
    G: NodeList + EdgeList,
    C: GetCost<G, W>,
    W: Weight,
{
    let graph = setup.graph;

    let mut edges = graph
        .edges_by_id()
        .filter_map(|id| {
            let (from, to) = graph.endpoints(&id)?;
            let edge = EdgeRef::new(id, from, to);
            let cost: W = setup.cost_of(&edge);
            Some((edge, cost))
        })
        .collect::<Vec<_>>();

    // Stable, so ties keep the order of the graph.
    edges.sort_by_key(|(_, cost)| W::Ord::from(cost.clone()));

    let nodes = graph.nodes_by_id().collect::<Vec<_>>();
    let mut sets = DisjointSet::new(nodes.iter().cloned());
    let mut tree = Vec::with_capacity(nodes.len().saturating_sub(1));

    for (edge, cost) in edges {
        if sets.union(&edge.from, &edge.to) {
            trace!(from = ?edge.from, to = ?edge.to, "edge added");
            tree.push((edge, cost));
        }
    }

    debug!(tree_edges = tree.len(), "finished");

    SpanningTree::new(nodes, tree)
}
