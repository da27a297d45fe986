use tracing::{debug, instrument};

use crate::{
    core::{Neighbors, NodeList},
    visit::{Dfs, VisitSet, Visitor},
};

#[instrument(level = "debug", skip_all, fields(nodes = graph.node_count()))]
pub fn dfs<G>(graph: &G) -> Vec<Vec<G::NodeId>>
where
    G: Neighbors + NodeList,
{
    let mut traversal = Dfs::new_undirected(graph);
    let mut components = Vec::new();

    for node in graph.nodes_by_id() {
        if traversal.visited().is_visited(&node) {
            continue;
        }

        let component = traversal.start(node).into_iter(graph).collect::<Vec<_>>();
        components.push(component);
    }

    debug!(components = components.len(), "finished");

    components
}
