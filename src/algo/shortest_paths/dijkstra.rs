use fixedbitset::FixedBitSet;
use tracing::{debug, instrument, trace};

use crate::{
    algo::setup::Setup,
    common::{CompactIdMap, PriorityQueue},
    core::{cost::GetCost, Neighbors, NodeList, Weight},
    visit::VisitSet,
};

use super::{Error, ShortestPathTree};

#[instrument(level = "debug", skip_all, fields(source = ?source))]
pub(crate) fn dijkstra<W, G, C, H>(
    setup: &Setup<'_, G, C, H>,
    source: G::NodeId,
) -> Result<ShortestPathTree<W, G>, Error>
where
    G: Neighbors + NodeList,
    C: GetCost<G, W>,
    W: Weight,
{
    let nodes = CompactIdMap::new(setup.graph.nodes_by_id());

    let Some(source_slot) = nodes.to_virt(&source) else {
        debug!("source not in the graph");
        return Ok(ShortestPathTree::empty(source));
    };

    let n = nodes.len();
    let mut dist = vec![W::inf(); n];
    let mut pred = vec![None; n];
    let mut settled = FixedBitSet::with_capacity(n);
    let mut queue = PriorityQueue::<usize, W::Ord>::with_capacity(n);

    dist[source_slot] = W::zero();
    queue.push(source_slot, W::zero().into());

    while !queue.is_empty() {
        let (slot, slot_dist) = queue.pop();
        let slot_dist: W = slot_dist.into();
        settled.visit(slot);

        let Some(node) = nodes.to_real(slot).cloned() else {
            continue;
        };

        for neighbor in setup.successors(&node) {
            let edge_cost: W = setup.edge_cost(&neighbor);

            // The check for unsignedness should eliminate the negativity
            // check, because `is_unsigned` is a constant in practice.
            if !W::is_unsigned() && edge_cost < W::zero() {
                debug!(edge = ?neighbor.edge, "negative edge cost");
                return Err(Error::NegativeCost);
            }

            let Some(next) = nodes.to_virt(&neighbor.id) else {
                continue;
            };

            if settled.is_visited(&next) {
                continue;
            }

            let next_dist = slot_dist.clone().saturating_add(edge_cost);

            // Relaxation.
            if next_dist < dist[next] {
                trace!(node = ?neighbor.id, "relaxed");
                dist[next] = next_dist.clone();
                pred[next] = Some(slot);
                queue.push_or_decrease(next, next_dist.into());
            }
        }
    }

    debug!(settled = VisitSet::<usize>::visited_count(&settled), "finished");

    Ok(ShortestPathTree {
        source,
        nodes,
        dist,
        pred,
    })
}
