use fixedbitset::FixedBitSet;
use tracing::{debug, instrument, trace};

use crate::{
    algo::setup::Setup,
    common::CompactIdMap,
    core::{Neighbors, NodeList},
};

#[instrument(level = "debug", skip_all, fields(nodes = setup.graph.node_count()))]
pub(crate) fn tarjan<G, C, H>(setup: &Setup<'_, G, C, H>) -> Vec<Vec<G::NodeId>>
where
    G: Neighbors + NodeList,
{
    let nodes = CompactIdMap::new(setup.graph.nodes_by_id());
    let mut state = TarjanState::new(nodes.len());

    for root in 0..nodes.len() {
        if state.index[root].is_none() {
            state.strong_connect(setup, &nodes, root);
        }
    }

    debug!(components = state.components.len(), "finished");

    state
        .components
        .into_iter()
        .map(|component| {
            component
                .into_iter()
                .filter_map(|slot| nodes.to_real(slot).cloned())
                .collect()
        })
        .collect()
}

struct TarjanState {
    index: Vec<Option<usize>>,
    low_link: Vec<usize>,
    on_stack: FixedBitSet,
    stack: Vec<usize>,
    next_index: usize,
    components: Vec<Vec<usize>>,
}

impl TarjanState {
    fn new(n: usize) -> Self {
        Self {
            index: vec![None; n],
            low_link: vec![0; n],
            on_stack: FixedBitSet::with_capacity(n),
            stack: Vec::new(),
            next_index: 0,
            components: Vec::new(),
        }
    }

    fn strong_connect<G, C, H>(
        &mut self,
        setup: &Setup<'_, G, C, H>,
        nodes: &CompactIdMap<G::NodeId>,
        slot: usize,
    ) where
        G: Neighbors + NodeList,
    {
        let index = self.next_index;
        self.next_index += 1;

        self.index[slot] = Some(index);
        self.low_link[slot] = index;
        self.stack.push(slot);
        self.on_stack.insert(slot);

        let Some(node) = nodes.to_real(slot) else {
            return;
        };

        for neighbor in setup.successors(node) {
            let Some(next) = nodes.to_virt(&neighbor.id) else {
                continue;
            };

            match self.index[next] {
                None => {
                    self.strong_connect(setup, nodes, next);
                    self.low_link[slot] = self.low_link[slot].min(self.low_link[next]);
                }
                Some(next_index) if self.on_stack.contains(next) => {
                    self.low_link[slot] = self.low_link[slot].min(next_index);
                }
                Some(_) => {}
            }
        }

        // Root of a component.
        if self.low_link[slot] == index {
            let mut component = Vec::new();

            while let Some(member) = self.stack.pop() {
                self.on_stack.set(member, false);
                component.push(member);

                if member == slot {
                    break;
                }
            }

            trace!(size = component.len(), "component closed");
            self.components.push(component);
        }
    }
}
