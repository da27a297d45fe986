use crate::{
    algo::setup::Setup,
    core::{GraphBase, Neighbors, NodeList},
};

use super::{dfs::dfs, tarjan, ConnectedComponents, StronglyConnected};

pub struct ConnectedComponentsBuilder<'a, G> {
    graph: &'a G,
}

pub struct StronglyConnectedBuilder<'a, G> {
    graph: &'a G,
}

impl<G> ConnectedComponents<G>
where
    G: GraphBase,
{
    pub fn on(graph: &G) -> ConnectedComponentsBuilder<'_, G> {
        ConnectedComponentsBuilder { graph }
    }
}

impl<G> StronglyConnected<G>
where
    G: GraphBase,
{
    pub fn on(graph: &G) -> StronglyConnectedBuilder<'_, G> {
        StronglyConnectedBuilder { graph }
    }
}

impl<'a, G> ConnectedComponentsBuilder<'a, G>
where
    G: GraphBase,
{
    pub fn run(self) -> ConnectedComponents<G>
    where
        G: Neighbors + NodeList,
    {
        ConnectedComponents {
            components: dfs(self.graph),
        }
    }
}

impl<'a, G> StronglyConnectedBuilder<'a, G>
where
    G: GraphBase,
{
    /// Runs Tarjan's algorithm. On undirected graphs, the strongly connected
    /// components are the connected components.
    pub fn run(self) -> StronglyConnected<G>
    where
        G: Neighbors + NodeList,
    {
        StronglyConnected {
            inner: ConnectedComponents {
                components: tarjan(&Setup::structural(self.graph)),
            },
        }
    }
}
