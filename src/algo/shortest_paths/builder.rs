use std::marker::PhantomData;

use crate::{
    algo::setup::Setup,
    core::{
        base::EdgeRef,
        cost::{ExplicitCost, GetCost, GraphCost, Uniform, Zero},
        GraphBase, Neighbors, NodeList, Weight,
    },
};

use super::{dijkstra, Error, ShortestPathTree};

pub struct ShortestPathTreeBuilder<'a, W, G, C> {
    graph: &'a G,
    cost: C,
    ty: PhantomData<fn() -> W>,
}

impl<W, G> ShortestPathTree<W, G>
where
    G: GraphBase,
{
    /// Starts the configuration. Edge costs come from the
    /// [`Coster`](crate::core::Coster) capability of the graph unless
    /// [`cost`](ShortestPathTreeBuilder::cost) or
    /// [`uniform`](ShortestPathTreeBuilder::uniform) is used.
    pub fn on(graph: &G) -> ShortestPathTreeBuilder<'_, W, G, GraphCost> {
        ShortestPathTreeBuilder {
            graph,
            cost: GraphCost,
            ty: PhantomData,
        }
    }
}

impl<'a, W, G, C> ShortestPathTreeBuilder<'a, W, G, C>
where
    G: GraphBase,
{
    /// Uses the given function for edge costs. It takes precedence over the
    /// graph capability.
    pub fn cost<F>(self, cost: F) -> ShortestPathTreeBuilder<'a, W, G, ExplicitCost<F>>
    where
        F: Fn(&EdgeRef<G::NodeId, G::EdgeId>) -> W,
        W: Weight,
    {
        ShortestPathTreeBuilder {
            graph: self.graph,
            cost: ExplicitCost(cost),
            ty: PhantomData,
        }
    }

    /// Every edge costs one unit. Meant for graphs that do not provide
    /// costs.
    pub fn uniform(self) -> ShortestPathTreeBuilder<'a, W, G, Uniform> {
        ShortestPathTreeBuilder {
            graph: self.graph,
            cost: Uniform,
            ty: PhantomData,
        }
    }

    pub fn run(self, source: G::NodeId) -> Result<ShortestPathTree<W, G>, Error>
    where
        G: Neighbors + NodeList,
        C: GetCost<G, W>,
        W: Weight,
    {
        let ShortestPathTreeBuilder { graph, cost, .. } = self;
        let setup = Setup::new(graph, cost, Zero);
        dijkstra(&setup, source)
    }
}
