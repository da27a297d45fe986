use std::marker::PhantomData;

use crate::{
    algo::setup::Setup,
    core::{
        base::EdgeRef,
        cost::{ExplicitCost, GetCost, GraphCost, Uniform, Zero},
        EdgeList, GraphBase, Neighbors, NodeList, Weight,
    },
};

use super::{
    algo::{self, Resolve},
    kruskal::kruskal,
    prim::{prim, prim_heap},
    Algo, SpanningTree,
};

pub struct SpanningTreeBuilder<'a, W, G, C, A> {
    graph: &'a G,
    cost: C,
    algo: A,
    ty: PhantomData<fn() -> W>,
}

impl<W, G> SpanningTree<W, G>
where
    G: GraphBase,
{
    pub fn on(graph: &G) -> SpanningTreeBuilder<'_, W, G, GraphCost, algo::AnyAlgo> {
        SpanningTreeBuilder {
            graph,
            cost: GraphCost,
            algo: algo::AnyAlgo,
            ty: PhantomData,
        }
    }
}

impl<'a, W, G, C, A> SpanningTreeBuilder<'a, W, G, C, A>
where
    G: GraphBase,
{
    pub fn cost<F>(self, cost: F) -> SpanningTreeBuilder<'a, W, G, ExplicitCost<F>, A>
    where
        F: Fn(&EdgeRef<G::NodeId, G::EdgeId>) -> W,
        W: Weight,
    {
        SpanningTreeBuilder {
            graph: self.graph,
            cost: ExplicitCost(cost),
            algo: self.algo,
            ty: PhantomData,
        }
    }

    /// Every edge costs one unit, any spanning tree is then minimal.
    pub fn uniform(self) -> SpanningTreeBuilder<'a, W, G, Uniform, A> {
        SpanningTreeBuilder {
            graph: self.graph,
            cost: Uniform,
            algo: self.algo,
            ty: PhantomData,
        }
    }

    /// Chooses the set-based Prim's algorithm.
    ///
    /// See [`Algo::Prim`] for details.
    pub fn prim(self) -> SpanningTreeBuilder<'a, W, G, C, algo::Prim> {
        self.with_algo(algo::Prim)
    }

    /// Chooses the heap-based Prim's algorithm.
    ///
    /// See [`Algo::PrimHeap`] for details.
    pub fn prim_heap(self) -> SpanningTreeBuilder<'a, W, G, C, algo::PrimHeap> {
        self.with_algo(algo::PrimHeap)
    }

    /// Chooses the Kruskal's algorithm.
    ///
    /// See [`Algo::Kruskal`] for details.
    pub fn kruskal(self) -> SpanningTreeBuilder<'a, W, G, C, algo::Kruskal> {
        self.with_algo(algo::Kruskal)
    }

    /// Chooses the algorithm at runtime.
    pub fn using(self, algo: Algo) -> SpanningTreeBuilder<'a, W, G, C, algo::SpecificAlgo> {
        self.with_algo(algo::SpecificAlgo(Some(algo)))
    }

    /// Chooses the algorithm at runtime, `None` means the default one.
    pub fn using_opt(
        self,
        algo: Option<Algo>,
    ) -> SpanningTreeBuilder<'a, W, G, C, algo::SpecificAlgo> {
        self.with_algo(algo::SpecificAlgo(algo))
    }

    fn with_algo<A2>(self, algo: A2) -> SpanningTreeBuilder<'a, W, G, C, A2> {
        SpanningTreeBuilder {
            graph: self.graph,
            cost: self.cost,
            algo,
            ty: PhantomData,
        }
    }

    pub fn run(self) -> SpanningTree<W, G>
    where
        G: Neighbors + NodeList + EdgeList,
        C: GetCost<G, W>,
        W: Weight,
        A: Resolve,
    {
        let SpanningTreeBuilder {
            graph, cost, algo, ..
        } = self;
        let setup = Setup::new(graph, cost, Zero);

        match algo.resolve() {
            Algo::Prim => prim(&setup),
            Algo::PrimHeap => prim_heap(&setup),
            Algo::Kruskal => kruskal(&setup),
        }
    }
}
