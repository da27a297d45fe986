use std::{fmt, marker::PhantomData};

use proptest::{
    prelude::*,
    sample::Index,
    strategy::{NewTree, ValueTree},
    test_runner::TestRunner,
};

use crate::{
    core::marker::{Directed, EdgeType, Undirected},
    storage::AdjList,
};

use super::testing::create_from_edges;

pub fn graph<E: Strategy, Ty: EdgeType>(edge: E) -> GraphStrategy<E, Ty> {
    GraphStrategy::new(edge)
}

pub fn graph_undirected<E: Strategy>(edge: E) -> GraphStrategy<E, Undirected> {
    GraphStrategy::new(edge)
}

pub fn graph_directed<E: Strategy>(edge: E) -> GraphStrategy<E, Directed> {
    GraphStrategy::new(edge)
}

#[derive(Debug, Clone, Copy)]
pub struct StrategyParams {
    max_size: usize,
    connected: bool,
    acyclic: bool,
    loops: bool,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 32,
            connected: false,
            acyclic: false,
            loops: true,
        }
    }
}

/// Strategy generating [`AdjList`] graphs with nodes `0..n`.
pub struct GraphStrategy<E: Strategy, Ty: EdgeType> {
    edge: E,
    params: StrategyParams,
    ty: PhantomData<fn() -> Ty>,
}

impl<E: Strategy, Ty: EdgeType> fmt::Debug for GraphStrategy<E, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStrategy")
            .field("edge", &self.edge)
            .field("params", &self.params)
            .finish()
    }
}

impl<E: Strategy, Ty: EdgeType> GraphStrategy<E, Ty> {
    pub fn new(edge: E) -> Self {
        Self {
            edge,
            params: StrategyParams::default(),
            ty: PhantomData,
        }
    }

    /// Maximum number of nodes.
    pub fn max_size(self, max_size: usize) -> Self {
        Self {
            params: StrategyParams {
                max_size,
                ..self.params
            },
            ..self
        }
    }

    /// Every node is reachable from every other when ignoring directions.
    pub fn connected(self) -> Self {
        Self {
            params: StrategyParams {
                connected: true,
                ..self.params
            },
            ..self
        }
    }

    /// Every edge goes from a lower identity to a higher one, so there are no
    /// cycles (and no self-loops).
    pub fn acyclic(self) -> Self {
        Self {
            params: StrategyParams {
                acyclic: true,
                loops: false,
                ..self.params
            },
            ..self
        }
    }

    pub fn no_loops(self) -> Self {
        Self {
            params: StrategyParams {
                loops: false,
                ..self.params
            },
            ..self
        }
    }
}

impl<E, Ty> GraphStrategy<E, Ty>
where
    E: Strategy + Clone + 'static,
    E::Value: Clone,
    Ty: EdgeType + fmt::Debug,
{
    fn boxed_inner(&self) -> BoxedStrategy<AdjList<E::Value, Ty>> {
        let params = self.params;
        let edge = self.edge.clone();

        (0..=params.max_size)
            .prop_flat_map(move |n| {
                let random = proptest::collection::vec(
                    (any::<Index>(), any::<Index>(), edge.clone()),
                    0..=(2 * n),
                );
                let spanning = proptest::collection::vec(
                    (any::<Index>(), edge.clone()),
                    if params.connected { n.saturating_sub(1) } else { 0 },
                );
                (Just(n), random, spanning)
            })
            .prop_map(move |(n, random, spanning)| {
                let mut edges = Vec::new();

                for (i, (parent, attr)) in spanning.into_iter().enumerate() {
                    // Node `i + 1` is connected to some node in `0..=i`.
                    let parent = parent.index(i + 1);
                    edges.push((parent as u64, (i + 1) as u64, attr));
                }

                if n > 0 {
                    for (u, v, attr) in random {
                        let (mut u, mut v) = (u.index(n), v.index(n));

                        if u == v && !params.loops {
                            continue;
                        }

                        if params.acyclic && u > v {
                            std::mem::swap(&mut u, &mut v);
                        }

                        edges.push((u as u64, v as u64, attr));
                    }
                }

                create_from_edges(n as u64, edges)
            })
            .boxed()
    }
}

impl<E, Ty> Strategy for GraphStrategy<E, Ty>
where
    E: Strategy + Clone + 'static,
    E::Value: Clone,
    Ty: EdgeType + fmt::Debug,
{
    type Tree = Box<dyn ValueTree<Value = AdjList<E::Value, Ty>>>;
    type Value = AdjList<E::Value, Ty>;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        self.boxed_inner().new_tree(runner)
    }
}
