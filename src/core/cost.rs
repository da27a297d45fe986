//! Edge cost and heuristic oracles.
//!
//! An algorithm needs an edge cost (and A* also a heuristic). The cost is
//! resolved with the following precedence:
//!
//! 1. an explicit function given to the algorithm builder ([`ExplicitCost`]),
//! 2. the [`Coster`](super::Coster) capability of the graph ([`GraphCost`]),
//! 3. the [`Uniform`] cost, where every edge costs one unit.
//!
//! Builders start with [`GraphCost`], so a graph that provides costs is
//! searched by them unless the caller passes a function. A graph without the
//! capability is rejected at compile time until the caller opts into
//! [`Uniform`] explicitly. Whether an edge that does not exist has a cost is
//! up to the capability. [`AdjList`](crate::storage::AdjList) reports
//! [`Weight::inf`] for it.
//!
//! The heuristic is resolved the same way: an explicit function, then the
//! [`HeuristicCoster`](super::HeuristicCoster) capability
//! ([`GraphHeuristic`]), then [`Zero`] which makes A* degrade to Dijkstra.
//!
//! Path costs are accumulated with [`Weight::saturating_add`], so a sum that
//! does not fit the weight type becomes [`Weight::inf`] instead of wrapping.

use std::{fmt, ops::Add};

mod ordered_float;

pub use ordered_float::OrderedFloat;

use super::{
    base::EdgeRef,
    graph::{Coster, GraphBase, HeuristicCoster},
};

pub trait Weight: PartialOrd + Add<Self, Output = Self> + Clone + Sized + fmt::Debug {
    type Ord: Ord + From<Self> + Into<Self>;

    fn zero() -> Self;
    fn unit() -> Self;
    fn inf() -> Self;
    fn is_unsigned() -> bool;

    /// Addition clamped at [`inf`](Weight::inf).
    fn saturating_add(self, other: Self) -> Self;
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            type Ord = Self;

            fn zero() -> Self {
                0
            }

            fn unit() -> Self {
                1
            }

            fn inf() -> Self {
                <$ty>::MAX
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }

            fn saturating_add(self, other: Self) -> Self {
                <$ty>::saturating_add(self, other)
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(isize, false);
impl_int_weight!(usize, true);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            type Ord = OrderedFloat<Self>;

            fn zero() -> Self {
                0.0
            }

            fn unit() -> Self {
                1.0
            }

            fn inf() -> Self {
                <$ty>::INFINITY
            }

            fn is_unsigned() -> bool {
                false
            }

            // Infinity absorbs any finite addend.
            fn saturating_add(self, other: Self) -> Self {
                self + other
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);

pub trait GetCost<G: GraphBase, W: Weight> {
    fn get(&self, graph: &G, edge: &EdgeRef<G::NodeId, G::EdgeId>) -> W;
}

pub trait GetHeuristic<G: GraphBase, W: Weight> {
    fn get(&self, graph: &G, from: &G::NodeId, goal: &G::NodeId) -> W;
}

/// Every edge costs [`Weight::unit`], for graphs that do not provide costs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

impl<G: GraphBase, W: Weight> GetCost<G, W> for Uniform {
    fn get(&self, _graph: &G, _edge: &EdgeRef<G::NodeId, G::EdgeId>) -> W {
        W::unit()
    }
}

/// The cost comes from the [`Coster`] capability of the graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphCost;

impl<G: Coster> GetCost<G, G::Cost> for GraphCost {
    fn get(&self, graph: &G, edge: &EdgeRef<G::NodeId, G::EdgeId>) -> G::Cost {
        graph.cost(edge)
    }
}

/// The cost comes from a function given by the caller.
#[derive(Clone, Copy)]
pub struct ExplicitCost<F>(pub F);

impl<F> fmt::Debug for ExplicitCost<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ExplicitCost(..)")
    }
}

impl<G, W, F> GetCost<G, W> for ExplicitCost<F>
where
    G: GraphBase,
    W: Weight,
    F: Fn(&EdgeRef<G::NodeId, G::EdgeId>) -> W,
{
    fn get(&self, _graph: &G, edge: &EdgeRef<G::NodeId, G::EdgeId>) -> W {
        (self.0)(edge)
    }
}

/// The heuristic that estimates zero remaining cost for every node.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl<G: GraphBase, W: Weight> GetHeuristic<G, W> for Zero {
    fn get(&self, _graph: &G, _from: &G::NodeId, _goal: &G::NodeId) -> W {
        W::zero()
    }
}

/// The heuristic comes from the [`HeuristicCoster`] capability of the graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphHeuristic;

impl<G: HeuristicCoster> GetHeuristic<G, G::Cost> for GraphHeuristic {
    fn get(&self, graph: &G, from: &G::NodeId, goal: &G::NodeId) -> G::Cost {
        graph.heuristic_cost(from, goal)
    }
}

/// The heuristic comes from a function given by the caller.
#[derive(Clone, Copy)]
pub struct ExplicitHeuristic<F>(pub F);

impl<F> fmt::Debug for ExplicitHeuristic<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ExplicitHeuristic(..)")
    }
}

impl<G, W, F> GetHeuristic<G, W> for ExplicitHeuristic<F>
where
    G: GraphBase,
    W: Weight,
    F: Fn(&G::NodeId, &G::NodeId) -> W,
{
    fn get(&self, _graph: &G, from: &G::NodeId, goal: &G::NodeId) -> W {
        (self.0)(from, goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        core::{
            id::{EdgeId, NodeId},
            GraphAdd,
        },
        storage::AdjList,
    };

    #[test]
    fn uniform_is_unit() {
        let mut graph = AdjList::<u32, _>::new_directed();
        graph.add_node(NodeId(0));
        graph.add_node(NodeId(1));
        let e = graph.add_edge(NodeId(0), NodeId(1), 7);

        let edge = EdgeRef::new(e, NodeId(0), NodeId(1));
        let cost: u32 = Uniform.get(&graph, &edge);
        assert_eq!(cost, 1);
    }

    #[test]
    fn graph_cost_reads_attribute() {
        let mut graph = AdjList::<u32, _>::new_directed();
        graph.add_node(NodeId(0));
        graph.add_node(NodeId(1));
        let e = graph.add_edge(NodeId(0), NodeId(1), 7);

        let edge = EdgeRef::new(e, NodeId(0), NodeId(1));
        assert_eq!(GraphCost.get(&graph, &edge), 7);
    }

    #[test]
    fn explicit_ignores_attribute() {
        let mut graph = AdjList::<u32, _>::new_directed();
        graph.add_node(NodeId(0));
        graph.add_node(NodeId(1));
        let e = graph.add_edge(NodeId(0), NodeId(1), 7);

        let explicit = ExplicitCost(|_: &EdgeRef<NodeId, EdgeId>| 3u32);
        let edge = EdgeRef::new(e, NodeId(0), NodeId(1));
        assert_eq!(explicit.get(&graph, &edge), 3);
    }

    #[test]
    fn saturating_add_clamps_at_inf() {
        assert_eq!(Weight::saturating_add(4_000_000_000u32, 400_000_000), u32::inf());
        assert_eq!(Weight::saturating_add(i8::MAX, 1), i8::inf());
        assert_eq!(Weight::saturating_add(2u64, 3), 5);
        assert_eq!(Weight::saturating_add(f64::inf(), 1.0), f64::inf());
        assert_eq!(Weight::saturating_add(0.5f32, 0.25), 0.75);
    }
}
