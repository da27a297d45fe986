//! Collection of graph algorithms.
//!
//! Every algorithm is configured through a builder obtained from
//! `on(&graph)` on its result type and executed by `run`. Edge costs come from
//! the [`Coster`](crate::core::Coster) capability of the graph unless an
//! explicit function is given by `cost`. Graphs without the capability opt
//! into [uniform](crate::core::cost::Uniform) costs by `uniform`.

pub mod all_shortest_paths;
pub mod astar;
pub mod cliques;
pub mod connected_components;
pub mod degeneracy;
pub mod dominators;
mod path;
mod setup;
pub mod shortest_paths;
pub mod spanning_tree;
pub mod toposort;

#[doc(inline)]
pub use self::{
    all_shortest_paths::AllShortestPaths,
    astar::{AStar, AStarPath},
    cliques::{MaximalCliques, Pivot},
    connected_components::{ConnectedComponents, StronglyConnected},
    degeneracy::{Degeneracy, VertexOrdering},
    dominators::{DominatorMap, Dominators, PostDominators},
    path::is_path,
    shortest_paths::ShortestPathTree,
    spanning_tree::SpanningTree,
    toposort::{TopoSort, Unorderable},
};
