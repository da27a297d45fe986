//! Find a [topologically sorted] sequence of nodes on a [directed acyclic
//! graph] (DAG).
//!
//! The order is derived from the strongly connected components of the graph.
//! If the graph contains cycles, the run fails with [`Unorderable`] error,
//! which still carries the partial order: every cyclic component (including
//! a single node with a self-loop) is represented by a `None` placeholder at
//! its topological position, and the components themselves are listed in the
//! error with members sorted by identity.
//!
//! [topologically sorted]: https://en.wikipedia.org/wiki/Topological_sorting
//! [directed acyclic graph]:
//!     https://en.wikipedia.org/wiki/Directed_acyclic_graph
//!
//! # Examples
//!
//! ```
//! use pathgraph::{
//!     algo::TopoSort,
//!     core::{id::NodeId, GraphAdd},
//!     storage::AdjList,
//! };
//!
//! let mut graph = AdjList::new_directed();
//!
//! let [a, b, c, d] = [0, 1, 2, 3].map(NodeId::from);
//! for node in [a, b, c, d] {
//!     graph.add_node(node);
//! }
//!
//! graph.add_edge(a, b, ());
//! graph.add_edge(b, c, ());
//! graph.add_edge(c, a, ());
//! graph.add_edge(d, a, ());
//!
//! let error = TopoSort::on(&graph).run().unwrap_err();
//!
//! assert_eq!(error.components(), &[vec![a, b, c]]);
//! assert_eq!(error.partial_order(), &[Some(d), None]);
//! assert_eq!(
//!     error.to_string(),
//!     "no topological ordering: cyclic components: [[0, 1, 2]]"
//! );
//! ```

use std::{fmt, marker::PhantomData};

use thiserror::Error;
use tracing::{debug, instrument};

use crate::core::{id::IdType, marker::Directed, GraphBase, Neighbors, NodeList};

use super::{connected_components::tarjan, setup::Setup};

// Longer errors are summarized.
const MAX_LISTED_NODES: usize = 10;

/// Topological sort of a directed graph.
///
/// See [module](self) documentation for more details and example.
pub struct TopoSort<G>(PhantomData<fn() -> G>);

pub struct TopoSortBuilder<'a, G> {
    graph: &'a G,
}

impl<G> TopoSort<G>
where
    G: GraphBase<EdgeType = Directed>,
{
    pub fn on(graph: &G) -> TopoSortBuilder<'_, G> {
        TopoSortBuilder { graph }
    }
}

impl<'a, G> TopoSortBuilder<'a, G>
where
    G: GraphBase<EdgeType = Directed>,
{
    /// Returns the nodes in an order where every edge points from an earlier
    /// node to a later one, or [`Unorderable`] if there are cycles.
    pub fn run(self) -> Result<Vec<G::NodeId>, Unorderable<G>>
    where
        G: Neighbors + NodeList,
    {
        sort(&Setup::structural(self.graph))
    }
}

#[instrument(level = "debug", skip_all, fields(nodes = setup.graph.node_count()))]
fn sort<G, C, H>(setup: &Setup<'_, G, C, H>) -> Result<Vec<G::NodeId>, Unorderable<G>>
where
    G: Neighbors + NodeList,
{
    let components = tarjan(setup);

    let mut order = Vec::with_capacity(components.len());
    let mut cyclic = Vec::new();

    for mut component in components {
        let is_cyclic = match component.as_slice() {
            [node] => setup.successors(node).any(|neighbor| &neighbor.id == node),
            _ => true,
        };

        if is_cyclic {
            component.sort();
            cyclic.push(component);
            order.push(None);
        } else {
            order.push(component.pop());
        }
    }

    order.reverse();

    if cyclic.is_empty() {
        debug!("graph is acyclic");
        return Ok(order.into_iter().flatten().collect());
    }

    cyclic.reverse();
    debug!(components = cyclic.len(), "graph is cyclic");

    Err(Unorderable {
        components: cyclic,
        partial: order,
    })
}

/// The error of a [`TopoSort`] run on a graph with cycles.
#[derive(Error)]
#[error("no topological ordering: {}", describe(.components))]
pub struct Unorderable<G: GraphBase> {
    components: Vec<Vec<G::NodeId>>,
    partial: Vec<Option<G::NodeId>>,
}

impl<G> Unorderable<G>
where
    G: GraphBase,
{
    /// Cyclic components in topological order, each sorted by identity.
    pub fn components(&self) -> &[Vec<G::NodeId>] {
        &self.components
    }

    /// Topological order of the nodes with a `None` placeholder at the
    /// position of each cyclic component.
    pub fn partial_order(&self) -> &[Option<G::NodeId>] {
        &self.partial
    }

    pub fn into_partial_order(self) -> Vec<Option<G::NodeId>> {
        self.partial
    }
}

fn describe<I: IdType>(components: &[Vec<I>]) -> String {
    let nodes = components.iter().map(Vec::len).sum::<usize>();

    if nodes > MAX_LISTED_NODES {
        return format!("{nodes} nodes in {} cyclic components", components.len());
    }

    let listed = components
        .iter()
        .map(|component| {
            let members = component
                .iter()
                .map(|id| id.as_bits().to_string())
                .collect::<Vec<_>>();
            format!("[{}]", members.join(", "))
        })
        .collect::<Vec<_>>();

    format!("cyclic components: [{}]", listed.join(", "))
}

impl<G> fmt::Debug for Unorderable<G>
where
    G: GraphBase,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unorderable")
            .field("components", &self.components)
            .field("partial", &self.partial)
            .finish()
    }
}

impl<G> Clone for Unorderable<G>
where
    G: GraphBase,
{
    fn clone(&self) -> Self {
        Self {
            components: self.components.clone(),
            partial: self.partial.clone(),
        }
    }
}

impl<G> PartialEq for Unorderable<G>
where
    G: GraphBase,
{
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components && self.partial == other.partial
    }
}

impl<G> Eq for Unorderable<G> where G: GraphBase {}
