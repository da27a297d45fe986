//! Find (strongly) [connected] components in a graph.
//!
//! Weakly connected components treat every edge as undirected, regardless of
//! the graph kind. Strongly connected components are found by [Tarjan's
//! algorithm] and are reported in reverse topological order of the
//! condensation of the graph.
//!
//! Tarjan's algorithm is recursive, so the depth of the program stack grows
//! with the length of the longest simple path discovered by the traversal.
//! Very deep graphs may exhaust the stack.
//!
//! # Examples
//!
//! ```
//! use pathgraph::{
//!     algo::{ConnectedComponents, StronglyConnected},
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
//! graph.add_edge(c, d, ());
//!
//! assert_eq!(ConnectedComponents::on(&graph).run().len(), 1);
//!
//! let strong = StronglyConnected::on(&graph).run();
//! assert_eq!(strong.len(), 2);
//! // The sink component comes first.
//! assert_eq!(strong.iter().next(), Some(&[d][..]));
//! ```
//!
//! [connected]: https://en.wikipedia.org/wiki/Connectivity_(graph_theory)
//! [Tarjan's algorithm]:
//!     https://en.wikipedia.org/wiki/Tarjan%27s_strongly_connected_components_algorithm

use crate::core::GraphBase;

mod builder;
mod dfs;
mod tarjan;

pub use builder::{ConnectedComponentsBuilder, StronglyConnectedBuilder};

pub(crate) use tarjan::tarjan;

/// Connected components of a graph.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct ConnectedComponents<G: GraphBase> {
    components: Vec<Vec<G::NodeId>>,
}

/// Strongly connected components of a graph.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct StronglyConnected<G: GraphBase> {
    inner: ConnectedComponents<G>,
}

impl<G> ConnectedComponents<G>
where
    G: GraphBase,
{
    /// Returns the number of components.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns an iterator of the components.
    pub fn iter(&self) -> Iter<'_, G> {
        Iter {
            inner: self.components.iter(),
        }
    }

    pub fn into_vec(self) -> Vec<Vec<G::NodeId>> {
        self.components
    }
}

impl<G> StronglyConnected<G>
where
    G: GraphBase,
{
    /// Returns the number of components.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns an iterator of the components in reverse topological order.
    pub fn iter(&self) -> Iter<'_, G> {
        self.inner.iter()
    }

    pub fn into_vec(self) -> Vec<Vec<G::NodeId>> {
        self.inner.into_vec()
    }
}

pub struct Iter<'a, G: GraphBase> {
    inner: std::slice::Iter<'a, Vec<G::NodeId>>,
}

impl<'a, G> Iterator for Iter<'a, G>
where
    G: GraphBase,
{
    type Item = &'a [G::NodeId];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|component| component.as_slice())
    }
}
