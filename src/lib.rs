//! Graph search and analysis algorithms over an abstract graph capability
//! interface.
//!
//! The algorithms never own or mutate the graph they analyze. They consume
//! the capability traits from [`core`] (node enumeration, neighbor lookup,
//! edge lookup and optional cost and heuristic providers) and return
//! self-contained results.
//!
//! # Examples
//!
//! ```
//! use pathgraph::{
//!     algo::ShortestPathTree,
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
//! graph.add_edge(a, b, 1u32);
//! graph.add_edge(a, c, 4);
//! graph.add_edge(b, c, 2);
//! graph.add_edge(b, d, 5);
//! graph.add_edge(c, d, 1);
//!
//! let tree = ShortestPathTree::on(&graph).run(a).unwrap();
//! let (path, dist) = tree.path_to(&d);
//!
//! assert_eq!(dist, 4);
//! assert_eq!(path, vec![a, b, c, d]);
//! ```

pub mod algo;
pub mod common;
pub mod core;
#[doc(hidden)]
pub mod infra;
pub mod storage;
pub mod visit;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        core::{
            base::{EdgeRef, NeighborRef},
            EdgeList, GraphAdd, GraphBase, Neighbors, NodeList,
        },
        visit::Visitor,
    };
}
