use rustc_hash::FxHashSet;

use crate::core::{marker::Direction, GraphBase, Neighbors};

use super::{VisitSet, Visitor};

/// Iterative depth-first traversal in preorder.
///
/// The visited set is kept between calls to [`start`](Dfs::start), so
/// starting from multiple roots visits every node at most once.
pub struct Dfs<G>
where
    G: GraphBase,
{
    stack: Vec<G::NodeId>,
    visited: FxHashSet<G::NodeId>,
    undirected: bool,
}

pub struct DfsRooted<'a, G>
where
    G: GraphBase,
{
    stack: &'a mut Vec<G::NodeId>,
    visited: &'a mut FxHashSet<G::NodeId>,
    undirected: bool,
}

impl<G> Dfs<G>
where
    G: GraphBase,
{
    /// Traversal following outgoing edges.
    pub fn new(graph: &G) -> Self {
        let mut visited = FxHashSet::default();
        visited.reserve(graph.node_count_hint().unwrap_or(32));

        Self {
            stack: Vec::new(),
            visited,
            undirected: false,
        }
    }

    /// Traversal following edges in both directions, regardless of whether
    /// the graph is directed.
    pub fn new_undirected(graph: &G) -> Self {
        Self {
            undirected: true,
            ..Self::new(graph)
        }
    }

    pub fn start(&mut self, root: G::NodeId) -> DfsRooted<'_, G> {
        self.stack.clear();
        self.stack.push(root);

        DfsRooted {
            stack: &mut self.stack,
            visited: &mut self.visited,
            undirected: self.undirected,
        }
    }

    pub fn reset(&mut self) {
        self.stack.clear();
        self.visited.reset_visited();
    }

    pub fn visited(&self) -> &impl VisitSet<G::NodeId> {
        &self.visited
    }
}

impl<G> Visitor<G> for DfsRooted<'_, G>
where
    G: Neighbors,
{
    type Item = G::NodeId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if !self.visited.visit(node.clone()) {
                continue;
            }

            let neighbors = if self.undirected {
                graph.neighbors_undirected(&node)
            } else {
                graph.neighbors_directed(&node, Direction::Outgoing)
            };

            for neighbor in neighbors {
                if !self.visited.is_visited(&neighbor.id) {
                    self.stack.push(neighbor.id);
                }
            }

            return Some(node);
        }

        None
    }
}
