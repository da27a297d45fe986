//! Iterative graph traversal.
//!
//! Traversals keep their own stack instead of recursing, so they are not
//! limited by the size of the program stack. Their state does not borrow the
//! graph, the graph is passed to every step instead.
//!
//! The order in which neighbors of a node are discovered follows the storage
//! and should not be relied upon.

pub mod dfs;
mod visit_set;

#[doc(inline)]
pub use self::{
    dfs::{Dfs, DfsRooted},
    visit_set::VisitSet,
};

/// A traversal producing nodes one step at a time.
pub trait Visitor<G> {
    type Item;

    /// Performs one step of the traversal on given graph.
    fn visit_next(&mut self, graph: &G) -> Option<Self::Item>;

    /// Turns the traversal into an [iterator](Iterator) over given graph.
    fn into_iter(self, graph: &G) -> Walk<'_, Self, G>
    where
        Self: Sized,
    {
        Walk {
            visitor: self,
            graph,
        }
    }
}

/// Iterator returned from [`Visitor::into_iter`].
pub struct Walk<'a, V, G> {
    visitor: V,
    graph: &'a G,
}

impl<V, G> Iterator for Walk<'_, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}
