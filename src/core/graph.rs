use super::{
    base::{EdgeRef, NeighborRef},
    cost::Weight,
    error::{AddEdgeError, AddNodeError},
    id::IdType,
    marker::{Direction, EdgeType},
};

pub trait GraphBase {
    type NodeId: IdType;
    type EdgeId: IdType;
    type EdgeType: EdgeType;

    fn is_directed(&self) -> bool {
        Self::EdgeType::is_directed()
    }

    // Upper bound, if known.
    fn node_count_hint(&self) -> Option<usize> {
        None
    }
}

/// Neighbor lookup.
///
/// For undirected graphs, `neighbors_directed` yields all neighbors regardless
/// of the direction, i.e., it is equivalent to `neighbors_undirected`.
pub trait Neighbors: GraphBase {
    type NeighborsIter<'a>: Iterator<Item = NeighborRef<Self::NodeId, Self::EdgeId>>
    where
        Self: 'a;

    fn neighbors_undirected(&self, from: &Self::NodeId) -> Self::NeighborsIter<'_>;
    fn neighbors_directed(&self, from: &Self::NodeId, dir: Direction) -> Self::NeighborsIter<'_>;

    fn degree_undirected(&self, id: &Self::NodeId) -> usize {
        if Self::EdgeType::is_directed() {
            self.degree_directed(id, Direction::Outgoing)
                + self.degree_directed(id, Direction::Incoming)
        } else {
            self.degree_directed(id, Direction::Outgoing)
        }
    }

    fn degree_directed(&self, id: &Self::NodeId, dir: Direction) -> usize {
        if Self::EdgeType::is_directed() {
            self.neighbors_directed(id, dir).count()
        } else {
            // Storages yield a self-loop just once, but it counts twice.
            self.neighbors_directed(id, dir)
                .map(|neighbor| if &neighbor.id == id { 2 } else { 1 })
                .sum()
        }
    }
}

pub trait NodeList: GraphBase {
    type NodesByIdIter<'a>: Iterator<Item = Self::NodeId>
    where
        Self: 'a;

    fn nodes_by_id(&self) -> Self::NodesByIdIter<'_>;

    fn node_count(&self) -> usize {
        self.nodes_by_id().count()
    }

    fn contains_node(&self, id: &Self::NodeId) -> bool {
        self.nodes_by_id().any(|node| &node == id)
    }
}

pub trait EdgeList: GraphBase {
    type EdgesByIdIter<'a>: Iterator<Item = Self::EdgeId>
    where
        Self: 'a;

    fn edges_by_id(&self) -> Self::EdgesByIdIter<'_>;

    /// Returns the endpoints of the edge in the order they were added.
    fn endpoints(&self, id: &Self::EdgeId) -> Option<(Self::NodeId, Self::NodeId)>;

    /// Finds an edge from `from` to `to`.
    ///
    /// For undirected graphs, the orientation of the endpoints does not matter.
    fn edge_id(&self, from: &Self::NodeId, to: &Self::NodeId) -> Option<Self::EdgeId>;

    fn edge_count(&self) -> usize {
        self.edges_by_id().count()
    }

    /// Finds an edge between `a` and `b` in any orientation, even in directed
    /// graphs.
    fn edge_id_any(&self, a: &Self::NodeId, b: &Self::NodeId) -> Option<Self::EdgeId> {
        self.edge_id(a, b).or_else(|| self.edge_id(b, a))
    }

    fn contains_edge_between(&self, from: &Self::NodeId, to: &Self::NodeId) -> bool {
        self.edge_id(from, to).is_some()
    }

    fn edge_ref(&self, id: &Self::EdgeId) -> Option<EdgeRef<Self::NodeId, Self::EdgeId>> {
        self.endpoints(id).map(|(from, to)| EdgeRef::new(id.clone(), from, to))
    }
}

pub trait GraphRef<E>: EdgeList {
    fn edge(&self, id: &Self::EdgeId) -> Option<&E>;
}

/// Mutable surface used only for writing results into a caller-supplied
/// graph.
pub trait GraphAdd<E>: GraphBase {
    fn try_add_node(&mut self, id: Self::NodeId) -> Result<(), AddNodeError<Self::NodeId>>;

    fn try_add_edge(
        &mut self,
        from: &Self::NodeId,
        to: &Self::NodeId,
        attr: E,
    ) -> Result<Self::EdgeId, AddEdgeError<E>>;

    fn add_node(&mut self, id: Self::NodeId) {
        match self.try_add_node(id) {
            Ok(()) => {}
            Err(error) => panic!("{error}"),
        }
    }

    fn add_edge(&mut self, from: Self::NodeId, to: Self::NodeId, attr: E) -> Self::EdgeId {
        match self.try_add_edge(&from, &to, attr) {
            Ok(id) => id,
            Err(error) => panic!("{error}"),
        }
    }
}

/// Graph-provided edge cost.
pub trait Coster: GraphBase {
    type Cost: Weight;

    fn cost(&self, edge: &EdgeRef<Self::NodeId, Self::EdgeId>) -> Self::Cost;
}

/// Graph-provided estimate of the remaining cost between two nodes.
pub trait HeuristicCoster: GraphBase {
    type Cost: Weight;

    fn heuristic_cost(&self, from: &Self::NodeId, to: &Self::NodeId) -> Self::Cost;
}

impl<G> GraphBase for &G
where
    G: GraphBase,
{
    type NodeId = G::NodeId;
    type EdgeId = G::EdgeId;
    type EdgeType = G::EdgeType;

    fn node_count_hint(&self) -> Option<usize> {
        (**self).node_count_hint()
    }
}

impl<G> Neighbors for &G
where
    G: Neighbors,
{
    type NeighborsIter<'a> = G::NeighborsIter<'a>
    where
        Self: 'a;

    fn neighbors_undirected(&self, from: &Self::NodeId) -> Self::NeighborsIter<'_> {
        (**self).neighbors_undirected(from)
    }

    fn neighbors_directed(&self, from: &Self::NodeId, dir: Direction) -> Self::NeighborsIter<'_> {
        (**self).neighbors_directed(from, dir)
    }

    fn degree_undirected(&self, id: &Self::NodeId) -> usize {
        (**self).degree_undirected(id)
    }

    fn degree_directed(&self, id: &Self::NodeId, dir: Direction) -> usize {
        (**self).degree_directed(id, dir)
    }
}

impl<G> NodeList for &G
where
    G: NodeList,
{
    type NodesByIdIter<'a> = G::NodesByIdIter<'a>
    where
        Self: 'a;

    fn nodes_by_id(&self) -> Self::NodesByIdIter<'_> {
        (**self).nodes_by_id()
    }

    fn node_count(&self) -> usize {
        (**self).node_count()
    }

    fn contains_node(&self, id: &Self::NodeId) -> bool {
        (**self).contains_node(id)
    }
}

impl<G> EdgeList for &G
where
    G: EdgeList,
{
    type EdgesByIdIter<'a> = G::EdgesByIdIter<'a>
    where
        Self: 'a;

    fn edges_by_id(&self) -> Self::EdgesByIdIter<'_> {
        (**self).edges_by_id()
    }

    fn endpoints(&self, id: &Self::EdgeId) -> Option<(Self::NodeId, Self::NodeId)> {
        (**self).endpoints(id)
    }

    fn edge_id(&self, from: &Self::NodeId, to: &Self::NodeId) -> Option<Self::EdgeId> {
        (**self).edge_id(from, to)
    }

    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }
}

impl<G, E> GraphRef<E> for &G
where
    G: GraphRef<E>,
{
    fn edge(&self, id: &Self::EdgeId) -> Option<&E> {
        (**self).edge(id)
    }
}

impl<G> Coster for &G
where
    G: Coster,
{
    type Cost = G::Cost;

    fn cost(&self, edge: &EdgeRef<Self::NodeId, Self::EdgeId>) -> Self::Cost {
        (**self).cost(edge)
    }
}

impl<G> HeuristicCoster for &G
where
    G: HeuristicCoster,
{
    type Cost = G::Cost;

    fn heuristic_cost(&self, from: &Self::NodeId, to: &Self::NodeId) -> Self::Cost {
        (**self).heuristic_cost(from, to)
    }
}
