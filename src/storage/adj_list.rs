//! Adjacency list keyed by caller-chosen stable node identities.
//!
//! The storage is add-only. It implements every capability trait the
//! algorithms consume, and it provides the edge cost through [`Coster`] when
//! the edge attribute is a [`Weight`]. Nodes carry no geometry, so the
//! [`HeuristicCoster`] estimate is always zero.

use std::{iter::Copied, marker::PhantomData, ops::Range, slice};

use rustc_hash::FxHashMap;

use crate::core::{
    base::{EdgeRef, NeighborRef},
    error::{AddEdgeError, AddEdgeErrorKind, AddNodeError},
    id::{EdgeId, NodeId},
    marker::{Directed, Direction, EdgeType, Undirected},
    Coster, EdgeList, GraphAdd, GraphBase, GraphRef, HeuristicCoster, Neighbors, NodeList,
    Weight,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjList<E, Ty> {
    ids: Vec<NodeId>,
    index: FxHashMap<NodeId, usize>,
    adjacency: Vec<[Vec<EdgeId>; 2]>,
    edges: Vec<E>,
    endpoints: Vec<[NodeId; 2]>,
    ty: PhantomData<fn() -> Ty>,
}

impl<E, Ty: EdgeType> AdjList<E, Ty> {
    pub fn new() -> Self {
        Self {
            ids: Vec::new(),
            index: FxHashMap::default(),
            adjacency: Vec::new(),
            edges: Vec::new(),
            endpoints: Vec::new(),
            ty: PhantomData,
        }
    }

    fn adjacency(&self, id: &NodeId) -> Option<&[Vec<EdgeId>; 2]> {
        self.index.get(id).map(|&slot| &self.adjacency[slot])
    }

    fn neighbors_in(&self, from: &NodeId, dirs: [Option<Direction>; 2]) -> NeighborsIter<'_> {
        const EMPTY: &[EdgeId] = &[];

        let lists = match self.adjacency(from) {
            Some(adjacency) => dirs.map(|dir| match dir {
                Some(dir) if Ty::is_directed() => adjacency[dir.index()].as_slice(),
                // Undirected edges are stored in the outgoing list only.
                Some(_) => adjacency[Direction::Outgoing.index()].as_slice(),
                None => EMPTY,
            }),
            None => [EMPTY, EMPTY],
        };

        NeighborsIter {
            src: *from,
            lists,
            dirs: dirs.map(|dir| dir.unwrap_or(Direction::Outgoing)),
            endpoints: self.endpoints.as_slice(),
            list: 0,
            pos: 0,
        }
    }
}

impl<E> AdjList<E, Directed> {
    pub fn new_directed() -> Self {
        Self::new()
    }
}

impl<E> AdjList<E, Undirected> {
    pub fn new_undirected() -> Self {
        Self::new()
    }
}

impl<E, Ty: EdgeType> Default for AdjList<E, Ty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, Ty: EdgeType> GraphBase for AdjList<E, Ty> {
    type NodeId = NodeId;
    type EdgeId = EdgeId;
    type EdgeType = Ty;

    fn node_count_hint(&self) -> Option<usize> {
        Some(self.ids.len())
    }
}

impl<E, Ty: EdgeType> Neighbors for AdjList<E, Ty> {
    type NeighborsIter<'a> = NeighborsIter<'a>
    where
        Self: 'a;

    fn neighbors_undirected(&self, from: &NodeId) -> Self::NeighborsIter<'_> {
        if Ty::is_directed() {
            self.neighbors_in(from, [Some(Direction::Outgoing), Some(Direction::Incoming)])
        } else {
            self.neighbors_in(from, [Some(Direction::Outgoing), None])
        }
    }

    fn neighbors_directed(&self, from: &NodeId, dir: Direction) -> Self::NeighborsIter<'_> {
        self.neighbors_in(from, [Some(dir), None])
    }
}

impl<E, Ty: EdgeType> NodeList for AdjList<E, Ty> {
    type NodesByIdIter<'a> = Copied<slice::Iter<'a, NodeId>>
    where
        Self: 'a;

    fn nodes_by_id(&self) -> Self::NodesByIdIter<'_> {
        self.ids.iter().copied()
    }

    fn node_count(&self) -> usize {
        self.ids.len()
    }

    fn contains_node(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }
}

impl<E, Ty: EdgeType> EdgeList for AdjList<E, Ty> {
    type EdgesByIdIter<'a> = EdgeIds
    where
        Self: 'a;

    fn edges_by_id(&self) -> Self::EdgesByIdIter<'_> {
        EdgeIds(0..self.edges.len() as u64)
    }

    fn endpoints(&self, id: &EdgeId) -> Option<(NodeId, NodeId)> {
        self.endpoints
            .get(id.0 as usize)
            .map(|endpoints| (endpoints[0], endpoints[1]))
    }

    fn edge_id(&self, from: &NodeId, to: &NodeId) -> Option<EdgeId> {
        let adjacency = self.adjacency(from)?;

        adjacency[Direction::Outgoing.index()]
            .iter()
            .copied()
            .find(|edge| {
                let [src, dst] = self.endpoints[edge.0 as usize];
                (src == *from && dst == *to) || (!Ty::is_directed() && src == *to && dst == *from)
            })
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<E, Ty: EdgeType> GraphRef<E> for AdjList<E, Ty> {
    fn edge(&self, id: &EdgeId) -> Option<&E> {
        self.edges.get(id.0 as usize)
    }
}

impl<E, Ty: EdgeType> GraphAdd<E> for AdjList<E, Ty> {
    fn try_add_node(&mut self, id: NodeId) -> Result<(), AddNodeError<NodeId>> {
        if self.index.contains_key(&id) {
            return Err(AddNodeError::new(id));
        }

        self.index.insert(id, self.ids.len());
        self.ids.push(id);
        self.adjacency.push([Vec::new(), Vec::new()]);
        Ok(())
    }

    fn try_add_edge(
        &mut self,
        from: &NodeId,
        to: &NodeId,
        attr: E,
    ) -> Result<EdgeId, AddEdgeError<E>> {
        let Some(&src) = self.index.get(from) else {
            return Err(AddEdgeError::new(attr, AddEdgeErrorKind::SourceAbsent));
        };

        let Some(&dst) = self.index.get(to) else {
            return Err(AddEdgeError::new(attr, AddEdgeErrorKind::DestinationAbsent));
        };

        let id = EdgeId(self.edges.len() as u64);
        self.edges.push(attr);
        self.endpoints.push([*from, *to]);

        if Ty::is_directed() {
            self.adjacency[src][Direction::Outgoing.index()].push(id);
            self.adjacency[dst][Direction::Incoming.index()].push(id);
        } else {
            self.adjacency[src][Direction::Outgoing.index()].push(id);
            // A self-loop is yielded just once.
            if src != dst {
                self.adjacency[dst][Direction::Outgoing.index()].push(id);
            }
        }

        Ok(id)
    }
}

impl<E, Ty> Coster for AdjList<E, Ty>
where
    E: Weight,
    Ty: EdgeType,
{
    type Cost = E;

    fn cost(&self, edge: &EdgeRef<NodeId, EdgeId>) -> E {
        self.edge(&edge.id).cloned().unwrap_or_else(E::inf)
    }
}

impl<E, Ty> HeuristicCoster for AdjList<E, Ty>
where
    E: Weight,
    Ty: EdgeType,
{
    type Cost = E;

    fn heuristic_cost(&self, _from: &NodeId, _to: &NodeId) -> E {
        E::zero()
    }
}

pub struct NeighborsIter<'a> {
    src: NodeId,
    lists: [&'a [EdgeId]; 2],
    dirs: [Direction; 2],
    endpoints: &'a [[NodeId; 2]],
    list: usize,
    pos: usize,
}

impl Iterator for NeighborsIter<'_> {
    type Item = NeighborRef<NodeId, EdgeId>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let list = self.lists.get(self.list)?;

            match list.get(self.pos) {
                Some(&edge) => {
                    self.pos += 1;

                    let [from, to] = self.endpoints[edge.0 as usize];
                    let id = if from == self.src { to } else { from };

                    return Some(NeighborRef {
                        id,
                        edge,
                        pred: self.src,
                        dir: self.dirs[self.list],
                    });
                }
                None => {
                    self.list += 1;
                    self.pos = 0;
                }
            }
        }
    }
}

pub struct EdgeIds(Range<u64>);

impl Iterator for EdgeIds {
    type Item = EdgeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(EdgeId)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn v(id: u64) -> NodeId {
        NodeId(id)
    }

    #[test]
    fn add_node_twice() {
        let mut graph = AdjList::<(), _>::new_directed();
        graph.add_node(v(3));

        assert_matches!(graph.try_add_node(v(3)), Err(AddNodeError { id }) if id == v(3));
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn add_edge_absent_endpoint() {
        let mut graph = AdjList::new_directed();
        graph.add_node(v(0));

        assert_matches!(
            graph.try_add_edge(&v(0), &v(1), ()),
            Err(AddEdgeError {
                kind: AddEdgeErrorKind::DestinationAbsent,
                ..
            })
        );
        assert_matches!(
            graph.try_add_edge(&v(1), &v(0), ()),
            Err(AddEdgeError {
                kind: AddEdgeErrorKind::SourceAbsent,
                ..
            })
        );
    }

    #[test]
    fn nodes_keep_insertion_order() {
        let mut graph = AdjList::<(), _>::new_undirected();
        for id in [10, 3, 7] {
            graph.add_node(v(id));
        }

        assert_eq!(graph.nodes_by_id().collect::<Vec<_>>(), vec![v(10), v(3), v(7)]);
        assert!(graph.contains_node(&v(3)));
        assert!(!graph.contains_node(&v(4)));
    }

    #[test]
    fn neighbors_directed() {
        let mut graph = AdjList::new_directed();
        for id in 0..3 {
            graph.add_node(v(id));
        }

        graph.add_edge(v(0), v(1), ());
        graph.add_edge(v(2), v(0), ());

        let out = graph
            .neighbors_directed(&v(0), Direction::Outgoing)
            .map(|n| n.id)
            .collect::<Vec<_>>();
        let inc = graph
            .neighbors_directed(&v(0), Direction::Incoming)
            .map(|n| n.id)
            .collect::<Vec<_>>();
        let all = graph
            .neighbors_undirected(&v(0))
            .map(|n| (n.id, n.dir))
            .collect::<Vec<_>>();

        assert_eq!(out, vec![v(1)]);
        assert_eq!(inc, vec![v(2)]);
        assert_eq!(
            all,
            vec![(v(1), Direction::Outgoing), (v(2), Direction::Incoming)]
        );
    }

    #[test]
    fn neighbors_undirected_ignores_direction() {
        let mut graph = AdjList::new_undirected();
        for id in 0..3 {
            graph.add_node(v(id));
        }

        graph.add_edge(v(0), v(1), ());
        graph.add_edge(v(2), v(0), ());
        graph.add_edge(v(0), v(0), ());

        let mut incoming = graph
            .neighbors_directed(&v(0), Direction::Incoming)
            .map(|n| n.id)
            .collect::<Vec<_>>();
        incoming.sort();

        assert_eq!(incoming, vec![v(0), v(1), v(2)]);
        assert_eq!(graph.degree_undirected(&v(0)), 4);
    }

    #[test]
    fn neighbors_of_missing_node() {
        let graph = AdjList::<(), _>::new_directed();
        assert_eq!(graph.neighbors_undirected(&v(0)).count(), 0);
    }

    #[test]
    fn edge_lookup() {
        let mut graph = AdjList::new_directed();
        for id in 0..3 {
            graph.add_node(v(id));
        }

        let e = graph.add_edge(v(0), v(1), 5u32);

        assert_eq!(graph.edge_id(&v(0), &v(1)), Some(e));
        assert_eq!(graph.edge_id(&v(1), &v(0)), None);
        assert_eq!(graph.edge_id_any(&v(1), &v(0)), Some(e));
        assert_eq!(graph.endpoints(&e), Some((v(0), v(1))));
        assert_eq!(graph.edge(&e), Some(&5));
    }

    #[test]
    fn edge_lookup_undirected() {
        let mut graph = AdjList::new_undirected();
        for id in 0..2 {
            graph.add_node(v(id));
        }

        let e = graph.add_edge(v(0), v(1), 5u32);

        assert_eq!(graph.edge_id(&v(1), &v(0)), Some(e));
        assert_eq!(graph.edges_by_id().collect::<Vec<_>>(), vec![e]);
    }

    #[test]
    fn cost_of_missing_edge_is_inf() {
        let graph = AdjList::<u32, _>::new_directed();
        let edge = EdgeRef::new(EdgeId(0), v(0), v(1));

        assert_eq!(graph.cost(&edge), u32::MAX);
    }

    #[test]
    fn heuristic_is_zero() {
        let graph: AdjList<f64, Undirected> = AdjList::new_undirected();

        assert_eq!(graph.heuristic_cost(&v(0), &v(7)), 0.0);
    }
}
