use super::{id::IdType, marker::Direction};

/// An edge as seen by cost oracles and spanning tree builders.
///
/// For undirected graphs, `from` and `to` reflect the orientation of the query
/// that produced the reference, not a stored direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeRef<NI: IdType, EI: IdType> {
    pub id: EI,
    pub from: NI,
    pub to: NI,
}

impl<NI: IdType, EI: IdType> EdgeRef<NI, EI> {
    pub fn new(id: EI, from: NI, to: NI) -> Self {
        Self { id, from, to }
    }

    pub fn id(&self) -> &EI {
        &self.id
    }

    pub fn from(&self) -> &NI {
        &self.from
    }

    pub fn to(&self) -> &NI {
        &self.to
    }
}

/// A neighbor of a node reached over an edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NeighborRef<NI: IdType, EI: IdType> {
    /// The neighbor.
    pub id: NI,
    /// The edge connecting the neighbor.
    pub edge: EI,
    /// The node whose neighbors are being enumerated.
    pub pred: NI,
    /// Direction of the edge relative to `pred`.
    pub dir: Direction,
}

impl<NI: IdType, EI: IdType> NeighborRef<NI, EI> {
    pub fn id(&self) -> &NI {
        &self.id
    }

    pub fn edge(&self) -> &EI {
        &self.edge
    }

    pub fn pred(&self) -> &NI {
        &self.pred
    }

    pub fn dir(&self) -> Direction {
        self.dir
    }

    /// Converts the neighbor to an edge reference oriented from `pred` to the
    /// neighbor in the case of outgoing direction and the other way around
    /// otherwise.
    pub fn to_edge(&self) -> EdgeRef<NI, EI> {
        let (from, to) = match self.dir {
            Direction::Outgoing => (self.pred.clone(), self.id.clone()),
            Direction::Incoming => (self.id.clone(), self.pred.clone()),
        };
        EdgeRef::new(self.edge.clone(), from, to)
    }
}
