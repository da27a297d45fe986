use crate::core::{
    base::{EdgeRef, NeighborRef},
    cost::{GetCost, GetHeuristic, Uniform, Zero},
    marker::Direction,
    EdgeList, GraphBase, Neighbors, Weight,
};

/// Configuration resolved once by a builder before running an algorithm.
///
/// The graph capabilities are never queried again during the run: the
/// traversal direction and the cost and heuristic providers are fixed here.
pub(crate) struct Setup<'a, G, C = Uniform, H = Zero> {
    pub graph: &'a G,
    pub directed: bool,
    cost: C,
    heuristic: H,
}

impl<'a, G> Setup<'a, G>
where
    G: GraphBase,
{
    pub fn structural(graph: &'a G) -> Self {
        Self::new(graph, Uniform, Zero)
    }
}

impl<'a, G, C, H> Setup<'a, G, C, H>
where
    G: GraphBase,
{
    pub fn new(graph: &'a G, cost: C, heuristic: H) -> Self {
        Self {
            graph,
            directed: graph.is_directed(),
            cost,
            heuristic,
        }
    }

    pub fn successors(&self, id: &G::NodeId) -> G::NeighborsIter<'a>
    where
        G: Neighbors,
    {
        if self.directed {
            self.graph.neighbors_directed(id, Direction::Outgoing)
        } else {
            self.graph.neighbors_undirected(id)
        }
    }

    pub fn predecessors(&self, id: &G::NodeId) -> G::NeighborsIter<'a>
    where
        G: Neighbors,
    {
        if self.directed {
            self.graph.neighbors_directed(id, Direction::Incoming)
        } else {
            self.graph.neighbors_undirected(id)
        }
    }

    pub fn is_successor(&self, from: &G::NodeId, to: &G::NodeId) -> bool
    where
        G: EdgeList,
    {
        self.graph.edge_id(from, to).is_some()
    }

    pub fn edge_cost<W>(&self, neighbor: &NeighborRef<G::NodeId, G::EdgeId>) -> W
    where
        C: GetCost<G, W>,
        W: Weight,
    {
        self.cost.get(self.graph, &neighbor.to_edge())
    }

    pub fn cost_of<W>(&self, edge: &EdgeRef<G::NodeId, G::EdgeId>) -> W
    where
        C: GetCost<G, W>,
        W: Weight,
    {
        self.cost.get(self.graph, edge)
    }

    pub fn heuristic<W>(&self, from: &G::NodeId, goal: &G::NodeId) -> W
    where
        H: GetHeuristic<G, W>,
        W: Weight,
    {
        self.heuristic.get(self.graph, from, goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        core::{
            cost::GraphCost,
            id::{EdgeId, NodeId},
            marker::Directed,
        },
        infra::testing::create_from_edges,
        storage::AdjList,
    };

    fn v(id: u64) -> NodeId {
        NodeId(id)
    }

    #[test]
    fn graph_cost() {
        let graph: AdjList<u32, Directed> = create_from_edges(2, [(0, 1, 5)]);
        let setup = Setup::new(&graph, GraphCost, Zero);

        let neighbor = setup.successors(&v(0)).next().unwrap();
        assert_eq!(setup.edge_cost::<u32>(&neighbor), 5);
    }

    #[test]
    fn uniform_cost() {
        let graph: AdjList<u32, Directed> = create_from_edges(2, [(0, 1, 5)]);
        let setup = Setup::structural(&graph);

        let edge = EdgeRef::new(EdgeId(0), v(0), v(1));
        assert_eq!(setup.cost_of::<f64>(&edge), 1.0);
    }

    #[test]
    fn predecessors_follow_direction() {
        let graph: AdjList<(), Directed> = create_from_edges(3, [(0, 1, ()), (2, 1, ())]);
        let setup = Setup::structural(&graph);

        let mut preds = setup.predecessors(&v(1)).map(|n| n.id).collect::<Vec<_>>();
        preds.sort();

        assert_eq!(preds, vec![v(0), v(2)]);
        assert_eq!(setup.successors(&v(1)).count(), 0);
    }
}
