use crate::{
    core::{id::NodeId, marker::EdgeType, GraphAdd},
    storage::AdjList,
};

/// Creates a graph with nodes `0..node_count` and given edges.
pub fn create_from_edges<E, Ty, I>(node_count: u64, edges: I) -> AdjList<E, Ty>
where
    Ty: EdgeType,
    I: IntoIterator<Item = (u64, u64, E)>,
{
    let mut graph = AdjList::new();

    for id in 0..node_count {
        graph.add_node(NodeId(id));
    }

    for (from, to, attr) in edges {
        graph.add_edge(NodeId(from), NodeId(to), attr);
    }

    graph
}

pub fn create_complete<E, Ty>(node_count: u64) -> AdjList<E, Ty>
where
    E: Default,
    Ty: EdgeType,
{
    let edges = (0..node_count)
        .flat_map(|u| (0..node_count).map(move |v| (u, v)))
        .filter(|&(u, v)| u != v && (Ty::is_directed() || u < v))
        .map(|(u, v)| (u, v, E::default()));

    create_from_edges(node_count, edges)
}

/// Creates a disjoint union of paths with given lengths (in nodes). Node
/// identities are allocated consecutively.
pub fn create_paths<E, Ty>(lengths: &[u64]) -> AdjList<E, Ty>
where
    E: Default,
    Ty: EdgeType,
{
    let node_count = lengths.iter().sum();
    let mut edges = Vec::new();
    let mut offset = 0;

    for &len in lengths {
        for i in 1..len {
            edges.push((offset + i - 1, offset + i, E::default()));
        }
        offset += len;
    }

    create_from_edges(node_count, edges)
}
