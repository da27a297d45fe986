use crate::core::{EdgeList, NodeList};

use super::setup::Setup;

/// Returns `true` if the sequence of nodes forms a walk in the graph.
///
/// Every pair of consecutive nodes must be joined by an edge in the direction
/// of the walk (in any direction on undirected graphs). An empty sequence is
/// a path and a single node is a path if it exists in the graph.
///
/// # Examples
///
/// ```
/// use pathgraph::{
///     algo::is_path,
///     core::{id::NodeId, GraphAdd},
///     storage::AdjList,
/// };
///
/// let mut graph = AdjList::new_directed();
///
/// let [a, b, c] = [0, 1, 2].map(NodeId::from);
/// for node in [a, b, c] {
///     graph.add_node(node);
/// }
///
/// graph.add_edge(a, b, ());
/// graph.add_edge(b, c, ());
///
/// assert!(is_path(&graph, &[a, b, c]));
/// assert!(!is_path(&graph, &[c, b, a]));
/// ```
pub fn is_path<G>(graph: &G, path: &[G::NodeId]) -> bool
where
    G: NodeList + EdgeList,
{
    let setup = Setup::structural(graph);

    match path {
        [] => true,
        [node] => graph.contains_node(node),
        _ => path
            .windows(2)
            .all(|pair| setup.is_successor(&pair[0], &pair[1])),
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        core::{
            id::NodeId,
            marker::{Directed, Undirected},
        },
        infra::testing::create_from_edges,
        storage::AdjList,
    };

    use super::*;

    fn v(id: u64) -> NodeId {
        NodeId(id)
    }

    #[test]
    fn empty_and_single() {
        let graph: AdjList<(), Directed> = create_from_edges(2, [(0, 1, ())]);

        assert!(is_path(&graph, &[]));
        assert!(is_path(&graph, &[v(1)]));
        assert!(!is_path(&graph, &[v(5)]));
    }

    #[test]
    fn directed_respects_direction() {
        let graph: AdjList<(), Directed> = create_from_edges(3, [(0, 1, ()), (1, 2, ())]);

        assert!(is_path(&graph, &[v(0), v(1), v(2)]));
        assert!(!is_path(&graph, &[v(2), v(1)]));
        assert!(!is_path(&graph, &[v(0), v(2)]));
    }

    #[test]
    fn undirected_any_direction() {
        let graph: AdjList<(), Undirected> = create_from_edges(3, [(0, 1, ()), (1, 2, ())]);

        assert!(is_path(&graph, &[v(2), v(1), v(0)]));
        assert!(is_path(&graph, &[v(0), v(1), v(0)]));
    }

    #[test]
    fn missing_nodes() {
        let graph: AdjList<(), Directed> = create_from_edges(2, [(0, 1, ())]);

        assert!(!is_path(&graph, &[v(0), v(7)]));
        assert!(!is_path(&graph, &[v(7), v(8)]));
    }
}
