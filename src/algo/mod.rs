//! Bridge between the stores and the pure algorithms crate.
//!
//! Each call snapshots the store into a dense
//! [`GraphView`](nemograph_algorithms::GraphView) and runs the query
//! against that snapshot. Results are therefore stale with respect to any
//! store mutation made after the call — recompute, don't reuse.

use crate::graph::{GraphStore, UndirectedGraph, VertexId};
use nemograph_algorithms::{self as algorithms, DistanceTable};

/// Compute the all-pairs distance/predecessor table for the store.
pub fn shortest_paths(store: &GraphStore) -> DistanceTable {
    algorithms::all_pairs_shortest_paths(&store.view())
}

/// Enumerate every connected induced `k`-subgraph of the store's
/// undirected view, each as a sorted vertex list.
pub fn enumerate_motifs(store: &GraphStore, k: usize) -> Vec<Vec<VertexId>> {
    collect_motifs(&store.view(), k)
}

/// Count the store's connected induced `k`-subgraphs.
pub fn count_motifs(store: &GraphStore, k: usize) -> u64 {
    algorithms::count_connected_subgraphs(&store.view(), k)
}

/// Enumerate motifs of an undirected pair graph.
pub fn enumerate_motifs_undirected(graph: &UndirectedGraph, k: usize) -> Vec<Vec<VertexId>> {
    collect_motifs(&graph.view(), k)
}

/// Count motifs of an undirected pair graph.
pub fn count_motifs_undirected(graph: &UndirectedGraph, k: usize) -> u64 {
    algorithms::count_connected_subgraphs(&graph.view(), k)
}

fn collect_motifs(view: &algorithms::GraphView, k: usize) -> Vec<Vec<VertexId>> {
    algorithms::enumerate_connected_subgraphs(view, k)
        .into_iter()
        .map(|subgraph| subgraph.into_iter().map(VertexId::new).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directed_edges_still_form_undirected_motifs() {
        // 0 -> 1 -> 2, directed; the undirected view makes {0,1,2} one motif.
        let mut store = GraphStore::with_vertices(3);
        store.insert_edge(VertexId::new(0), VertexId::new(1), 1);
        store.insert_edge(VertexId::new(1), VertexId::new(2), 1);

        let motifs = enumerate_motifs(&store, 3);
        assert_eq!(
            motifs,
            vec![vec![VertexId::new(0), VertexId::new(1), VertexId::new(2)]]
        );
        assert_eq!(count_motifs(&store, 3), 1);
    }

    #[test]
    fn table_goes_stale_across_mutation_until_recomputed() {
        let mut store = GraphStore::with_vertices(2);
        store.insert_edge(VertexId::new(0), VertexId::new(1), 9);

        let before = shortest_paths(&store);
        assert_eq!(before.distance(0, 1), Some(9));

        store.insert_edge(VertexId::new(0), VertexId::new(1), 2);
        // The old table still answers from its snapshot.
        assert_eq!(before.distance(0, 1), Some(9));
        // Recomputing picks up the upserted weight.
        assert_eq!(shortest_paths(&store).distance(0, 1), Some(2));
    }
}
