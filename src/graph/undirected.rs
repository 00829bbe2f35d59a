//! Unweighted, undirected adjacency sets — the motif-enumeration variant
//! of the store.

use super::types::{VertexId, Weight};
use indexmap::IndexSet;
use nemograph_algorithms::GraphView;
use tracing::debug;

/// Undirected graph as per-vertex deduplicated neighbor sets.
///
/// Unlike [`GraphStore`](super::GraphStore), the vertex set auto-grows as
/// ids are encountered: inserting an edge to an unseen id extends the
/// dense range to cover it. Inserting `u - v` records both directions;
/// neighbor sets iterate in insertion order.
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    neighbors: Vec<IndexSet<VertexId>>,
}

impl UndirectedGraph {
    pub fn new() -> Self {
        UndirectedGraph {
            neighbors: Vec::new(),
        }
    }

    pub fn with_vertices(count: usize) -> Self {
        UndirectedGraph {
            neighbors: vec![IndexSet::new(); count],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(IndexSet::len).sum::<usize>() / 2
    }

    fn grow_to(&mut self, vertex: VertexId) {
        if vertex.index() >= self.neighbors.len() {
            self.neighbors.resize_with(vertex.index() + 1, IndexSet::new);
        }
    }

    /// Insert the undirected edge `u - v`, growing the vertex set as
    /// needed. Self-loops are silently ignored; duplicates deduplicate.
    pub fn insert_edge(&mut self, u: VertexId, v: VertexId) {
        if u == v {
            debug!(vertex = u.index(), "self-loop insert ignored");
            return;
        }
        self.grow_to(u.max(v));
        self.neighbors[u.index()].insert(v);
        self.neighbors[v.index()].insert(u);
    }

    /// Remove the undirected edge `u - v`; silent no-op if absent.
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) {
        if u.index() < self.neighbors.len() {
            self.neighbors[u.index()].shift_remove(&v);
        }
        if v.index() < self.neighbors.len() {
            self.neighbors[v.index()].shift_remove(&u);
        }
    }

    pub fn contains_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.neighbors
            .get(u.index())
            .map_or(false, |set| set.contains(&v))
    }

    /// Deduplicated neighbors of a vertex in insertion order.
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.neighbors
            .get(vertex.index())
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Dense snapshot of the topology for the algorithms crate.
    pub fn view(&self) -> GraphView {
        let rows: Vec<Vec<(usize, Weight)>> = self
            .neighbors
            .iter()
            .map(|set| set.iter().map(|v| (v.index(), 1)).collect())
            .collect();
        GraphView::from_adjacency(&rows)
    }
}
