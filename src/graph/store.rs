//! In-memory storage for the directed, weighted graph.

use super::types::{DirectedEdge, Vertex, VertexId, Weight};
use crate::io::FormatError;
use nemograph_algorithms::GraphView;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Directed, weighted graph held as owned per-vertex adjacency vectors.
///
/// Vertex ids form a dense `0..vertex_count()` range assigned at load time
/// and never renumbered; every stored edge references valid ids. Cloning
/// is a deep copy — two stores never share structure.
///
/// The store is a single-writer resource: callers serialize mutations
/// against queries. A [`DistanceTable`](nemograph_algorithms::DistanceTable)
/// computed earlier is stale after any `insert_edge`/`remove_edge` and must
/// be recomputed before reuse; no automatic invalidation is performed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphStore {
    vertices: Vec<Vertex>,
    adjacency: Vec<Vec<DirectedEdge>>,
}

impl GraphStore {
    /// Create an empty store.
    pub fn new() -> Self {
        GraphStore {
            vertices: Vec::new(),
            adjacency: Vec::new(),
        }
    }

    /// Create a store with `count` unlabeled vertices and no edges.
    pub fn with_vertices(count: usize) -> Self {
        GraphStore {
            vertices: vec![Vertex::new(); count],
            adjacency: vec![Vec::new(); count],
        }
    }

    /// Populate a store from already-parsed input pieces.
    ///
    /// Fails if the declared vertex count cannot be satisfied by the label
    /// stream. Edge records carry external 1-based ids; a record with
    /// source 0 is the end-of-edges sentinel and terminates the list.
    /// Out-of-range and self-loop records are silently ignored, like any
    /// other insert.
    pub fn load<I>(
        vertex_count: usize,
        labels: Vec<String>,
        records: I,
    ) -> Result<Self, FormatError>
    where
        I: IntoIterator<Item = (usize, usize, Weight)>,
    {
        if labels.len() < vertex_count {
            return Err(FormatError::TruncatedVertexList {
                declared: vertex_count,
                found: labels.len(),
            });
        }

        let mut store = Self::new();
        for label in labels.into_iter().take(vertex_count) {
            store.add_vertex(Some(label));
        }
        for (source, destination, weight) in records {
            if source == 0 {
                break;
            }
            if let (Some(from), Some(to)) = (
                VertexId::from_external(source),
                VertexId::from_external(destination),
            ) {
                store.insert_edge(from, to, weight);
            }
        }
        Ok(store)
    }

    /// Append a vertex, returning its id.
    pub fn add_vertex(&mut self, label: Option<String>) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(match label {
            Some(label) => Vertex::labeled(label),
            None => Vertex::new(),
        });
        self.adjacency.push(Vec::new());
        id
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertices.len()
    }

    /// Label of a vertex, if it has one.
    pub fn label(&self, vertex: VertexId) -> Option<&str> {
        self.vertices.get(vertex.index()).and_then(Vertex::label)
    }

    /// Upsert the edge `from -> to`.
    ///
    /// If the edge exists its weight is replaced in place; otherwise it is
    /// appended to `from`'s adjacency list. Self-loops and out-of-range
    /// endpoints are silently ignored — a no-op, not an error.
    pub fn insert_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) {
        if from == to {
            debug!(vertex = from.index(), "self-loop insert ignored");
            return;
        }
        if !self.contains(from) || !self.contains(to) {
            debug!(
                from = from.index(),
                to = to.index(),
                "out-of-range edge insert ignored"
            );
            return;
        }

        let edges = &mut self.adjacency[from.index()];
        if let Some(existing) = edges.iter_mut().find(|edge| edge.to == to) {
            existing.weight = weight;
        } else {
            edges.push(DirectedEdge { to, weight });
        }
    }

    /// Remove the edge `from -> to` if present; silent no-op otherwise.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) {
        if !self.contains(from) {
            debug!(from = from.index(), "out-of-range edge removal ignored");
            return;
        }
        let edges = &mut self.adjacency[from.index()];
        if let Some(position) = edges.iter().position(|edge| edge.to == to) {
            edges.remove(position);
        }
    }

    /// Outgoing `(target, weight)` pairs of a vertex in insertion order.
    ///
    /// The iterator is lazy, finite and restartable — call again for a
    /// fresh traversal. Out-of-range ids yield an empty sequence.
    pub fn adjacency(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.adjacency
            .get(vertex.index())
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(|edge| (edge.to, edge.weight))
    }

    /// Dense snapshot of the topology for the algorithms crate.
    pub fn view(&self) -> GraphView {
        let rows: Vec<Vec<(usize, Weight)>> = self
            .adjacency
            .iter()
            .map(|edges| {
                edges
                    .iter()
                    .map(|edge| (edge.to.index(), edge.weight))
                    .collect()
            })
            .collect();
        GraphView::from_adjacency(&rows)
    }
}
