//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense view of the graph topology for algorithm
//! execution, stored in Compressed Sparse Row (CSR) form.

/// Edge weight type used throughout the algorithms.
pub type Weight = i64;

/// A dense, integer-indexed snapshot of the graph topology.
///
/// Vertices are identified by their index in `0..vertex_count`. Two
/// adjacency structures are kept side by side:
///
/// - the directed, weighted out-edges in their original insertion order,
///   consumed by the shortest-path algorithms;
/// - a symmetrized, deduplicated, self-loop-free neighbor list per vertex,
///   consumed by the motif enumeration (which ignores direction and
///   weight).
///
/// The view is a snapshot: mutating the originating store does not update
/// it, and results computed from a stale view are stale with it.
pub struct GraphView {
    /// Number of vertices.
    pub vertex_count: usize,

    /// Offsets into `out_targets` / `out_weights`. Size = vertex_count + 1.
    out_offsets: Vec<usize>,
    /// Contiguous array of out-edge target indices, insertion order.
    out_targets: Vec<usize>,
    /// Edge weights, aligned with `out_targets`.
    out_weights: Vec<Weight>,

    /// Offsets into `und_targets`. Size = vertex_count + 1.
    und_offsets: Vec<usize>,
    /// Undirected neighbor indices, sorted ascending, deduplicated.
    und_targets: Vec<usize>,
}

impl GraphView {
    /// Build a view from per-vertex `(target, weight)` adjacency rows.
    ///
    /// Row order and in-row order are preserved for the directed walk.
    /// Targets outside `0..rows.len()` are dropped, and self-loops are
    /// additionally skipped when symmetrizing; well-formed stores never
    /// produce either.
    pub fn from_adjacency(rows: &[Vec<(usize, Weight)>]) -> Self {
        let n = rows.len();

        let mut out_offsets = Vec::with_capacity(n + 1);
        let mut out_targets = Vec::new();
        let mut out_weights = Vec::new();
        out_offsets.push(0);
        for row in rows {
            for &(target, weight) in row {
                if target >= n {
                    continue;
                }
                out_targets.push(target);
                out_weights.push(weight);
            }
            out_offsets.push(out_targets.len());
        }

        let mut und: Vec<Vec<usize>> = vec![Vec::new(); n];
        for (source, row) in rows.iter().enumerate() {
            for &(target, _) in row {
                if target == source || target >= n {
                    continue;
                }
                und[source].push(target);
                und[target].push(source);
            }
        }
        let mut und_offsets = Vec::with_capacity(n + 1);
        let mut und_targets = Vec::new();
        und_offsets.push(0);
        for neighbors in &mut und {
            neighbors.sort_unstable();
            neighbors.dedup();
            und_targets.extend_from_slice(neighbors);
            und_offsets.push(und_targets.len());
        }

        GraphView {
            vertex_count: n,
            out_offsets,
            out_targets,
            out_weights,
            und_offsets,
            und_targets,
        }
    }

    /// Build a view from a flat `(source, target, weight)` edge list.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize, Weight)]) -> Self {
        let mut rows: Vec<Vec<(usize, Weight)>> = vec![Vec::new(); vertex_count];
        for &(source, target, weight) in edges {
            if source < vertex_count {
                rows[source].push((target, weight));
            }
        }
        Self::from_adjacency(&rows)
    }

    /// Out-degree of a vertex.
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.out_offsets[vertex + 1] - self.out_offsets[vertex]
    }

    /// Outgoing `(target, weight)` pairs of a vertex, insertion order.
    pub fn successors(&self, vertex: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        let start = self.out_offsets[vertex];
        let end = self.out_offsets[vertex + 1];
        self.out_targets[start..end]
            .iter()
            .copied()
            .zip(self.out_weights[start..end].iter().copied())
    }

    /// Undirected neighbors of a vertex: sorted, deduplicated, no self.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        let start = self.und_offsets[vertex];
        let end = self.und_offsets[vertex + 1];
        &self.und_targets[start..end]
    }

    /// Undirected degree of a vertex.
    pub fn degree(&self, vertex: usize) -> usize {
        self.und_offsets[vertex + 1] - self.und_offsets[vertex]
    }
}
