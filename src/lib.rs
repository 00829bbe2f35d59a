//! nemograph — a small graph analytics engine.
//!
//! Two query engines share one graph representation:
//!
//! - all-pairs weighted shortest paths (repeated single-source Dijkstra
//!   with full predecessor tables and path reconstruction);
//! - exhaustive network motif enumeration (ESU): every connected induced
//!   k-vertex subgraph, exactly once.
//!
//! # Architecture
//!
//! - [`graph`] — the stores: a directed weighted [`GraphStore`] and an
//!   auto-growing unweighted [`UndirectedGraph`], both dense-id
//!   adjacency-list structures.
//! - [`nemograph_algorithms`] (workspace crate) — the pure algorithms,
//!   running over read-only dense snapshots.
//! - [`algo`] — the store-to-snapshot bridge.
//! - [`io`] / [`display`] — the text formats: loading graph description
//!   streams and rendering result listings.
//!
//! Everything is single-threaded and synchronous; stores are
//! single-writer, and computed tables are snapshots the caller refreshes
//! after mutating the graph.

pub mod algo;
pub mod display;
pub mod graph;
pub mod io;

pub use graph::{DirectedEdge, GraphStore, UndirectedGraph, Vertex, VertexId, Weight};
pub use io::FormatError;
pub use nemograph_algorithms::{DistanceTable, PathCell, Predecessor};

/// Library version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
