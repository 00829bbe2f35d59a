//! Graph storage: vertices and edges in adjacency-list form.
//!
//! Two variants share the dense-id data model: [`GraphStore`] holds the
//! directed, weighted graph the shortest-path engine runs over, and
//! [`UndirectedGraph`] holds the unweighted neighbor sets the motif
//! enumeration reads. Either produces a read-only
//! [`GraphView`](nemograph_algorithms::GraphView) snapshot for the
//! algorithms crate.

pub mod store;
pub mod types;
pub mod undirected;

pub use store::GraphStore;
pub use types::{DirectedEdge, Vertex, VertexId, Weight};
pub use undirected::UndirectedGraph;
