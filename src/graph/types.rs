//! Core type definitions for the graph engine.

use serde::{Deserialize, Serialize};
use std::fmt;

pub use nemograph_algorithms::Weight;

/// Dense vertex identifier in the range `0..vertex_count`.
///
/// Ids are assigned at load time and never renumbered. The text formats
/// use 1-based external ids; translation happens at the I/O boundary and
/// nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Dense internal index.
    pub fn index(&self) -> usize {
        self.0
    }

    /// External 1-based id used by the text formats.
    pub fn external(&self) -> usize {
        self.0 + 1
    }

    /// Translate an external 1-based id; `None` for the reserved 0.
    pub fn from_external(id: usize) -> Option<Self> {
        id.checked_sub(1).map(VertexId)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

/// A vertex and its optional text label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    label: Option<String>,
}

impl Vertex {
    pub fn new() -> Self {
        Vertex { label: None }
    }

    pub fn labeled(label: impl Into<String>) -> Self {
        Vertex {
            label: Some(label.into()),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// A directed edge as stored in a vertex's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectedEdge {
    /// Target vertex.
    pub to: VertexId,
    /// Edge weight; 1 in the unweighted variant.
    pub weight: Weight,
}
