//! Pure topology algorithms for the nemograph engine.
//!
//! Everything in this crate operates on a [`GraphView`] — a dense,
//! read-only snapshot of a graph's adjacency structure — so the crate has
//! no dependency on any particular storage layer. Build a view once, then
//! run as many queries against it as needed; a view is never mutated.

pub mod common;
pub mod motif;
pub mod pathfinding;

pub use common::{GraphView, Weight};
pub use motif::{
    count_connected_subgraphs, enumerate_connected_subgraphs, for_each_connected_subgraph,
};
pub use pathfinding::{all_pairs_shortest_paths, DistanceTable, PathCell, Predecessor};
