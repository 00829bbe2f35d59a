//! All-pairs shortest paths via repeated single-source Dijkstra runs.
//!
//! Distances are exact for graphs with non-negative edge weights. Negative
//! weights are accepted but the results are unspecified; callers that need
//! them handled should not be using Dijkstra.

use super::common::{GraphView, Weight};
use ndarray::Array2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Previous hop recorded for one `(source, target)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Predecessor {
    /// No path has been found.
    None,
    /// The target is the source itself.
    Source,
    /// The prior vertex on the shortest path to the target.
    Vertex(usize),
}

/// One cell of the distance/predecessor table.
///
/// `distance` of `None` is the "unreachable" sentinel. Every time a
/// predecessor is written, the recorded distance strictly decreases, which
/// is what guarantees that predecessor chains never cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathCell {
    /// Whether the target was settled during the source's Dijkstra run.
    pub visited: bool,
    /// Shortest known distance from the source, `None` if unreachable.
    pub distance: Option<Weight>,
    /// Previous vertex on the shortest path.
    pub predecessor: Predecessor,
}

impl Default for PathCell {
    fn default() -> Self {
        PathCell {
            visited: false,
            distance: None,
            predecessor: Predecessor::None,
        }
    }
}

/// Square table of shortest-path results indexed `[source][target]`.
///
/// Rebuilt in full by [`all_pairs_shortest_paths`]; it is a snapshot of the
/// view it was computed from and goes stale with it.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    cells: Array2<PathCell>,
}

impl DistanceTable {
    fn new(vertex_count: usize) -> Self {
        DistanceTable {
            cells: Array2::from_elem((vertex_count, vertex_count), PathCell::default()),
        }
    }

    /// Number of vertices the table was computed over.
    pub fn vertex_count(&self) -> usize {
        self.cells.nrows()
    }

    /// Full cell for a `(source, target)` pair.
    pub fn cell(&self, source: usize, target: usize) -> &PathCell {
        &self.cells[[source, target]]
    }

    /// Shortest distance from `source` to `target`, `None` if unreachable.
    pub fn distance(&self, source: usize, target: usize) -> Option<Weight> {
        self.cells[[source, target]].distance
    }

    /// Recorded predecessor for a `(source, target)` pair.
    pub fn predecessor(&self, source: usize, target: usize) -> Predecessor {
        self.cells[[source, target]].predecessor
    }

    /// Reconstruct the shortest path from `source` to `target`, inclusive
    /// of both endpoints. `None` if the target is unreachable.
    ///
    /// Walks the predecessor chain backward from the target; termination is
    /// guaranteed because every predecessor write strictly decreased the
    /// recorded distance, so the chain cannot revisit a vertex.
    pub fn path(&self, source: usize, target: usize) -> Option<Vec<usize>> {
        self.distance(source, target)?;

        let mut path = vec![target];
        let mut current = target;
        loop {
            match self.cells[[source, current]].predecessor {
                Predecessor::Source => break,
                Predecessor::Vertex(prev) => {
                    path.push(prev);
                    current = prev;
                }
                Predecessor::None => return None,
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Heap entry for the Dijkstra priority queue.
#[derive(Copy, Clone, PartialEq, Eq)]
struct State {
    cost: Weight,
    vertex: usize,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare costs reversed for a min-heap; break ties on the vertex
        // index so pop order is deterministic.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute the full distance/predecessor table, one single-source Dijkstra
/// run per vertex.
pub fn all_pairs_shortest_paths(view: &GraphView) -> DistanceTable {
    let mut table = DistanceTable::new(view.vertex_count);
    for source in 0..view.vertex_count {
        dijkstra_from(view, source, &mut table);
    }
    table
}

/// Single-source run filling the `source` row of the table.
fn dijkstra_from(view: &GraphView, source: usize, table: &mut DistanceTable) {
    let mut heap = BinaryHeap::new();

    table.cells[[source, source]] = PathCell {
        visited: false,
        distance: Some(0),
        predecessor: Predecessor::Source,
    };
    heap.push(State {
        cost: 0,
        vertex: source,
    });

    while let Some(State { cost, vertex }) = heap.pop() {
        if table.cells[[source, vertex]].visited {
            // Stale entry superseded by a shorter push.
            continue;
        }
        table.cells[[source, vertex]].visited = true;

        for (target, weight) in view.successors(vertex) {
            let cell = table.cells[[source, target]];
            if cell.visited {
                continue;
            }
            let candidate = cost + weight;
            if cell.distance.map_or(true, |known| candidate < known) {
                table.cells[[source, target]] = PathCell {
                    visited: false,
                    distance: Some(candidate),
                    predecessor: Predecessor::Vertex(vertex),
                };
                heap.push(State {
                    cost: candidate,
                    vertex: target,
                });
            }
        }
    }
}
