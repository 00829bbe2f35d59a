//! Plain-text rendering of shortest-path tables and motif enumerations.
//!
//! All functions build strings; printing is the caller's business. Vertex
//! ids are rendered in their external 1-based form, unreachable pairs as
//! `--`.

use crate::graph::{GraphStore, VertexId};
use nemograph_algorithms::DistanceTable;
use std::fmt::Write;

/// Rendering of an unreachable distance or path.
pub const UNREACHABLE: &str = "--";

/// Render the full distance/predecessor listing, one block per source
/// vertex with one row per (source, target) pair.
pub fn render_all_paths(store: &GraphStore, table: &DistanceTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Description\tFrom\tTo\tDistance\tPath");

    for source in 0..table.vertex_count() {
        let _ = writeln!(out, "{}", store.label(VertexId::new(source)).unwrap_or(""));
        for target in 0..table.vertex_count() {
            if source == target {
                continue;
            }
            let _ = writeln!(
                out,
                "\t{}\t{}\t{}\t{}",
                source + 1,
                target + 1,
                distance_text(table, source, target),
                path_text(table, source, target),
            );
        }
    }
    out
}

/// Render a single (source, target) query: the distance and path row,
/// then the labels along the path.
pub fn render_path(
    store: &GraphStore,
    table: &DistanceTable,
    source: VertexId,
    target: VertexId,
) -> String {
    let mut out = String::new();
    if source.index() >= table.vertex_count() || target.index() >= table.vertex_count() {
        let _ = writeln!(out, "no such vertex pair");
        return out;
    }

    let _ = writeln!(
        out,
        "{}\t{}\t{}\t{}",
        source.external(),
        target.external(),
        distance_text(table, source.index(), target.index()),
        path_text(table, source.index(), target.index()),
    );
    if let Some(path) = table.path(source.index(), target.index()) {
        for vertex in path {
            if let Some(label) = store.label(VertexId::new(vertex)) {
                let _ = writeln!(out, "{label}");
            }
        }
    }
    out
}

/// Render a motif enumeration: one line of space-separated external ids
/// per subgraph, then the total count.
pub fn render_motifs(motifs: &[Vec<VertexId>]) -> String {
    let mut out = String::new();
    for motif in motifs {
        let ids: Vec<String> = motif.iter().map(|v| v.external().to_string()).collect();
        let _ = writeln!(out, "{}", ids.join(" "));
    }
    let _ = writeln!(out, "{}", motifs.len());
    out
}

fn distance_text(table: &DistanceTable, source: usize, target: usize) -> String {
    match table.distance(source, target) {
        Some(distance) => distance.to_string(),
        None => UNREACHABLE.to_string(),
    }
}

fn path_text(table: &DistanceTable, source: usize, target: usize) -> String {
    match table.path(source, target) {
        Some(path) => path
            .into_iter()
            .map(|vertex| (vertex + 1).to_string())
            .collect::<Vec<_>>()
            .join(" "),
        None => UNREACHABLE.to_string(),
    }
}
