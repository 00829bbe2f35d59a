//! Text-stream loading of graph descriptions.
//!
//! Two formats are supported, both using external 1-based vertex ids:
//!
//! - **Weighted**: a leading vertex count, one label line per vertex, then
//!   whitespace-separated `(source, destination, weight)` triples
//!   terminated by a `0 0 0` sentinel. Read into a [`GraphStore`].
//! - **Unweighted pairs**: no count or labels; `(source, destination)`
//!   pairs terminated by a `0 0` sentinel, auto-growing the vertex set.
//!   Read into an [`UndirectedGraph`].
//!
//! A stream may carry several graphs back to back; the readers return
//! `Ok(None)` at a clean end of stream so drivers can loop. Malformed
//! edge data is handled best-effort: offending tokens are skipped with a
//! warning and the rest of the record stream is drained to the sentinel,
//! so a partially bad file still yields the graph that could be read.

use crate::graph::{GraphStore, UndirectedGraph, VertexId};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading a graph description.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("declared {declared} vertices but the stream provided {found}")]
    TruncatedVertexList { declared: usize, found: usize },

    #[error("malformed vertex count {0:?}")]
    InvalidVertexCount(String),

    #[error("input stream contained no graph")]
    Empty,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Read the next weighted graph from the stream.
///
/// Returns `Ok(None)` at a clean end of stream.
pub fn read_graph<R: BufRead>(reader: &mut R) -> Result<Option<GraphStore>, FormatError> {
    let header = match next_nonblank_line(reader)? {
        Some(line) => line,
        None => return Ok(None),
    };
    let vertex_count: usize = header
        .trim()
        .parse()
        .map_err(|_| FormatError::InvalidVertexCount(header.trim().to_string()))?;

    let mut labels = Vec::with_capacity(vertex_count);
    for _ in 0..vertex_count {
        match read_line(reader)? {
            Some(line) => labels.push(line.trim_end_matches(['\r', '\n']).to_string()),
            None => {
                return Err(FormatError::TruncatedVertexList {
                    declared: vertex_count,
                    found: labels.len(),
                })
            }
        }
    }

    let records = read_records(reader, 3)?
        .into_iter()
        .map(|record| (record[0] as usize, record[1] as usize, record[2]));
    let store = GraphStore::load(vertex_count, labels, records)?;
    tracing::info!(
        vertices = store.vertex_count(),
        edges = store.edge_count(),
        "graph loaded"
    );
    Ok(Some(store))
}

/// Read the next unweighted pair-format graph from the stream.
///
/// Returns `Ok(None)` at a clean end of stream.
pub fn read_pairs<R: BufRead>(reader: &mut R) -> Result<Option<UndirectedGraph>, FormatError> {
    let records = read_records(reader, 2)?;
    if records.is_empty() {
        return Ok(None);
    }

    let mut graph = UndirectedGraph::new();
    for record in records {
        if let (Some(u), Some(v)) = (
            VertexId::from_external(record[0] as usize),
            VertexId::from_external(record[1] as usize),
        ) {
            graph.insert_edge(u, v);
        }
    }
    tracing::info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "pair graph loaded"
    );
    Ok(Some(graph))
}

/// Load the first weighted graph of a file.
pub fn read_graph_file(path: impl AsRef<Path>) -> Result<GraphStore, FormatError> {
    let mut reader = BufReader::new(File::open(path)?);
    read_graph(&mut reader)?.ok_or(FormatError::Empty)
}

/// Load the first pair-format graph of a file.
pub fn read_pairs_file(path: impl AsRef<Path>) -> Result<UndirectedGraph, FormatError> {
    let mut reader = BufReader::new(File::open(path)?);
    read_pairs(&mut reader)?.ok_or(FormatError::Empty)
}

/// Collect whitespace-separated numeric records of `arity` fields until
/// the leading-zero sentinel record or end of stream.
///
/// A record whose first field is 0 is the sentinel; it is consumed and
/// not returned. Unparseable tokens and negative ids are skipped with a
/// warning — degraded input is drained, never fatal. Weights (any field
/// past the two ids) may be negative.
fn read_records<R: BufRead>(reader: &mut R, arity: usize) -> Result<Vec<Vec<i64>>, FormatError> {
    let mut records = Vec::new();
    let mut pending: Vec<i64> = Vec::with_capacity(arity);

    'lines: while let Some(line) = read_line(reader)? {
        for token in line.split_whitespace() {
            let value: i64 = match token.parse() {
                Ok(value) => value,
                Err(_) => {
                    tracing::warn!(token, "skipping malformed edge token");
                    continue;
                }
            };
            pending.push(value);
            if pending.len() < arity {
                continue;
            }

            let record = std::mem::take(&mut pending);
            if record[0] == 0 {
                break 'lines;
            }
            if record[0] < 0 || record[1] < 0 {
                tracing::warn!(?record, "skipping edge record with negative id");
                continue;
            }
            records.push(record);
        }
    }
    Ok(records)
}

fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, FormatError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

fn next_nonblank_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, FormatError> {
    while let Some(line) = read_line(reader)? {
        if !line.trim().is_empty() {
            return Ok(Some(line));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::VertexId;

    const SAMPLE: &str = "\
4
Olson's office
Classroom
STEM office
The Commons
1 2 10
2 4 10
3 1 5
0 0 0
";

    #[test]
    fn reads_the_documented_weighted_format() {
        let mut reader = SAMPLE.as_bytes();
        let store = read_graph(&mut reader).unwrap().unwrap();

        assert_eq!(store.vertex_count(), 4);
        assert_eq!(store.edge_count(), 3);
        assert_eq!(store.label(VertexId::new(0)), Some("Olson's office"));
        // 1-based ids were translated: edge 1->2 is internal 0->1.
        assert_eq!(
            store.adjacency(VertexId::new(0)).next(),
            Some((VertexId::new(1), 10))
        );
        assert_eq!(
            store.adjacency(VertexId::new(2)).next(),
            Some((VertexId::new(0), 5))
        );
    }

    #[test]
    fn clean_eof_yields_none() {
        let mut reader = "".as_bytes();
        assert!(read_graph(&mut reader).unwrap().is_none());
        let mut reader = "\n  \n".as_bytes();
        assert!(read_graph(&mut reader).unwrap().is_none());
    }

    #[test]
    fn multi_graph_streams_read_sequentially() {
        let two = format!("{SAMPLE}2\nA\nB\n1 2 1\n0 0 0\n");
        let mut reader = two.as_bytes();

        let first = read_graph(&mut reader).unwrap().unwrap();
        assert_eq!(first.vertex_count(), 4);
        let second = read_graph(&mut reader).unwrap().unwrap();
        assert_eq!(second.vertex_count(), 2);
        assert!(read_graph(&mut reader).unwrap().is_none());
    }

    #[test]
    fn malformed_tokens_are_drained_not_fatal() {
        let input = "2\nA\nB\n1 2 banana 7\n2 1 3\n0 0 0\n";
        let mut reader = input.as_bytes();
        let store = read_graph(&mut reader).unwrap().unwrap();

        // "banana" was skipped, so the first record completes as (1,2,7).
        assert_eq!(store.edge_count(), 2);
        assert_eq!(
            store.adjacency(VertexId::new(0)).next(),
            Some((VertexId::new(1), 7))
        );
    }

    #[test]
    fn truncated_label_section_is_an_error() {
        let mut reader = "3\nonly one label\n".as_bytes();
        assert!(matches!(
            read_graph(&mut reader),
            Err(FormatError::TruncatedVertexList {
                declared: 3,
                found: 1
            })
        ));
    }

    #[test]
    fn bad_vertex_count_is_an_error() {
        let mut reader = "not-a-number\n".as_bytes();
        assert!(matches!(
            read_graph(&mut reader),
            Err(FormatError::InvalidVertexCount(_))
        ));
    }

    #[test]
    fn reads_pair_format_with_auto_growth() {
        let mut reader = "1 2\n2 4\n3 1\n0 0\n".as_bytes();
        let graph = read_pairs(&mut reader).unwrap().unwrap();

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.contains_edge(VertexId::new(1), VertexId::new(3)));
        assert!(graph.contains_edge(VertexId::new(3), VertexId::new(1)));
    }

    #[test]
    fn pair_stream_eof_yields_none() {
        let mut reader = "".as_bytes();
        assert!(read_pairs(&mut reader).unwrap().is_none());
    }
}
