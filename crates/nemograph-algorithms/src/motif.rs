//! Network motif enumeration: every connected induced k-vertex subgraph,
//! exactly once (the ESU algorithm).
//!
//! Works on the undirected, unweighted neighbor view of the graph. Each
//! connected k-subgraph is discovered from its minimum-index member only:
//! seeds run over all vertices in ascending order and extension candidates
//! are restricted to indices greater than the seed, which is what rules
//! out the k!-style duplicate discoveries of a naive enumeration.

use super::common::GraphView;
use rustc_hash::FxHashSet;

/// Visit every connected induced `k`-subgraph exactly once.
///
/// The sink receives each subgraph as a sorted slice of vertex indices.
/// Emission order is unspecified, but the collection of emitted vertex
/// sets is deterministic for a given view. `k == 0` or `k` larger than
/// the vertex count visits nothing; neither is an error.
pub fn for_each_connected_subgraph<F>(view: &GraphView, k: usize, mut sink: F)
where
    F: FnMut(&[usize]),
{
    if k == 0 || k > view.vertex_count {
        return;
    }

    let mut subgraph = Vec::with_capacity(k);
    let mut excluded = FxHashSet::default();

    for seed in 0..view.vertex_count {
        subgraph.push(seed);
        excluded.insert(seed);
        let extension: FxHashSet<usize> = view
            .neighbors(seed)
            .iter()
            .copied()
            .filter(|&candidate| candidate > seed)
            .collect();

        extend_subgraph(view, &mut subgraph, extension, &mut excluded, seed, k, &mut sink);

        excluded.remove(&seed);
        subgraph.pop();
    }
}

/// One ESU recursion frame.
///
/// Pops candidates from `extension` one at a time. A popped vertex stays
/// in `excluded` while the frame's remaining siblings run and is unmarked
/// only when the whole frame returns: exclusion is scoped to the frame, so
/// a vertex ruled out under one branch is considered again by a later
/// sibling of an ancestor frame. Marking popped vertices globally instead
/// silently drops valid subgraphs.
fn extend_subgraph<F>(
    view: &GraphView,
    subgraph: &mut Vec<usize>,
    mut extension: FxHashSet<usize>,
    excluded: &mut FxHashSet<usize>,
    seed: usize,
    k: usize,
    sink: &mut F,
) where
    F: FnMut(&[usize]),
{
    if subgraph.len() == k {
        let mut found = subgraph.clone();
        found.sort_unstable();
        sink(&found);
        return;
    }

    let mut marked = Vec::new();
    while let Some(&next) = extension.iter().next() {
        extension.remove(&next);
        subgraph.push(next);
        excluded.insert(next);
        marked.push(next);

        // Exclusive neighbors of `next`: beyond the seed, not already in
        // the subgraph or its offered neighborhood.
        let mut child_extension = extension.clone();
        for &candidate in view.neighbors(next) {
            if candidate > seed
                && !excluded.contains(&candidate)
                && !extension.contains(&candidate)
            {
                child_extension.insert(candidate);
            }
        }

        extend_subgraph(view, subgraph, child_extension, excluded, seed, k, sink);

        subgraph.pop();
    }

    for vertex in marked {
        excluded.remove(&vertex);
    }
}

/// Collect every connected induced `k`-subgraph as a sorted vertex list.
pub fn enumerate_connected_subgraphs(view: &GraphView, k: usize) -> Vec<Vec<usize>> {
    let mut found = Vec::new();
    for_each_connected_subgraph(view, k, |subgraph| found.push(subgraph.to_vec()));
    found
}

/// Count connected induced `k`-subgraphs without materializing them.
pub fn count_connected_subgraphs(view: &GraphView, k: usize) -> u64 {
    let mut count = 0;
    for_each_connected_subgraph(view, k, |_| count += 1);
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn undirected(vertex_count: usize, edges: &[(usize, usize)]) -> GraphView {
        let weighted: Vec<(usize, usize, i64)> =
            edges.iter().map(|&(u, v)| (u, v, 1)).collect();
        GraphView::from_edges(vertex_count, &weighted)
    }

    fn as_set(subgraphs: Vec<Vec<usize>>) -> HashSet<Vec<usize>> {
        let count = subgraphs.len();
        let set: HashSet<_> = subgraphs.into_iter().collect();
        assert_eq!(set.len(), count, "duplicate subgraph emitted");
        set
    }

    #[test]
    fn path_graph_k3_yields_the_two_windows() {
        let view = undirected(4, &[(0, 1), (1, 2), (2, 3)]);
        let found = as_set(enumerate_connected_subgraphs(&view, 3));
        let expected: HashSet<_> = [vec![0, 1, 2], vec![1, 2, 3]].into_iter().collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn k1_counts_vertices_including_isolated() {
        // Vertex 3 has no edges at all.
        let view = undirected(4, &[(0, 1), (1, 2)]);
        assert_eq!(count_connected_subgraphs(&view, 1), 4);
    }

    #[test]
    fn k2_counts_undirected_edges() {
        // A directed reciprocal pair still contributes one undirected edge.
        let view = GraphView::from_edges(4, &[(0, 1, 1), (1, 0, 1), (1, 2, 1), (2, 3, 1)]);
        assert_eq!(count_connected_subgraphs(&view, 2), 3);
    }

    #[test]
    fn degenerate_sizes_yield_nothing() {
        let view = undirected(3, &[(0, 1), (1, 2)]);
        assert_eq!(count_connected_subgraphs(&view, 0), 0);
        assert_eq!(count_connected_subgraphs(&view, 4), 0);
    }

    #[test]
    fn triangle_with_tail() {
        // Triangle 0-1-2 plus tail 2-3.
        let view = undirected(4, &[(0, 1), (1, 2), (0, 2), (2, 3)]);
        let found = as_set(enumerate_connected_subgraphs(&view, 3));
        let expected: HashSet<_> = [
            vec![0, 1, 2],
            vec![0, 2, 3],
            vec![1, 2, 3],
        ]
        .into_iter()
        .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn disconnected_components_stay_separate() {
        // Two triangles with no bridge.
        let view = undirected(6, &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)]);
        assert_eq!(count_connected_subgraphs(&view, 3), 2);
        assert_eq!(count_connected_subgraphs(&view, 4), 0);
    }

    #[test]
    fn star_center_branches_are_not_lost_to_sibling_exclusion() {
        // Star around 0. Every pair of leaves forms a k=3 subgraph with the
        // center; a leaking exclusion set drops some of them.
        let view = undirected(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]);
        assert_eq!(count_connected_subgraphs(&view, 3), 6);
    }

    #[test]
    fn matches_brute_force_on_random_graphs() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        for seed in 0..15u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let n = rng.gen_range(3..=10);
            let mut edges = Vec::new();
            for u in 0..n {
                for v in (u + 1)..n {
                    if rng.gen_bool(0.3) {
                        edges.push((u, v));
                    }
                }
            }
            let view = undirected(n, &edges);

            for k in 1..=4.min(n) {
                let found = as_set(enumerate_connected_subgraphs(&view, k));
                let expected = brute_force(n, &edges, k);
                assert_eq!(found, expected, "seed {seed}, n {n}, k {k}");
            }
        }
    }

    /// Every k-subset of vertices, kept if its induced subgraph is
    /// connected.
    fn brute_force(n: usize, edges: &[(usize, usize)], k: usize) -> HashSet<Vec<usize>> {
        let mut found = HashSet::new();
        let mut subset = Vec::new();
        subsets(0, n, k, &mut subset, &mut |candidate: &[usize]| {
            if induced_connected(candidate, edges) {
                found.insert(candidate.to_vec());
            }
        });
        found
    }

    fn subsets(
        start: usize,
        n: usize,
        k: usize,
        current: &mut Vec<usize>,
        visit: &mut impl FnMut(&[usize]),
    ) {
        if current.len() == k {
            visit(current);
            return;
        }
        for v in start..n {
            current.push(v);
            subsets(v + 1, n, k, current, visit);
            current.pop();
        }
    }

    fn induced_connected(vertices: &[usize], edges: &[(usize, usize)]) -> bool {
        let mut reached = vec![false; vertices.len()];
        reached[0] = true;
        let mut frontier = vec![vertices[0]];
        while let Some(u) = frontier.pop() {
            for (slot, &v) in vertices.iter().enumerate() {
                if reached[slot] {
                    continue;
                }
                if edges.contains(&(u, v)) || edges.contains(&(v, u)) {
                    reached[slot] = true;
                    frontier.push(v);
                }
            }
        }
        reached.into_iter().all(|r| r)
    }
}
