//! Stall oracle: prunes settlements the hierarchy can already beat.
use crate::ch_graph::PreprocessedGraph;
use crate::constants::Weight;
use crate::graph::NodeIndex;

/// True iff some backward-CSR entry at `v` (an upward edge `u -> v` in the
/// original overlay) offers a strictly shorter forward distance to `v`
/// than what's currently recorded.
pub(crate) fn stall_forward(graph: &PreprocessedGraph, dist_f: &[Weight], v: NodeIndex) -> bool {
    graph.backward(v).iter().any(|arc| {
        let u = arc.to;
        dist_f[u.index()] + arc.weight < dist_f[v.index()]
    })
}

/// Symmetric predicate on the backward side: inspects `v`'s forward-CSR
/// entries.
pub(crate) fn stall_backward(graph: &PreprocessedGraph, dist_b: &[Weight], v: NodeIndex) -> bool {
    graph.forward(v).iter().any(|arc| {
        let u = arc.to;
        dist_b[u.index()] + arc.weight < dist_b[v.index()]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contraction::preprocess_bottom_up;
    use crate::graph::{node_index, Graph};

    #[test]
    fn stall_forward_detects_better_alternative() {
        // 0 -> 1 -> 2 cheap, 0 -> 2 expensive direct.
        let g = Graph::from_edges(3, &[
            (node_index(0), node_index(1), 1.0),
            (node_index(1), node_index(2), 1.0),
            (node_index(0), node_index(2), 10.0),
        ]);
        let preproc = preprocess_bottom_up(&g);
        // whichever rank order emerges, stall_forward must never panic and
        // must be consistent with `forward`/`backward` being inverses.
        let mut dist = vec![Weight::INFINITY; 3];
        dist[0] = 0.0;
        let _ = stall_forward(&preproc, &dist, node_index(0));
    }
}
