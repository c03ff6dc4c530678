//! Node-ordering / contraction preprocessor: a bottom-up strategy (online
//! importance) and a top-down strategy (static order). Both share the same
//! shortcut rule (`contract_node`) and differ only in how the contraction
//! order is produced.
use log::{debug, info};

use crate::ch_graph::PreprocessedGraph;
use crate::graph::{Graph, NodeIndex};
use crate::importance::{importance, ImportanceHeap};
use crate::overlay::OverlayStore;
use crate::witness_search::WitnessSearch;

/// Contracts `v`: for every pair of uncontracted neighbors `(u, x)` with an
/// incoming arc `u -> v` and an outgoing arc `v -> x`, adds a shortcut
/// `u -> x` of weight `w(u,v) + w(v,x)` unless a witness path of that
/// weight or less already exists avoiding `v`. Returns the number of
/// shortcuts added.
fn contract_node(
    overlay: &mut OverlayStore,
    is_contracted: &[bool],
    witness: &mut WitnessSearch,
    v: NodeIndex,
) -> usize {
    let incoming: Vec<_> = overlay.incoming(v).to_vec();
    let outgoing: Vec<_> = overlay.outgoing(v).to_vec();

    let mut shortcuts_added = 0;

    for in_arc in &incoming {
        let u = in_arc.neighbor;
        if is_contracted[u.index()] {
            continue;
        }
        let w_uv = in_arc.weight;

        for out_arc in &outgoing {
            let x = out_arc.neighbor;
            if x == u || is_contracted[x.index()] {
                continue;
            }
            let bound = w_uv + out_arc.weight;

            if !witness.exists_path_within_bound(overlay, is_contracted, u, x, v, bound) {
                overlay.add_or_decrease(u, x, bound, Some(v));
                shortcuts_added += 1;
            }
        }
    }

    shortcuts_added
}

fn neighbors_of(overlay: &OverlayStore, v: NodeIndex) -> Vec<NodeIndex> {
    let mut neighbors: Vec<NodeIndex> = overlay
        .incoming(v)
        .iter()
        .chain(overlay.outgoing(v).iter())
        .map(|a| a.neighbor)
        .collect();
    neighbors.sort_unstable();
    neighbors.dedup();
    neighbors
}

/// Contracts nodes in order of increasing *online* importance, lazily
/// recomputed on pop and after each contraction.
pub fn preprocess_bottom_up(graph: &Graph) -> PreprocessedGraph {
    let n = graph.num_nodes();
    let mut overlay = OverlayStore::seed_from_graph(graph);
    let mut is_contracted = vec![false; n];
    let mut rank = vec![0usize; n];
    let mut witness = WitnessSearch::new(n);
    let mut heap = ImportanceHeap::new();

    info!("bottom-up contraction of {} nodes started", n);

    for v in 0..n {
        let v = NodeIndex::new(v);
        heap.push(importance(&overlay, &is_contracted, v), v);
    }

    let mut next_rank = 0;
    while let Some((imp, v)) = heap.pop() {
        if is_contracted[v.index()] {
            continue;
        }

        let current = importance(&overlay, &is_contracted, v);
        if current > imp {
            heap.push(current, v);
            continue;
        }

        let shortcuts = contract_node(&mut overlay, &is_contracted, &mut witness, v);
        is_contracted[v.index()] = true;
        rank[v.index()] = next_rank;
        next_rank += 1;

        if next_rank % 1000 == 0 {
            debug!("{}/{} nodes contracted ({} shortcuts just added)", next_rank, n, shortcuts);
        }

        for nb in neighbors_of(&overlay, v) {
            if !is_contracted[nb.index()] {
                heap.push(importance(&overlay, &is_contracted, nb), nb);
            }
        }
    }

    info!("bottom-up contraction finished: {} nodes ranked", next_rank);
    PreprocessedGraph::build(&overlay, rank)
}

/// Computes a static rank permutation once from the input graph's degrees,
/// then contracts nodes in that fixed order with no online re-evaluation.
pub fn preprocess_top_down(graph: &Graph) -> PreprocessedGraph {
    let n = graph.num_nodes();
    let mut overlay = OverlayStore::seed_from_graph(graph);
    let mut is_contracted = vec![false; n];
    let mut witness = WitnessSearch::new(n);

    info!("top-down contraction of {} nodes started", n);

    // static importance, computed once against the uncontracted graph.
    let uncontracted = vec![false; n];
    let mut order: Vec<NodeIndex> = (0..n).map(NodeIndex::new).collect();
    order.sort_by_key(|&v| (importance(&overlay, &uncontracted, v), v));

    let mut rank = vec![0usize; n];
    for (next_rank, &v) in order.iter().enumerate() {
        let shortcuts = contract_node(&mut overlay, &is_contracted, &mut witness, v);
        is_contracted[v.index()] = true;
        rank[v.index()] = next_rank;

        if (next_rank + 1) % 1000 == 0 {
            debug!("{}/{} nodes contracted ({} shortcuts just added)", next_rank + 1, n, shortcuts);
        }
    }

    info!("top-down contraction finished: {} nodes ranked", n);
    PreprocessedGraph::build(&overlay, rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::node_index;
    use crate::search::ch_search::CHSearch;
    use crate::search::dijkstra;

    fn diamond() -> Graph {
        // 0 -> 1 -> 3 (1+1=2), 0 -> 2 -> 3 (4+1=5): the 0-1-3 path dominates.
        Graph::from_edges(4, &[
            (node_index(0), node_index(1), 1.0),
            (node_index(1), node_index(3), 1.0),
            (node_index(0), node_index(2), 4.0),
            (node_index(2), node_index(3), 1.0),
        ])
    }

    #[test]
    fn bottom_up_matches_dijkstra() {
        let g = diamond();
        let preproc = preprocess_bottom_up(&g);
        let mut search = CHSearch::new(&preproc);

        for s in 0..g.num_nodes() {
            for t in 0..g.num_nodes() {
                let s = node_index(s);
                let t = node_index(t);
                assert_eq!(search.query(s, t), dijkstra::shortest_path(&g, s, t));
            }
        }
    }

    #[test]
    fn top_down_matches_dijkstra() {
        let g = diamond();
        let preproc = preprocess_top_down(&g);
        let mut search = CHSearch::new(&preproc);

        for s in 0..g.num_nodes() {
            for t in 0..g.num_nodes() {
                let s = node_index(s);
                let t = node_index(t);
                assert_eq!(search.query(s, t), dijkstra::shortest_path(&g, s, t));
            }
        }
    }

    #[test]
    fn empty_graph_preprocesses_to_empty() {
        let g = Graph::from_edges(0, &[]);
        let preproc = preprocess_bottom_up(&g);
        assert_eq!(preproc.num_nodes(), 0);
        let preproc = preprocess_top_down(&g);
        assert_eq!(preproc.num_nodes(), 0);
    }
}
