//! Priority of uncontracted nodes, and a min-heap over it that tolerates
//! stale entries instead of supporting decrease-key.
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::NodeIndex;
use crate::overlay::OverlayStore;

/// `in_deg(v) * out_deg(v) + out_deg(v)`, counting only arcs to currently
/// uncontracted neighbors.
pub(crate) fn importance(overlay: &OverlayStore, is_contracted: &[bool], v: NodeIndex) -> i64 {
    let in_deg = overlay
        .incoming(v)
        .iter()
        .filter(|a| !is_contracted[a.neighbor.index()])
        .count() as i64;
    let out_deg = overlay
        .outgoing(v)
        .iter()
        .filter(|a| !is_contracted[a.neighbor.index()])
        .count() as i64;
    in_deg * out_deg + out_deg
}

/// Min-heap of `(importance, node)`, tie-broken by node id. Updates are
/// lazy: callers push a fresh entry instead of decreasing a key, and skip
/// stale pops by recomputing importance on the read side.
pub(crate) struct ImportanceHeap {
    heap: BinaryHeap<Reverse<(i64, NodeIndex)>>,
}

impl ImportanceHeap {
    pub(crate) fn new() -> Self {
        ImportanceHeap { heap: BinaryHeap::new() }
    }

    pub(crate) fn push(&mut self, importance: i64, node: NodeIndex) {
        self.heap.push(Reverse((importance, node)));
    }

    pub(crate) fn pop(&mut self) -> Option<(i64, NodeIndex)> {
        self.heap.pop().map(|Reverse(pair)| pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{node_index, Graph};

    #[test]
    fn importance_counts_only_uncontracted_neighbors() {
        let g = Graph::from_edges(3, &[
            (node_index(0), node_index(1), 1.0),
            (node_index(2), node_index(1), 1.0),
            (node_index(1), node_index(0), 1.0),
        ]);
        let overlay = OverlayStore::seed_from_graph(&g);
        let mut contracted = vec![false; 3];

        // node 1: in_deg=2 (0,2), out_deg=1 (0) -> 2*1+1 = 3
        assert_eq!(importance(&overlay, &contracted, node_index(1)), 3);

        contracted[2] = true;
        // node 1: in_deg=1 (0), out_deg=1 (0) -> 1*1+1 = 2
        assert_eq!(importance(&overlay, &contracted, node_index(1)), 2);
    }

    #[test]
    fn heap_pops_in_ascending_then_node_id_order() {
        let mut heap = ImportanceHeap::new();
        heap.push(5, node_index(2));
        heap.push(5, node_index(1));
        heap.push(1, node_index(0));

        assert_eq!(heap.pop(), Some((1, node_index(0))));
        assert_eq!(heap.pop(), Some((5, node_index(1))));
        assert_eq!(heap.pop(), Some((5, node_index(2))));
        assert_eq!(heap.pop(), None);
    }
}
