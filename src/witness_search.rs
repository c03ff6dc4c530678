//! Witness search: bounded Dijkstra used during contraction to decide
//! whether a shortcut is necessary. Scratch state (`dist`/`touched`) is
//! reused across calls and reset in O(touched), not O(N).
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::constants::Weight;
use crate::graph::NodeIndex;
use crate::overlay::OverlayStore;

#[derive(Debug)]
struct Candidate {
    node: NodeIndex,
    weight: Weight,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight
    }
}
impl Eq for Candidate {}
impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other.weight.partial_cmp(&self.weight).unwrap_or(Ordering::Equal)
    }
}

pub(crate) struct WitnessSearch {
    dist: Vec<Weight>,
    touched: Vec<NodeIndex>,
    queue: BinaryHeap<Candidate>,
}

impl WitnessSearch {
    pub(crate) fn new(num_nodes: usize) -> Self {
        WitnessSearch {
            dist: vec![Weight::INFINITY; num_nodes],
            touched: Vec::new(),
            queue: BinaryHeap::new(),
        }
    }

    fn reset(&mut self) {
        for &v in &self.touched {
            self.dist[v.index()] = Weight::INFINITY;
        }
        self.touched.clear();
        self.queue.clear();
    }

    /// Returns true iff there is a path `s ⇝ t` in `overlay`'s outgoing
    /// arcs, of total weight `<= bound`, avoiding `forbidden` and every
    /// node marked in `is_contracted`.
    pub(crate) fn exists_path_within_bound(
        &mut self,
        overlay: &OverlayStore,
        is_contracted: &[bool],
        s: NodeIndex,
        t: NodeIndex,
        forbidden: NodeIndex,
        bound: Weight,
    ) -> bool {
        self.reset();

        if s == t {
            return true;
        }

        self.dist[s.index()] = 0.0;
        self.touched.push(s);
        self.queue.push(Candidate { node: s, weight: 0.0 });

        while let Some(Candidate { node, weight }) = self.queue.pop() {
            if weight > bound {
                return false;
            }
            if node == t {
                return true;
            }
            if weight > self.dist[node.index()] {
                continue;
            }

            for arc in overlay.outgoing(node) {
                if arc.neighbor == forbidden || is_contracted[arc.neighbor.index()] {
                    continue;
                }
                let nd = weight + arc.weight;
                if nd > bound {
                    continue;
                }
                if nd < self.dist[arc.neighbor.index()] {
                    if self.dist[arc.neighbor.index()].is_infinite() {
                        self.touched.push(arc.neighbor);
                    }
                    self.dist[arc.neighbor.index()] = nd;
                    self.queue.push(Candidate { node: arc.neighbor, weight: nd });
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{node_index, Graph};

    #[test]
    fn finds_witness_within_bound() {
        // 0 -> 1 -> 2 (weight 2 total), 0 -> 2 direct (weight 5).
        let g = Graph::from_edges(3, &[
            (node_index(0), node_index(1), 1.0),
            (node_index(1), node_index(2), 1.0),
            (node_index(0), node_index(2), 5.0),
        ]);
        let overlay = OverlayStore::seed_from_graph(&g);
        let contracted = vec![false; 3];
        let mut ws = WitnessSearch::new(3);

        // forbid node 1: only the direct, more expensive edge remains.
        assert!(!ws.exists_path_within_bound(&overlay, &contracted, node_index(0), node_index(2), node_index(1), 2.0));
        assert!(ws.exists_path_within_bound(&overlay, &contracted, node_index(0), node_index(2), node_index(1), 5.0));

        // without forbidding anything, the cheap path through 1 is a witness.
        assert!(ws.exists_path_within_bound(&overlay, &contracted, node_index(0), node_index(2), node_index(99), 2.0));
    }

    #[test]
    fn source_equals_target_is_trivially_true() {
        let g = Graph::from_edges(1, &[]);
        let overlay = OverlayStore::seed_from_graph(&g);
        let contracted = vec![false; 1];
        let mut ws = WitnessSearch::new(1);
        assert!(ws.exists_path_within_bound(&overlay, &contracted, node_index(0), node_index(0), node_index(0), 0.0));
    }

    #[test]
    fn contracted_node_is_skipped_like_forbidden() {
        let g = Graph::from_edges(3, &[
            (node_index(0), node_index(1), 1.0),
            (node_index(1), node_index(2), 1.0),
        ]);
        let overlay = OverlayStore::seed_from_graph(&g);
        let mut contracted = vec![false; 3];
        contracted[1] = true;
        let mut ws = WitnessSearch::new(3);
        assert!(!ws.exists_path_within_bound(&overlay, &contracted, node_index(0), node_index(2), node_index(99), 10.0));
    }
}
