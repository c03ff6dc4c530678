//! Overlay store: the mutable working adjacency used during contraction.
//! Discarded once the CH graph builder has extracted the upward/downward
//! CSRs.
use crate::constants::Weight;
use crate::graph::{Graph, NodeIndex};

/// One direction's view of an overlay arc: the neighbor, the arc weight, and
/// the node whose contraction introduced it as a shortcut (`None` for an
/// original edge).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayArc {
    pub neighbor: NodeIndex,
    pub weight: Weight,
    pub mid: Option<NodeIndex>,
}

/// Dual-indexed (outgoing + incoming) adjacency with "add-or-decrease"
/// (minimum-weight) arc insertion.
pub struct OverlayStore {
    out: Vec<Vec<OverlayArc>>,
    in_: Vec<Vec<OverlayArc>>,
}

impl OverlayStore {
    pub fn new(num_nodes: usize) -> Self {
        OverlayStore {
            out: vec![Vec::new(); num_nodes],
            in_: vec![Vec::new(); num_nodes],
        }
    }

    /// Seeds an overlay with every arc of `graph`; self-loops are skipped
    /// and multi-edges between the same pair collapse to their minimum
    /// weight.
    pub fn seed_from_graph(graph: &Graph) -> Self {
        let mut overlay = OverlayStore::new(graph.num_nodes());
        for u in 0..graph.num_nodes() {
            let u = NodeIndex::new(u);
            for (v, w) in graph.neighbors_outgoing(u) {
                overlay.add_or_decrease(u, v, w, None);
            }
        }
        overlay
    }

    pub fn num_nodes(&self) -> usize {
        self.out.len()
    }

    /// Inserts or improves the arc `from -> to`. No-op if `from == to` or
    /// either endpoint is out of range; otherwise keeps the lower of the
    /// existing and new weight, mirrored on both the outgoing and incoming
    /// side.
    pub fn add_or_decrease(&mut self, from: NodeIndex, to: NodeIndex, weight: Weight, mid: Option<NodeIndex>) {
        if from == to {
            return;
        }
        if from.index() >= self.out.len() || to.index() >= self.out.len() {
            return;
        }

        match self.out[from.index()].iter().position(|a| a.neighbor == to) {
            Some(i) => {
                if weight < self.out[from.index()][i].weight {
                    self.out[from.index()][i].weight = weight;
                    self.out[from.index()][i].mid = mid;
                } else {
                    return;
                }
            }
            None => self.out[from.index()].push(OverlayArc { neighbor: to, weight, mid }),
        }

        match self.in_[to.index()].iter_mut().find(|a| a.neighbor == from) {
            Some(arc) => {
                arc.weight = weight;
                arc.mid = mid;
            }
            None => self.in_[to.index()].push(OverlayArc { neighbor: from, weight, mid }),
        }
    }

    pub fn outgoing(&self, v: NodeIndex) -> &[OverlayArc] {
        &self.out[v.index()]
    }

    pub fn incoming(&self, v: NodeIndex) -> &[OverlayArc] {
        &self.in_[v.index()]
    }

    pub fn out_degree(&self, v: NodeIndex) -> usize {
        self.out[v.index()].len()
    }

    pub fn in_degree(&self, v: NodeIndex) -> usize {
        self.in_[v.index()].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::node_index;

    #[test]
    fn seeds_from_graph_and_skips_self_loop() {
        let g = Graph::from_edges(3, &[
            (node_index(0), node_index(1), 1.0),
            (node_index(1), node_index(1), 5.0),
        ]);
        let overlay = OverlayStore::seed_from_graph(&g);
        assert_eq!(overlay.out_degree(node_index(1)), 0);
        assert_eq!(overlay.out_degree(node_index(0)), 1);
    }

    #[test]
    fn add_or_decrease_collapses_to_minimum() {
        let mut overlay = OverlayStore::new(2);
        overlay.add_or_decrease(node_index(0), node_index(1), 5.0, None);
        overlay.add_or_decrease(node_index(0), node_index(1), 2.0, Some(node_index(1)));
        overlay.add_or_decrease(node_index(0), node_index(1), 9.0, None);

        assert_eq!(overlay.outgoing(node_index(0)).len(), 1);
        let arc = overlay.outgoing(node_index(0))[0];
        assert_eq!(arc.weight, 2.0);
        assert_eq!(arc.mid, Some(node_index(1)));

        assert_eq!(overlay.incoming(node_index(1)).len(), 1);
        assert_eq!(overlay.incoming(node_index(1))[0].weight, 2.0);
    }

    #[test]
    fn add_or_decrease_ignores_self_loop_and_out_of_range() {
        let mut overlay = OverlayStore::new(2);
        overlay.add_or_decrease(node_index(0), node_index(0), 1.0, None);
        overlay.add_or_decrease(node_index(0), node_index(5), 1.0, None);
        assert_eq!(overlay.out_degree(node_index(0)), 0);
    }
}
