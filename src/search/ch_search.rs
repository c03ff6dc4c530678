//! Bidirectional CH query: answers point-to-point distance queries by
//! running Dijkstra from both `source` and `target` over the upward and
//! downward CSRs respectively, pruning with the stall oracle and stopping
//! once neither frontier's best key can improve the current best meeting
//! distance.
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;

use crate::ch_graph::PreprocessedGraph;
use crate::constants::Weight;
use crate::graph::NodeIndex;

use super::stall::{stall_backward, stall_forward};

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

/// Per-query counters, logged at `debug` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub nodes_stalled: usize,
}

/// Answers bidirectional CH queries against one `PreprocessedGraph`. Owns
/// no persistent scratch state between queries (each call allocates fresh
/// distance arrays), but is cheap to construct and safe to reuse across
/// many queries against the same preprocessed graph.
pub struct CHSearch<'a> {
    graph: &'a PreprocessedGraph,
    pub stats: SearchStats,
}

impl<'a> CHSearch<'a> {
    pub fn new(graph: &'a PreprocessedGraph) -> Self {
        CHSearch { graph, stats: SearchStats::default() }
    }

    /// Returns the shortest-path distance from `source` to `target`, or
    /// `+inf` if none exists:
    /// - an empty graph or an out-of-range endpoint returns `+inf`
    /// - `source == target` returns `0` without touching either heap
    pub fn query(&mut self, source: NodeIndex, target: NodeIndex) -> Weight {
        self.stats = SearchStats::default();

        let n = self.graph.num_nodes();
        if n == 0 || source.index() >= n || target.index() >= n {
            return Weight::INFINITY;
        }
        if source == target {
            return 0.0;
        }

        let mut dist_f = vec![Weight::INFINITY; n];
        let mut dist_b = vec![Weight::INFINITY; n];
        let mut queue_f = BinaryHeap::new();
        let mut queue_b = BinaryHeap::new();

        dist_f[source.index()] = 0.0;
        dist_b[target.index()] = 0.0;
        queue_f.push(Candidate { node: source, weight: 0.0 });
        queue_b.push(Candidate { node: target, weight: 0.0 });

        let mut best = Weight::INFINITY;

        while !queue_f.is_empty() || !queue_b.is_empty() {
            let top_f = queue_f.peek().map(|c| c.weight).unwrap_or(Weight::INFINITY);
            let top_b = queue_b.peek().map(|c| c.weight).unwrap_or(Weight::INFINITY);

            if top_f >= best && top_b >= best {
                break;
            }

            let forward_can_improve = top_f < best;
            let backward_can_improve = top_b < best;
            let do_forward = forward_can_improve && (!backward_can_improve || top_f <= top_b);

            if do_forward {
                self.step_forward(&mut queue_f, &mut dist_f, &dist_b, &mut best);
            } else {
                self.step_backward(&mut queue_b, &mut dist_b, &dist_f, &mut best);
            }
        }

        debug!(
            "query {}->{}: nodes_settled={} nodes_stalled={} best={}",
            source.index(),
            target.index(),
            self.stats.nodes_settled,
            self.stats.nodes_stalled,
            best
        );

        best
    }

    fn step_forward(
        &mut self,
        queue_f: &mut BinaryHeap<Candidate>,
        dist_f: &mut [Weight],
        dist_b: &[Weight],
        best: &mut Weight,
    ) {
        let Candidate { node: u, weight: d_u } = queue_f.pop().unwrap();
        if d_u > dist_f[u.index()] {
            return;
        }

        if stall_forward(self.graph, dist_f, u) {
            self.stats.nodes_stalled += 1;
        } else {
            for arc in self.graph.forward(u) {
                let nd = d_u + arc.weight;
                if nd < dist_f[arc.to.index()] {
                    dist_f[arc.to.index()] = nd;
                    queue_f.push(Candidate { node: arc.to, weight: nd });
                }
            }
            self.stats.nodes_settled += 1;
        }

        if dist_b[u.index()].is_finite() {
            let candidate = dist_f[u.index()] + dist_b[u.index()];
            if candidate < *best {
                *best = candidate;
            }
        }
    }

    fn step_backward(
        &mut self,
        queue_b: &mut BinaryHeap<Candidate>,
        dist_b: &mut [Weight],
        dist_f: &[Weight],
        best: &mut Weight,
    ) {
        let Candidate { node: u, weight: d_u } = queue_b.pop().unwrap();
        if d_u > dist_b[u.index()] {
            return;
        }

        if stall_backward(self.graph, dist_b, u) {
            self.stats.nodes_stalled += 1;
        } else {
            for arc in self.graph.backward(u) {
                let nd = d_u + arc.weight;
                if nd < dist_b[arc.to.index()] {
                    dist_b[arc.to.index()] = nd;
                    queue_b.push(Candidate { node: arc.to, weight: nd });
                }
            }
            self.stats.nodes_settled += 1;
        }

        if dist_f[u.index()].is_finite() {
            let candidate = dist_f[u.index()] + dist_b[u.index()];
            if candidate < *best {
                *best = candidate;
            }
        }
    }
}

/// Convenience wrapper over `CHSearch` for one-off queries.
pub fn query(graph: &PreprocessedGraph, source: NodeIndex, target: NodeIndex) -> Weight {
    CHSearch::new(graph).query(source, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contraction::preprocess_bottom_up;
    use crate::graph::{node_index, Graph};
    use crate::search::dijkstra;

    #[test]
    fn empty_graph_query_is_infinity() {
        let g = Graph::from_edges(0, &[]);
        let preproc = preprocess_bottom_up(&g);
        assert_eq!(query(&preproc, node_index(0), node_index(0)), Weight::INFINITY);
    }

    #[test]
    fn self_query_is_zero() {
        let g = Graph::from_edges(2, &[(node_index(0), node_index(1), 1.0)]);
        let preproc = preprocess_bottom_up(&g);
        assert_eq!(query(&preproc, node_index(0), node_index(0)), 0.0);
    }

    #[test]
    fn out_of_range_endpoint_is_infinity() {
        let g = Graph::from_edges(2, &[(node_index(0), node_index(1), 1.0)]);
        let preproc = preprocess_bottom_up(&g);
        assert_eq!(query(&preproc, node_index(0), node_index(9)), Weight::INFINITY);
    }

    #[test]
    fn matches_dijkstra_on_diamond_with_detour() {
        let g = Graph::from_edges(6, &[
            (node_index(0), node_index(1), 1.0),
            (node_index(0), node_index(3), 4.0),
            (node_index(1), node_index(2), 2.0),
            (node_index(1), node_index(4), 5.0),
            (node_index(2), node_index(5), 3.0),
            (node_index(3), node_index(4), 1.0),
            (node_index(4), node_index(5), 2.0),
        ]);
        let preproc = preprocess_bottom_up(&g);
        for s in 0..g.num_nodes() {
            for t in 0..g.num_nodes() {
                let s = node_index(s);
                let t = node_index(t);
                assert_eq!(query(&preproc, s, t), dijkstra::shortest_path(&g, s, t));
            }
        }
    }

    #[test]
    fn unreachable_pair_is_infinity() {
        let g = Graph::from_edges(3, &[(node_index(0), node_index(1), 5.0)]);
        let preproc = preprocess_bottom_up(&g);
        assert_eq!(query(&preproc, node_index(0), node_index(2)), Weight::INFINITY);
        assert_eq!(query(&preproc, node_index(2), node_index(0)), Weight::INFINITY);
    }
}
