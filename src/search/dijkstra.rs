//! Plain reference Dijkstra over the input CSR graph. Used to state and
//! test the correctness property that CH queries must uphold:
//! `query(preprocessed, s, t) == shortest_path(original_graph, s, t)`.
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::constants::Weight;
use crate::graph::{Graph, NodeIndex};

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

/// Single-source, single-target Dijkstra over `graph`'s outgoing CSR
/// adjacency. Out-of-range endpoints or an empty graph return `+inf`;
/// `source == target` returns `0`.
pub fn shortest_path(graph: &Graph, source: NodeIndex, target: NodeIndex) -> Weight {
    let n = graph.num_nodes();
    if n == 0 || source.index() >= n || target.index() >= n {
        return Weight::INFINITY;
    }
    if source == target {
        return 0.0;
    }

    let mut dist = vec![Weight::INFINITY; n];
    let mut queue = BinaryHeap::new();

    dist[source.index()] = 0.0;
    queue.push(Candidate { node: source, weight: 0.0 });

    while let Some(Candidate { node, weight }) = queue.pop() {
        if node == target {
            return weight;
        }
        if weight > dist[node.index()] {
            continue;
        }
        for (to, w) in graph.neighbors_outgoing(node) {
            let nd = weight + w;
            if nd < dist[to.index()] {
                dist[to.index()] = nd;
                queue.push(Candidate { node: to, weight: nd });
            }
        }
    }

    Weight::INFINITY
}
