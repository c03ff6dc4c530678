//! Small fixture graphs shared by the test suite: the literal end-to-end
//! scenarios, plus a couple of hand-built graphs for broader property
//! testing.
use crate::graph::{node_index, Graph};

/// N=3 triangle: the short edge 1->2 makes 0->1->2 beat 0->2 directly.
pub fn triangle() -> Graph {
    Graph::from_edges(3, &[
        (node_index(0), node_index(1), 1.0),
        (node_index(0), node_index(2), 3.0),
        (node_index(1), node_index(2), 1.0),
    ])
}

/// N=10 line graph: i -> i+1, weight 1.
pub fn line(n: usize) -> Graph {
    let edges: Vec<_> = (0..n - 1)
        .map(|i| (node_index(i), node_index(i + 1), 1.0))
        .collect();
    Graph::from_edges(n, &edges)
}

/// N=6 diamond with a longer detour: 0-1-2-5 (1+2+3=6) competes with the
/// shorter 0-3-4-5 (4+1+2=7), plus a direct 1-4 shortcut that never wins.
pub fn diamond_with_detour() -> Graph {
    Graph::from_edges(6, &[
        (node_index(0), node_index(1), 1.0),
        (node_index(0), node_index(3), 4.0),
        (node_index(1), node_index(2), 2.0),
        (node_index(1), node_index(4), 5.0),
        (node_index(2), node_index(5), 3.0),
        (node_index(3), node_index(4), 1.0),
        (node_index(4), node_index(5), 2.0),
    ])
}

/// N=3 isolated sink: node 2 has no outgoing arcs and node 1 is
/// unreachable from node 2.
pub fn isolated_sink() -> Graph {
    Graph::from_edges(3, &[
        (node_index(0), node_index(1), 5.0),
        (node_index(0), node_index(2), 7.0),
    ])
}

/// N=3 chain carrying a zero-weight edge.
pub fn zero_weight_chain() -> Graph {
    Graph::from_edges(3, &[
        (node_index(0), node_index(1), 0.0),
        (node_index(1), node_index(2), 0.0),
    ])
}

/// A small graph with a non-trivial witness structure:
///
/// ```text
/// E -> A -> C -> D
///      |    ^    |
///      v    |    v
///      D----+    C
/// ```
///
/// `A -> D` is a direct edge of weight 1, competing with `A -> C -> D`
/// (also weight 2) as a witness for the shortcut that would otherwise be
/// added when contracting `C`.
pub fn generate_simple_graph() -> Graph {
    let a = node_index(0);
    let b = node_index(1);
    let c = node_index(2);
    let d = node_index(3);
    let e = node_index(4);

    Graph::from_edges(5, &[
        (a, c, 1.0),
        (a, d, 1.0),
        (e, a, 1.0),
        (c, b, 1.0),
        (b, c, 1.0),
        (c, d, 1.0),
        (d, c, 1.0),
    ])
}

/// An 11-node bidirectionally-connected graph (A..K), dense enough to
/// exercise several contractions and non-trivial shortcut chains.
pub fn generate_complex_graph() -> Graph {
    let nodes: Vec<_> = (0..11).map(node_index).collect();
    let [a, b, c, d, e, f, g, h, i, j, k]: [_; 11] = nodes.try_into().unwrap();

    let bidirectional = [
        (a, b, 4.0),
        (a, c, 2.0),
        (b, c, 1.0),
        (b, d, 5.0),
        (c, d, 8.0),
        (c, e, 10.0),
        (d, e, 2.0),
        (d, f, 6.0),
        (e, f, 3.0),
        (e, g, 1.0),
        (f, g, 4.0),
        (f, h, 7.0),
        (g, h, 2.0),
        (g, i, 5.0),
        (h, i, 3.0),
        (h, j, 6.0),
        (i, j, 1.0),
        (i, k, 4.0),
        (j, k, 2.0),
    ];

    let mut edges = Vec::with_capacity(bidirectional.len() * 2);
    for (u, v, w) in bidirectional {
        edges.push((u, v, w));
        edges.push((v, u, w));
    }

    Graph::from_edges(11, &edges)
}
