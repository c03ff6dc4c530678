//! End-to-end scenarios: both preprocessing strategies must agree with
//! a plain reference Dijkstra over the original input graph, on every
//! literal fixture plus a randomized sweep over a denser graph.
use approx::assert_abs_diff_eq;
use proptest::prelude::*;

use ch_engine::prelude::*;
use ch_engine::search::dijkstra;
use ch_engine::util::test_graphs;

fn assert_matches_dijkstra(g: &Graph) {
    for preproc in [preprocess_bottom_up(g), preprocess_top_down(g)] {
        for s in 0..g.num_nodes() {
            for t in 0..g.num_nodes() {
                let s = node_index(s);
                let t = node_index(t);
                let expected = dijkstra::shortest_path(g, s, t);
                let actual = query(&preproc, s, t);
                if expected.is_finite() {
                    assert_abs_diff_eq!(actual, expected, epsilon = 1e-9);
                } else {
                    assert!(actual.is_infinite(), "expected no path from {:?} to {:?}", s, t);
                }
            }
        }
    }
}

#[test]
fn triangle_scenario() {
    assert_matches_dijkstra(&test_graphs::triangle());
}

#[test]
fn line_scenario() {
    assert_matches_dijkstra(&test_graphs::line(10));
}

#[test]
fn diamond_with_detour_scenario() {
    assert_matches_dijkstra(&test_graphs::diamond_with_detour());
}

#[test]
fn isolated_sink_scenario() {
    assert_matches_dijkstra(&test_graphs::isolated_sink());
}

#[test]
fn zero_weight_chain_scenario() {
    assert_matches_dijkstra(&test_graphs::zero_weight_chain());
}

#[test]
fn simple_graph_with_witness_structure() {
    assert_matches_dijkstra(&test_graphs::generate_simple_graph());
}

proptest! {
    #[test]
    fn bottom_up_matches_dijkstra_on_complex_graph(s in 0usize..11, t in 0usize..11) {
        let g = test_graphs::generate_complex_graph();
        let preproc = preprocess_bottom_up(&g);
        let expected = dijkstra::shortest_path(&g, node_index(s), node_index(t));
        let actual = query(&preproc, node_index(s), node_index(t));
        if expected.is_finite() {
            assert_abs_diff_eq!(actual, expected, epsilon = 1e-9);
        } else {
            prop_assert!(actual.is_infinite());
        }
    }

    #[test]
    fn top_down_matches_dijkstra_on_complex_graph(s in 0usize..11, t in 0usize..11) {
        let g = test_graphs::generate_complex_graph();
        let preproc = preprocess_top_down(&g);
        let expected = dijkstra::shortest_path(&g, node_index(s), node_index(t));
        let actual = query(&preproc, node_index(s), node_index(t));
        if expected.is_finite() {
            assert_abs_diff_eq!(actual, expected, epsilon = 1e-9);
        } else {
            prop_assert!(actual.is_infinite());
        }
    }
}
