//! CH graph builder: partitions the contracted overlay into the upward
//! (forward) and downward-reversed (backward) CSR graphs keyed by rank,
//! producing the `PreprocessedGraph` artifact queries run against. Builds
//! `forward_arcs`/`backward_arcs` via a prefix-sum bucket construction.
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::constants::Weight;
use crate::graph::NodeIndex;
use crate::overlay::OverlayStore;

/// One arc of the preprocessed graph: a neighbor, its weight, and the node
/// whose contraction introduced it (`None` for an original edge).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChArc {
    pub to: NodeIndex,
    pub weight: Weight,
    pub mid: Option<NodeIndex>,
}

/// The immutable, read-only artifact produced once by preprocessing and
/// shared by every subsequent query: a rank permutation plus the upward
/// (`forward`) and downward-reversed (`backward`) CSR graphs.
#[derive(Debug, Serialize, Deserialize)]
pub struct PreprocessedGraph {
    ranks: Vec<usize>,
    forward_first_out: Vec<u32>,
    forward_arcs: Vec<ChArc>,
    backward_first_out: Vec<u32>,
    backward_arcs: Vec<ChArc>,
}

impl PreprocessedGraph {
    /// Builds the upward/downward CSRs from a fully-contracted overlay and
    /// its rank permutation. An arc `u -> v` becomes a forward arc at `u`
    /// when `rank[u] < rank[v]`, and a backward arc at `v` (pointing back
    /// to `u`) when `rank[u] > rank[v]`. Ranks are a permutation and the
    /// overlay never holds self-loops, so `rank[u] == rank[v]` cannot occur.
    pub(crate) fn build(overlay: &OverlayStore, ranks: Vec<usize>) -> Self {
        let n = overlay.num_nodes();
        assert_is_permutation(&ranks);

        let mut forward_counts = vec![0u32; n];
        let mut backward_counts = vec![0u32; n];

        for u in 0..n {
            for arc in overlay.outgoing(NodeIndex::new(u)) {
                let v = arc.neighbor.index();
                assert!(ranks[u] != ranks[v], "overlay arc between two nodes of equal rank");
                if ranks[u] < ranks[v] {
                    forward_counts[u] += 1;
                } else {
                    backward_counts[v] += 1;
                }
            }
        }

        let mut forward_first_out = vec![0u32; n + 1];
        let mut backward_first_out = vec![0u32; n + 1];
        for i in 0..n {
            forward_first_out[i + 1] = forward_first_out[i] + forward_counts[i];
            backward_first_out[i + 1] = backward_first_out[i] + backward_counts[i];
        }

        let filler = ChArc { to: NodeIndex::new(0), weight: 0.0, mid: None };
        let mut forward_arcs = vec![filler; forward_first_out[n] as usize];
        let mut backward_arcs = vec![filler; backward_first_out[n] as usize];
        let mut forward_cursor = forward_first_out.clone();
        let mut backward_cursor = backward_first_out.clone();

        for u in 0..n {
            for arc in overlay.outgoing(NodeIndex::new(u)) {
                let v = arc.neighbor.index();
                if ranks[u] < ranks[v] {
                    let pos = forward_cursor[u] as usize;
                    forward_arcs[pos] = ChArc { to: arc.neighbor, weight: arc.weight, mid: arc.mid };
                    forward_cursor[u] += 1;
                } else {
                    let pos = backward_cursor[v] as usize;
                    backward_arcs[pos] = ChArc { to: NodeIndex::new(u), weight: arc.weight, mid: arc.mid };
                    backward_cursor[v] += 1;
                }
            }
        }

        PreprocessedGraph {
            ranks,
            forward_first_out,
            forward_arcs,
            backward_first_out,
            backward_arcs,
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.ranks.len()
    }

    pub fn rank(&self, v: NodeIndex) -> usize {
        self.ranks[v.index()]
    }

    /// Upward arcs from `v`: neighbors of strictly higher rank.
    pub fn forward(&self, v: NodeIndex) -> &[ChArc] {
        let s = self.forward_first_out[v.index()] as usize;
        let e = self.forward_first_out[v.index() + 1] as usize;
        &self.forward_arcs[s..e]
    }

    /// Downward-reversed arcs at `v`: neighbors of strictly higher rank
    /// that hold an arc back to `v` in the original overlay.
    pub fn backward(&self, v: NodeIndex) -> &[ChArc] {
        let s = self.backward_first_out[v.index()] as usize;
        let e = self.backward_first_out[v.index() + 1] as usize;
        &self.backward_arcs[s..e]
    }

    pub fn encode(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let mut file = std::fs::File::create(path.as_ref())
            .with_context(|| format!("creating {:?}", path.as_ref()))?;
        bincode::serde::encode_into_std_write(self, &mut file, bincode::config::standard())
            .context("encoding preprocessed graph")?;
        Ok(())
    }

    pub fn decode(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path.as_ref())
            .with_context(|| format!("opening {:?}", path.as_ref()))?;
        let mut reader = std::io::BufReader::new(file);
        bincode::serde::decode_from_std_read(&mut reader, bincode::config::standard())
            .context("decoding preprocessed graph")
    }
}

/// Internal invariant: `ranks` must be a permutation of `0..ranks.len()`.
/// A violation is a programming defect, so this asserts unconditionally
/// rather than only in debug builds.
fn assert_is_permutation(ranks: &[usize]) {
    let n = ranks.len();
    let mut seen = vec![false; n];
    for &r in ranks {
        assert!(r < n, "rank out of range: internal invariant violation");
        assert!(!seen[r], "duplicate rank: internal invariant violation");
        seen[r] = true;
    }
}
