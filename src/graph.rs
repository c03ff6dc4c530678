//! Input graph module. The directed graph is represented as an immutable
//! compressed-sparse-row (CSR) adjacency structure, read-only from the
//! moment preprocessing begins.
use std::path::Path;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use crate::constants::Weight;

/// Default integer type for node indices.
pub type DefaultIdx = u32;

/// Node identifier: a position in `[0, N)`, stable across preprocessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct NodeIndex(DefaultIdx);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as DefaultIdx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for NodeIndex {
    fn from(x: usize) -> Self {
        NodeIndex::new(x)
    }
}

/// Short version of `NodeIndex::new`.
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// A directed graph G = (V,E) stored in compressed-sparse-row form.
///
/// Invariants:
/// - `first_out` has length `N+1`, monotonically non-decreasing,
///   `first_out[0] = 0`, `first_out[N] = E`.
/// - the outgoing edges of `u` are the contiguous range
///   `[first_out[u], first_out[u+1])` of `to`/`weights`.
/// - self-loops and multi-edges are tolerated but not deduplicated here;
///   they are collapsed when an arc is inserted into the overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    first_out: Vec<u32>,
    to: Vec<NodeIndex>,
    weights: Vec<Weight>,
}

impl Graph {
    /// Builds a CSR graph from `num_nodes` nodes and an edge list, bucketing
    /// by source node via a counting sort (stable: arcs keep their relative
    /// input order within a node's bucket).
    pub fn from_edges(num_nodes: usize, edges: &[(NodeIndex, NodeIndex, Weight)]) -> Self {
        let mut first_out = vec![0u32; num_nodes + 1];

        for &(u, v, w) in edges {
            assert!(u.index() < num_nodes, "edge source {} out of range", u.index());
            assert!(v.index() < num_nodes, "edge target {} out of range", v.index());
            assert!(w >= 0.0 && w.is_finite(), "edge weight must be non-negative and finite, got {}", w);
            first_out[u.index() + 1] += 1;
        }

        for i in 0..num_nodes {
            first_out[i + 1] += first_out[i];
        }

        let mut to = vec![NodeIndex::new(0); edges.len()];
        let mut weights = vec![0.0; edges.len()];
        let mut cursor = first_out.clone();

        for &(u, v, w) in edges {
            let pos = cursor[u.index()] as usize;
            to[pos] = v;
            weights[pos] = w;
            cursor[u.index()] += 1;
        }

        Graph { first_out, to, weights }
    }

    pub fn num_nodes(&self) -> usize {
        self.first_out.len().saturating_sub(1)
    }

    pub fn num_edges(&self) -> usize {
        self.to.len()
    }

    /// Iterates the outgoing arcs of `u` as `(neighbor, weight)` pairs.
    pub fn neighbors_outgoing(&self, u: NodeIndex) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        let start = self.first_out[u.index()] as usize;
        let end = self.first_out[u.index() + 1] as usize;
        (start..end).map(move |e| (self.to[e], self.weights[e]))
    }

    /// Parses a graph from one of the two accepted text formats: DIMACS-like
    /// (`c` comments, `p sp N E`, `a u v w` with 1-based ids) or Plain
    /// (`N E` header, `u v w` lines with 0-based ids).
    pub fn from_text(input: &str) -> anyhow::Result<Self> {
        let lines: Vec<&str> = input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        if lines.is_empty() {
            bail!("graph file is empty");
        }

        let first_token = lines[0].split_whitespace().next().unwrap_or("");
        if first_token == "c" || first_token == "p" {
            Self::parse_dimacs(&lines)
        } else {
            Self::parse_plain(&lines)
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("reading graph file {:?}", path.as_ref()))?;
        Self::from_text(&content)
    }

    fn parse_dimacs(lines: &[&str]) -> anyhow::Result<Self> {
        let mut cursor = 0;
        while cursor < lines.len() && lines[cursor].starts_with('c') {
            cursor += 1;
        }

        let problem_line = *lines.get(cursor).context("missing problem line 'p sp N E'")?;
        cursor += 1;

        let tokens: Vec<&str> = problem_line.split_whitespace().collect();
        if tokens.len() != 4 || tokens[0] != "p" || tokens[1] != "sp" {
            bail!("malformed problem line, expected 'p sp N E': {:?}", problem_line);
        }
        let n: i64 = tokens[2].parse().context("malformed node count")?;
        let e: i64 = tokens[3].parse().context("malformed edge count")?;
        if n <= 0 {
            bail!("node count must be positive, got {}", n);
        }
        if e < 0 {
            bail!("edge count must be non-negative, got {}", e);
        }
        let n = n as usize;
        let e = e as usize;

        let mut edges = Vec::with_capacity(e);
        while cursor < lines.len() {
            let line = lines[cursor];
            cursor += 1;

            if line.starts_with('c') {
                continue;
            }
            if !line.starts_with('a') {
                bail!("unexpected line in graph file: {:?}", line);
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != 4 {
                bail!("malformed arc line, expected 'a u v w': {:?}", line);
            }
            let u: i64 = tokens[1].parse().context("malformed arc source")?;
            let v: i64 = tokens[2].parse().context("malformed arc target")?;
            let w: Weight = tokens[3].parse().context("malformed arc weight")?;

            if u < 1 || u > n as i64 || v < 1 || v > n as i64 {
                bail!("arc endpoint out of range: {:?}", line);
            }
            if !(w >= 0.0 && w.is_finite()) {
                bail!("arc weight must be non-negative and finite: {:?}", line);
            }

            edges.push((node_index(u as usize - 1), node_index(v as usize - 1), w));
        }

        if edges.len() != e {
            bail!(
                "declared edge count {} does not match actual arc count {}",
                e,
                edges.len()
            );
        }

        Ok(Graph::from_edges(n, &edges))
    }

    fn parse_plain(lines: &[&str]) -> anyhow::Result<Self> {
        let tokens: Vec<&str> = lines[0].split_whitespace().collect();
        if tokens.len() != 2 {
            bail!("malformed header line, expected 'N E': {:?}", lines[0]);
        }
        let n: i64 = tokens[0].parse().context("malformed node count")?;
        let e: i64 = tokens[1].parse().context("malformed edge count")?;
        if n <= 0 {
            bail!("node count must be positive, got {}", n);
        }
        if e < 0 {
            bail!("edge count must be non-negative, got {}", e);
        }
        let n = n as usize;
        let e = e as usize;

        let mut edges = Vec::with_capacity(e);
        for &line in &lines[1..] {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != 3 {
                bail!("malformed edge line, expected 'u v w': {:?}", line);
            }
            let u: i64 = tokens[0].parse().context("malformed edge source")?;
            let v: i64 = tokens[1].parse().context("malformed edge target")?;
            let w: Weight = tokens[2].parse().context("malformed edge weight")?;

            if u < 0 || u >= n as i64 || v < 0 || v >= n as i64 {
                bail!("edge endpoint out of range: {:?}", line);
            }
            if !(w >= 0.0 && w.is_finite()) {
                bail!("edge weight must be non-negative and finite: {:?}", line);
            }

            edges.push((node_index(u as usize), node_index(v as usize), w));
        }

        if edges.len() != e {
            bail!(
                "declared edge count {} does not match actual edge count {}",
                e,
                edges.len()
            );
        }

        Ok(Graph::from_edges(n, &edges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_has_zero_nodes() {
        let g = Graph::from_edges(0, &[]);
        assert_eq!(g.num_nodes(), 0);
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn parses_dimacs_with_comments() {
        let input = "c a road network\np sp 3 2\na 1 2 1.5\nc mid comment\na 2 3 2.0\n";
        let g = Graph::from_text(input).unwrap();
        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.num_edges(), 2);
        let out0: Vec<_> = g.neighbors_outgoing(node_index(0)).collect();
        assert_eq!(out0, vec![(node_index(1), 1.5)]);
    }

    #[test]
    fn parses_plain_format() {
        let input = "3 2\n0 1 1.5\n1 2 2.0\n";
        let g = Graph::from_text(input).unwrap();
        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.num_edges(), 2);
    }

    #[test]
    fn rejects_arc_count_mismatch() {
        let input = "p sp 2 2\na 1 2 1.0\n";
        assert!(Graph::from_text(input).is_err());
    }

    #[test]
    fn rejects_out_of_range_endpoint() {
        let input = "p sp 2 1\na 1 3 1.0\n";
        assert!(Graph::from_text(input).is_err());
    }

    #[test]
    fn rejects_negative_node_count() {
        assert!(Graph::from_text("p sp 0 0\n").is_err());
        assert!(Graph::from_text("0 0\n").is_err());
    }

    #[test]
    fn rejects_unrecognized_first_character() {
        assert!(Graph::from_text("x weird line\n").is_err());
    }
}
