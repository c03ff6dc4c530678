//! Destinations file parsing: the query workload an experiment run
//! replays against both preprocessed graphs.
use std::path::Path;

use anyhow::{bail, Context};

use crate::graph::NodeIndex;

/// A single `(source, target)` query. Node ids are taken verbatim from the
/// file, never re-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    pub source: NodeIndex,
    pub target: NodeIndex,
}

/// Parses destination lines: `c ...` comments are ignored, `d s t` lines
/// are queries, and any other first token is a parse error.
pub fn parse(input: &str) -> anyhow::Result<Vec<Destination>> {
    let mut destinations = Vec::new();

    for (line_no, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("c") => continue,
            Some("d") => {
                let s: i64 = parts
                    .next()
                    .context("missing source node")?
                    .parse()
                    .context("invalid source node")?;
                let t: i64 = parts
                    .next()
                    .context("missing target node")?
                    .parse()
                    .context("invalid target node")?;
                if s < 0 || t < 0 {
                    bail!("negative node id on line {}", line_no + 1);
                }
                destinations.push(Destination {
                    source: NodeIndex::new(s as usize),
                    target: NodeIndex::new(t as usize),
                });
            }
            Some(other) => bail!("unrecognized line prefix {:?} on line {}", other, line_no + 1),
            None => continue,
        }
    }

    Ok(destinations)
}

pub fn read_file(path: impl AsRef<Path>) -> anyhow::Result<Vec<Destination>> {
    let content = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("reading destinations file {:?}", path.as_ref()))?;
    parse(&content)
}
