//! Measurement CSV dump: an ordered, multi-column timing accumulator.
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;

/// Named timing series, keyed in a `BTreeMap` so the header row comes out
/// lexicographically sorted.
#[derive(Debug, Default)]
pub struct Measurement {
    data: BTreeMap<String, Vec<i64>>,
}

impl Measurement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, column: impl Into<String>, value: i64) {
        self.data.entry(column.into()).or_default().push(value);
    }

    /// Renders the `;`-separated, `\n`-terminated text: a header row of
    /// column keys (each followed by `;`), then data rows up to the
    /// longest column's length, with a trailing `;` on every row and empty
    /// cells for columns shorter than the longest.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();

        for key in self.data.keys() {
            let _ = write!(out, "{};", key);
        }
        out.push('\n');

        let max_rows = self.data.values().map(Vec::len).max().unwrap_or(0);

        for row in 0..max_rows {
            for series in self.data.values() {
                if let Some(value) = series.get(row) {
                    let _ = write!(out, "{};", value);
                } else {
                    out.push(';');
                }
            }
            out.push('\n');
        }

        out
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        std::fs::write(path.as_ref(), self.to_csv())
            .with_context(|| format!("writing measurement to {:?}", path.as_ref()))
    }
}
