//! Convenience re-exports of the crate's core types and entry points.
pub use crate::ch_graph::{ChArc, PreprocessedGraph};
pub use crate::constants::Weight;
pub use crate::contraction::{preprocess_bottom_up, preprocess_top_down};
pub use crate::destinations::{self, Destination};
pub use crate::graph::{node_index, Graph, NodeIndex};
pub use crate::search::{query, CHSearch, SearchStats};
