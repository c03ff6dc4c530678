//! A bidirectional contraction-hierarchies shortest-path engine.
//!
//! Preprocess a graph once with [`contraction::preprocess_bottom_up`] or
//! [`contraction::preprocess_top_down`], then answer any number of
//! point-to-point distance queries against the resulting
//! [`ch_graph::PreprocessedGraph`] with [`search::query`]:
//!
//! ```
//! use ch_engine::prelude::*;
//!
//! let g = Graph::from_edges(3, &[
//!     (node_index(0), node_index(1), 1.0),
//!     (node_index(1), node_index(2), 1.0),
//! ]);
//! let preproc = preprocess_bottom_up(&g);
//! assert_eq!(query(&preproc, node_index(0), node_index(2)), 2.0);
//! ```
pub mod ch_graph;
pub mod constants;
pub mod contraction;
pub mod destinations;
pub mod experiment;
pub mod graph;
pub mod importance;
pub mod measurement;
pub mod overlay;
pub mod prelude;
pub mod search;
pub mod timer;
pub mod util;
pub(crate) mod witness_search;
