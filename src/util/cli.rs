//! Command-line surface: exactly four positional arguments. Any other
//! arity terminates with an error before any work is done, since `clap`
//! enforces this for us by rejecting missing/extra positionals.
use std::path::PathBuf;

use clap::Parser;

/// Runs a contraction-hierarchies experiment: preprocesses `graph_file`
/// both ways and replays `destinations_file` against both, `run_number`
/// times each, writing timings to `output_file`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Graph file, DIMACS-like or Plain text format.
    pub graph_file: PathBuf,

    /// Destinations file listing the query workload.
    pub destinations_file: PathBuf,

    /// Where to write the measurement CSV.
    pub output_file: PathBuf,

    /// Number of repetitions for each timed phase.
    pub run_number: usize,
}
