//! Binary entry point: four positional arguments, no flags.
use clap::Parser;

use ch_engine::experiment;
use ch_engine::util::cli::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    experiment::run(&cli.graph_file, &cli.destinations_file, &cli.output_file, cli.run_number)
}
