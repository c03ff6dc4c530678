//! Experiment driver: the thing the CLI binary actually runs. Reads a
//! graph and a destinations file, preprocesses the graph both ways
//! (timing each repetition), queries every destination `run_number`
//! times against both preprocessed graphs, and dumps the timings as a
//! measurement CSV.
use std::path::Path;

use anyhow::Context;
use log::info;

use crate::contraction::{preprocess_bottom_up, preprocess_top_down};
use crate::destinations;
use crate::graph::Graph;
use crate::measurement::Measurement;
use crate::search::CHSearch;
use crate::timer::Timer;

fn format_numb(n: usize, width: usize) -> String {
    format!("{:0width$}", n, width = width)
}

/// Runs one experiment: `graph_file` and `destinations_file` are read once;
/// each of the two preprocessing strategies and every query against them
/// is repeated `run_number` times, and all timings land in `output_file`.
pub fn run(
    graph_file: impl AsRef<Path>,
    destinations_file: impl AsRef<Path>,
    output_file: impl AsRef<Path>,
    run_number: usize,
) -> anyhow::Result<()> {
    info!("Experiment started.");

    info!("Graph file reading started.");
    let graph = Graph::from_file(graph_file.as_ref()).context("reading graph file")?;
    info!("Graph file reading finished.");

    info!("Destinations file reading started.");
    let destinations = destinations::read_file(destinations_file.as_ref())
        .context("reading destinations file")?;
    info!("Destinations file reading finished.");

    let mut measurement = Measurement::new();
    let mut timer = Timer::new();

    info!("Preprocessing graph by bottom-up approach started.");
    let mut bottom_up_graph = None;
    for i in 0..run_number {
        timer.start();
        let preproc = preprocess_bottom_up(&graph);
        timer.stop();
        measurement.record("preproc_graph_bottom_up", timer.result_millis());
        if i == run_number.saturating_sub(1) {
            bottom_up_graph = Some(preproc);
        }
    }
    info!("Preprocessing graph by bottom-up approach finished.");

    if let Some(preproc) = &bottom_up_graph {
        let mut search = CHSearch::new(preproc);
        for (dest_ind, dest) in destinations.iter().enumerate() {
            let key = format!("query_route_bottom_up_{}", format_numb(dest_ind, 2));
            for _ in 0..run_number {
                timer.start();
                search.query(dest.source, dest.target);
                timer.stop();
                measurement.record(key.clone(), timer.result_millis());
            }
        }
    }

    info!("Preprocessing graph by top-down approach started.");
    let mut top_down_graph = None;
    for i in 0..run_number {
        timer.start();
        let preproc = preprocess_top_down(&graph);
        timer.stop();
        measurement.record("preproc_graph_top_down", timer.result_millis());
        if i == run_number.saturating_sub(1) {
            top_down_graph = Some(preproc);
        }
    }
    info!("Preprocessing graph by top-down approach finished.");

    if let Some(preproc) = &top_down_graph {
        let mut search = CHSearch::new(preproc);
        for (dest_ind, dest) in destinations.iter().enumerate() {
            let key = format!("query_route_top_down_{}", format_numb(dest_ind, 2));
            for _ in 0..run_number {
                timer.start();
                search.query(dest.source, dest.target);
                timer.stop();
                measurement.record(key.clone(), timer.result_millis());
            }
        }
    }

    info!("Saving measurements started.");
    measurement
        .write_to(output_file.as_ref())
        .context("writing measurement output")?;
    info!("Saving measurements finished.");

    info!("Experiment finished.");
    Ok(())
}
