use std::io::Write;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use hicsig_core::HicsigConfig;
use hicsig_io::{read_matrix, write_bedgraph};
use hicsig_matrix::insulation_scores;

use crate::common::output_writer;

/// `--resolution`, or the coarse resolution of the configured downsampling.
fn resolve_resolution(matches: &ArgMatches, config: &HicsigConfig) -> Result<u32> {
    match matches.get_one::<u32>("resolution") {
        Some(resolution) => Ok(*resolution),
        None => config.matrix.coarse_resolution().with_context(|| {
            format!(
                "Coarse resolution {} x {} is too large, pass --resolution",
                config.matrix.fine_resolution, config.matrix.factor
            )
        }),
    }
}

pub fn run_insulation(matches: &ArgMatches, config: &HicsigConfig) -> Result<()> {
    let matrix_path = matches
        .get_one::<String>("matrix")
        .expect("--matrix is required");
    let chrom = matches
        .get_one::<String>("chrom")
        .expect("--chrom is required");
    let output_path = matches.get_one::<String>("output");

    let resolution = resolve_resolution(matches, config)?;
    let window = matches
        .get_one::<usize>("window")
        .copied()
        .unwrap_or(config.matrix.window);

    let matrix = read_matrix(matrix_path, resolution)
        .with_context(|| format!("Failed to load matrix: {}", matrix_path))?;

    let scores = insulation_scores(matrix.view(), window)
        .context("Failed to compute insulation scores")?;

    let mut out = output_writer(output_path)?;
    write_bedgraph(&mut out, chrom, resolution, &scores.to_vec())?;
    out.flush()?;

    if let Some(p) = output_path {
        info!("{} insulation scores written to {}", scores.len(), p);
    }

    Ok(())
}
