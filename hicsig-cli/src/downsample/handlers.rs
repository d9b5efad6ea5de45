use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use hicsig_core::HicsigConfig;
use hicsig_io::{read_matrix, read_regions, write_matrix};
use hicsig_matrix::Downsampler;

use crate::common::resolve_band;

pub fn run_downsample(matches: &ArgMatches, config: &HicsigConfig) -> Result<()> {
    let matrix_path = matches
        .get_one::<String>("matrix")
        .expect("--matrix is required");
    let regions_path = matches
        .get_one::<String>("regions")
        .expect("--regions is required");
    let output_path = matches
        .get_one::<String>("output")
        .expect("--output is required");

    let fine_resolution = matches
        .get_one::<u32>("fine-resolution")
        .copied()
        .unwrap_or(config.matrix.fine_resolution);
    let factor = matches
        .get_one::<u32>("factor")
        .copied()
        .unwrap_or(config.matrix.factor);
    let band = resolve_band(matches, config)?;

    let mut downsampler = Downsampler::new(fine_resolution, factor, band)
        .context("Invalid downsampling parameters")?;
    if let Some(length) = matches.get_one::<u64>("chrom-length") {
        downsampler = downsampler.with_chrom_length(*length);
    } else if let Some(size) = matches
        .get_one::<usize>("coarse-size")
        .copied()
        .or(config.matrix.coarse_size)
    {
        downsampler = downsampler.with_coarse_size(size);
    }

    let fine = read_matrix(matrix_path, fine_resolution)
        .with_context(|| format!("Failed to load matrix: {}", matrix_path))?;
    let regions = read_regions(regions_path)
        .with_context(|| format!("Failed to load region list: {}", regions_path))?;

    let coarse = downsampler
        .downsample(&fine, &regions)
        .context("Failed to downsample matrix")?;

    write_matrix(output_path, &coarse)
        .with_context(|| format!("Failed to write output file: {}", output_path))?;
    info!(
        "{}x{} matrix at {}bp written to {}",
        coarse.size(),
        coarse.size(),
        coarse.resolution(),
        output_path
    );

    Ok(())
}
