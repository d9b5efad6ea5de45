use anyhow::{Context, Result};
use clap::ArgMatches;

use hicsig_core::HicsigConfig;
use hicsig_io::read_regions;
use hicsig_stats::count_pairs_in_band;

use crate::common::resolve_band;

pub fn run_count_pairs(matches: &ArgMatches, config: &HicsigConfig) -> Result<()> {
    let regions_path = matches
        .get_one::<String>("regions")
        .expect("--regions is required");

    let band = resolve_band(matches, config)?;
    let regions = read_regions(regions_path)
        .with_context(|| format!("Failed to load region list: {}", regions_path))?;

    let n = count_pairs_in_band(&regions, &band);
    println!("{}", n);

    Ok(())
}
