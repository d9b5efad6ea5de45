use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};

use hicsig_core::HicsigConfig;
use hicsig_core::models::DistanceBand;

pub const MIN_DISTANCE_ARG: &str = "min-distance";
pub const MAX_DISTANCE_ARG: &str = "max-distance";

/// Add `--min-distance` / `--max-distance` to a subcommand.
pub fn with_band_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new(MIN_DISTANCE_ARG)
            .long(MIN_DISTANCE_ARG)
            .value_parser(clap::value_parser!(u32))
            .help("Minimum genomic distance in bp, inclusive (default: 50000)"),
    )
    .arg(
        Arg::new(MAX_DISTANCE_ARG)
            .long(MAX_DISTANCE_ARG)
            .value_parser(clap::value_parser!(u32))
            .help("Maximum genomic distance in bp, inclusive (default: 1000000)"),
    )
}

/// Distance band from the command line, falling back to the config.
pub fn resolve_band(matches: &ArgMatches, config: &HicsigConfig) -> Result<DistanceBand> {
    let min = matches
        .get_one::<u32>(MIN_DISTANCE_ARG)
        .copied()
        .unwrap_or(config.significance.min_distance);
    let max = matches
        .get_one::<u32>(MAX_DISTANCE_ARG)
        .copied()
        .unwrap_or(config.significance.max_distance);

    DistanceBand::new(min, max).context("Invalid distance band")
}

/// Writer to `path`, or to stdout when no path is given.
pub fn output_writer(path: Option<&String>) -> Result<Box<dyn Write>> {
    match path {
        Some(p) => {
            let file = File::create(Path::new(p))
                .with_context(|| format!("Failed to create output file: {}", p))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}
