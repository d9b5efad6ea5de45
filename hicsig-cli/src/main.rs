mod common;
mod downsample;
mod insulation;
mod pairs;
mod significance;

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;

use hicsig_core::HicsigConfig;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "hicsig";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Significance filtering, resolution downsampling and insulation scores for Hi-C contact maps.")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("TOML file with default parameters; command line flags take precedence"),
        )
        .arg(
            Arg::new("threads")
                .long("threads")
                .global(true)
                .value_parser(clap::value_parser!(usize))
                .help("Number of worker threads (default: all cores)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug output (RUST_LOG overrides)"),
        )
        .subcommand(significance::cli::create_significance_cli())
        .subcommand(pairs::cli::create_count_pairs_cli())
        .subcommand(downsample::cli::create_downsample_cli())
        .subcommand(insulation::cli::create_insulation_cli())
}

fn init_logging(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    let _ = builder.try_init();
}

fn load_config(matches: &ArgMatches) -> Result<HicsigConfig> {
    match matches.get_one::<String>("config") {
        Some(path) => HicsigConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load config file: {}", path)),
        None => Ok(HicsigConfig::default()),
    }
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_flag("verbose"));

    if let Some(threads) = matches.get_one::<usize>("threads") {
        rayon::ThreadPoolBuilder::new()
            .num_threads(*threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let config = load_config(&matches)?;

    match matches.subcommand() {
        //
        // SIGNIFICANCE
        //
        Some((significance::cli::SIGNIFICANCE_CMD, matches)) => {
            significance::handlers::run_significance(matches, &config)?;
        }

        //
        // PAIR COUNTING
        //
        Some((pairs::cli::COUNT_PAIRS_CMD, matches)) => {
            pairs::handlers::run_count_pairs(matches, &config)?;
        }

        //
        // DOWNSAMPLING
        //
        Some((downsample::cli::DOWNSAMPLE_CMD, matches)) => {
            downsample::handlers::run_downsample(matches, &config)?;
        }

        //
        // INSULATION
        //
        Some((insulation::cli::INSULATION_CMD, matches)) => {
            insulation::handlers::run_insulation(matches, &config)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::*;

    #[rstest]
    fn test_parser_is_consistent() {
        build_parser().debug_assert();
    }

    #[rstest]
    fn test_global_flags_after_subcommand() {
        let matches = build_parser()
            .try_get_matches_from(["hicsig", "count-pairs", "--regions", "r.txt", "--threads", "2", "-v"])
            .unwrap();
        assert_eq!(matches.get_one::<usize>("threads"), Some(&2));
        assert!(matches.get_flag("verbose"));
    }

    #[rstest]
    fn test_default_config_without_flag() {
        let matches = build_parser()
            .try_get_matches_from(["hicsig", "count-pairs", "--regions", "r.txt"])
            .unwrap();
        assert_eq!(load_config(&matches).unwrap(), HicsigConfig::default());
    }
}
