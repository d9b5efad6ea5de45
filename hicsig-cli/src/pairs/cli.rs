use clap::{Command, arg};

use crate::common::with_band_args;

pub const COUNT_PAIRS_CMD: &str = "count-pairs";

pub fn create_count_pairs_cli() -> Command {
    let cmd = Command::new(COUNT_PAIRS_CMD)
        .about("Count region pairs whose distance lies within the band, i.e. the number of tests for FDR correction.")
        .arg(
            arg!(--regions <REGIONS>)
                .required(true)
                .help("Region list: one midpoint per line"),
        );
    with_band_args(cmd)
}
