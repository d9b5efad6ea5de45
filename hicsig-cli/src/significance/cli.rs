use clap::{Arg, Command, arg};

use crate::common::with_band_args;

pub const SIGNIFICANCE_CMD: &str = "significance";

pub fn create_significance_cli() -> Command {
    let cmd = Command::new(SIGNIFICANCE_CMD)
        .about("Filter contacts by p-value and distance, and attach Benjamini-Hochberg q-values. Outputs TSV sorted by p-value.")
        .arg(
            arg!(--contacts <CONTACTS>)
                .required(true)
                .help("Contact table (TSV or TSV.gz) with chr1, fragmentMid1, chr2, fragmentMid2 and p-value columns"),
        )
        .arg(
            arg!(--alpha <ALPHA>)
                .required(false)
                .value_parser(clap::value_parser!(f64))
                .help("Keep contacts with p-value below alpha (default: 0.01)"),
        )
        .arg(
            arg!(--fdr <FDR>)
                .required(false)
                .value_parser(clap::value_parser!(f64))
                .help("Keep only contacts with q-value at or below this threshold"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output TSV path, gzipped when ending in .gz (default: stdout)"),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .required(false)
                .help("Write a JSON run summary to this path"),
        );
    with_band_args(cmd)
}
