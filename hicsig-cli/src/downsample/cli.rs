use clap::{Arg, Command, arg};

use crate::common::with_band_args;

pub const DOWNSAMPLE_CMD: &str = "downsample";

pub fn create_downsample_cli() -> Command {
    let cmd = Command::new(DOWNSAMPLE_CMD)
        .about("Max-pool a fine resolution contact matrix (.npy) onto a coarser bin grid over in-band region pairs.")
        .arg(
            arg!(--matrix <MATRIX>)
                .required(true)
                .help("Square fine resolution matrix (.npy, float64)"),
        )
        .arg(
            arg!(--regions <REGIONS>)
                .required(true)
                .help("Region list: one midpoint per line, aligned to the fine bin grid"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(true)
                .help("Output coarse matrix (.npy)"),
        )
        .arg(
            Arg::new("fine-resolution")
                .long("fine-resolution")
                .value_parser(clap::value_parser!(u32))
                .help("Bin size of the input matrix in bp (default: 1000)"),
        )
        .arg(
            arg!(--factor <FACTOR>)
                .required(false)
                .value_parser(clap::value_parser!(u32))
                .help("Odd number of fine bins per coarse bin (default: 5)"),
        )
        .arg(
            Arg::new("coarse-size")
                .long("coarse-size")
                .value_parser(clap::value_parser!(usize))
                .conflicts_with("chrom-length")
                .help("Number of coarse bins (default: derived from the fine matrix)"),
        )
        .arg(
            Arg::new("chrom-length")
                .long("chrom-length")
                .value_parser(clap::value_parser!(u64))
                .help("Size the coarse matrix to cover a chromosome of this length in bp"),
        );
    with_band_args(cmd)
}
