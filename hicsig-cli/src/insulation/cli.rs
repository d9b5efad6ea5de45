use clap::{Arg, Command, arg};

pub const INSULATION_CMD: &str = "insulation";

pub fn create_insulation_cli() -> Command {
    Command::new(INSULATION_CMD)
        .about("Compute per-bin insulation scores of a contact matrix (.npy). Outputs bedGraph.")
        .arg(
            arg!(--matrix <MATRIX>)
                .required(true)
                .help("Square contact matrix (.npy, float64)"),
        )
        .arg(
            arg!(--chrom <CHROM>)
                .required(true)
                .help("Chromosome name written to the bedGraph"),
        )
        .arg(
            arg!(--resolution <RESOLUTION>)
                .required(false)
                .value_parser(clap::value_parser!(u32))
                .help("Bin size of the matrix in bp (default: fine resolution x factor, 5000)"),
        )
        .arg(
            Arg::new("window")
                .long("window")
                .value_parser(clap::value_parser!(usize))
                .help("Window size in bins, centred on each bin (default: 200)"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output bedGraph path (default: stdout)"),
        )
}
