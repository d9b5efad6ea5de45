use std::io::Write;

///
/// Write per-bin scores as bedGraph: `chrom  start  end  score`, with bin `i`
/// spanning `[i * resolution, (i + 1) * resolution)`.
///
pub fn write_bedgraph<W: Write>(
    out: &mut W,
    chrom: &str,
    resolution: u32,
    scores: &[f64],
) -> std::io::Result<()> {
    let resolution = resolution as u64;
    for (i, score) in scores.iter().enumerate() {
        let start = i as u64 * resolution;
        writeln!(out, "{}\t{}\t{}\t{}", chrom, start, start + resolution, score)?;
    }
    Ok(())
}
