use std::io::{BufRead, Write};
use std::path::Path;

use log::debug;

use crate::error::{HicsigIoError, Result};
use crate::utils::{get_dynamic_reader, get_dynamic_writer};

///
/// Parse a region list: one integer midpoint per line. Blank lines and lines
/// starting with `#` are skipped. Order is preserved.
///
pub fn parse_regions<R: BufRead>(reader: R) -> Result<Vec<u32>> {
    let mut regions = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let mid = trimmed.parse::<u32>().map_err(|_| HicsigIoError::Parse {
            line: i + 1,
            message: format!("invalid region midpoint `{}`", trimmed),
        })?;
        regions.push(mid);
    }
    Ok(regions)
}

pub fn read_regions<P: AsRef<Path>>(path: P) -> Result<Vec<u32>> {
    let path = path.as_ref();
    let regions = parse_regions(get_dynamic_reader(path)?)?;
    debug!("Read {} regions from {}", regions.len(), path.display());
    Ok(regions)
}

pub fn write_regions<P: AsRef<Path>>(path: P, regions: &[u32]) -> Result<()> {
    let mut writer = get_dynamic_writer(path.as_ref())?;
    for mid in regions {
        writeln!(writer, "{}", mid)?;
    }
    writer.flush()?;
    Ok(())
}
