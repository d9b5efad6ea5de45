use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::path::Path;
use std::str::FromStr;

use log::debug;

use hicsig_core::models::{Contact, ContactTable};

use crate::consts::*;
use crate::error::{HicsigIoError, Result};
use crate::utils::{get_dynamic_reader, get_dynamic_writer};

/// Column positions of the fields we read, resolved from the header.
struct ContactColumns {
    chr1: usize,
    mid1: usize,
    chr2: usize,
    mid2: usize,
    p_value: usize,
    q_value: Option<usize>,
}

impl ContactColumns {
    fn from_header(header: &str) -> Result<Self> {
        let index: HashMap<&str, usize> = header
            .trim_end()
            .split('\t')
            .enumerate()
            .map(|(i, name)| (name.trim(), i))
            .collect();

        let required = |name: &str| {
            index
                .get(name)
                .copied()
                .ok_or_else(|| HicsigIoError::MissingColumn(name.to_string()))
        };

        Ok(ContactColumns {
            chr1: required(CHR1_COLUMN)?,
            mid1: required(MID1_COLUMN)?,
            chr2: required(CHR2_COLUMN)?,
            mid2: required(MID2_COLUMN)?,
            p_value: required(P_VALUE_COLUMN)?,
            q_value: index.get(Q_VALUE_COLUMN).copied(),
        })
    }
}

fn field<'a>(fields: &[&'a str], idx: usize, line: usize) -> Result<&'a str> {
    fields.get(idx).copied().ok_or_else(|| HicsigIoError::Parse {
        line,
        message: format!("expected at least {} fields, found {}", idx + 1, fields.len()),
    })
}

fn parse_field<T: FromStr>(fields: &[&str], idx: usize, line: usize, name: &str) -> Result<T> {
    let raw = field(fields, idx, line)?;
    raw.trim().parse::<T>().map_err(|_| HicsigIoError::Parse {
        line,
        message: format!("invalid {} value `{}`", name, raw),
    })
}

///
/// Parse a tab-separated contact table from any reader.
///
/// The first line is a header naming at least `chr1`, `fragmentMid1`, `chr2`,
/// `fragmentMid2` and `p-value`, in any order. A `q-value` column is read when
/// present, with `NA` or an empty field meaning no q-value.
///
pub fn parse_contacts<R: BufRead>(reader: R, source: &str) -> Result<ContactTable> {
    let mut lines = reader.lines();

    let header = lines
        .next()
        .ok_or_else(|| HicsigIoError::EmptyFile(source.to_string()))??;
    let columns = ContactColumns::from_header(&header)?;

    let mut contacts = Vec::new();
    for (i, line) in lines.enumerate() {
        let line = line?;
        let line_num = i + 2;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split('\t').collect();

        let q_value = match columns.q_value {
            Some(idx) => {
                let raw = field(&fields, idx, line_num)?.trim();
                if raw.is_empty() || raw == MISSING_VALUE {
                    None
                } else {
                    Some(parse_field::<f64>(&fields, idx, line_num, Q_VALUE_COLUMN)?)
                }
            }
            None => None,
        };

        contacts.push(Contact {
            chr1: field(&fields, columns.chr1, line_num)?.trim().to_string(),
            mid1: parse_field(&fields, columns.mid1, line_num, MID1_COLUMN)?,
            chr2: field(&fields, columns.chr2, line_num)?.trim().to_string(),
            mid2: parse_field(&fields, columns.mid2, line_num, MID2_COLUMN)?,
            p_value: parse_field(&fields, columns.p_value, line_num, P_VALUE_COLUMN)?,
            q_value,
        });
    }

    debug!("Read {} contacts from {}", contacts.len(), source);

    Ok(ContactTable::from(contacts))
}

///
/// Read a contact table from disk; `.gz` files are decompressed on the fly.
///
pub fn read_contacts<P: AsRef<Path>>(path: P) -> Result<ContactTable> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path)?;
    parse_contacts(reader, &path.display().to_string())
}

///
/// Write a contact table as tab-separated text with a header line.
///
pub fn write_contacts<W: Write>(out: &mut W, table: &ContactTable) -> std::io::Result<()> {
    writeln!(
        out,
        "{}\t{}\t{}\t{}\t{}\t{}",
        CHR1_COLUMN, MID1_COLUMN, CHR2_COLUMN, MID2_COLUMN, P_VALUE_COLUMN, Q_VALUE_COLUMN
    )?;
    for c in table.iter() {
        let q_value = c
            .q_value
            .map_or(MISSING_VALUE.to_string(), |q| q.to_string());
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}",
            c.chr1, c.mid1, c.chr2, c.mid2, c.p_value, q_value
        )?;
    }
    Ok(())
}

///
/// Write a contact table to `path`, gzip compressed when the path ends in `.gz`.
///
pub fn write_contacts_to_path<P: AsRef<Path>>(path: P, table: &ContactTable) -> Result<()> {
    let mut writer = get_dynamic_writer(path.as_ref())?;
    write_contacts(&mut writer, table)?;
    writer.flush()?;
    Ok(())
}
