use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;
use serde::Serialize;

use hicsig_core::HicsigConfig;
use hicsig_core::config::SignificanceConfig;
use hicsig_io::{read_contacts, write_contacts, write_contacts_to_path};
use hicsig_stats::{SignificanceParams, call_significant_contacts};

use crate::common::{output_writer, resolve_band};

#[derive(Serialize)]
struct SignificanceSummary {
    input_contacts: usize,
    significant_contacts: usize,
    regions: usize,
    chromosomes: usize,
    tests_in_band: u64,
    parameters: SignificanceConfig,
}

pub fn run_significance(matches: &ArgMatches, config: &HicsigConfig) -> Result<()> {
    let contacts_path = matches
        .get_one::<String>("contacts")
        .expect("--contacts is required");
    let output_path = matches.get_one::<String>("output");
    let summary_path = matches.get_one::<String>("summary");

    let band = resolve_band(matches, config)?;
    let settings = SignificanceConfig {
        alpha: matches
            .get_one::<f64>("alpha")
            .copied()
            .unwrap_or(config.significance.alpha),
        min_distance: band.min(),
        max_distance: band.max(),
        fdr: matches.get_one::<f64>("fdr").copied().or(config.significance.fdr),
    };
    let params = SignificanceParams::try_from(&settings).context("Invalid significance parameters")?;

    let table = read_contacts(contacts_path)
        .with_context(|| format!("Failed to load contact table: {}", contacts_path))?;
    info!("Loaded {} contacts from {}", table.len(), contacts_path);

    let called = call_significant_contacts(&table, &params)
        .context("Failed to compute significant contacts")?;

    match output_path {
        Some(p) => {
            write_contacts_to_path(p, &called.contacts)
                .with_context(|| format!("Failed to write output file: {}", p))?;
            info!("Output written to {}", p);
        }
        None => {
            let mut out = output_writer(None)?;
            write_contacts(&mut out, &called.contacts)?;
            out.flush()?;
        }
    }

    if let Some(p) = summary_path {
        let summary = SignificanceSummary {
            input_contacts: table.len(),
            significant_contacts: called.contacts.len(),
            regions: called.regions.values().map(Vec::len).sum(),
            chromosomes: called.regions.len(),
            tests_in_band: called.n_tests,
            parameters: settings,
        };
        let json = serde_json::to_string_pretty(&summary)
            .context("Failed to serialize summary to JSON")?;
        let mut file = File::create(Path::new(p))
            .with_context(|| format!("Failed to create summary file: {}", p))?;
        file.write_all(json.as_bytes())?;
        info!("Summary written to {}", p);
    }

    Ok(())
}
