//! Saves a valuation as a text summary and a CSV table.
//!
//! Both files share one timestamp so they sort and correlate together:
//! `portfolio_summary_<YYYY-MM-DD_HH-MM-SS>.{txt,csv}`. Writes are not
//! transactional; each file is attempted independently and every failure is
//! reported.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;
use tracing::{debug, info, instrument, warn};

use crate::report::render_text;
use crate::valuation::Valuation;

/// `chrono` format for the filename timestamp (second resolution).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

const FILE_STEM: &str = "portfolio_summary";

/// Paths of the two summary artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryPaths {
    pub text: PathBuf,
    pub csv: PathBuf,
}

pub fn summary_paths(dir: &Path, at: NaiveDateTime) -> SummaryPaths {
    let stem = format!("{FILE_STEM}_{}", at.format(TIMESTAMP_FORMAT));
    SummaryPaths {
        text: dir.join(format!("{stem}.txt")),
        csv: dir.join(format!("{stem}.csv")),
    }
}

/// Write both artifacts into `dir`, named after `at`.
///
/// The CSV write is attempted even if the text write failed. Returns an error
/// naming every file that could not be written.
#[instrument(skip_all, fields(dir = %dir.display(), items = valuation.items.len()))]
pub fn save_summary(dir: &Path, valuation: &Valuation, at: NaiveDateTime) -> Result<SummaryPaths> {
    let paths = summary_paths(dir, at);
    let mut failures = Vec::new();

    if let Err(err) = write_text(&paths.text, valuation) {
        warn!(path = %paths.text.display(), error = %format!("{err:#}"), "text summary not written");
        failures.push(format!("{err:#}"));
    }
    if let Err(err) = write_csv(&paths.csv, valuation) {
        warn!(path = %paths.csv.display(), error = %format!("{err:#}"), "csv summary not written");
        failures.push(format!("{err:#}"));
    }

    if !failures.is_empty() {
        bail!("failed to save portfolio summary:\n- {}", failures.join("\n- "));
    }
    info!(text = %paths.text.display(), csv = %paths.csv.display(), "portfolio summary saved");
    Ok(paths)
}

fn write_text(path: &Path, valuation: &Valuation) -> Result<()> {
    fs::write(path, render_text(valuation))
        .with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), "text summary written");
    Ok(())
}

/// Header row, one row per item, a blank row, then `Total,,,<value>`.
fn write_csv(path: &Path, valuation: &Valuation) -> Result<()> {
    let contents = render_csv(valuation).context("render csv")?;
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), rows = valuation.items.len(), "csv summary written");
    Ok(())
}

fn render_csv(valuation: &Valuation) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut writer = csv_writer(&mut buf);
        writer.write_record(["Stock", "Quantity", "Price", "Value"])?;
        for item in &valuation.items {
            writer.write_record([
                item.symbol.clone(),
                item.quantity.to_string(),
                item.unit_price.to_string(),
                item.value.to_string(),
            ])?;
        }
        writer.flush()?;
    }

    // csv writes an empty record as `""`; the separator row must be blank.
    buf.extend_from_slice(b"\r\n");

    {
        let total = valuation.total.to_string();
        let mut writer = csv_writer(&mut buf);
        writer.write_record(["Total", "", "", total.as_str()])?;
        writer.flush()?;
    }
    Ok(buf)
}

fn csv_writer(buf: &mut Vec<u8>) -> csv::Writer<&mut Vec<u8>> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(buf)
}
