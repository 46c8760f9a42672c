//! The full tracker flow: entry, valuation, summary, optional save.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use interact::{Console, confirm};

use crate::builder::build_portfolio;
use crate::persist::{SummaryPaths, save_summary};
use crate::prices::PriceTable;
use crate::report::render_summary;
use crate::valuation::{Valuation, value_portfolio};

const SAVE_PROMPT: &str = "\nDo you want to save this summary to files? (y/n): ";

/// How a tracker run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerOutcome {
    /// Nothing was entered; valuation and saving were skipped.
    NoHoldings,
    /// Summary shown, user declined to save.
    Shown(Valuation),
    Saved {
        valuation: Valuation,
        paths: SummaryPaths,
    },
}

/// Run the tracker against `console`, saving into `output_dir`.
///
/// `now` is only called when the user confirms the save.
pub fn run_tracker<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prices: &PriceTable,
    output_dir: &Path,
    now: impl FnOnce() -> NaiveDateTime,
) -> Result<TrackerOutcome> {
    let session = build_portfolio(console, prices)?;
    if session.is_empty() {
        console.say("No stocks entered. Exiting program.")?;
        return Ok(TrackerOutcome::NoHoldings);
    }

    let valuation = value_portfolio(&session);
    console.say("")?;
    console.say(render_summary(&valuation))?;

    if !confirm(console, SAVE_PROMPT)? {
        return Ok(TrackerOutcome::Shown(valuation));
    }

    let paths = save_summary(output_dir, &valuation, now()).context("save portfolio summary")?;
    console.say(format!(
        "\nPortfolio saved as '{}' and '{}'",
        paths.text.display(),
        paths.csv.display()
    ))?;
    Ok(TrackerOutcome::Saved { valuation, paths })
}
