//! Interactive stock portfolio tracker.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use interact::{Console, exit_codes, logging};
use portfolio::config::load_config;
use portfolio::tracker::run_tracker;

#[derive(Parser)]
#[command(
    name = "portfolio",
    version,
    about = "Value a stock portfolio and save the summary"
)]
struct Cli {
    /// TOML file with a custom price table and output directory.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory for the saved summary files (overrides the config).
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::FAILURE);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_deref()).context("load config")?;
    let prices = cfg.price_table()?;
    let output_dir = cli.output_dir.unwrap_or(cfg.output_dir);
    let mut console = Console::stdio();
    run_tracker(&mut console, &prices, &output_dir, || {
        Local::now().naive_local()
    })?;
    Ok(())
}
