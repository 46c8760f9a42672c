//! Interactive hangman. Plays rounds until the player declines a replay.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hangman::config::load_config;
use hangman::round::run_games;
use hangman::words::RandomPicker;
use interact::{Console, exit_codes, logging};

#[derive(Parser)]
#[command(name = "hangman", version, about = "Guess the word one letter at a time")]
struct Cli {
    /// TOML file with a custom `words` list.
    #[arg(long)]
    config: Option<PathBuf>,
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
    let words = cfg.word_list()?;
    let mut console = Console::stdio();
    run_games(&mut console, &words, &mut RandomPicker::thread_local())?;
    Ok(())
}
