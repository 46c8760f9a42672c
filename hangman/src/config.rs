//! Optional TOML configuration for the hangman binary.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::words::{DEFAULT_WORDS, WordList};

/// Hangman configuration (TOML).
///
/// ```toml
/// words = ["apple", "tiger"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HangmanConfig {
    /// Candidate secret words; one is drawn per round.
    pub words: Vec<String>,
}

impl Default for HangmanConfig {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|word| word.to_string()).collect(),
        }
    }
}

impl HangmanConfig {
    /// Validate and canonicalize the word set.
    pub fn word_list(&self) -> Result<WordList> {
        WordList::new(&self.words)
    }
}

/// Load config from `path`, or the built-in defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<HangmanConfig> {
    let Some(path) = path else {
        return Ok(HangmanConfig::default());
    };
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: HangmanConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.word_list()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}
