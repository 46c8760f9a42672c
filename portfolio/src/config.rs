//! Optional TOML configuration for the portfolio binary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::prices::{PriceTable, StockPrice, default_prices};

/// Portfolio configuration (TOML).
///
/// ```toml
/// output_dir = "summaries"
///
/// [[stocks]]
/// symbol = "AAPL"
/// price = 180
/// ```
///
/// Missing fields default to the built-in price table and the working
/// directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Directory the summary files are written into.
    pub output_dir: PathBuf,

    /// Price table, in display order.
    pub stocks: Vec<StockPrice>,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            stocks: default_prices(),
        }
    }
}

impl PortfolioConfig {
    pub fn price_table(&self) -> Result<PriceTable> {
        PriceTable::new(self.stocks.iter().cloned())
    }
}

/// Load config from `path`, or the built-in defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<PortfolioConfig> {
    let Some(path) = path else {
        return Ok(PortfolioConfig::default());
    };
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PortfolioConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.price_table()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}
