//! Symbol → unit price lookup.

use std::collections::HashSet;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// One row of the price table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockPrice {
    pub symbol: String,
    /// Whole dollars per share.
    pub price: u32,
}

impl StockPrice {
    pub fn new(symbol: &str, price: u32) -> Self {
        Self {
            symbol: symbol.to_string(),
            price,
        }
    }
}

/// Built-in prices used when no config is given.
pub fn default_prices() -> Vec<StockPrice> {
    vec![
        StockPrice::new("AAPL", 180),
        StockPrice::new("TSLA", 250),
        StockPrice::new("MSFT", 330),
        StockPrice::new("GOOGL", 140),
        StockPrice::new("AMZN", 135),
    ]
}

/// Read-only price table. Symbols are stored uppercase and looked up
/// case-insensitively; table order is kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTable {
    entries: Vec<StockPrice>,
}

impl PriceTable {
    pub fn new(entries: impl IntoIterator<Item = StockPrice>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut table = Vec::new();
        for entry in entries {
            let symbol = entry.symbol.trim().to_uppercase();
            if symbol.is_empty() {
                bail!("price table contains an empty symbol");
            }
            if entry.price == 0 {
                bail!("price for {symbol} must be > 0");
            }
            if !seen.insert(symbol.clone()) {
                bail!("duplicate symbol {symbol} in price table");
            }
            table.push(StockPrice {
                symbol,
                price: entry.price,
            });
        }
        if table.is_empty() {
            bail!("price table must not be empty");
        }
        Ok(Self { entries: table })
    }

    /// Canonical table entry for a user-typed symbol.
    pub fn lookup(&self, symbol: &str) -> Option<&StockPrice> {
        let symbol = symbol.trim();
        self.entries
            .iter()
            .find(|entry| entry.symbol.eq_ignore_ascii_case(symbol))
    }

    pub fn price(&self, symbol: &str) -> Option<u32> {
        self.lookup(symbol).map(|entry| entry.price)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.symbol.as_str())
    }

    /// Symbols in table order, comma separated.
    pub fn symbol_list(&self) -> String {
        self.symbols().collect::<Vec<_>>().join(", ")
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            entries: default_prices(),
        }
    }
}
