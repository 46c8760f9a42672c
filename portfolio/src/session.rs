//! Holdings accumulated during one tracker run.

use thiserror::Error;
use tracing::debug;

use crate::prices::PriceTable;

/// Why an entry was refused. The message is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("❌ Stock {symbol:?} not available. Choose from: {available}")]
    UnknownSymbol { symbol: String, available: String },
    #[error("Please enter a valid number.")]
    NotAnInteger,
    #[error("Quantity must be positive.")]
    NonPositiveQuantity,
    #[error("Quantity is too large.")]
    QuantityTooLarge,
}

/// Parse a share count. Surrounding whitespace is ignored.
pub fn parse_quantity(raw: &str) -> Result<u64, EntryError> {
    let raw = raw.trim();
    if let Ok(quantity) = raw.parse::<u64>() {
        return if quantity == 0 {
            Err(EntryError::NonPositiveQuantity)
        } else {
            Ok(quantity)
        };
    }
    match raw.parse::<i128>() {
        Ok(quantity) if quantity <= 0 => Err(EntryError::NonPositiveQuantity),
        Ok(_) => Err(EntryError::QuantityTooLarge),
        Err(_) => Err(EntryError::NotAnInteger),
    }
}

/// A symbol and the total shares entered for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holding {
    pub symbol: String,
    pub quantity: u64,
}

/// Holdings keyed by symbol in first-entry order.
///
/// Every symbol exists in the price table and every quantity is positive.
#[derive(Debug, Clone)]
pub struct PortfolioSession<'a> {
    prices: &'a PriceTable,
    holdings: Vec<Holding>,
}

impl<'a> PortfolioSession<'a> {
    pub fn new(prices: &'a PriceTable) -> Self {
        Self {
            prices,
            holdings: Vec::new(),
        }
    }

    pub fn prices(&self) -> &'a PriceTable {
        self.prices
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    pub fn quantity(&self, symbol: &str) -> Option<u64> {
        self.position(symbol).map(|index| self.holdings[index].quantity)
    }

    /// Resolve a typed symbol to its canonical table symbol.
    pub fn validate_symbol(&self, raw: &str) -> Result<String, EntryError> {
        self.prices
            .lookup(raw)
            .map(|entry| entry.symbol.clone())
            .ok_or_else(|| EntryError::UnknownSymbol {
                symbol: raw.trim().to_uppercase(),
                available: self.prices.symbol_list(),
            })
    }

    /// Parse a quantity for `symbol` and check the running total stays in range.
    pub fn validate_quantity(&self, symbol: &str, raw: &str) -> Result<u64, EntryError> {
        let quantity = parse_quantity(raw)?;
        let held = self.quantity(symbol).unwrap_or(0);
        held.checked_add(quantity)
            .ok_or(EntryError::QuantityTooLarge)?;
        Ok(quantity)
    }

    /// Add shares, summing with any earlier entry for the same symbol.
    ///
    /// Returns the new total for the symbol.
    pub fn add(&mut self, symbol: &str, quantity: u64) -> Result<u64, EntryError> {
        if quantity == 0 {
            return Err(EntryError::NonPositiveQuantity);
        }
        let symbol = self.validate_symbol(symbol)?;
        let total = match self.position(&symbol) {
            Some(index) => {
                let holding = &mut self.holdings[index];
                holding.quantity = holding
                    .quantity
                    .checked_add(quantity)
                    .ok_or(EntryError::QuantityTooLarge)?;
                holding.quantity
            }
            None => {
                self.holdings.push(Holding {
                    symbol: symbol.clone(),
                    quantity,
                });
                quantity
            }
        };
        debug!(%symbol, quantity, total, "holding added");
        Ok(total)
    }

    fn position(&self, symbol: &str) -> Option<usize> {
        self.holdings
            .iter()
            .position(|holding| holding.symbol.eq_ignore_ascii_case(symbol.trim()))
    }
}
