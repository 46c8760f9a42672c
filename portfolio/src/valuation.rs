//! Pure valuation of a finished portfolio session.

use crate::session::PortfolioSession;

/// One resolved holding, shared by the terminal summary and both saved files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub symbol: String,
    pub quantity: u64,
    pub unit_price: u32,
    pub value: u128,
}

/// Line items in first-entry order plus their total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Valuation {
    pub items: Vec<LineItem>,
    pub total: u128,
}

/// Price every holding against the session's price table.
pub fn value_portfolio(session: &PortfolioSession<'_>) -> Valuation {
    let prices = session.prices();
    let items: Vec<LineItem> = session
        .holdings()
        .iter()
        .filter_map(|holding| {
            let unit_price = prices.price(&holding.symbol)?;
            Some(LineItem {
                symbol: holding.symbol.clone(),
                quantity: holding.quantity,
                unit_price,
                value: u128::from(holding.quantity) * u128::from(unit_price),
            })
        })
        .collect();
    let total = items.iter().map(|item| item.value).sum();
    Valuation { items, total }
}
