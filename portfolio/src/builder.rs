//! Interactive entry of symbol/quantity pairs.

use std::io::{BufRead, Write};

use anyhow::Result;
use interact::{Console, Prompt, Reply, request_validated_input};
use tracing::info;

use crate::prices::PriceTable;
use crate::session::PortfolioSession;

const SYMBOL_PROMPT: &str = "\nEnter stock symbol (or 'done' to finish): ";
const DONE: &str = "done";

/// Collect holdings until `done` is entered or input closes.
///
/// An empty session is a valid result: `done` may be the very first entry.
pub fn build_portfolio<'a, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prices: &'a PriceTable,
) -> Result<PortfolioSession<'a>> {
    let mut session = PortfolioSession::new(prices);
    console.say("Welcome to Stock Portfolio Tracker!")?;
    console.say(format!("Available stocks: {}", prices.symbol_list()))?;

    let symbol_prompt = Prompt::new(SYMBOL_PROMPT).with_sentinel(DONE);
    loop {
        let symbol = match request_validated_input(console, &symbol_prompt, |raw| {
            session.validate_symbol(raw)
        })? {
            Reply::Accepted(symbol) => symbol,
            Reply::Sentinel | Reply::Closed => break,
        };

        let quantity_text = format!("Enter quantity for {symbol}: ");
        let quantity = match request_validated_input(console, &Prompt::new(&quantity_text), |raw| {
            session.validate_quantity(&symbol, raw)
        })? {
            Reply::Accepted(quantity) => quantity,
            Reply::Sentinel | Reply::Closed => break,
        };

        session.add(&symbol, quantity)?;
    }

    info!(holdings = session.holdings().len(), "portfolio entry finished");
    Ok(session)
}
