//! Stock portfolio tracker.
//!
//! Holdings are entered interactively ([`builder`]) into a
//! [`session::PortfolioSession`], valued against a fixed [`prices::PriceTable`]
//! ([`valuation`]), rendered ([`report`]) and optionally saved as text and CSV
//! ([`persist`]). [`tracker`] ties the steps together.

pub mod builder;
pub mod config;
pub mod persist;
pub mod prices;
pub mod report;
pub mod session;
pub mod tracker;
pub mod valuation;
