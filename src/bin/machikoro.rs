//! Machi Koro Analysis Binary
//!
//! Simulates build orders, races them against each other, and prices
//! every card against a hand. See `machikoro --help`.

use clap::Parser;
use machikoro::analysis::Query;

fn main() -> anyhow::Result<()> {
    machikoro::log()?;
    Query::parse().handle()
}
