// src/runner.rs
//
// One fetch cycle, shared by GUI and CLI: parse input → fetch → table.

use crate::{
    card::parse_cards,
    config::options::FetchOptions,
    core::Transport,
    progress::Progress,
    scrape::collect_prices,
    store::PriceCache,
    table::PriceTable,
};

/// Parse `input`, price every card (cache first), and assemble the table.
/// Never fails: request problems end up in the rows' `error` cells.
pub fn run(
    input: &str,
    cache: &mut PriceCache,
    net: &dyn Transport,
    opts: &FetchOptions,
    mut progress: Option<&mut dyn Progress>,
) -> PriceTable {
    let cards = parse_cards(input);
    if cards.is_empty() {
        logd!("Run: No cards in input");
        if let Some(p) = progress.as_deref_mut() {
            p.log("No cards in input");
        }
        return PriceTable::default();
    }

    let results = collect_prices(&cards, cache, net, opts, progress);
    let table = PriceTable::build(&cards, results);
    logf!("Run: rows={} bargains={}", table.nrows(), table.bargain_count());
    table
}
