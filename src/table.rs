// src/table.rs
//! Result table: cards joined with their prices, in input order, plus the
//! display-only bargain flag.
//!
//! The GUI table, clipboard copy, file export and CLI printout all read from
//! `PriceTable`, so the column set and cell formatting live in one place.

use crate::card::CardRecord;
use crate::config::consts::{BARGAIN_RATIO, CARD_COLUMNS};
use crate::scrape::PriceResult;

pub const PRICE_COLUMNS: [&str; 3] = ["average_sold_price", "lowest_listing_price", "error"];

/// Lowest live listing under 80% of the average sold price.
/// Missing or zero prices never flag.
pub fn is_bargain(average_sold: Option<f64>, lowest_listing: Option<f64>) -> bool {
    match (average_sold, lowest_listing) {
        (Some(avg), Some(low)) if avg != 0.0 && low != 0.0 => low < BARGAIN_RATIO * avg,
        _ => false,
    }
}

/// Two decimals, for the GUI table and CLI printout.
pub fn format_price(p: Option<f64>) -> String {
    p.map(|v| format!("{v:.2}")).unwrap_or_default()
}

/// Full precision, for files and the clipboard.
pub fn export_price(p: Option<f64>) -> String {
    p.map(|v| v.to_string()).unwrap_or_default()
}

#[derive(Clone, Debug, PartialEq)]
pub struct PriceRow {
    pub card: CardRecord,
    pub price: PriceResult,
    pub bargain: bool,
}

impl PriceRow {
    pub fn new(card: CardRecord, price: PriceResult) -> Self {
        let bargain = is_bargain(price.average_sold_price, price.lowest_listing_price);
        Self { card, price, bargain }
    }

    /// Display cells in `PriceTable::headers()` order.
    pub fn cells(&self) -> Vec<String> {
        self.cells_with(format_price)
    }

    /// Same columns, prices unrounded.
    pub fn export_cells(&self) -> Vec<String> {
        self.cells_with(export_price)
    }

    fn cells_with(&self, price: fn(Option<f64>) -> String) -> Vec<String> {
        let c = &self.card;
        vec![
            c.name.clone(),
            c.set.clone(),
            c.number.clone(),
            c.edition.clone(),
            c.holo.to_string(),
            c.condition.clone(),
            price(self.price.average_sold_price),
            price(self.price.lowest_listing_price),
            self.price.error.clone().unwrap_or_default(),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceTable {
    pub rows: Vec<PriceRow>,
}

impl PriceTable {
    /// Pair cards and results by position. Extra items on either side are
    /// dropped (the fetcher always returns one result per card).
    pub fn build(cards: &[CardRecord], results: Vec<PriceResult>) -> Self {
        let rows = cards
            .iter()
            .cloned()
            .zip(results)
            .map(|(card, price)| PriceRow::new(card, price))
            .collect();
        Self { rows }
    }

    pub fn headers() -> Vec<String> {
        CARD_COLUMNS.iter().chain(PRICE_COLUMNS.iter()).map(|s| s!(*s)).collect()
    }

    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    #[inline] pub fn nrows(&self) -> usize { self.rows.len() }

    pub fn bargain_count(&self) -> usize {
        self.rows.iter().filter(|r| r.bargain).count()
    }

    /// Stringified cells for the GUI table and CLI printout.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(PriceRow::cells).collect()
    }

    /// Stringified cells for copy/export.
    pub fn to_export_rows(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(PriceRow::export_cells).collect()
    }
}
