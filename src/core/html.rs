// src/core/html.rs
use scraper::{Html, Selector};

use crate::error::FetchError;
use super::sanitize::{normalize_ws, parse_price};

pub fn selector(css: &str) -> Result<Selector, FetchError> {
    Selector::parse(css).map_err(|e| FetchError::Selector(format!("{css}: {e}")))
}

/// Text content of every element matching `css`, in document order.
pub fn select_texts(doc: &str, css: &str) -> Result<Vec<String>, FetchError> {
    let sel = selector(css)?;
    let html = Html::parse_document(doc);
    Ok(html
        .select(&sel)
        .map(|el| normalize_ws(&el.text().collect::<String>()))
        .collect())
}

/// Prices of all price-bearing elements, document order, unsorted.
/// Elements without a parsable number are skipped.
pub fn extract_prices(doc: &str, css: &str) -> Result<Vec<f64>, FetchError> {
    let texts = select_texts(doc, css)?;
    let prices: Vec<f64> = texts.iter().filter_map(|t| parse_price(t)).collect();
    logd!("Extract: {} element(s), {} price(s)", texts.len(), prices.len());
    Ok(prices)
}
