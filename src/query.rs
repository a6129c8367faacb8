// src/query.rs
//
// Search terms and search URLs for one card.

use url::form_urlencoded::byte_serialize;

use crate::card::CardRecord;
use crate::config::consts::{LISTING_FILTER, SOLD_FILTER};

/// Form-encode one search term: spaces become `+`, reserved bytes `%XX`.
fn encode_term(term: &str) -> String {
    byte_serialize(term.as_bytes()).collect()
}

/// `name+set+number+edition[+holo]`, skipping empty fields.
pub fn build_query(card: &CardRecord) -> String {
    let mut parts: Vec<String> = [&card.name, &card.set, &card.number, &card.edition]
        .into_iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .map(encode_term)
        .collect();
    if card.holo {
        parts.push(s!("holo"));
    }
    parts.join("+")
}

/// Completed + sold listings.
pub fn sold_url(search_url: &str, query: &str) -> String {
    format!("{search_url}?_nkw={query}&{SOLD_FILTER}")
}

/// Live buy-it-now listings.
pub fn listing_url(search_url: &str, query: &str) -> String {
    format!("{search_url}?_nkw={query}&{LISTING_FILTER}")
}
