// src/scrape.rs
//
// Price fetcher: per card, one sold-listings request reduced to a mean and one
// buy-it-now request reduced to a minimum. The two are independent; a failure
// in one never touches the other's value or message.

use crate::{
    card::CardRecord,
    config::options::FetchOptions,
    core::{html::extract_prices, Transport},
    error::FetchError,
    progress::{NullProgress, Progress},
    query::{build_query, listing_url, sold_url},
    store::PriceCache,
};

/// Prices for one card. `error` is set only when a request failed; an empty
/// search leaves the price `None` without an error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceResult {
    pub average_sold_price: Option<f64>,
    pub lowest_listing_price: Option<f64>,
    pub error: Option<String>,
}

pub fn average(prices: &[f64]) -> Option<f64> {
    if prices.is_empty() {
        return None;
    }
    Some(prices.iter().sum::<f64>() / prices.len() as f64)
}

pub fn lowest(prices: &[f64]) -> Option<f64> {
    prices.iter().copied().reduce(f64::min)
}

/// GET `url` and pull prices out of the body. Non-200 counts as failure.
pub fn fetch_prices(net: &dyn Transport, url: &str, css: &str) -> Result<Vec<f64>, FetchError> {
    let resp = net.get(url)?;
    logd!("Fetch: GET {} → {}", url, resp.status);
    if resp.status != 200 {
        return Err(FetchError::Status(resp.status));
    }
    extract_prices(&resp.body, css)
}

/// Reduce one operation's outcome, recording and announcing a failure.
fn settle(
    label: &str,
    url: &str,
    outcome: Result<Vec<f64>, FetchError>,
    reduce: fn(&[f64]) -> Option<f64>,
    errors: &mut Vec<String>,
    progress: &mut dyn Progress,
) -> Option<f64> {
    match outcome {
        Ok(prices) => reduce(&prices),
        Err(e) => {
            loge!("Fetch: {} for {}: {}", label, url, e);
            let notice = match &e {
                FetchError::Status(code) => format!("Request to {url} returned status {code}"),
                other => format!("Request to {url} failed: {other}"),
            };
            progress.notify_error(&notice);
            errors.push(format!("{label}: {e}"));
            None
        }
    }
}

/// Both operations for one card, always both, sold first.
pub fn fetch_price(
    card: &CardRecord,
    net: &dyn Transport,
    opts: &FetchOptions,
    progress: &mut dyn Progress,
) -> PriceResult {
    let query = build_query(card);
    let mut errors: Vec<String> = Vec::new();

    let url = sold_url(&opts.search_url, &query);
    let outcome = fetch_prices(net, &url, &opts.price_selector);
    let average_sold_price =
        settle("sold prices", &url, outcome, average, &mut errors, progress);

    let url = listing_url(&opts.search_url, &query);
    let outcome = fetch_prices(net, &url, &opts.price_selector);
    let lowest_listing_price =
        settle("listing prices", &url, outcome, lowest, &mut errors, progress);

    PriceResult {
        average_sold_price,
        lowest_listing_price,
        error: if errors.is_empty() { None } else { Some(errors.join("; ")) },
    }
}

/// One fetch cycle over all cards, in order. Cards already in `cache` are
/// answered from it without touching the network.
pub fn collect_prices(
    cards: &[CardRecord],
    cache: &mut PriceCache,
    net: &dyn Transport,
    opts: &FetchOptions,
    progress: Option<&mut dyn Progress>,
) -> Vec<PriceResult> {
    logf!("Fetch: Begin cards={} cached={}", cards.len(), cache.len());

    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };
    progress.begin(cards.len());

    let mut out = Vec::with_capacity(cards.len());
    for (i, card) in cards.iter().enumerate() {
        let label = card.label();
        let (result, cached) = match cache.get(card) {
            Some(hit) => {
                logd!("Cache: Hit {}", label);
                (hit, true)
            }
            None => {
                let fresh = fetch_price(card, net, opts, progress);
                cache.insert(card.clone(), fresh.clone());
                (fresh, false)
            }
        };
        progress.item_done(i, &label, cached);
        out.push(result);
    }

    progress.finish();
    logf!("Fetch: Done cards={} cache_hits={}", cards.len(), cache.hits());
    out
}
