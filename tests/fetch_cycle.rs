// tests/fetch_cycle.rs
//
// Fetcher and memo cache against a canned transport.

use std::cell::RefCell;

use card_pricer::card::CardRecord;
use card_pricer::config::options::FetchOptions;
use card_pricer::core::{HttpResponse, Transport};
use card_pricer::error::FetchError;
use card_pricer::progress::Progress;
use card_pricer::runner;
use card_pricer::scrape::{collect_prices, fetch_price, PriceResult};
use card_pricer::store::PriceCache;

/// Canned answers for the sold and the buy-it-now request; records every URL.
struct Canned {
    sold: Result<HttpResponse, FetchError>,
    live: Result<HttpResponse, FetchError>,
    calls: RefCell<Vec<String>>,
}

impl Canned {
    fn new(sold: Result<HttpResponse, FetchError>, live: Result<HttpResponse, FetchError>) -> Self {
        Self { sold, live, calls: RefCell::new(Vec::new()) }
    }
    fn calls(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Transport for Canned {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        self.calls.borrow_mut().push(url.to_string());
        if url.contains("LH_Sold=1") { self.sold.clone() } else { self.live.clone() }
    }
}

fn page(prices: &[&str]) -> Result<HttpResponse, FetchError> {
    let items: String = prices
        .iter()
        .map(|p| format!(r#"<li class="s-item"><span class="s-item__price">{p}</span></li>"#))
        .collect();
    Ok(HttpResponse { status: 200, body: format!("<html><body><ul>{items}</ul></body></html>") })
}

fn status(code: u16) -> Result<HttpResponse, FetchError> {
    Ok(HttpResponse { status: code, body: String::new() })
}

fn card(name: &str) -> CardRecord {
    CardRecord { name: name.into(), set: "Base Set".into(), ..Default::default() }
}

#[derive(Default)]
struct Recorder {
    notices: Vec<String>,
    done: Vec<(usize, bool)>,
    finished: bool,
}

impl Progress for Recorder {
    fn item_done(&mut self, index: usize, _label: &str, cached: bool) {
        self.done.push((index, cached));
    }
    fn notify_error(&mut self, msg: &str) {
        self.notices.push(msg.to_string());
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

#[test]
fn mean_of_sold_min_of_listings() {
    let net = Canned::new(page(&["$10.00", "$20.00", "$30.00"]), page(&["$25.00", "$12.50", "$40"]));
    let r = fetch_price(&card("Pikachu"), &net, &FetchOptions::default(), &mut Recorder::default());
    assert_eq!(r.average_sold_price, Some(20.0));
    assert_eq!(r.lowest_listing_price, Some(12.5));
    assert_eq!(r.error, None);
    assert_eq!(net.calls(), 2);
}

#[test]
fn empty_results_are_absent_not_errors() {
    let net = Canned::new(page(&[]), page(&["Shipping calculated"]));
    let r = fetch_price(&card("Nothing"), &net, &FetchOptions::default(), &mut Recorder::default());
    assert_eq!(r, PriceResult::default());
}

#[test]
fn sold_failure_does_not_block_listing() {
    let net = Canned::new(
        Err(FetchError::Transport("connection refused".into())),
        page(&["$7.00", "$9.00"]),
    );
    let mut rec = Recorder::default();
    let r = fetch_price(&card("Pikachu"), &net, &FetchOptions::default(), &mut rec);

    assert_eq!(r.average_sold_price, None);
    assert_eq!(r.lowest_listing_price, Some(7.0));
    let err = r.error.unwrap();
    assert!(err.starts_with("sold prices: Request failed:"), "{err}");
    assert!(!err.contains("listing prices"));
    assert_eq!(net.calls(), 2);
    assert_eq!(rec.notices.len(), 1);
    assert!(rec.notices[0].contains("failed: Request failed: connection refused"));
}

#[test]
fn non_200_names_the_status_code() {
    let net = Canned::new(page(&["$50.00"]), status(503));
    let mut rec = Recorder::default();
    let r = fetch_price(&card("Mew"), &net, &FetchOptions::default(), &mut rec);

    assert_eq!(r.average_sold_price, Some(50.0));
    assert_eq!(r.lowest_listing_price, None);
    assert_eq!(r.error.as_deref(), Some("listing prices: Status code 503"));
    assert!(rec.notices[0].ends_with("returned status 503"));
}

#[test]
fn both_failures_are_joined() {
    let net = Canned::new(status(404), status(500));
    let r = fetch_price(&card("Mew"), &net, &FetchOptions::default(), &mut Recorder::default());
    assert_eq!(
        r.error.as_deref(),
        Some("sold prices: Status code 404; listing prices: Status code 500")
    );
}

#[test]
fn repeated_card_is_served_from_cache() {
    let net = Canned::new(page(&["$10.00"]), page(&["$8.00"]));
    let mut cache = PriceCache::new();
    let mut rec = Recorder::default();
    let cards = vec![card("Pikachu"), card("Pikachu")];

    let out = collect_prices(&cards, &mut cache, &net, &FetchOptions::default(), Some(&mut rec));
    assert_eq!(out.len(), 2);
    assert_eq!(out[0], out[1]);
    assert_eq!(net.calls(), 2);
    assert_eq!(rec.done, vec![(0, false), (1, true)]);
    assert!(rec.finished);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.hits(), 1);
}

#[test]
fn cache_outlives_one_cycle_until_cleared() {
    let net = Canned::new(page(&["$10.00"]), page(&["$8.00"]));
    let mut cache = PriceCache::new();
    let opts = FetchOptions::default();
    let cards = vec![card("Pikachu")];

    collect_prices(&cards, &mut cache, &net, &opts, None);
    collect_prices(&cards, &mut cache, &net, &opts, None);
    assert_eq!(net.calls(), 2);

    cache.clear();
    collect_prices(&cards, &mut cache, &net, &opts, None);
    assert_eq!(net.calls(), 4);
}

#[test]
fn cards_differing_in_any_field_are_fetched_separately() {
    let net = Canned::new(page(&["$10.00"]), page(&["$8.00"]));
    let mut cache = PriceCache::new();
    let a = card("Pikachu");
    let b = CardRecord { condition: "LP".into(), ..card("Pikachu") };

    collect_prices(&[a, b], &mut cache, &net, &FetchOptions::default(), None);
    assert_eq!(net.calls(), 4);
    assert_eq!(cache.len(), 2);
}

#[test]
fn failed_results_are_cached_too() {
    let net = Canned::new(status(500), status(500));
    let mut cache = PriceCache::new();
    let cards = vec![card("Mew"), card("Mew")];
    let out = collect_prices(&cards, &mut cache, &net, &FetchOptions::default(), None);
    assert!(out[1].error.is_some());
    assert_eq!(net.calls(), 2);
}

#[test]
fn runner_builds_table_in_input_order() {
    let net = Canned::new(page(&["$100.00"]), page(&["$70.00"]));
    let mut cache = PriceCache::new();
    let input = "name,set\nCharizard,Base Set\nBlastoise,Base Set\n";

    let table = runner::run(input, &mut cache, &net, &FetchOptions::default(), None);
    assert_eq!(table.nrows(), 2);
    assert_eq!(table.rows[0].card.name, "Charizard");
    assert_eq!(table.rows[1].card.name, "Blastoise");
    assert!(table.rows.iter().all(|r| r.bargain));
    assert_eq!(table.bargain_count(), 2);
}

#[test]
fn runner_with_no_cards_makes_no_requests() {
    let net = Canned::new(page(&["$1"]), page(&["$1"]));
    let mut cache = PriceCache::new();
    let table = runner::run("name,set\n", &mut cache, &net, &FetchOptions::default(), None);
    assert!(table.is_empty());
    assert_eq!(net.calls(), 0);
}
