// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod error;

pub mod card;
pub mod csv;
pub mod query;

pub mod core;
pub mod progress;
pub mod scrape;
pub mod store;
pub mod table;

pub mod runner;

pub mod cli;
pub mod file;
pub mod gui;

pub use card::{parse_cards, CardRecord};
pub use error::{Error, FetchError, Result};
pub use scrape::{collect_prices, fetch_price, PriceResult};
pub use store::PriceCache;
pub use table::PriceTable;
