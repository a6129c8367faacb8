// src/config/consts.rs

// Marketplace
pub const SEARCH_URL: &str = "https://www.ebay.com/sch/i.html";
pub const SOLD_FILTER: &str = "LH_Sold=1&LH_Complete=1";
pub const LISTING_FILTER: &str = "LH_BIN=1";
pub const PRICE_SELECTOR: &str = ".s-item__price";

// Request headers (browser-like; the site serves a stripped page otherwise)
pub const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/115.0 Safari/537.36"
);
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
pub const ACCEPT: &str = concat!(
    "text/html,application/xhtml+xml,application/xml;q=0.9,",
    "image/avif,image/webp,image/apng,*/*;q=0.8"
);
pub const TIMEOUT_SECS: u64 = 10;

// Input
pub const CARD_COLUMNS: [&str; 6] = ["name", "set", "number", "edition", "holo", "condition"];
pub const HOLO_TRUTHY: [&str; 4] = ["true", "1", "yes", "y"];
pub const EXAMPLE_INPUT: &str =
    "name,set,number,edition,holo,condition\nPikachu,Base Set,58,1st Edition,true,NM";

// Display
pub const BARGAIN_RATIO: f64 = 0.8;

// Local store (logs only; prices are never persisted)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "prices";
