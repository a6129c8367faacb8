// src/store.rs
//
// Per-session memo of fetched prices. Lives exactly as long as its owner
// (the GUI app or one CLI run); nothing is written to disk.

use std::collections::HashMap;

use crate::card::CardRecord;
use crate::scrape::PriceResult;

#[derive(Debug, Default)]
pub struct PriceCache {
    entries: HashMap<CardRecord, PriceResult>,
    hits: usize,
}

impl PriceCache {
    pub fn new() -> Self { Self::default() }

    /// Cached result for this exact card, counting the hit.
    pub fn get(&mut self, card: &CardRecord) -> Option<PriceResult> {
        let found = self.entries.get(card).cloned();
        if found.is_some() {
            self.hits += 1;
        }
        found
    }

    pub fn insert(&mut self, card: CardRecord, result: PriceResult) {
        self.entries.insert(card, result);
    }

    #[inline] pub fn len(&self) -> usize { self.entries.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    #[inline] pub fn hits(&self) -> usize { self.hits }

    /// End of the memo lifetime.
    pub fn clear(&mut self) {
        logf!("Cache: Cleared {} entr(ies), {} hit(s)", self.entries.len(), self.hits);
        self.entries.clear();
        self.hits = 0;
    }
}
