// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::logo::tally::Tally;

/// The share of one symbol at one locus, and where its segment starts in the locus' stack.
///
/// `offset` is the sum of the ratios of all symbols that sort before this one, so segments can be
/// stacked bottom-up without overlap; the last one ends at 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioEntry {
    pub symbol: char,
    pub ratio: f64,
    pub offset: f64,
}

impl RatioEntry {
    /// Where this entry's segment ends (its offset plus its ratio).
    pub fn top(&self) -> f64 {
        self.offset + self.ratio
    }
}

// Entries are ordered by symbol (code point) only; equal ratios never change the order.
pub(crate) fn locus_ratios(tally: &Tally) -> Vec<RatioEntry> {
    let total = tally.total() as f64;
    let mut offset = 0.0;
    tally
        .counts()
        .filter(|&(_, count)| count > 0)
        .sorted_by_key(|&(symbol, _)| symbol)
        .map(|(symbol, count)| {
            let ratio = count as f64 / total;
            let entry = RatioEntry {
                symbol,
                ratio,
                offset,
            };
            offset += ratio;
            entry
        })
        .collect()
}
