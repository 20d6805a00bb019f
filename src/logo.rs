// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

mod ratio;
mod tally;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::color_map::ColorMap;
use crate::errors::LogoError;
use crate::seq::record::SeqRecord;

pub use crate::logo::ratio::RatioEntry;
use crate::logo::{ratio::locus_ratios, tally::tally_loci};

/// Computes, for each locus (position) of the records, the share of each symbol found there.
///
/// The result has one entry per position up to the longest record's length. Within a locus,
/// entries are sorted by symbol and carry stacking offsets; their ratios sum to 1.
pub fn aggregate(records: &[SeqRecord]) -> Vec<Vec<RatioEntry>> {
    let loci: Vec<Vec<RatioEntry>> = tally_loci(records).iter().map(locus_ratios).collect();
    debug!("aggregated {} records into {} loci", records.len(), loci.len());
    loci
}

// What the renderer gets: the per-locus ratios plus the colors to draw the symbols with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoData {
    pub loci: Vec<Vec<RatioEntry>>,
    pub colors: ColorMap,
}

impl LogoData {
    pub fn new(records: &[SeqRecord], colors: ColorMap) -> Self {
        LogoData {
            loci: aggregate(records),
            colors,
        }
    }

    pub fn num_loci(&self) -> usize {
        self.loci.len()
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, LogoError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
