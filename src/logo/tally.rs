// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::collections::HashMap;

use crate::seq::record::SeqRecord;

// Symbol counts at one locus. Only built by tally_loci(), which creates a locus the first time a
// symbol reaches it, so `total` is never 0.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    counts: HashMap<char, usize>,
    total: usize,
}

impl Tally {
    fn add(&mut self, symbol: char) {
        *self.counts.entry(symbol).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn counts(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&sym, &count)| (sym, count))
    }
}

// One Tally per locus, indexed by position. Shorter records just stop contributing.
pub(crate) fn tally_loci(records: &[SeqRecord]) -> Vec<Tally> {
    let mut loci: Vec<Tally> = Vec::new();
    for record in records {
        for (j, symbol) in record.sequence.chars().enumerate() {
            // Positions are visited in order, so at most one new locus is needed.
            if j == loci.len() {
                loci.push(Tally::default());
            }
            loci[j].add(symbol);
        }
    }
    loci
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_of(tally: &Tally, symbol: char) -> usize {
        tally
            .counts()
            .find(|&(s, _)| s == symbol)
            .map(|(_, c)| c)
            .unwrap_or(0)
    }

    #[test]
    fn test_tally_empty() {
        assert!(tally_loci(&[]).is_empty());
    }

    #[test]
    fn test_tally_counts() {
        let records = vec![
            SeqRecord::new("a", "AC"),
            SeqRecord::new("b", "AG"),
            SeqRecord::new("c", "TG"),
        ];
        let loci = tally_loci(&records);
        assert_eq!(loci.len(), 2);
        assert_eq!(loci[0].total(), 3);
        assert_eq!(count_of(&loci[0], 'A'), 2);
        assert_eq!(count_of(&loci[0], 'T'), 1);
        assert_eq!(loci[1].total(), 3);
        assert_eq!(count_of(&loci[1], 'G'), 2);
        assert_eq!(count_of(&loci[1], 'C'), 1);
    }

    #[test]
    fn test_tally_ragged() {
        let records = vec![
            SeqRecord::new("", "A"),
            SeqRecord::new("", "ACGT"),
            SeqRecord::new("", "AC"),
        ];
        let loci = tally_loci(&records);
        let totals: Vec<usize> = loci.iter().map(Tally::total).collect();
        assert_eq!(totals, vec![3, 2, 1, 1]);
    }

    #[test]
    fn test_tally_longest_record_first() {
        let records = vec![SeqRecord::new("", "ACG"), SeqRecord::new("", "T")];
        let loci = tally_loci(&records);
        assert_eq!(loci.len(), 3);
        assert_eq!(loci[0].total(), 2);
        assert_eq!(loci[2].total(), 1);
    }

    #[test]
    fn test_tally_multibyte_symbols() {
        // One symbol per char, not per byte.
        let records = vec![SeqRecord::new("", "Aé"), SeqRecord::new("", "éA")];
        let loci = tally_loci(&records);
        assert_eq!(loci.len(), 2);
        assert_eq!(count_of(&loci[0], 'é'), 1);
        assert_eq!(count_of(&loci[1], 'é'), 1);
    }
}
