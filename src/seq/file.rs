// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use crate::seq::record::SeqRecord;

// For our purposes, a sequence file is just a Vec of sequence records, in file order.

pub type SeqFile = Vec<SeqRecord>;

/// Length of the longest sequence, which is also the number of loci in the logo.
pub fn max_seq_len(seq_file: &[SeqRecord]) -> usize {
    seq_file.iter().map(SeqRecord::len).max().unwrap_or(0)
}
