// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use seqlogo::{
    logo::RatioEntry,
    seq::{
        fasta::{read_fasta_file, ParseOptions},
        file::SeqFile,
    },
};

#[allow(dead_code)]
pub fn read(path: &str) -> SeqFile {
    read_fasta_file(path, &ParseOptions::default()).expect("Test file not found")
}

// Compact "symbol:ratio@offset" rendering of one locus, to keep assertions short.
#[allow(dead_code)]
pub fn locus_text(locus: &[RatioEntry]) -> String {
    locus
        .iter()
        .map(|e| format!("{}:{:.3}@{:.3}", e.symbol, e.ratio, e.offset))
        .collect::<Vec<String>>()
        .join(" ")
}
