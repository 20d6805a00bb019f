// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs;
use std::path::Path;

use log::debug;

use crate::errors::LogoError;
use crate::seq::file::SeqFile;
use crate::seq::record::SeqRecord;

const HEADER_MARKER: char = '>';

#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Remove one trailing '\r' from each line (CR LF files). Off by default, in which case the CR
    /// is part of the line's content.
    pub strip_cr: bool,
}

/// Parses FastA-like text into records, one per non-empty sequence line.
///
/// Lines are split on '\n' only. Empty lines are ignored, a line starting with '>' sets the
/// current header, and every other line becomes a record carrying the current header (the empty
/// string if no header has been seen yet). Wrapped sequences are _not_ joined. This never fails.
pub fn parse_fasta_str(text: &str) -> SeqFile {
    parse_fasta_str_with(text, &ParseOptions::default())
}

pub fn parse_fasta_str_with(text: &str, opts: &ParseOptions) -> SeqFile {
    let mut result: SeqFile = Vec::new();
    let mut current_header = "";

    for raw_line in text.split('\n') {
        let line = if opts.strip_cr {
            raw_line.strip_suffix('\r').unwrap_or(raw_line)
        } else {
            raw_line
        };
        if line.is_empty() {
            continue;
        }
        if let Some(hdr) = line.strip_prefix(HEADER_MARKER) {
            current_header = hdr;
            continue;
        }
        result.push(SeqRecord::new(current_header, line));
    }

    debug!("parsed {} records", result.len());
    result
}

pub fn read_fasta_file<P: AsRef<Path>>(path: P, opts: &ParseOptions) -> Result<SeqFile, LogoError> {
    let text = fs::read_to_string(path)?;
    Ok(parse_fasta_str_with(&text, opts))
}
