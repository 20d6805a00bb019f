// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    fs,
    io::{stdout, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use log::{info, warn};

use crate::config::{find_logo_config, LogoConfig};
use crate::errors::LogoError;
use crate::logo::LogoData;
use crate::seq::fasta::{read_fasta_file, ParseOptions};
use crate::seq::file::SeqFile;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// Sequence file (FastA)
    seq_fname: String,

    /// Write the logo data to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Single-line JSON (default: pretty-printed)
    #[arg(short, long)]
    compact: bool,

    /// Strip carriage returns at line ends (CR LF files)
    #[arg(long)]
    crlf: bool,

    /// Config file (default: ~/.seqlogoconfig, then ./.seqlogoconfig)
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Info mode (print a summary, no JSON)
    #[arg(short, long)]
    info: bool,
}

// An explicitly requested config must be readable; a discovered one that isn't is skipped.
fn load_config(
    explicit: Option<&Path>,
    discovered: Option<PathBuf>,
) -> Result<LogoConfig, LogoError> {
    if let Some(path) = explicit {
        return LogoConfig::from_file(path);
    }
    match discovered {
        Some(path) => match LogoConfig::from_file(&path) {
            Ok(cfg) => {
                info!("Using config {}", path.display());
                Ok(cfg)
            }
            Err(e) => {
                warn!("Error reading {}: {} (using defaults)", path.display(), e);
                Ok(LogoConfig::default())
            }
        },
        None => Ok(LogoConfig::default()),
    }
}

fn output_info<W: Write>(
    out: &mut W,
    name: &str,
    seq_file: &SeqFile,
    data: &LogoData,
) -> Result<(), LogoError> {
    writeln!(out, "name: {}", name)?;
    writeln!(out, "nb_records: {}", seq_file.len())?;
    writeln!(out, "nb_loci: {}", data.num_loci())?;
    writeln!(out)?;
    Ok(())
}

pub fn run() -> Result<(), LogoError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    run_with(cli, &mut stdout().lock())
}

// Everything after argument parsing; anything not written to a file goes to `out`.
fn run_with<W: Write>(cli: Cli, out: &mut W) -> Result<(), LogoError> {
    let discovered = match cli.config {
        Some(_) => None,
        None => find_logo_config(),
    };
    let config = load_config(cli.config.as_deref(), discovered)?;
    let opts = ParseOptions {
        strip_cr: cli.crlf || config.strip_cr,
    };

    let seq_file = read_fasta_file(&cli.seq_fname, &opts)?;
    info!("Read {} records from {}", seq_file.len(), cli.seq_fname);
    let data = LogoData::new(&seq_file, config.colors);

    if cli.info {
        return output_info(out, &cli.seq_fname, &seq_file, &data);
    }

    let json = data.to_json(!cli.compact)?;
    match cli.output {
        Some(path) => {
            fs::write(&path, json + "\n")?;
            info!("Wrote {} loci to {}", data.num_loci(), path.display());
        }
        None => {
            writeln!(out, "{}", json)?;
        }
    }

    Ok(())
}
