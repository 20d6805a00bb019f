// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{fmt, io};

#[derive(Debug)]
pub enum LogoError {
    Io(io::Error),
    Format(String),
    Json(serde_json::Error),
}

// These allow conversion to LogoError, required for main() to return Result<()> and for '?' to
// work.

impl From<io::Error> for LogoError {
    fn from(e: io::Error) -> Self {
        LogoError::Io(e)
    }
}

impl From<String> for LogoError {
    fn from(s: String) -> Self {
        LogoError::Format(s)
    }
}

impl From<serde_json::Error> for LogoError {
    fn from(e: serde_json::Error) -> Self {
        LogoError::Json(e)
    }
}

impl fmt::Display for LogoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogoError::Io(e) => write!(f, "I/O error: {}", e),
            LogoError::Format(msg) => write!(f, "Format error: {}", msg),
            LogoError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for LogoError {}
