// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde_json::Value;

use crate::color_map::{single_char, ColorMap};
use crate::errors::LogoError;

pub const CONFIG_FILENAME: &str = ".seqlogoconfig";

// Settings from the (optional) JSON config file, e.g.
//
// {
//     "colors": { "A": "#1fca23", "U": "#c90813" },
//     "crlf": true
// }
//
// Missing fields keep their defaults. Colors are merged into the default map.

#[derive(Debug, Clone, PartialEq)]
pub struct LogoConfig {
    pub colors: ColorMap,
    pub strip_cr: bool,
}

impl Default for LogoConfig {
    fn default() -> Self {
        LogoConfig {
            colors: ColorMap::default(),
            strip_cr: false,
        }
    }
}

impl LogoConfig {
    pub fn from_value(value: &Value) -> Result<Self, LogoError> {
        let mut config = LogoConfig::default();
        if let Some(colors) = value.get("colors") {
            let obj = colors
                .as_object()
                .ok_or_else(|| LogoError::Format(String::from("'colors' must be an object")))?;
            for (key, hex) in obj {
                let symbol = single_char(key)?;
                let hex = hex.as_str().ok_or_else(|| {
                    LogoError::Format(format!("Color for '{}' must be a string", key))
                })?;
                config.colors.insert_hex(symbol, hex)?;
            }
        }
        if let Some(crlf) = value.get("crlf") {
            config.strip_cr = crlf
                .as_bool()
                .ok_or_else(|| LogoError::Format(String::from("'crlf' must be a boolean")))?;
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, LogoError> {
        let text = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&text)?;
        debug!("read config from {}", path.display());
        LogoConfig::from_value(&value)
    }
}

pub fn find_logo_config() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok().map(PathBuf::from);
    let cwd = std::env::current_dir().ok()?;
    find_logo_config_in(home.as_deref(), &cwd)
}

// $HOME wins over the current directory.
pub fn find_logo_config_in(home: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(home) = home {
        let path = home.join(CONFIG_FILENAME);
        if path.exists() {
            return Some(path);
        }
    }
    let path = cwd.join(CONFIG_FILENAME);
    if path.exists() {
        return Some(path);
    }
    None
}
