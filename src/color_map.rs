// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::collections::BTreeMap;

use hex_color::HexColor;
use serde::{Deserialize, Serialize};

// Symbol -> color table handed to the renderer along with the loci. Symbols with no entry are
// still tallied; it is up to the renderer what (if anything) to draw for them.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<String, String>", try_from = "BTreeMap<String, String>")]
pub struct ColorMap {
    colors: BTreeMap<char, (u8, u8, u8)>,
}

impl ColorMap {
    pub fn empty() -> Self {
        ColorMap {
            colors: BTreeMap::new(),
        }
    }

    pub fn get(&self, symbol: char) -> Option<(u8, u8, u8)> {
        self.colors.get(&symbol).copied()
    }

    pub fn insert(&mut self, symbol: char, rgb: (u8, u8, u8)) {
        self.colors.insert(symbol, rgb);
    }

    /// Sets `symbol`'s color from a hex string such as "#1fca23" (or "#abc").
    pub fn insert_hex(&mut self, symbol: char, hex: &str) -> Result<(), String> {
        let color = HexColor::parse_rgb(hex)
            .map_err(|e| format!("Bad color '{}' for '{}': {}", hex, symbol, e))?;
        self.insert(symbol, (color.r, color.g, color.b));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, (u8, u8, u8))> + '_ {
        self.colors.iter().map(|(&sym, &rgb)| (sym, rgb))
    }
}

impl Default for ColorMap {
    fn default() -> Self {
        let mut map = ColorMap::empty();
        map.insert('A', (0x1f, 0xca, 0x23));
        map.insert('C', (0x06, 0x1a, 0xc8));
        map.insert('G', (0xfe, 0xb2, 0x2b));
        map.insert('T', (0xc9, 0x08, 0x13));
        map
    }
}

pub fn rgb_to_hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

impl From<ColorMap> for BTreeMap<String, String> {
    fn from(map: ColorMap) -> Self {
        map.iter()
            .map(|(sym, rgb)| (sym.to_string(), rgb_to_hex(rgb)))
            .collect()
    }
}

impl TryFrom<BTreeMap<String, String>> for ColorMap {
    type Error = String;

    fn try_from(raw: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        let mut map = ColorMap::empty();
        for (key, hex) in raw {
            let symbol = single_char(&key)?;
            map.insert_hex(symbol, &hex)?;
        }
        Ok(map)
    }
}

pub(crate) fn single_char(key: &str) -> Result<char, String> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("Expected a single symbol as color key, got '{}'", key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_colors() {
        let map = ColorMap::default();
        assert_eq!(map.len(), 4);
        assert_eq!(map.get('A'), Some((0x1f, 0xca, 0x23)));
        assert_eq!(map.get('T'), Some((0xc9, 0x08, 0x13)));
        assert_eq!(map.get('N'), None);
    }

    #[test]
    fn test_insert_hex() {
        let mut map = ColorMap::empty();
        map.insert_hex('U', "#c90813").expect("valid color");
        assert_eq!(map.get('U'), Some((201, 8, 19)));
    }

    #[test]
    fn test_insert_hex_bad() {
        let mut map = ColorMap::empty();
        assert!(map.insert_hex('A', "green").is_err());
        assert!(map.is_empty());
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex((10, 20, 30)), "#0a141e");
    }

    #[test]
    fn test_serialize_as_hex_strings() {
        let json = serde_json::to_string(&ColorMap::default()).unwrap();
        assert_eq!(
            json,
            r##"{"A":"#1fca23","C":"#061ac8","G":"#feb22b","T":"#c90813"}"##
        );
    }

    #[test]
    fn test_deserialize_rejects_long_key() {
        let res: Result<ColorMap, _> = serde_json::from_str(r##"{"AC":"#000000"}"##);
        assert!(res.is_err());
    }
}
