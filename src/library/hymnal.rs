// SPDX-License-Identifier: MPL-2.0
//! The hymn corpus provider.

use serde::Deserialize;

use crate::error::{Error, Result};

const HYMNAL_FILE: &str = "hymnal.json";

/// One hymn as stored in the corpus. Stanza and chorus text may carry
/// `<br>`-style line-break markers from imported hymnals; the content
/// adapter normalizes those away.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Hymn {
    pub number: u32,
    pub title: String,
    #[serde(default)]
    pub stanzas: Vec<String>,
    #[serde(default)]
    pub chorus: Option<String>,
}

/// The full hymn corpus, ordered by hymn number.
#[derive(Debug, Clone, Default)]
pub struct Hymnal {
    hymns: Vec<Hymn>,
}

impl Hymnal {
    /// Loads the hymnal bundled into the binary.
    pub fn load_embedded() -> Result<Self> {
        Self::from_json(&super::embedded_file(HYMNAL_FILE)?)
    }

    /// Parses a hymnal from raw JSON (an array of hymn records).
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let mut hymns: Vec<Hymn> = serde_json::from_slice(bytes)
            .map_err(|e| Error::Config(format!("{}: {}", HYMNAL_FILE, e)))?;
        hymns.sort_by_key(|hymn| hymn.number);
        Ok(Self { hymns })
    }

    pub fn hymns(&self) -> &[Hymn] {
        &self.hymns
    }

    pub fn get(&self, number: u32) -> Option<&Hymn> {
        self.hymns.iter().find(|hymn| hymn.number == number)
    }

    /// Case-insensitive title search; a numeric query matches hymn numbers.
    pub fn search(&self, query: &str) -> Vec<&Hymn> {
        let query = query.trim();
        if query.is_empty() {
            return self.hymns.iter().collect();
        }
        if let Ok(number) = query.parse::<u32>() {
            return self
                .hymns
                .iter()
                .filter(|hymn| hymn.number == number)
                .collect();
        }
        let needle = query.to_lowercase();
        self.hymns
            .iter()
            .filter(|hymn| hymn.title.to_lowercase().contains(&needle))
            .collect()
    }
}
