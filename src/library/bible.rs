// SPDX-License-Identifier: MPL-2.0
//! The Bible corpus provider.

use serde::Deserialize;

use crate::error::{Error, Result};

const BIBLE_FILE: &str = "bible.json";

/// One book: chapters in canonical order, each an ordered list of verses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BibleBook {
    pub name: String,
    /// Short lookup key, e.g. `jude`.
    pub abbrev: String,
    pub chapters: Vec<Vec<String>>,
}

impl BibleBook {
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Verses of a 1-based chapter number.
    pub fn chapter(&self, number: usize) -> Option<&[String]> {
        number
            .checked_sub(1)
            .and_then(|index| self.chapters.get(index))
            .map(Vec::as_slice)
    }
}

/// The full Bible corpus in canonical book order.
#[derive(Debug, Clone, Default)]
pub struct Bible {
    books: Vec<BibleBook>,
}

impl Bible {
    /// Loads the corpus bundled into the binary.
    pub fn load_embedded() -> Result<Self> {
        Self::from_json(&super::embedded_file(BIBLE_FILE)?)
    }

    /// Parses a corpus from raw JSON (an array of book records).
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let books: Vec<BibleBook> = serde_json::from_slice(bytes)
            .map_err(|e| Error::Config(format!("{}: {}", BIBLE_FILE, e)))?;
        Ok(Self { books })
    }

    pub fn books(&self) -> &[BibleBook] {
        &self.books
    }

    /// Looks a book up by its abbreviation, case-insensitively.
    pub fn book(&self, abbrev: &str) -> Option<&BibleBook> {
        self.books
            .iter()
            .find(|book| book.abbrev.eq_ignore_ascii_case(abbrev))
    }
}
