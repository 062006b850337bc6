// SPDX-License-Identifier: MPL-2.0
//! Static content providers: the hymn corpus, the Bible corpus, and the
//! pre-made slide catalog.
//!
//! These are the out-of-scope data sources consumed at their interface; the
//! shape of the records is the contract, corpus completeness is not. The
//! bundled corpora are embedded in the binary so the tool works without any
//! provisioning, which matters when it is started minutes before a service.

mod bible;
mod catalog;
mod hymnal;

pub use bible::{Bible, BibleBook};
pub use catalog::{CatalogKind, CatalogSlide, SlideCatalog};
pub use hymnal::{Hymn, Hymnal};

use rust_embed::RustEmbed;

use crate::error::{Error, Result};

#[derive(RustEmbed)]
#[folder = "assets/data"]
struct DataAssets;

/// Reads one embedded corpus file or fails with a `Config` error naming it.
fn embedded_file(name: &str) -> Result<Vec<u8>> {
    DataAssets::get(name)
        .map(|file| file.data.into_owned())
        .ok_or_else(|| Error::Config(format!("embedded data file missing: {}", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_bundled_corpora_are_present_and_parse() {
        let hymnal = Hymnal::load_embedded().expect("hymnal corpus");
        let bible = Bible::load_embedded().expect("bible corpus");
        let catalog = SlideCatalog::load_embedded().expect("slide catalog");

        assert!(!hymnal.hymns().is_empty());
        assert!(!bible.books().is_empty());
        assert!(!catalog.entries().is_empty());
    }

    #[test]
    fn missing_embedded_file_reports_its_name() {
        let err = embedded_file("does-not-exist.json").unwrap_err();
        assert!(format!("{}", err).contains("does-not-exist.json"));
    }
}
