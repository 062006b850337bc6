// SPDX-License-Identifier: MPL-2.0
//! The pre-made slide catalog: recurring announcement slides and banner
//! images an operator can add to the playlist without retyping them.

use serde::Deserialize;

use crate::error::{Error, Result};

const CATALOG_FILE: &str = "slides.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Text,
    Image,
}

/// One catalog entry. Text entries carry their content inline; image entries
/// reference the bitmap to display and may use `content` as a caption.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogSlide {
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub kind: CatalogKind,
    #[serde(default)]
    pub image_ref: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SlideCatalog {
    entries: Vec<CatalogSlide>,
}

impl SlideCatalog {
    /// Loads the catalog bundled into the binary.
    pub fn load_embedded() -> Result<Self> {
        Self::from_json(&super::embedded_file(CATALOG_FILE)?)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let entries: Vec<CatalogSlide> = serde_json::from_slice(bytes)
            .map_err(|e| Error::Config(format!("{}: {}", CATALOG_FILE, e)))?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CatalogSlide] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_text_and_image_entries() {
        let catalog = SlideCatalog::from_json(
            br#"[
                {"title": "Welcome", "content": "Welcome!", "kind": "text"},
                {"title": "Banner", "kind": "image", "image_ref": "banner.png"}
            ]"#,
        )
        .expect("catalog should parse");

        assert_eq!(catalog.entries().len(), 2);
        assert_eq!(catalog.entries()[0].kind, CatalogKind::Text);
        assert_eq!(catalog.entries()[1].image_ref.as_deref(), Some("banner.png"));
    }

    #[test]
    fn content_defaults_to_empty_for_image_entries() {
        let catalog = SlideCatalog::from_json(
            br#"[{"title": "Banner", "kind": "image", "image_ref": "banner.png"}]"#,
        )
        .expect("catalog should parse");
        assert!(catalog.entries()[0].content.is_empty());
    }

    #[test]
    fn invalid_json_reports_file_name() {
        let err = SlideCatalog::from_json(b"{}").unwrap_err();
        assert!(format!("{}", err).contains("slides.json"));
    }
}
