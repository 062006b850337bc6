// SPDX-License-Identifier: MPL-2.0
//! Source adapters: one pure normalization function per raw content shape.
//!
//! Adapters are total for well-formed records. Range errors (a Bible
//! reference past the last chapter or verse) fail closed with
//! [`Error::MalformedSource`] before a `SlideSource` is ever produced, so
//! downstream code never sees an out-of-range start hint.

use super::source::{SlideSource, SourceKind};
use crate::error::{Error, Result};
use crate::library::{BibleBook, CatalogKind, CatalogSlide, Hymn};

/// Blank-line separator between slide blocks. The sequencer splits on the
/// same convention the adapters assemble with.
pub(super) const BLOCK_SEPARATOR: &str = "\n\n";

/// Title shown for operator-typed slides.
pub const CUSTOM_SLIDE_TITLE: &str = "Custom Slide";

/// Whether a hymn gets a leading "number / title" marker as its first slide.
///
/// Standalone full-screen presentation includes it; playlist-embedded
/// presentation omits it because the playlist entry already names the hymn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleMode {
    Standalone,
    Embedded,
}

/// Which part of a chapter a Bible selection addresses. Verse numbers are
/// 1-based, as an operator reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassageSelection {
    /// A single verse: the source body holds only that verse's text.
    Verse(usize),
    /// The whole chapter, starting at the given verse.
    Chapter { verse: usize },
}

/// Normalizes a hymn, interleaving the chorus after every stanza.
///
/// The chorus never precedes the first stanza and is never appended only
/// once at the end; a hymn with no stanzas but a chorus yields the chorus
/// alone.
pub fn hymn(hymn: &Hymn, mode: TitleMode) -> SlideSource {
    let chorus = hymn
        .chorus
        .as_deref()
        .map(normalize_breaks)
        .filter(|chorus| !chorus.trim().is_empty());

    let mut blocks = Vec::with_capacity(hymn.stanzas.len() * 2 + 1);
    if mode == TitleMode::Standalone {
        blocks.push(format!("{}\n{}", hymn.number, hymn.title));
    }
    for stanza in &hymn.stanzas {
        blocks.push(normalize_breaks(stanza));
        if let Some(chorus) = &chorus {
            blocks.push(chorus.clone());
        }
    }
    if hymn.stanzas.is_empty() {
        if let Some(chorus) = &chorus {
            blocks.push(chorus.clone());
        }
    }

    SlideSource {
        title: format!("{} - {}", hymn.number, hymn.title),
        kind: SourceKind::Hymn,
        body: blocks.join(BLOCK_SEPARATOR),
        image_ref: None,
        start_hint: None,
    }
}

/// Normalizes a Bible passage at either granularity.
///
/// A whole-chapter selection joins all verses with blank lines and records
/// the selected verse as the start hint, so presentation can jump there
/// without replaying from verse 1.
pub fn passage(
    book: &BibleBook,
    chapter_number: usize,
    selection: PassageSelection,
) -> Result<SlideSource> {
    let verses = book.chapter(chapter_number).ok_or_else(|| {
        Error::MalformedSource(format!(
            "{} has no chapter {} (of {})",
            book.name,
            chapter_number,
            book.chapter_count()
        ))
    })?;

    let check_verse = |verse: usize| -> Result<()> {
        if verse == 0 || verse > verses.len() {
            return Err(Error::MalformedSource(format!(
                "{} {} has no verse {} (of {})",
                book.name,
                chapter_number,
                verse,
                verses.len()
            )));
        }
        Ok(())
    };

    match selection {
        PassageSelection::Verse(verse) => {
            check_verse(verse)?;
            Ok(SlideSource {
                title: format!("{} {}:{}", book.name, chapter_number, verse),
                kind: SourceKind::BiblePassage,
                body: verses[verse - 1].clone(),
                image_ref: None,
                start_hint: None,
            })
        }
        PassageSelection::Chapter { verse } => {
            // An empty chapter collapses to the sequencer's placeholder
            // slide; the verse hint only makes sense when verses exist.
            let start_hint = if verses.is_empty() {
                None
            } else {
                check_verse(verse)?;
                Some(verse - 1)
            };
            Ok(SlideSource {
                title: format!("{} {}", book.name, chapter_number),
                kind: SourceKind::BiblePassage,
                body: verses.join(BLOCK_SEPARATOR),
                image_ref: None,
                start_hint,
            })
        }
    }
}

/// Normalizes operator-entered free text. The body is the literal input.
pub fn free_text(title: &str, text: &str) -> SlideSource {
    SlideSource {
        title: title.to_string(),
        kind: SourceKind::FreeText,
        body: text.to_string(),
        image_ref: None,
        start_hint: None,
    }
}

/// Normalizes an image slide. The body holds an optional caption.
pub fn image(title: &str, reference: &str, caption: Option<&str>) -> SlideSource {
    SlideSource {
        title: title.to_string(),
        kind: SourceKind::Image,
        body: caption.unwrap_or_default().to_string(),
        image_ref: Some(reference.to_string()),
        start_hint: None,
    }
}

/// Normalizes a pre-made catalog entry. Image entries without a reference
/// fail closed rather than producing an image source with nothing to show.
pub fn catalog_slide(entry: &CatalogSlide) -> Result<SlideSource> {
    match entry.kind {
        CatalogKind::Text => Ok(free_text(&entry.title, &entry.content)),
        CatalogKind::Image => {
            let reference = entry.image_ref.as_deref().ok_or_else(|| {
                Error::MalformedSource(format!(
                    "catalog image slide \"{}\" has no image reference",
                    entry.title
                ))
            })?;
            let caption = (!entry.content.trim().is_empty()).then_some(entry.content.as_str());
            Ok(image(&entry.title, reference, caption))
        }
    }
}

/// Replaces `<br>`-style markers (any casing, optional `/` and whitespace)
/// with newlines. Imported hymnals store line breaks this way.
fn normalize_breaks(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'<'
            && i + 2 < bytes.len()
            && bytes[i + 1].eq_ignore_ascii_case(&b'b')
            && bytes[i + 2].eq_ignore_ascii_case(&b'r')
        {
            let mut j = i + 3;
            while j < bytes.len() && (bytes[j] == b'/' || bytes[j].is_ascii_whitespace()) {
                j += 1;
            }
            if j < bytes.len() && bytes[j] == b'>' {
                out.push_str(&text[copied..i]);
                out.push('\n');
                i = j + 1;
                copied = i;
                continue;
            }
        }
        i += 1;
    }
    out.push_str(&text[copied..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hymn_with_chorus() -> Hymn {
        Hymn {
            number: 15,
            title: "Blessed Assurance".into(),
            stanzas: vec!["Stanza one".into(), "Stanza two".into()],
            chorus: Some("The chorus".into()),
        }
    }

    fn book() -> BibleBook {
        BibleBook {
            name: "Jude".into(),
            abbrev: "jude".into(),
            chapters: vec![vec![
                "Verse one".into(),
                "Verse two".into(),
                "Verse three".into(),
            ]],
        }
    }

    #[test]
    fn chorus_follows_every_stanza_never_leads() {
        let source = hymn(&hymn_with_chorus(), TitleMode::Embedded);
        assert_eq!(
            source.body,
            "Stanza one\n\nThe chorus\n\nStanza two\n\nThe chorus"
        );
    }

    #[test]
    fn hymn_without_chorus_keeps_stanzas_only() {
        let mut raw = hymn_with_chorus();
        raw.chorus = None;
        let source = hymn(&raw, TitleMode::Embedded);
        assert_eq!(source.body, "Stanza one\n\nStanza two");
    }

    #[test]
    fn chorus_only_hymn_yields_the_chorus_alone() {
        let raw = Hymn {
            number: 5,
            title: "Doxology".into(),
            stanzas: vec![],
            chorus: Some("Praise God".into()),
        };
        let source = hymn(&raw, TitleMode::Embedded);
        assert_eq!(source.body, "Praise God");
    }

    #[test]
    fn whitespace_chorus_counts_as_absent() {
        let mut raw = hymn_with_chorus();
        raw.chorus = Some("  \n ".into());
        let source = hymn(&raw, TitleMode::Embedded);
        assert_eq!(source.body, "Stanza one\n\nStanza two");
    }

    #[test]
    fn standalone_mode_prepends_the_title_marker() {
        let source = hymn(&hymn_with_chorus(), TitleMode::Standalone);
        assert!(source.body.starts_with("15\nBlessed Assurance\n\nStanza one"));
    }

    #[test]
    fn hymn_title_carries_number_and_name() {
        let source = hymn(&hymn_with_chorus(), TitleMode::Embedded);
        assert_eq!(source.title, "15 - Blessed Assurance");
    }

    #[test]
    fn break_markers_are_normalized_in_stanzas_and_chorus() {
        let raw = Hymn {
            number: 4,
            title: "Leaning".into(),
            stanzas: vec!["What a fellowship,<br>what a joy divine".into()],
            chorus: Some("Leaning,<BR/>leaning<br />still".into()),
        };
        let source = hymn(&raw, TitleMode::Embedded);
        assert_eq!(
            source.body,
            "What a fellowship,\nwhat a joy divine\n\nLeaning,\nleaning\nstill"
        );
    }

    #[test]
    fn single_verse_selection_holds_only_that_verse() {
        let source = passage(&book(), 1, PassageSelection::Verse(2)).expect("valid selection");
        assert_eq!(source.body, "Verse two");
        assert_eq!(source.title, "Jude 1:2");
        assert_eq!(source.start_hint, None);
    }

    #[test]
    fn chapter_selection_joins_verses_and_records_the_hint() {
        let source =
            passage(&book(), 1, PassageSelection::Chapter { verse: 3 }).expect("valid selection");
        assert_eq!(source.body, "Verse one\n\nVerse two\n\nVerse three");
        assert_eq!(source.title, "Jude 1");
        assert_eq!(source.start_hint, Some(2));
    }

    #[test]
    fn chapter_out_of_range_fails_closed() {
        let err = passage(&book(), 2, PassageSelection::Verse(1)).unwrap_err();
        assert!(matches!(err, Error::MalformedSource(_)));
    }

    #[test]
    fn verse_out_of_range_fails_closed() {
        let err = passage(&book(), 1, PassageSelection::Verse(4)).unwrap_err();
        assert!(matches!(err, Error::MalformedSource(_)));
        let err = passage(&book(), 1, PassageSelection::Chapter { verse: 0 }).unwrap_err();
        assert!(matches!(err, Error::MalformedSource(_)));
    }

    #[test]
    fn free_text_body_is_literal() {
        let source = free_text(CUSTOM_SLIDE_TITLE, "  keep\n\nall of it  ");
        assert_eq!(source.body, "  keep\n\nall of it  ");
        assert_eq!(source.kind, SourceKind::FreeText);
    }

    #[test]
    fn image_source_sets_reference_and_caption() {
        let source = image("Banner", "banners/easter.png", Some("He is risen"));
        assert_eq!(source.kind, SourceKind::Image);
        assert_eq!(source.image_ref.as_deref(), Some("banners/easter.png"));
        assert_eq!(source.body, "He is risen");
    }

    #[test]
    fn catalog_image_without_reference_fails_closed() {
        let entry = CatalogSlide {
            title: "Broken".into(),
            content: String::new(),
            kind: CatalogKind::Image,
            image_ref: None,
        };
        assert!(matches!(
            catalog_slide(&entry),
            Err(Error::MalformedSource(_))
        ));
    }

    #[test]
    fn catalog_text_entry_becomes_free_text() {
        let entry = CatalogSlide {
            title: "Welcome".into(),
            content: "Hello".into(),
            kind: CatalogKind::Text,
            image_ref: None,
        };
        let source = catalog_slide(&entry).expect("text entry is always valid");
        assert_eq!(source.kind, SourceKind::FreeText);
        assert_eq!(source.body, "Hello");
    }

    #[test]
    fn break_normalization_leaves_unrelated_tags_alone() {
        assert_eq!(normalize_breaks("a <bright> idea"), "a <bright> idea");
        assert_eq!(normalize_breaks("no markers"), "no markers");
        assert_eq!(normalize_breaks("tail<br"), "tail<br");
    }
}
