// SPDX-License-Identifier: MPL-2.0
//! The normalized, source-agnostic representation of one addable item.

/// Discriminant of a [`SlideSource`]. One variant per raw content shape;
/// sequencing rules key off this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Hymn,
    BiblePassage,
    FreeText,
    Image,
}

/// One normalized playlist entry, produced by the [`adapter`](crate::content::adapter)
/// functions and consumed by the [`sequencer`](crate::content::sequencer).
///
/// The body is the raw text payload before slide splitting. Hymn bodies are
/// already stanza/chorus-interleaved; chapter bodies hold all verses joined
/// by blank lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSource {
    /// Display title shown above the slide during presentation.
    pub title: String,
    pub kind: SourceKind,
    pub body: String,
    /// Present only when `kind` is [`SourceKind::Image`]; the body is ignored
    /// for rendering when set.
    pub image_ref: Option<String>,
    /// Optional 0-based slide index to begin at (a specific verse inside a
    /// chapter). Clamped into bounds by the sequencer.
    pub start_hint: Option<usize>,
}
