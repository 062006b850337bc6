// SPDX-License-Identifier: MPL-2.0
//! Expands a [`SlideSource`] into the ordered slide list the navigation
//! controller operates on.
//!
//! Sequencing is deterministic: equal sources always yield identical slide
//! lists, because a re-render may re-derive slides from the same source
//! without re-running the adapter. The result is never empty; a source with
//! no content collapses to a single placeholder slide, so the controller
//! never has to handle an empty sequence.

use super::adapter::BLOCK_SEPARATOR;
use super::slide::Slide;
use super::source::{SlideSource, SourceKind};

/// Text of the slide shown for a source with no content.
pub const NO_CONTENT_PLACEHOLDER: &str = "This item has no content.";

/// Produces the renderable slides for a source.
pub fn sequence(source: &SlideSource) -> Vec<Slide> {
    match source.kind {
        SourceKind::Image => match &source.image_ref {
            // Exactly one slide; the body (caption) is not rendered.
            Some(reference) => vec![Slide::Image(reference.clone())],
            // Adapters fail closed before building an image source without
            // a reference; collapse to the placeholder if one slips through.
            None => vec![Slide::Text(NO_CONTENT_PLACEHOLDER.to_string())],
        },
        SourceKind::Hymn | SourceKind::BiblePassage | SourceKind::FreeText => {
            let blocks = split_blocks(&source.body);
            if blocks.is_empty() {
                // Only an all-whitespace body splits into nothing.
                return vec![Slide::Text(NO_CONTENT_PLACEHOLDER.to_string())];
            }
            blocks.into_iter().map(Slide::Text).collect()
        }
    }
}

/// The initial index handed to the navigation controller: the source's
/// start hint clamped into `[0, slide_count - 1]`.
pub fn start_index(source: &SlideSource, slide_count: usize) -> usize {
    debug_assert!(slide_count > 0, "sequence() never yields an empty list");
    source
        .start_hint
        .unwrap_or(0)
        .min(slide_count.saturating_sub(1))
}

/// Splits a body on blank-line boundaries (two or more consecutive
/// newlines), trimming each block and dropping fully-empty ones. Runs of
/// three or more newlines produce empty intermediate pieces, which the
/// emptiness filter removes.
fn split_blocks(body: &str) -> Vec<String> {
    body.split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}
