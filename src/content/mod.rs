// SPDX-License-Identifier: MPL-2.0
//! The presentation content pipeline.
//!
//! This module normalizes the four structurally different content sources
//! (hymns, Bible passages, free text, images) into one canonical,
//! navigable slide sequence:
//!
//! - [`adapter`] - maps raw content records into a [`SlideSource`]
//! - [`sequencer`] - expands a [`SlideSource`] into renderable [`Slide`]s

pub mod adapter;
pub mod sequencer;
mod slide;
mod source;

pub use sequencer::{sequence, start_index, NO_CONTENT_PLACEHOLDER};
pub use slide::Slide;
pub use source::{SlideSource, SourceKind};
