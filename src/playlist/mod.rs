// SPDX-License-Identifier: MPL-2.0
//! The operator-curated playlist: an ordered collection of normalized
//! sources awaiting activation.
//!
//! Insertion order is the presentation order. Removal is forgiving (a
//! remove racing an earlier remove is a no-op) while activation is strict:
//! activating a vanished id drives an immediate user-visible transition, so
//! it fails loudly instead of leaving a stale display.

use std::fmt;

use crate::content::SlideSource;
use crate::error::{Error, Result};

/// Unique identifier for a playlist item. Ids are generated from a
/// process-wide counter and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(u64);

impl ItemId {
    /// Creates a new unique item ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

/// One playlist entry: a stable id wrapping a normalized source.
///
/// Items are exclusively owned by the playlist; activation hands out a
/// read-only borrow, never a mutable one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistItem {
    id: ItemId,
    source: SlideSource,
}

impl PlaylistItem {
    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn source(&self) -> &SlideSource {
        &self.source
    }

    pub fn title(&self) -> &str {
        &self.source.title
    }
}

/// The ordered playlist.
#[derive(Debug, Default)]
pub struct Playlist {
    items: Vec<PlaylistItem>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a source, returning the fresh id of the new item.
    pub fn add(&mut self, source: SlideSource) -> ItemId {
        let id = ItemId::new();
        self.items.push(PlaylistItem { id, source });
        id
    }

    /// Removes an item. Absent ids are a no-op: removal may race with
    /// activation or a double click, and neither should fail.
    pub fn remove(&mut self, id: ItemId) {
        self.items.retain(|item| item.id != id);
    }

    /// Looks up the source to present. Fails with `NotFound` when the id is
    /// gone, leaving the caller's navigation state untouched.
    pub fn activate(&self, id: ItemId) -> Result<&SlideSource> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(PlaylistItem::source)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    pub fn items(&self) -> &[PlaylistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SourceKind;

    fn source(title: &str) -> SlideSource {
        SlideSource {
            title: title.into(),
            kind: SourceKind::FreeText,
            body: "body".into(),
            image_ref: None,
            start_hint: None,
        }
    }

    #[test]
    fn item_ids_are_unique() {
        let mut playlist = Playlist::new();
        let a = playlist.add(source("a"));
        let b = playlist.add(source("b"));
        assert_ne!(a, b);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut playlist = Playlist::new();
        playlist.add(source("first"));
        playlist.add(source("second"));
        playlist.add(source("third"));

        let titles: Vec<&str> = playlist.items().iter().map(PlaylistItem::title).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn remove_deletes_only_the_target() {
        let mut playlist = Playlist::new();
        let a = playlist.add(source("a"));
        let b = playlist.add(source("b"));

        playlist.remove(a);
        assert_eq!(playlist.len(), 1);
        assert!(playlist.activate(b).is_ok());
    }

    #[test]
    fn removing_twice_or_never_added_is_a_no_op() {
        let mut playlist = Playlist::new();
        let a = playlist.add(source("a"));
        playlist.add(source("b"));

        playlist.remove(a);
        playlist.remove(a);
        playlist.remove(ItemId::new());
        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn activate_returns_the_source() {
        let mut playlist = Playlist::new();
        let id = playlist.add(source("present me"));
        let activated = playlist.activate(id).expect("item exists");
        assert_eq!(activated.title, "present me");
    }

    #[test]
    fn activating_unknown_id_fails_with_not_found() {
        let playlist = Playlist::new();
        let err = playlist.activate(ItemId::new()).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn ids_survive_removal_of_other_items() {
        let mut playlist = Playlist::new();
        let a = playlist.add(source("a"));
        let b = playlist.add(source("b"));

        playlist.remove(a);
        assert_eq!(playlist.activate(b).unwrap().title, "b");
    }

    #[test]
    fn display_id_is_stable_and_opaque() {
        let id = ItemId::new();
        assert!(id.to_string().starts_with("item-"));
    }
}
