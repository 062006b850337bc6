// SPDX-License-Identifier: MPL-2.0
//! The write side of the live channel.
//!
//! The publisher only *prepares* documents; the actual write is handed to
//! the Iced runtime as a fire-and-forget task so local navigation never
//! stalls on it. The revision counter advances on prepare, not on write
//! completion: a failed write is simply superseded by the next one, which
//! is the whole retry policy.

use chrono::Utc;

use crate::content::Slide;

use super::{LiveStateDocument, SessionStore};

/// Publisher state for one live session.
#[derive(Debug, Clone)]
pub struct Publisher {
    store: SessionStore,
    revision: u64,
}

impl Publisher {
    /// Starts a live session against a store, resuming the revision counter
    /// from whatever document is already there. A mirror that watched a
    /// previous session would otherwise suppress the new session's first
    /// writes as stale.
    pub fn resume(store: SessionStore) -> Self {
        let revision = store
            .read()
            .ok()
            .flatten()
            .map(|doc| doc.revision)
            .unwrap_or(0);
        Self { store, revision }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Builds the next document for a committed slide change (`Some`) or a
    /// session clear (`None`). The caller passes the result to
    /// [`SessionStore::write_async`].
    pub fn prepare(&mut self, current_slide: Option<Slide>) -> LiveStateDocument {
        self.revision += 1;
        LiveStateDocument {
            revision: self.revision,
            updated_at: Utc::now(),
            current_slide,
        }
    }
}
