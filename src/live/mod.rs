// SPDX-License-Identifier: MPL-2.0
//! The live mirroring channel.
//!
//! While a live session is active, every committed navigation change is
//! republished as a [`LiveStateDocument`] through a shared single-document
//! store ([`store::SessionStore`]); a second process running in mirror mode
//! holds a standing subscription ([`subscriber`]) and re-renders whatever
//! the document holds. The two sides never talk directly: the document is
//! the only state crossing the process boundary, and it is eventually
//! consistent - the controlling display never waits for it.

pub mod publisher;
pub mod store;
pub mod subscriber;

pub use publisher::Publisher;
pub use store::SessionStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::content::Slide;

/// The one shared document.
///
/// `current_slide` is the whole contract with the mirror. `revision`
/// increases by one per write and lets the subscriber suppress stale or
/// duplicate observations of the polled document; `updated_at` is
/// informational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveStateDocument {
    pub revision: u64,
    pub updated_at: DateTime<Utc>,
    pub current_slide: Option<Slide>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_round_trips_through_cbor() {
        let doc = LiveStateDocument {
            revision: 7,
            updated_at: Utc::now(),
            current_slide: Some(Slide::Text("Stanza A".into())),
        };

        let mut buffer = Vec::new();
        ciborium::into_writer(&doc, &mut buffer).expect("serialize");
        let decoded: LiveStateDocument =
            ciborium::from_reader(buffer.as_slice()).expect("deserialize");

        assert_eq!(decoded, doc);
    }

    #[test]
    fn cleared_document_round_trips() {
        let doc = LiveStateDocument {
            revision: 8,
            updated_at: Utc::now(),
            current_slide: None,
        };

        let mut buffer = Vec::new();
        ciborium::into_writer(&doc, &mut buffer).expect("serialize");
        let decoded: LiveStateDocument =
            ciborium::from_reader(buffer.as_slice()).expect("deserialize");

        assert!(decoded.current_slide.is_none());
    }
}
