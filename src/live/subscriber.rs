// SPDX-License-Identifier: MPL-2.0
//! The read side of the live channel: a standing Iced subscription that
//! polls the shared document and emits each new revision exactly once.
//!
//! The subscriber is strictly a mirror - it has no navigation input and
//! never invents values: an observation is emitted only when its revision
//! is above the last emitted one, so the mirror renders a subsequence of
//! what the publisher actually wrote, in write order, ending on the last
//! written value once the publisher goes idle. Unreadable or missing
//! documents are skipped and retried on the next poll (fail-static).

use std::hash::{Hash, Hasher};
use std::time::Duration;

use futures_util::SinkExt;
use iced::stream;

use super::{LiveStateDocument, SessionStore};

/// Subscription context. One poll loop per document path; changing the
/// path or interval recreates the subscription. Only the path participates
/// in the subscription identity, mirroring the original `LivePollId(path)`.
#[derive(Debug, Clone)]
struct LivePollData {
    store: SessionStore,
    poll_interval: Duration,
}

impl Hash for LivePollData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.store.path().hash(state);
    }
}

/// An observation of the shared document.
#[derive(Debug, Clone)]
pub enum Event {
    /// The document changed; `current_slide: None` means the presentation
    /// ended (or has not started).
    Updated(LiveStateDocument),
}

/// Creates the polling subscription for a mirror view.
///
/// The subscription lives exactly as long as the view keeps returning it;
/// Iced cancels the underlying task when it disappears, which is the
/// release half of the registration.
pub fn subscription(store: SessionStore, poll_interval: Duration) -> iced::Subscription<Event> {
    iced::Subscription::run_with(
        LivePollData {
            store,
            poll_interval,
        },
        poll_stream,
    )
}

/// Builds the poll loop stream for a subscription context. Declared as a
/// free function so it can be passed as the `fn` pointer `run_with` requires.
fn poll_stream(data: &LivePollData) -> impl futures_util::Stream<Item = Event> {
    let store = data.store.clone();
    let poll_interval = data.poll_interval;

    stream::channel(100, move |mut output: iced::futures::channel::mpsc::Sender<Event>| async move {
        let mut last_emitted: Option<u64> = None;
        let mut interval = tokio::time::interval(poll_interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            interval.tick().await;

            let store = store.clone();
            let observed = tokio::task::spawn_blocking(move || store.read()).await;

            // A torn, missing or unreadable document is retried on the
            // next tick; the last rendered slide stays up meanwhile.
            let document = match observed {
                Ok(Ok(Some(document))) => document,
                _ => continue,
            };

            if last_emitted.is_some_and(|last| document.revision <= last) {
                continue;
            }
            last_emitted = Some(document.revision);

            if output.send(Event::Updated(document)).await.is_err() {
                // Receiver dropped; the subscription is being torn down.
                return;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Slide;
    use crate::live::store::SESSION_FILE;
    use chrono::Utc;
    use tempfile::tempdir;

    fn document(revision: u64, text: &str) -> LiveStateDocument {
        LiveStateDocument {
            revision,
            updated_at: Utc::now(),
            current_slide: Some(Slide::Text(text.into())),
        }
    }

    /// The dedup rule the poll loop applies, exercised directly: emit only
    /// observations with a revision above the last emitted one.
    fn emit_sequence(observations: &[Option<LiveStateDocument>]) -> Vec<u64> {
        let mut last_emitted: Option<u64> = None;
        let mut emitted = Vec::new();
        for observed in observations {
            let Some(document) = observed else { continue };
            if last_emitted.is_some_and(|last| document.revision <= last) {
                continue;
            }
            last_emitted = Some(document.revision);
            emitted.push(document.revision);
        }
        emitted
    }

    #[test]
    fn repeated_observations_of_one_revision_emit_once() {
        let doc = document(1, "A");
        let emitted = emit_sequence(&[Some(doc.clone()), Some(doc.clone()), Some(doc)]);
        assert_eq!(emitted, vec![1]);
    }

    #[test]
    fn coalesced_writes_skip_straight_to_the_newest() {
        // Two writes landed between polls; only revision 3 is observed.
        let emitted = emit_sequence(&[Some(document(1, "A")), Some(document(3, "C"))]);
        assert_eq!(emitted, vec![1, 3]);
    }

    #[test]
    fn stale_observations_are_suppressed() {
        let emitted = emit_sequence(&[
            Some(document(2, "B")),
            Some(document(1, "A")),
            Some(document(2, "B")),
        ]);
        assert_eq!(emitted, vec![2]);
    }

    #[test]
    fn missing_documents_are_skipped() {
        let emitted = emit_sequence(&[None, Some(document(1, "A")), None, Some(document(2, "B"))]);
        assert_eq!(emitted, vec![1, 2]);
    }

    #[tokio::test]
    async fn store_observations_follow_write_order() {
        let temp_dir = tempdir().expect("temp dir");
        let store = SessionStore::new(temp_dir.path().join(SESSION_FILE));

        let mut observations = Vec::new();
        for revision in 1..=3u64 {
            store
                .write(&document(revision, &format!("slide {}", revision)))
                .expect("write");
            observations.push(store.read().expect("read"));
        }

        let emitted = emit_sequence(&observations);
        assert_eq!(emitted, vec![1, 2, 3]);
    }
}
