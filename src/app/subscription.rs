// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Subscriptions are derived from state, which is what makes the keyboard
//! contract's acquire/release pairing hold on every exit path: the listener
//! exists exactly while the Presenter screen (phase Showing/Transitioning)
//! or the Mirror screen is current, and vanishes the moment `close()`
//! switches back to the operator screen - there is no imperative unbind to
//! forget.

use super::{Message, Screen};
use crate::live::{subscriber, SessionStore};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the raw-event subscription for the current screen.
///
/// - Presenter: keyboard navigation contract plus F11.
/// - Mirror: F11 only (the mirror has no navigation input).
/// - Operator: nothing; widgets handle their own input.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Presenter | Screen::Mirror => event::listen_with(|event, status, window_id| {
            if let event::Event::Keyboard(..) = &event {
                match status {
                    event::Status::Ignored => Some(Message::RawEvent {
                        window: window_id,
                        event,
                    }),
                    event::Status::Captured => None,
                }
            } else {
                None
            }
        }),
        Screen::Operator => Subscription::none(),
    }
}

/// Creates a periodic tick subscription for the fade animation and
/// notification auto-dismiss. Idle (no transition, no toasts) means no
/// timer at all.
pub fn create_tick_subscription(
    transitioning: bool,
    has_notifications: bool,
    transition_tick: Duration,
) -> Subscription<Message> {
    if transitioning {
        time::every(transition_tick).map(Message::Tick)
    } else if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the mirror's standing document subscription.
///
/// Only the Mirror screen polls; the operator process is the write side
/// and renders its own authoritative state.
pub fn create_live_subscription(
    screen: Screen,
    store: Option<&SessionStore>,
    poll_interval: Duration,
) -> Subscription<Message> {
    match (screen, store) {
        (Screen::Mirror, Some(store)) => {
            subscriber::subscription(store.clone(), poll_interval).map(Message::Live)
        }
        _ => Subscription::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // `Subscription` is opaque, so these are construction smoke tests; the
    // bind/unbind behavior itself is asserted through the app-level tests
    // that drive screen changes.

    #[test]
    fn event_subscriptions_build_for_every_screen() {
        for screen in [Screen::Operator, Screen::Presenter, Screen::Mirror] {
            let _ = create_event_subscription(screen);
        }
    }

    #[test]
    fn tick_subscriptions_build_in_every_state() {
        let tick = Duration::from_millis(33);
        for (transitioning, toasts) in [(false, false), (true, false), (false, true), (true, true)]
        {
            let _ = create_tick_subscription(transitioning, toasts, tick);
        }
    }

    #[test]
    fn live_subscription_builds_with_and_without_a_store() {
        let store = SessionStore::new(PathBuf::from("/tmp/live_session.cbor"));
        let poll = Duration::from_millis(250);
        let _ = create_live_subscription(Screen::Mirror, Some(&store), poll);
        let _ = create_live_subscription(Screen::Operator, None, poll);
    }
}
