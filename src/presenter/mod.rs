// SPDX-License-Identifier: MPL-2.0
//! The navigation state machine driving a presentation.
//!
//! The `Presenter` owns the active slide sequence and current index and
//! enforces the lifecycle `Idle -> Showing <-> Transitioning -> Closed`.
//! It is a plain value with no timers and no I/O: the fade animation and
//! the live publishing both hang off the `Option<&Slide>` each mutation
//! returns (`Some` means an index change was committed), which keeps the
//! index semantics testable independently of the animation.
//!
//! Multiple presenters are legal; the application drives exactly one.

use crate::content::{sequence, start_index, Slide, SlideSource};

/// Lifecycle phase of a presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No sequence loaded.
    Idle,
    /// A sequence is loaded and one slide is visible.
    Showing,
    /// The brief animated hand-off between two slides. The index has
    /// already moved; only the visuals are catching up.
    Transitioning,
    /// Terminal per activation; a new activation is accepted from here.
    Closed,
}

/// A navigation request remembered while a transition is running. Only the
/// last one is kept (queue depth 1), so holding an arrow key down skips at
/// the animation rate instead of running away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intent {
    Next,
    Previous,
    GoTo(usize),
}

/// The navigation controller.
#[derive(Debug, Clone)]
pub struct Presenter {
    title: String,
    slides: Vec<Slide>,
    index: usize,
    phase: Phase,
    pending: Option<Intent>,
}

impl Presenter {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            slides: Vec::new(),
            index: 0,
            phase: Phase::Idle,
            pending: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a sequence is loaded (`Showing` or `Transitioning`).
    /// The keyboard subscription exists exactly while this holds.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Showing | Phase::Transitioning)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// The slide currently on screen, while active.
    pub fn current_slide(&self) -> Option<&Slide> {
        if self.is_active() {
            self.slides.get(self.index)
        } else {
            None
        }
    }

    /// Loads a source and enters `Showing` at its clamped start hint.
    ///
    /// Accepted from `Idle` and `Closed` only; returns `None` (state
    /// untouched) while a presentation is already active. Sequencing is
    /// total, so activation is all-or-nothing by construction: the fallible
    /// adapter step happens before a source ever reaches the presenter.
    pub fn activate(&mut self, source: &SlideSource) -> Option<&Slide> {
        if self.is_active() {
            return None;
        }
        let slides = sequence(source);
        self.index = start_index(source, slides.len());
        self.slides = slides;
        self.title = source.title.clone();
        self.phase = Phase::Showing;
        self.pending = None;
        self.slides.get(self.index)
    }

    /// Advances to the next slide.
    ///
    /// Returns the newly current slide when an index change was committed
    /// (the caller starts the fade and publishes). Clamped at the last
    /// slide: no wrap, no error. During a transition the request is queued
    /// (depth 1) and replayed by [`finish_transition`](Self::finish_transition).
    pub fn next(&mut self) -> Option<&Slide> {
        match self.phase {
            Phase::Showing => {
                if self.index + 1 < self.slides.len() {
                    self.index += 1;
                    self.phase = Phase::Transitioning;
                    self.slides.get(self.index)
                } else {
                    None
                }
            }
            Phase::Transitioning => {
                self.pending = Some(Intent::Next);
                None
            }
            Phase::Idle | Phase::Closed => None,
        }
    }

    /// Moves to the previous slide; clamped at 0, never negative.
    pub fn previous(&mut self) -> Option<&Slide> {
        match self.phase {
            Phase::Showing => {
                if self.index > 0 {
                    self.index -= 1;
                    self.phase = Phase::Transitioning;
                    self.slides.get(self.index)
                } else {
                    None
                }
            }
            Phase::Transitioning => {
                self.pending = Some(Intent::Previous);
                None
            }
            Phase::Idle | Phase::Closed => None,
        }
    }

    /// Jumps directly to a slide, clamping into bounds. Used when the
    /// operator re-selects a specific verse or stanza.
    pub fn go_to(&mut self, target: usize) -> Option<&Slide> {
        match self.phase {
            Phase::Showing => {
                let clamped = target.min(self.slides.len().saturating_sub(1));
                if clamped != self.index {
                    self.index = clamped;
                    self.phase = Phase::Transitioning;
                    self.slides.get(self.index)
                } else {
                    None
                }
            }
            Phase::Transitioning => {
                self.pending = Some(Intent::GoTo(target));
                None
            }
            Phase::Idle | Phase::Closed => None,
        }
    }

    /// Ends the running transition, returning to `Showing`, then replays
    /// the queued intent, if any. A replayed intent that commits another
    /// index change returns the new slide (and the caller starts the next
    /// fade), exactly as if the key had been pressed in `Showing`.
    pub fn finish_transition(&mut self) -> Option<&Slide> {
        if self.phase != Phase::Transitioning {
            return None;
        }
        self.phase = Phase::Showing;
        match self.pending.take() {
            Some(Intent::Next) => self.next(),
            Some(Intent::Previous) => self.previous(),
            Some(Intent::GoTo(target)) => self.go_to(target),
            None => None,
        }
    }

    /// Ends the presentation. Valid from `Showing` and `Transitioning`;
    /// a no-op otherwise. The caller clears the live document and the
    /// keyboard subscription disappears with `is_active()`.
    pub fn close(&mut self) {
        if self.is_active() {
            self.phase = Phase::Closed;
            self.pending = None;
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{SourceKind, NO_CONTENT_PLACEHOLDER};

    fn source(body: &str) -> crate::content::SlideSource {
        crate::content::SlideSource {
            title: "Test".into(),
            kind: SourceKind::FreeText,
            body: body.into(),
            image_ref: None,
            start_hint: None,
        }
    }

    fn showing(body: &str) -> Presenter {
        let mut presenter = Presenter::new();
        presenter.activate(&source(body));
        presenter
    }

    /// Completes whatever transition is running.
    fn settle(presenter: &mut Presenter) {
        while presenter.phase() == Phase::Transitioning {
            presenter.finish_transition();
        }
    }

    #[test]
    fn new_presenter_is_idle() {
        let presenter = Presenter::new();
        assert_eq!(presenter.phase(), Phase::Idle);
        assert!(!presenter.is_active());
        assert!(presenter.current_slide().is_none());
    }

    #[test]
    fn activation_enters_showing_at_index_zero() {
        let presenter = showing("A\n\nB");
        assert_eq!(presenter.phase(), Phase::Showing);
        assert_eq!(presenter.index(), 0);
        assert_eq!(presenter.current_slide(), Some(&Slide::Text("A".into())));
    }

    #[test]
    fn activation_honors_the_clamped_start_hint() {
        let mut raw = source("V1\n\nV2\n\nV3");
        raw.start_hint = Some(1);
        let mut presenter = Presenter::new();
        let first = presenter.activate(&raw).cloned();
        assert_eq!(first, Some(Slide::Text("V2".into())));
        assert_eq!(presenter.index(), 1);

        raw.start_hint = Some(99);
        let mut presenter = Presenter::new();
        presenter.activate(&raw);
        assert_eq!(presenter.index(), 2);
    }

    #[test]
    fn activation_while_active_is_rejected() {
        let mut presenter = showing("A\n\nB");
        assert!(presenter.activate(&source("X")).is_none());
        assert_eq!(presenter.current_slide(), Some(&Slide::Text("A".into())));
    }

    #[test]
    fn activation_is_accepted_again_after_close() {
        let mut presenter = showing("A");
        presenter.close();
        assert_eq!(presenter.phase(), Phase::Closed);

        let slide = presenter.activate(&source("B")).cloned();
        assert_eq!(slide, Some(Slide::Text("B".into())));
        assert_eq!(presenter.phase(), Phase::Showing);
    }

    #[test]
    fn next_advances_and_enters_transitioning() {
        let mut presenter = showing("A\n\nB");
        let slide = presenter.next().cloned();
        assert_eq!(slide, Some(Slide::Text("B".into())));
        assert_eq!(presenter.index(), 1);
        assert_eq!(presenter.phase(), Phase::Transitioning);
    }

    #[test]
    fn next_at_last_slide_is_a_no_op() {
        let mut presenter = showing("A\n\nB");
        presenter.next();
        settle(&mut presenter);
        assert_eq!(presenter.index(), 1);

        assert!(presenter.next().is_none());
        assert_eq!(presenter.index(), 1);
        assert_eq!(presenter.phase(), Phase::Showing);
    }

    #[test]
    fn previous_at_index_zero_is_a_no_op() {
        let mut presenter = showing("A\n\nB");
        assert!(presenter.previous().is_none());
        assert_eq!(presenter.index(), 0);
        assert_eq!(presenter.phase(), Phase::Showing);
    }

    #[test]
    fn go_to_clamps_into_bounds() {
        let mut presenter = showing("A\n\nB\n\nC");
        let slide = presenter.go_to(99).cloned();
        assert_eq!(slide, Some(Slide::Text("C".into())));
        assert_eq!(presenter.index(), 2);
    }

    #[test]
    fn go_to_current_index_commits_nothing() {
        let mut presenter = showing("A\n\nB");
        assert!(presenter.go_to(0).is_none());
        assert_eq!(presenter.phase(), Phase::Showing);
    }

    #[test]
    fn input_during_transition_keeps_only_the_last_intent() {
        let mut presenter = showing("A\n\nB\n\nC\n\nD");
        presenter.next();
        assert_eq!(presenter.phase(), Phase::Transitioning);

        // Key repeat lands twice more while the fade is running; only the
        // final request is honored.
        assert!(presenter.next().is_none());
        assert!(presenter.previous().is_none());

        let replayed = presenter.finish_transition().cloned();
        assert_eq!(replayed, Some(Slide::Text("A".into())));
        assert_eq!(presenter.index(), 0);
        assert_eq!(presenter.phase(), Phase::Transitioning);

        assert!(presenter.finish_transition().is_none());
        assert_eq!(presenter.phase(), Phase::Showing);
    }

    #[test]
    fn finish_transition_outside_transitioning_is_a_no_op() {
        let mut presenter = showing("A\n\nB");
        assert!(presenter.finish_transition().is_none());
        assert_eq!(presenter.phase(), Phase::Showing);
    }

    #[test]
    fn close_is_valid_mid_transition_and_drops_the_queue() {
        let mut presenter = showing("A\n\nB\n\nC");
        presenter.next();
        presenter.next(); // queued
        presenter.close();

        assert_eq!(presenter.phase(), Phase::Closed);
        assert!(presenter.current_slide().is_none());
        assert!(presenter.finish_transition().is_none());
    }

    #[test]
    fn close_when_not_active_is_a_no_op() {
        let mut presenter = Presenter::new();
        presenter.close();
        assert_eq!(presenter.phase(), Phase::Idle);
    }

    #[test]
    fn empty_source_presents_the_placeholder() {
        let presenter = showing("   ");
        assert_eq!(presenter.slide_count(), 1);
        assert_eq!(
            presenter.current_slide(),
            Some(&Slide::Text(NO_CONTENT_PLACEHOLDER.into()))
        );
    }

    #[test]
    fn full_walkthrough_matches_the_hymn_scenario() {
        // Stanza/chorus interleaved body, as the adapter produces it.
        let mut presenter = showing("Stanza A\n\nChorus C\n\nStanza B\n\nChorus C");
        assert_eq!(presenter.slide_count(), 4);

        for _ in 0..3 {
            assert!(presenter.next().is_some());
            settle(&mut presenter);
        }
        assert_eq!(presenter.index(), 3);

        // A fourth press stays clamped at the end.
        assert!(presenter.next().is_none());
        assert_eq!(presenter.index(), 3);

        presenter.close();
        assert_eq!(presenter.phase(), Phase::Closed);
    }
}
