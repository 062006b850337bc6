// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current
//! screen based on application state, with the toast overlay stacked on
//! top.

use super::{Message, Screen};
use crate::content::Slide;
use crate::playlist::Playlist;
use crate::presenter::Presenter;
use crate::library::{Bible, Hymnal, SlideCatalog};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::{mirror, operator, surface};
use iced::widget::Stack;
use iced::{Element, Length};
use std::time::{Duration, Instant};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub operator: &'a operator::State,
    pub hymnal: &'a Hymnal,
    pub bible: &'a Bible,
    pub catalog: &'a SlideCatalog,
    pub playlist: &'a Playlist,
    pub presenter: &'a Presenter,
    pub live: bool,
    pub mirror_slide: Option<&'a Slide>,
    pub transition_started_at: Option<Instant>,
    pub transition_duration: Duration,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Operator => view_operator(&ctx),
        Screen::Presenter => view_presenter(&ctx),
        Screen::Mirror => view_mirror(&ctx),
    };

    let overlay = Toast::view_overlay(ctx.notifications).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(current_view)
        .push(overlay)
        .into()
}

fn view_operator<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    operator::view(operator::ViewContext {
        state: ctx.operator,
        hymnal: ctx.hymnal,
        bible: ctx.bible,
        catalog: ctx.catalog,
        playlist: ctx.playlist,
        live: ctx.live,
    })
    .map(Message::Operator)
}

fn view_presenter<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let Some(slide) = ctx.presenter.current_slide() else {
        // Defensive: the app switches back to the operator screen on close.
        return surface::awaiting(mirror::AWAITING_HEADING);
    };

    surface::view(surface::ViewContext {
        slide,
        title: ctx.presenter.title(),
        position: Some((ctx.presenter.index() + 1, ctx.presenter.slide_count())),
        opacity: fade_opacity(ctx.transition_started_at, ctx.transition_duration),
    })
}

fn view_mirror<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    mirror::view(mirror::ViewContext {
        current_slide: ctx.mirror_slide,
    })
}

/// Fade-in progress of the running transition; fully opaque when idle.
fn fade_opacity(started_at: Option<Instant>, duration: Duration) -> f32 {
    match started_at {
        Some(started_at) if !duration.is_zero() => {
            (started_at.elapsed().as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
        }
        _ => 1.0,
    }
}
