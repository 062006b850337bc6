// SPDX-License-Identifier: MPL-2.0
//! Update handlers for the application.
//!
//! Each handler borrows the root state through an `UpdateContext` so the
//! update logic stays testable without constructing a window. Navigation is
//! committed locally first; the live write rides along as a detached task
//! and its failure never rolls anything back.

use super::message::Message;
use super::persisted_state::AppState;
use super::screen::Screen;
use crate::config::Config;
use crate::content::{adapter, Slide};
use crate::library::{Bible, Hymnal, SlideCatalog};
use crate::live::{Publisher, SessionStore};
use crate::playlist::Playlist;
use crate::presenter::Presenter;
use crate::ui::notifications::{self, Notification};
use crate::ui::operator;
use iced::{keyboard, window, Task};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Mutable view of the application state shared by the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub operator: &'a mut operator::State,
    pub playlist: &'a mut Playlist,
    pub presenter: &'a mut Presenter,
    pub hymnal: &'a Hymnal,
    pub bible: &'a Bible,
    pub catalog: &'a SlideCatalog,
    pub config: &'a Config,
    pub live_publisher: &'a mut Option<Publisher>,
    pub store: &'a Option<SessionStore>,
    pub data_dir: &'a Option<PathBuf>,
    pub transition_started_at: &'a mut Option<Instant>,
    pub fullscreen: &'a mut bool,
    pub app_state: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles all operator-screen messages.
pub fn handle_operator_message(
    ctx: &mut UpdateContext<'_>,
    message: operator::Message,
) -> Task<Message> {
    match message {
        operator::Message::TabSelected(tab) => {
            ctx.operator.active_tab = tab;
            Task::none()
        }
        operator::Message::HymnQueryChanged(query) => {
            ctx.operator.hymn_query = query;
            Task::none()
        }
        operator::Message::AddHymn(number) => {
            match ctx.hymnal.get(number) {
                Some(hymn) => {
                    let mode = if ctx.config.presentation.standalone_title_slide.unwrap_or(false) {
                        adapter::TitleMode::Standalone
                    } else {
                        adapter::TitleMode::Embedded
                    };
                    ctx.playlist.add(adapter::hymn(hymn, mode));
                }
                None => {
                    ctx.notifications
                        .push(Notification::error(format!("Hymn {} not found", number)));
                }
            }
            Task::none()
        }
        operator::Message::BookSelected(name) => {
            ctx.operator.selected_book = Some(name);
            Task::none()
        }
        operator::Message::ChapterInputChanged(value) => {
            ctx.operator.chapter_input = value;
            Task::none()
        }
        operator::Message::VerseInputChanged(value) => {
            ctx.operator.verse_input = value;
            Task::none()
        }
        operator::Message::AddVerse => {
            add_passage(ctx, SelectionKind::Verse);
            Task::none()
        }
        operator::Message::AddChapter => {
            add_passage(ctx, SelectionKind::Chapter);
            Task::none()
        }
        operator::Message::FreeTextAction(action) => {
            ctx.operator.free_text.perform(action);
            Task::none()
        }
        operator::Message::AddFreeText => {
            let text = ctx.operator.free_text.text();
            if text.trim().is_empty() {
                ctx.notifications.push(Notification::warning(
                    "Type some text for the custom slide first",
                ));
            } else {
                ctx.playlist
                    .add(adapter::free_text(adapter::CUSTOM_SLIDE_TITLE, &text));
                ctx.operator.free_text = iced::widget::text_editor::Content::new();
            }
            Task::none()
        }
        operator::Message::AddCatalogSlide(index) => {
            match ctx.catalog.entries().get(index) {
                Some(entry) => match adapter::catalog_slide(entry) {
                    Ok(source) => {
                        ctx.playlist.add(source);
                    }
                    Err(err) => {
                        ctx.notifications.push(Notification::error(err.to_string()));
                    }
                },
                None => {
                    // Catalog indices come from the rendered list; a stale
                    // index after a reload is not worth an error dialog.
                }
            }
            Task::none()
        }
        operator::Message::PickImageSlide => {
            handle_image_pick_dialog(ctx.app_state.last_image_directory.clone())
        }
        operator::Message::RemoveItem(id) => {
            ctx.playlist.remove(id);
            Task::none()
        }
        operator::Message::PresentItem(id) => match ctx.playlist.activate(id) {
            Ok(source) => {
                let source = source.clone();
                match ctx.presenter.activate(&source) {
                    Some(slide) => {
                        let slide = slide.clone();
                        *ctx.screen = Screen::Presenter;
                        *ctx.transition_started_at = None;
                        publish(ctx, Some(slide))
                    }
                    // Unreachable from the operator screen; presenting is
                    // exclusive with it.
                    None => Task::none(),
                }
            }
            Err(err) => {
                ctx.notifications.push(Notification::error(err.to_string()));
                Task::none()
            }
        },
        operator::Message::ToggleLive => toggle_live(ctx),
    }
}

/// Routes native events per screen. On the presenter screen this is the
/// whole keyboard contract: ArrowRight/Space advance, ArrowLeft goes back,
/// Escape closes; Home/End jump to the first/last slide. F11 toggles
/// fullscreen on both presentation screens.
pub fn handle_raw_event(
    ctx: &mut UpdateContext<'_>,
    window_id: window::Id,
    event: iced::event::Event,
) -> Task<Message> {
    let iced::event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
        return Task::none();
    };

    match (*ctx.screen, key) {
        (Screen::Presenter, keyboard::Key::Named(keyboard::key::Named::ArrowRight))
        | (Screen::Presenter, keyboard::Key::Named(keyboard::key::Named::Space)) => {
            let committed = ctx.presenter.next().cloned();
            commit_if_changed(ctx, committed)
        }
        (Screen::Presenter, keyboard::Key::Named(keyboard::key::Named::ArrowLeft)) => {
            let committed = ctx.presenter.previous().cloned();
            commit_if_changed(ctx, committed)
        }
        (Screen::Presenter, keyboard::Key::Named(keyboard::key::Named::Home)) => {
            let committed = ctx.presenter.go_to(0).cloned();
            commit_if_changed(ctx, committed)
        }
        (Screen::Presenter, keyboard::Key::Named(keyboard::key::Named::End)) => {
            let last = ctx.presenter.slide_count().saturating_sub(1);
            let committed = ctx.presenter.go_to(last).cloned();
            commit_if_changed(ctx, committed)
        }
        (Screen::Presenter, keyboard::Key::Named(keyboard::key::Named::Escape)) => {
            close_presentation(ctx)
        }
        (Screen::Presenter, keyboard::Key::Named(keyboard::key::Named::F11))
        | (Screen::Mirror, keyboard::Key::Named(keyboard::key::Named::F11)) => {
            toggle_fullscreen(ctx, window_id)
        }
        _ => Task::none(),
    }
}

/// The fade ran its course: return to `Showing` and, if a key landed during
/// the animation, replay that intent as a fresh committed change.
pub fn handle_transition_finished(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.transition_started_at = None;
    let replayed = ctx.presenter.finish_transition().cloned();
    commit_if_changed(ctx, replayed)
}

/// Result of the image slide file dialog.
pub fn handle_image_pick_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        return Task::none(); // dialog cancelled
    };

    ctx.app_state.set_last_image_directory_from_file(&path);
    if let Some(warning) = ctx.app_state.save_to(ctx.data_dir.clone()) {
        ctx.notifications.push(Notification::warning(warning));
    }

    let title = path
        .file_stem()
        .and_then(std::ffi::OsStr::to_str)
        .unwrap_or("Image Slide")
        .to_string();
    ctx.playlist
        .add(adapter::image(&title, &path.to_string_lossy(), None));
    Task::none()
}

/// Opens the image file dialog, starting in the last-used directory.
fn handle_image_pick_dialog(last_dir: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"]);
            if let Some(dir) = last_dir {
                dialog = dialog.set_directory(dir);
            }
            dialog
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::ImagePickDialogResult,
    )
}

/// Starts or ends the live session. Going live pushes the current state
/// (slide or cleared) so a mirror that watched an earlier session snaps to
/// this one; ending it clears the document so mirrors return to the
/// awaiting placeholder.
fn toggle_live(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.live_publisher.is_some() {
        let task = publish(ctx, None);
        *ctx.live_publisher = None;
        ctx.notifications.push(Notification::info("Live session ended"));
        task
    } else {
        match ctx.store {
            Some(store) => {
                *ctx.live_publisher = Some(Publisher::resume(store.clone()));
                ctx.notifications
                    .push(Notification::success("Live session started"));
                let current = ctx.presenter.current_slide().cloned();
                publish(ctx, current)
            }
            None => {
                ctx.notifications.push(Notification::error(
                    "No data directory available for the live session",
                ));
                Task::none()
            }
        }
    }
}

/// Ends the presentation: back to the operator screen, keyboard unbound
/// (the subscription derives from the screen), live document cleared.
fn close_presentation(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.presenter.close();
    *ctx.screen = Screen::Operator;
    *ctx.transition_started_at = None;
    publish(ctx, None)
}

/// A committed index change: start the fade, schedule its end, and mirror
/// the new slide. `None` (clamped navigation, queued intent) does nothing.
fn commit_if_changed(ctx: &mut UpdateContext<'_>, committed: Option<Slide>) -> Task<Message> {
    let Some(slide) = committed else {
        return Task::none();
    };

    *ctx.transition_started_at = Some(Instant::now());
    let transition = Duration::from_millis(ctx.config.transition_ms());
    let finish = Task::perform(
        async move { tokio::time::sleep(transition).await },
        |_| Message::TransitionFinished,
    );

    Task::batch([publish(ctx, Some(slide)), finish])
}

/// Fire-and-forget write of the shared document. Local state is
/// authoritative; a failure surfaces as a warning and the next transition's
/// write supersedes it.
fn publish(ctx: &mut UpdateContext<'_>, current_slide: Option<Slide>) -> Task<Message> {
    let Some(publisher) = ctx.live_publisher.as_mut() else {
        return Task::none();
    };

    let document = publisher.prepare(current_slide);
    let store = publisher.store().clone();
    Task::perform(store.write_async(document), Message::PublishCompleted)
}

fn toggle_fullscreen(ctx: &mut UpdateContext<'_>, window_id: window::Id) -> Task<Message> {
    let mode = if *ctx.fullscreen {
        window::Mode::Windowed
    } else {
        window::Mode::Fullscreen
    };
    *ctx.fullscreen = !*ctx.fullscreen;
    window::set_mode(window_id, mode)
}

enum SelectionKind {
    Verse,
    Chapter,
}

/// Parses the Bible tab's inputs and adds the selection to the playlist.
/// Range errors from the adapter fail closed and surface as notifications;
/// the playlist is unaffected.
fn add_passage(ctx: &mut UpdateContext<'_>, kind: SelectionKind) {
    let Some(book_name) = ctx.operator.selected_book.as_deref() else {
        ctx.notifications
            .push(Notification::warning("Choose a book first"));
        return;
    };
    let Some(book) = ctx.bible.books().iter().find(|book| book.name == book_name) else {
        ctx.notifications
            .push(Notification::error(format!("Unknown book: {}", book_name)));
        return;
    };
    let Ok(chapter) = ctx.operator.chapter_input.trim().parse::<usize>() else {
        ctx.notifications
            .push(Notification::warning("Chapter must be a number"));
        return;
    };
    let Ok(verse) = ctx.operator.verse_input.trim().parse::<usize>() else {
        ctx.notifications
            .push(Notification::warning("Verse must be a number"));
        return;
    };

    let selection = match kind {
        SelectionKind::Verse => adapter::PassageSelection::Verse(verse),
        SelectionKind::Chapter => adapter::PassageSelection::Chapter { verse },
    };

    match adapter::passage(book, chapter, selection) {
        Ok(source) => {
            ctx.playlist.add(source);
        }
        Err(err) => {
            ctx.notifications.push(Notification::error(err.to_string()));
        }
    }
}
