// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the operator, presenter
//! and mirror screens.
//!
//! The `App` struct wires the domains together (playlist, navigation
//! controller, live channel, preferences) and translates messages into side
//! effects like config loading, document publishing or the image file
//! dialog. Policy decisions (window sizing, publish-on-close, which screen
//! owns the keyboard) stay close to the main update loop so user-facing
//! behavior is easy to audit.

mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config, TRANSITION_TICK_MS};
use crate::content::Slide;
use crate::library::{Bible, Hymnal, SlideCatalog};
use crate::live::{subscriber, Publisher, SessionStore};
use crate::playlist::Playlist;
use crate::presenter::Presenter;
use crate::ui::notifications::{self, Notification};
use crate::ui::operator;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 550;

/// Root Iced application state bridging the screens, the live channel and
/// persisted preferences.
pub struct App {
    screen: Screen,
    config: Config,
    /// Data directory override from the CLI, threaded through to state
    /// persistence so test runs and portable deployments stay contained.
    data_dir: Option<PathBuf>,
    operator: operator::State,
    playlist: Playlist,
    presenter: Presenter,
    hymnal: Hymnal,
    bible: Bible,
    catalog: SlideCatalog,
    /// `Some` while a live session is active; holds the revision counter.
    live_publisher: Option<Publisher>,
    /// Shared document location, resolved once at boot. `None` only when no
    /// data directory exists and no override was given.
    store: Option<SessionStore>,
    /// Last slide observed by the mirror's subscription.
    mirror_slide: Option<Slide>,
    /// Set while the fade animation runs; drives the opacity in the view.
    transition_started_at: Option<Instant>,
    fullscreen: bool,
    theme_mode: ThemeMode,
    /// Persisted application state (last image directory).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("phase", &self.presenter.phase())
            .field("live", &self.live_publisher.is_some())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::Operator,
            config: Config::default(),
            data_dir: None,
            operator: operator::State::new(),
            playlist: Playlist::new(),
            presenter: Presenter::new(),
            hymnal: Hymnal::default(),
            bible: Bible::default(),
            catalog: SlideCatalog::default(),
            live_publisher: None,
            store: None,
            mirror_slide: None,
            transition_started_at: None,
            fullscreen: false,
            theme_mode: ThemeMode::default(),
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from CLI flags, config and the bundled
    /// corpora. Corpus or state problems degrade to warnings; the operator
    /// may be minutes away from a service and an empty library beats a
    /// refusal to start.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let data_dir = flags.data_dir.map(PathBuf::from);

        let (config, config_warning) = config::load(config_dir.as_deref());

        let mut app = App {
            data_dir: data_dir.clone(),
            theme_mode: config.general.theme_mode,
            screen: if flags.mirror {
                Screen::Mirror
            } else {
                Screen::Operator
            },
            ..Self::default()
        };

        if let Some(warning) = config_warning {
            app.notifications.push(Notification::warning(warning));
        }

        // Shared document location: CLI flag > config > shared default.
        let session_override = flags
            .session_file
            .map(PathBuf::from)
            .or_else(|| config.live.session_file.clone());
        app.store = match session_override {
            Some(path) => Some(SessionStore::new(path)),
            None => SessionStore::at_default_location(data_dir.clone()),
        };
        app.config = config;

        let (app_state, state_warning) = persisted_state::AppState::load_from(data_dir);
        app.app_state = app_state;
        if let Some(warning) = state_warning {
            app.notifications.push(Notification::warning(warning));
        }

        app.hymnal = match Hymnal::load_embedded() {
            Ok(hymnal) => hymnal,
            Err(err) => {
                app.notifications.push(Notification::warning(err.to_string()));
                Hymnal::default()
            }
        };
        app.bible = match Bible::load_embedded() {
            Ok(bible) => bible,
            Err(err) => {
                app.notifications.push(Notification::warning(err.to_string()));
                Bible::default()
            }
        };
        app.catalog = match SlideCatalog::load_embedded() {
            Ok(catalog) => catalog,
            Err(err) => {
                app.notifications.push(Notification::warning(err.to_string()));
                SlideCatalog::default()
            }
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.screen {
            Screen::Mirror => String::from("IcedLectern - Mirror"),
            Screen::Presenter if self.presenter.is_active() => {
                format!("{} - IcedLectern", self.presenter.title())
            }
            _ => String::from("IcedLectern"),
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub = subscription::create_tick_subscription(
            self.transition_started_at.is_some(),
            self.notifications.has_notifications(),
            Duration::from_millis(TRANSITION_TICK_MS),
        );
        let live_sub = subscription::create_live_subscription(
            self.screen,
            self.store.as_ref(),
            Duration::from_millis(self.config.poll_ms()),
        );

        Subscription::batch([event_sub, tick_sub, live_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            operator: &mut self.operator,
            playlist: &mut self.playlist,
            presenter: &mut self.presenter,
            hymnal: &self.hymnal,
            bible: &self.bible,
            catalog: &self.catalog,
            config: &self.config,
            live_publisher: &mut self.live_publisher,
            store: &self.store,
            data_dir: &self.data_dir,
            transition_started_at: &mut self.transition_started_at,
            fullscreen: &mut self.fullscreen,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Operator(operator_message) => {
                update::handle_operator_message(&mut ctx, operator_message)
            }
            Message::RawEvent { window, event } => update::handle_raw_event(&mut ctx, window, event),
            Message::TransitionFinished => update::handle_transition_finished(&mut ctx),
            Message::ImagePickDialogResult(path) => update::handle_image_pick_result(&mut ctx, path),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                // The tick only forces a re-render for the fade; the
                // notification manager uses it for auto-dismiss.
                self.notifications.tick();
                Task::none()
            }
            Message::PublishCompleted(result) => {
                if let Err(err) = result {
                    // Local navigation is authoritative; the mirror catches
                    // up on the next successful write.
                    self.notifications
                        .push(Notification::warning(format!("Live update failed: {}", err)));
                }
                Task::none()
            }
            Message::Live(subscriber::Event::Updated(document)) => {
                self.mirror_slide = document.current_slide;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            operator: &self.operator,
            hymnal: &self.hymnal,
            bible: &self.bible,
            catalog: &self.catalog,
            playlist: &self.playlist,
            presenter: &self.presenter,
            live: self.live_publisher.is_some(),
            mirror_slide: self.mirror_slide.as_ref(),
            transition_started_at: self.transition_started_at,
            transition_duration: Duration::from_millis(self.config.transition_ms()),
            notifications: &self.notifications,
        })
    }
}
