// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::live::subscriber;
use crate::ui::notifications;
use crate::ui::operator;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Operator(operator::Message),
    Notification(notifications::NotificationMessage),
    /// Native events routed per screen (keyboard contract, F11).
    RawEvent {
        window: iced::window::Id,
        event: iced::event::Event,
    },
    /// The fade animation between two slides ran its course.
    TransitionFinished,
    /// Periodic tick driving the fade opacity and notification auto-dismiss.
    Tick(Instant),
    /// Outcome of a fire-and-forget live document write.
    PublishCompleted(Result<(), Error>),
    /// An observation from the mirror's document subscription.
    Live(subscriber::Event),
    /// Result from the image slide file dialog.
    ImagePickDialogResult(Option<PathBuf>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Start as the subscriber-only mirror display.
    pub mirror: bool,
    /// Optional override for the shared session document path.
    pub session_file: Option<String>,
    /// Optional data directory override (state file, default session path).
    /// Takes precedence over the `ICED_LECTERN_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (settings.toml).
    pub config_dir: Option<String>,
}
