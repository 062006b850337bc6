// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Errors and warnings during a service must never block the operator, so
//! everything user-facing is reported through short-lived toasts:
//! publish failures, malformed content, config problems. Errors stay up
//! until dismissed; everything else expires on its own.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
