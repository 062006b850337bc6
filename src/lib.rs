// SPDX-License-Identifier: MPL-2.0
//! `iced_lectern` is a church-service presentation tool built with the Iced
//! GUI framework.
//!
//! Operators assemble a playlist of hymns, Bible passages, free-text and
//! image slides, drive a full-screen presentation with the keyboard, and
//! mirror the live slide to a second process through a shared session
//! document.

#![doc(html_root_url = "https://docs.rs/iced_lectern/0.2.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod library;
pub mod live;
pub mod playlist;
pub mod presenter;
pub mod ui;
