// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`operator`] - library tabs and playlist curation
//! - [`surface`] - the full-screen presentation canvas (presenter side)
//! - [`mirror`] - the subscriber-only display
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - toast notification system for user feedback

pub mod design_tokens;
pub mod mirror;
pub mod notifications;
pub mod operator;
pub mod surface;
pub mod theming;
