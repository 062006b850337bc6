// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Library tabs and playlist curation.
    Operator,
    /// Full-screen presentation driven by the keyboard.
    Presenter,
    /// Subscriber-only display (`--mirror` launch mode).
    Mirror,
}
