// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme mode management.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark. `System` resolves to
    /// dark: presentation surfaces are black regardless, and a dark chrome
    /// around them is the safe default in a dimmed sanctuary.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark | ThemeMode::System => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        assert!(ThemeMode::System.is_dark());
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        let toml = toml::to_string(&std::collections::BTreeMap::from([(
            "mode",
            ThemeMode::Light,
        )]))
        .expect("serialize");
        assert!(toml.contains("\"light\""));
    }
}
