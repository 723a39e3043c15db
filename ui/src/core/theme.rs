//! Light/dark display theme and its persisted preference.

use tracing::warn;

use super::palette::{Rgba, GRAY_600};
use super::storage::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors applied to chart chrome (ticks, grid lines, legend text).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeColors {
    pub text: Rgba,
    pub grid: Rgba,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Class added to the page root; the light theme uses the base stylesheet.
    pub fn body_class(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark-mode",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }

    pub fn chrome(self) -> ChromeColors {
        match self {
            Theme::Light => ChromeColors {
                text: GRAY_600,
                grid: Rgba::rgba(0, 0, 0, 0.1),
            },
            Theme::Dark => ChromeColors {
                text: Rgba::rgb(0xE5, 0xE7, 0xEB),
                grid: Rgba::rgba(255, 255, 255, 0.1),
            },
        }
    }

    /// Reads the stored preference; anything other than `"true"` means light.
    pub fn load(store: &impl PreferenceStore, key: &str) -> Self {
        match store.get(key) {
            Ok(Some(value)) if value == "true" => Theme::Dark,
            Ok(_) => Theme::Light,
            Err(err) => {
                warn!(%err, key, "theme preference unreadable; using light theme");
                Theme::Light
            }
        }
    }

    pub fn save(self, store: &mut impl PreferenceStore, key: &str) {
        let value = if self.is_dark() { "true" } else { "false" };
        if let Err(err) = store.set(key, value) {
            warn!(%err, key, "failed to persist theme preference");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryPreferences;

    #[test]
    fn toggle_flips() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn missing_preference_is_light() {
        let store = MemoryPreferences::default();
        assert_eq!(Theme::load(&store, "darkMode"), Theme::Light);
    }

    #[test]
    fn preference_round_trips() {
        let mut store = MemoryPreferences::default();
        Theme::Dark.save(&mut store, "darkMode");
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("true"));
        assert_eq!(Theme::load(&store, "darkMode"), Theme::Dark);

        Theme::Light.save(&mut store, "darkMode");
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("false"));
        assert_eq!(Theme::load(&store, "darkMode"), Theme::Light);
    }

    #[test]
    fn chrome_colors_follow_theme() {
        assert_eq!(Theme::Light.chrome().text.to_string(), "#6c757d");
        assert_eq!(Theme::Dark.chrome().text.to_string(), "#e5e7eb");
        assert_eq!(
            Theme::Dark.chrome().grid.to_string(),
            "rgba(255, 255, 255, 0.1)"
        );
    }
}
