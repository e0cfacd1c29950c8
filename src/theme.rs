//! Light/dark theme preference.
//!
//! The stored preference wins, then the system color-scheme signal, then
//! dark. Applying a theme sets `data-theme` on the document element so every
//! themed rule re-resolves through CSS custom properties.

use web_sys::window;

const STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn from_str(value: &str) -> Option<Theme> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Page background color, matching the `--bg-color` values in index.html.
    pub fn background_rgb(self) -> (u8, u8, u8) {
        match self {
            Theme::Dark => (10, 15, 26),
            Theme::Light => (248, 250, 252),
        }
    }

    /// Body text color, matching the `--text-color` values in index.html.
    pub fn text_rgb(self) -> (u8, u8, u8) {
        match self {
            Theme::Dark => (229, 231, 235),
            Theme::Light => (30, 41, 59),
        }
    }

    /// Stored preference if present, else the system signal, else dark.
    pub fn load() -> Theme {
        Self::stored()
            .or_else(Self::system)
            .unwrap_or(Theme::Dark)
    }

    fn stored() -> Option<Theme> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok())
            .flatten()
            .and_then(|value| Theme::from_str(&value))
    }

    fn system() -> Option<Theme> {
        let media = window()?
            .match_media("(prefers-color-scheme: light)")
            .ok()
            .flatten()?;
        Some(if media.matches() {
            Theme::Light
        } else {
            Theme::Dark
        })
    }

    pub fn store(self) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
            let _ = storage.set_item(STORAGE_KEY, self.as_str());
        }
    }

    pub fn apply(self) {
        if let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("data-theme", self.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_is_identity() {
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn string_round_trip() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn unknown_stored_value_is_rejected() {
        assert_eq!(Theme::from_str("solarized"), None);
        assert_eq!(Theme::from_str(""), None);
    }
}
