//! Device Preferences
//!
//! Per-browser settings kept in localStorage. They never travel with the
//! remote document.

use gloo_storage::{LocalStorage, Storage};

const AUTOSAVE_KEY: &str = "autoSaveEnabled";
const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Stored as the bare word, not as JSON
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Tooltip of the theme toggle: names the theme it switches to
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }
}

/// Autosave is off unless the user turned it on on this device
pub fn load_autosave() -> bool {
    LocalStorage::get(AUTOSAVE_KEY).unwrap_or(false)
}

pub fn store_autosave(enabled: bool) {
    if let Err(e) = LocalStorage::set(AUTOSAVE_KEY, enabled) {
        log::warn!("could not persist autosave preference: {}", e);
    }
}

/// Dark unless this device saved something else
pub fn load_theme() -> Theme {
    match LocalStorage::raw().get_item(THEME_KEY) {
        Ok(stored) => stored.as_deref().and_then(Theme::from_stored).unwrap_or_default(),
        Err(e) => {
            log::warn!("could not read theme: {:?}", e);
            Theme::default()
        }
    }
}

pub fn store_theme(theme: Theme) {
    if let Err(e) = LocalStorage::raw().set_item(THEME_KEY, theme.as_str()) {
        log::warn!("could not persist theme: {:?}", e);
    }
}

/// Reflect the theme on the root element as the `dark` class
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if let Err(e) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
            log::warn!("could not apply theme: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggle_label(), "Dark Mode");
    }

    #[test]
    fn test_theme_defaults_to_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert!(Theme::default().is_dark());
    }

    #[test]
    fn test_theme_reads_bare_words() {
        assert_eq!(Theme::from_stored("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_stored("light"), Some(Theme::Light));
        assert_eq!(Theme::from_stored("\"dark\""), None);
        assert_eq!(Theme::from_stored(""), None);
        assert_eq!(Theme::from_stored(Theme::Light.as_str()), Some(Theme::Light));
    }
}
