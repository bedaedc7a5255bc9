//! Light/dark theme preference.
//!
//! The preference lives in `localStorage` under `"theme"` and is mirrored
//! onto the `data-theme` attribute of `<html>`. Only `"light"` and
//! `"dark"` are legal; anything else reads as absent. Browser access goes
//! through [`ThemeHost`] so the flip logic runs in tests.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored or attribute value; unknown strings yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the active theme is shown and remembered.
pub trait ThemeHost {
    /// Current value of the document's theme attribute.
    fn attribute(&self) -> Option<String>;
    fn set_attribute(&mut self, theme: Theme);
    /// Persisted preference, if any.
    fn stored(&self) -> Option<String>;
    fn store(&mut self, theme: Theme);
}

/// Apply the persisted preference (default light) to the document.
pub fn apply_saved(host: &mut impl ThemeHost) -> Theme {
    let theme = host.stored().as_deref().and_then(Theme::parse).unwrap_or_default();
    host.set_attribute(theme);
    log::debug!("applied saved theme: {theme}");
    theme
}

/// Flip the document theme and persist the result.
///
/// `light` becomes `dark` and `dark` becomes `light`; an unknown or
/// missing attribute becomes `light`.
pub fn toggle(host: &mut impl ThemeHost) -> Theme {
    let current = host.attribute().as_deref().and_then(Theme::parse);
    let next = current.map_or(Theme::Light, Theme::toggled);
    host.set_attribute(next);
    host.store(next);
    log::debug!("theme toggled to {next}");
    next
}
