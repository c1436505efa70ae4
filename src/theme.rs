//! Dark/light theme switching.
//!
//! The initial mode comes from the stored preference, falling back to the
//! system color-scheme signal when nothing is stored. Dark mode is marked by
//! `data-theme="dark"` on the root element; light mode removes the attribute.
//! Every mode change is written back to the store.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{MOON_ICON_HTML, SUN_ICON_HTML, THEME_ATTR};
use crate::patch::{Patch, Target};

/// Visual mode of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    /// Interpret a stored preference. Only `"dark"` selects dark mode.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Markup for the toggle control: a sun offers the way out of dark mode.
    #[must_use]
    pub fn icon_html(self) -> &'static str {
        match self {
            Self::Light => MOON_ICON_HTML,
            Self::Dark => SUN_ICON_HTML,
        }
    }
}

/// Durable storage for the single theme preference.
pub trait PreferenceStore {
    /// The stored preference, if any.
    fn load(&self) -> Option<String>;
    /// Persist a preference. Failures are the store's to log.
    fn save(&mut self, value: &str);
    /// Whether the system-level color scheme asks for dark mode.
    fn system_prefers_dark(&self) -> bool;
}

/// Session-only store, used when durable storage is unavailable.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub value: Option<String>,
    pub system_dark: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new(value: Option<&str>, system_dark: bool) -> Self {
        Self { value: value.map(str::to_owned), system_dark }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) {
        self.value = Some(value.to_owned());
    }

    fn system_prefers_dark(&self) -> bool {
        self.system_dark
    }
}

/// Pick the startup mode: stored preference first, then the system signal.
#[must_use]
pub fn resolve_initial(stored: Option<&str>, system_dark: bool) -> Mode {
    match stored {
        Some(value) => Mode::from_stored(value),
        None if system_dark => Mode::Dark,
        None => Mode::Light,
    }
}

pub struct ThemeSwitcher<S> {
    store: S,
    mode: Mode,
}

impl<S: PreferenceStore> ThemeSwitcher<S> {
    /// Resolve the initial mode from `store`. Nothing is applied until [`Self::boot`].
    pub fn new(store: S) -> Self {
        let stored = store.load();
        let mode = resolve_initial(stored.as_deref(), store.system_prefers_dark());
        Self { store, mode }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply and persist the initial mode.
    pub fn boot(&mut self) -> Vec<Patch> {
        self.apply(self.mode)
    }

    /// Invert the current mode.
    pub fn toggle(&mut self) -> Vec<Patch> {
        self.apply(self.mode.toggled())
    }

    /// Switch to `mode`, persist it, and return the DOM changes.
    pub fn apply(&mut self, mode: Mode) -> Vec<Patch> {
        self.mode = mode;
        self.store.save(mode.as_str());
        log::debug!("theme: {}", mode.as_str());

        let marker = match mode {
            Mode::Dark => Patch::set_attribute(Target::Root, THEME_ATTR, "dark"),
            Mode::Light => Patch::remove_attribute(Target::Root, THEME_ATTR),
        };
        vec![marker, Patch::set_html(Target::ThemeToggle, mode.icon_html())]
    }
}
