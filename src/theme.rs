//! Light/dark theme restore and toggle.
//!
//! The preference is a single key in a durable key-value store (the
//! browser's `localStorage`). The `dark-mode` class on `<body>` is the
//! source of truth for the current theme; the icon mirrors it.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;

use crate::consts::{DARK_MODE_CLASS, ICON_MOON, ICON_SUN};
use crate::sink::{ElementId, PresentationSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
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

    /// Parse a stored value. Only `"dark"` selects the dark theme.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        if value == Some("dark") { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon classes for the toggle button: a sun offers the way back to light.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => ICON_MOON,
            Self::Dark => ICON_SUN,
        }
    }
}

/// Durable string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for headless hosts and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

/// The elements a theme change touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSurface {
    pub body: ElementId,
    pub icon: Option<ElementId>,
}

/// Theme restore/toggle bound to one storage key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeController {
    key: String,
}

impl ThemeController {
    #[must_use]
    pub fn new(key: &str) -> Self {
        Self { key: key.to_owned() }
    }

    /// The theme currently shown on the page.
    #[must_use]
    pub fn current(&self, sink: &impl PresentationSink, surface: ThemeSurface) -> Theme {
        if sink.has_class(surface.body, DARK_MODE_CLASS) { Theme::Dark } else { Theme::Light }
    }

    /// Apply the stored preference at load. Without a dark preference the page
    /// is left as rendered.
    pub fn restore(
        &self,
        store: &impl KeyValueStore,
        sink: &mut impl PresentationSink,
        surface: ThemeSurface,
    ) -> Theme {
        let theme = Theme::from_stored(store.get(&self.key).as_deref());
        if theme == Theme::Dark {
            apply(sink, surface, theme);
        }
        theme
    }

    /// Flip the theme and persist the result.
    pub fn toggle(
        &self,
        store: &mut impl KeyValueStore,
        sink: &mut impl PresentationSink,
        surface: ThemeSurface,
    ) -> Theme {
        let next = self.current(sink, surface).toggled();
        apply(sink, surface, next);
        store.set(&self.key, next.as_str());
        log::debug!("theme: switched to {}", next.as_str());
        next
    }
}

/// Put `theme` on the page without touching storage.
pub fn apply(sink: &mut impl PresentationSink, surface: ThemeSurface, theme: Theme) {
    match theme {
        Theme::Dark => sink.add_class(surface.body, DARK_MODE_CLASS),
        Theme::Light => sink.remove_class(surface.body, DARK_MODE_CLASS),
    }
    if let Some(icon) = surface.icon {
        sink.set_class_name(icon, theme.icon_class());
    }
}
