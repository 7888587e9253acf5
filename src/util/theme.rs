//! Light/dark theme preference and toggle state.
//!
//! The preference lives under a single `localStorage` key and is mirrored
//! onto the root element's theme attribute. Storage is best-effort: a
//! failing store is logged and the attribute is still updated.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use crate::error::EnhanceError;

/// The two supported themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Parse a stored or rendered theme value. Only exact literals match.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Dark } else { Self::Light }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key-value persistence for the theme preference.
pub trait ThemeStore {
    fn load(&self) -> Result<Option<String>, EnhanceError>;
    fn save(&mut self, value: &str) -> Result<(), EnhanceError>;
}

/// In-memory store for tests and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryThemeStore {
    value: Option<String>,
    unavailable: bool,
}

impl MemoryThemeStore {
    pub fn with_value(value: &str) -> Self {
        Self { value: Some(value.to_owned()), unavailable: false }
    }

    /// A store whose every call fails, like `localStorage` in a locked-down
    /// browser profile.
    pub fn unavailable() -> Self {
        Self { value: None, unavailable: true }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<String>, EnhanceError> {
        if self.unavailable {
            return Err(EnhanceError::Storage("memory store unavailable".into()));
        }
        Ok(self.value.clone())
    }

    fn save(&mut self, value: &str) -> Result<(), EnhanceError> {
        if self.unavailable {
            return Err(EnhanceError::Storage("memory store unavailable".into()));
        }
        self.value = Some(value.to_owned());
        Ok(())
    }
}

/// `window.localStorage`-backed store.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct LocalThemeStore {
    key: String,
}

#[cfg(feature = "hydrate")]
impl LocalThemeStore {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_owned() }
    }

    fn storage() -> Result<web_sys::Storage, EnhanceError> {
        let window = web_sys::window().ok_or(EnhanceError::NoWindow)?;
        window
            .local_storage()
            .map_err(|e| EnhanceError::storage(&e))?
            .ok_or_else(|| EnhanceError::Storage("localStorage is disabled".into()))
    }
}

#[cfg(feature = "hydrate")]
impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Result<Option<String>, EnhanceError> {
        Self::storage()?.get_item(&self.key).map_err(|e| EnhanceError::storage(&e))
    }

    fn save(&mut self, value: &str) -> Result<(), EnhanceError> {
        Self::storage()?.set_item(&self.key, value).map_err(|e| EnhanceError::storage(&e))
    }
}

/// What to do with the page at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitialTheme {
    /// Theme to write onto the root element, if any.
    pub apply: Option<Theme>,
    /// Checked state for the toggle control.
    pub checked: bool,
}

/// Theme toggle state over a preference store.
#[derive(Debug)]
pub struct ThemeToggle<S> {
    store: S,
}

impl<S: ThemeStore> ThemeToggle<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored preference. Unknown values and storage failures read as none.
    pub fn stored(&self) -> Option<Theme> {
        match self.store.load() {
            Ok(Some(raw)) => {
                let theme = Theme::parse(&raw);
                if theme.is_none() {
                    log::debug!("ignoring stored theme value {raw:?}");
                }
                theme
            }
            Ok(None) => None,
            Err(err) => {
                log::warn!("theme preference unreadable: {err}");
                None
            }
        }
    }

    /// Resolve startup state.
    ///
    /// `rendered` is the root attribute as served; `system_dark` is the
    /// `prefers-color-scheme` result, passed only when following the system.
    pub fn initial(&self, rendered: Option<&str>, system_dark: Option<bool>) -> InitialTheme {
        if let Some(theme) = self.stored() {
            return InitialTheme { apply: Some(theme), checked: theme.is_dark() };
        }
        if let Some(rendered) = rendered.filter(|r| !r.is_empty()) {
            return InitialTheme { apply: None, checked: rendered == Theme::Dark.as_str() };
        }
        match system_dark {
            Some(dark) => {
                let theme = Theme::from_checked(dark);
                InitialTheme { apply: Some(theme), checked: dark }
            }
            None => InitialTheme { apply: None, checked: false },
        }
    }

    /// Handle a change of the toggle control and persist the result.
    pub fn toggle(&mut self, checked: bool) -> Theme {
        let theme = Theme::from_checked(checked);
        if let Err(err) = self.store.save(theme.as_str()) {
            log::warn!("theme preference not saved: {err}");
        }
        theme
    }
}
