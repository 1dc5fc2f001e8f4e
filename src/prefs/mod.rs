//! Persisted presentation preferences.
//!
//! # Responsibilities
//! - Restore and toggle the theme and contrast preferences
//! - Track the one-shot welcome-modal flag for the session
//!
//! # Design Decisions
//! - Preferences are stored as plain strings ("light"/"dark", "on"/"off"):
//!   the same values the page markup consumes
//! - Missing or unrecognized stored values fall back to the defaults
//!   (light theme, contrast off) instead of erroring
//! - Store failures are environment failures: logged, defaults applied

use crate::config::schema::StorageConfig;
use crate::page::storage::KeyValueStore;
use std::sync::Arc;

/// Color theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// High-contrast preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Contrast {
    #[default]
    Off,
    On,
}

impl Contrast {
    pub fn as_str(self) -> &'static str {
        match self {
            Contrast::Off => "off",
            Contrast::On => "on",
        }
    }

    fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("on") => Contrast::On,
            _ => Contrast::Off,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Contrast::Off => Contrast::On,
            Contrast::On => Contrast::Off,
        }
    }
}

/// Reads and writes the preference keys on behalf of the page chrome.
pub struct Preferences {
    local: Arc<dyn KeyValueStore>,
    session: Arc<dyn KeyValueStore>,
    theme_key: String,
    contrast_key: String,
    modal_seen_key: String,
}

impl Preferences {
    pub fn new(
        local: Arc<dyn KeyValueStore>,
        session: Arc<dyn KeyValueStore>,
        storage: &StorageConfig,
    ) -> Self {
        Self {
            local,
            session,
            theme_key: storage.theme_key.clone(),
            contrast_key: storage.contrast_key.clone(),
            modal_seen_key: storage.modal_seen_key.clone(),
        }
    }

    fn read(&self, store: &dyn KeyValueStore, key: &str) -> Option<String> {
        match store.get(key) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(key = %key, error = %error, "Preference read failed");
                None
            }
        }
    }

    fn write(&self, store: &dyn KeyValueStore, key: &str, value: &str) {
        if let Err(error) = store.set(key, value) {
            tracing::warn!(key = %key, error = %error, "Preference write failed");
        }
    }

    /// The saved theme, defaulting to light.
    pub fn theme(&self) -> Theme {
        Theme::from_stored(self.read(self.local.as_ref(), &self.theme_key).as_deref())
    }

    /// Flip and persist the theme; returns the new value.
    pub fn toggle_theme(&self) -> Theme {
        let next = self.theme().toggled();
        self.write(self.local.as_ref(), &self.theme_key, next.as_str());
        next
    }

    /// The saved contrast preference, defaulting to off.
    pub fn contrast(&self) -> Contrast {
        Contrast::from_stored(self.read(self.local.as_ref(), &self.contrast_key).as_deref())
    }

    /// Flip and persist the contrast preference; returns the new value.
    pub fn toggle_contrast(&self) -> Contrast {
        let next = self.contrast().toggled();
        self.write(self.local.as_ref(), &self.contrast_key, next.as_str());
        next
    }

    /// True exactly once per session: the first call marks the welcome
    /// modal as seen.
    pub fn modal_should_open(&self) -> bool {
        if self
            .read(self.session.as_ref(), &self.modal_seen_key)
            .is_some()
        {
            return false;
        }
        self.write(self.session.as_ref(), &self.modal_seen_key, "1");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::storage::MemoryStore;

    fn prefs() -> (Preferences, Arc<MemoryStore>, Arc<MemoryStore>) {
        let local = Arc::new(MemoryStore::new());
        let session = Arc::new(MemoryStore::new());
        let prefs = Preferences::new(
            local.clone(),
            session.clone(),
            &StorageConfig::default(),
        );
        (prefs, local, session)
    }

    #[test]
    fn test_theme_defaults_to_light_and_toggles() {
        let (prefs, local, _) = prefs();
        assert_eq!(prefs.theme(), Theme::Light);

        assert_eq!(prefs.toggle_theme(), Theme::Dark);
        assert_eq!(
            local.get("elosocial:theme").unwrap().as_deref(),
            Some("dark")
        );
        assert_eq!(prefs.theme(), Theme::Dark);

        assert_eq!(prefs.toggle_theme(), Theme::Light);
        assert_eq!(prefs.theme(), Theme::Light);
    }

    #[test]
    fn test_unrecognized_stored_theme_falls_back() {
        let (prefs, local, _) = prefs();
        local.set("elosocial:theme", "roxo").unwrap();
        assert_eq!(prefs.theme(), Theme::Light);
    }

    #[test]
    fn test_contrast_roundtrip() {
        let (prefs, local, _) = prefs();
        assert_eq!(prefs.contrast(), Contrast::Off);
        assert_eq!(prefs.toggle_contrast(), Contrast::On);
        assert_eq!(
            local.get("elosocial:contrast").unwrap().as_deref(),
            Some("on")
        );
    }

    #[test]
    fn test_modal_opens_exactly_once_per_session() {
        let (prefs, _, session) = prefs();
        assert!(prefs.modal_should_open());
        assert!(!prefs.modal_should_open());
        assert_eq!(session.get("modalVisto").unwrap().as_deref(), Some("1"));

        // A fresh session store opens it again.
        let fresh = Preferences::new(
            Arc::new(MemoryStore::new()),
            Arc::new(MemoryStore::new()),
            &StorageConfig::default(),
        );
        assert!(fresh.modal_should_open());
    }
}
