//! Preference storage
//!
//! File-backed [`ThemeStore`] holding the single persisted key, the
//! explicitly chosen theme. Storage failures are logged and swallowed;
//! losing the preference must never break the page.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use glint_core::{Theme, ThemeStore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
struct PrefsFile {
    theme: Option<String>,
}

/// TOML-file theme store under the platform config directory
#[derive(Debug)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    /// Store at the default location (`<config dir>/glint/prefs.toml`)
    ///
    /// Returns `None` when the platform exposes no config directory.
    pub fn open_default() -> Option<Self> {
        let dir = dirs::config_dir()?;
        Some(Self::at(dir.join("glint").join("prefs.toml")))
    }

    /// Store at an explicit path
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    fn read(&self) -> Result<PrefsFile> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing {}", self.path.display()))
    }

    fn write(&self, prefs: &PrefsFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let raw = toml::to_string_pretty(prefs).context("serializing preferences")?;
        fs::write(&self.path, raw).with_context(|| format!("writing {}", self.path.display()))
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Option<Theme> {
        if !self.path.exists() {
            return None;
        }
        match self.read() {
            Ok(prefs) => prefs.theme.as_deref().and_then(Theme::from_str),
            Err(err) => {
                tracing::warn!("failed to load theme preference: {err:#}");
                None
            }
        }
    }

    fn store(&mut self, theme: Theme) {
        let prefs = PrefsFile {
            theme: Some(theme.as_str().to_string()),
        };
        if let Err(err) = self.write(&prefs) {
            tracing::warn!("failed to store theme preference: {err:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("glint-prefs-{name}-{}", std::process::id()))
            .join("prefs.toml")
    }

    #[test]
    fn round_trips_through_the_file() {
        let path = temp_path("roundtrip");
        let mut store = FileThemeStore::at(path.clone());
        assert_eq!(store.load(), None);

        store.store(Theme::Dark);
        assert_eq!(store.load(), Some(Theme::Dark));

        store.store(Theme::Light);
        assert_eq!(store.load(), Some(Theme::Light));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn unparseable_file_loads_as_none() {
        let path = temp_path("garbage");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not valid toml [[").unwrap();

        let store = FileThemeStore::at(path.clone());
        assert_eq!(store.load(), None);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn unknown_theme_word_loads_as_none() {
        let path = temp_path("unknown");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "theme = \"sepia\"\n").unwrap();

        let store = FileThemeStore::at(path.clone());
        assert_eq!(store.load(), None);

        let _ = fs::remove_file(path);
    }
}
