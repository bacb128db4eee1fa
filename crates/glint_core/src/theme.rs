//! Theme preference
//!
//! Two inputs compete for the page theme: the system color scheme and an
//! explicit user toggle. Precedence is defined here once: an explicit
//! toggle is persisted and wins permanently; system changes only apply
//! while no stored choice exists.

/// Page color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    fn from_system(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

/// Storage for the single persisted preference key
///
/// The runtime ships a file-backed implementation; hosts with their own
/// storage (e.g. browser local storage) substitute theirs.
pub trait ThemeStore {
    /// The last explicitly chosen theme, if any
    fn load(&self) -> Option<Theme>;
    /// Record an explicit choice
    fn store(&mut self, theme: Theme);
}

/// In-memory store, used in tests and by hosts without persistence
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    stored: Option<Theme>,
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<Theme> {
        self.stored
    }

    fn store(&mut self, theme: Theme) {
        self.stored = Some(theme);
    }
}

/// Theme preference state machine
#[derive(Debug, Clone)]
pub struct ThemeManager {
    current: Theme,
    /// Set once the user toggles (or a stored choice was loaded)
    explicit: bool,
}

impl ThemeManager {
    /// Initialize from the stored choice if present, else the system scheme
    pub fn new(stored: Option<Theme>, system_dark: bool) -> Self {
        match stored {
            Some(theme) => Self {
                current: theme,
                explicit: true,
            },
            None => Self {
                current: Theme::from_system(system_dark),
                explicit: false,
            },
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn has_explicit_choice(&self) -> bool {
        self.explicit
    }

    /// Explicit user toggle: flips the theme and pins it
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.explicit = true;
        self.current
    }

    /// System color-scheme change; ignored once an explicit choice exists
    ///
    /// Returns the new theme when the change was applied.
    pub fn system_changed(&mut self, dark: bool) -> Option<Theme> {
        if self.explicit {
            return None;
        }
        let theme = Theme::from_system(dark);
        if theme == self.current {
            return None;
        }
        self.current = theme;
        Some(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initializes_from_system_when_nothing_stored() {
        let manager = ThemeManager::new(None, true);
        assert_eq!(manager.current(), Theme::Dark);
        assert!(!manager.has_explicit_choice());
    }

    #[test]
    fn stored_choice_overrides_system() {
        let manager = ThemeManager::new(Some(Theme::Light), true);
        assert_eq!(manager.current(), Theme::Light);
        assert!(manager.has_explicit_choice());
    }

    #[test]
    fn toggle_flips_and_pins() {
        let mut manager = ThemeManager::new(None, false);
        assert_eq!(manager.toggle(), Theme::Dark);
        assert!(manager.has_explicit_choice());

        // System changes no longer apply.
        assert_eq!(manager.system_changed(false), None);
        assert_eq!(manager.current(), Theme::Dark);
    }

    #[test]
    fn system_change_applies_until_first_toggle() {
        let mut manager = ThemeManager::new(None, false);
        assert_eq!(manager.system_changed(true), Some(Theme::Dark));
        // Same scheme again is a no-op.
        assert_eq!(manager.system_changed(true), None);
    }

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryThemeStore::default();
        assert_eq!(store.load(), None);
        store.store(Theme::Dark);
        assert_eq!(store.load(), Some(Theme::Dark));
    }
}
