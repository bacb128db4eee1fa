//! Theme application
//!
//! Binds the theme preference state machine to the document root: the
//! active theme is mirrored into a `data-theme` attribute, and explicit
//! toggles additionally request persistence. System scheme changes flow
//! through [`glint_core::ThemeManager`], which drops them once an
//! explicit choice exists.

use glint_core::{Effect, Effects, NodeId, Theme, ThemeManager};

/// Theme renderer for the document root
#[derive(Debug)]
pub struct ThemeComponent {
    root: NodeId,
    manager: ThemeManager,
}

impl ThemeComponent {
    /// Build from the stored choice and system scheme, emitting the
    /// initial `data-theme` application
    pub fn mount(
        root: NodeId,
        stored: Option<Theme>,
        system_dark: bool,
        effects: &mut Effects,
    ) -> Self {
        let manager = ThemeManager::new(stored, system_dark);
        let component = Self { root, manager };
        component.apply(component.manager.current(), effects);
        component
    }

    pub fn current(&self) -> Theme {
        self.manager.current()
    }

    /// Explicit user toggle: re-render and persist
    pub fn on_toggle(&mut self, effects: &mut Effects) {
        let theme = self.manager.toggle();
        self.apply(theme, effects);
        effects.push(Effect::PersistTheme { theme });
    }

    /// System color-scheme change: re-render only if it still applies
    pub fn on_system_changed(&mut self, dark: bool, effects: &mut Effects) {
        if let Some(theme) = self.manager.system_changed(dark) {
            self.apply(theme, effects);
        }
    }

    fn apply(&self, theme: Theme, effects: &mut Effects) {
        effects.push(Effect::SetAttribute {
            node: self.root,
            name: "data-theme",
            value: theme.as_str().to_string(),
        });
    }
}
