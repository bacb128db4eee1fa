//! Render and host effects
//!
//! Components never touch the page directly. Each step returns a list of
//! [`Effect`]s and a thin adapter applies them: style and class effects
//! mutate presentation, `Observe`/`Unobserve` arm and disarm the host's
//! visibility primitive, `ScheduleTimer` asks the runtime for a callback,
//! and `PersistTheme` writes the single stored preference. This keeps every
//! decision testable without a browser.

use std::time::Duration;

use smallvec::SmallVec;

use crate::node::{NodeId, TimerToken};
use crate::theme::Theme;

/// Visibility observation parameters for one watched node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchOptions {
    /// Fraction of the bounding box that must be visible to trigger
    pub visibility_fraction: f32,
    /// Extra pixels below the viewport that count as visible
    pub margin_below: f32,
}

impl WatchOptions {
    pub fn new(visibility_fraction: f32, margin_below: f32) -> Self {
        Self {
            visibility_fraction,
            margin_below,
        }
    }
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            visibility_fraction: 0.0,
            margin_below: 0.0,
        }
    }
}

/// A single presentation or host effect emitted by a component step
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Set an inline style property
    SetStyle {
        node: NodeId,
        property: &'static str,
        value: String,
    },
    /// Clear an inline style override back to the stylesheet default
    ClearStyle {
        node: NodeId,
        property: &'static str,
    },
    /// Add a class marker
    AddClass { node: NodeId, class: String },
    /// Remove a class marker
    RemoveClass { node: NodeId, class: String },
    /// Replace the element's visible text
    SetText { node: NodeId, text: String },
    /// Set an attribute (e.g. `data-theme` on the document root)
    SetAttribute {
        node: NodeId,
        name: &'static str,
        value: String,
    },
    /// Install a global style rule; emitted once per rule, never per element
    InjectStyleRule { css: String },
    /// Arm the host's visibility primitive for a node
    Observe {
        node: NodeId,
        options: WatchOptions,
    },
    /// Disarm the host's visibility primitive for a node
    Unobserve { node: NodeId },
    /// Request a one-shot timer callback after `delay`
    ScheduleTimer { token: TimerToken, delay: Duration },
    /// Persist the explicitly chosen theme
    PersistTheme { theme: Theme },
}

/// Accumulator for effects produced during one event step
///
/// Most steps emit a handful of effects; the inline capacity keeps the
/// common case allocation-free.
pub type Effects = SmallVec<[Effect; 8]>;
