//! Page events
//!
//! Everything the engine reacts to arrives as a [`PageEvent`]: host input
//! (scroll offsets, intersection batches, control clicks), scheduler timer
//! fires, and resolved health polls. Components receive every event and
//! ignore the ones they don't care about; there is no routing layer.

use crate::health::HealthStatus;
use crate::node::{NodeId, TimerToken};

/// One entry of a batched visibility report
///
/// `ratio` is the fraction of the element's bounding box inside the
/// (margin-expanded) viewport, as computed by the host's intersection
/// primitive or by [`crate::geometry::intersection_ratio`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub node: NodeId,
    pub ratio: f32,
}

impl IntersectionEntry {
    pub fn new(node: NodeId, ratio: f32) -> Self {
        Self { node, ratio }
    }
}

/// An event delivered to the page engine
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Vertical scroll position changed; `offset_y` is the absolute offset
    Scroll { offset_y: f32 },
    /// A batch of visibility threshold reports from the host
    ///
    /// Batching mirrors how rendering engines deliver intersection
    /// callbacks: entries that cross in the same frame arrive together,
    /// with no ordering guarantee between them.
    Intersections(Vec<IntersectionEntry>),
    /// A previously scheduled timer fired
    Timer(TimerToken),
    /// A health poll resolved (failures already mapped to `Unhealthy`)
    HealthResolved(HealthStatus),
    /// The user clicked the theme toggle control
    ToggleTheme,
    /// The host reported a system color-scheme change
    SystemTheme { dark: bool },
}
