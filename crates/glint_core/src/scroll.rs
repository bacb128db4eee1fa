//! Scroll director state machine
//!
//! Tracks the navigation bar's presentation as two independent axes:
//!
//! - **Offset class** `{Expanded, Compact}`: has the page scrolled past
//!   the compact threshold?
//! - **Visibility** `{Shown, Hidden}`: is the user scrolling down while
//!   past the threshold?
//!
//! The step is pure: [`ScrollDirector::on_scroll`] folds one offset into
//! the state and returns the resulting axes. Mapping axes to styles is the
//! runtime's job, so the direction logic stays testable on its own.

/// Whether the navbar renders in its elevated, compact form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetClass {
    /// At or near the top of the page; stylesheet defaults apply
    Expanded,
    /// Past the threshold; elevated background, blur, and shadow
    Compact,
}

/// Whether the navbar is slid out of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavVisibility {
    Shown,
    Hidden,
}

/// Two-axis navbar presentation state over a scroll offset stream
#[derive(Debug, Clone)]
pub struct ScrollDirector {
    compact_threshold: f32,
    offset_class: OffsetClass,
    visibility: NavVisibility,
    last_y: f32,
}

impl ScrollDirector {
    /// Initial state is `(Expanded, Shown)` at offset zero
    pub fn new(compact_threshold: f32) -> Self {
        Self {
            compact_threshold,
            offset_class: OffsetClass::Expanded,
            visibility: NavVisibility::Shown,
            last_y: 0.0,
        }
    }

    /// Fold one scroll offset into the state
    ///
    /// Both rules are evaluated against the previous `last_y`, then
    /// `last_y` is updated unconditionally. Every scroll event is
    /// processed; there is no debouncing at this traffic scale.
    pub fn on_scroll(&mut self, y: f32) -> (OffsetClass, NavVisibility) {
        self.offset_class = if y > self.compact_threshold {
            OffsetClass::Compact
        } else {
            OffsetClass::Expanded
        };

        self.visibility = if y > self.last_y && y > self.compact_threshold {
            NavVisibility::Hidden
        } else {
            NavVisibility::Shown
        };

        self.last_y = y;
        (self.offset_class, self.visibility)
    }

    pub fn offset_class(&self) -> OffsetClass {
        self.offset_class
    }

    pub fn visibility(&self) -> NavVisibility {
        self.visibility
    }

    pub fn last_offset(&self) -> f32 {
        self.last_y
    }
}
