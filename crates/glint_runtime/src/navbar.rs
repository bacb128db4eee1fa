//! Navbar presentation
//!
//! Binds the pure scroll director to a concrete navbar element: the
//! offset classification drives the compact styling and the direction
//! classification drives the hide/show transform. Every scroll event is
//! re-rendered in full; the document tolerates redundant class and style
//! writes, and skipping them would let a missed event leave stale state.

use glint_core::{Effect, Effects, NavConfig, NavVisibility, NodeId, OffsetClass, ScrollDirector};

/// Scroll-reactive navbar renderer
#[derive(Debug)]
pub struct NavbarComponent {
    node: NodeId,
    director: ScrollDirector,
    config: NavConfig,
}

impl NavbarComponent {
    pub fn new(node: NodeId, config: NavConfig) -> Self {
        Self {
            node,
            director: ScrollDirector::new(config.compact_threshold),
            config,
        }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Render the navbar for the given scroll offset
    pub fn on_scroll(&mut self, offset_y: f32, effects: &mut Effects) {
        let (offset_class, visibility) = self.director.on_scroll(offset_y);
        let node = self.node;

        match offset_class {
            OffsetClass::Compact => {
                effects.push(Effect::AddClass {
                    node,
                    class: self.config.compact_class.clone(),
                });
                effects.push(Effect::SetStyle {
                    node,
                    property: "background-color",
                    value: self.config.compact_background.clone(),
                });
                effects.push(Effect::SetStyle {
                    node,
                    property: "backdrop-filter",
                    value: self.config.compact_backdrop_filter.clone(),
                });
                effects.push(Effect::SetStyle {
                    node,
                    property: "box-shadow",
                    value: self.config.compact_box_shadow.clone(),
                });
            }
            OffsetClass::Expanded => {
                effects.push(Effect::RemoveClass {
                    node,
                    class: self.config.compact_class.clone(),
                });
                effects.push(Effect::ClearStyle {
                    node,
                    property: "background-color",
                });
                effects.push(Effect::ClearStyle {
                    node,
                    property: "backdrop-filter",
                });
                effects.push(Effect::ClearStyle {
                    node,
                    property: "box-shadow",
                });
            }
        }

        let transform = match visibility {
            NavVisibility::Hidden => "translateY(-100%)",
            NavVisibility::Shown => "translateY(0)",
        };
        effects.push(Effect::SetStyle {
            node,
            property: "transform",
            value: transform.to_string(),
        });
    }
}
