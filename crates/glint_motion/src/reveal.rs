//! Reveal animator
//!
//! Puts a collection of elements into a hidden presentation (transparent,
//! offset downward, transition pre-declared), then adds a marker class to
//! each element the first time it becomes sufficiently visible. The
//! stylesheet rule for the marker is injected once globally at mount,
//! never per element; the pre-declared transition does the animating.
//!
//! Elements added to the page after mount are never observed; there are
//! no rescans. That is a documented limitation of the layer, not a defect.

use glint_core::{Effect, Effects, IntersectionEntry, NodeId, RevealConfig};

use crate::watcher::VisibilityWatcher;

/// Watch-then-reveal over a fixed set of elements
#[derive(Debug)]
pub struct RevealAnimator {
    config: RevealConfig,
    watcher: VisibilityWatcher,
}

impl RevealAnimator {
    /// Register targets and produce the mount effects
    ///
    /// Emits, in order: the single global marker rule, the per-node hidden
    /// styles, and one `Observe` per node.
    pub fn mount(nodes: &[NodeId], config: RevealConfig) -> (Self, Effects) {
        let mut effects = Effects::new();

        effects.push(Effect::InjectStyleRule {
            css: format!(
                ".{} {{ opacity: 1 !important; transform: translateY(0) !important; }}",
                config.marker_class
            ),
        });

        let mut watcher = VisibilityWatcher::new();
        for &node in nodes {
            effects.push(Effect::SetStyle {
                node,
                property: "opacity",
                value: "0".to_string(),
            });
            effects.push(Effect::SetStyle {
                node,
                property: "transform",
                value: format!("translateY({}px)", config.hidden_offset),
            });
            effects.push(Effect::SetStyle {
                node,
                property: "transition",
                value: config.transition.clone(),
            });
            watcher.watch(node, config.watch_options());
        }
        watcher.observe_effects(&mut effects);

        tracing::debug!(targets = nodes.len(), "reveal animator mounted");
        (Self { config, watcher }, effects)
    }

    /// React to a visibility batch: add the marker to newly fired nodes
    pub fn on_intersections(&mut self, entries: &[IntersectionEntry], effects: &mut Effects) {
        let fired = self.watcher.offer(entries, effects);
        for node in fired {
            effects.push(Effect::AddClass {
                node,
                class: self.config.marker_class.clone(),
            });
            self.watcher.release(node);
            tracing::trace!(?node, "revealed");
        }
    }

    /// Number of elements still waiting to be revealed
    pub fn pending(&self) -> usize {
        self.watcher.watching_count()
    }
}
