//! One-shot visibility watcher
//!
//! Tracks a set of page elements and fires exactly once per element when
//! its visible fraction first reaches the configured threshold. Each
//! tracked element carries an explicit lifecycle:
//!
//! - `Watching`: armed with its options, waiting for a qualifying report
//! - `Fired`: threshold met, the trigger has been handed to the owner
//! - `Released`: the owner reacted; the element can never re-arm
//!
//! Entries are retained after release, which makes the at-most-one-trigger
//! invariant structural: re-watching or re-reporting a released node is a
//! no-op. The watcher never mutates presentation itself; it only emits
//! `Observe`/`Unobserve` host effects.

use glint_core::{Effect, Effects, IntersectionEntry, NodeId, WatchOptions};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Lifecycle state of one tracked element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WatchState {
    Watching(WatchOptions),
    Fired,
    Released,
}

/// Nodes collected from one intersection batch
pub type FiredNodes = SmallVec<[NodeId; 4]>;

/// One-shot per-element visibility tracking
#[derive(Debug, Default)]
pub struct VisibilityWatcher {
    states: FxHashMap<NodeId, WatchState>,
}

impl VisibilityWatcher {
    pub fn new() -> Self {
        Self {
            states: FxHashMap::default(),
        }
    }

    /// Arm a node; nodes already tracked (in any state) are left alone
    pub fn watch(&mut self, node: NodeId, options: WatchOptions) {
        self.states.entry(node).or_insert(WatchState::Watching(options));
    }

    /// `Observe` effects for everything currently armed
    ///
    /// Emitted once at mount so the host can set up its intersection
    /// primitive for the watch set.
    pub fn observe_effects(&self, effects: &mut Effects) {
        for (&node, state) in &self.states {
            if let WatchState::Watching(options) = *state {
                effects.push(Effect::Observe { node, options });
            }
        }
    }

    /// Consume a batch of visibility reports
    ///
    /// Every armed node whose ratio meets its threshold moves to `Fired`
    /// and is returned; an `Unobserve` effect is emitted for each. Reports
    /// for unknown, fired, or released nodes are ignored. Order within the
    /// returned list follows batch order and carries no guarantee beyond
    /// that.
    pub fn offer(&mut self, entries: &[IntersectionEntry], effects: &mut Effects) -> FiredNodes {
        let mut fired = FiredNodes::new();
        for entry in entries {
            let Some(state) = self.states.get_mut(&entry.node) else {
                continue;
            };
            let WatchState::Watching(options) = *state else {
                continue;
            };
            if entry.ratio >= options.visibility_fraction {
                *state = WatchState::Fired;
                effects.push(Effect::Unobserve { node: entry.node });
                fired.push(entry.node);
            }
        }
        fired
    }

    /// Mark a fired node as handled
    ///
    /// Owners call this after emitting their one-shot reaction.
    pub fn release(&mut self, node: NodeId) {
        if let Some(state) = self.states.get_mut(&node) {
            if *state == WatchState::Fired {
                *state = WatchState::Released;
            }
        }
    }

    pub fn state(&self, node: NodeId) -> Option<WatchState> {
        self.states.get(&node).copied()
    }

    /// Number of nodes still armed
    pub fn watching_count(&self) -> usize {
        self.states
            .values()
            .filter(|s| matches!(s, WatchState::Watching(_)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::Effects;

    fn entry(node: NodeId, ratio: f32) -> IntersectionEntry {
        IntersectionEntry::new(node, ratio)
    }

    #[test]
    fn fires_once_threshold_is_met() {
        let mut watcher = VisibilityWatcher::new();
        let node = NodeId::new(1);
        watcher.watch(node, WatchOptions::new(0.5, 0.0));

        let mut effects = Effects::new();

        // Below threshold: nothing fires.
        let fired = watcher.offer(&[entry(node, 0.3)], &mut effects);
        assert!(fired.is_empty());
        assert_eq!(watcher.state(node), Some(WatchState::Watching(WatchOptions::new(0.5, 0.0))));

        // At threshold: fires and unobserves.
        let fired = watcher.offer(&[entry(node, 0.5)], &mut effects);
        assert_eq!(fired.as_slice(), &[node]);
        assert_eq!(effects.as_slice(), &[Effect::Unobserve { node }]);
        assert_eq!(watcher.state(node), Some(WatchState::Fired));
    }

    #[test]
    fn released_node_never_fires_again() {
        let mut watcher = VisibilityWatcher::new();
        let node = NodeId::new(1);
        watcher.watch(node, WatchOptions::new(0.1, 0.0));

        let mut effects = Effects::new();
        watcher.offer(&[entry(node, 1.0)], &mut effects);
        watcher.release(node);

        // Element leaves and re-enters the viewport: no second trigger.
        let fired = watcher.offer(&[entry(node, 1.0)], &mut effects);
        assert!(fired.is_empty());
        assert_eq!(watcher.state(node), Some(WatchState::Released));

        // Re-watching a released node is a no-op.
        watcher.watch(node, WatchOptions::new(0.1, 0.0));
        assert_eq!(watcher.state(node), Some(WatchState::Released));
    }

    #[test]
    fn fired_but_unreleased_node_does_not_refire() {
        let mut watcher = VisibilityWatcher::new();
        let node = NodeId::new(1);
        watcher.watch(node, WatchOptions::new(0.1, 0.0));

        let mut effects = Effects::new();
        watcher.offer(&[entry(node, 1.0)], &mut effects);

        // A second report lands before the owner released the node.
        let fired = watcher.offer(&[entry(node, 1.0)], &mut effects);
        assert!(fired.is_empty());
    }

    #[test]
    fn batch_fires_all_qualifying_nodes() {
        let mut watcher = VisibilityWatcher::new();
        let a = NodeId::new(1);
        let b = NodeId::new(2);
        let c = NodeId::new(3);
        for node in [a, b, c] {
            watcher.watch(node, WatchOptions::new(0.5, 0.0));
        }

        let mut effects = Effects::new();
        let fired = watcher.offer(&[entry(a, 0.9), entry(b, 0.2), entry(c, 0.6)], &mut effects);
        assert_eq!(fired.as_slice(), &[a, c]);
        assert_eq!(watcher.watching_count(), 1);
    }

    #[test]
    fn unknown_nodes_are_ignored() {
        let mut watcher = VisibilityWatcher::new();
        let mut effects = Effects::new();
        let fired = watcher.offer(&[entry(NodeId::new(99), 1.0)], &mut effects);
        assert!(fired.is_empty());
        assert!(effects.is_empty());
    }

    #[test]
    fn observe_effects_cover_the_armed_set() {
        let mut watcher = VisibilityWatcher::new();
        let options = WatchOptions::new(0.1, 50.0);
        watcher.watch(NodeId::new(1), options);
        watcher.watch(NodeId::new(2), options);

        let mut effects = Effects::new();
        watcher.observe_effects(&mut effects);
        assert_eq!(effects.len(), 2);
        assert!(effects
            .iter()
            .all(|e| matches!(e, Effect::Observe { options: o, .. } if *o == options)));
    }
}
