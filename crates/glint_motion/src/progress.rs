//! Progress bar animator
//!
//! Each bar carries its intended final width as an inline style. At mount
//! the animator captures that string (capture must happen before the
//! reset, or the target is lost), then zeroes the width and watches the
//! bar. When a bar first becomes half visible, the animator waits a short
//! replay delay (so the zero state paints; without an intervening paint
//! the browser may coalesce 0%→target into a single step), then enables a
//! width transition and writes the captured target back verbatim. The
//! width string is opaque: no parsing, no validation, round-tripped as-is.

use glint_core::{Effect, Effects, IntersectionEntry, NodeId, ProgressConfig, TimerToken};
use rustc_hash::FxHashMap;

use crate::watcher::VisibilityWatcher;

/// Capture/reset/replay over a fixed set of progress bars
#[derive(Debug)]
pub struct ProgressAnimator {
    config: ProgressConfig,
    watcher: VisibilityWatcher,
    /// Captured inline widths, keyed by bar
    targets: FxHashMap<NodeId, String>,
    /// Replay timers in flight, keyed by token
    pending_replays: FxHashMap<TimerToken, NodeId>,
}

impl ProgressAnimator {
    /// Register bars and produce the mount effects
    ///
    /// `bars` pairs each node with its inline width at registration time.
    /// Bars without an inline width are skipped: there is nothing to
    /// capture and nothing to replay.
    pub fn mount(bars: &[(NodeId, Option<String>)], config: ProgressConfig) -> (Self, Effects) {
        let mut effects = Effects::new();
        let mut watcher = VisibilityWatcher::new();
        let mut targets = FxHashMap::default();

        for (node, inline_width) in bars {
            let Some(width) = inline_width else {
                tracing::debug!(node = ?node, "progress bar has no inline width, skipping");
                continue;
            };
            // Capture before reset.
            targets.insert(*node, width.clone());
            effects.push(Effect::SetStyle {
                node: *node,
                property: "width",
                value: "0%".to_string(),
            });
            watcher.watch(*node, config.watch_options());
        }
        watcher.observe_effects(&mut effects);

        tracing::debug!(bars = targets.len(), "progress animator mounted");
        (
            Self {
                config,
                watcher,
                targets,
                pending_replays: FxHashMap::default(),
            },
            effects,
        )
    }

    /// React to a visibility batch: schedule a replay per fired bar
    pub fn on_intersections(&mut self, entries: &[IntersectionEntry], effects: &mut Effects) {
        let fired = self.watcher.offer(entries, effects);
        for node in fired {
            let token = TimerToken::mint();
            self.pending_replays.insert(token, node);
            effects.push(Effect::ScheduleTimer {
                token,
                delay: self.config.replay_delay,
            });
            self.watcher.release(node);
            tracing::trace!(?node, ?token, "progress replay scheduled");
        }
    }

    /// React to a timer fire; returns false for tokens that aren't ours
    pub fn on_timer(&mut self, token: TimerToken, effects: &mut Effects) -> bool {
        let Some(node) = self.pending_replays.remove(&token) else {
            return false;
        };
        // The zero state has painted; enable the transition and replay the
        // captured target verbatim.
        if let Some(target) = self.targets.get(&node) {
            effects.push(Effect::SetStyle {
                node,
                property: "transition",
                value: self.config.width_transition.clone(),
            });
            effects.push(Effect::SetStyle {
                node,
                property: "width",
                value: target.clone(),
            });
        }
        true
    }

    /// The captured target width for a bar, if it had one
    pub fn target(&self, node: NodeId) -> Option<&str> {
        self.targets.get(&node).map(String::as_str)
    }
}
