//! Health indicator component
//!
//! Pure consumer of resolved poll outcomes: tracks the last-known status
//! and renders it onto the optional indicator element: category class
//! token set to the status word, visible text set to the capitalized
//! word. Results are applied in resolution order, so under interleaved
//! polls the latest-resolved outcome wins.

use glint_core::{Effect, Effects, HealthStatus, NodeId};

/// Last-known health status plus its indicator rendering
#[derive(Debug)]
pub struct HealthMonitor {
    indicator: Option<NodeId>,
    status: HealthStatus,
    /// Class token currently applied to the indicator
    applied_token: Option<String>,
}

impl HealthMonitor {
    /// A missing indicator disables rendering but not status tracking
    pub fn new(indicator: Option<NodeId>) -> Self {
        if indicator.is_none() {
            tracing::debug!("no health indicator element, rendering disabled");
        }
        Self {
            indicator,
            status: HealthStatus::Unknown,
            applied_token: None,
        }
    }

    pub fn status(&self) -> &HealthStatus {
        &self.status
    }

    /// Apply one resolved poll outcome
    pub fn on_resolved(&mut self, status: HealthStatus, effects: &mut Effects) {
        self.status = status;

        let Some(node) = self.indicator else {
            return;
        };

        if let Some(previous) = self.applied_token.take() {
            effects.push(Effect::RemoveClass {
                node,
                class: previous,
            });
        }
        let token = self.status.as_word().to_string();
        effects.push(Effect::AddClass {
            node,
            class: token.clone(),
        });
        effects.push(Effect::SetText {
            node,
            text: self.status.label(),
        });
        self.applied_token = Some(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_word_and_capitalized_label() {
        let node = NodeId::new(7);
        let mut monitor = HealthMonitor::new(Some(node));

        let mut effects = Effects::new();
        monitor.on_resolved(HealthStatus::Healthy, &mut effects);
        assert_eq!(
            effects.as_slice(),
            &[
                Effect::AddClass {
                    node,
                    class: "healthy".to_string(),
                },
                Effect::SetText {
                    node,
                    text: "Healthy".to_string(),
                },
            ]
        );
    }

    #[test]
    fn replaces_previous_category_token() {
        let node = NodeId::new(7);
        let mut monitor = HealthMonitor::new(Some(node));

        let mut effects = Effects::new();
        monitor.on_resolved(HealthStatus::Healthy, &mut effects);

        let mut effects = Effects::new();
        monitor.on_resolved(HealthStatus::Unhealthy, &mut effects);
        assert_eq!(
            effects.as_slice(),
            &[
                Effect::RemoveClass {
                    node,
                    class: "healthy".to_string(),
                },
                Effect::AddClass {
                    node,
                    class: "unhealthy".to_string(),
                },
                Effect::SetText {
                    node,
                    text: "Unhealthy".to_string(),
                },
            ]
        );
    }

    #[test]
    fn latest_resolved_result_wins() {
        let node = NodeId::new(7);
        let mut monitor = HealthMonitor::new(Some(node));

        // Two interleaved polls resolve out of schedule order; the last
        // applied outcome is the one that sticks.
        let mut effects = Effects::new();
        monitor.on_resolved(HealthStatus::Unhealthy, &mut effects);
        monitor.on_resolved(HealthStatus::Healthy, &mut effects);
        assert_eq!(monitor.status(), &HealthStatus::Healthy);
    }

    #[test]
    fn missing_indicator_tracks_status_silently() {
        let mut monitor = HealthMonitor::new(None);
        let mut effects = Effects::new();
        monitor.on_resolved(HealthStatus::Degraded, &mut effects);
        assert!(effects.is_empty());
        assert_eq!(monitor.status(), &HealthStatus::Degraded);
    }

    #[test]
    fn unexpected_word_is_rendered_as_is() {
        let node = NodeId::new(7);
        let mut monitor = HealthMonitor::new(Some(node));
        let mut effects = Effects::new();
        monitor.on_resolved(HealthStatus::Other("maintenance".to_string()), &mut effects);
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::SetText { text, .. } if text == "Maintenance"
        )));
    }
}
