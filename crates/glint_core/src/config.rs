//! Component configuration
//!
//! Every fixed number in the enhancement layer (thresholds, fractions,
//! margins, delays, the poll interval) lives here as a named field with
//! its production default, so behavior is tunable and each constant is
//! independently testable.

use std::time::Duration;

use crate::effects::WatchOptions;

/// Configuration for the reveal animator
#[derive(Debug, Clone)]
pub struct RevealConfig {
    /// Classes selecting reveal targets at mount
    pub target_classes: Vec<String>,
    /// Marker class the global style rule maps to the revealed state
    pub marker_class: String,
    /// Fraction of the element that must be visible to trigger
    pub visibility_fraction: f32,
    /// Extra pixels below the viewport that count as visible
    pub margin_below: f32,
    /// Initial downward offset of hidden elements, in pixels
    pub hidden_offset: f32,
    /// Transition declared up front so the reveal animates
    pub transition: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            target_classes: vec!["card".to_string(), "skill-item".to_string()],
            marker_class: "animate-in".to_string(),
            visibility_fraction: 0.1,
            margin_below: 50.0,
            hidden_offset: 30.0,
            transition: "opacity 0.8s ease, transform 0.8s ease".to_string(),
        }
    }
}

impl RevealConfig {
    pub fn watch_options(&self) -> WatchOptions {
        WatchOptions::new(self.visibility_fraction, self.margin_below)
    }
}

/// Configuration for the progress bar animator
#[derive(Debug, Clone)]
pub struct ProgressConfig {
    /// Class selecting progress bar elements at mount
    pub bar_class: String,
    /// Fraction of the bar that must be visible to trigger
    pub visibility_fraction: f32,
    /// Delay before replaying the captured width, so the zero state paints
    pub replay_delay: Duration,
    /// Width transition enabled just before the replay
    pub width_transition: String,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            bar_class: "progress-bar".to_string(),
            visibility_fraction: 0.5,
            replay_delay: Duration::from_millis(100),
            width_transition: "width 2s ease-in-out".to_string(),
        }
    }
}

impl ProgressConfig {
    pub fn watch_options(&self) -> WatchOptions {
        WatchOptions::new(self.visibility_fraction, 0.0)
    }
}

/// Configuration for the scroll director's navbar presentation
#[derive(Debug, Clone)]
pub struct NavConfig {
    /// Class selecting the navbar root; absent navbar disables the director
    pub navbar_class: String,
    /// Scroll offset past which the navbar renders compact
    pub compact_threshold: f32,
    /// Class marker applied in the compact state
    pub compact_class: String,
    /// Elevated background applied in the compact state
    pub compact_background: String,
    /// Backdrop blur applied in the compact state
    pub compact_backdrop_filter: String,
    /// Shadow applied in the compact state
    pub compact_box_shadow: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            navbar_class: "navbar".to_string(),
            compact_threshold: 100.0,
            compact_class: "scrolled".to_string(),
            compact_background: "rgba(33, 37, 41, 0.95)".to_string(),
            compact_backdrop_filter: "blur(10px)".to_string(),
            compact_box_shadow: "0 2px 20px rgba(0,0,0,0.1)".to_string(),
        }
    }
}

/// Configuration for the health poller
#[derive(Debug, Clone)]
pub struct HealthConfig {
    /// Base URL of the backend; the status path is appended to it
    pub base_url: String,
    /// Interval between polls after the startup poll
    pub poll_interval: Duration,
    /// Per-request timeout; a stalled poll resolves as unhealthy
    pub request_timeout: Duration,
    /// Class selecting the indicator element; absent indicator no-ops
    pub indicator_class: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            poll_interval: Duration::from_millis(300_000),
            request_timeout: Duration::from_secs(5),
            indicator_class: "health-indicator".to_string(),
        }
    }
}

/// Configuration for the theme manager
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Class selecting the optional toggle control
    pub toggle_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_class: "theme-toggle".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production_constants() {
        let reveal = RevealConfig::default();
        assert_eq!(reveal.visibility_fraction, 0.1);
        assert_eq!(reveal.margin_below, 50.0);

        let progress = ProgressConfig::default();
        assert_eq!(progress.visibility_fraction, 0.5);
        assert_eq!(progress.replay_delay, Duration::from_millis(100));

        let nav = NavConfig::default();
        assert_eq!(nav.compact_threshold, 100.0);

        let health = HealthConfig::default();
        assert_eq!(health.poll_interval, Duration::from_millis(300_000));
    }

    #[test]
    fn progress_watches_with_no_margin() {
        let options = ProgressConfig::default().watch_options();
        assert_eq!(options.margin_below, 0.0);
        assert_eq!(options.visibility_fraction, 0.5);
    }
}
