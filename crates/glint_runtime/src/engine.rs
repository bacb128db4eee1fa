//! Page engine
//!
//! Owns every component of the enhancement layer and the machinery that
//! drives them: the page model, the timer scheduler, the status client,
//! and the theme store. The host (or a test) feeds [`PageEvent`]s in; the
//! engine fans each one out to the components it concerns, then routes
//! the resulting effects: document mutations to the page model, timer
//! requests to the scheduler, persistence to the theme store.
//!
//! Components are isolated from each other: a panic inside one event's
//! dispatch is caught and logged, and the next event proceeds normally.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use glint_core::{
    Effect, Effects, EnhanceError, HealthConfig, HealthStatus, NavConfig, NodeId, PageEvent,
    ProgressConfig, RevealConfig, Theme, ThemeConfig, ThemeStore, TimerToken,
};
use glint_health::{spawn_poll, HealthMonitor, StatusClient};
use glint_motion::{ProgressAnimator, RevealAnimator};

use crate::dom::PageDom;
use crate::navbar::NavbarComponent;
use crate::scheduler::TimerScheduler;
use crate::theming::ThemeComponent;

/// Full configuration of the enhancement layer
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub reveal: RevealConfig,
    pub progress: ProgressConfig,
    pub nav: NavConfig,
    pub health: HealthConfig,
    pub theme: ThemeConfig,
}

/// The assembled enhancement layer
pub struct PageEngine {
    dom: PageDom,
    config: EngineConfig,

    reveal: RevealAnimator,
    progress: ProgressAnimator,
    /// Absent when the page has no navbar element
    navbar: Option<NavbarComponent>,
    monitor: HealthMonitor,
    theme: ThemeComponent,

    scheduler: TimerScheduler,
    client: Arc<StatusClient>,
    store: Box<dyn ThemeStore + Send>,

    events_tx: Sender<PageEvent>,
    events_rx: Receiver<PageEvent>,
    /// Repeating token driving the health poll cadence
    poll_token: TimerToken,
}

impl PageEngine {
    /// Assemble the layer over an already-mirrored page
    ///
    /// Selects targets by class, applies every component's mount effects,
    /// and arms the repeating poll timer. Background activity (the
    /// scheduler thread and the startup poll) waits for [`start`].
    ///
    /// [`start`]: PageEngine::start
    pub fn mount(
        mut dom: PageDom,
        config: EngineConfig,
        mut store: Box<dyn ThemeStore + Send>,
        system_dark: bool,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        let scheduler = TimerScheduler::new(events_tx.clone());
        let client = Arc::new(StatusClient::from_config(&config.health));
        let poll_token = TimerToken::mint();

        let parts = assemble(
            &mut dom,
            &config,
            &scheduler,
            store.as_mut(),
            poll_token,
            system_dark,
        );

        Self {
            dom,
            config,
            reveal: parts.reveal,
            progress: parts.progress,
            navbar: parts.navbar,
            monitor: parts.monitor,
            theme: parts.theme,
            scheduler,
            client,
            store,
            events_tx,
            events_rx,
            poll_token,
        }
    }

    /// Run mount again over the page's current state; never panics
    pub fn remount(&mut self, system_dark: bool) {
        let parts = assemble(
            &mut self.dom,
            &self.config,
            &self.scheduler,
            self.store.as_mut(),
            self.poll_token,
            system_dark,
        );
        self.reveal = parts.reveal;
        self.progress = parts.progress;
        self.navbar = parts.navbar;
        self.monitor = parts.monitor;
        self.theme = parts.theme;
    }

    /// Start background activity: the scheduler thread and the startup poll
    pub fn start(&mut self) {
        self.scheduler.start();
        spawn_poll(Arc::clone(&self.client), self.events_tx.clone());
    }

    /// Stop the scheduler thread; in-flight polls finish on their own
    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    /// A handle the host uses to post events into the engine
    pub fn sender(&self) -> Sender<PageEvent> {
        self.events_tx.clone()
    }

    /// Handle one event, isolating component faults
    pub fn handle_event(&mut self, event: PageEvent) {
        let kind = event_kind(&event);
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.dispatch(event)));
        if result.is_err() {
            let fault = EnhanceError::component(kind, "panicked handling an event");
            tracing::error!(error = %fault, "continuing after component fault");
        }
    }

    /// Drain and handle every event currently queued; returns the count
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    /// Fire due timers without the background thread (deterministic tests)
    pub fn run_due_timers(&self) -> usize {
        self.scheduler.run_due()
    }

    fn dispatch(&mut self, event: PageEvent) {
        let mut effects = Effects::new();
        match event {
            PageEvent::Scroll { offset_y } => {
                if let Some(navbar) = self.navbar.as_mut() {
                    navbar.on_scroll(offset_y, &mut effects);
                }
            }
            PageEvent::Intersections(entries) => {
                // Both animators see the whole batch; each reacts only to
                // the nodes it watches.
                self.reveal.on_intersections(&entries, &mut effects);
                self.progress.on_intersections(&entries, &mut effects);
            }
            PageEvent::Timer(token) => {
                if token == self.poll_token {
                    spawn_poll(Arc::clone(&self.client), self.events_tx.clone());
                } else if !self.progress.on_timer(token, &mut effects) {
                    tracing::trace!(?token, "timer fired with no owner");
                }
            }
            PageEvent::HealthResolved(status) => {
                self.monitor.on_resolved(status, &mut effects);
            }
            PageEvent::ToggleTheme => {
                self.theme.on_toggle(&mut effects);
            }
            PageEvent::SystemTheme { dark } => {
                self.theme.on_system_changed(dark, &mut effects);
            }
        }
        self.route_effects(effects);
    }

    fn route_effects(&mut self, effects: Effects) {
        route_effects_into(&mut self.dom, &self.scheduler, self.store.as_mut(), effects);
    }

    pub fn dom(&self) -> &PageDom {
        &self.dom
    }

    pub fn health_status(&self) -> &HealthStatus {
        self.monitor.status()
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    /// Elements still waiting to be revealed
    pub fn pending_reveals(&self) -> usize {
        self.reveal.pending()
    }
}

impl Drop for PageEngine {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The component set built by one mount pass
struct Assembly {
    reveal: RevealAnimator,
    progress: ProgressAnimator,
    navbar: Option<NavbarComponent>,
    monitor: HealthMonitor,
    theme: ThemeComponent,
}

/// Build the components from the page as it currently stands
///
/// Runs for the initial mount and again on re-mount; selection and mount
/// effects simply work against the page's current state.
fn assemble(
    dom: &mut PageDom,
    config: &EngineConfig,
    scheduler: &TimerScheduler,
    store: &mut dyn ThemeStore,
    poll_token: TimerToken,
    system_dark: bool,
) -> Assembly {
    // Reveal targets: union of the configured classes, document order,
    // an element carrying several target classes registered once.
    let mut targets: Vec<NodeId> = Vec::new();
    for class in &config.reveal.target_classes {
        for node in dom.query_class(class) {
            if !targets.contains(&node) {
                targets.push(node);
            }
        }
    }
    let (reveal, reveal_effects) = RevealAnimator::mount(&targets, config.reveal.clone());
    route_effects_into(dom, scheduler, store, reveal_effects);

    // Progress bars, paired with their inline width at this moment.
    let bars: Vec<(NodeId, Option<String>)> = dom
        .query_class(&config.progress.bar_class)
        .into_iter()
        .map(|node| {
            let width = dom.inline_style(node, "width").map(str::to_string);
            (node, width)
        })
        .collect();
    let (progress, progress_effects) = ProgressAnimator::mount(&bars, config.progress.clone());
    route_effects_into(dom, scheduler, store, progress_effects);

    let navbar = dom
        .first_with_class(&config.nav.navbar_class)
        .map(|node| NavbarComponent::new(node, config.nav.clone()));
    if navbar.is_none() {
        tracing::debug!("no navbar element, scroll director disabled");
    }

    let indicator = dom.first_with_class(&config.health.indicator_class);
    let monitor = HealthMonitor::new(indicator);

    // The toggle control itself only matters to the host (it wires the
    // click to a ToggleTheme event); its absence is worth a note.
    if dom.first_with_class(&config.theme.toggle_class).is_none() {
        tracing::debug!("no theme toggle element on this page");
    }

    let mut theme_effects = Effects::new();
    let theme = ThemeComponent::mount(dom.root(), store.load(), system_dark, &mut theme_effects);
    route_effects_into(dom, scheduler, store, theme_effects);

    scheduler.cancel(poll_token);
    scheduler.schedule_repeating(poll_token, config.health.poll_interval);

    tracing::info!(
        reveal_targets = targets.len(),
        progress_bars = bars.len(),
        navbar = navbar.is_some(),
        "page engine mounted"
    );

    Assembly {
        reveal,
        progress,
        navbar,
        monitor,
        theme,
    }
}

fn route_effects_into(
    dom: &mut PageDom,
    scheduler: &TimerScheduler,
    store: &mut dyn ThemeStore,
    effects: Effects,
) {
    for effect in &effects {
        match effect {
            Effect::ScheduleTimer { token, delay } => {
                scheduler.schedule_once(*token, *delay);
            }
            Effect::PersistTheme { theme } => {
                store.store(*theme);
            }
            other => dom.apply(other),
        }
    }
}

/// The dispatch path an event takes, for fault reports
fn event_kind(event: &PageEvent) -> &'static str {
    match event {
        PageEvent::Scroll { .. } => "scroll",
        PageEvent::Intersections(_) => "intersections",
        PageEvent::Timer(_) => "timer",
        PageEvent::HealthResolved(_) => "health",
        PageEvent::ToggleTheme | PageEvent::SystemTheme { .. } => "theme",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{IntersectionEntry, MemoryThemeStore};

    fn page() -> PageDom {
        let mut dom = PageDom::new();
        dom.add_element(&["navbar"]);
        dom.add_element(&["card"]);
        dom.add_element(&["skill-item"]);
        dom.add_element_with_style(&["progress-bar"], "width", "60%");
        dom.add_element(&["health-indicator"]);
        dom
    }

    fn engine() -> PageEngine {
        PageEngine::mount(
            page(),
            EngineConfig::default(),
            Box::new(MemoryThemeStore::default()),
            false,
        )
    }

    #[test]
    fn mount_hides_targets_and_observes_them() {
        let engine = engine();
        let card = engine.dom().first_with_class("card").unwrap();
        assert_eq!(engine.dom().inline_style(card, "opacity"), Some("0"));
        assert!(engine.dom().is_observed(card));
        assert_eq!(engine.pending_reveals(), 2);
    }

    #[test]
    fn mount_zeroes_progress_bars() {
        let engine = engine();
        let bar = engine.dom().first_with_class("progress-bar").unwrap();
        assert_eq!(engine.dom().inline_style(bar, "width"), Some("0%"));
    }

    #[test]
    fn intersection_reveals_a_card() {
        let mut engine = engine();
        let card = engine.dom().first_with_class("card").unwrap();
        engine.handle_event(PageEvent::Intersections(vec![IntersectionEntry::new(
            card, 0.5,
        )]));
        assert!(engine.dom().has_class(card, "animate-in"));
        assert!(!engine.dom().is_observed(card));
    }

    #[test]
    fn missing_navbar_disables_scroll_handling() {
        let mut dom = PageDom::new();
        dom.add_element(&["card"]);
        let mut engine = PageEngine::mount(
            dom,
            EngineConfig::default(),
            Box::new(MemoryThemeStore::default()),
            false,
        );
        // Must be a silent no-op.
        engine.handle_event(PageEvent::Scroll { offset_y: 500.0 });
    }

    #[test]
    fn mount_builds_the_theme_from_the_store() {
        let mut store = MemoryThemeStore::default();
        store.store(Theme::Dark);
        let engine = PageEngine::mount(
            page(),
            EngineConfig::default(),
            Box::new(store),
            false, // system prefers light
        );
        assert_eq!(engine.theme(), Theme::Dark);
        let root = engine.dom().root();
        assert_eq!(engine.dom().attribute(root, "data-theme"), Some("dark"));
    }

    #[test]
    fn remount_never_panics() {
        let mut engine = engine();
        engine.remount(false);
        engine.remount(true);
    }

    #[test]
    fn unknown_timer_token_is_ignored() {
        let mut engine = engine();
        engine.handle_event(PageEvent::Timer(TimerToken::mint()));
    }
}
