//! Timer scheduler
//!
//! Drives the engine's time-based events: the progress replay delay
//! (one-shot) and the health poll interval (repeating). Timers live in a
//! slotmap guarded by a mutex; a background thread checks for due timers
//! every few milliseconds and posts `Timer(token)` events into the engine
//! channel. The thread is stopped and joined when the scheduler drops.
//!
//! Tests can skip the thread entirely and call [`TimerScheduler::run_due`]
//! to fire due timers deterministically.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use glint_core::{PageEvent, TimerToken};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a registered timer
    struct TimerKey;
}

/// A scheduled timer
#[derive(Debug, Clone, Copy)]
struct TimerEntry {
    token: TimerToken,
    deadline: Instant,
    /// Re-arm interval; `None` means one-shot
    repeat: Option<Duration>,
}

/// Internal state of the timer scheduler
struct SchedulerInner {
    timers: SlotMap<TimerKey, TimerEntry>,
}

/// Background timer driver posting `Timer` events to the engine channel
pub struct TimerScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
    events: Sender<PageEvent>,
    /// Stop signal for the background thread
    stop_flag: Arc<AtomicBool>,
    /// Background thread handle (if running)
    thread_handle: Option<JoinHandle<()>>,
}

impl TimerScheduler {
    /// Poll period of the background thread
    const TICK: Duration = Duration::from_millis(10);

    pub fn new(events: Sender<PageEvent>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                timers: SlotMap::with_key(),
            })),
            events,
            stop_flag: Arc::new(AtomicBool::new(false)),
            thread_handle: None,
        }
    }

    /// Schedule a one-shot timer firing after `delay`
    pub fn schedule_once(&self, token: TimerToken, delay: Duration) {
        let mut inner = self.inner.lock().unwrap();
        inner.timers.insert(TimerEntry {
            token,
            deadline: Instant::now() + delay,
            repeat: None,
        });
    }

    /// Schedule a repeating timer; the first fire is one interval out
    pub fn schedule_repeating(&self, token: TimerToken, interval: Duration) {
        let mut inner = self.inner.lock().unwrap();
        inner.timers.insert(TimerEntry {
            token,
            deadline: Instant::now() + interval,
            repeat: Some(interval),
        });
    }

    /// Remove every timer carrying `token`
    pub fn cancel(&self, token: TimerToken) {
        let mut inner = self.inner.lock().unwrap();
        inner.timers.retain(|_, entry| entry.token != token);
    }

    /// Number of timers currently registered
    pub fn pending_count(&self) -> usize {
        self.inner.lock().unwrap().timers.len()
    }

    /// Fire every timer currently due; returns how many fired
    ///
    /// One-shot timers are removed, repeating timers are re-armed from
    /// their previous deadline so the cadence doesn't drift.
    pub fn run_due(&self) -> usize {
        fire_due(&self.inner, &self.events)
    }

    /// Start the background thread
    pub fn start(&mut self) {
        if self.thread_handle.is_some() {
            return; // Already running
        }

        let inner = Arc::clone(&self.inner);
        let events = self.events.clone();
        let stop_flag = Arc::clone(&self.stop_flag);

        self.thread_handle = Some(thread::spawn(move || {
            while !stop_flag.load(Ordering::Relaxed) {
                fire_due(&inner, &events);
                thread::sleep(Self::TICK);
            }
        }));
    }

    /// Stop the background thread
    pub fn stop(&mut self) {
        self.stop_flag.store(true, Ordering::Relaxed);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
        self.stop_flag.store(false, Ordering::Relaxed);
    }

    pub fn is_running(&self) -> bool {
        self.thread_handle.is_some()
    }
}

impl Drop for TimerScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Fire due timers out of `inner`, posting into `events`
fn fire_due(inner: &Mutex<SchedulerInner>, events: &Sender<PageEvent>) -> usize {
    let now = Instant::now();
    let mut fired = 0;

    let due: Vec<(TimerKey, TimerEntry)> = {
        let inner = inner.lock().unwrap();
        inner
            .timers
            .iter()
            .filter(|(_, entry)| entry.deadline <= now)
            .map(|(key, entry)| (key, *entry))
            .collect()
    };

    for (key, entry) in due {
        // A closed channel means the engine is shutting down.
        if events.send(PageEvent::Timer(entry.token)).is_err() {
            break;
        }
        fired += 1;

        let mut inner = inner.lock().unwrap();
        match entry.repeat {
            Some(interval) => {
                if let Some(slot) = inner.timers.get_mut(key) {
                    slot.deadline = entry.deadline + interval;
                }
            }
            None => {
                inner.timers.remove(key);
            }
        }
    }
    fired
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn one_shot_fires_once_and_is_removed() {
        let (tx, rx) = mpsc::channel();
        let scheduler = TimerScheduler::new(tx);
        let token = TimerToken::mint();
        scheduler.schedule_once(token, Duration::ZERO);

        assert_eq!(scheduler.run_due(), 1);
        assert_eq!(rx.try_recv().unwrap(), PageEvent::Timer(token));
        assert_eq!(scheduler.pending_count(), 0);

        // Nothing left to fire.
        assert_eq!(scheduler.run_due(), 0);
    }

    #[test]
    fn repeating_timer_rearms() {
        let (tx, rx) = mpsc::channel();
        let scheduler = TimerScheduler::new(tx);
        let token = TimerToken::mint();
        scheduler.schedule_repeating(token, Duration::ZERO);

        assert_eq!(scheduler.run_due(), 1);
        assert_eq!(scheduler.pending_count(), 1);
        assert_eq!(scheduler.run_due(), 1);
        assert_eq!(rx.try_iter().count(), 2);
    }

    #[test]
    fn undue_timer_does_not_fire() {
        let (tx, rx) = mpsc::channel();
        let scheduler = TimerScheduler::new(tx);
        scheduler.schedule_once(TimerToken::mint(), Duration::from_secs(3600));

        assert_eq!(scheduler.run_due(), 0);
        assert!(rx.try_recv().is_err());
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn cancel_removes_all_entries_for_token() {
        let (tx, _rx) = mpsc::channel();
        let scheduler = TimerScheduler::new(tx);
        let token = TimerToken::mint();
        scheduler.schedule_once(token, Duration::ZERO);
        scheduler.schedule_repeating(token, Duration::from_secs(1));

        scheduler.cancel(token);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn background_thread_delivers_timers() {
        let (tx, rx) = mpsc::channel();
        let mut scheduler = TimerScheduler::new(tx);
        let token = TimerToken::mint();
        scheduler.schedule_once(token, Duration::from_millis(5));
        scheduler.start();

        let event = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(event, PageEvent::Timer(token));
        scheduler.stop();
        assert!(!scheduler.is_running());
    }
}
