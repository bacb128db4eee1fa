//! Poll execution
//!
//! Each poll runs on its own worker thread and posts its outcome back to
//! the engine as a `HealthResolved` event. A poll that hasn't resolved
//! never blocks the next scheduled one; outcomes are applied in the order
//! they arrive on the channel, so the latest-resolved result wins.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use glint_core::PageEvent;

use crate::client::StatusClient;

/// Run one poll off-thread, posting the outcome to the engine channel
///
/// A closed channel means the engine is gone; the outcome is dropped
/// silently.
pub fn spawn_poll(client: Arc<StatusClient>, events: Sender<PageEvent>) -> JoinHandle<()> {
    thread::spawn(move || {
        let status = client.poll();
        let _ = events.send(PageEvent::HealthResolved(status));
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{HealthConfig, HealthStatus};
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn failed_poll_posts_unhealthy() {
        let mut config = HealthConfig::default();
        config.base_url = "http://192.0.2.1:9".to_string();
        config.request_timeout = Duration::from_millis(200);
        let client = Arc::new(StatusClient::from_config(&config));

        let (tx, rx) = mpsc::channel();
        spawn_poll(client, tx).join().unwrap();

        match rx.recv().unwrap() {
            PageEvent::HealthResolved(status) => assert_eq!(status, HealthStatus::Unhealthy),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn dropped_engine_is_tolerated() {
        let mut config = HealthConfig::default();
        config.base_url = "http://192.0.2.1:9".to_string();
        config.request_timeout = Duration::from_millis(200);
        let client = Arc::new(StatusClient::from_config(&config));

        let (tx, rx) = mpsc::channel();
        drop(rx);
        // Must not panic even though nobody is listening.
        spawn_poll(client, tx).join().unwrap();
    }
}
