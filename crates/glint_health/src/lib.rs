//! Glint Health
//!
//! Periodic backend health checking for the enhancement layer:
//!
//! - **StatusClient**: one idempotent `GET /health`, failures collapse to
//!   `Unhealthy`
//! - **HealthMonitor**: pure indicator-rendering component
//! - **spawn_poll**: worker-thread execution posting outcomes back to the
//!   engine channel
//!
//! The poll loop is best-effort by design: it logs failures and keeps
//! going, and must never take the page down.

pub mod client;
pub mod monitor;
pub mod poller;

pub use client::{StatusClient, StatusError};
pub use monitor::HealthMonitor;
pub use poller::spawn_poll;
