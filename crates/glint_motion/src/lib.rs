//! Glint Motion
//!
//! The watch-then-animate core of the enhancement layer:
//!
//! - **Visibility Watcher**: one-shot per-element visibility lifecycle
//!   over batched host intersection reports
//! - **Reveal Animator**: hidden → revealed transition, marker-class based
//! - **Progress Bar Animator**: capture / reset / delayed replay of inline
//!   target widths
//!
//! All three are pure components: events in, [`glint_core::Effect`]s out.

pub mod progress;
pub mod reveal;
pub mod watcher;

pub use progress::ProgressAnimator;
pub use reveal::RevealAnimator;
pub use watcher::{VisibilityWatcher, WatchState};
