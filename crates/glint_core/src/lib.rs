//! Glint Core
//!
//! Foundational primitives for the Glint page enhancement engine:
//!
//! - **Events & Effects**: the vocabulary between host and components,
//!   events in and presentation/host effects out
//! - **State Machines**: scroll director, theme preference, health status
//! - **Geometry**: viewport intersection math for hosts without a native
//!   visibility primitive
//! - **Configuration**: every production constant as a named, tunable field
//!
//! # Example
//!
//! ```rust
//! use glint_core::scroll::{NavVisibility, OffsetClass, ScrollDirector};
//!
//! let mut director = ScrollDirector::new(100.0);
//!
//! // Scrolling down past the threshold hides the navbar.
//! let (class, visibility) = director.on_scroll(150.0);
//! assert_eq!(class, OffsetClass::Compact);
//! assert_eq!(visibility, NavVisibility::Hidden);
//!
//! // The first upward step shows it again.
//! let (_, visibility) = director.on_scroll(120.0);
//! assert_eq!(visibility, NavVisibility::Shown);
//! ```

pub mod config;
pub mod effects;
pub mod error;
pub mod events;
pub mod geometry;
pub mod health;
pub mod node;
pub mod scroll;
pub mod theme;

pub use config::{HealthConfig, NavConfig, ProgressConfig, RevealConfig, ThemeConfig};
pub use effects::{Effect, Effects, WatchOptions};
pub use error::EnhanceError;
pub use events::{IntersectionEntry, PageEvent};
pub use geometry::{intersection_ratio, Rect};
pub use health::HealthStatus;
pub use node::{NodeId, NodeIdGenerator, TimerToken};
pub use scroll::{NavVisibility, OffsetClass, ScrollDirector};
pub use theme::{MemoryThemeStore, Theme, ThemeManager, ThemeStore};
