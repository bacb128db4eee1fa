//! Glint Runtime
//!
//! The assembly layer: everything needed to run the enhancement engine
//! against a page.
//!
//! - **PageEngine**: component fan-out and effect routing
//! - **PageDom**: in-memory page mirror, query surface and effect sink
//! - **TimerScheduler**: background timer thread posting into the engine
//! - **NavbarComponent / ThemeComponent**: scroll and theme renderers
//! - **FileThemeStore**: TOML-file preference persistence
//!
//! # Example
//!
//! ```rust
//! use glint_core::{MemoryThemeStore, PageEvent};
//! use glint_runtime::{EngineConfig, PageDom, PageEngine};
//!
//! let mut dom = PageDom::new();
//! dom.add_element(&["navbar"]);
//! dom.add_element(&["card"]);
//!
//! let mut engine = PageEngine::mount(
//!     dom,
//!     EngineConfig::default(),
//!     Box::new(MemoryThemeStore::default()),
//!     false,
//! );
//! engine.handle_event(PageEvent::Scroll { offset_y: 150.0 });
//! ```

pub mod dom;
pub mod engine;
pub mod navbar;
pub mod prefs;
pub mod scheduler;
pub mod theming;

pub use dom::{PageDom, PageNode};
pub use engine::{EngineConfig, PageEngine};
pub use navbar::NavbarComponent;
pub use prefs::FileThemeStore;
pub use scheduler::TimerScheduler;
pub use theming::ThemeComponent;
