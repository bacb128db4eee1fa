//! Error types
//!
//! Nothing in the enhancement layer is allowed to take the page down: the
//! engine logs a failing component and keeps dispatching. These types give
//! that policy a shape.

use thiserror::Error;

/// A recoverable fault inside the enhancement layer
#[derive(Debug, Error)]
pub enum EnhanceError {
    /// A component step failed; the engine logs and continues
    #[error("component `{component}` failed: {message}")]
    Component {
        component: &'static str,
        message: String,
    },

    /// The preference store could not be read or written
    #[error("theme preference store: {0}")]
    Store(String),
}

impl EnhanceError {
    pub fn component(component: &'static str, message: impl Into<String>) -> Self {
        Self::Component {
            component,
            message: message.into(),
        }
    }
}
