//! Health status model
//!
//! The backend reports a status word; the engine passes it through
//! verbatim rather than validating it against the known set, so an
//! unexpected word still renders (as its own class token and label).

/// Last-known operational state of the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
    /// Initial value before the first poll resolves
    Unknown,
    /// An unrecognized status word, carried verbatim
    Other(String),
}

impl HealthStatus {
    /// Interpret a status word from the endpoint
    pub fn from_word(word: &str) -> Self {
        match word {
            "healthy" => Self::Healthy,
            "degraded" => Self::Degraded,
            "unhealthy" => Self::Unhealthy,
            "unknown" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }

    /// The raw status word, used as the indicator's category class token
    pub fn as_word(&self) -> &str {
        match self {
            Self::Healthy => "healthy",
            Self::Degraded => "degraded",
            Self::Unhealthy => "unhealthy",
            Self::Unknown => "unknown",
            Self::Other(word) => word,
        }
    }

    /// Indicator text: the status word with its first letter capitalized
    pub fn label(&self) -> String {
        let word = self.as_word();
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self::Unknown
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_word())
    }
}
