use thiserror::Error;

/// Main error type for the match engine
#[derive(Error, Debug)]
pub enum MatchEngineError {
    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem errors (catalog or options files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Filter state that cannot describe a real query
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// Unrecognised value for a fixed option set
    #[error("Unknown {kind} '{value}'")]
    UnknownOption { kind: &'static str, value: String },

    /// Catalog errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl MatchEngineError {
    pub(crate) fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        MatchEngineError::UnknownOption {
            kind,
            value: value.into(),
        }
    }
}

impl From<String> for MatchEngineError {
    fn from(s: String) -> Self {
        MatchEngineError::Other(s)
    }
}

impl From<&str> for MatchEngineError {
    fn from(s: &str) -> Self {
        MatchEngineError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, MatchEngineError>;
