use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Shortlist length for ranked paths
pub const DEFAULT_TOP_N: usize = 10;

/// Environment override for `top_n`
pub const TOP_N_ENV: &str = "TALENT_MATCH_TOP_N";

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

/// Engine options.
///
/// # Examples
///
/// ```
/// use talent_match_engine::EngineOptions;
///
/// let options = EngineOptions::from_json(r#"{"top_n": 5}"#).unwrap();
/// assert_eq!(options.top_n, 5);
///
/// let defaults = EngineOptions::from_json("{}").unwrap();
/// assert_eq!(defaults.top_n, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Maximum candidates returned by the arbitrated and balanced-exposure paths (1-10)
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl EngineOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        Ok(options.sanitized())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Defaults, with `TALENT_MATCH_TOP_N` applied when set and parseable
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(raw) = std::env::var(TOP_N_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(top_n) => self.top_n = top_n,
                Err(_) => tracing::warn!(value = %raw, "ignoring unparseable {}", TOP_N_ENV),
            }
        }
        self.sanitized()
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self.sanitized()
    }

    /// `top_n` of zero resets to the default; anything above the default is capped
    pub(crate) fn sanitized(mut self) -> Self {
        if self.top_n == 0 {
            tracing::warn!(default = DEFAULT_TOP_N, "top_n must be positive, using default");
            self.top_n = DEFAULT_TOP_N;
        } else if self.top_n > DEFAULT_TOP_N {
            tracing::warn!(requested = self.top_n, max = DEFAULT_TOP_N, "top_n capped");
            self.top_n = DEFAULT_TOP_N;
        }
        self
    }
}
