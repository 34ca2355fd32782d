//! Environment-driven configuration for the search server.
//!
//! `Config::load` is a pure function of the process environment: same
//! environment, same result. Validation happens once at startup and a
//! constructed `Config` is always internally valid.

use std::fmt;

use crate::error::{JesterError, Result};

/// Default context-size limit when `SEARCH_CONTEXT_SIZE` is unset.
pub const DEFAULT_CONTEXT_SIZE: i64 = 2000;

/// Reasoning effort passed through to the completion provider.
///
/// Opaque beyond the enum check; the provider owns its semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasoningEffort {
    Low,
    Medium,
    High,
}

impl ReasoningEffort {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasoningEffort::Low => "low",
            ReasoningEffort::Medium => "medium",
            ReasoningEffort::High => "high",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(ReasoningEffort::Low),
            "medium" => Some(ReasoningEffort::Medium),
            "high" => Some(ReasoningEffort::High),
            _ => None,
        }
    }
}

impl fmt::Display for ReasoningEffort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable search-server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub openai_api_key: String,
    pub search_context_size: i64,
    pub reasoning_effort: ReasoningEffort,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::load_from(|key| std::env::var(key).ok())
    }

    /// Load configuration through an environment lookup function.
    ///
    /// Empty values count as absent, matching the original server's
    /// falsy-value handling.
    pub fn load_from<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let openai_api_key = get("OPENAI_API_KEY").ok_or_else(|| {
            JesterError::Config("OPENAI_API_KEY environment variable is required".to_string())
        })?;

        let search_context_size = match get("SEARCH_CONTEXT_SIZE") {
            Some(raw) => raw.trim().parse::<i64>().map_err(|_| {
                JesterError::Config(format!(
                    "SEARCH_CONTEXT_SIZE must be an integer, got '{}'",
                    raw
                ))
            })?,
            None => DEFAULT_CONTEXT_SIZE,
        };

        let reasoning_effort = match get("REASONING_EFFORT") {
            Some(raw) => ReasoningEffort::parse(&raw).ok_or_else(|| {
                JesterError::Config("REASONING_EFFORT must be one of: low, medium, high".to_string())
            })?,
            None => ReasoningEffort::Medium,
        };

        Ok(Self {
            openai_api_key,
            search_context_size,
            reasoning_effort,
        })
    }
}
