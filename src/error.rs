//! Error types for Jester

use thiserror::Error;

use crate::registry::CapabilityKind;

/// Result type alias for Jester operations
pub type Result<T> = std::result::Result<T, JesterError>;

/// Main error type for Jester
///
/// Startup errors (`Config`, `Registration`) are fatal and terminate the
/// process. Everything else is per-request: caught at the dispatcher
/// boundary and reported to the caller as a failed result.
#[derive(Error, Debug)]
pub enum JesterError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Registration error: {0}")]
    Registration(String),

    #[error("Unknown {kind}: {name}")]
    NotFound { kind: CapabilityKind, name: String },

    #[error("{0}")]
    InvalidArgument(String),

    /// Handler failure. The message carries the handler's context prefix
    /// plus the original cause text, e.g. "Search failed: <cause>".
    #[error("{0}")]
    Handler(String),

    /// Upstream completion-provider failure, message included verbatim.
    #[error("{0}")]
    Provider(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl JesterError {
    /// Get error code for the MCP protocol
    pub fn code(&self) -> i64 {
        match self {
            JesterError::NotFound { .. } => -32001,
            JesterError::InvalidArgument(_) => -32602,
            _ => -32000,
        }
    }
}
