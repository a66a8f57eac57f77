//! Error handling module for kitplan
//!
//! Provides centralized error handling with proper error types using thiserror.
//! The reconciliation engine itself is infallible for well-formed input; these
//! errors come from the backend seam, the session setters and the selection
//! checks. Snapshot and configuration files are loaded with `anyhow` instead.

use thiserror::Error;

/// Main error type for kitplan
#[derive(Error, Debug)]
pub enum KitplanError {
    /// Validation errors (selection checks, user input)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Attempt to toggle a component whose checkbox is locked
    #[error("component '{0}' is locked and cannot be toggled")]
    Locked(String),

    /// A component name that does not exist in the current view
    #[error("unknown component '{0}'")]
    UnknownComponent(String),

    /// A restricted component that still has no package source
    #[error("tool '{0}' still has no package source")]
    MissingSource(String),

    /// Version strings that cannot be compared
    #[error("Version error: {0}")]
    Version(String),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for kitplan operations
pub type Result<T> = std::result::Result<T, KitplanError>;

impl KitplanError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a version error
    pub fn version(msg: impl Into<String>) -> Self {
        Self::Version(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}
