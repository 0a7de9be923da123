//! Error types for the Cogspin engine.
//!
//! All crates return `CogspinResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the Cogspin engine.
#[derive(Debug, Error)]
pub enum CogspinError {
    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Accelerator backend error (allocation, upload, or dispatch).
    ///
    /// Backend faults are fatal: a failed init aborts before the render
    /// loop starts, and a failed per-frame dispatch aborts the loop —
    /// a skipped coupling step would desynchronize host and device state.
    #[error("Backend error: {0}")]
    Backend(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A simulation invariant was violated (e.g., non-unit orientation).
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Convenience alias for `Result<T, CogspinError>`.
pub type CogspinResult<T> = Result<T, CogspinError>;
