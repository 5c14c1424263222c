//! # Demo Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Demo Error Categories                             │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │     Setup       │  │     Domain      │  │     Self-check          │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Config         │  │  Validation     │  │  CheckFailed            │ │
//! │  │  Telemetry      │  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  Every variant is fatal: main() returns it and the process exits 1.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use billing_core::ValidationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for demo runs.
pub type DemoResult<T> = Result<T, DemoError>;

#[derive(Debug, Error)]
pub enum DemoError {
    /// A computed value did not match the expected figure.
    #[error("Check '{check}' failed: expected {expected}, got {actual}")]
    CheckFailed {
        check: String,
        expected: String,
        actual: String,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A demo fixture was rejected by a domain constructor.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to initialise logging: {0}")]
    Telemetry(String),
}
