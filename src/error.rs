//! Error types for the Leave Reconciliation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only the configuration surface produces errors; the reconciliation core
//! is total and degrades invalid input to structured advisories instead.

use thiserror::Error;

/// The main error type for the Leave Reconciliation Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No holiday calendar exists for the requested region.
    #[error("Holiday calendar not found for region: {region}")]
    CalendarNotFound {
        /// The region that has no calendar entries.
        region: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
