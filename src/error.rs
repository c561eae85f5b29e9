//! Error types for the estimate engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during estimate generation and
//! persistence.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the estimate engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. The
/// allocation algorithm itself is total over its documented input domain and
/// never produces an error; every variant here originates from configuration
/// loading or the storage boundary.
///
/// # Example
///
/// ```
/// use estimate_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
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

    /// No event exists with the given identifier.
    #[error("Event not found: {event_id}")]
    EventNotFound {
        /// The event identifier that was not found.
        event_id: i64,
    },

    /// No estimate exists with the given identifier.
    #[error("Estimate not found: {estimate_id}")]
    EstimateNotFound {
        /// The estimate identifier that was not found.
        estimate_id: Uuid,
    },

    /// No line item exists with the given identifier.
    #[error("Estimate item not found: {item_id}")]
    ItemNotFound {
        /// The item identifier that was not found.
        item_id: Uuid,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
