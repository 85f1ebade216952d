//! Error types for picksheet.
//!
//! This module defines the centralized error type [`PicksheetError`] and a type
//! alias [`Result`]. Only the edges of the crate are fallible (reading config,
//! theme, and data files). Engine operations never fail: a lookup that cannot
//! be resolved is reported as "no match", an operation with no effect is a no-op.

use thiserror::Error;

/// The main error type for picksheet operations.
///
/// Most variants wrap underlying errors from external crates using `#[from]`
/// for automatic conversion.
///
/// # Examples
///
/// ```
/// use picksheet::PicksheetError;
///
/// fn validate_config() -> Result<(), PicksheetError> {
///     Err(PicksheetError::Config("Missing required field".to_string()))
/// }
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum PicksheetError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Candidate data could not be decoded.
    ///
    /// Wraps `serde_json` failures when loading item sequences.
    #[error("Data error: {0}")]
    Json(#[from] serde_json::Error),

    /// Theme parsing or lookup failed.
    ///
    /// The string describes which theme and what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for picksheet operations.
pub type Result<T> = std::result::Result<T, PicksheetError>;
