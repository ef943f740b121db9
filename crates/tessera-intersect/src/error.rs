//! Error types for intersection settings.

use thiserror::Error;

/// Errors raised when validating intersection tolerances.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToleranceError {
    /// A tolerance is below zero.
    #[error("{name} must not be negative, got {value}")]
    Negative {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A tolerance is NaN or infinite.
    #[error("{0} must be finite")]
    NonFinite(&'static str),
}

/// Result type for tolerance validation.
pub type Result<T> = std::result::Result<T, ToleranceError>;
