//! Errors raised by registry validation and conversion calls
//!
//! Validation errors are fatal to construction: the converter is never
//! built on failure. `UnknownType` is fatal to the single call only.

use tally_core::QtyError;
use thiserror::Error;

/// Error type for converter construction and conversion calls
#[derive(Debug, Clone, Error)]
pub enum ConvertError {
    /// A type definition has no id (absent or empty)
    #[error("cannot register a type without an id")]
    MissingId,

    /// A type definition has no qty field
    #[error("type '{0}' does not have an associated qty")]
    MissingQty(String),

    /// A qty is present but not a numeric value
    #[error("type '{0}' has a qty that is not numeric")]
    NotNumeric(String),

    /// A qty is zero or negative
    #[error("type '{0}' has a qty that is not a positive number")]
    NonPositive(String),

    /// A conversion call referenced an unregistered type id
    #[error("{0} is not a valid type")]
    UnknownType(String),

    /// Numeric error during conversion arithmetic
    #[error("numeric error: {0}")]
    Qty(#[from] QtyError),
}
