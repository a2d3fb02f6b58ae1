//! Compressible flow errors.

use td_core::TdError;
use thiserror::Error;

/// Result type for compressible flow relations.
pub type FlowResult<T> = Result<T, FlowError>;

/// Errors raised when a relation is evaluated outside its valid domain.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    /// Invalid argument (gamma <= 1, negative Mach, ...).
    #[error("Invalid argument: {what} = {value}")]
    InvalidArg { what: &'static str, value: f64 },

    /// Value outside the relation's valid range.
    #[error("Value out of range for {what}: {value} (valid up to {limit})")]
    OutOfRange {
        what: &'static str,
        value: f64,
        limit: f64,
    },
}

impl From<FlowError> for TdError {
    fn from(err: FlowError) -> Self {
        TdError::Domain {
            what: err.to_string(),
        }
    }
}
