//! Surrogate adapter errors.

use td_core::TdError;
use thiserror::Error;

/// Result type for surrogate operations.
pub type SurrogateResult<T> = Result<T, SurrogateError>;

/// Errors raised by the surrogate adapter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurrogateError {
    /// A model's declared feature is absent from the query table.
    #[error("Model '{model}' requires feature '{feature}' which was not supplied")]
    MissingFeature { model: String, feature: String },

    /// A column's length disagrees with the rest of the batch.
    #[error("Feature column '{column}' has {found} points, expected {expected}")]
    BatchLength {
        column: String,
        expected: usize,
        found: usize,
    },

    /// No model is registered under the requested quantity name.
    #[error("No surrogate registered for quantity '{name}'")]
    UnknownQuantity { name: String },

    /// Model declared with an unusable feature set or range.
    #[error("Invalid model '{model}': {what}")]
    InvalidModel { model: String, what: String },

    /// The backend returned the wrong number of predictions.
    #[error("Model '{model}' returned {found} predictions for {expected} points")]
    PredictionLength {
        model: String,
        expected: usize,
        found: usize,
    },

    /// The backend itself failed.
    #[error("Backend error in model '{model}': {message}")]
    Backend { model: String, message: String },
}

impl From<SurrogateError> for TdError {
    fn from(err: SurrogateError) -> Self {
        match err {
            SurrogateError::Backend { .. } => TdError::Domain {
                what: err.to_string(),
            },
            other => TdError::Configuration {
                what: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use td_core::ErrorKind;

    #[test]
    fn missing_feature_is_configuration_error() {
        let err = SurrogateError::MissingFeature {
            model: "Yp_stator".into(),
            feature: "Al2a".into(),
        };
        assert!(err.to_string().contains("Al2a"));
        let td: TdError = err.into();
        assert_eq!(td.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn backend_failure_is_domain_error() {
        let err = SurrogateError::Backend {
            model: "Al3".into(),
            message: "NaN in kernel".into(),
        };
        let td: TdError = err.into();
        assert_eq!(td.kind(), ErrorKind::Domain);
    }
}
