//! Error types for mean-line design derivations.

use td_compflow::FlowError;
use td_core::{ErrorKind, TdError};
use td_surrogate::SurrogateError;
use thiserror::Error;

/// Errors raised while deriving or scaling a design.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignError {
    #[error("Configuration error: {what}")]
    Configuration { what: String },

    #[error("Domain error: {what}")]
    Domain { what: String },

    #[error("Consistency error: {what}")]
    Consistency { what: &'static str },

    #[error("Compressible flow: {0}")]
    Flow(#[from] FlowError),

    #[error("Surrogate: {0}")]
    Surrogate(#[from] SurrogateError),

    #[error(transparent)]
    Core(#[from] TdError),
}

pub type DesignResult<T> = Result<T, DesignError>;

impl DesignError {
    pub(crate) fn config(what: impl Into<String>) -> Self {
        DesignError::Configuration { what: what.into() }
    }

    pub(crate) fn domain(what: impl Into<String>) -> Self {
        DesignError::Domain { what: what.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DesignError::Configuration { .. } => ErrorKind::Configuration,
            DesignError::Domain { .. } | DesignError::Flow(_) => ErrorKind::Domain,
            DesignError::Consistency { .. } => ErrorKind::Consistency,
            DesignError::Surrogate(e) => TdError::from(e.clone()).kind(),
            DesignError::Core(e) => e.kind(),
        }
    }
}

impl From<DesignError> for TdError {
    fn from(e: DesignError) -> Self {
        match e {
            DesignError::Configuration { what } => TdError::Configuration { what },
            DesignError::Domain { what } => TdError::Domain { what },
            DesignError::Consistency { what } => TdError::Consistency { what },
            DesignError::Flow(e) => e.into(),
            DesignError::Surrogate(e) => e.into(),
            DesignError::Core(e) => e,
        }
    }
}
