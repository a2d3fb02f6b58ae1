use td_core::TdError;
use td_meanline::DesignError;

pub type RecordResult<T> = Result<T, RecordError>;

#[derive(thiserror::Error, Debug)]
pub enum RecordError {
    #[error("Design error: {0}")]
    Design(#[from] DesignError),

    #[error("Configuration error: {what}")]
    Configuration { what: String },

    #[error("Template error: {what}")]
    Template { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<RecordError> for TdError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::Design(e) => e.into(),
            other => TdError::Configuration {
                what: other.to_string(),
            },
        }
    }
}
