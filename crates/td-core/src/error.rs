use thiserror::Error;

/// Coarse classification shared by every crate in the workspace.
///
/// - `Configuration`: the caller asked for something malformed (missing
///   feature, mismatched batch lengths, wrong point count).
/// - `Domain`: a physical relation was evaluated outside its valid range.
/// - `Consistency`: derivation stages were combined out of order or with
///   stale upstream results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Domain,
    Consistency,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TdError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Configuration error: {what}")]
    Configuration { what: String },

    #[error("Domain error: {what}")]
    Domain { what: String },

    #[error("Consistency error: {what}")]
    Consistency { what: &'static str },
}

impl TdError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TdError::NonFinite { .. } | TdError::Domain { .. } => ErrorKind::Domain,
            TdError::Configuration { .. } => ErrorKind::Configuration,
            TdError::Consistency { .. } => ErrorKind::Consistency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_is_a_domain_error() {
        let err = TdError::NonFinite {
            what: "Po_Po1",
            value: f64::NAN,
        };
        assert_eq!(err.kind(), ErrorKind::Domain);
        assert!(err.to_string().contains("Po_Po1"));
    }

    #[test]
    fn kinds_follow_variants() {
        let err = TdError::Configuration {
            what: "missing feature".into(),
        };
        assert_eq!(err.kind(), ErrorKind::Configuration);

        let err = TdError::Consistency { what: "stale" };
        assert_eq!(err.kind(), ErrorKind::Consistency);
    }
}
