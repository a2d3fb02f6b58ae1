use crate::TdError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, TdError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TdError::NonFinite { what, value: v })
    }
}

/// Natural log that refuses non-positive arguments instead of returning NaN/-inf.
pub fn checked_ln(v: Real, what: &'static str) -> Result<Real, TdError> {
    if v > 0.0 && v.is_finite() {
        Ok(v.ln())
    } else {
        Err(TdError::Domain {
            what: format!("logarithm of non-positive {what} ({v})"),
        })
    }
}

/// Square root that refuses negative arguments instead of returning NaN.
pub fn checked_sqrt(v: Real, what: &'static str) -> Result<Real, TdError> {
    if v >= 0.0 && v.is_finite() {
        Ok(v.sqrt())
    } else {
        Err(TdError::Domain {
            what: format!("square root of negative {what} ({v})"),
        })
    }
}

/// Division that refuses a (near-)zero denominator.
pub fn checked_div(num: Real, den: Real, what: &'static str) -> Result<Real, TdError> {
    if den.abs() > Real::EPSILON * num.abs().max(1.0) {
        ensure_finite(num / den, what)
    } else {
        Err(TdError::Domain {
            what: format!("division by zero in {what}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn checked_ln_rejects_zero_and_negative() {
        assert!(checked_ln(0.0, "To_To1").is_err());
        assert!(checked_ln(-1.0, "To_To1").is_err());
        assert_eq!(checked_ln(1.0, "To_To1").unwrap(), 0.0);
    }

    #[test]
    fn checked_sqrt_and_div() {
        assert!(checked_sqrt(-1e-3, "cpTo/U^2").is_err());
        assert_eq!(checked_sqrt(4.0, "x").unwrap(), 2.0);
        assert!(checked_div(1.0, 0.0, "Q/Q1").is_err());
        assert_eq!(checked_div(1.0, 4.0, "x").unwrap(), 0.25);
    }
}
