//! Perfect-gas compressible flow relations.
//!
//! Notation:
//! ```text
//! To/T   = 1 + (γ-1)/2 Ma²
//! Po/P   = (To/T)^(γ/(γ-1))
//! V/√(cp To) = Ma √(γ-1) / √(To/T)
//! Q = ṁ√(cp To)/(A Po) = γ/√(γ-1) · Ma · (To/T)^(-(γ+1)/(2(γ-1)))
//! ```

use crate::error::{FlowError, FlowResult};

/// Upper bound on Mach number accepted by [`v_cpto_from_mach`].
///
/// Capacity peaks at sonic conditions; beyond it the row is choked and the
/// capacity relation no longer has a unique subsonic inverse.
pub const CHOKING_MACH: f64 = 1.0;

fn check_gamma(ga: f64) -> FlowResult<()> {
    if ga.is_finite() && ga > 1.0 {
        Ok(())
    } else {
        Err(FlowError::InvalidArg {
            what: "ratio of specific heats",
            value: ga,
        })
    }
}

fn check_mach(ma: f64) -> FlowResult<()> {
    if ma.is_finite() && ma >= 0.0 {
        Ok(())
    } else {
        Err(FlowError::InvalidArg {
            what: "Mach number",
            value: ma,
        })
    }
}

#[inline]
fn to_t(ma: f64, ga: f64) -> f64 {
    1.0 + 0.5 * (ga - 1.0) * ma * ma
}

/// Supremum of `V/sqrt(cp*To)`, approached as Ma tends to infinity.
pub fn max_v_cpto() -> f64 {
    core::f64::consts::SQRT_2
}

/// Stagnation-to-static temperature ratio `To/T`.
pub fn to_t_from_mach(ma: f64, ga: f64) -> FlowResult<f64> {
    check_gamma(ga)?;
    check_mach(ma)?;
    Ok(to_t(ma, ga))
}

/// Stagnation-to-static pressure ratio `Po/P`.
pub fn po_p_from_mach(ma: f64, ga: f64) -> FlowResult<f64> {
    check_gamma(ga)?;
    check_mach(ma)?;
    Ok(to_t(ma, ga).powf(ga / (ga - 1.0)))
}

/// Normalised velocity `V/sqrt(cp*To)` for a subsonic (unchoked) Mach number.
pub fn v_cpto_from_mach(ma: f64, ga: f64) -> FlowResult<f64> {
    check_gamma(ga)?;
    check_mach(ma)?;
    if ma > CHOKING_MACH {
        return Err(FlowError::OutOfRange {
            what: "Mach number (choked)",
            value: ma,
            limit: CHOKING_MACH,
        });
    }
    Ok(ma * (ga - 1.0).sqrt() / to_t(ma, ga).sqrt())
}

/// Mach number from normalised velocity `V/sqrt(cp*To)`.
///
/// Valid for `0 <= v < sqrt(2)`; the upper bound corresponds to expansion
/// to zero static temperature.
pub fn mach_from_v_cpto(v: f64, ga: f64) -> FlowResult<f64> {
    check_gamma(ga)?;
    if !v.is_finite() || v < 0.0 {
        return Err(FlowError::InvalidArg {
            what: "normalised velocity",
            value: v,
        });
    }
    let v_sq = v * v;
    let denom = (ga - 1.0) * (1.0 - 0.5 * v_sq);
    if denom <= 0.0 {
        return Err(FlowError::OutOfRange {
            what: "normalised velocity",
            value: v,
            limit: max_v_cpto(),
        });
    }
    Ok((v_sq / denom).sqrt())
}

/// Non-dimensional mass-flow capacity `mdot*sqrt(cp*To)/(A*Po)`.
pub fn capacity_from_mach(ma: f64, ga: f64) -> FlowResult<f64> {
    check_gamma(ga)?;
    check_mach(ma)?;
    let exponent = -0.5 * (ga + 1.0) / (ga - 1.0);
    Ok(ga / (ga - 1.0).sqrt() * ma * to_t(ma, ga).powf(exponent))
}

/// Apply a relation to every element of a slice, failing on the first invalid one.
pub fn elementwise(
    values: &[f64],
    ga: f64,
    relation: fn(f64, f64) -> FlowResult<f64>,
) -> FlowResult<Vec<f64>> {
    values.iter().map(|&v| relation(v, ga)).collect()
}
