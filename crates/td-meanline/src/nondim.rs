//! Non-dimensional stage state.
//!
//! Velocities are normalised by blade speed `U`, stagnation quantities by
//! their stator-inlet values, and areas by the stator-inlet area. The
//! derivation follows the stage from inlet to exit:
//!
//! ```text
//! Vx/U    = phi · [zeta_stator, 1, 1]
//! Vt/U    = Vx/U · tan(Al)            Vt_rel/U = Vt/U - 1
//! U/√(cpTo1) = V2/√(cpTo) at M2  ÷  V2/U
//! cpTo/U² = [1/U², 1/U², 1/U² - psi]
//! Δs/cp   = -(1 - 1/(1 - eta_lost)) · ln(To3/To1)
//! Po/Po1  = exp(γ/(γ-1) · (ln(To/To1) + s/cp))
//! A/A1    = √(To/To1) / (Po/Po1) / (Q/Q1) · cos(Al1)/cos(Al)
//! ```

use crate::correlations::{Correlations, PointCorrelations};
use crate::error::{DesignError, DesignResult};
use crate::inputs::{DesignInputs, DesignPoint};
use td_compflow::IdealGas;
use td_core::{PerStation, Station, checked_div, checked_ln, checked_sqrt, ensure_finite};
use tracing::debug;

/// Fully resolved non-dimensional state of one design point.
#[derive(Clone, Debug, PartialEq)]
pub struct NonDimensionalState {
    pub point: DesignPoint,
    /// Absolute flow angle [deg].
    pub al: PerStation<f64>,
    /// Relative flow angle [deg].
    pub al_rel: PerStation<f64>,
    pub vx_u: PerStation<f64>,
    pub vt_u: PerStation<f64>,
    pub v_u: PerStation<f64>,
    pub vt_rel_u: PerStation<f64>,
    pub v_rel_u: PerStation<f64>,
    /// Blade speed over `sqrt(cp To1)`.
    pub u_sqrt_cp_to1: f64,
    /// `cp To / U²`.
    pub cp_to_u2: PerStation<f64>,
    pub ma: PerStation<f64>,
    pub ma_rel: PerStation<f64>,
    /// Mass-flow capacity `mdot sqrt(cp To)/(A Po)`.
    pub capacity: PerStation<f64>,
    pub to_to1: PerStation<f64>,
    /// Entropy rise over cp.
    pub s_cp: PerStation<f64>,
    pub po_po1: PerStation<f64>,
    pub po_rel_po1: PerStation<f64>,
    pub t_to1: PerStation<f64>,
    pub p_po1: PerStation<f64>,
    /// Annulus area over stator-inlet area.
    pub ax_ax1: PerStation<f64>,
    pub eta_lost: f64,
}

impl NonDimensionalState {
    /// Static-temperature reaction `(T3 - T2)/(T3 - T1)`.
    pub fn reaction(&self) -> f64 {
        let t = &self.t_to1;
        (t[Station::Exit] - t[Station::Inter]) / (t[Station::Exit] - t[Station::Inlet])
    }

    /// Total-to-total efficiency in percent.
    pub fn efficiency(&self) -> f64 {
        100.0 - 100.0 * self.eta_lost
    }
}

/// Resolve every point of a batch.
///
/// # Errors
/// `Consistency` if `correlations` were predicted for different inputs, and
/// the first `Domain` error of any point otherwise.
pub fn resolve_states(
    inputs: &DesignInputs,
    correlations: &Correlations,
    gas: &IdealGas,
) -> DesignResult<Vec<NonDimensionalState>> {
    if correlations.inputs() != inputs {
        return Err(DesignError::Consistency {
            what: "correlations were predicted for different design inputs",
        });
    }
    let states = inputs
        .points()
        .zip(correlations.points())
        .map(|(point, corr)| resolve_point(point, corr, gas))
        .collect::<DesignResult<Vec<_>>>()?;
    debug!(n = states.len(), "resolved non-dimensional states");
    Ok(states)
}

/// Resolve a single design point.
pub fn resolve_point(
    point: DesignPoint,
    corr: &PointCorrelations,
    gas: &IdealGas,
) -> DesignResult<NonDimensionalState> {
    let DesignPoint { phi, psi, m2, .. } = point;
    let al = corr.al;
    let zeta = PerStation::new(corr.zeta_stator, 1.0, 1.0);

    let vx_u = zeta.map(|z| phi * z);
    let vt_u = PerStation::from_fn(|s| vx_u[s] * al[s].to_radians().tan());
    let v_u = PerStation::from_fn(|s| vx_u[s].hypot(vt_u[s]));
    let vt_rel_u = vt_u.map(|vt| vt - 1.0);
    let v_rel_u = PerStation::from_fn(|s| vx_u[s].hypot(vt_rel_u[s]));
    let al_rel = PerStation::from_fn(|s| vt_rel_u[s].atan2(vx_u[s]).to_degrees());

    let v_cpto2 = gas.v_cpto_from_mach(m2)?;
    let u_sqrt_cp_to1 = checked_div(v_cpto2, v_u[Station::Inter], "U/sqrt(cpTo1)")?;
    let cp_to1_u2 = checked_div(1.0, u_sqrt_cp_to1 * u_sqrt_cp_to1, "cpTo1/U^2")?;
    let cp_to_u2 = PerStation::new(cp_to1_u2, cp_to1_u2, cp_to1_u2 - psi);
    if cp_to_u2[Station::Exit] <= 0.0 {
        return Err(DesignError::domain(format!(
            "loading coefficient {psi} exceeds cpTo2/U^2 = {cp_to1_u2}"
        )));
    }

    let ma = cp_to_u2.try_map(|s, c| -> DesignResult<f64> {
        let v = v_u[s] / checked_sqrt(*c, "cpTo/U^2")?;
        Ok(gas.mach_from_v_cpto(v)?)
    })?;
    let ma_rel = PerStation::from_fn(|s| ma[s] * v_rel_u[s] / v_u[s]);
    let capacity = ma.try_map(|_, m| gas.capacity_from_mach(*m))?;
    let to_to1 = cp_to_u2.map(|c| c / cp_to1_u2);

    if !(corr.eta_lost < 1.0) {
        return Err(DesignError::domain(format!(
            "lost efficiency must be below one, got {}",
            corr.eta_lost
        )));
    }
    let ln_to3 = checked_ln(to_to1[Station::Exit], "To3/To1")?;
    let ds = -(1.0 - 1.0 / (1.0 - corr.eta_lost)) * ln_to3;
    let s_cp = PerStation::new(0.0, corr.loss_ratio * ds, ds);

    let exponent = gas.pressure_exponent();
    let po_po1 = to_to1.try_map(|s, to| -> DesignResult<f64> {
        let ln_to = checked_ln(*to, "To/To1")?;
        Ok(ensure_finite((exponent * (ln_to + s_cp[s])).exp(), "Po/Po1")?)
    })?;

    let cos_al1 = al[Station::Inlet].to_radians().cos();
    let q1 = capacity[Station::Inlet];
    let ax_ax1 = to_to1.try_map(|s, to| -> DesignResult<f64> {
        let q_ratio = checked_div(capacity[s], q1, "Q/Q1")?;
        let cos_ratio = checked_div(cos_al1, al[s].to_radians().cos(), "cos(Al1)/cos(Al)")?;
        Ok(to.sqrt() / po_po1[s] / q_ratio * cos_ratio)
    })?;

    let t_to1 = to_to1.try_map(|s, to| -> DesignResult<f64> {
        Ok(to / gas.to_t_from_mach(ma[s])?)
    })?;
    let p_po1 = po_po1.try_map(|s, po| -> DesignResult<f64> {
        Ok(po / gas.po_p_from_mach(ma[s])?)
    })?;
    let po_rel_po1 = p_po1.try_map(|s, p| -> DesignResult<f64> {
        Ok(p * gas.po_p_from_mach(ma_rel[s])?)
    })?;

    let state = NonDimensionalState {
        point,
        al,
        al_rel,
        vx_u,
        vt_u,
        v_u,
        vt_rel_u,
        v_rel_u,
        u_sqrt_cp_to1,
        cp_to_u2,
        ma,
        ma_rel,
        capacity,
        to_to1,
        s_cp,
        po_po1,
        po_rel_po1,
        t_to1,
        p_po1,
        ax_ax1,
        eta_lost: corr.eta_lost,
    };
    ensure_finite(state.reaction(), "reaction")?;
    Ok(state)
}
