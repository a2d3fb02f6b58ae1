//! Dimensional scaling of a resolved single-point design.
//!
//! The non-dimensional state fixes every ratio; one extra dimensional
//! constraint (shaft speed or mass flow) fixes the mean radius and with it
//! the whole annulus:
//!
//! ```text
//! U      = U/√(cpTo1) · √(cp To1)
//! Dr/rm  = 2(1 - htr)/(1 + htr)             (at stator exit)
//! Dr_i   = rm · Dr/rm · A_i/A_2
//! A1     = 2π rm Dr_1
//! mdot   = Q1 Po1 A1 cos(Al1) / √(cp To1)
//! ```

use crate::config::DesignAssumptions;
use crate::correlations::{Correlations, PointCorrelations};
use crate::error::{DesignError, DesignResult};
use crate::free_vortex::FreeVortex;
use crate::nondim::NonDimensionalState;
use std::f64::consts::PI;
use td_compflow::IdealGas;
use td_core::units::{
    AngularVelocity, Area, Length, MassRate, Pressure, Temperature, Velocity, k, kgps, m, m2, mps, pa,
    rad_per_s,
};
use td_core::{PerRow, PerStation, Row, Station, checked_div, checked_sqrt};
use tracing::debug;

/// Dimensional annulus, blading and flow field of a scaled design.
#[derive(Clone, Debug, PartialEq)]
pub struct DimensionalDesign {
    pub to1: Temperature,
    pub po1: Pressure,
    pub omega: AngularVelocity,
    pub mdot1: MassRate,
    /// Mean-line blade speed.
    pub u: Velocity,
    pub rm: Length,
    /// Annulus height.
    pub dr: PerStation<Length>,
    pub rh: PerStation<Length>,
    pub rc: PerStation<Length>,
    /// Stator-inlet annulus area.
    pub ax1: Area,
    pub span: PerRow<Length>,
    /// Axial chord.
    pub cx: PerRow<Length>,
    pub pitch: PerRow<Length>,
    /// Real-valued blade count `2π rm / pitch`; rounding is left to the caller.
    pub n_blades: PerRow<f64>,
    pub p: PerStation<Pressure>,
    pub po: PerStation<Pressure>,
    pub po_rel: PerStation<Pressure>,
    pub t: PerStation<Temperature>,
    pub to: PerStation<Temperature>,
    pub v: PerStation<Velocity>,
    pub vt: PerStation<Velocity>,
    pub v_rel: PerStation<Velocity>,
    pub vt_rel: PerStation<Velocity>,
    /// Free-vortex inlet and exit angles [deg] at each row's section span fraction.
    pub chi: PerRow<[f64; 2]>,
}

/// Scales one resolved point to physical size.
#[derive(Clone, Copy, Debug)]
pub struct GeometryScaler<'a> {
    state: &'a NonDimensionalState,
    correlations: &'a PointCorrelations,
    assumptions: &'a DesignAssumptions,
    gas: IdealGas,
}

impl<'a> GeometryScaler<'a> {
    /// # Errors
    /// `Configuration` for a batch of more than one point; `Consistency` if
    /// nothing was resolved or the correlations belong to other inputs.
    pub fn new(
        states: &'a [NonDimensionalState],
        correlations: &'a Correlations,
        assumptions: &'a DesignAssumptions,
    ) -> DesignResult<Self> {
        let (state, corr) = match (states, correlations.points()) {
            ([], _) => {
                return Err(DesignError::Consistency {
                    what: "geometry scaling requires a resolved non-dimensional state",
                });
            }
            ([state], [corr]) => (state, corr),
            ([_], _) => {
                return Err(DesignError::Consistency {
                    what: "correlation batch length differs from resolved states",
                });
            }
            (many, _) => {
                return Err(DesignError::config(format!(
                    "geometry scaling needs exactly one design point, got {}",
                    many.len()
                )));
            }
        };
        if correlations.inputs().point(0) != Some(state.point) {
            return Err(DesignError::Consistency {
                what: "correlations were predicted for different design inputs",
            });
        }
        assumptions.validate()?;
        Ok(Self {
            state,
            correlations: corr,
            assumptions,
            gas: assumptions.gas()?,
        })
    }

    /// Fix the mean radius from shaft angular velocity.
    pub fn scale_by_omega(
        &self,
        omega: AngularVelocity,
        to1: Temperature,
        po1: Pressure,
    ) -> DesignResult<DimensionalDesign> {
        let (to1_k, po1_pa) = self.check_inlet(to1, po1)?;
        let omega_v = positive(omega.value, "shaft angular velocity")?;
        let u = self.blade_speed(to1_k)?;
        let rm = u / omega_v;
        debug!(omega = omega_v, rm, "scaling by shaft speed");
        self.finish(rm, u, to1_k, po1_pa)
    }

    /// Fix the mean radius from inlet mass flow rate.
    pub fn scale_by_mass_flow(
        &self,
        mdot1: MassRate,
        to1: Temperature,
        po1: Pressure,
    ) -> DesignResult<DimensionalDesign> {
        let (to1_k, po1_pa) = self.check_inlet(to1, po1)?;
        let mdot = positive(mdot1.value, "inlet mass flow")?;
        let s = self.state;
        let sqrt_cp_to1 = (self.gas.cp() * to1_k).sqrt();
        let cos_al1 = s.al[Station::Inlet].to_radians().cos();
        let ax1 = checked_div(
            sqrt_cp_to1 * mdot,
            s.capacity[Station::Inlet] * po1_pa * cos_al1,
            "inlet area",
        )?;
        let rm = checked_sqrt(
            ax1 * s.ax_ax1[Station::Inter]
                / (2.0 * PI * self.assumptions.span_to_mean_radius() * s.ax_ax1[Station::Inlet]),
            "mean radius squared",
        )?;
        let u = self.blade_speed(to1_k)?;
        debug!(mdot, rm, "scaling by mass flow");
        self.finish(rm, u, to1_k, po1_pa)
    }

    fn check_inlet(&self, to1: Temperature, po1: Pressure) -> DesignResult<(f64, f64)> {
        Ok((
            positive(to1.value, "inlet stagnation temperature")?,
            positive(po1.value, "inlet stagnation pressure")?,
        ))
    }

    fn blade_speed(&self, to1_k: f64) -> DesignResult<f64> {
        Ok(self.state.u_sqrt_cp_to1 * checked_sqrt(self.gas.cp() * to1_k, "cp To1")?)
    }

    fn finish(&self, rm: f64, u: f64, to1_k: f64, po1_pa: f64) -> DesignResult<DimensionalDesign> {
        let s = self.state;
        let a = self.assumptions;
        let sqrt_cp_to1 = (self.gas.cp() * to1_k).sqrt();

        let dr = s
            .ax_ax1
            .map(|ax| rm * a.span_to_mean_radius() * ax / s.ax_ax1[Station::Inter]);
        let rh = dr.map(|d| rm - 0.5 * d);
        let rc = dr.map(|d| rm + 0.5 * d);
        let ax1 = 2.0 * PI * rm * dr[Station::Inlet];
        let mdot1 = s.capacity[Station::Inlet] * po1_pa * ax1 * s.al[Station::Inlet].to_radians().cos()
            / sqrt_cp_to1;

        let span = PerRow::from_fn(|row| {
            let (le, te) = row.stations();
            0.5 * (dr[le] + dr[te])
        });
        let cx = PerRow::from_fn(|row| span[row] / a.aspect_ratio[row]);
        let pitch = PerRow::from_fn(|row| self.correlations.s_cx[row] * cx[row]);
        let n_blades = pitch.map(|p| 2.0 * PI * rm / p);

        let chi = FreeVortex::new(rm, rh, rc)?.row_angles(&s.al, &a.spf, s.point.phi);

        let velocity = |v: &f64| mps(v * u);
        let design = DimensionalDesign {
            to1: k(to1_k),
            po1: pa(po1_pa),
            omega: rad_per_s(u / rm),
            mdot1: kgps(mdot1),
            u: mps(u),
            rm: m(rm),
            dr: dr.map(|v| m(*v)),
            rh: rh.map(|v| m(*v)),
            rc: rc.map(|v| m(*v)),
            ax1: m2(ax1),
            span: span.map(|v| m(*v)),
            cx: cx.map(|v| m(*v)),
            pitch: pitch.map(|v| m(*v)),
            n_blades,
            p: s.p_po1.map(|v| pa(v * po1_pa)),
            po: s.po_po1.map(|v| pa(v * po1_pa)),
            po_rel: s.po_rel_po1.map(|v| pa(v * po1_pa)),
            t: s.t_to1.map(|v| k(v * to1_k)),
            to: s.to_to1.map(|v| k(v * to1_k)),
            v: s.v_u.map(velocity),
            vt: s.vt_u.map(velocity),
            v_rel: s.v_rel_u.map(velocity),
            vt_rel: s.vt_rel_u.map(velocity),
            chi,
        };
        debug!(
            rm,
            mdot1,
            n_stator = n_blades[Row::Stator],
            n_rotor = n_blades[Row::Rotor],
            "scaled geometry"
        );
        Ok(design)
    }
}

fn positive(v: f64, what: &str) -> DesignResult<f64> {
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(DesignError::config(format!("{what} must be positive and finite, got {v}")))
    }
}
