//! Free-vortex radial extrapolation of flow angles.
//!
//! Tangential velocity varies as `1/r` and axial velocity is uniform, so a
//! mean-line angle `Al` maps to `atan(tan(Al)/(r/rm))` at radius `r`. The
//! rotor sees blade speed proportional to `r`, which adds `-(r/rm)/phi` to
//! the relative tangent.

use crate::error::{DesignError, DesignResult};
use td_core::{PerRow, PerStation, Row, Station};

/// Hub and casing radii of the annulus at each station.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FreeVortex {
    rm: f64,
    rh: PerStation<f64>,
    rc: PerStation<f64>,
}

impl FreeVortex {
    /// Radii in any consistent length unit.
    pub fn new(rm: f64, rh: PerStation<f64>, rc: PerStation<f64>) -> DesignResult<Self> {
        if !(rm.is_finite() && rm > 0.0) {
            return Err(DesignError::domain(format!("mean radius must be positive, got {rm}")));
        }
        for s in Station::ALL {
            if !(rh[s].is_finite() && rc[s].is_finite() && rh[s] > 0.0 && rc[s] > rh[s]) {
                return Err(DesignError::domain(format!(
                    "annulus at station {} is degenerate (hub {}, casing {})",
                    s.index() + 1,
                    rh[s],
                    rc[s]
                )));
            }
        }
        Ok(Self { rm, rh, rc })
    }

    /// Radius over mean radius at span fraction `spf` (0 at hub, 1 at casing).
    pub fn radius_ratio(&self, station: Station, spf: f64) -> f64 {
        (self.rh[station] + spf * (self.rc[station] - self.rh[station])) / self.rm
    }

    /// Absolute angle [deg] at span fraction `spf`.
    pub fn vane_angle(&self, al: f64, station: Station, spf: f64) -> f64 {
        let r = self.radius_ratio(station, spf);
        (al.to_radians().tan() / r).atan().to_degrees()
    }

    /// Relative angle [deg] at span fraction `spf` for flow coefficient `phi`.
    pub fn blade_angle(&self, al: f64, station: Station, spf: f64, phi: f64) -> f64 {
        let r = self.radius_ratio(station, spf);
        (al.to_radians().tan() / r - r / phi).atan().to_degrees()
    }

    /// Inlet and exit metal angles of each row at its section span fraction.
    ///
    /// The stator uses absolute angles and the rotor relative ones.
    pub fn row_angles(&self, al: &PerStation<f64>, spf: &PerRow<f64>, phi: f64) -> PerRow<[f64; 2]> {
        PerRow::from_fn(|row| {
            let (le, te) = row.stations();
            match row {
                Row::Stator => [
                    self.vane_angle(al[le], le, spf[row]),
                    self.vane_angle(al[te], te, spf[row]),
                ],
                Row::Rotor => [
                    self.blade_angle(al[le], le, spf[row], phi),
                    self.blade_angle(al[te], te, spf[row], phi),
                ],
            }
        })
    }
}
