//! Fixed design assumptions and blade section defaults.
//!
//! Both structs deserialize with every field optional; missing fields take
//! the values used for the reference design.

use crate::error::{DesignError, DesignResult};
use serde::{Deserialize, Serialize};
use td_compflow::IdealGas;
use td_core::{PerRow, Row};

/// Geometric and gas assumptions that are not design variables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignAssumptions {
    /// Hub-to-tip radius ratio at stator inlet.
    pub htr: f64,
    /// Span-to-axial-chord aspect ratio per row.
    pub aspect_ratio: PerRow<f64>,
    /// Span fraction at which each row's section is defined.
    pub spf: PerRow<f64>,
    /// Leading-edge recamber per row [deg].
    pub recamber_le: PerRow<f64>,
    /// Ratio of specific heats.
    pub gamma: f64,
    /// Specific gas constant [J/(kg·K)].
    pub rgas: f64,
    /// Trailing-edge thickness to chord.
    pub tte: f64,
    /// Tip gap to span.
    pub delta: f64,
    /// Leading-edge radius to chord per row.
    pub rle: PerRow<f64>,
    /// Reference operating point used when no dimensional scaling is requested.
    pub datum: OperatingPoint,
}

impl Default for DesignAssumptions {
    fn default() -> Self {
        Self {
            htr: 0.9,
            aspect_ratio: PerRow::new(1.6, 1.6),
            spf: PerRow::new(0.5, 0.5),
            recamber_le: PerRow::new(0.0, 0.0),
            gamma: 1.33,
            rgas: 272.9,
            tte: 0.015,
            delta: 0.1,
            rle: PerRow::new(0.04, 0.04),
            datum: OperatingPoint::default(),
        }
    }
}

impl DesignAssumptions {
    /// Check every field for physical plausibility.
    pub fn validate(&self) -> DesignResult<()> {
        if !(self.htr.is_finite() && self.htr > 0.0 && self.htr < 1.0) {
            return Err(DesignError::config(format!(
                "hub-to-tip ratio must lie in (0, 1), got {}",
                self.htr
            )));
        }
        for row in Row::ALL {
            positive(self.aspect_ratio[row], "aspect ratio")?;
            let spf = self.spf[row];
            if !(spf.is_finite() && (0.0..=1.0).contains(&spf)) {
                return Err(DesignError::config(format!(
                    "span fraction must lie in [0, 1], got {spf}"
                )));
            }
            if !self.recamber_le[row].is_finite() {
                return Err(DesignError::config("leading-edge recamber must be finite"));
            }
            positive(self.rle[row], "leading-edge radius")?;
        }
        positive(self.tte, "trailing-edge thickness")?;
        positive(self.delta, "tip gap")?;
        self.gas()?;
        self.datum.validate()
    }

    /// The working gas described by `gamma` and `rgas`.
    pub fn gas(&self) -> DesignResult<IdealGas> {
        IdealGas::new(self.gamma, self.rgas).map_err(|e| DesignError::config(e.to_string()))
    }

    /// Annulus height to mean radius at stator inlet, `2(1 - htr)/(1 + htr)`.
    pub fn span_to_mean_radius(&self) -> f64 {
        2.0 * (1.0 - self.htr) / (1.0 + self.htr)
    }
}

/// Inlet stagnation state, shaft speed and Reynolds number of the datum design.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatingPoint {
    pub to1_k: f64,
    pub po1_pa: f64,
    pub omega_rad_s: f64,
    pub re: f64,
}

impl Default for OperatingPoint {
    fn default() -> Self {
        Self {
            to1_k: 1600.0,
            po1_pa: 1.6e6,
            omega_rad_s: 314.159,
            re: 2.0e6,
        }
    }
}

impl OperatingPoint {
    pub fn validate(&self) -> DesignResult<()> {
        positive(self.to1_k, "inlet stagnation temperature")?;
        positive(self.po1_pa, "inlet stagnation pressure")?;
        positive(self.omega_rad_s, "shaft angular velocity")?;
        positive(self.re, "Reynolds number")
    }
}

/// Blade section parameters carried into the design record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionDefaults {
    /// Pressure-side thickness to chord.
    pub thickness_ps: PerRow<f64>,
    /// Suction-side thickness to chord.
    pub thickness_ss: PerRow<f64>,
    /// Chordwise location of pressure-side maximum thickness.
    pub max_t_loc_ps: PerRow<f64>,
    /// Chordwise location of suction-side maximum thickness.
    pub max_t_loc_ss: PerRow<f64>,
    pub lean: PerRow<f64>,
    /// Trailing-edge recamber per row [deg].
    pub recamber_te: PerRow<f64>,
    /// Stator wedge angle [deg]; the rotor's comes from a correlation.
    pub beta_stator: f64,
}

impl Default for SectionDefaults {
    fn default() -> Self {
        Self {
            thickness_ps: PerRow::new(0.205, 0.250),
            thickness_ss: PerRow::new(0.29, 0.30),
            max_t_loc_ps: PerRow::new(0.35, 0.37),
            max_t_loc_ss: PerRow::new(0.40, 0.32),
            lean: PerRow::new(0.03, 0.0),
            recamber_te: PerRow::new(0.0, 0.0),
            beta_stator: 10.5,
        }
    }
}

impl SectionDefaults {
    pub fn validate(&self) -> DesignResult<()> {
        for row in Row::ALL {
            positive(self.thickness_ps[row], "pressure-side thickness")?;
            positive(self.thickness_ss[row], "suction-side thickness")?;
            fraction(self.max_t_loc_ps[row], "pressure-side max thickness location")?;
            fraction(self.max_t_loc_ss[row], "suction-side max thickness location")?;
            if !(self.lean[row].is_finite() && self.recamber_te[row].is_finite()) {
                return Err(DesignError::config("lean and recamber must be finite"));
            }
        }
        positive(self.beta_stator, "stator wedge angle")
    }
}

fn positive(v: f64, what: &str) -> DesignResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(DesignError::config(format!(
            "{what} must be positive and finite, got {v}"
        )))
    }
}

fn fraction(v: f64, what: &str) -> DesignResult<()> {
    if v.is_finite() && v > 0.0 && v < 1.0 {
        Ok(())
    } else {
        Err(DesignError::config(format!("{what} must lie in (0, 1), got {v}")))
    }
}
