//! Calorically perfect gas.

use crate::error::{FlowError, FlowResult};
use crate::relations;

/// A calorically perfect gas described by its ratio of specific heats and
/// specific gas constant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdealGas {
    /// Ratio of specific heats γ (> 1)
    pub gamma: f64,
    /// Specific gas constant R [J/(kg·K)]
    pub rgas: f64,
}

impl IdealGas {
    /// Create a gas model.
    ///
    /// # Errors
    /// Returns error if `gamma <= 1` or `rgas <= 0`.
    pub fn new(gamma: f64, rgas: f64) -> FlowResult<Self> {
        if !(gamma.is_finite() && gamma > 1.0) {
            return Err(FlowError::InvalidArg {
                what: "ratio of specific heats",
                value: gamma,
            });
        }
        if !(rgas.is_finite() && rgas > 0.0) {
            return Err(FlowError::InvalidArg {
                what: "gas constant",
                value: rgas,
            });
        }
        Ok(Self { gamma, rgas })
    }

    /// Specific heat at constant pressure, `cp = R γ / (γ - 1)` [J/(kg·K)].
    pub fn cp(&self) -> f64 {
        self.rgas * self.gamma / (self.gamma - 1.0)
    }

    /// `γ/(γ-1)`, the exponent linking temperature and pressure ratios.
    pub fn pressure_exponent(&self) -> f64 {
        self.gamma / (self.gamma - 1.0)
    }

    pub fn to_t_from_mach(&self, ma: f64) -> FlowResult<f64> {
        relations::to_t_from_mach(ma, self.gamma)
    }

    pub fn po_p_from_mach(&self, ma: f64) -> FlowResult<f64> {
        relations::po_p_from_mach(ma, self.gamma)
    }

    pub fn v_cpto_from_mach(&self, ma: f64) -> FlowResult<f64> {
        relations::v_cpto_from_mach(ma, self.gamma)
    }

    pub fn mach_from_v_cpto(&self, v: f64) -> FlowResult<f64> {
        relations::mach_from_v_cpto(v, self.gamma)
    }

    pub fn capacity_from_mach(&self, ma: f64) -> FlowResult<f64> {
        relations::capacity_from_mach(ma, self.gamma)
    }
}
