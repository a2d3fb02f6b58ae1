//! td-compflow: one-dimensional compressible flow relations for a perfect gas.
//!
//! Provides:
//! - Stagnation-to-static temperature and pressure ratios
//! - Normalised velocity `V/sqrt(cp*To)` and its inverse
//! - Non-dimensional mass-flow capacity `mdot*sqrt(cp*To)/(A*Po)`
//! - `IdealGas`, a validated (gamma, R) pair with the same relations as methods
//!
//! Every relation validates its arguments: gamma must exceed one and Mach
//! numbers must be finite and non-negative. Inputs outside a relation's
//! valid range are rejected with a [`FlowError`], never clamped.
//!
//! # Example
//!
//! ```
//! use td_compflow::IdealGas;
//!
//! let gas = IdealGas::new(1.33, 272.9).unwrap();
//! let v = gas.v_cpto_from_mach(0.6).unwrap();
//! let ma = gas.mach_from_v_cpto(v).unwrap();
//! assert!((ma - 0.6).abs() < 1e-12);
//! ```

pub mod error;
pub mod gas;
pub mod relations;

pub use error::{FlowError, FlowResult};
pub use gas::IdealGas;
pub use relations::{
    CHOKING_MACH, capacity_from_mach, elementwise, mach_from_v_cpto, max_v_cpto, po_p_from_mach,
    to_t_from_mach, v_cpto_from_mach,
};
