//! td-meanline: single-stage axial turbine mean-line design.
//!
//! A design point is given by four non-dimensional variables: flow
//! coefficient `phi`, loading coefficient `psi`, stator exit Mach number
//! `M2` and a loading coefficient `Co`. Empirical correlations supply the
//! flow angles, losses and blade parameters; the velocity triangles and
//! compressible flow relations then fix the non-dimensional state, which
//! can be scaled to physical size by shaft speed or mass flow.
//!
//! Stations are numbered stator inlet (1), stator exit / rotor inlet (2)
//! and rotor exit (3). Angles are in degrees.
//!
//! # Example
//!
//! ```
//! use td_meanline::{DesignAssumptions, DesignInputs, Quantity, TurbineDesign};
//! use td_surrogate::{ConstantRegressor, SurrogateLibrary};
//!
//! let mut library = SurrogateLibrary::new();
//! for q in Quantity::PREDICTION_ORDER {
//!     let value = match q {
//!         Quantity::Al2a => 60.0,
//!         Quantity::Al3 => -20.0,
//!         Quantity::ZetaStator => 1.0,
//!         Quantity::SCxStator | Quantity::SCxRotor => 0.8,
//!         Quantity::LossRatio => 0.5,
//!         Quantity::EtaLost => 0.06,
//!         _ => 0.03,
//!     };
//!     library.insert(q.model(Box::new(ConstantRegressor::new(value))).unwrap());
//! }
//!
//! let inputs = DesignInputs::single(0.8, 1.6, 0.7, 0.65).unwrap();
//! let design = TurbineDesign::new(inputs, DesignAssumptions::default()).unwrap();
//! let resolved = design.predict(&library).unwrap().resolve().unwrap();
//! let lam = resolved.states()[0].reaction();
//! assert!(lam > 0.0 && lam < 1.0);
//!
//! let scaled = resolved.scale_at_datum().unwrap();
//! assert!(scaled.geometry().rm.value > 0.0);
//! ```

pub mod config;
pub mod correlations;
pub mod design;
pub mod error;
pub mod free_vortex;
pub mod inputs;
pub mod nondim;
pub mod scaling;

pub use config::{DesignAssumptions, OperatingPoint, SectionDefaults};
pub use correlations::{Correlations, PointCorrelations, Quantity, predict_correlations};
pub use design::{PredictedDesign, ResolvedDesign, ScaledDesign, TurbineDesign};
pub use error::{DesignError, DesignResult};
pub use free_vortex::FreeVortex;
pub use inputs::{DesignInputs, DesignPoint};
pub use nondim::{NonDimensionalState, resolve_point, resolve_states};
pub use scaling::{DimensionalDesign, GeometryScaler};
