//! td-surrogate: named regression surrogates for empirical design correlations.
//!
//! Provides:
//! - `Regressor`: the opaque prediction backend (a trained model of any kind)
//! - `SurrogateModel`: a regressor plus its declared feature set and valid ranges
//! - `FeatureTable`: named, equal-length feature columns for a batch of points
//! - `SurrogateLibrary`: dispatch table from quantity name to model
//! - `ConstantRegressor` / `FnRegressor`: simple backends for stubs and analytic fits
//!
//! # Architecture
//!
//! The adapter never interprets the physical meaning of a quantity. A model
//! declares which features it needs; callers hand it a table that may hold
//! more columns than that, and the adapter selects the declared ones in
//! canonical (lexicographic) order before calling the backend. How the
//! backend was fitted is outside this crate.
//!
//! # Example
//!
//! ```
//! use td_surrogate::{ConstantRegressor, FeatureTable, SurrogateLibrary, SurrogateModel};
//!
//! let model = SurrogateModel::new(
//!     "eta_lost",
//!     ["phi", "psi"],
//!     Box::new(ConstantRegressor::new(0.05)),
//! )
//! .unwrap();
//!
//! let mut library = SurrogateLibrary::new();
//! library.insert(model);
//!
//! let table = FeatureTable::new()
//!     .with_column("psi", vec![1.2, 1.6])
//!     .unwrap()
//!     .with_column("phi", vec![0.8, 0.6])
//!     .unwrap()
//!     .with_column("Co", vec![0.6, 0.6]) // unused, dropped
//!     .unwrap();
//!
//! let eta_lost = library.predict("eta_lost", &table).unwrap();
//! assert_eq!(eta_lost, vec![0.05, 0.05]);
//! ```

pub mod error;
pub mod library;
pub mod model;
pub mod regressors;
pub mod table;

pub use error::{SurrogateError, SurrogateResult};
pub use library::SurrogateLibrary;
pub use model::{
    ExtremePoint, FeatureRange, GridExtremes, Prediction, RangeViolation, Regressor,
    SurrogateModel,
};
pub use regressors::{ConstantRegressor, FnRegressor};
pub use table::FeatureTable;
