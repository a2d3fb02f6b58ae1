//! td-core: stable foundation for turbodesign.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - layout (closed station/row enumerations and fixed-size containers)
//! - error (shared error taxonomy)

pub mod error;
pub mod layout;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{ErrorKind, TdError};
pub use layout::{PerRow, PerStation, Row, Station};
pub use numeric::*;
pub use units::*;
