//! td-record: design record export for downstream geometry tools.
//!
//! A [`DesignRecord`] packages a single-point design into the sections
//! `mean-line`, `bcond`, `3d`, `sect_row_0` and `sect_row_1`. Records are
//! merged into a template rather than replacing it, so settings the
//! template carries for other tools are preserved.

pub mod error;
pub mod record;
pub mod template;

pub use error::{RecordError, RecordResult};
pub use record::{
    BoundaryConditions, DesignRecord, MeanLineSection, RowSection, SectionParams, ThreeDSection,
};
pub use template::{load_template, merge_json, write_record};
