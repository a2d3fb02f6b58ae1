//! Hierarchical design record read by downstream 3D geometry tools.
//!
//! Key names are fixed by the consumer and kept verbatim through serde renames.

use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use td_core::{Row, Station};
use td_meanline::{ResolvedDesign, ScaledDesign};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesignRecord {
    #[serde(rename = "mean-line")]
    pub mean_line: MeanLineSection,
    pub bcond: BoundaryConditions,
    #[serde(rename = "3d")]
    pub three_d: ThreeDSection,
    pub sect_row_0: RowSection,
    pub sect_row_1: RowSection,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeanLineSection {
    pub phi: f64,
    pub psi: f64,
    /// Degree of reaction.
    #[serde(rename = "Lam")]
    pub lam: f64,
    #[serde(rename = "Al1")]
    pub al1: f64,
    #[serde(rename = "Ma2")]
    pub ma2: f64,
    /// Efficiency in percent.
    pub eta: f64,
    pub ga: f64,
    pub loss_split: f64,
    pub fc: [f64; 2],
    #[serde(rename = "TRc")]
    pub trc: [f64; 2],
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundaryConditions {
    #[serde(rename = "To1")]
    pub to1: f64,
    #[serde(rename = "Po1")]
    pub po1: f64,
    pub rgas: f64,
    #[serde(rename = "Omega")]
    pub omega: f64,
    pub delta: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThreeDSection {
    pub htr: f64,
    #[serde(rename = "Re")]
    pub re: f64,
    pub tau_c: f64,
    #[serde(rename = "Co")]
    pub co: [f64; 2],
    #[serde(rename = "AR")]
    pub ar: [f64; 2],
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowSection {
    pub tte: f64,
    pub sect_0: SectionParams,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionParams {
    pub spf: f64,
    pub stagger: f64,
    /// Leading- and trailing-edge recamber [deg].
    pub recamber: [f64; 2],
    #[serde(rename = "Rle")]
    pub rle: f64,
    pub beta: f64,
    pub thickness_ps: f64,
    pub thickness_ss: f64,
    pub max_thickness_location_ss: f64,
    pub max_thickness_location_ps: f64,
    pub lean: f64,
}

impl DesignRecord {
    /// Record of a resolved single-point design at its datum operating point.
    pub fn from_resolved(resolved: &ResolvedDesign) -> RecordResult<Self> {
        let datum = &resolved.design().assumptions().datum;
        let bcond = BoundaryConditions {
            to1: datum.to1_k,
            po1: datum.po1_pa,
            rgas: resolved.design().assumptions().rgas,
            omega: datum.omega_rad_s,
            delta: resolved.design().assumptions().delta,
        };
        assemble(resolved, bcond)
    }

    /// Record of a scaled design, with boundary conditions from the scaling.
    pub fn from_scaled(scaled: &ScaledDesign) -> RecordResult<Self> {
        let resolved = scaled.resolved();
        let g = scaled.geometry();
        let bcond = BoundaryConditions {
            to1: g.to1.value,
            po1: g.po1.value,
            rgas: resolved.design().assumptions().rgas,
            omega: g.omega.value,
            delta: resolved.design().assumptions().delta,
        };
        assemble(resolved, bcond)
    }

    pub fn to_value(&self) -> RecordResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

fn assemble(resolved: &ResolvedDesign, bcond: BoundaryConditions) -> RecordResult<DesignRecord> {
    let (state, corr) = match (resolved.states(), resolved.correlations().points()) {
        ([state], [corr]) => (state, corr),
        (states, _) => {
            return Err(RecordError::Configuration {
                what: format!(
                    "a design record describes one design point, got {}",
                    states.len()
                ),
            });
        }
    };
    let design = resolved.design();
    let a = design.assumptions();
    let sections = design.sections();
    let point = state.point;

    let section = |row: Row, beta: f64| RowSection {
        tte: a.tte,
        sect_0: SectionParams {
            spf: a.spf[row],
            stagger: corr.stagger[row],
            recamber: [a.recamber_le[row], sections.recamber_te[row]],
            rle: a.rle[row],
            beta,
            thickness_ps: sections.thickness_ps[row],
            thickness_ss: sections.thickness_ss[row],
            max_thickness_location_ss: sections.max_t_loc_ss[row],
            max_thickness_location_ps: sections.max_t_loc_ps[row],
            lean: sections.lean[row],
        },
    };

    let record = DesignRecord {
        mean_line: MeanLineSection {
            phi: point.phi,
            psi: point.psi,
            lam: state.reaction(),
            al1: state.al[Station::Inlet],
            ma2: point.m2,
            eta: state.efficiency(),
            ga: a.gamma,
            loss_split: corr.loss_ratio,
            fc: [0.0, 0.0],
            trc: [0.5, 0.5],
        },
        bcond,
        three_d: ThreeDSection {
            htr: a.htr,
            re: a.datum.re,
            tau_c: 0.0,
            co: [point.co, point.co],
            ar: *a.aspect_ratio.as_array(),
        },
        sect_row_0: section(Row::Stator, sections.beta_stator),
        sect_row_1: section(Row::Rotor, corr.beta_rotor),
    };
    Ok(record)
}
