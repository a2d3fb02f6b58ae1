//! Staged derivation of a turbine design.
//!
//! ```text
//! TurbineDesign ──predict──▶ PredictedDesign ──resolve──▶ ResolvedDesign
//!                                                             │
//!                                   scale_by_omega / scale_by_mass_flow
//!                                                             ▼
//!                                                       ScaledDesign
//! ```
//!
//! Each stage owns the output of the ones before it, so a later stage can
//! never be built from stale or missing upstream results. Stages are
//! derived by reference; a failed step leaves the earlier stage untouched.

use crate::config::{DesignAssumptions, SectionDefaults};
use crate::correlations::{Correlations, predict_correlations};
use crate::error::{DesignError, DesignResult};
use crate::inputs::DesignInputs;
use crate::nondim::{NonDimensionalState, resolve_states};
use crate::scaling::{DimensionalDesign, GeometryScaler};
use td_compflow::IdealGas;
use td_core::units::{k, kgps, pa, rad_per_s};
use td_surrogate::SurrogateLibrary;
use tracing::debug;

/// Design variables plus the fixed assumptions they are evaluated under.
#[derive(Clone, Debug, PartialEq)]
pub struct TurbineDesign {
    inputs: DesignInputs,
    assumptions: DesignAssumptions,
    sections: SectionDefaults,
}

impl TurbineDesign {
    pub fn new(inputs: DesignInputs, assumptions: DesignAssumptions) -> DesignResult<Self> {
        assumptions.validate()?;
        Ok(Self {
            inputs,
            assumptions,
            sections: SectionDefaults::default(),
        })
    }

    /// Replace the blade section defaults.
    pub fn with_sections(mut self, sections: SectionDefaults) -> DesignResult<Self> {
        sections.validate()?;
        self.sections = sections;
        Ok(self)
    }

    pub fn inputs(&self) -> &DesignInputs {
        &self.inputs
    }

    pub fn assumptions(&self) -> &DesignAssumptions {
        &self.assumptions
    }

    pub fn sections(&self) -> &SectionDefaults {
        &self.sections
    }

    pub fn gas(&self) -> DesignResult<IdealGas> {
        self.assumptions.gas()
    }

    /// Evaluate the correlation chain.
    pub fn predict(&self, library: &SurrogateLibrary) -> DesignResult<PredictedDesign> {
        let correlations = predict_correlations(&self.inputs, library)?;
        debug!(n = correlations.len(), "predicted design");
        Ok(PredictedDesign {
            design: self.clone(),
            correlations,
        })
    }

    /// Attach correlations obtained elsewhere.
    ///
    /// # Errors
    /// `Consistency` if they were produced for different inputs.
    pub fn with_correlations(&self, correlations: Correlations) -> DesignResult<PredictedDesign> {
        if correlations.inputs() != &self.inputs {
            return Err(DesignError::Consistency {
                what: "correlations were predicted for different design inputs",
            });
        }
        Ok(PredictedDesign {
            design: self.clone(),
            correlations,
        })
    }
}

/// A design with its empirical correlations.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictedDesign {
    design: TurbineDesign,
    correlations: Correlations,
}

impl PredictedDesign {
    pub fn design(&self) -> &TurbineDesign {
        &self.design
    }

    pub fn correlations(&self) -> &Correlations {
        &self.correlations
    }

    /// Derive the non-dimensional state of every point.
    pub fn resolve(&self) -> DesignResult<ResolvedDesign> {
        let gas = self.design.gas()?;
        let states = resolve_states(&self.design.inputs, &self.correlations, &gas)?;
        Ok(ResolvedDesign {
            predicted: self.clone(),
            states,
        })
    }
}

/// A design with its non-dimensional state resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedDesign {
    predicted: PredictedDesign,
    states: Vec<NonDimensionalState>,
}

impl ResolvedDesign {
    pub fn design(&self) -> &TurbineDesign {
        &self.predicted.design
    }

    pub fn correlations(&self) -> &Correlations {
        &self.predicted.correlations
    }

    pub fn states(&self) -> &[NonDimensionalState] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Scaler for a single-point design.
    pub fn scaler(&self) -> DesignResult<GeometryScaler<'_>> {
        GeometryScaler::new(
            &self.states,
            &self.predicted.correlations,
            &self.predicted.design.assumptions,
        )
    }

    pub fn scale_by_omega(
        &self,
        omega: td_core::AngularVelocity,
        to1: td_core::Temperature,
        po1: td_core::Pressure,
    ) -> DesignResult<ScaledDesign> {
        let geometry = self.scaler()?.scale_by_omega(omega, to1, po1)?;
        Ok(self.scaled(geometry))
    }

    pub fn scale_by_mass_flow(
        &self,
        mdot1: td_core::MassRate,
        to1: td_core::Temperature,
        po1: td_core::Pressure,
    ) -> DesignResult<ScaledDesign> {
        let geometry = self.scaler()?.scale_by_mass_flow(mdot1, to1, po1)?;
        Ok(self.scaled(geometry))
    }

    /// Scale at the datum operating point of the design assumptions.
    pub fn scale_at_datum(&self) -> DesignResult<ScaledDesign> {
        let datum = &self.design().assumptions.datum;
        self.scale_by_omega(rad_per_s(datum.omega_rad_s), k(datum.to1_k), pa(datum.po1_pa))
    }

    /// Scale to a target mass flow at the datum inlet state.
    pub fn scale_at_datum_mass_flow(&self, mdot1_kgps: f64) -> DesignResult<ScaledDesign> {
        let datum = &self.design().assumptions.datum;
        self.scale_by_mass_flow(kgps(mdot1_kgps), k(datum.to1_k), pa(datum.po1_pa))
    }

    fn scaled(&self, geometry: DimensionalDesign) -> ScaledDesign {
        ScaledDesign {
            resolved: self.clone(),
            geometry,
        }
    }
}

/// A single-point design scaled to physical size.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaledDesign {
    resolved: ResolvedDesign,
    geometry: DimensionalDesign,
}

impl ScaledDesign {
    pub fn resolved(&self) -> &ResolvedDesign {
        &self.resolved
    }

    pub fn state(&self) -> &NonDimensionalState {
        // `GeometryScaler::new` only succeeds for exactly one state.
        &self.resolved.states[0]
    }

    pub fn geometry(&self) -> &DimensionalDesign {
        &self.geometry
    }
}
