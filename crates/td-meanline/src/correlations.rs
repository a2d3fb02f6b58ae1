//! Empirical correlation chain.
//!
//! Each [`Quantity`] is predicted by a surrogate from the four design
//! variables plus any quantities predicted before it. The chain runs in
//! [`Quantity::PREDICTION_ORDER`]; every result is appended to the feature
//! table under the quantity's name so later models can consume it.

use crate::error::{DesignError, DesignResult};
use crate::inputs::{CO, DesignInputs, M2, PHI, PSI};
use td_core::{PerRow, PerStation, Row};
use td_surrogate::{FeatureTable, Regressor, SurrogateLibrary, SurrogateModel, SurrogateResult};
use tracing::debug;

/// Quantities supplied by empirical correlations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quantity {
    /// Stator exit absolute flow angle [deg].
    Al2a,
    /// Rotor exit absolute flow angle [deg].
    Al3,
    StaggerStator,
    StaggerRotor,
    /// Stator exit to inlet axial velocity ratio.
    ZetaStator,
    SCxStator,
    SCxRotor,
    YpStator,
    YpRotor,
    /// Fraction of the stage entropy rise generated in the stator.
    LossRatio,
    /// Lost efficiency, `1 - eta`.
    EtaLost,
    /// Rotor wedge angle [deg].
    BetaRotor,
}

impl Quantity {
    /// Dependency order: a quantity may only use quantities listed before it.
    pub const PREDICTION_ORDER: [Quantity; 12] = [
        Quantity::Al2a,
        Quantity::Al3,
        Quantity::StaggerStator,
        Quantity::StaggerRotor,
        Quantity::ZetaStator,
        Quantity::SCxStator,
        Quantity::SCxRotor,
        Quantity::BetaRotor,
        Quantity::YpStator,
        Quantity::YpRotor,
        Quantity::LossRatio,
        Quantity::EtaLost,
    ];

    /// Name of the quantity in the surrogate library and feature table.
    pub fn name(self) -> &'static str {
        match self {
            Quantity::Al2a => "Al2a",
            Quantity::Al3 => "Al3",
            Quantity::StaggerStator => "stagger_stator",
            Quantity::StaggerRotor => "stagger_rotor",
            Quantity::ZetaStator => "zeta_stator",
            Quantity::SCxStator => "s_cx_stator",
            Quantity::SCxRotor => "s_cx_rotor",
            Quantity::YpStator => "Yp_stator",
            Quantity::YpRotor => "Yp_rotor",
            Quantity::LossRatio => "loss_rat",
            Quantity::EtaLost => "eta_lost",
            Quantity::BetaRotor => "beta_rotor",
        }
    }

    /// Features the standard correlation set uses for this quantity.
    pub fn default_features(self) -> &'static [&'static str] {
        match self {
            Quantity::Al2a
            | Quantity::Al3
            | Quantity::StaggerStator
            | Quantity::StaggerRotor
            | Quantity::ZetaStator
            | Quantity::SCxStator
            | Quantity::SCxRotor
            | Quantity::BetaRotor => &[PHI, PSI, M2, CO],
            Quantity::YpStator => &["s_cx_stator", "stagger_stator", M2, "Al2a"],
            Quantity::YpRotor => &["s_cx_rotor", PSI, M2, "stagger_rotor"],
            Quantity::LossRatio => &[PHI, PSI, "Yp_stator", "Yp_rotor", CO],
            Quantity::EtaLost => &[PHI, PSI, M2, CO, "Yp_stator", "Yp_rotor"],
        }
    }

    /// Bind a regressor to this quantity with its default feature set.
    pub fn model(self, regressor: Box<dyn Regressor>) -> SurrogateResult<SurrogateModel> {
        SurrogateModel::new(self.name(), self.default_features().iter().copied(), regressor)
    }
}

/// Correlated values for a single design point.
#[derive(Clone, Debug, PartialEq)]
pub struct PointCorrelations {
    /// Absolute flow angles at the three stations [deg]; inlet is axial.
    pub al: PerStation<f64>,
    /// Stator exit to inlet axial velocity ratio. The rotor's is unity by
    /// definition and is not stored.
    pub zeta_stator: f64,
    /// Stagger angles [deg].
    pub stagger: PerRow<f64>,
    /// Pitch to axial chord.
    pub s_cx: PerRow<f64>,
    /// Profile loss coefficients.
    pub yp: PerRow<f64>,
    pub loss_ratio: f64,
    pub eta_lost: f64,
    pub beta_rotor: f64,
}

impl PointCorrelations {
    fn validate(&self) -> DesignResult<()> {
        let finite = self.al.as_array().iter().all(|v| v.is_finite())
            && self.stagger.as_array().iter().all(|v| v.is_finite())
            && self.yp.as_array().iter().all(|v| v.is_finite())
            && self.loss_ratio.is_finite()
            && self.eta_lost.is_finite()
            && self.beta_rotor.is_finite();
        if !finite {
            return Err(DesignError::domain("correlation returned a non-finite value"));
        }
        if !(self.zeta_stator.is_finite() && self.zeta_stator > 0.0) {
            return Err(DesignError::domain(format!(
                "axial velocity ratio must be positive, got {}",
                self.zeta_stator
            )));
        }
        for row in Row::ALL {
            if !(self.s_cx[row].is_finite() && self.s_cx[row] > 0.0) {
                return Err(DesignError::domain(format!(
                    "pitch to chord must be positive, got {}",
                    self.s_cx[row]
                )));
            }
        }
        if self.al.as_array().iter().any(|a| a.abs() >= 90.0) {
            return Err(DesignError::domain("flow angle must lie within (-90, 90) degrees"));
        }
        Ok(())
    }
}

/// Correlated values for a batch, tied to the inputs they were predicted for.
#[derive(Clone, Debug, PartialEq)]
pub struct Correlations {
    inputs: DesignInputs,
    points: Vec<PointCorrelations>,
}

impl Correlations {
    /// Assemble correlations computed elsewhere.
    ///
    /// # Errors
    /// `Consistency` if the point count disagrees with `inputs`, `Domain` if
    /// any value is unusable.
    pub fn from_points(inputs: DesignInputs, points: Vec<PointCorrelations>) -> DesignResult<Self> {
        if points.len() != inputs.len() {
            return Err(DesignError::Consistency {
                what: "correlation batch length differs from design inputs",
            });
        }
        for p in &points {
            p.validate()?;
        }
        Ok(Self { inputs, points })
    }

    pub fn inputs(&self) -> &DesignInputs {
        &self.inputs
    }

    pub fn points(&self) -> &[PointCorrelations] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Run the correlation chain for every point in `inputs`.
pub fn predict_correlations(
    inputs: &DesignInputs,
    library: &SurrogateLibrary,
) -> DesignResult<Correlations> {
    let mut table = inputs.feature_table()?;
    for q in Quantity::PREDICTION_ORDER {
        let values = library.predict(q.name(), &table)?;
        debug!(quantity = q.name(), n = values.len(), "predicted correlation");
        table.insert(q.name(), values)?;
    }

    let (al2, al3) = (column(&table, Quantity::Al2a)?, column(&table, Quantity::Al3)?);
    let (st_s, st_r) = (column(&table, Quantity::StaggerStator)?, column(&table, Quantity::StaggerRotor)?);
    let zeta_s = column(&table, Quantity::ZetaStator)?;
    let (scx_s, scx_r) = (column(&table, Quantity::SCxStator)?, column(&table, Quantity::SCxRotor)?);
    let (yp_s, yp_r) = (column(&table, Quantity::YpStator)?, column(&table, Quantity::YpRotor)?);
    let loss_ratio = column(&table, Quantity::LossRatio)?;
    let eta_lost = column(&table, Quantity::EtaLost)?;
    let beta_rotor = column(&table, Quantity::BetaRotor)?;

    let points = (0..inputs.len())
        .map(|i| PointCorrelations {
            al: PerStation::new(0.0, al2[i], al3[i]),
            zeta_stator: zeta_s[i],
            stagger: PerRow::new(st_s[i], st_r[i]),
            s_cx: PerRow::new(scx_s[i], scx_r[i]),
            yp: PerRow::new(yp_s[i], yp_r[i]),
            loss_ratio: loss_ratio[i],
            eta_lost: eta_lost[i],
            beta_rotor: beta_rotor[i],
        })
        .collect();

    Correlations::from_points(inputs.clone(), points)
}

fn column(table: &FeatureTable, q: Quantity) -> DesignResult<&[f64]> {
    table.get(q.name()).ok_or(DesignError::Consistency {
        what: "predicted quantity missing from feature table",
    })
}
