//! Batch of design-variable points.

use crate::error::{DesignError, DesignResult};
use td_surrogate::FeatureTable;

/// Feature column names used by the correlation chain.
pub const PHI: &str = "phi";
pub const PSI: &str = "psi";
pub const M2: &str = "M2";
pub const CO: &str = "Co";

/// One design point: flow coefficient, loading coefficient, stator exit
/// Mach number and Zweifel-like loading coefficient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DesignPoint {
    pub phi: f64,
    pub psi: f64,
    pub m2: f64,
    pub co: f64,
}

/// Equal-length columns of design variables.
///
/// Every value is positive and finite; construction fails otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct DesignInputs {
    phi: Vec<f64>,
    psi: Vec<f64>,
    m2: Vec<f64>,
    co: Vec<f64>,
}

impl DesignInputs {
    pub fn new(phi: Vec<f64>, psi: Vec<f64>, m2: Vec<f64>, co: Vec<f64>) -> DesignResult<Self> {
        let n = phi.len();
        if n == 0 {
            return Err(DesignError::config("design inputs must hold at least one point"));
        }
        for (name, col) in [(PSI, &psi), (M2, &m2), (CO, &co)] {
            if col.len() != n {
                return Err(DesignError::config(format!(
                    "design input '{name}' has {} points, expected {n}",
                    col.len()
                )));
            }
        }
        for (name, col) in [(PHI, &phi), (PSI, &psi), (M2, &m2), (CO, &co)] {
            if let Some(v) = col.iter().find(|v| !(v.is_finite() && **v > 0.0)) {
                return Err(DesignError::config(format!(
                    "design input '{name}' must be positive and finite, got {v}"
                )));
            }
        }
        Ok(Self { phi, psi, m2, co })
    }

    /// A single-point batch.
    pub fn single(phi: f64, psi: f64, m2: f64, co: f64) -> DesignResult<Self> {
        Self::new(vec![phi], vec![psi], vec![m2], vec![co])
    }

    pub fn from_points(points: &[DesignPoint]) -> DesignResult<Self> {
        Self::new(
            points.iter().map(|p| p.phi).collect(),
            points.iter().map(|p| p.psi).collect(),
            points.iter().map(|p| p.m2).collect(),
            points.iter().map(|p| p.co).collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.phi.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phi.is_empty()
    }

    pub fn phi(&self) -> &[f64] {
        &self.phi
    }

    pub fn psi(&self) -> &[f64] {
        &self.psi
    }

    pub fn m2(&self) -> &[f64] {
        &self.m2
    }

    pub fn co(&self) -> &[f64] {
        &self.co
    }

    pub fn point(&self, i: usize) -> Option<DesignPoint> {
        (i < self.len()).then(|| DesignPoint {
            phi: self.phi[i],
            psi: self.psi[i],
            m2: self.m2[i],
            co: self.co[i],
        })
    }

    pub fn points(&self) -> impl Iterator<Item = DesignPoint> + '_ {
        (0..self.len()).filter_map(|i| self.point(i))
    }

    /// The four design variables as surrogate feature columns.
    pub fn feature_table(&self) -> DesignResult<FeatureTable> {
        Ok(FeatureTable::new()
            .with_column(PHI, self.phi.clone())?
            .with_column(PSI, self.psi.clone())?
            .with_column(M2, self.m2.clone())?
            .with_column(CO, self.co.clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use td_core::ErrorKind;

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = DesignInputs::new(vec![0.8, 0.6], vec![1.2], vec![0.6, 0.6], vec![0.6, 0.6])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("psi"));
    }

    #[test]
    fn non_positive_values_are_rejected() {
        assert!(DesignInputs::single(0.0, 1.2, 0.6, 0.6).is_err());
        assert!(DesignInputs::single(0.8, 1.2, f64::NAN, 0.6).is_err());
        assert!(DesignInputs::single(0.8, -1.0, 0.6, 0.6).is_err());
    }

    #[test]
    fn empty_batch_is_rejected() {
        let err = DesignInputs::new(vec![], vec![], vec![], vec![]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn feature_table_uses_correlation_names() {
        let inputs = DesignInputs::single(0.8, 1.2, 0.6, 0.7).unwrap();
        let table = inputs.feature_table().unwrap();
        assert_eq!(table.get("M2"), Some(&[0.6][..]));
        assert_eq!(table.get("Co"), Some(&[0.7][..]));
        assert_eq!(table.len(), 1);
    }
}
