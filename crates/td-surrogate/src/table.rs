//! Named feature columns for a batch of design points.

use crate::error::{SurrogateError, SurrogateResult};
use nalgebra::DMatrix;
use std::collections::BTreeMap;

/// Equal-length feature columns keyed by name.
///
/// Columns are kept in lexicographic order, which is also the canonical
/// order in which features are handed to a regressor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureTable {
    columns: BTreeMap<String, Vec<f64>>,
}

impl FeatureTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FeatureTable::insert`].
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f64>) -> SurrogateResult<Self> {
        self.insert(name, values)?;
        Ok(self)
    }

    /// Insert or replace a column.
    ///
    /// # Errors
    /// Returns `BatchLength` if the column length differs from the columns
    /// already present (ignoring a column being replaced).
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) -> SurrogateResult<()> {
        let name = name.into();
        let expected = self
            .columns
            .iter()
            .find(|(existing, _)| **existing != name)
            .map(|(_, col)| col.len());
        if let Some(expected) = expected {
            if values.len() != expected {
                return Err(SurrogateError::BatchLength {
                    column: name,
                    expected,
                    found: values.len(),
                });
            }
        }
        self.columns.insert(name, values);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Number of points (rows); zero for an empty table.
    pub fn len(&self) -> usize {
        self.columns.values().next().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Gather the named columns into an `N x k` matrix, one row per point.
    ///
    /// `features` must already be in canonical order; extra table columns are ignored.
    pub(crate) fn select(&self, model: &str, features: &[String]) -> SurrogateResult<DMatrix<f64>> {
        let cols = features
            .iter()
            .map(|f| {
                self.columns
                    .get(f)
                    .ok_or_else(|| SurrogateError::MissingFeature {
                        model: model.to_string(),
                        feature: f.clone(),
                    })
            })
            .collect::<SurrogateResult<Vec<_>>>()?;

        Ok(DMatrix::from_fn(self.len(), cols.len(), |r, c| cols[c][r]))
    }
}
