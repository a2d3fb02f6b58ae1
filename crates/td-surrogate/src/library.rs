//! Dispatch table from quantity name to surrogate model.

use crate::error::{SurrogateError, SurrogateResult};
use crate::model::SurrogateModel;
use crate::table::FeatureTable;
use std::collections::BTreeMap;

/// A family of surrogate models keyed by the quantity each one predicts.
#[derive(Debug, Default)]
pub struct SurrogateLibrary {
    models: BTreeMap<String, SurrogateModel>,
}

impl SurrogateLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model under its own name, replacing any previous one.
    pub fn insert(&mut self, model: SurrogateModel) -> Option<SurrogateModel> {
        self.models.insert(model.name().to_string(), model)
    }

    pub fn with_model(mut self, model: SurrogateModel) -> Self {
        self.insert(model);
        self
    }

    pub fn get(&self, name: &str) -> SurrogateResult<&SurrogateModel> {
        self.models
            .get(name)
            .ok_or_else(|| SurrogateError::UnknownQuantity {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Predict the named quantity for every point in `table`.
    pub fn predict(&self, name: &str, table: &FeatureTable) -> SurrogateResult<Vec<f64>> {
        self.get(name)?.predict(table)
    }
}
