//! Surrogate model: a regressor bound to a named feature set.

use crate::error::{SurrogateError, SurrogateResult};
use crate::table::FeatureTable;
use nalgebra::DMatrix;
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

/// Error type a backend may return; surfaced as [`SurrogateError::Backend`].
pub type BackendError = Box<dyn std::error::Error + Send + Sync>;

/// Largest tensor grid [`SurrogateModel::grid_extremes`] will evaluate.
pub const MAX_GRID_POINTS: usize = 2_000_000;

/// Output of a regressor for a batch of points.
#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
    /// Mean prediction, one per input row
    pub mean: Vec<f64>,
    /// Predictive standard deviation, if the backend provides one
    pub std: Option<Vec<f64>>,
}

/// Opaque prediction backend.
///
/// `inputs` holds one row per point and one column per feature, with
/// columns in the canonical (lexicographic) feature order. Implementations
/// must be deterministic for a fixed trained state.
pub trait Regressor: Send + Sync {
    fn predict(&self, inputs: &DMatrix<f64>) -> Result<Prediction, BackendError>;

    /// Inputs the backend was trained on (same column order as `predict`).
    ///
    /// When available, a model's valid feature ranges are inferred from them.
    fn training_inputs(&self) -> Option<&DMatrix<f64>> {
        None
    }
}

/// Closed interval of valid values for one feature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureRange {
    pub min: f64,
    pub max: f64,
}

impl FeatureRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, v: f64) -> bool {
        (self.min..=self.max).contains(&v)
    }

    fn linspace(&self, n: usize, i: usize) -> f64 {
        if n <= 1 || i == 0 {
            self.min
        } else if i + 1 == n {
            self.max
        } else {
            self.min + (self.max - self.min) * i as f64 / (n - 1) as f64
        }
    }
}

/// A queried value lying outside a model's valid range.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeViolation {
    pub feature: String,
    pub point: usize,
    pub value: f64,
    pub range: FeatureRange,
}

/// Feature values at one grid point together with the predicted mean there.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtremePoint {
    pub features: BTreeMap<String, f64>,
    pub value: f64,
}

/// Minimum and maximum of a model's mean prediction over its valid ranges.
#[derive(Clone, Debug, PartialEq)]
pub struct GridExtremes {
    pub min: ExtremePoint,
    pub max: ExtremePoint,
}

/// A trained regressor for one named quantity.
pub struct SurrogateModel {
    name: String,
    features: Vec<String>,
    limits: BTreeMap<String, FeatureRange>,
    regressor: Box<dyn Regressor>,
}

impl fmt::Debug for SurrogateModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurrogateModel")
            .field("name", &self.name)
            .field("features", &self.features)
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}

impl SurrogateModel {
    /// Bind a regressor to a quantity name and its required features.
    ///
    /// Features are sorted into canonical order. If the regressor exposes
    /// its training inputs, valid ranges are inferred from them (rounded to
    /// one decimal place).
    ///
    /// # Errors
    /// Returns `InvalidModel` for an empty or duplicated feature list, or
    /// training inputs whose column count disagrees with the feature list.
    pub fn new<I, S>(name: impl Into<String>, features: I, regressor: Box<dyn Regressor>) -> SurrogateResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let mut features: Vec<String> = features.into_iter().map(Into::into).collect();
        features.sort();

        if features.is_empty() {
            return Err(SurrogateError::InvalidModel {
                model: name,
                what: "no input features declared".into(),
            });
        }
        if features.windows(2).any(|w| w[0] == w[1]) {
            return Err(SurrogateError::InvalidModel {
                model: name,
                what: "duplicate input feature".into(),
            });
        }

        let limits = match regressor.training_inputs() {
            Some(train) => infer_limits(&name, &features, train)?,
            None => BTreeMap::new(),
        };

        Ok(Self {
            name,
            features,
            limits,
            regressor,
        })
    }

    /// Override the inferred valid ranges.
    ///
    /// Every declared feature must be covered; ranges for unknown features are rejected.
    pub fn with_limits(mut self, limits: BTreeMap<String, FeatureRange>) -> SurrogateResult<Self> {
        for feature in &self.features {
            if !limits.contains_key(feature) {
                return Err(SurrogateError::InvalidModel {
                    model: self.name.clone(),
                    what: format!("no range given for feature '{feature}'"),
                });
            }
        }
        for (feature, range) in &limits {
            if !self.features.contains(feature) {
                return Err(SurrogateError::InvalidModel {
                    model: self.name.clone(),
                    what: format!("range given for undeclared feature '{feature}'"),
                });
            }
            if !(range.min <= range.max) {
                return Err(SurrogateError::InvalidModel {
                    model: self.name.clone(),
                    what: format!("empty range for feature '{feature}'"),
                });
            }
        }
        self.limits = limits;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Required features, in canonical order.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn limits(&self) -> &BTreeMap<String, FeatureRange> {
        &self.limits
    }

    /// Mean prediction for every point in `table`.
    pub fn predict(&self, table: &FeatureTable) -> SurrogateResult<Vec<f64>> {
        Ok(self.predict_full(table)?.mean)
    }

    /// Mean prediction for a single point given as `(feature, value)` pairs.
    pub fn predict_point(&self, features: &[(&str, f64)]) -> SurrogateResult<f64> {
        let mut table = FeatureTable::new();
        for (name, value) in features {
            table.insert(*name, vec![*value])?;
        }
        let mean = self.predict(&table)?;
        Ok(mean[0])
    }

    /// Mean and (if available) standard deviation for every point in `table`.
    ///
    /// Extra columns are ignored. Queries outside the valid ranges are
    /// logged and still evaluated.
    pub fn predict_full(&self, table: &FeatureTable) -> SurrogateResult<Prediction> {
        let inputs = table.select(&self.name, &self.features)?;

        for v in self.out_of_range(table) {
            warn!(
                model = %self.name,
                feature = %v.feature,
                point = v.point,
                value = v.value,
                min = v.range.min,
                max = v.range.max,
                "surrogate queried outside its training range"
            );
        }

        self.evaluate(&inputs)
    }

    fn evaluate(&self, inputs: &DMatrix<f64>) -> SurrogateResult<Prediction> {
        let expected = inputs.nrows();
        let prediction = self
            .regressor
            .predict(inputs)
            .map_err(|e| SurrogateError::Backend {
                model: self.name.clone(),
                message: e.to_string(),
            })?;

        let std_len = prediction.std.as_ref().map_or(expected, Vec::len);
        for found in [prediction.mean.len(), std_len] {
            if found != expected {
                return Err(SurrogateError::PredictionLength {
                    model: self.name.clone(),
                    expected,
                    found,
                });
            }
        }
        Ok(prediction)
    }

    /// Every queried value lying outside its feature's valid range.
    pub fn out_of_range(&self, table: &FeatureTable) -> Vec<RangeViolation> {
        let mut violations = Vec::new();
        for (feature, range) in &self.limits {
            let Some(column) = table.get(feature) else {
                continue;
            };
            for (point, &value) in column.iter().enumerate() {
                if !range.contains(value) {
                    violations.push(RangeViolation {
                        feature: feature.clone(),
                        point,
                        value,
                        range: *range,
                    });
                }
            }
        }
        violations
    }

    /// Search a full tensor grid over the valid ranges for the extreme mean predictions.
    ///
    /// Each feature is sampled at `points_per_axis` evenly spaced values, so
    /// the grid holds `points_per_axis ^ features` points. Ties resolve to the
    /// first grid point in row-major order.
    pub fn grid_extremes(&self, points_per_axis: usize) -> SurrogateResult<GridExtremes> {
        if points_per_axis == 0 {
            return Err(SurrogateError::InvalidModel {
                model: self.name.clone(),
                what: "grid needs at least one point per axis".into(),
            });
        }
        let ranges = self
            .features
            .iter()
            .map(|f| {
                self.limits.get(f).copied().ok_or_else(|| SurrogateError::InvalidModel {
                    model: self.name.clone(),
                    what: format!("no valid range known for feature '{f}'"),
                })
            })
            .collect::<SurrogateResult<Vec<_>>>()?;

        let k = ranges.len();
        let total = u32::try_from(k)
            .ok()
            .and_then(|k| points_per_axis.checked_pow(k))
            .filter(|&n| n <= MAX_GRID_POINTS)
            .ok_or_else(|| SurrogateError::InvalidModel {
                model: self.name.clone(),
                what: format!("grid of {points_per_axis}^{k} points exceeds {MAX_GRID_POINTS}"),
            })?;

        // Row-major: the last feature varies fastest.
        let grid_value = |row: usize, col: usize| {
            let stride = points_per_axis.pow((k - 1 - col) as u32);
            ranges[col].linspace(points_per_axis, (row / stride) % points_per_axis)
        };
        let inputs = DMatrix::from_fn(total, k, grid_value);
        let mean = self.evaluate(&inputs)?.mean;

        let mut i_min = 0;
        let mut i_max = 0;
        for (i, v) in mean.iter().enumerate() {
            if *v < mean[i_min] {
                i_min = i;
            }
            if *v > mean[i_max] {
                i_max = i;
            }
        }

        let point = |row: usize| ExtremePoint {
            features: self
                .features
                .iter()
                .enumerate()
                .map(|(c, f)| (f.clone(), inputs[(row, c)]))
                .collect(),
            value: mean[row],
        };

        Ok(GridExtremes {
            min: point(i_min),
            max: point(i_max),
        })
    }
}

fn round_to_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn infer_limits(
    model: &str,
    features: &[String],
    train: &DMatrix<f64>,
) -> SurrogateResult<BTreeMap<String, FeatureRange>> {
    if train.ncols() != features.len() || train.nrows() == 0 {
        return Err(SurrogateError::InvalidModel {
            model: model.to_string(),
            what: format!(
                "training inputs are {}x{}, expected {} feature columns",
                train.nrows(),
                train.ncols(),
                features.len()
            ),
        });
    }
    Ok(features
        .iter()
        .enumerate()
        .map(|(c, f)| {
            let col = train.column(c);
            (f.clone(), FeatureRange::new(round_to_tenth(col.min()), round_to_tenth(col.max())))
        })
        .collect())
}
