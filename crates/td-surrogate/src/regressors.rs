//! Simple regressors for stubs, analytic correlations and tests.

use crate::model::{BackendError, Prediction, Regressor};
use nalgebra::DMatrix;

/// Returns the same value for every point.
#[derive(Clone, Debug)]
pub struct ConstantRegressor {
    value: f64,
    std: Option<f64>,
    training: Option<DMatrix<f64>>,
}

impl ConstantRegressor {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            std: None,
            training: None,
        }
    }

    pub fn with_std(mut self, std: f64) -> Self {
        self.std = Some(std);
        self
    }

    /// Attach nominal training inputs so valid ranges can be inferred.
    pub fn with_training_inputs(mut self, inputs: DMatrix<f64>) -> Self {
        self.training = Some(inputs);
        self
    }
}

impl Regressor for ConstantRegressor {
    fn predict(&self, inputs: &DMatrix<f64>) -> Result<Prediction, BackendError> {
        let n = inputs.nrows();
        Ok(Prediction {
            mean: vec![self.value; n],
            std: self.std.map(|s| vec![s; n]),
        })
    }

    fn training_inputs(&self) -> Option<&DMatrix<f64>> {
        self.training.as_ref()
    }
}

/// Evaluates a closure on each feature row (features in canonical order).
pub struct FnRegressor {
    f: Box<dyn Fn(&[f64]) -> f64 + Send + Sync>,
    training: Option<DMatrix<f64>>,
}

impl FnRegressor {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        Self {
            f: Box::new(f),
            training: None,
        }
    }

    pub fn with_training_inputs(mut self, inputs: DMatrix<f64>) -> Self {
        self.training = Some(inputs);
        self
    }
}

impl Regressor for FnRegressor {
    fn predict(&self, inputs: &DMatrix<f64>) -> Result<Prediction, BackendError> {
        let mut row = vec![0.0; inputs.ncols()];
        let mut mean = Vec::with_capacity(inputs.nrows());
        for r in 0..inputs.nrows() {
            for (c, slot) in row.iter_mut().enumerate() {
                *slot = inputs[(r, c)];
            }
            let y = (self.f)(&row);
            if !y.is_finite() {
                return Err(format!("non-finite prediction {y} at row {r}").into());
            }
            mean.push(y);
        }
        Ok(Prediction { mean, std: None })
    }

    fn training_inputs(&self) -> Option<&DMatrix<f64>> {
        self.training.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_fills_batch() {
        let reg = ConstantRegressor::new(0.5).with_std(0.01);
        let p = reg.predict(&DMatrix::zeros(4, 2)).unwrap();
        assert_eq!(p.mean, vec![0.5; 4]);
        assert_eq!(p.std, Some(vec![0.01; 4]));
    }

    #[test]
    fn fn_regressor_sees_rows() {
        let reg = FnRegressor::new(|row: &[f64]| row.iter().sum());
        let inputs = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let p = reg.predict(&inputs).unwrap();
        assert_eq!(p.mean, vec![6.0, 15.0]);
    }

    #[test]
    fn fn_regressor_rejects_nan() {
        let reg = FnRegressor::new(|row: &[f64]| row[0].ln());
        let inputs = DMatrix::from_row_slice(1, 1, &[-1.0]);
        assert!(reg.predict(&inputs).is_err());
    }
}
