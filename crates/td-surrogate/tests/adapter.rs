//! Adapter contract tests: feature selection, batching and missing columns.

use proptest::prelude::*;
use td_core::{ErrorKind, TdError};
use td_surrogate::{FeatureTable, FnRegressor, SurrogateError, SurrogateLibrary, SurrogateModel};

fn yp_rotor() -> SurrogateModel {
    // canonical order: M2, psi, s_cx_rotor, stagger_rotor
    SurrogateModel::new(
        "Yp_rotor",
        ["s_cx_rotor", "psi", "M2", "stagger_rotor"],
        Box::new(FnRegressor::new(|r: &[f64]| {
            0.02 + 0.01 * r[0] + 0.005 * r[1] + 0.02 * r[2] + 1e-4 * r[3].abs()
        })),
    )
    .unwrap()
}

#[test]
fn extra_columns_are_dropped() {
    let lib = SurrogateLibrary::new().with_model(yp_rotor());
    let table = FeatureTable::new()
        .with_column("phi", vec![0.8])
        .unwrap()
        .with_column("psi", vec![1.2])
        .unwrap()
        .with_column("M2", vec![0.6])
        .unwrap()
        .with_column("Co", vec![0.6])
        .unwrap()
        .with_column("s_cx_rotor", vec![0.9])
        .unwrap()
        .with_column("stagger_rotor", vec![-50.0])
        .unwrap();
    let y = lib.predict("Yp_rotor", &table).unwrap();
    let expected = 0.02 + 0.01 * 0.6 + 0.005 * 1.2 + 0.02 * 0.9 + 1e-4 * 50.0;
    assert!((y[0] - expected).abs() < 1e-15);
}

#[test]
fn missing_column_is_configuration_error() {
    let lib = SurrogateLibrary::new().with_model(yp_rotor());
    let table = FeatureTable::new()
        .with_column("psi", vec![1.2])
        .unwrap()
        .with_column("M2", vec![0.6])
        .unwrap();
    let err = lib.predict("Yp_rotor", &table).unwrap_err();
    assert!(matches!(err, SurrogateError::MissingFeature { .. }));
    let td: TdError = err.into();
    assert_eq!(td.kind(), ErrorKind::Configuration);
}

proptest! {
    #[test]
    fn batch_output_matches_pointwise(points in prop::collection::vec((0.3_f64..1.2, 0.8_f64..2.5), 1..16)) {
        let model = SurrogateModel::new(
            "loss",
            ["psi", "phi"],
            Box::new(FnRegressor::new(|r: &[f64]| r[0] * r[0] + 0.1 * r[1])),
        ).unwrap();

        let phi: Vec<f64> = points.iter().map(|p| p.0).collect();
        let psi: Vec<f64> = points.iter().map(|p| p.1).collect();
        let table = FeatureTable::new()
            .with_column("phi", phi.clone()).unwrap()
            .with_column("psi", psi.clone()).unwrap();

        let batch = model.predict(&table).unwrap();
        prop_assert_eq!(batch.len(), points.len());
        for (i, y) in batch.iter().enumerate() {
            let single = model.predict_point(&[("phi", phi[i]), ("psi", psi[i])]).unwrap();
            prop_assert_eq!(*y, single);
        }
    }
}
