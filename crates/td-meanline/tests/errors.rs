//! Error classification across the derivation stages.

mod common;

use common::{constant_library, resolve};
use td_core::ErrorKind;
use td_core::units::{k, kgps, pa, rad_per_s};
use td_meanline::{
    Correlations, DesignAssumptions, DesignInputs, GeometryScaler, Quantity, TurbineDesign,
    predict_correlations, resolve_states,
};
use td_surrogate::ConstantRegressor;

#[test]
fn choked_stator_exit_is_domain_error() {
    let design = TurbineDesign::new(
        DesignInputs::single(0.8, 1.2, 1.05, 0.6).unwrap(),
        DesignAssumptions::default(),
    )
    .unwrap();
    let err = design.predict(&constant_library()).unwrap().resolve().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Domain);
}

#[test]
fn loading_beyond_available_enthalpy_is_domain_error() {
    // cpTo1/U^2 is about 6.5 at this point.
    let design = TurbineDesign::new(
        DesignInputs::single(0.8, 7.0, 0.6, 0.6).unwrap(),
        DesignAssumptions::default(),
    )
    .unwrap();
    let err = design.predict(&constant_library()).unwrap().resolve().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Domain);
}

#[test]
fn scaling_a_batch_is_configuration_error() {
    let inputs =
        DesignInputs::new(vec![0.8, 0.7], vec![1.2, 1.4], vec![0.6, 0.6], vec![0.6, 0.6]).unwrap();
    let resolved = resolve(inputs, &constant_library());
    assert_eq!(resolved.len(), 2);
    let err = resolved
        .scale_by_omega(rad_per_s(314.159), k(1600.0), pa(1.6e6))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    let err = resolved.scale_by_mass_flow(kgps(100.0), k(1600.0), pa(1.6e6)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn stale_correlations_are_consistency_error() {
    let old = DesignInputs::single(0.8, 1.2, 0.6, 0.6).unwrap();
    let new = DesignInputs::single(0.7, 1.2, 0.6, 0.6).unwrap();
    let correlations = predict_correlations(&old, &constant_library()).unwrap();
    let gas = DesignAssumptions::default().gas().unwrap();

    let err = resolve_states(&new, &correlations, &gas).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Consistency);

    let design = TurbineDesign::new(new, DesignAssumptions::default()).unwrap();
    let err = design.with_correlations(correlations).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Consistency);
}

#[test]
fn scaling_without_resolved_state_is_consistency_error() {
    let inputs = DesignInputs::single(0.8, 1.2, 0.6, 0.6).unwrap();
    let correlations = predict_correlations(&inputs, &constant_library()).unwrap();
    let assumptions = DesignAssumptions::default();
    let err = GeometryScaler::new(&[], &correlations, &assumptions).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Consistency);
}

#[test]
fn scaler_rejects_states_from_other_inputs() {
    let a = resolve(DesignInputs::single(0.8, 1.2, 0.6, 0.6).unwrap(), &constant_library());
    let b = resolve(DesignInputs::single(0.7, 1.2, 0.6, 0.6).unwrap(), &constant_library());
    let err = GeometryScaler::new(a.states(), b.correlations(), &DesignAssumptions::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Consistency);
}

#[test]
fn mismatched_batch_lengths_are_configuration_error() {
    let err = DesignInputs::new(vec![0.8, 0.7], vec![1.2, 1.4], vec![0.6], vec![0.6, 0.6])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn missing_correlation_is_configuration_error() {
    let mut library = td_surrogate::SurrogateLibrary::new();
    library.insert(
        Quantity::Al2a
            .model(Box::new(ConstantRegressor::new(20.0)))
            .unwrap(),
    );
    let inputs = DesignInputs::single(0.8, 1.2, 0.6, 0.6).unwrap();
    let err = predict_correlations(&inputs, &library).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn correlation_length_mismatch_is_consistency_error() {
    let inputs =
        DesignInputs::new(vec![0.8, 0.7], vec![1.2, 1.4], vec![0.6, 0.6], vec![0.6, 0.6]).unwrap();
    let single = DesignInputs::single(0.8, 1.2, 0.6, 0.6).unwrap();
    let one = predict_correlations(&single, &constant_library()).unwrap();
    let err = Correlations::from_points(inputs, one.points().to_vec()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Consistency);
}

#[test]
fn failed_scaling_leaves_resolved_design_usable() {
    let resolved = resolve(DesignInputs::single(0.8, 1.2, 0.6, 0.6).unwrap(), &constant_library());
    assert!(resolved.scale_by_omega(rad_per_s(-1.0), k(1600.0), pa(1.6e6)).is_err());
    assert!(resolved.scale_at_datum().is_ok());
}
