#![allow(dead_code)]

use td_core::{Tolerances, nearly_equal};
use td_meanline::{DesignAssumptions, DesignInputs, Quantity, ResolvedDesign, TurbineDesign};
use td_surrogate::{ConstantRegressor, FnRegressor, SurrogateLibrary};

/// Constant value used for `q` unless overridden.
fn baseline(q: Quantity) -> f64 {
    match q {
        Quantity::Al2a => 20.0,
        Quantity::Al3 => -20.0,
        Quantity::StaggerStator => 45.0,
        Quantity::StaggerRotor => -40.0,
        Quantity::ZetaStator => 1.0,
        Quantity::SCxStator | Quantity::SCxRotor => 0.5,
        Quantity::YpStator => 0.05,
        Quantity::YpRotor => 0.05,
        Quantity::LossRatio => 0.5,
        Quantity::EtaLost => 0.05,
        Quantity::BetaRotor => 12.0,
    }
}

/// Every quantity constant at its baseline value.
pub fn constant_library() -> SurrogateLibrary {
    let mut lib = SurrogateLibrary::new();
    for q in Quantity::PREDICTION_ORDER {
        lib.insert(q.model(Box::new(ConstantRegressor::new(baseline(q)))).unwrap());
    }
    lib
}

/// Flow angles from an Euler-consistent 50 % reaction repeating stage;
/// the rest at baseline.
pub fn analytic_library() -> SurrogateLibrary {
    // Features arrive in canonical order: Co, M2, phi, psi.
    let al2 = FnRegressor::new(|r: &[f64]| ((0.5 + 0.5 * r[3]) / r[2]).atan().to_degrees());
    let al3 = FnRegressor::new(|r: &[f64]| ((0.5 - 0.5 * r[3]) / r[2]).atan().to_degrees());
    constant_library()
        .with_model(Quantity::Al2a.model(Box::new(al2)).unwrap())
        .with_model(Quantity::Al3.model(Box::new(al3)).unwrap())
}

pub fn resolve(inputs: DesignInputs, library: &SurrogateLibrary) -> ResolvedDesign {
    TurbineDesign::new(inputs, DesignAssumptions::default())
        .unwrap()
        .predict(library)
        .unwrap()
        .resolve()
        .unwrap()
}

pub fn assert_close(actual: f64, expected: f64, rel: f64, what: &str) {
    let tol = Tolerances { abs: 1e-12, rel };
    assert!(
        nearly_equal(actual, expected, tol),
        "{what}: got {actual}, expected {expected}"
    );
}
