//! Reference design: phi 0.8, psi 1.2, M2 0.6, Al [0, 20, -20], equal
//! stator/rotor loss split, 95 % efficiency.

mod common;

use common::{assert_close, constant_library, resolve};
use td_core::units::{k, pa, rad_per_s};
use td_core::{Row, Station};
use td_meanline::{
    Correlations, DesignAssumptions, DesignInputs, TurbineDesign, predict_correlations,
};

const REL: f64 = 1e-10;

fn check(actual: &[f64; 3], expected: [f64; 3], what: &str) {
    for (a, e) in actual.iter().zip(expected) {
        assert_close(*a, e, REL, what);
    }
}

#[test]
fn non_dimensional_state() {
    let resolved = resolve(
        DesignInputs::single(0.8, 1.2, 0.6, 0.6).unwrap(),
        &constant_library(),
    );
    let s = &resolved.states()[0];

    assert_close(s.u_sqrt_cp_to1, 0.3933453907801268, REL, "U/sqrt(cpTo1)");
    check(s.v_u.as_array(), [0.8, 0.8513422179807297, 0.8513422179807297], "V/U");
    check(
        s.al_rel.as_array(),
        [-51.34019174590991, -41.54189847818017, -58.21805416515275],
        "Al_rel",
    );
    check(
        s.ma.as_array(),
        [0.5618668912653204, 0.6, 0.6694382584582174],
        "Ma",
    );
    check(
        s.ma_rel.as_array(),
        [0.899425877418005, 0.753289834836678, 1.1943811787592489],
        "Ma_rel",
    );
    check(
        s.capacity.as_array(),
        [1.0873649643776486, 1.133121913121173, 1.2048421021913807],
        "Q",
    );
    check(s.to_to1.as_array(), [1.0, 1.0, 0.8143352842624352], "To/To1");
    check(
        s.po_po1.as_array(),
        [1.0, 0.9784524812951728, 0.4183979586385857],
        "Po/Po1",
    );
    check(
        s.ax_ax1.as_array(),
        [1.0, 1.04369389220424, 2.0714356839493893],
        "A/A1",
    );
    check(
        s.t_to1.as_array(),
        [0.9504894091366495, 0.943930526713234, 0.758265810975669],
        "T/To1",
    );
    check(
        s.p_po1.as_array(),
        [0.8149310477963219, 0.775426201308086, 0.31385106263468593],
        "P/Po1",
    );
    check(
        s.po_rel_po1.as_array(),
        [1.3502820820247, 1.112237809635256, 0.7357121431743925],
        "Po_rel/Po1",
    );
    assert_close(s.reaction(), 0.9658788905932211, REL, "reaction");
    assert_close(s.efficiency(), 95.0, REL, "efficiency");
}

#[test]
fn reference_station_is_exact() {
    let resolved = resolve(
        DesignInputs::single(0.8, 1.2, 0.6, 0.6).unwrap(),
        &constant_library(),
    );
    let s = &resolved.states()[0];
    assert_eq!(s.to_to1[Station::Inlet], 1.0);
    assert_eq!(s.po_po1[Station::Inlet], 1.0);
    assert_eq!(s.ax_ax1[Station::Inlet], 1.0);
}

#[test]
fn scaled_by_shaft_speed() {
    let resolved = resolve(
        DesignInputs::single(0.8, 1.2, 0.6, 0.6).unwrap(),
        &constant_library(),
    );
    let scaled = resolved
        .scale_by_omega(rad_per_s(314.159), k(1600.0), pa(1.6e6))
        .unwrap();
    let g = scaled.geometry();

    assert_close(g.u.value, 521.8007213949788, REL, "U");
    assert_close(g.rm.value, 1.6609446853185135, REL, "rm");
    let dr = g.dr.map(|d| d.value);
    check(
        dr.as_array(),
        [0.16751682075657198, 0.17483628266510665, 0.34700032017691695],
        "Dr",
    );
    assert_close(g.ax1.value, 1.7482094349807908, REL, "A1");
    assert_close(g.mdot1.value, 2292.7577406221717, REL, "mdot");

    let expected_cx = [0.10698534481927456, 0.16307393838813236];
    let expected_pitch = [0.05349267240963728, 0.08153696919406618];
    let expected_nb = [195.0925757254024, 127.99130683889564];
    for row in Row::ALL {
        let i = row.index();
        assert_close(g.cx[row].value, expected_cx[i], REL, "cx");
        assert_close(g.pitch[row].value, expected_pitch[i], REL, "pitch");
        assert_close(g.n_blades[row], expected_nb[i], REL, "blade count");
    }

    assert_close(g.to[Station::Exit].value, 1600.0 * 0.8143352842624352, REL, "To3");
    assert_close(g.p[Station::Inter].value, 1.6e6 * 0.775426201308086, REL, "P2");
    for s in Station::ALL {
        assert!(g.rh[s].value > 0.0 && g.rc[s].value > g.rh[s].value);
    }
}

#[test]
fn mass_flow_scaling_recovers_shaft_speed() {
    let resolved = resolve(
        DesignInputs::single(0.8, 1.2, 0.6, 0.6).unwrap(),
        &constant_library(),
    );
    let by_mdot = resolved.scale_at_datum_mass_flow(2292.7577406221717).unwrap();
    assert_close(by_mdot.geometry().omega.value, 314.159, 1e-9, "Omega");
    assert_close(by_mdot.geometry().rm.value, 1.6609446853185135, 1e-9, "rm");
}

#[test]
fn midspan_metal_angles_follow_mean_line() {
    let resolved = resolve(
        DesignInputs::single(0.8, 1.2, 0.6, 0.6).unwrap(),
        &constant_library(),
    );
    let scaled = resolved.scale_at_datum().unwrap();
    let chi = scaled.geometry().chi;
    let s = scaled.state();
    assert_close(chi[Row::Stator][1], s.al[Station::Inter], 1e-9, "stator exit");
    assert_close(chi[Row::Rotor][0], s.al_rel[Station::Inter], 1e-9, "rotor inlet");
    assert_close(chi[Row::Rotor][1], s.al_rel[Station::Exit], 1e-9, "rotor exit");
}

#[test]
fn stator_axial_velocity_ratio_leaves_rotor_unchanged() {
    let inputs = DesignInputs::single(0.8, 1.2, 0.6, 0.6).unwrap();
    let mut points = predict_correlations(&inputs, &constant_library())
        .unwrap()
        .points()
        .to_vec();
    points[0].zeta_stator = 1.3;
    let correlations = Correlations::from_points(inputs.clone(), points).unwrap();

    let resolved = TurbineDesign::new(inputs, DesignAssumptions::default())
        .unwrap()
        .with_correlations(correlations)
        .unwrap()
        .resolve()
        .unwrap();
    let scaled = resolved.scale_at_datum().unwrap();
    let s = scaled.state();
    assert_close(s.vx_u[Station::Inlet], 1.04, 1e-12, "Vx1/U");
    assert_eq!(s.vx_u[Station::Inter], 0.8);
    assert_eq!(s.vx_u[Station::Exit], 0.8);

    let chi = scaled.geometry().chi;
    assert_close(chi[Row::Rotor][0], s.al_rel[Station::Inter], 1e-9, "rotor inlet");
    assert_close(chi[Row::Rotor][1], s.al_rel[Station::Exit], 1e-9, "rotor exit");
}
