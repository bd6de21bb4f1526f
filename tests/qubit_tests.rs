// tests/qubit_tests.rs

use proptest::prelude::*;
use quantum_games::core::BLOCH_RADIUS;
use quantum_games::{check_normalization, validate_qubit_state, QubitModel};

const TEST_TOLERANCE: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64, context: &str) {
    assert!(
        (actual - expected).abs() < TEST_TOLERANCE,
        "{}: actual {}, expected {}",
        context,
        actual,
        expected
    );
}

#[test]
fn test_north_pole_for_any_phi() {
    let mut model = QubitModel::new();
    for phi in [0.0, 45.0, 90.0, 180.0, 270.0, 359.0] {
        let state = model.set_angles(0.0, phi).compute_state();
        assert_eq!(state.prob0, 1.0);
        assert_eq!(state.prob1, 0.0);
        assert_eq!(state.position.x, 0.0);
        assert_eq!(state.position.y, 0.0);
        assert_eq!(state.position.z, BLOCH_RADIUS);
    }
}

#[test]
fn test_south_pole() {
    let mut model = QubitModel::new();
    let state = model.set_angles(180.0, 120.0).compute_state();
    assert_close(state.prob0, 0.0, "prob0 at theta=180");
    assert_close(state.prob1, 1.0, "prob1 at theta=180");
    assert_close(state.position.x, 0.0, "x at theta=180");
    assert_close(state.position.y, 0.0, "y at theta=180");
    assert_close(state.position.z, -BLOCH_RADIUS, "z at theta=180");
}

#[test]
fn test_quarter_turn_positions() {
    let mut model = QubitModel::with_radius(1.0);
    let plus_y = model.set_angles(90.0, 90.0).compute_state();
    assert_close(plus_y.position.x, 0.0, "x of |+i>");
    assert_close(plus_y.position.y, 1.0, "y of |+i>");
    assert_close(plus_y.position.z, 0.0, "z of |+i>");

    let minus_x = model.set_angles(90.0, 180.0).compute_state();
    assert_close(minus_x.position.x, -1.0, "x of |->");
}

#[test]
fn test_out_of_range_input_is_clamped() {
    let mut model = QubitModel::new();
    let clamped = model.set_angles(250.0, 0.0).compute_state();
    let pole = model.set_angles(180.0, 0.0).compute_state();
    assert_eq!(clamped, pole);
    assert_eq!(model.set_angles(-5.0, 720.0).angles().theta(), 0.0);
    assert_eq!(model.angles().phi(), 0.0);
}

proptest! {
    #[test]
    fn prop_probabilities_sum_to_one(theta in 0.0f64..=180.0, phi in 0.0f64..360.0) {
        let mut model = QubitModel::new();
        let state = model.set_angles(theta, phi).compute_state();
        prop_assert!(check_normalization(&state, None).is_ok());
        prop_assert!(validate_qubit_state(&state, model.radius()).is_ok());
    }

    #[test]
    fn prop_any_input_stays_in_range(theta in proptest::num::f64::ANY, phi in proptest::num::f64::ANY) {
        let mut model = QubitModel::new();
        let angles = model.set_angles(theta, phi).angles();
        prop_assert!((0.0..=180.0).contains(&angles.theta()));
        prop_assert!((0.0..360.0).contains(&angles.phi()));
        prop_assert!(check_normalization(&model.compute_state(), None).is_ok());
    }

    #[test]
    fn prop_prob0_falls_as_theta_rises(a in 0.0f64..=180.0, b in 0.0f64..=180.0) {
        let mut model = QubitModel::new();
        let p_a = model.set_angles(a.min(b), 0.0).compute_state().prob0;
        let p_b = model.set_angles(a.max(b), 0.0).compute_state().prob0;
        prop_assert!(p_a + TEST_TOLERANCE >= p_b);
    }
}
