// tests/entanglement_tests.rs

use quantum_games::games::PairPhase;
use quantum_games::{check_anti_correlation, EntanglementModel, GameError, Outcome, Particle, RandomBit};

const TRIALS: usize = 10_000;

fn up_fraction(which: Particle, seed: u64) -> Result<f64, GameError> {
    let mut model = EntanglementModel::new(RandomBit::seeded(seed));
    let mut ups = 0usize;
    for _ in 0..TRIALS {
        model.entangle();
        let (result_self, result_other) = model.measure(which)?;
        assert_ne!(result_self, result_other);
        if result_self == Outcome::Up {
            ups += 1;
        }
    }
    Ok(ups as f64 / TRIALS as f64)
}

#[test]
fn test_results_always_opposite() -> Result<(), GameError> {
    let mut model = EntanglementModel::new(RandomBit::seeded(3));
    for i in 0..TRIALS {
        model.entangle();
        check_anti_correlation(model.pair())?;
        let which = if i % 2 == 0 { Particle::A } else { Particle::B };
        let (result_self, result_other) = model.measure(which)?;
        assert_eq!(result_other, !result_self);
        assert_eq!(model.pair().get(which).value(), Some(result_self));
        assert_eq!(model.pair().get(which.partner()).value(), Some(result_other));
        check_anti_correlation(model.pair())?;
    }
    Ok(())
}

#[test]
fn test_measurement_order_does_not_matter() -> Result<(), GameError> {
    let a_first = up_fraction(Particle::A, 21)?;
    let b_first = up_fraction(Particle::B, 22)?;
    println!("A first: {:.4}, B first: {:.4}", a_first, b_first);
    assert!((a_first - 0.5).abs() < 0.03);
    assert!((b_first - 0.5).abs() < 0.03);
    Ok(())
}

#[test]
fn test_lifecycle_and_misuse() -> Result<(), GameError> {
    let mut model = EntanglementModel::new(RandomBit::seeded(9));
    assert_eq!(model.phase(), PairPhase::Unentangled);
    assert!(model.measure(Particle::B).is_err());
    assert_eq!(model.phase(), PairPhase::Unentangled);

    model.entangle();
    assert_eq!(model.phase(), PairPhase::Entangled);
    let (a, b) = model.measure(Particle::A)?;
    assert_eq!(model.phase(), PairPhase::Resolved);

    let again = model.measure(Particle::A);
    assert!(matches!(again, Err(GameError::InvalidTransition { .. })));
    assert_eq!(model.pair().get(Particle::A).value(), Some(a), "refused measurement leaves values alone");
    assert_eq!(model.pair().get(Particle::B).value(), Some(b));

    model.entangle();
    assert!(!model.pair().get(Particle::A).is_collapsed());
    assert!(!model.pair().get(Particle::B).is_collapsed());
    Ok(())
}
