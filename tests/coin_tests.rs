// tests/coin_tests.rs

use quantum_games::games::CoinPhase;
use quantum_games::{CoinFace, CoinModel, GameError, RandomBit};

// 99.9th percentile of the chi-square distribution with one degree of freedom
const CHI_SQUARE_CRITICAL: f64 = 10.828;

#[test]
fn test_full_lifecycle() -> Result<(), GameError> {
    let mut coin = CoinModel::new(RandomBit::seeded(17));
    assert_eq!(coin.phase(), CoinPhase::Idle);
    assert_eq!(coin.current_probabilities(), (0.5, 0.5));

    coin.flip()?;
    assert_eq!(coin.phase(), CoinPhase::Superposition);
    assert_eq!(coin.current_probabilities(), (0.5, 0.5), "superposition is shown as an even split");

    let face = coin.measure()?;
    assert_eq!(coin.phase(), CoinPhase::Collapsed(face));

    coin.reset();
    assert_eq!(coin.phase(), CoinPhase::Idle);
    Ok(())
}

#[test]
fn test_measured_face_reads_certain() -> Result<(), GameError> {
    for seed in 0..20 {
        let mut coin = CoinModel::new(RandomBit::seeded(seed));
        coin.flip()?;
        let expected = match coin.measure()? {
            CoinFace::Heads => (1.0, 0.0),
            CoinFace::Tails => (0.0, 1.0),
        };
        assert_eq!(coin.current_probabilities(), expected);
    }
    Ok(())
}

#[test]
fn test_second_measure_keeps_outcome() -> Result<(), GameError> {
    let mut coin = CoinModel::new(RandomBit::seeded(5));
    coin.flip()?;
    let first = coin.measure()?;

    let second = coin.measure();
    assert!(matches!(second, Err(GameError::InvalidTransition { .. })), "got {:?}", second);
    assert_eq!(coin.outcome(), Some(first));
    assert_eq!(coin.phase(), CoinPhase::Collapsed(first));
    Ok(())
}

#[test]
fn test_outcomes_are_fair() -> Result<(), GameError> {
    let trials = 20_000;
    let mut coin = CoinModel::new(RandomBit::seeded(0xC01));
    let mut heads = 0usize;
    for _ in 0..trials {
        coin.reset();
        coin.flip()?;
        if coin.measure()? == CoinFace::Heads {
            heads += 1;
        }
    }
    let tails = trials - heads;
    let expected = trials as f64 / 2.0;
    let chi_square = ((heads as f64 - expected).powi(2) + (tails as f64 - expected).powi(2)) / expected;
    println!("heads={} tails={} chi2={:.3}", heads, tails, chi_square);
    assert!(chi_square < CHI_SQUARE_CRITICAL, "chi-square {} exceeds {}", chi_square, CHI_SQUARE_CRITICAL);
    Ok(())
}

#[test]
fn test_seeded_coins_agree() -> Result<(), GameError> {
    let run = |seed| -> Result<Vec<CoinFace>, GameError> {
        let mut coin = CoinModel::new(RandomBit::seeded(seed));
        (0..32)
            .map(|_| {
                coin.reset();
                coin.flip()?;
                coin.measure()
            })
            .collect()
    };
    assert_eq!(run(77)?, run(77)?);
    Ok(())
}
