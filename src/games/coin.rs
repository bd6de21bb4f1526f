// src/games/coin.rs

use crate::core::{CoinFace, GameError, RandomBit};
use serde::Serialize;
use tracing::debug;

/// Lifecycle of the quantum coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CoinPhase {
    /// Waiting to be flipped.
    Idle,
    /// Flipped, not yet measured.
    Superposition,
    /// Measured; the face stays fixed until `reset`.
    Collapsed(CoinFace),
}

impl CoinPhase {
    fn name(&self) -> &'static str {
        match self {
            CoinPhase::Idle => "idle",
            CoinPhase::Superposition => "in superposition",
            CoinPhase::Collapsed(_) => "collapsed",
        }
    }
}

/// The quantum coin flip game.
///
/// `flip` puts the coin into superposition, `measure` collapses it to a face
/// with one fair draw, `reset` returns it to idle.
///
/// ```
/// use quantum_games::games::CoinModel;
/// use quantum_games::core::{CoinFace, RandomBit};
///
/// let mut coin = CoinModel::new(RandomBit::seeded(3));
/// coin.flip().unwrap();
/// let face = coin.measure().unwrap();
/// let (heads, tails) = coin.current_probabilities();
/// assert_eq!(heads, if face == CoinFace::Heads { 1.0 } else { 0.0 });
/// assert_eq!(heads + tails, 1.0);
/// ```
#[derive(Debug)]
pub struct CoinModel {
    phase: CoinPhase,
    bits: RandomBit,
}

impl CoinModel {
    /// Creates an idle coin drawing from `bits`.
    pub fn new(bits: RandomBit) -> Self {
        Self { phase: CoinPhase::Idle, bits }
    }

    /// Current phase.
    pub fn phase(&self) -> CoinPhase {
        self.phase
    }

    /// The measured face, if the coin has collapsed.
    pub fn outcome(&self) -> Option<CoinFace> {
        match self.phase {
            CoinPhase::Collapsed(face) => Some(face),
            _ => None,
        }
    }

    /// Idle -> Superposition.
    pub fn flip(&mut self) -> Result<(), GameError> {
        match self.phase {
            CoinPhase::Idle => {
                self.phase = CoinPhase::Superposition;
                debug!("coin entered superposition");
                Ok(())
            }
            other => Err(GameError::invalid_transition("flip the coin", other.name())),
        }
    }

    /// Superposition -> Collapsed. Draws one bit and stores the resulting face.
    ///
    /// From any other phase this reports `InvalidTransition` and keeps the
    /// previously stored face.
    pub fn measure(&mut self) -> Result<CoinFace, GameError> {
        match self.phase {
            CoinPhase::Superposition => {
                let face = CoinFace::from(self.bits.draw());
                self.phase = CoinPhase::Collapsed(face);
                debug!(%face, "coin measured");
                Ok(face)
            }
            other => Err(GameError::invalid_transition("measure the coin", other.name())),
        }
    }

    /// Any phase -> Idle, forgetting the stored face.
    pub fn reset(&mut self) {
        self.phase = CoinPhase::Idle;
        debug!("coin reset");
    }

    /// `(p_heads, p_tails)` as the game displays them.
    ///
    /// Before measurement both read one half. Afterwards the realized face
    /// reads 1 and the other 0; this is a display convention, not an update
    /// of beliefs.
    pub fn current_probabilities(&self) -> (f64, f64) {
        match self.phase {
            CoinPhase::Idle | CoinPhase::Superposition => (0.5, 0.5),
            CoinPhase::Collapsed(CoinFace::Heads) => (1.0, 0.0),
            CoinPhase::Collapsed(CoinFace::Tails) => (0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_from_idle_is_rejected() {
        let mut coin = CoinModel::new(RandomBit::seeded(0));
        assert!(matches!(coin.measure(), Err(GameError::InvalidTransition { .. })));
        assert_eq!(coin.phase(), CoinPhase::Idle);
    }

    #[test]
    fn test_flip_twice_is_rejected() {
        let mut coin = CoinModel::new(RandomBit::seeded(0));
        coin.flip().unwrap();
        assert!(coin.flip().is_err());
        assert_eq!(coin.phase(), CoinPhase::Superposition);
    }

    #[test]
    fn test_flip_after_collapse_needs_reset() {
        let mut coin = CoinModel::new(RandomBit::seeded(4));
        coin.flip().unwrap();
        let face = coin.measure().unwrap();
        assert!(coin.flip().is_err());
        assert_eq!(coin.outcome(), Some(face));

        coin.reset();
        assert_eq!(coin.outcome(), None);
        assert_eq!(coin.current_probabilities(), (0.5, 0.5));
        coin.flip().unwrap();
    }
}
