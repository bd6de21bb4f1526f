// src/core/state.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Not;

use super::error::GameError;

/// A concrete binary outcome produced by a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Spin up, `|0⟩`, heads.
    Up,
    /// Spin down, `|1⟩`, tails.
    Down,
}

impl Outcome {
    /// The opposite outcome.
    pub fn negate(self) -> Self {
        match self {
            Outcome::Up => Outcome::Down,
            Outcome::Down => Outcome::Up,
        }
    }

    /// Arrow used by the entanglement display.
    pub fn symbol(&self) -> &'static str {
        match self {
            Outcome::Up => "↑",
            Outcome::Down => "↓",
        }
    }
}

impl Not for Outcome {
    type Output = Outcome;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Face of the quantum coin once it has been measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoinFace {
    /// Heads
    Heads,
    /// Tails
    Tails,
}

impl From<Outcome> for CoinFace {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Up => CoinFace::Heads,
            Outcome::Down => CoinFace::Tails,
        }
    }
}

impl fmt::Display for CoinFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinFace::Heads => write!(f, "Heads"),
            CoinFace::Tails => write!(f, "Tails"),
        }
    }
}

/// A single binary observable that is either unmeasured or holds one outcome.
///
/// "Collapsed" and "has a value" are the same fact here: the value is an
/// `Option`, so an observable can never be collapsed without a value or carry
/// a value while uncollapsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryObservable {
    value: Option<Outcome>,
}

impl BinaryObservable {
    /// Creates an uncollapsed observable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a measurement has fixed this observable's value.
    pub fn is_collapsed(&self) -> bool {
        self.value.is_some()
    }

    /// The measured value, or `None` while uncollapsed.
    pub fn value(&self) -> Option<Outcome> {
        self.value
    }

    /// Fixes the observable to `outcome`. An observable collapses at most once.
    pub(crate) fn collapse(&mut self, outcome: Outcome) -> Result<(), GameError> {
        if self.value.is_some() {
            return Err(GameError::invalid_transition("collapse", "already collapsed"));
        }
        self.value = Some(outcome);
        Ok(())
    }

    /// Returns the observable to the uncollapsed state.
    pub(crate) fn clear(&mut self) {
        self.value = None;
    }
}

impl fmt::Display for BinaryObservable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(outcome) => write!(f, "{}", outcome),
            None => write!(f, "?"),
        }
    }
}

/// Identity of one dealt memory deck.
/// Deferred resolutions carry it so they can never touch a later deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeckId(pub u64);

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck({})", self.0)
    }
}
