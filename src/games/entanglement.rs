// src/games/entanglement.rs

use crate::core::{BinaryObservable, GameError, Outcome, RandomBit};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Selects one particle of an entangled pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Particle {
    /// Particle A
    A,
    /// Particle B
    B,
}

impl Particle {
    /// The other particle of the pair.
    pub fn partner(self) -> Self {
        match self {
            Particle::A => Particle::B,
            Particle::B => Particle::A,
        }
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Particle::A => write!(f, "Particle A"),
            Particle::B => write!(f, "Particle B"),
        }
    }
}

/// Lifecycle of an entangled pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PairPhase {
    /// No entanglement created yet.
    Unentangled,
    /// Entangled and unmeasured.
    Entangled,
    /// One particle was measured; both values are fixed.
    Resolved,
}

impl PairPhase {
    fn name(&self) -> &'static str {
        match self {
            PairPhase::Unentangled => "unentangled",
            PairPhase::Entangled => "entangled",
            PairPhase::Resolved => "already resolved",
        }
    }
}

/// Two observables that are always read together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EntangledPair {
    a: BinaryObservable,
    b: BinaryObservable,
}

impl EntangledPair {
    /// Observable of the selected particle.
    pub fn get(&self, which: Particle) -> &BinaryObservable {
        match which {
            Particle::A => &self.a,
            Particle::B => &self.b,
        }
    }

    fn get_mut(&mut self, which: Particle) -> &mut BinaryObservable {
        match which {
            Particle::A => &mut self.a,
            Particle::B => &mut self.b,
        }
    }

    fn clear(&mut self) {
        self.a.clear();
        self.b.clear();
    }
}

impl fmt::Display for EntangledPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Particle A: {}, Particle B: {}", self.a, self.b)
    }
}

/// The entanglement challenge.
///
/// Measuring either particle draws one fair bit for it and forces the partner
/// to the opposite value. The partner never gets a draw of its own.
#[derive(Debug)]
pub struct EntanglementModel {
    phase: PairPhase,
    pair: EntangledPair,
    bits: RandomBit,
}

impl EntanglementModel {
    /// Creates an unentangled pair drawing from `bits`.
    pub fn new(bits: RandomBit) -> Self {
        Self { phase: PairPhase::Unentangled, pair: EntangledPair::default(), bits }
    }

    /// Current phase.
    pub fn phase(&self) -> PairPhase {
        self.phase
    }

    /// Both observables.
    pub fn pair(&self) -> &EntangledPair {
        &self.pair
    }

    /// Entangles a fresh pair, clearing any previous measurement.
    /// Entangling an already entangled pair changes nothing.
    pub fn entangle(&mut self) {
        self.pair.clear();
        self.phase = PairPhase::Entangled;
        debug!("particles entangled");
    }

    /// Measures `which`, returning `(result_self, result_other)`.
    ///
    /// Only valid while entangled; a resolved pair must be re-entangled before
    /// it can be measured again.
    pub fn measure(&mut self, which: Particle) -> Result<(Outcome, Outcome), GameError> {
        if self.phase != PairPhase::Entangled {
            return Err(GameError::invalid_transition("measure a particle", self.phase.name()));
        }

        let result_self = self.bits.draw();
        let result_other = !result_self;

        // Both observables are clear while entangled, so neither collapse can fail.
        let mut resolved = self.pair;
        resolved.get_mut(which).collapse(result_self)?;
        resolved.get_mut(which.partner()).collapse(result_other)?;
        self.pair = resolved;
        self.phase = PairPhase::Resolved;

        debug!(particle = %which, %result_self, %result_other, "entangled pair resolved");
        Ok((result_self, result_other))
    }
}
