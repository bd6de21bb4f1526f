// src/games/mod.rs

//! The game models.
//!
//! Each model owns its state and its own [`RandomBit`](crate::core::RandomBit)
//! and exposes plain commands. Presentation code calls those commands and
//! renders what they return; models never call each other.

pub mod coin;
pub mod entanglement;
pub mod qubit;
pub mod memory;
pub mod maze;

pub use coin::{CoinModel, CoinPhase};
pub use entanglement::{EntangledPair, EntanglementModel, PairPhase, Particle};
pub use qubit::{BlochVector, QubitAngles, QubitModel, QubitState};
pub use memory::{CardState, CardView, MemoryCard, MemoryPairingModel, MemoryStats, PairOutcome, ResolutionTicket};
pub use maze::{Cell, Direction, MazeModel, MazeStats, StepOutcome};
