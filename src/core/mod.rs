// src/core/mod.rs

//! Core data structures and types shared by every game model.

pub mod error;
pub mod state;
pub mod random;

// Re-export public types for convenient access via `quantum_games::core::TypeName`
pub use error::GameError;
pub use state::{BinaryObservable, CoinFace, DeckId, Outcome};
pub use random::RandomBit;

pub mod constants;
pub use constants::game_constants::{BLOCH_RADIUS, MEMORY_LABELS, RESOLVE_DELAY};
