// src/lib.rs

//! `quantum_games` - game models for teaching quantum computing concepts
//!
//! The crate holds the rules and state of five small games: a coin in
//! superposition, an entangled pair of particles, a qubit on the Bloch
//! sphere, a maze crossed by tunneling, and a memory game over quantum-state
//! cards. A presentation layer drives them through plain commands and renders
//! what they report. Nothing here simulates amplitudes or gates; outcomes are
//! fair random draws and closed-form trigonometry.

pub mod core;
pub mod games;
pub mod session;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{BinaryObservable, CoinFace, DeckId, GameError, Outcome, RandomBit};
pub use crate::games::{
    CardState, CardView, CoinModel, EntanglementModel, MazeModel, MemoryPairingModel, Particle, QubitModel, QubitState,
};
pub use crate::session::{Arcade, ArcadeConfig, GameKind, GameSession};
pub use crate::validation::{
    check_anti_correlation,
    check_deck_pairs,
    check_normalization,
    check_on_sphere,
    validate_qubit_state,
};

// Example 1: Entangled measurement
// Measuring one particle fixes the other to the opposite value.
/// ```
/// use quantum_games::{EntanglementModel, Particle, RandomBit, GameError};
///
/// let mut model = EntanglementModel::new(RandomBit::seeded(11));
///
/// // Measuring before entangling is refused and changes nothing
/// assert!(matches!(model.measure(Particle::A), Err(GameError::InvalidTransition { .. })));
///
/// model.entangle();
/// let (b, a) = model.measure(Particle::B).unwrap();
/// println!("Particle A: {}, Particle B: {}", a, b);
/// assert_ne!(a, b);
///
/// // A resolved pair must be entangled again before the next measurement
/// assert!(model.measure(Particle::A).is_err());
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: A seeded arcade running a memory game
// The deferred pair resolution is driven by the caller's clock.
/// ```
/// use std::time::Duration;
/// use quantum_games::{Arcade, ArcadeConfig, GameKind, GameSession, CardState};
///
/// let config = ArcadeConfig { seed: Some(2024), ..ArcadeConfig::default() };
/// let mut arcade = Arcade::new(config).unwrap();
///
/// let GameSession::Memory(memory) = arcade.start(GameKind::Memory).unwrap() else {
///     unreachable!("started a memory game");
/// };
///
/// // Find the twin of card 0 and flip both
/// let label = memory.cards()[0].label().to_string();
/// let twin = (1..memory.cards().len()).find(|&i| memory.cards()[i].label() == label).unwrap();
/// memory.flip(0).unwrap();
/// memory.flip(twin).unwrap();
///
/// // Nothing resolves until the delay has passed
/// assert!(memory.advance(Duration::from_millis(500)).is_none());
/// let outcome = memory.advance(Duration::from_millis(500)).unwrap();
/// assert!(outcome.matched);
/// assert_eq!(memory.cards()[twin].state(), CardState::Matched);
///
/// assert_eq!(arcade.close(), Some(GameKind::Memory));
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
