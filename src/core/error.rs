//! Error handling logic

use super::state::DeckId;
use thiserror::Error;

/// Errors reported by the game models.
///
/// Every variant describes caller misuse or bad input. An operation that
/// returns an error has left its model exactly as it found it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The requested operation is not allowed in the model's current state,
    /// e.g. measuring a coin that was never flipped.
    #[error("Invalid transition: cannot {action} while {state}")]
    InvalidTransition {
        /// The operation that was attempted
        action: &'static str,
        /// The state the model was in
        state: &'static str,
    },

    /// A memory card index outside the dealt deck.
    #[error("Card {index} is out of range for a deck of {len} cards")]
    CardOutOfRange {
        /// Requested index
        index: usize,
        /// Number of cards in the deck
        len: usize,
    },

    /// A deck size that cannot be split into labeled pairs.
    #[error("Invalid deck size {size}: {message}")]
    InvalidDeckSize {
        /// Requested number of cards
        size: usize,
        /// Why the size was refused
        message: String,
    },

    /// A deck was requested without any labels to pair.
    #[error("Cannot build a deck without labels")]
    EmptyLabels,

    /// A deferred resolution that no longer refers to the pending pair of the current deck.
    #[error("Stale resolution for {ticket_deck} (current deck is {current_deck})")]
    StaleResolution {
        /// Deck the ticket was issued against
        ticket_deck: DeckId,
        /// Deck currently dealt
        current_deck: DeckId,
    },

    /// A game name that does not match any known game.
    #[error("Unknown game '{0}'")]
    UnknownGame(String),

    /// A maze layout that could not be parsed.
    #[error("Invalid maze layout: {message}")]
    InvalidLayout {
        /// InvalidLayout failure message
        message: String,
    },

    /// Configuration values outside their allowed ranges, or unparsable input.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// InvalidConfig failure message
        message: String,
    },

    /// A derived state that violates its invariants (normalization, pairing, correlation).
    #[error("Incoherent state: {message}")]
    Incoherence {
        /// Incoherence failure message
        message: String,
    },
}

impl GameError {
    pub(crate) fn invalid_transition(action: &'static str, state: &'static str) -> Self {
        tracing::debug!(action, state, "rejected transition");
        GameError::InvalidTransition { action, state }
    }
}
