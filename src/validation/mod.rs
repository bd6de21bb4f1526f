// src/validation/mod.rs

//! Invariant checks for the states the game models produce.

use crate::core::GameError;
use crate::games::{EntangledPair, MemoryCard, Particle, QubitState};
use std::collections::HashMap;

// Default tolerance values (can be overridden by caller)
const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;
const DEFAULT_RADIUS_TOLERANCE: f64 = 1e-9;

/// Checks that the basis probabilities of `state` sum to 1.
///
/// # Arguments
/// * `state` - The `QubitState` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to 1e-9.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(GameError::Incoherence)` otherwise.
pub fn check_normalization(state: &QubitState, tolerance: Option<f64>) -> Result<(), GameError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let total = state.prob0 + state.prob1;
    if (total - 1.0).abs() > effective_tolerance {
        Err(GameError::Incoherence {
            message: format!("Probabilities sum to {} (deviation > {})", total, effective_tolerance),
        })
    } else {
        Ok(())
    }
}

/// Checks that the Bloch position of `state` lies on the sphere of `radius`.
pub fn check_on_sphere(state: &QubitState, radius: f64, tolerance: Option<f64>) -> Result<(), GameError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_RADIUS_TOLERANCE) * radius.abs().max(1.0);
    let norm = state.position.norm();
    if (norm - radius.abs()).abs() > effective_tolerance {
        Err(GameError::Incoherence {
            message: format!("Bloch position has length {}, expected {}", norm, radius.abs()),
        })
    } else {
        Ok(())
    }
}

/// Runs every qubit check with default tolerances.
pub fn validate_qubit_state(state: &QubitState, radius: f64) -> Result<(), GameError> {
    check_normalization(state, None)?;
    check_on_sphere(state, radius, None)?;
    Ok(())
}

/// Checks that every label in `cards` appears on exactly two cards.
pub fn check_deck_pairs(cards: &[MemoryCard]) -> Result<(), GameError> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for card in cards {
        *counts.entry(card.label()).or_insert(0) += 1;
    }
    let mut unpaired: Vec<_> = counts.into_iter().filter(|(_, n)| *n != 2).collect();
    if unpaired.is_empty() {
        return Ok(());
    }
    unpaired.sort();
    Err(GameError::Incoherence {
        message: format!("Deck labels not in exact pairs: {:?}", unpaired),
    })
}

/// Checks that a measured pair holds opposite values, or that neither side is measured.
pub fn check_anti_correlation(pair: &EntangledPair) -> Result<(), GameError> {
    let a = pair.get(Particle::A).value();
    let b = pair.get(Particle::B).value();
    match (a, b) {
        (None, None) => Ok(()),
        (Some(a), Some(b)) if a != b => Ok(()),
        _ => Err(GameError::Incoherence {
            message: format!("Entangled pair is not anti-correlated: {}", pair),
        }),
    }
}
