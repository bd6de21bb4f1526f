// src/games/qubit.rs

//! Single-qubit visualizer: polar and azimuthal angles mapped to basis
//! probabilities and a point on the Bloch sphere.
//!
//! ```text
//! |ψ⟩ = cos(θ/2)|0⟩ + e^(iφ)sin(θ/2)|1⟩
//!
//! P(|0⟩) = cos²(θ/2)     P(|1⟩) = sin²(θ/2)
//! (x, y, z) = r · (sin θ cos φ, sin θ sin φ, cos θ)
//! ```

use crate::core::BLOCH_RADIUS;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Polar angle `theta` in `[0, 180]` and azimuth `phi` in `[0, 360)`, both in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct QubitAngles {
    theta: f64,
    phi: f64,
}

impl QubitAngles {
    /// Builds angles from arbitrary input.
    ///
    /// `theta` is clamped to `[0, 180]`. `phi` is periodic and wraps into
    /// `[0, 360)`, so a slider value of 360 lands on 0. Non-finite values become 0.
    pub fn new(theta: f64, phi: f64) -> Self {
        let theta = if theta.is_finite() { theta.clamp(0.0, 180.0) } else { 0.0 };
        let phi = if phi.is_finite() { phi.rem_euclid(360.0) } else { 0.0 };
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        let phi = if phi >= 360.0 { 0.0 } else { phi };
        Self { theta, phi }
    }

    /// Polar angle in degrees.
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Azimuthal angle in degrees.
    pub fn phi(&self) -> f64 {
        self.phi
    }
}

/// Point on the Bloch sphere in visualization coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlochVector {
    /// x coordinate
    pub x: f64,
    /// y coordinate
    pub y: f64,
    /// z coordinate
    pub z: f64,
}

impl BlochVector {
    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// State derived from a pair of angles. Recomputed, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QubitState {
    /// Probability of measuring `|0⟩`.
    pub prob0: f64,
    /// Probability of measuring `|1⟩`.
    pub prob1: f64,
    /// Position on a sphere of the model's radius.
    pub position: BlochVector,
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P(|0⟩) = {:.2}, P(|1⟩) = {:.2} at ({:.2}, {:.2}, {:.2})",
            self.prob0, self.prob1, self.position.x, self.position.y, self.position.z
        )
    }
}

/// The qubit visualizer. Holds only the current angles; no randomness.
#[derive(Debug, Clone)]
pub struct QubitModel {
    angles: QubitAngles,
    radius: f64,
}

impl Default for QubitModel {
    fn default() -> Self {
        Self::new()
    }
}

impl QubitModel {
    /// A qubit at `|0⟩` on a sphere of the default radius.
    pub fn new() -> Self {
        Self::with_radius(BLOCH_RADIUS)
    }

    /// A qubit at `|0⟩` on a sphere of radius `radius`.
    pub fn with_radius(radius: f64) -> Self {
        Self { angles: QubitAngles::default(), radius }
    }

    /// Sphere radius used for positions.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Current angles.
    pub fn angles(&self) -> QubitAngles {
        self.angles
    }

    /// Replaces the angles, clamping out-of-range input. Returns `self` for chaining.
    pub fn set_angles(&mut self, theta: f64, phi: f64) -> &mut Self {
        self.angles = QubitAngles::new(theta, phi);
        debug!(theta = self.angles.theta, phi = self.angles.phi, "qubit angles set");
        self
    }

    /// Probabilities and position for the current angles.
    pub fn compute_state(&self) -> QubitState {
        let theta = self.angles.theta.to_radians();
        let phi = self.angles.phi.to_radians();

        let half = theta / 2.0;
        let prob0 = half.cos().powi(2);
        let prob1 = half.sin().powi(2);

        let position = BlochVector {
            x: theta.sin() * phi.cos() * self.radius,
            y: theta.sin() * phi.sin() * self.radius,
            z: theta.cos() * self.radius,
        };

        QubitState { prob0, prob1, position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_equator_is_even_split() {
        let mut model = QubitModel::new();
        let state = model.set_angles(90.0, 0.0).compute_state();
        assert!((state.prob0 - 0.5).abs() < TEST_TOLERANCE);
        assert!((state.prob1 - 0.5).abs() < TEST_TOLERANCE);
        assert!((state.position.x - BLOCH_RADIUS).abs() < TEST_TOLERANCE);
        assert!(state.position.y.abs() < TEST_TOLERANCE);
        assert!(state.position.z.abs() < TEST_TOLERANCE);
    }

    #[test]
    fn test_clamping_and_wrapping() {
        assert_eq!(QubitAngles::new(-20.0, 0.0).theta(), 0.0);
        assert_eq!(QubitAngles::new(400.0, 0.0).theta(), 180.0);
        assert_eq!(QubitAngles::new(0.0, 360.0).phi(), 0.0);
        assert_eq!(QubitAngles::new(0.0, -90.0).phi(), 270.0);
        assert_eq!(QubitAngles::new(f64::NAN, f64::INFINITY), QubitAngles::default());
    }

    #[test]
    fn test_compute_state_is_idempotent() {
        let mut model = QubitModel::with_radius(1.0);
        model.set_angles(33.0, 271.0);
        assert_eq!(model.compute_state(), model.compute_state());
    }

    #[test]
    fn test_display_uses_two_decimals() {
        let model = QubitModel::new();
        assert_eq!(model.compute_state().to_string(), "P(|0⟩) = 1.00, P(|1⟩) = 0.00 at (0.00, 0.00, 40.00)");
    }
}
