// src/session/config.rs

use crate::core::constants::game_constants::{MAX_MAZE_SIZE, MAZE_SIZE, TUNNEL_PROBABILITY, WALL_PROBABILITY};
use crate::core::{BLOCH_RADIUS, GameError, MEMORY_LABELS, RESOLVE_DELAY};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for the memory game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Labels printed on the cards
    pub labels: Vec<String>,
    /// Number of cards dealt (two per label)
    pub deck_size: usize,
    /// Milliseconds a revealed pair stays up before resolving
    pub resolve_delay_ms: u64,
}

impl MemoryConfig {
    /// The resolve delay as a `Duration`.
    pub fn resolve_delay(&self) -> Duration {
        Duration::from_millis(self.resolve_delay_ms)
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            labels: MEMORY_LABELS.iter().map(|s| s.to_string()).collect(),
            deck_size: MEMORY_LABELS.len() * 2,
            resolve_delay_ms: RESOLVE_DELAY.as_millis() as u64,
        }
    }
}

/// Settings for the maze.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Side length of the grid
    pub size: usize,
    /// Chance that a cell is a wall
    pub wall_probability: f64,
    /// Chance of tunneling through one wall cell
    pub tunnel_probability: f64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            size: MAZE_SIZE,
            wall_probability: WALL_PROBABILITY,
            tunnel_probability: TUNNEL_PROBABILITY,
        }
    }
}

/// Arcade-wide configuration.
///
/// Every field has a default, so a JSON document only needs the values it
/// changes:
///
/// ```
/// use quantum_games::session::ArcadeConfig;
///
/// let config = ArcadeConfig::from_json(r#"{ "seed": 7, "maze": { "size": 6 } }"#).unwrap();
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.maze.size, 6);
/// assert_eq!(config.memory.deck_size, 12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    /// Fixed seed for reproducible games; `None` draws from entropy
    pub seed: Option<u64>,
    /// Radius of the Bloch sphere in the qubit visualizer
    pub bloch_radius: f64,
    /// Memory game settings
    pub memory: MemoryConfig,
    /// Maze settings
    pub maze: MazeConfig,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            bloch_radius: BLOCH_RADIUS,
            memory: MemoryConfig::default(),
            maze: MazeConfig::default(),
        }
    }
}

impl ArcadeConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: Self = serde_json::from_str(json).map_err(|e| GameError::InvalidConfig { message: e.to_string() })?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, GameError> {
        serde_json::to_string_pretty(self).map_err(|e| GameError::InvalidConfig { message: e.to_string() })
    }

    /// Checks value ranges and that the memory deck can be dealt from the labels.
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |message: String| Err(GameError::InvalidConfig { message });

        if !self.bloch_radius.is_finite() || self.bloch_radius <= 0.0 {
            return invalid(format!("bloch_radius must be positive, got {}", self.bloch_radius));
        }
        if self.memory.deck_size == 0 || self.memory.deck_size % 2 != 0 {
            return invalid(format!("memory.deck_size must be a positive even number, got {}", self.memory.deck_size));
        }
        let mut distinct: Vec<&String> = self.memory.labels.iter().collect();
        distinct.sort();
        distinct.dedup();
        if distinct.len() < self.memory.deck_size / 2 {
            return invalid(format!(
                "memory.deck_size {} needs {} distinct labels, got {}",
                self.memory.deck_size,
                self.memory.deck_size / 2,
                distinct.len()
            ));
        }
        if !(2..=MAX_MAZE_SIZE).contains(&self.maze.size) {
            return invalid(format!("maze.size must be within [2, {}], got {}", MAX_MAZE_SIZE, self.maze.size));
        }
        for (name, p) in [
            ("maze.wall_probability", self.maze.wall_probability),
            ("maze.tunnel_probability", self.maze.tunnel_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return invalid(format!("{} must be within [0, 1], got {}", name, p));
            }
        }
        Ok(())
    }
}
