// src/session/mod.rs

//! The arcade: starts games by kind and owns the single active game.
//!
//! Each game gets its own model instance and its own random generator,
//! derived from the arcade's generator so that a seeded arcade replays
//! identically.

mod config;

pub use config::{ArcadeConfig, MazeConfig, MemoryConfig};

use crate::core::{GameError, RandomBit};
use crate::games::{CoinModel, EntanglementModel, MazeModel, MemoryPairingModel, QubitModel};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// The games on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    /// Quantum coin flip
    Coin,
    /// Entanglement challenge
    Entanglement,
    /// Qubit visualizer
    Qubit,
    /// Quantum maze
    Maze,
    /// Quantum memory
    Memory,
}

impl GameKind {
    /// Every game, in menu order.
    pub const ALL: [GameKind; 5] = [GameKind::Coin, GameKind::Entanglement, GameKind::Qubit, GameKind::Maze, GameKind::Memory];

    /// Title shown above the game.
    pub fn title(&self) -> &'static str {
        match self {
            GameKind::Coin => "Quantum Coin Flip",
            GameKind::Entanglement => "Entanglement Challenge",
            GameKind::Qubit => "Qubit Visualizer",
            GameKind::Maze => "Quantum Maze",
            GameKind::Memory => "Quantum Memory",
        }
    }

    /// Short name accepted by `from_str`.
    pub fn name(&self) -> &'static str {
        match self {
            GameKind::Coin => "coin",
            GameKind::Entanglement => "entanglement",
            GameKind::Qubit => "qubit",
            GameKind::Maze => "maze",
            GameKind::Memory => "memory",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for GameKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        GameKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| GameError::UnknownGame(s.to_string()))
    }
}

/// A running game.
#[derive(Debug)]
pub enum GameSession {
    /// Quantum coin flip
    Coin(CoinModel),
    /// Entanglement challenge
    Entanglement(EntanglementModel),
    /// Qubit visualizer
    Qubit(QubitModel),
    /// Quantum maze
    Maze(MazeModel),
    /// Quantum memory
    Memory(MemoryPairingModel),
}

impl GameSession {
    /// Which game this is.
    pub fn kind(&self) -> GameKind {
        match self {
            GameSession::Coin(_) => GameKind::Coin,
            GameSession::Entanglement(_) => GameKind::Entanglement,
            GameSession::Qubit(_) => GameKind::Qubit,
            GameSession::Maze(_) => GameKind::Maze,
            GameSession::Memory(_) => GameKind::Memory,
        }
    }
}

/// Owns the configuration and at most one active game.
#[derive(Debug)]
pub struct Arcade {
    config: ArcadeConfig,
    seeds: RandomBit,
    active: Option<GameSession>,
}

impl Default for Arcade {
    fn default() -> Self {
        Self {
            config: ArcadeConfig::default(),
            seeds: RandomBit::new(),
            active: None,
        }
    }
}

impl Arcade {
    /// Creates an arcade after validating `config`.
    pub fn new(config: ArcadeConfig) -> Result<Self, GameError> {
        config.validate()?;
        let seeds = match config.seed {
            Some(seed) => RandomBit::seeded(seed),
            None => RandomBit::new(),
        };
        Ok(Self { config, seeds, active: None })
    }

    /// The configuration in use.
    pub fn config(&self) -> &ArcadeConfig {
        &self.config
    }

    /// Starts `kind`, replacing any active game.
    ///
    /// Memory decks are dealt and mazes generated straight away, so the
    /// returned session is ready to play.
    pub fn start(&mut self, kind: GameKind) -> Result<&mut GameSession, GameError> {
        let bits = RandomBit::seeded(self.seeds.next_seed());
        let session = match kind {
            GameKind::Coin => GameSession::Coin(CoinModel::new(bits)),
            GameKind::Entanglement => GameSession::Entanglement(EntanglementModel::new(bits)),
            GameKind::Qubit => GameSession::Qubit(QubitModel::with_radius(self.config.bloch_radius)),
            GameKind::Maze => {
                let maze = &self.config.maze;
                GameSession::Maze(MazeModel::generate(bits, maze.size, maze.wall_probability, maze.tunnel_probability)?)
            }
            GameKind::Memory => {
                let memory = &self.config.memory;
                let mut model = MemoryPairingModel::with_delay(bits, memory.resolve_delay());
                model.new_deck(memory.labels.as_slice(), memory.deck_size)?;
                GameSession::Memory(model)
            }
        };

        if let Some(previous) = self.active.as_ref() {
            info!(previous = %previous.kind(), "replacing active game");
        }
        info!(game = %kind, "game started");
        Ok(self.active.insert(session))
    }

    /// Ends the active game, if any.
    pub fn close(&mut self) -> Option<GameKind> {
        let closed = self.active.take().map(|session| session.kind());
        if let Some(kind) = closed {
            info!(game = %kind, "game closed");
        }
        closed
    }

    /// The active game.
    pub fn active(&self) -> Option<&GameSession> {
        self.active.as_ref()
    }

    /// The active game, mutably.
    pub fn active_mut(&mut self) -> Option<&mut GameSession> {
        self.active.as_mut()
    }
}
