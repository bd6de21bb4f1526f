// src/games/maze.rs

//! Quantum maze: walk from the top-left corner to the goal in the opposite
//! corner. Walls can be crossed by tunneling, with a chance that decays
//! geometrically in the thickness of the wall.

use crate::core::constants::game_constants::MAX_MAZE_SIZE;
use crate::core::{GameError, RandomBit};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// One maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cell {
    /// Walkable
    Open,
    /// Blocks walking; may be tunneled through
    Wall,
}

/// Movement direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    /// Row - 1
    Up,
    /// Row + 1
    Down,
    /// Column - 1
    Left,
    /// Column + 1
    Right,
}

impl Direction {
    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Result of one step attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StepOutcome {
    /// Walked into an adjacent open cell.
    Moved {
        /// New position
        to: (usize, usize),
    },
    /// Tunneled through `walls` wall cells.
    Tunneled {
        /// New position
        to: (usize, usize),
        /// Thickness of the crossed wall
        walls: usize,
    },
    /// Stayed in place: grid edge, or the tunneling draw failed.
    Blocked,
}

/// Counters shown beside the maze.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MazeStats {
    /// Step attempts, including blocked ones
    pub moves: u32,
    /// Successful tunnels
    pub tunnels: u32,
}

/// The quantum maze.
#[derive(Debug)]
pub struct MazeModel {
    size: usize,
    cells: Vec<Cell>,
    player: (usize, usize),
    tunnel_probability: f64,
    stats: MazeStats,
    won: bool,
    bits: RandomBit,
}

impl MazeModel {
    /// Generates a `size` x `size` maze where each cell other than start and
    /// goal is a wall with probability `wall_probability`.
    ///
    /// # Errors
    /// `InvalidLayout` if `size` is below 2 or above `MAX_MAZE_SIZE`.
    pub fn generate(
        mut bits: RandomBit,
        size: usize,
        wall_probability: f64,
        tunnel_probability: f64,
    ) -> Result<Self, GameError> {
        if !(2..=MAX_MAZE_SIZE).contains(&size) {
            return Err(GameError::InvalidLayout {
                message: format!("maze size {} is outside 2..={}", size, MAX_MAZE_SIZE),
            });
        }
        let area = size * size;
        let last = area - 1;
        let cells = (0..area)
            .map(|i| {
                if i != 0 && i != last && bits.bernoulli(wall_probability) {
                    Cell::Wall
                } else {
                    Cell::Open
                }
            })
            .collect();
        debug!(size, wall_probability, "maze generated");
        Ok(Self::from_cells(bits, size, cells, tunnel_probability))
    }

    /// Builds a maze from text rows: `.` open, `#` wall.
    ///
    /// The start is always the top-left cell and the goal the bottom-right;
    /// they may be written as `S` and `G` and must not be walls.
    ///
    /// # Errors
    /// `InvalidLayout` for a non-square grid, unknown characters, or a walled start or goal.
    pub fn from_layout(bits: RandomBit, rows: &[&str], tunnel_probability: f64) -> Result<Self, GameError> {
        let size = rows.len();
        if size < 2 {
            return Err(GameError::InvalidLayout { message: format!("expected at least 2 rows, got {}", size) });
        }
        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width != size {
                return Err(GameError::InvalidLayout {
                    message: format!("row {} has {} cells, expected {}", r, width, size),
                });
            }
            for ch in row.chars() {
                cells.push(match ch {
                    '.' | 'S' | 'G' => Cell::Open,
                    '#' => Cell::Wall,
                    other => {
                        return Err(GameError::InvalidLayout { message: format!("unknown cell '{}' in row {}", other, r) });
                    }
                });
            }
        }
        if cells[0] == Cell::Wall || cells[size * size - 1] == Cell::Wall {
            return Err(GameError::InvalidLayout { message: "start and goal must be open".to_string() });
        }
        Ok(Self::from_cells(bits, size, cells, tunnel_probability))
    }

    fn from_cells(bits: RandomBit, size: usize, cells: Vec<Cell>, tunnel_probability: f64) -> Self {
        Self {
            size,
            cells,
            player: (0, 0),
            tunnel_probability,
            stats: MazeStats::default(),
            won: false,
            bits,
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at `(row, col)`, or `None` off the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.size && col < self.size { Some(self.cells[row * self.size + col]) } else { None }
    }

    /// Player position as `(row, col)`.
    pub fn player(&self) -> (usize, usize) {
        self.player
    }

    /// Goal position as `(row, col)`.
    pub fn goal(&self) -> (usize, usize) {
        (self.size - 1, self.size - 1)
    }

    /// Move and tunnel counters.
    pub fn stats(&self) -> MazeStats {
        self.stats
    }

    /// Whether the player reached the goal.
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Puts the player back on the start cell and clears the counters.
    pub fn reset_player(&mut self) {
        self.player = (0, 0);
        self.stats = MazeStats::default();
        self.won = false;
        debug!("maze player reset");
    }

    /// Attempts one step in `direction`.
    ///
    /// Stepping into a run of `k` walls tunnels to the first open cell past
    /// them with probability `p^k`; if the run reaches the grid edge there is
    /// nowhere to land and the step is blocked without a draw.
    pub fn step(&mut self, direction: Direction) -> Result<StepOutcome, GameError> {
        if self.won {
            return Err(GameError::invalid_transition("move", "the goal is already reached"));
        }
        self.stats.moves += 1;

        let Some(next) = self.neighbour(self.player, direction) else {
            return Ok(StepOutcome::Blocked);
        };
        let outcome = if self.cells[next.0 * self.size + next.1] == Cell::Open {
            StepOutcome::Moved { to: next }
        } else {
            self.try_tunnel(next, direction)
        };

        match outcome {
            StepOutcome::Moved { to } | StepOutcome::Tunneled { to, .. } => {
                self.player = to;
                if matches!(outcome, StepOutcome::Tunneled { .. }) {
                    self.stats.tunnels += 1;
                }
                if to == self.goal() {
                    self.won = true;
                    debug!(moves = self.stats.moves, tunnels = self.stats.tunnels, "maze solved");
                }
            }
            StepOutcome::Blocked => {}
        }
        Ok(outcome)
    }

    fn try_tunnel(&mut self, first_wall: (usize, usize), direction: Direction) -> StepOutcome {
        let mut walls = 1;
        let mut pos = first_wall;
        let landing = loop {
            match self.neighbour(pos, direction) {
                None => return StepOutcome::Blocked,
                Some(p) if self.cells[p.0 * self.size + p.1] == Cell::Wall => {
                    walls += 1;
                    pos = p;
                }
                Some(p) => break p,
            }
        };

        let chance = self.tunnel_probability.powi(walls as i32);
        if self.bits.bernoulli(chance) {
            debug!(walls, chance, "tunneled through wall");
            StepOutcome::Tunneled { to: landing, walls }
        } else {
            StepOutcome::Blocked
        }
    }

    fn neighbour(&self, (row, col): (usize, usize), direction: Direction) -> Option<(usize, usize)> {
        let (dr, dc) = direction.delta();
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        (row < self.size && col < self.size).then_some((row, col))
    }
}

impl fmt::Display for MazeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = if (row, col) == self.player {
                    'P'
                } else if (row, col) == self.goal() {
                    'G'
                } else if self.cells[row * self.size + col] == Cell::Wall {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_round_trips_through_display() {
        let maze = MazeModel::from_layout(RandomBit::seeded(0), &["S.#", ".#.", "..G"], 0.5).unwrap();
        assert_eq!(maze.to_string(), "P.#\n.#.\n..G\n");
    }

    #[test]
    fn test_bad_layouts_are_rejected() {
        let bits = || RandomBit::seeded(0);
        assert!(MazeModel::from_layout(bits(), &["S."], 0.5).is_err());
        assert!(MazeModel::from_layout(bits(), &["S.", "."], 0.5).is_err());
        assert!(MazeModel::from_layout(bits(), &["Sx", ".G"], 0.5).is_err());
        assert!(MazeModel::from_layout(bits(), &["#.", ".G"], 0.5).is_err());
    }

    #[test]
    fn test_wall_run_to_edge_blocks_without_draw() {
        let mut maze = MazeModel::from_layout(RandomBit::seeded(0), &["S##", "...", "..G"], 1.0).unwrap();
        assert_eq!(maze.step(Direction::Right).unwrap(), StepOutcome::Blocked);
        assert_eq!(maze.player(), (0, 0));
        assert_eq!(maze.stats(), MazeStats { moves: 1, tunnels: 0 });
    }

    #[test]
    fn test_thick_wall_with_certain_tunneling() {
        let mut maze = MazeModel::from_layout(RandomBit::seeded(0), &["S##.", "....", "....", "...G"], 1.0).unwrap();
        let outcome = maze.step(Direction::Right).unwrap();
        assert_eq!(outcome, StepOutcome::Tunneled { to: (0, 3), walls: 2 });
        assert_eq!(maze.stats().tunnels, 1);
    }
}
