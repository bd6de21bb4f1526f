//! Constants carried over from the original arcade displays.

/// Defaults shared by the game models and the arcade configuration.
pub mod game_constants {
    use std::time::Duration;

    /// Radius of the Bloch sphere used for visualization coordinates.
    pub const BLOCH_RADIUS: f64 = 40.0;
    /// How long both revealed memory cards stay visible before resolving.
    pub const RESOLVE_DELAY: Duration = Duration::from_millis(1000);
    /// The quantum states printed on memory cards.
    pub const MEMORY_LABELS: [&str; 6] = ["|0⟩", "|1⟩", "|+⟩", "|-⟩", "|i⟩", "|-i⟩"];
    /// Side length of a freshly generated maze.
    pub const MAZE_SIZE: usize = 10;
    /// Largest maze side length accepted by generation and configuration.
    pub const MAX_MAZE_SIZE: usize = 1024;
    /// Chance that a non-terminal maze cell is a wall.
    pub const WALL_PROBABILITY: f64 = 0.3;
    /// Chance of tunneling through a single wall cell.
    pub const TUNNEL_PROBABILITY: f64 = 0.5;
}
