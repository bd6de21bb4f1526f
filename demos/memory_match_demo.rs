//! Example playing a full quantum memory game and a quantum maze with a
//! simple scripted player, driving the deferred pair resolution with a
//! simulated clock.

use std::collections::HashMap;
use std::time::Duration;

use quantum_games::games::{Direction, StepOutcome};
use quantum_games::{Arcade, ArcadeConfig, CardState, GameError, GameKind, GameSession, MemoryPairingModel};
use tracing::info;
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(250);

fn main() -> Result<(), GameError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ArcadeConfig { seed: Some(2024), ..ArcadeConfig::default() };
    let mut arcade = Arcade::new(config)?;

    play_memory(&mut arcade)?;
    play_maze(&mut arcade)?;

    arcade.close();
    Ok(())
}

fn play_memory(arcade: &mut Arcade) -> Result<(), GameError> {
    let GameSession::Memory(memory) = arcade.start(GameKind::Memory)? else {
        return Err(GameError::UnknownGame("memory".to_string()));
    };
    println!("--- {} ---", GameKind::Memory);

    // Face-down cards whose labels the player has already seen
    let mut known: HashMap<String, Vec<usize>> = HashMap::new();

    while !memory.is_complete() {
        let known_pair = known.values().find(|idx| idx.len() == 2).map(|idx| (idx[0], idx[1]));
        match known_pair {
            Some((a, b)) => {
                memory.flip(a)?;
                memory.flip(b)?;
            }
            None => {
                let first = unseen_card(memory, &known, None).ok_or(NO_CARD_LEFT)?;
                let label = memory.flip(first)?.label.unwrap_or_default();
                let second = match known.get(&label) {
                    Some(idx) => idx[0],
                    None => unseen_card(memory, &known, Some(first)).ok_or(NO_CARD_LEFT)?,
                };
                memory.flip(second)?;
            }
        }

        // Let the pair stay visible until the scheduled resolution fires
        let outcome = loop {
            if let Some(outcome) = memory.advance(FRAME) {
                break outcome;
            }
        };
        let ticket = outcome.ticket;
        info!(first = ticket.first, second = ticket.second, matched = outcome.matched, "pair resolved");

        for index in [ticket.first, ticket.second] {
            let label = memory.cards()[index].label().to_string();
            if outcome.matched {
                known.remove(&label);
            } else {
                let indices = known.entry(label).or_default();
                if !indices.contains(&index) {
                    indices.push(index);
                }
            }
        }
    }

    println!("Deck cleared! {}", memory.stats());
    Ok(())
}

const NO_CARD_LEFT: GameError = GameError::InvalidTransition { action: "pick a card", state: "no unseen card is left" };

// First face-down card the player has not seen yet
fn unseen_card(memory: &MemoryPairingModel, known: &HashMap<String, Vec<usize>>, skip: Option<usize>) -> Option<usize> {
    (0..memory.cards().len()).find(|&i| {
        Some(i) != skip
            && memory.cards()[i].state() == CardState::FaceDown
            && !known.values().any(|indices| indices.contains(&i))
    })
}

fn play_maze(arcade: &mut Arcade) -> Result<(), GameError> {
    let GameSession::Maze(maze) = arcade.start(GameKind::Maze)? else {
        return Err(GameError::UnknownGame("maze".to_string()));
    };
    println!("\n--- {} ---\n{}", GameKind::Maze, maze);

    // Head for the goal: alternate right and down, tunneling where needed
    let mut attempts = 0;
    while !maze.is_won() && attempts < 500 {
        let (row, col) = maze.player();
        let direction = if col < maze.goal().1 && (row == maze.goal().0 || attempts % 2 == 0) {
            Direction::Right
        } else {
            Direction::Down
        };
        if let StepOutcome::Tunneled { walls, .. } = maze.step(direction)? {
            println!("Tunneled through {} wall(s)!", walls);
        }
        attempts += 1;
    }

    println!("{}", maze);
    let stats = maze.stats();
    println!("Moves: {}, Tunnels: {}, Goal reached: {}", stats.moves, stats.tunnels, maze.is_won());
    Ok(())
}
