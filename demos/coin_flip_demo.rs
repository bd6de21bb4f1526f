//! Example demonstrating the coin, entanglement and qubit models side by side.
//! Set `RUST_LOG=quantum_games=debug` to watch every state transition.

use quantum_games::{CoinModel, EntanglementModel, GameError, Particle, QubitModel, RandomBit};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), GameError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("--- Quantum Coin Flip ---");
    let mut coin = CoinModel::new(RandomBit::new());
    let (heads, tails) = coin.current_probabilities();
    println!("Before flip:   heads {:.0}%, tails {:.0}%", heads * 100.0, tails * 100.0);
    coin.flip()?;
    println!("Superposition: measuring...");
    let face = coin.measure()?;
    let (heads, tails) = coin.current_probabilities();
    println!("Collapsed to {}: heads {:.0}%, tails {:.0}%", face, heads * 100.0, tails * 100.0);

    // Measuring twice is refused; the face stays the same
    if let Err(e) = coin.measure() {
        println!("Second measurement refused: {}", e);
    }

    println!("\n--- Entanglement Challenge ---");
    let mut pair = EntanglementModel::new(RandomBit::new());
    pair.entangle();
    println!("Particles are now entangled! {}", pair.pair());
    let (b, a) = pair.measure(Particle::B)?;
    println!("Measured B first -> Particle A: {}, Particle B: {} - Perfect correlation!", a, b);

    println!("\n--- Qubit Visualizer ---");
    let mut qubit = QubitModel::new();
    for (theta, phi) in [(0.0, 0.0), (90.0, 0.0), (90.0, 90.0), (180.0, 0.0)] {
        let state = qubit.set_angles(theta, phi).compute_state();
        println!("θ={:>5.1}° φ={:>5.1}°  {}", theta, phi, state);
    }

    Ok(())
}
