//! Three-Disk Walkthrough
//!
//! This example plays a fixed solution to the 3-peg, 3-disk puzzle and
//! prints the board after every move.
//!
//! Key concepts:
//! - Every move produces a new immutable state
//! - Illegal moves are rejected with a descriptive error
//! - The finished state remembers every move that led to it
//!
//! Run with: cargo run --example walkthrough
//! Set RUST_LOG=hanoi_state=debug to see each transition logged.

use hanoi_state::{PuzzleBuilder, PuzzleState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const MOVES: [(usize, usize); 7] = [(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hanoi_state=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Three-Disk Walkthrough ===\n");

    let mut state: PuzzleState = PuzzleBuilder::new().pegs(3).disks(3).build()?;
    println!("{state}");

    // A larger disk may never go on a smaller one
    if let Err(e) = state.transition(0, 2)?.transition(0, 2) {
        println!("Rejected: {e}\n");
    }

    for (from, to) in MOVES {
        state = state.transition(from, to)?;
        println!("Move {from} -> {to}");
        println!("{state}");
    }

    println!("Goal reached: {}", state.is_goal_state());
    println!("Moves played: {}", state.depth());

    println!("\n=== Example Complete ===");
    Ok(())
}
