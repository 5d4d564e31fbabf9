//! Checkpoint and Resume
//!
//! This example plays part of a four-disk puzzle, saves a checkpoint,
//! and resumes from it to finish the game.
//!
//! Key concepts:
//! - Checkpoints store the starting configuration and every move played
//! - JSON for readability, bincode for compactness
//! - Restoring replays the moves, so the history survives the round trip
//!
//! Run with: cargo run --example checkpoint_resume

use hanoi_state::core::{replay, Move};
use hanoi_state::{Checkpoint, PuzzleBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== Checkpoint and Resume Example ===\n");

    // Solution for 4 disks on 3 pegs (peg 2 is the goal)
    let solution: Vec<Move> = [
        (0, 1), (0, 2), (1, 2), (0, 1), (2, 0), (2, 1), (0, 1), (0, 2),
        (1, 2), (1, 0), (2, 0), (1, 2), (0, 1), (0, 2), (1, 2),
    ]
    .into_iter()
    .map(Move::from)
    .collect();
    let (first_half, second_half) = solution.split_at(7);

    let start = PuzzleBuilder::new().pegs(3).disks(4).build()?;
    let halfway = replay(&start, first_half.iter().copied())?;
    println!("Board after {} moves:", halfway.depth());
    println!("{halfway}");

    let checkpoint = Checkpoint::capture(&halfway);
    let json = checkpoint.to_json()?;
    let bytes = checkpoint.to_bytes()?;
    println!("Checkpoint {} ({} bytes JSON, {} bytes binary)", checkpoint.id, json.len(), bytes.len());

    let resumed = Checkpoint::from_bytes(&bytes)?.restore()?;
    println!("Resumed with {} moves of history\n", resumed.depth());

    let finished = replay(&resumed, second_half.iter().copied())?;
    println!("{finished}");
    println!("Goal reached: {}", finished.is_goal_state());

    println!("\n=== Example Complete ===");
    Ok(())
}
