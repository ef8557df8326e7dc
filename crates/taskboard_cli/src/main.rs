//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use taskboard_core::{BoardState, core_version};

fn main() {
    let seed = BoardState::seed();
    println!("taskboard_core version={}", core_version());
    println!(
        "taskboard_core seed columns={} cards={}",
        seed.columns.len(),
        seed.cards.len()
    );
}
