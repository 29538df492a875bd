//! The hidden dungeon board.
//!
//! An 8x8 grid holding one door, one gold pile, and a scatter of walls,
//! healing pills, and enemies. Regenerated from scratch at the start of
//! every round.

pub mod generation;
pub mod types;

pub use generation::*;
pub use types::*;
