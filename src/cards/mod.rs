//! Tetromino scanning cards and the per-round deck.

pub mod generation;
pub mod types;

pub use generation::*;
pub use types::*;
