//! The session state machine: round lifecycle, bankroll, rent, and the
//! continue/cash-out loop that ties board, cards, route, and adventurer
//! together.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
