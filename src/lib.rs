//! Dungoban - Seer Dungeon Game Engine
//!
//! The game-state core of a round-based grid puzzle/economy game: a seer
//! scans a hidden 8x8 dungeon with tetromino cards, traces a route for an
//! autonomous adventurer, and feeds the outcome into a bankroll/rent economy.
//! Presentation (rendering, input widgets, animation pacing) lives outside
//! this crate and drives it through the operations in [`game::logic`].

pub mod board;
pub mod cards;
pub mod constants;
pub mod game;
pub mod run;
pub mod scan;
pub mod trace;
