//! The adventurer and the step-by-step execution of a traced route.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
