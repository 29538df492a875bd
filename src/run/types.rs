//! Adventurer run state.

use crate::constants::{
    CONTINUE_MULTIPLIER_BONUS_TENTHS, INITIAL_ENERGY, INITIAL_MULTIPLIER_TENTHS,
};
use serde::{Deserialize, Serialize};

/// One adventurer's traversal state within the current board.
///
/// The payout multiplier is stored in integer tenths so that repeated +0.1
/// bumps stay exact; only the display boundary formats it as a decimal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Adventurer {
    pub energy: i32,
    pub gold_carried: u32,
    pub multiplier_tenths: u32,
}

impl Adventurer {
    /// A fresh adventurer: full energy, empty pockets, x1.0 multiplier.
    pub fn new() -> Self {
        Self {
            energy: INITIAL_ENERGY,
            gold_carried: 0,
            multiplier_tenths: INITIAL_MULTIPLIER_TENTHS,
        }
    }

    /// The banked value of the carried gold: floor(gold * multiplier).
    pub fn payout(&self) -> u32 {
        self.gold_carried * self.multiplier_tenths / 10
    }

    /// +0.1 to the multiplier, exactly.
    pub fn raise_multiplier(&mut self) {
        self.multiplier_tenths += CONTINUE_MULTIPLIER_BONUS_TENTHS;
    }

    /// One-decimal rendering of the multiplier (e.g. "1.3").
    pub fn multiplier_display(&self) -> String {
        format!("{}.{}", self.multiplier_tenths / 10, self.multiplier_tenths % 10)
    }
}

impl Default for Adventurer {
    fn default() -> Self {
        Self::new()
    }
}
