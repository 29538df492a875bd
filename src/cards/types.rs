//! Scanning card data structures.
//!
//! A card is a tetromino-shaped probe. Placing it scans the four cells it
//! covers; cards carrying a detection ability positively identify matching
//! contents, feeding the crystal-ball prediction counter.

use crate::board::EnemyKind;
use serde::{Deserialize, Serialize};

/// The seven tetromino shapes, as four `(row, col)` offsets from the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl Shape {
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::J,
        Shape::L,
        Shape::O,
        Shape::S,
        Shape::T,
        Shape::Z,
    ];

    /// Relative cell offsets, unrotated.
    pub fn offsets(&self) -> [(i32, i32); 4] {
        match self {
            Shape::I => [(0, 0), (1, 0), (2, 0), (3, 0)],
            Shape::J => [(0, 0), (1, 0), (1, 1), (1, 2)],
            Shape::L => [(0, 2), (1, 0), (1, 1), (1, 2)],
            Shape::O => [(0, 0), (0, 1), (1, 0), (1, 1)],
            Shape::S => [(0, 1), (0, 2), (1, 0), (1, 1)],
            Shape::T => [(0, 1), (1, 0), (1, 1), (1, 2)],
            Shape::Z => [(0, 0), (0, 1), (1, 1), (1, 2)],
        }
    }

    /// Display letter for the card button.
    pub fn letter(&self) -> char {
        match self {
            Shape::I => 'I',
            Shape::J => 'J',
            Shape::L => 'L',
            Shape::O => 'O',
            Shape::S => 'S',
            Shape::T => 'T',
            Shape::Z => 'Z',
        }
    }
}

/// A quarter-turn rotation applied to a shape before placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// The next quarter turn (wraps after 270).
    pub fn next(&self) -> Rotation {
        match self {
            Rotation::R0 => Rotation::R90,
            Rotation::R90 => Rotation::R180,
            Rotation::R180 => Rotation::R270,
            Rotation::R270 => Rotation::R0,
        }
    }

    /// Rotate a `(row, col)` offset about the anchor.
    pub fn apply(&self, (r, c): (i32, i32)) -> (i32, i32) {
        match self {
            Rotation::R0 => (r, c),
            Rotation::R90 => (c, -r),
            Rotation::R180 => (-r, -c),
            Rotation::R270 => (-c, r),
        }
    }
}

/// The content category a card's ability can positively identify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectionKind {
    Fire,
    Melee,
    Boss,
    Pill,
}

impl DetectionKind {
    pub const ALL: [DetectionKind; 4] = [
        DetectionKind::Fire,
        DetectionKind::Melee,
        DetectionKind::Boss,
        DetectionKind::Pill,
    ];

    /// Whether this ability identifies the given enemy variety.
    pub fn matches_enemy(&self, enemy: EnemyKind) -> bool {
        matches!(
            (self, enemy),
            (DetectionKind::Fire, EnemyKind::Fire)
                | (DetectionKind::Melee, EnemyKind::Melee)
                | (DetectionKind::Boss, EnemyKind::Boss)
        )
    }
}

/// One scanning card in the round's deck.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub shape: Shape,
    /// Optional detection ability. `None` scans without ever scoring a match.
    pub detection: Option<DetectionKind>,
    pub used: bool,
    /// The ability the card was exercised with, kept for the deck panel.
    pub used_with: Option<DetectionKind>,
}

impl Card {
    pub fn new(id: u32, shape: Shape, detection: Option<DetectionKind>) -> Self {
        Self {
            id,
            shape,
            detection,
            used: false,
            used_with: None,
        }
    }
}
