//! Procedural board generation.
//!
//! Places the door, the gold (with a randomized minimum distance from the
//! door), walls, pills, and enemies using reject-and-resample over the cells
//! still empty at each stage, so no two special contents ever share a cell.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{Board, Cell, CellKind, EnemyKind, Position};
use crate::constants::{
    ENEMY_COUNT, GOLD_DISTANCE_JITTER, GOLD_PLACEMENT_MAX_ATTEMPTS, GOLD_VALUE_MAX, GOLD_VALUE_MIN,
    GRID_HEIGHT, GRID_WIDTH, MIN_GOLD_DISTANCE, PILL_COUNT, PILL_HEAL_AMOUNT,
    RELAXED_GOLD_DISTANCE, WALL_COUNT_MAX, WALL_COUNT_MIN,
};

/// Generate a fresh round board satisfying the placement invariants.
pub fn generate_board<R: Rng>(rng: &mut R) -> Board {
    let mut board = Board::new();

    let door = random_position(rng);
    *board.cell_mut(door) = Cell::new_revealed(CellKind::Door);

    let gold_value = rng.gen_range(GOLD_VALUE_MIN..=GOLD_VALUE_MAX);
    let min_distance = MIN_GOLD_DISTANCE + rng.gen_range(0..=GOLD_DISTANCE_JITTER);
    place_gold(&mut board, door, gold_value, min_distance, rng);

    let wall_count = rng.gen_range(WALL_COUNT_MIN..=WALL_COUNT_MAX);
    for _ in 0..wall_count {
        let pos = random_empty_position(&board, rng);
        *board.cell_mut(pos) = Cell::new_revealed(CellKind::Wall);
    }

    for _ in 0..PILL_COUNT {
        let pos = random_empty_position(&board, rng);
        *board.cell_mut(pos) = Cell::new(CellKind::Pill {
            heal: PILL_HEAL_AMOUNT,
            collected: false,
        });
    }

    for _ in 0..ENEMY_COUNT {
        let pos = random_empty_position(&board, rng);
        let kind = *EnemyKind::ALL
            .choose(rng)
            .unwrap_or(&EnemyKind::Melee);
        *board.cell_mut(pos) = Cell::new(CellKind::Enemy {
            kind,
            defeated: false,
        });
    }

    board
}

/// Place the gold on an empty cell at least `min_distance` from the door.
///
/// Tries a bounded number of random draws at the full threshold, then falls
/// back to a relaxed threshold and retries without a cap. At this stage only
/// the door occupies the board, so the relaxed search always terminates.
pub fn place_gold<R: Rng>(
    board: &mut Board,
    door: Position,
    value: u32,
    min_distance: u32,
    rng: &mut R,
) {
    let gold = Cell::new_revealed(CellKind::Gold {
        value,
        collected: false,
    });

    for _ in 0..GOLD_PLACEMENT_MAX_ATTEMPTS {
        let pos = random_position(rng);
        if board.cell(pos).is_empty() && door.distance(pos) >= min_distance {
            *board.cell_mut(pos) = gold;
            return;
        }
    }

    let relaxed = RELAXED_GOLD_DISTANCE.min(min_distance);
    loop {
        let pos = random_position(rng);
        if board.cell(pos).is_empty() && door.distance(pos) >= relaxed {
            *board.cell_mut(pos) = gold;
            return;
        }
    }
}

/// A uniformly random grid position.
fn random_position<R: Rng>(rng: &mut R) -> Position {
    Position::new(rng.gen_range(0..GRID_WIDTH), rng.gen_range(0..GRID_HEIGHT))
}

/// Reject-and-resample until an empty cell comes up.
fn random_empty_position<R: Rng>(board: &Board, rng: &mut R) -> Position {
    loop {
        let pos = random_position(rng);
        if board.cell(pos).is_empty() {
            return pos;
        }
    }
}
