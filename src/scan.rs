//! The scanning engine.
//!
//! Validates and applies a rotated card pattern (or, once the crystal ball is
//! charged, an NxN reveal block) against the board. Positive identifications
//! feed the prediction counter; everything else leaves a scanned-but-unknown
//! marker on the probed cells. Invalid placements are silent no-ops.

use crate::board::{Board, CellKind, Position};
use crate::cards::{Card, DetectionKind, Rotation, Shape};
use crate::constants::{REVEAL_THRESHOLD_2X2, REVEAL_THRESHOLD_3X3, REVEAL_THRESHOLD_4X4};

/// A shape's four offsets after applying a rotation.
pub fn rotated_offsets(shape: Shape, rotation: Rotation) -> [(i32, i32); 4] {
    let mut offsets = shape.offsets();
    for offset in &mut offsets {
        *offset = rotation.apply(*offset);
    }
    offsets
}

/// Crystal-ball area size unlocked by a prediction count: 4x4 at 9+, 3x3 at
/// 6+, 2x2 at 3+, otherwise none.
pub fn reveal_size_for(predictions: u32) -> usize {
    if predictions >= REVEAL_THRESHOLD_4X4 {
        4
    } else if predictions >= REVEAL_THRESHOLD_3X3 {
        3
    } else if predictions >= REVEAL_THRESHOLD_2X2 {
        2
    } else {
        0
    }
}

/// Whether a card pattern fits at `anchor`: all four cells in bounds, none of
/// them a wall, the door, or the gold.
pub fn can_place_card(board: &Board, anchor: Position, offsets: &[(i32, i32)]) -> bool {
    for &(dr, dc) in offsets {
        let x = anchor.x as i32 + dc;
        let y = anchor.y as i32 + dr;
        if !Board::in_bounds(x, y) {
            return false;
        }
        let cell = board.cell(Position::new(x as usize, y as usize));
        if matches!(
            cell.kind,
            CellKind::Wall | CellKind::Door | CellKind::Gold { .. }
        ) {
            return false;
        }
    }
    true
}

/// Whether an NxN reveal block fits at `anchor`: in bounds, with no wall or
/// door anywhere in the block.
pub fn can_place_reveal(board: &Board, anchor: Position, size: usize) -> bool {
    if size == 0 {
        return false;
    }
    if !Board::in_bounds(
        (anchor.x + size - 1) as i32,
        (anchor.y + size - 1) as i32,
    ) {
        return false;
    }
    for dy in 0..size {
        for dx in 0..size {
            let cell = board.cell(Position::new(anchor.x + dx, anchor.y + dy));
            if matches!(cell.kind, CellKind::Wall | CellKind::Door) {
                return false;
            }
        }
    }
    true
}

/// Apply a card at `anchor` with the given rotation.
///
/// Returns `None` without touching anything if the card is spent or the
/// pattern does not fit. Otherwise marks every covered cell and returns the
/// number of newly confirmed predictions (cells already `counted` never score
/// twice). The card is consumed, remembering the ability it was used with.
pub fn apply_card(
    board: &mut Board,
    anchor: Position,
    card: &mut Card,
    rotation: Rotation,
) -> Option<u32> {
    if card.used {
        return None;
    }
    let offsets = rotated_offsets(card.shape, rotation);
    if !can_place_card(board, anchor, &offsets) {
        return None;
    }

    let mut matches = 0;
    for (dr, dc) in offsets {
        let pos = Position::new(
            (anchor.x as i32 + dc) as usize,
            (anchor.y as i32 + dr) as usize,
        );
        matches += scan_cell(board, pos, card.detection);
    }

    card.used = true;
    card.used_with = card.detection;
    Some(matches)
}

/// Resolve one probed cell, returning 1 on a newly credited match.
fn scan_cell(board: &mut Board, pos: Position, detection: Option<DetectionKind>) -> u32 {
    let cell = board.cell_mut(pos);
    match (detection, cell.kind) {
        (Some(ability), CellKind::Enemy { kind, .. }) => {
            if ability.matches_enemy(kind) {
                cell.revealed = true;
                if !cell.counted {
                    cell.counted = true;
                    return 1;
                }
            } else {
                cell.scanned = true;
                cell.has_content = Some(true);
            }
        }
        (Some(DetectionKind::Pill), CellKind::Pill { collected: false, .. }) => {
            cell.revealed = true;
            if !cell.counted {
                cell.counted = true;
                return 1;
            }
        }
        (_, CellKind::Enemy { .. } | CellKind::Pill { .. }) => {
            cell.scanned = true;
            cell.has_content = Some(true);
        }
        (_, CellKind::Empty | CellKind::Wall) => {
            cell.scanned = true;
            cell.has_content = Some(false);
        }
        // Door and gold are excluded by placement validation
        (_, CellKind::Door | CellKind::Gold { .. }) => {}
    }
    0
}

/// Disclose an NxN block at `anchor` without consuming a card.
///
/// Every cell in the block that is not a wall or the door is revealed and
/// marked `counted` (re-marking already-counted cells is harmless). Returns
/// whether the reveal happened; the caller resets the prediction counter and
/// leaves reveal mode on success.
pub fn apply_reveal(board: &mut Board, anchor: Position, size: usize) -> bool {
    if !can_place_reveal(board, anchor, size) {
        return false;
    }
    for dy in 0..size {
        for dx in 0..size {
            let cell = board.cell_mut(Position::new(anchor.x + dx, anchor.y + dy));
            if !matches!(cell.kind, CellKind::Wall | CellKind::Door) {
                cell.revealed = true;
                cell.counted = true;
            }
        }
    }
    true
}
