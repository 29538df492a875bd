//! Route tracing for the adventurer's walk.
//!
//! A route always starts at the dungeon door and grows one orthogonal step at
//! a time. Cells are never revisited and walls can never join the route.

use crate::board::{Board, Position};
use serde::{Deserialize, Serialize};

/// The adventurer's intended path, in walk order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub cells: Vec<Position>,
}

impl Route {
    /// A fresh route anchored at the door.
    pub fn new(door: Position) -> Self {
        Self { cells: vec![door] }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell the route currently ends on.
    pub fn last(&self) -> Position {
        self.cells[self.cells.len() - 1]
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Try to grow the route onto `pos`.
    ///
    /// Accepted only when `pos` is on the board, orthogonally adjacent to the
    /// current end, not already part of the route, and not a wall. Returns
    /// whether the route changed.
    pub fn extend(&mut self, board: &Board, pos: Position) -> bool {
        if !Board::in_bounds(pos.x as i32, pos.y as i32) {
            return false;
        }
        if board.cell(pos).is_wall() {
            return false;
        }
        if !self.last().is_adjacent(pos) {
            return false;
        }
        if self.contains(pos) {
            return false;
        }
        self.cells.push(pos);
        true
    }

    /// A route needs at least one step beyond the door to be walkable.
    pub fn is_executable(&self) -> bool {
        self.cells.len() >= 2
    }
}
