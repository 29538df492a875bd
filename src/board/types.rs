//! Dungeon board data structures.
//!
//! The board is an 8x8 grid of cells owned by the current round and replaced
//! wholesale when a new round starts. Cell payloads are kind-discriminated so
//! that impossible combinations (a wall with a heal amount, say) cannot be
//! built at all.

use crate::constants::{BOSS_DAMAGE, FIRE_DAMAGE, GRID_HEIGHT, GRID_WIDTH, MELEE_DAMAGE};
use serde::{Deserialize, Serialize};

/// A grid coordinate. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another position.
    pub fn distance(&self, other: Position) -> u32 {
        (self.x.abs_diff(other.x) + self.y.abs_diff(other.y)) as u32
    }

    /// True when `other` is exactly one orthogonal step away.
    pub fn is_adjacent(&self, other: Position) -> bool {
        (self.x.abs_diff(other.x) == 1 && self.y == other.y)
            || (self.y.abs_diff(other.y) == 1 && self.x == other.x)
    }
}

/// The three enemy varieties that can lurk in a dungeon cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Fire,
    Melee,
    Boss,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Fire, EnemyKind::Melee, EnemyKind::Boss];

    /// Energy damage dealt when the adventurer walks into this enemy.
    pub fn damage(&self) -> i32 {
        match self {
            EnemyKind::Fire => FIRE_DAMAGE,
            EnemyKind::Melee => MELEE_DAMAGE,
            EnemyKind::Boss => BOSS_DAMAGE,
        }
    }
}

/// What a cell holds, with the per-kind payload folded into the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Empty,
    Door,
    Gold { value: u32, collected: bool },
    Wall,
    Pill { heal: i32, collected: bool },
    Enemy { kind: EnemyKind, defeated: bool },
}

/// One board cell: its content plus the scanning bookkeeping layered on top.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cell {
    pub kind: CellKind,
    /// Conclusively shown to the player.
    pub revealed: bool,
    /// Probed by a card without a positive identification.
    pub scanned: bool,
    /// Result of a non-matching scan: `Some(true)` means "something is here".
    pub has_content: Option<bool>,
    /// Already credited to the prediction counter.
    pub counted: bool,
}

impl Cell {
    pub fn new(kind: CellKind) -> Self {
        Self {
            kind,
            revealed: false,
            scanned: false,
            has_content: None,
            counted: false,
        }
    }

    /// A revealed-from-creation cell (door, gold, wall).
    pub fn new_revealed(kind: CellKind) -> Self {
        Self {
            revealed: true,
            ..Self::new(kind)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.kind, CellKind::Empty)
    }

    pub fn is_wall(&self) -> bool {
        matches!(self.kind, CellKind::Wall)
    }
}

/// Uncollected-content tally for one row or column, shown at the board edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineContents {
    pub fire: u32,
    pub melee: u32,
    pub boss: u32,
    pub pills: u32,
}

impl LineContents {
    pub fn is_empty(&self) -> bool {
        self.fire == 0 && self.melee == 0 && self.boss == 0 && self.pills == 0
    }

    fn add(&mut self, cell: &Cell) {
        match cell.kind {
            CellKind::Enemy { kind, .. } => match kind {
                EnemyKind::Fire => self.fire += 1,
                EnemyKind::Melee => self.melee += 1,
                EnemyKind::Boss => self.boss += 1,
            },
            CellKind::Pill { collected: false, .. } => self.pills += 1,
            _ => {}
        }
    }
}

/// The 8x8 dungeon grid, indexed as `grid[y][x]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub grid: Vec<Vec<Cell>>,
}

impl Board {
    /// An all-empty board.
    pub fn new() -> Self {
        Self {
            grid: vec![vec![Cell::new(CellKind::Empty); GRID_WIDTH]; GRID_HEIGHT],
        }
    }

    pub fn in_bounds(x: i32, y: i32) -> bool {
        x >= 0 && x < GRID_WIDTH as i32 && y >= 0 && y < GRID_HEIGHT as i32
    }

    pub fn cell(&self, pos: Position) -> &Cell {
        &self.grid[pos.y][pos.x]
    }

    pub fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.grid[pos.y][pos.x]
    }

    /// Position of the single door cell.
    pub fn door_position(&self) -> Position {
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                if matches!(self.grid[y][x].kind, CellKind::Door) {
                    return Position::new(x, y);
                }
            }
        }
        // The generator always places a door; an empty board defaults to the origin.
        Position::new(0, 0)
    }

    /// How many cells hold the given discriminant, ignoring payload.
    pub fn count_kind(&self, predicate: impl Fn(&CellKind) -> bool) -> usize {
        self.grid
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| predicate(&cell.kind))
            .count()
    }

    /// Enemy and pill tallies for row `y`, for the edge hint panel.
    pub fn row_contents(&self, y: usize) -> LineContents {
        let mut tally = LineContents::default();
        for cell in &self.grid[y] {
            tally.add(cell);
        }
        tally
    }

    /// Enemy and pill tallies for column `x`, for the edge hint panel.
    pub fn column_contents(&self, x: usize) -> LineContents {
        let mut tally = LineContents::default();
        for row in &self.grid {
            tally.add(&row[x]);
        }
        tally
    }

    /// Debug command: disclose the whole board.
    pub fn reveal_all(&mut self) {
        for row in &mut self.grid {
            for cell in row {
                cell.revealed = true;
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        let a = Position::new(1, 2);
        let b = Position::new(4, 6);
        assert_eq!(a.distance(b), 7);
        assert_eq!(b.distance(a), 7);
        assert_eq!(a.distance(a), 0);
    }

    #[test]
    fn test_adjacency_orthogonal_only() {
        let origin = Position::new(3, 3);
        assert!(origin.is_adjacent(Position::new(2, 3)));
        assert!(origin.is_adjacent(Position::new(4, 3)));
        assert!(origin.is_adjacent(Position::new(3, 2)));
        assert!(origin.is_adjacent(Position::new(3, 4)));
        // Diagonals and the cell itself don't count
        assert!(!origin.is_adjacent(Position::new(4, 4)));
        assert!(!origin.is_adjacent(Position::new(2, 2)));
        assert!(!origin.is_adjacent(origin));
        // Two steps away
        assert!(!origin.is_adjacent(Position::new(5, 3)));
    }

    #[test]
    fn test_enemy_damage_values() {
        assert_eq!(EnemyKind::Fire.damage(), 3);
        assert_eq!(EnemyKind::Melee.damage(), 2);
        assert_eq!(EnemyKind::Boss.damage(), 8);
    }

    #[test]
    fn test_new_board_is_all_empty_and_hidden() {
        let board = Board::new();
        assert_eq!(board.grid.len(), 8);
        for row in &board.grid {
            assert_eq!(row.len(), 8);
            for cell in row {
                assert!(cell.is_empty());
                assert!(!cell.revealed);
                assert!(!cell.scanned);
                assert!(cell.has_content.is_none());
                assert!(!cell.counted);
            }
        }
    }

    #[test]
    fn test_in_bounds() {
        assert!(Board::in_bounds(0, 0));
        assert!(Board::in_bounds(7, 7));
        assert!(!Board::in_bounds(-1, 0));
        assert!(!Board::in_bounds(0, 8));
        assert!(!Board::in_bounds(8, 0));
    }

    #[test]
    fn test_line_contents_tallies() {
        let mut board = Board::new();
        board.grid[2][0].kind = CellKind::Enemy {
            kind: EnemyKind::Fire,
            defeated: false,
        };
        board.grid[2][3].kind = CellKind::Enemy {
            kind: EnemyKind::Boss,
            defeated: false,
        };
        board.grid[2][5].kind = CellKind::Pill {
            heal: 3,
            collected: false,
        };
        board.grid[2][6].kind = CellKind::Pill {
            heal: 3,
            collected: true,
        };

        let row = board.row_contents(2);
        assert_eq!(row.fire, 1);
        assert_eq!(row.boss, 1);
        assert_eq!(row.melee, 0);
        // Collected pills drop out of the hint
        assert_eq!(row.pills, 1);

        let col = board.column_contents(0);
        assert_eq!(col.fire, 1);
        assert!(board.column_contents(7).is_empty());
    }

    #[test]
    fn test_reveal_all() {
        let mut board = Board::new();
        board.reveal_all();
        assert!(board.grid.iter().flatten().all(|c| c.revealed));
    }

    #[test]
    fn test_door_position_found() {
        let mut board = Board::new();
        board.grid[5][2] = Cell::new_revealed(CellKind::Door);
        assert_eq!(board.door_position(), Position::new(2, 5));
    }
}
