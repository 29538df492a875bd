//! The path-execution simulator.
//!
//! Walks the adventurer one route cell per call, resolving the cell's effect
//! and committing it before the next step can happen. Reaching the gold
//! suspends the walk for a continue/cash-out decision; running out of energy
//! ends the session.

use super::types::Adventurer;
use crate::board::{Board, CellKind, EnemyKind, Position};
use crate::constants::{MAX_ENERGY, STEP_ENERGY_COST};
use crate::trace::Route;

/// What a single execution step resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// Stepped onto a harmless cell (empty, spent pill, defeated enemy).
    Moved { position: Position },
    /// Took an uncollected pill and healed.
    PillTaken { position: Position, healed: i32 },
    /// Walked into a live enemy and paid its damage.
    EnemyFought {
        position: Position,
        kind: EnemyKind,
        damage: i32,
    },
    /// Reached the gold: the walk suspends awaiting a decision.
    GoldCollected { position: Position, value: u32 },
    /// Energy hit zero or below. Terminal.
    Died { position: Position },
    /// The route ran out before gold or death.
    RouteExhausted,
}

/// Resolve the route cell at `step` against the board.
///
/// `step` indexes `route.cells`; execution begins at 1 since the door the
/// adventurer starts on costs nothing. Gold pickup commits the collection and
/// carried gold but deducts no energy for that step.
pub fn resolve_step(
    board: &mut Board,
    route: &Route,
    step: usize,
    adventurer: &mut Adventurer,
) -> StepEvent {
    if step >= route.len() {
        return StepEvent::RouteExhausted;
    }

    let position = route.cells[step];
    let mut cost = STEP_ENERGY_COST;
    let mut healed = 0;
    let mut event = StepEvent::Moved { position };

    let cell = board.cell_mut(position);
    match cell.kind {
        CellKind::Gold {
            value,
            collected: false,
        } => {
            cell.kind = CellKind::Gold {
                value,
                collected: true,
            };
            adventurer.gold_carried += value;
            return StepEvent::GoldCollected { position, value };
        }
        CellKind::Pill {
            heal,
            collected: false,
        } => {
            cell.kind = CellKind::Pill {
                heal,
                collected: true,
            };
            cell.revealed = true;
            healed = heal;
            event = StepEvent::PillTaken { position, healed };
        }
        CellKind::Enemy {
            kind,
            defeated: false,
        } => {
            cell.kind = CellKind::Enemy {
                kind,
                defeated: true,
            };
            cell.revealed = true;
            let damage = kind.damage();
            cost += damage;
            event = StepEvent::EnemyFought {
                position,
                kind,
                damage,
            };
        }
        _ => {
            // Footprint marker for display
            cell.revealed = true;
        }
    }

    adventurer.energy = (adventurer.energy - cost + healed).min(MAX_ENERGY);
    if adventurer.energy <= 0 {
        return StepEvent::Died { position };
    }

    event
}
