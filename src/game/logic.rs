//! The round/economy state machine.
//!
//! Every externally triggerable operation lives here. Invalid triggers are
//! no-ops returning `false` (or `None`), per the engine's boolean contract:
//! the caller either checks preconditions or treats rejection as nothing
//! happened.

use rand::Rng;

use super::types::{Game, GameOverCause, Phase, RoundDecision};
use crate::board::{generate_board, Position};
use crate::cards::{generate_cards, Rotation};
use crate::constants::{RENT_FREQUENCY, RENT_INCREMENT, VICTORY_TARGET};
use crate::run::{resolve_step, Adventurer, StepEvent};
use crate::scan::{apply_card, apply_reveal, reveal_size_for};
use crate::trace::Route;

/// Flip between explore and trace mode. Clears the card selection.
pub fn toggle_mode(game: &mut Game) -> bool {
    let next = match game.phase {
        Phase::Exploring => Phase::Tracing,
        Phase::Tracing => Phase::Exploring,
        _ => return false,
    };
    game.phase = next;
    game.selected_card = None;
    game.rotation = Rotation::R0;
    true
}

/// Select an unused card for placement. Leaves reveal mode.
pub fn select_card(game: &mut Game, id: u32) -> bool {
    if game.phase != Phase::Exploring {
        return false;
    }
    let live = game.cards.iter().any(|c| c.id == id && !c.used);
    if !live {
        return false;
    }
    game.selected_card = Some(id);
    game.rotation = Rotation::R0;
    game.crystal_ball_active = false;
    true
}

/// Rotate the selected card a quarter turn.
pub fn rotate_selection(game: &mut Game) -> bool {
    if game.phase != Phase::Exploring || game.selected_card.is_none() {
        return false;
    }
    game.rotation = game.rotation.next();
    true
}

/// Toggle reveal mode on the crystal ball, when charged. Activating drops
/// the card selection.
pub fn toggle_crystal_ball(game: &mut Game) -> bool {
    if game.phase != Phase::Exploring {
        return false;
    }
    if game.crystal_ball_active {
        game.crystal_ball_active = false;
        return true;
    }
    if reveal_size_for(game.prediction_counter) == 0 {
        return false;
    }
    game.crystal_ball_active = true;
    game.selected_card = None;
    true
}

/// Explore-mode board click: apply the selected card, or the reveal area
/// when the crystal ball is active. Returns whether anything was applied.
pub fn place_at(game: &mut Game, pos: Position) -> bool {
    if game.phase != Phase::Exploring {
        return false;
    }

    if game.crystal_ball_active {
        let size = reveal_size_for(game.prediction_counter);
        if !apply_reveal(&mut game.board, pos, size) {
            return false;
        }
        // The ball discharges: counter back to zero, reveal mode off
        game.prediction_counter = 0;
        game.crystal_ball_active = false;
        return true;
    }

    let Some(id) = game.selected_card else {
        return false;
    };
    let Some(card) = game.cards.iter_mut().find(|c| c.id == id) else {
        return false;
    };

    match apply_card(&mut game.board, pos, card, game.rotation) {
        Some(matches) => {
            game.prediction_counter += matches;
            // A scoring scan that charges the ball switches reveal mode on
            if matches > 0 && reveal_size_for(game.prediction_counter) > 0 {
                game.crystal_ball_active = true;
            }
            game.selected_card = None;
            game.rotation = Rotation::R0;
            true
        }
        None => false,
    }
}

/// Trace-mode board click: grow the route onto `pos`.
pub fn extend_route(game: &mut Game, pos: Position) -> bool {
    if game.phase != Phase::Tracing {
        return false;
    }
    game.route.extend(&game.board, pos)
}

/// Hand the route to the adventurer. Requires at least one step beyond the
/// door.
pub fn execute_route(game: &mut Game) -> bool {
    if !matches!(game.phase, Phase::Exploring | Phase::Tracing) {
        return false;
    }
    if !game.route.is_executable() {
        return false;
    }
    game.phase = Phase::Executing;
    // The door at index 0 is where the adventurer already stands
    game.step = 1;
    true
}

/// Resolve one execution step. The host calls this once per tick; pacing is
/// its concern, ordering is ours. Returns `None` outside the executing
/// phase.
pub fn advance_step(game: &mut Game) -> Option<StepEvent> {
    if game.phase != Phase::Executing {
        return None;
    }

    let event = resolve_step(
        &mut game.board,
        &game.route,
        game.step,
        &mut game.adventurer,
    );
    match event {
        StepEvent::GoldCollected { .. } => {
            game.phase = Phase::AwaitingDecision;
        }
        StepEvent::Died { .. } => {
            game.phase = Phase::GameOver;
            game.game_over_cause = Some(GameOverCause::EnergyDepleted);
        }
        StepEvent::RouteExhausted => {
            // The walk stopped short of the gold; back to tracing so the
            // route can be extended and run again
            game.phase = Phase::Tracing;
        }
        _ => {
            game.step += 1;
        }
    }
    Some(event)
}

/// Resolve the continue/cash-out decision after a gold pickup. This is the
/// only way out of the awaiting-decision phase.
pub fn resolve_decision<R: Rng>(game: &mut Game, decision: RoundDecision, rng: &mut R) -> bool {
    if game.phase != Phase::AwaitingDecision {
        return false;
    }

    match decision {
        RoundDecision::Continue => {
            game.adventurer.raise_multiplier();
        }
        RoundDecision::CashOut => {
            game.bankroll += game.adventurer.payout();
            game.adventurer = Adventurer::new();
            game.prediction_counter = 0;
            game.crystal_ball_active = false;
        }
    }

    start_next_round(game, rng);
    settle_rent_and_victory(game);
    true
}

/// Full restart after a terminal state (or at any time): round 1, zero
/// bankroll, everything regenerated.
pub fn reset<R: Rng>(game: &mut Game, rng: &mut R) {
    *game = Game::new(rng);
}

/// Replace the board and deck for the next round and return to exploring.
fn start_next_round<R: Rng>(game: &mut Game, rng: &mut R) {
    game.board = generate_board(rng);
    game.cards = generate_cards(rng);
    game.route = Route::new(game.board.door_position());
    game.selected_card = None;
    game.rotation = Rotation::R0;
    game.step = 0;
    game.round += 1;
    game.phase = Phase::Exploring;
}

/// Rent checkpoint every `RENT_FREQUENCY` rounds, then the victory check.
/// Both read the bankroll as of the decision just applied.
fn settle_rent_and_victory(game: &mut Game) {
    let round = game.round;
    if (round - 1) % RENT_FREQUENCY == 0 && round > RENT_FREQUENCY {
        if game.bankroll < game.rent_due {
            game.phase = Phase::GameOver;
            game.game_over_cause = Some(GameOverCause::RentUnpaid);
            return;
        }
        game.bankroll -= game.rent_due;
        game.rent_due += RENT_INCREMENT;
    }

    if game.bankroll >= VICTORY_TARGET {
        game.victory_reached = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, CellKind};
    use crate::cards::{Card, DetectionKind, Shape};
    use crate::game::types::SessionStatus;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded_game(seed: u64) -> Game {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Game::new(&mut rng)
    }

    /// Strip the board down to door + gold so routes are predictable.
    fn clear_board(game: &mut Game, door: Position, gold: Position) {
        game.board = crate::board::Board::new();
        *game.board.cell_mut(door) = Cell::new_revealed(CellKind::Door);
        *game.board.cell_mut(gold) = Cell::new_revealed(CellKind::Gold {
            value: 7,
            collected: false,
        });
        game.route = Route::new(door);
    }

    #[test]
    fn test_toggle_mode_round_trip() {
        let mut game = seeded_game(1);
        assert_eq!(game.phase, Phase::Exploring);

        assert!(toggle_mode(&mut game));
        assert_eq!(game.phase, Phase::Tracing);

        assert!(toggle_mode(&mut game));
        assert_eq!(game.phase, Phase::Exploring);
    }

    #[test]
    fn test_toggle_mode_clears_selection() {
        let mut game = seeded_game(1);
        game.cards = vec![Card::new(1, Shape::O, None)];
        assert!(select_card(&mut game, 1));
        assert!(game.selected_card.is_some());

        toggle_mode(&mut game);
        assert!(game.selected_card.is_none());
        assert_eq!(game.rotation, Rotation::R0);
    }

    #[test]
    fn test_select_card_rejects_used_and_unknown() {
        let mut game = seeded_game(1);
        let mut used = Card::new(1, Shape::O, None);
        used.used = true;
        game.cards = vec![used, Card::new(2, Shape::T, None)];

        assert!(!select_card(&mut game, 1));
        assert!(!select_card(&mut game, 99));
        assert!(select_card(&mut game, 2));
    }

    #[test]
    fn test_rotate_selection_needs_a_card() {
        let mut game = seeded_game(1);
        game.selected_card = None;
        assert!(!rotate_selection(&mut game));

        game.cards = vec![Card::new(1, Shape::I, None)];
        select_card(&mut game, 1);
        assert!(rotate_selection(&mut game));
        assert_eq!(game.rotation, Rotation::R90);
        assert!(rotate_selection(&mut game));
        assert_eq!(game.rotation, Rotation::R180);
    }

    #[test]
    fn test_crystal_ball_needs_charge() {
        let mut game = seeded_game(1);
        game.prediction_counter = 2;
        assert!(!toggle_crystal_ball(&mut game));

        game.prediction_counter = 3;
        assert!(toggle_crystal_ball(&mut game));
        assert!(game.crystal_ball_active);

        // Toggling again puts it away
        assert!(toggle_crystal_ball(&mut game));
        assert!(!game.crystal_ball_active);
    }

    #[test]
    fn test_scoring_scan_charges_and_activates_ball() {
        let mut game = seeded_game(1);
        clear_board(&mut game, Position::new(7, 7), Position::new(0, 7));
        // Three fire enemies under an O card's footprint
        for (x, y) in [(0, 0), (1, 0), (0, 1)] {
            *game.board.cell_mut(Position::new(x, y)) = Cell::new(CellKind::Enemy {
                kind: crate::board::EnemyKind::Fire,
                defeated: false,
            });
        }
        game.cards = vec![Card::new(1, Shape::O, Some(DetectionKind::Fire))];

        assert!(select_card(&mut game, 1));
        assert!(place_at(&mut game, Position::new(0, 0)));

        assert_eq!(game.prediction_counter, 3);
        assert!(game.crystal_ball_active);
        assert!(game.selected_card.is_none());
        assert!(game.cards[0].used);
    }

    #[test]
    fn test_reveal_discharges_counter() {
        let mut game = seeded_game(1);
        clear_board(&mut game, Position::new(7, 7), Position::new(0, 7));
        game.prediction_counter = 4;
        game.crystal_ball_active = true;

        assert!(place_at(&mut game, Position::new(2, 2)));
        assert_eq!(game.prediction_counter, 0);
        assert!(!game.crystal_ball_active);
        assert!(game.board.cell(Position::new(2, 2)).revealed);
        assert!(game.board.cell(Position::new(3, 3)).revealed);
    }

    #[test]
    fn test_place_without_selection_is_noop() {
        let mut game = seeded_game(1);
        game.selected_card = None;
        game.crystal_ball_active = false;
        assert!(!place_at(&mut game, Position::new(0, 0)));
    }

    #[test]
    fn test_execute_requires_route_beyond_door() {
        let mut game = seeded_game(1);
        clear_board(&mut game, Position::new(0, 0), Position::new(7, 7));

        assert!(!execute_route(&mut game));
        assert_eq!(game.phase, Phase::Exploring);

        toggle_mode(&mut game);
        assert!(extend_route(&mut game, Position::new(1, 0)));
        assert!(execute_route(&mut game));
        assert_eq!(game.phase, Phase::Executing);
        assert_eq!(game.step, 1);
    }

    #[test]
    fn test_extend_route_only_in_trace_mode() {
        let mut game = seeded_game(1);
        clear_board(&mut game, Position::new(0, 0), Position::new(7, 7));

        assert!(!extend_route(&mut game, Position::new(1, 0)));
        toggle_mode(&mut game);
        assert!(extend_route(&mut game, Position::new(1, 0)));
    }

    #[test]
    fn test_gold_pickup_awaits_decision() {
        let mut game = seeded_game(1);
        clear_board(&mut game, Position::new(0, 0), Position::new(2, 0));
        toggle_mode(&mut game);
        extend_route(&mut game, Position::new(1, 0));
        extend_route(&mut game, Position::new(2, 0));
        execute_route(&mut game);

        assert!(matches!(
            advance_step(&mut game),
            Some(StepEvent::Moved { .. })
        ));
        assert!(matches!(
            advance_step(&mut game),
            Some(StepEvent::GoldCollected { value: 7, .. })
        ));
        assert_eq!(game.phase, Phase::AwaitingDecision);
        assert_eq!(game.adventurer.gold_carried, 7);

        // Stepping past the suspend is a no-op
        assert!(advance_step(&mut game).is_none());
    }

    #[test]
    fn test_route_exhaustion_returns_to_tracing() {
        let mut game = seeded_game(1);
        clear_board(&mut game, Position::new(0, 0), Position::new(7, 7));
        toggle_mode(&mut game);
        extend_route(&mut game, Position::new(1, 0));
        execute_route(&mut game);

        assert!(matches!(
            advance_step(&mut game),
            Some(StepEvent::Moved { .. })
        ));
        assert!(matches!(
            advance_step(&mut game),
            Some(StepEvent::RouteExhausted)
        ));
        assert_eq!(game.phase, Phase::Tracing);

        // The surviving route can grow and run again
        assert!(extend_route(&mut game, Position::new(2, 0)));
        assert!(execute_route(&mut game));
    }

    #[test]
    fn test_death_ends_session() {
        let mut game = seeded_game(1);
        clear_board(&mut game, Position::new(0, 0), Position::new(7, 7));
        *game.board.cell_mut(Position::new(1, 0)) = Cell::new(CellKind::Enemy {
            kind: crate::board::EnemyKind::Boss,
            defeated: false,
        });
        game.adventurer.energy = 5;

        toggle_mode(&mut game);
        extend_route(&mut game, Position::new(1, 0));
        execute_route(&mut game);

        assert!(matches!(
            advance_step(&mut game),
            Some(StepEvent::Died { .. })
        ));
        assert_eq!(game.phase, Phase::GameOver);
        assert_eq!(game.status(), SessionStatus::Dead);
        assert!(advance_step(&mut game).is_none());
        assert!(!execute_route(&mut game));
    }

    #[test]
    fn test_continue_keeps_adventurer_and_raises_multiplier() {
        let mut game = seeded_game(1);
        game.phase = Phase::AwaitingDecision;
        game.adventurer.gold_carried = 7;
        game.adventurer.energy = 22;
        game.prediction_counter = 5;

        let mut rng = ChaCha8Rng::seed_from_u64(9);
        assert!(resolve_decision(&mut game, RoundDecision::Continue, &mut rng));

        assert_eq!(game.round, 2);
        assert_eq!(game.phase, Phase::Exploring);
        assert_eq!(game.adventurer.multiplier_tenths, 11);
        // Same adventurer: gold and energy carry over
        assert_eq!(game.adventurer.gold_carried, 7);
        assert_eq!(game.adventurer.energy, 22);
        // Predictions also carry over; only cash-out resets them
        assert_eq!(game.prediction_counter, 5);
        // Fresh board and route
        assert_eq!(game.route.len(), 1);
        assert_eq!(game.route.last(), game.board.door_position());
    }

    #[test]
    fn test_cashout_banks_floored_payout_and_resets_run() {
        let mut game = seeded_game(1);
        game.phase = Phase::AwaitingDecision;
        game.adventurer.gold_carried = 7;
        game.adventurer.multiplier_tenths = 13;
        game.adventurer.energy = 12;
        game.prediction_counter = 6;
        game.crystal_ball_active = true;

        let mut rng = ChaCha8Rng::seed_from_u64(9);
        assert!(resolve_decision(&mut game, RoundDecision::CashOut, &mut rng));

        assert_eq!(game.bankroll, 9); // floor(7 * 1.3)
        assert_eq!(game.adventurer.energy, 40);
        assert_eq!(game.adventurer.gold_carried, 0);
        assert_eq!(game.adventurer.multiplier_tenths, 10);
        assert_eq!(game.prediction_counter, 0);
        assert!(!game.crystal_ball_active);
        assert_eq!(game.round, 2);
    }

    #[test]
    fn test_decision_rejected_outside_awaiting() {
        let mut game = seeded_game(1);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        assert!(!resolve_decision(&mut game, RoundDecision::Continue, &mut rng));
        assert_eq!(game.round, 1);
    }

    #[test]
    fn test_rent_shortfall_is_terminal() {
        let mut game = seeded_game(1);
        game.round = 4;
        game.bankroll = 25;
        game.phase = Phase::AwaitingDecision;

        let mut rng = ChaCha8Rng::seed_from_u64(9);
        resolve_decision(&mut game, RoundDecision::Continue, &mut rng);

        // Round 5 decision point, 25 < 30
        assert_eq!(game.round, 5);
        assert_eq!(game.phase, Phase::GameOver);
        assert_eq!(game.status(), SessionStatus::GameOver);
        assert_eq!(game.bankroll, 25);
    }

    #[test]
    fn test_rent_paid_deducts_and_escalates() {
        let mut game = seeded_game(1);
        game.round = 4;
        game.bankroll = 30;
        game.phase = Phase::AwaitingDecision;

        let mut rng = ChaCha8Rng::seed_from_u64(9);
        resolve_decision(&mut game, RoundDecision::Continue, &mut rng);

        assert_eq!(game.round, 5);
        assert_eq!(game.bankroll, 0);
        assert_eq!(game.rent_due, 40);
        assert_eq!(game.phase, Phase::Exploring);
    }

    #[test]
    fn test_no_rent_before_round_five() {
        let mut game = seeded_game(1);
        game.bankroll = 0;
        for expected_round in 2..=4 {
            game.phase = Phase::AwaitingDecision;
            let mut rng = ChaCha8Rng::seed_from_u64(expected_round as u64);
            resolve_decision(&mut game, RoundDecision::Continue, &mut rng);
            assert_eq!(game.round, expected_round);
            assert_eq!(game.phase, Phase::Exploring, "rent fired early");
        }
    }

    #[test]
    fn test_cashout_covers_rent_in_same_decision() {
        // The rent check must see the gold banked by this very cash-out
        let mut game = seeded_game(1);
        game.round = 4;
        game.bankroll = 0;
        game.adventurer.gold_carried = 30;
        game.adventurer.multiplier_tenths = 10;
        game.phase = Phase::AwaitingDecision;

        let mut rng = ChaCha8Rng::seed_from_u64(9);
        resolve_decision(&mut game, RoundDecision::CashOut, &mut rng);

        assert_eq!(game.phase, Phase::Exploring);
        assert_eq!(game.bankroll, 0); // 30 banked, 30 paid
        assert_eq!(game.rent_due, 40);
    }

    #[test]
    fn test_victory_latches_and_play_continues() {
        let mut game = seeded_game(1);
        game.adventurer.gold_carried = 50;
        game.phase = Phase::AwaitingDecision;

        let mut rng = ChaCha8Rng::seed_from_u64(9);
        resolve_decision(&mut game, RoundDecision::CashOut, &mut rng);

        assert!(game.victory_reached);
        assert_eq!(game.status(), SessionStatus::Victory);
        assert_eq!(game.phase, Phase::Exploring);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut game = seeded_game(1);
        game.bankroll = 99;
        game.round = 7;
        game.phase = Phase::GameOver;
        game.game_over_cause = Some(GameOverCause::RentUnpaid);

        let mut rng = ChaCha8Rng::seed_from_u64(5);
        reset(&mut game, &mut rng);

        assert_eq!(game.round, 1);
        assert_eq!(game.bankroll, 0);
        assert_eq!(game.phase, Phase::Exploring);
        assert!(game.game_over_cause.is_none());
        assert_eq!(game.status(), SessionStatus::Playing);
    }
}
