//! Session state for one Dungoban game.

use crate::board::{generate_board, Board};
use crate::cards::{generate_cards, Card, Rotation};
use crate::constants::{INITIAL_RENT, RENT_FREQUENCY};
use crate::run::Adventurer;
use crate::scan::reveal_size_for;
use crate::trace::Route;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Where the session is in the round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Placing cards / crystal-ball reveals.
    Exploring,
    /// Growing the route from the door.
    Tracing,
    /// Stepping the adventurer along the route.
    Executing,
    /// Gold reached; waiting on the continue/cash-out decision.
    AwaitingDecision,
    /// Terminal: only a full reset leaves this.
    GameOver,
}

/// Why the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// The adventurer's energy reached zero.
    EnergyDepleted,
    /// The bankroll could not cover a rent checkpoint.
    RentUnpaid,
}

/// The status the presentation layer shows for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Playing,
    /// The victory target has been reached; play continues in survival mode.
    Victory,
    /// Dead adventurer ended the session.
    Dead,
    /// Rent shortfall ended the session.
    GameOver,
}

/// The player's choice when the adventurer reaches the gold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundDecision {
    /// Keep the same adventurer: multiplier +0.1, new board, new deck.
    Continue,
    /// Bank the carried gold and send in a fresh adventurer.
    CashOut,
}

/// The whole game session: board, deck, route, adventurer, and economy.
///
/// All mutation goes through the operations in [`crate::game::logic`], so a
/// host that queues calls through a single owner keeps every invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub board: Board,
    pub cards: Vec<Card>,
    /// Id of the currently selected card, if any.
    pub selected_card: Option<u32>,
    pub rotation: Rotation,
    pub route: Route,
    /// Next route index the simulator will resolve.
    pub step: usize,
    pub adventurer: Adventurer,
    pub bankroll: u32,
    pub rent_due: u32,
    pub round: u32,
    /// Confirmed correct scans since the last crystal-ball use.
    pub prediction_counter: u32,
    /// Reveal mode: the next board click discloses an area instead of
    /// placing a card.
    pub crystal_ball_active: bool,
    pub phase: Phase,
    pub victory_reached: bool,
    pub game_over_cause: Option<GameOverCause>,
}

impl Game {
    /// Start a brand-new session: round 1, empty bankroll, fresh board,
    /// deck, and adventurer.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let board = generate_board(rng);
        let route = Route::new(board.door_position());
        Self {
            board,
            cards: generate_cards(rng),
            selected_card: None,
            rotation: Rotation::R0,
            route,
            step: 0,
            adventurer: Adventurer::new(),
            bankroll: 0,
            rent_due: INITIAL_RENT,
            round: 1,
            prediction_counter: 0,
            crystal_ball_active: false,
            phase: Phase::Exploring,
            victory_reached: false,
            game_over_cause: None,
        }
    }

    /// The status banner the UI derives its messaging from.
    pub fn status(&self) -> SessionStatus {
        match self.game_over_cause {
            Some(GameOverCause::EnergyDepleted) => SessionStatus::Dead,
            Some(GameOverCause::RentUnpaid) => SessionStatus::GameOver,
            None if self.victory_reached => SessionStatus::Victory,
            None => SessionStatus::Playing,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// The currently selected card, if a live one is selected.
    pub fn selected(&self) -> Option<&Card> {
        let id = self.selected_card?;
        self.cards.iter().find(|c| c.id == id)
    }

    /// Crystal-ball area size unlocked by the current prediction count.
    pub fn reveal_size(&self) -> usize {
        reveal_size_for(self.prediction_counter)
    }

    /// Rounds left until the next rent checkpoint (1 = checkpoint at the
    /// coming decision).
    pub fn rounds_until_rent(&self) -> u32 {
        RENT_FREQUENCY - ((self.round - 1) % RENT_FREQUENCY)
    }
}
