//! Round deck generation.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{Card, DetectionKind, Shape};
use crate::constants::{CARD_ABILITY_CHANCE, CARD_COUNT_MAX, CARD_COUNT_MIN};

/// Draw the round's deck: 1-3 cards with shapes dealt from a fresh shuffle of
/// all seven, so no shape repeats within a draw of three. Each card has a 60%
/// chance of carrying a detection ability.
pub fn generate_cards<R: Rng>(rng: &mut R) -> Vec<Card> {
    let count = rng.gen_range(CARD_COUNT_MIN..=CARD_COUNT_MAX) as usize;

    let mut shapes = Shape::ALL;
    shapes.shuffle(rng);

    let mut cards = Vec::with_capacity(count);
    for i in 0..count {
        let shape = shapes[i % shapes.len()];
        let detection = if rng.gen::<f64>() < CARD_ABILITY_CHANCE {
            DetectionKind::ALL.choose(rng).copied()
        } else {
            None
        };
        cards.push(Card::new(i as u32 + 1, shape, detection));
    }

    cards
}
