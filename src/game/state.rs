//! Prototype game state: one shuffled deck and an opening hand
//!
//! Mirrors what the browser front end needs at load time. The deck is every
//! catalog card shuffled with a seeded generator, so a given (catalog, seed)
//! pair always deals the same game.

use crate::catalog::Catalog;
use crate::core::CardId;
use crate::game::zone::{CardZone, Zone};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use serde::{Deserialize, Serialize};

/// Cards dealt to the hand at game start
pub const OPENING_HAND_SIZE: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub deck: CardZone,
    pub hand: CardZone,
    rng: ChaCha12Rng,
}

impl GameState {
    /// Shuffle the whole catalog into a deck and deal the opening hand.
    pub fn deal(catalog: &Catalog, seed: u64) -> Self {
        let mut state = GameState {
            deck: CardZone::with_cards(Zone::Deck, catalog.ids()),
            hand: CardZone::new(Zone::Hand),
            rng: ChaCha12Rng::seed_from_u64(seed),
        };

        state.deck.shuffle(&mut state.rng);

        for _ in 0..OPENING_HAND_SIZE {
            if state.draw().is_none() {
                break;
            }
        }
        state
    }

    /// Move the top card of the deck to the hand
    pub fn draw(&mut self) -> Option<CardId> {
        let card = self.deck.draw_top()?;
        self.hand.add(card.clone());
        Some(card)
    }
}
