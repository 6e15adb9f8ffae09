//! Deck abstraction (spec §4.1): shuffled and rigged construction, plus the
//! draw sequence a hand actually uses (hole cards, flop, turn, river, with
//! burns per [`crate::constants::BURNS_ENABLED`]).

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::cards::card::{SUITS, VALUES};
use crate::constants::{BURNS_ENABLED, DECK_SIZE, HOLE_CARDS_PER_PLAYER};
use crate::entities::Card;
use crate::error::{HoldemError, HoldemResult};

/// An ordered stack of cards. Drawing pops from the front of `cards`; index
/// 0 is dealt first. Internally we keep a cursor instead of mutating the
/// vector so a rigged deck's original order stays inspectable in tests.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
}

impl Deck {
    /// Build a full 52-card deck shuffled with a fresh, non-deterministic
    /// RNG. Use [`Deck::new_shuffled_with_seed`] for reproducible ordering.
    #[must_use]
    pub fn new_shuffled(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new_shuffled_with_seed(seed),
            None => {
                let mut cards = Self::fresh_cards();
                let mut rng = rand::rng();
                cards.shuffle(&mut rng);
                Self { cards, cursor: 0 }
            }
        }
    }

    /// Build a full 52-card deck shuffled deterministically from `seed`.
    /// Calling this twice with the same seed yields bit-identical orderings.
    #[must_use]
    pub fn new_shuffled_with_seed(seed: u64) -> Self {
        let mut cards = Self::fresh_cards();
        let mut rng = StdRng::seed_from_u64(seed);
        cards.shuffle(&mut rng);
        Self { cards, cursor: 0 }
    }

    /// Build a deck with an explicit, caller-chosen card order (for tests
    /// that need a specific showdown result). `cards` need not be a full
    /// 52-card set; drawing past the end yields [`HoldemError::DeckExhausted`].
    #[must_use]
    pub fn new_rigged(cards: Vec<Card>) -> Self {
        Self { cards, cursor: 0 }
    }

    /// Build a rigged deck from per-player hole-card pairs plus board cards,
    /// laying the flat draw order out exactly the way [`Deck::draw_hole_pair`]
    /// / [`Deck::draw_flop_three`] / etc. will consume it: hole cards are
    /// dealt in alternating order across players (seat 0's first card, seat
    /// 1's first card, ..., seat 0's second card, seat 1's second card, ...),
    /// matching how a real dealer deals, then burns (if
    /// [`BURNS_ENABLED`]) and board cards follow in street order.
    #[must_use]
    pub fn rigged_alternating(
        hole_cards: &[[Card; HOLE_CARDS_PER_PLAYER]],
        burn_before_flop: Card,
        flop: [Card; 3],
        burn_before_turn: Card,
        turn: Card,
        burn_before_river: Card,
        river: Card,
    ) -> Self {
        let mut cards = Vec::new();
        for round in 0..HOLE_CARDS_PER_PLAYER {
            for hand in hole_cards {
                cards.push(hand[round]);
            }
        }
        if BURNS_ENABLED {
            cards.push(burn_before_flop);
        }
        cards.extend(flop);
        if BURNS_ENABLED {
            cards.push(burn_before_turn);
        }
        cards.push(turn);
        if BURNS_ENABLED {
            cards.push(burn_before_river);
        }
        cards.push(river);
        Self::new_rigged(cards)
    }

    fn fresh_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in SUITS {
            for value in VALUES {
                cards.push(Card(value, suit));
            }
        }
        cards
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.cursor)
    }

    fn draw(&mut self) -> HoldemResult<Card> {
        if self.cursor >= self.cards.len() {
            return Err(HoldemError::DeckExhausted {
                cards_drawn: self.cursor,
            });
        }
        let card = self.cards[self.cursor];
        self.cursor += 1;
        Ok(card)
    }

    /// Burn one card if burns are enabled; no-op otherwise. Failing to burn
    /// due to an exhausted deck is still a hard error: a real dealer cannot
    /// silently skip the burn.
    fn maybe_burn(&mut self) -> HoldemResult<()> {
        if BURNS_ENABLED {
            self.draw()?;
        }
        Ok(())
    }

    pub fn draw_one(&mut self) -> HoldemResult<Card> {
        self.draw()
    }

    /// Deal hole cards to `num_players` seats in real-dealer order: one card
    /// to each seat, repeated [`HOLE_CARDS_PER_PLAYER`] times, rather than
    /// two consecutive cards to a single seat.
    pub fn draw_hole_cards(&mut self, num_players: usize) -> HoldemResult<Vec<[Card; HOLE_CARDS_PER_PLAYER]>> {
        let mut hands = vec![[Card(0, crate::entities::Suit::Club); HOLE_CARDS_PER_PLAYER]; num_players];
        for round in 0..HOLE_CARDS_PER_PLAYER {
            for hand in hands.iter_mut() {
                hand[round] = self.draw()?;
            }
        }
        Ok(hands)
    }

    pub fn draw_flop_three(&mut self) -> HoldemResult<[Card; 3]> {
        self.maybe_burn()?;
        Ok([self.draw()?, self.draw()?, self.draw()?])
    }

    pub fn draw_turn_one(&mut self) -> HoldemResult<Card> {
        self.maybe_burn()?;
        self.draw()
    }

    pub fn draw_river_one(&mut self) -> HoldemResult<Card> {
        self.maybe_burn()?;
        self.draw()
    }
}
