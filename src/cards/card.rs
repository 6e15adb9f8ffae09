//! Minimal card/suit/rank surface re-exported from [`crate::entities`].
//!
//! The richer showdown types (`RankClass`, evaluated hands) live in
//! [`crate::eval`]; this module only deals in the raw 52-card deck.

pub use crate::entities::{Card, Suit, Value};

/// The fixed suit/value alphabet a standard deck is built from.
pub const SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

/// Values 2..=14 inclusive (ace high).
pub const VALUES: [Value; 13] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14];
