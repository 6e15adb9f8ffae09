//! Core data types shared across the engine (spec §3).

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whole-chip amounts. If a table's total chips in play ever exceed ~4.2
/// billion, we have a different problem on our hands.
pub type Usd = u32;

/// Numeric seat index, `0..MAX_PLAYERS`.
pub type SeatIndex = usize;

/// Stable player identifier, independent of seat (seats get reassigned;
/// identity does not).
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Suit {
    Club,
    Diamond,
    Heart,
    Spade,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Club => "c",
            Self::Diamond => "d",
            Self::Heart => "h",
            Self::Spade => "s",
        };
        write!(f, "{repr}")
    }
}

/// Card rank value: 2..=14, where ace is high (14) for comparison purposes.
/// Ace-low straights are handled explicitly by the evaluator.
pub type Value = u8;

/// A card is totally ordered by rank, with suit only breaking ties for
/// display purposes (never for hand strength).
#[derive(Clone, Copy, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Card(pub Value, pub Suit);

impl Card {
    #[must_use]
    pub fn rank(&self) -> Value {
        self.0
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.1
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self.0 {
            14 => "A".to_string(),
            13 => "K".to_string(),
            12 => "Q".to_string(),
            11 => "J".to_string(),
            10 => "T".to_string(),
            v => v.to_string(),
        };
        write!(f, "{value}{}", self.1)
    }
}

/// Hand-strength rank class, totally ordered low-to-high (spec §4.2).
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum RankClass {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl fmt::Display for RankClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::HighCard => "high card",
            Self::Pair => "pair",
            Self::TwoPair => "two pair",
            Self::ThreeOfAKind => "three of a kind",
            Self::Straight => "straight",
            Self::Flush => "flush",
            Self::FullHouse => "full house",
            Self::FourOfAKind => "four of a kind",
            Self::StraightFlush => "straight flush",
            Self::RoyalFlush => "royal flush",
        };
        write!(f, "{repr}")
    }
}

/// A player's standing within a hand (spec §3 `PlayerRecord.state`).
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum PlayerStatus {
    Waiting,
    Active,
    Folded,
    AllIn,
    SittingOut,
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Waiting => "waiting",
            Self::Active => "active",
            Self::Folded => "folded",
            Self::AllIn => "all-in",
            Self::SittingOut => "sitting out",
        };
        write!(f, "{repr}")
    }
}

/// An action an adapter has chosen (spec §6).
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Fold => "folds",
            Self::Check => "checks",
            Self::Call => "calls",
            Self::Bet => "bets",
            Self::Raise => "raises",
            Self::AllIn => "goes all-in",
        };
        write!(f, "{repr}")
    }
}

/// Action record produced by a player adapter (spec §6). `amount` is the
/// to-call delta for `Call`, the new per-street total for `Bet`/`Raise`, and
/// the all-in amount for `AllIn`; absent for `Fold`/`Check` (Open Question 3,
/// resolved in SPEC_FULL.md).
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Action {
    pub player_id: PlayerId,
    pub kind: ActionKind,
    pub amount: Option<Usd>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Action {
    #[must_use]
    pub fn new(player_id: PlayerId, kind: ActionKind, amount: Option<Usd>) -> Self {
        Self {
            player_id,
            kind,
            amount,
            timestamp: chrono::Utc::now(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.amount {
            Some(amount) => write!(f, "{} {} ${amount}", self.player_id, self.kind),
            None => write!(f, "{} {}", self.player_id, self.kind),
        }
    }
}

/// A legal action a player may currently take, carrying enough information
/// for the adapter to choose an amount (spec §4.4 legal-action derivation).
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ValidAction {
    Fold,
    Check,
    Call { amount: Usd },
    Bet { min: Usd, max: Usd },
    Raise { min: Usd, max: Usd },
    AllIn { amount: Usd },
}

/// Stable record of a seated player (spec §3 `PlayerRecord`).
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub display_name: String,
    pub chips: Usd,
    pub status: PlayerStatus,
    /// Amount contributed in the current betting round.
    pub street_bet: Usd,
    /// Sum of contributions across all streets this hand.
    pub hand_contribution: Usd,
    pub last_action: Option<ActionKind>,
    /// Present only between deal and showdown/fold.
    pub hole_cards: Option<[Card; 2]>,
}

impl PlayerRecord {
    #[must_use]
    pub fn new(id: PlayerId, display_name: impl Into<String>, chips: Usd) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            chips,
            status: PlayerStatus::Waiting,
            street_bet: 0,
            hand_contribution: 0,
            last_action: None,
            hole_cards: None,
        }
    }

    #[must_use]
    pub fn is_contending(&self) -> bool {
        matches!(self.status, PlayerStatus::Active | PlayerStatus::AllIn)
    }

    pub fn reset_for_new_hand(&mut self) {
        self.street_bet = 0;
        self.hand_contribution = 0;
        self.last_action = None;
        self.hole_cards = None;
        self.status = if self.chips == 0 {
            PlayerStatus::SittingOut
        } else {
            PlayerStatus::Waiting
        };
    }

    pub fn reset_for_new_street(&mut self) {
        self.street_bet = 0;
        if matches!(self.status, PlayerStatus::Active) {
            self.last_action = None;
        }
    }
}

/// Table-level configuration (spec §3 `TableConfig`).
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TableConfig {
    pub small_blind: Usd,
    pub big_blind: Usd,
    pub min_buy_in: Usd,
    pub max_buy_in: Usd,
    pub min_players: usize,
    pub max_players: usize,
    pub initial_button: Option<SeatIndex>,
    pub simulation_mode: bool,
}

impl TableConfig {
    /// Validate configuration invariants (spec §7 `ConfigurationError`).
    pub fn validate(&self) -> crate::error::HoldemResult<()> {
        use crate::error::HoldemError;

        if self.small_blind == 0 || self.big_blind == 0 {
            return Err(HoldemError::InvalidBlinds {
                small: self.small_blind,
                big: self.big_blind,
            });
        }
        if self.min_players < 2 {
            return Err(HoldemError::MinPlayersTooLow(self.min_players));
        }
        if self.max_players < self.min_players || self.max_players > crate::constants::MAX_PLAYERS
        {
            return Err(HoldemError::SeatCapacityViolation {
                capacity: self.max_players,
                min_players: self.min_players,
            });
        }
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: 10,
            big_blind: 20,
            min_buy_in: 400,
            max_buy_in: 4000,
            min_players: 2,
            max_players: crate::constants::MAX_PLAYERS,
            initial_button: None,
            simulation_mode: false,
        }
    }
}
