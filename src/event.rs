//! Event stream (spec §6): a flat, ordered log of everything that happens
//! during a game, independent of any transport. The core only defines what
//! gets emitted and in what order; a consumer decides how to ship it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entities::{ActionKind, Card, PlayerId, SeatIndex, Usd};
use crate::eval::EvaluatedHand;
use crate::pot::Payout;

/// One community-card street, for events that name which street they're on.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Street {
    PreFlop,
    Flop,
    Turn,
    River,
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::PreFlop => "pre-flop",
            Self::Flop => "flop",
            Self::Turn => "turn",
            Self::River => "river",
        };
        write!(f, "{repr}")
    }
}

/// A revealed hand at showdown, for `hand:ended`'s `showdown_hands`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ShowdownHand {
    pub player_id: PlayerId,
    pub hole_cards: [Card; 2],
    pub best_hand: EvaluatedHand,
}

/// Every event the engine can emit for a table (spec §6). Variant names
/// mirror the wire names in the spec (`snake:colon` becomes a plain Rust
/// identifier); `Display` renders the wire name back out for logging.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Event {
    GameStarted {
        game_number: u64,
        players: Vec<PlayerId>,
    },
    HandStarted {
        dealer_button: SeatIndex,
        players: Vec<PlayerId>,
    },
    CardsDealt {
        player_id: PlayerId,
        card_count: usize,
    },
    CardsCommunity {
        street: Street,
        cards: Vec<Card>,
    },
    ActionRequested {
        player_id: PlayerId,
        to_call: Usd,
        min_raise: Usd,
        max_raise: Usd,
    },
    PlayerAction {
        player_id: PlayerId,
        action: ActionKind,
        amount: Option<Usd>,
    },
    PotUpdated {
        total: Usd,
        player_bet: Option<(PlayerId, Usd)>,
    },
    SidePotCreated {
        pot_index: usize,
        amount: Usd,
        eligible_players: Vec<PlayerId>,
    },
    RoundStarted {
        street: Street,
        community_cards: Vec<Card>,
    },
    RoundEnded {
        street: Street,
    },
    ChipsAwarded {
        player_id: PlayerId,
        amount: Usd,
        total: Usd,
    },
    PlayerEliminated {
        player_id: PlayerId,
    },
    HandEnded {
        winners: Vec<PlayerId>,
        board: Vec<Card>,
        payouts: Vec<Payout>,
        showdown_hands: Vec<ShowdownHand>,
        showdown_participants: Vec<PlayerId>,
    },
    GameEnded {
        final_standings: Vec<(PlayerId, Usd)>,
    },
}

/// Destination for emitted events (spec §9 "single emitter per table").
/// Implementations decide whether to buffer, forward over a channel, or log;
/// the core only guarantees synchronous, causally-ordered calls.
pub trait EventSink {
    fn emit(&mut self, event: Event);
}

/// Appends every event to an in-memory `Vec`, for tests and simulation mode,
/// where the caller inspects the full event log after the hand completes.
#[derive(Clone, Debug, Default)]
pub struct VecEventSink(pub Vec<Event>);

impl EventSink for VecEventSink {
    fn emit(&mut self, event: Event) {
        self.0.push(event);
    }
}
