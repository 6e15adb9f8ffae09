//! Error taxonomy (spec §7).
//!
//! Local recovery (invalid actions, timeouts) never surfaces as an `Err`
//! from the driver; only configuration errors and engine invariant
//! violations propagate to the orchestrator's caller.

use thiserror::Error;

use crate::entities::{ActionKind, SeatIndex, Usd};

/// Errors that can prevent a hand or table operation from completing.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum HoldemError {
    #[error("blinds must be positive (small={small}, big={big})")]
    InvalidBlinds { small: Usd, big: Usd },

    #[error("min_players must be >= 2 (got {0})")]
    MinPlayersTooLow(usize),

    #[error("seat capacity {capacity} cannot hold min_players {min_players}")]
    SeatCapacityViolation { capacity: usize, min_players: usize },

    #[error("not enough players: need {needed}, have {have}")]
    NotEnoughPlayers { needed: usize, have: usize },

    #[error("deck exhausted after {cards_drawn} cards")]
    DeckExhausted { cards_drawn: usize },

    #[error("illegal action {attempted} (amount={amount:?}) from seat {seat}")]
    InvalidAction {
        seat: SeatIndex,
        attempted: ActionKind,
        amount: Option<Usd>,
    },

    #[error("engine invariant violated: {0}")]
    InvariantViolation(String),

    #[error("action requested at seat {seat} while hand is not awaiting action")]
    NoActionPending { seat: SeatIndex },

    #[error("betting round aborted mid-round at seat {seat}")]
    MidRoundAbort { seat: SeatIndex },
}

pub type HoldemResult<T> = Result<T, HoldemError>;

/// Outcome of a `try_start_hand` call (spec §7): failures never mutate chip
/// balances, and are reported structurally rather than via a bare `Result`
/// so callers can render `reason`/`details` without matching on an error enum.
#[derive(Debug, Clone, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StartOutcome {
    pub success: bool,
    pub reason: Option<String>,
    pub details: Option<String>,
}

impl StartOutcome {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            success: true,
            reason: None,
            details: None,
        }
    }

    #[must_use]
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            reason: Some(reason.into()),
            details: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl From<HoldemError> for StartOutcome {
    fn from(value: HoldemError) -> Self {
        Self::failed(value.to_string())
    }
}
