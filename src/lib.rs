//! # holdem_core
//!
//! A No-Limit Texas Hold'em hand engine: the state machine, betting-round
//! driver, pot/side-pot accounting, showdown resolution, and dealer-button
//! discipline (including tournament dead-button rules) that sits underneath
//! a table. Network transport, multi-table orchestration, and blind-schedule
//! progression are out of scope — this crate drives one table's hands.
//!
//! ## Core Modules
//!
//! - [`cards`]: the deck — shuffled, seeded, or rigged construction and the
//!   street-by-street draw sequence.
//! - [`eval`]: the pluggable hand-evaluator boundary, plus a runnable
//!   reference implementation.
//! - [`pot`]: main/side-pot partitioning and showdown payout calculation.
//! - [`betting`]: one betting round's legal-action derivation and
//!   termination check.
//! - [`seating`]: the seating ring, button rotation, and blind assignment,
//!   including dead-button/dead-small-blind handling.
//! - [`hand`]: the hand state machine tying the above together for a single
//!   hand, from blind posting through showdown or fold.
//! - [`player`]: the adapter contract an external agent (bot or human) must
//!   satisfy to occupy a seat.
//! - [`orchestrator`]: [`orchestrator::Table`] — seats players, starts and
//!   drives hands, and exposes the deterministic simulation entry point.
//! - [`event`]: the ordered event stream a table emits.
//!
//! ## Example
//!
//! ```no_run
//! use holdem_core::entities::TableConfig;
//! use holdem_core::event::VecEventSink;
//! use holdem_core::orchestrator::Table;
//! use holdem_core::player::ScriptedAdapter;
//!
//! let mut table = Table::new(TableConfig::default()).expect("valid config");
//! let alice = table
//!     .add_player("alice", 1000, |id| Box::new(ScriptedAdapter::new(id, vec![])))
//!     .expect("seat alice");
//! let bob = table
//!     .add_player("bob", 1000, |id| Box::new(ScriptedAdapter::new(id, vec![])))
//!     .expect("seat bob");
//! let _ = (alice, bob);
//!
//! let mut sink = VecEventSink::default();
//! table.start_hand(&mut sink).expect("hand starts");
//! table.play_hand_sync(&mut sink).expect("hand completes");
//! ```

pub mod constants;
pub mod error;
pub mod entities;
pub mod cards;
pub mod eval;
pub mod pot;
pub mod betting;
pub mod seating;
pub mod hand;
pub mod event;
pub mod player;
pub mod orchestrator;
pub mod logging;

pub use entities::{
    Action, ActionKind, Card, PlayerId, PlayerRecord, PlayerStatus, SeatIndex, TableConfig, Usd,
};
pub use error::{HoldemError, HoldemResult, StartOutcome};
pub use event::{Event, EventSink};
pub use hand::Hand;
pub use orchestrator::Table;
