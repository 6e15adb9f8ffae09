//! Logging conventions.
//!
//! This crate logs through the `log` facade directly at call sites — no
//! wrapper type, no `tracing` spans. A binary embedding this crate picks
//! whichever `log` backend it wants (`env_logger`, `simple_logger`, ...);
//! the core only ever calls `log::{error,warn,info,debug}!`.
//!
//! Levels, matching the granularity the rest of the crate actually uses:
//!
//! - `error!` — never used inside the hand state machine itself (invariant
//!   violations return a typed [`crate::error::HoldemError`] instead of
//!   logging and continuing); reserved for a caller that catches one.
//! - `warn!` — recovered-but-notable conditions: an adapter's invalid
//!   action being auto-resolved, a player elimination, a dropped transport.
//! - `info!` — hand-lifecycle milestones a table operator would want in a
//!   server log: a player seated, chips awarded.
//! - `debug!` — per-pot settlement detail, useful when auditing a specific
//!   hand's payout but too noisy for normal operation.
//!
//! No `println!` anywhere in library code.
