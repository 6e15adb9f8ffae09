//! Engine-wide constants.

/// Hard ceiling on seats at a single table. Seat indices are always `< MAX_PLAYERS`.
pub const MAX_PLAYERS: usize = 10;

/// Fewest occupied seats a hand can be dealt with.
pub const MIN_PLAYERS: usize = 2;

/// A standard deck has exactly this many cards.
pub const DECK_SIZE: usize = 52;

/// Whether the engine burns a card before the flop, turn, and river.
///
/// The rigged-deck builder ([`crate::cards::rigged_alternating`]) is laid out
/// to match this constant exactly, per spec: whichever way this is set, the
/// flat card order a rigged deck yields must agree with it.
pub const BURNS_ENABLED: bool = true;

/// Number of hole cards dealt to each player.
pub const HOLE_CARDS_PER_PLAYER: usize = 2;

/// Number of times an invalid action from an adapter is re-requested (with
/// diagnostics) before the driver auto-resolves it (§7 InvalidActionError).
pub const MAX_INVALID_ACTION_RETRIES: u8 = 1;
