//! Seating & Button Manager (spec §4.6): the seating ring, button rotation,
//! and blind-position rules, including tournament dead-button handling.

use crate::entities::{PlayerId, PlayerRecord, SeatIndex};

/// The blind positions resolved for an upcoming hand. `small_blind` is
/// `None` for a "dead SB" hand; `button` may point at an empty seat for a
/// "dead button" hand (spec §4.6).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BlindAssignment {
    pub button: SeatIndex,
    pub small_blind: Option<SeatIndex>,
    pub big_blind: SeatIndex,
}

/// The circular seating arrangement. Represented as an indexed sequence
/// with modular arithmetic for rotation rather than a linked structure
/// (spec §9 design note).
#[derive(Clone, Debug, Default)]
pub struct SeatingRing {
    seats: Vec<Option<PlayerRecord>>,
    last_button_seat: Option<SeatIndex>,
    last_bb_seat: Option<SeatIndex>,
    last_small_blind_seat: Option<SeatIndex>,
}

impl SeatingRing {
    #[must_use]
    pub fn new(num_seats: usize) -> Self {
        Self {
            seats: vec![None; num_seats],
            last_button_seat: None,
            last_bb_seat: None,
            last_small_blind_seat: None,
        }
    }

    #[must_use]
    pub fn num_seats(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn get(&self, seat: SeatIndex) -> Option<&PlayerRecord> {
        self.seats.get(seat).and_then(|s| s.as_ref())
    }

    #[must_use]
    pub fn get_mut(&mut self, seat: SeatIndex) -> Option<&mut PlayerRecord> {
        self.seats.get_mut(seat).and_then(|s| s.as_mut())
    }

    #[must_use]
    pub fn occupied_seats(&self) -> Vec<SeatIndex> {
        self.seats
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|_| i))
            .collect()
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_some()).count()
    }

    #[must_use]
    pub fn seat_of(&self, player: PlayerId) -> Option<SeatIndex> {
        self.seats
            .iter()
            .position(|s| s.as_ref().is_some_and(|p| p.id == player))
    }

    /// Seat a player at the lowest-numbered empty seat. Returns the seat
    /// index, or `None` if no seats are free.
    pub fn seat_player(&mut self, player: PlayerRecord) -> Option<SeatIndex> {
        let empty = self.seats.iter().position(Option::is_none)?;
        self.seats[empty] = Some(player);
        Some(empty)
    }

    pub fn remove_player(&mut self, seat: SeatIndex) -> Option<PlayerRecord> {
        self.seats.get_mut(seat).and_then(Option::take)
    }

    fn next_occupied_clockwise(&self, from: SeatIndex) -> Option<SeatIndex> {
        let n = self.seats.len();
        if n == 0 {
            return None;
        }
        (1..=n)
            .map(|offset| (from + offset) % n)
            .find(|&seat| self.seats[seat].is_some())
    }

    fn next_occupied_counterclockwise(&self, from: SeatIndex) -> Option<SeatIndex> {
        let n = self.seats.len();
        if n == 0 {
            return None;
        }
        (1..=n)
            .map(|offset| (from + n - offset) % n)
            .find(|&seat| self.seats[seat].is_some())
    }

    /// One raw seat counter-clockwise, occupied or not — used to derive the
    /// button from SB, which may land on an empty seat ("dead button").
    fn raw_prev_seat(&self, from: SeatIndex) -> SeatIndex {
        let n = self.seats.len();
        (from + n - 1) % n
    }

    /// Resolve button/SB/BB for the next hand (spec §4.6). `initial_button`
    /// seeds the very first hand (`TableConfig::initial_button`); every hand
    /// after that derives its button from the table's own history, which
    /// this method tracks internally.
    pub fn resolve_blinds(&mut self, initial_button: Option<SeatIndex>) -> BlindAssignment {
        let occupied = self.occupied_count();
        debug_assert!(occupied >= 2, "resolve_blinds requires >= 2 occupied seats");

        let assignment = if occupied == 2 {
            self.resolve_heads_up(initial_button)
        } else {
            self.resolve_rotated(initial_button)
        };

        self.last_button_seat = Some(assignment.button);
        self.last_bb_seat = Some(assignment.big_blind);
        self.last_small_blind_seat = assignment.small_blind;
        assignment
    }

    /// Heads-up button alternates between the two players every hand: the
    /// seat that was BB moves to button and vice versa.
    fn resolve_heads_up(&self, initial_button: Option<SeatIndex>) -> BlindAssignment {
        let occupied = self.occupied_seats();
        debug_assert_eq!(occupied.len(), 2);
        let button = match self.last_button_seat {
            Some(prev) if occupied.contains(&prev) => {
                occupied.iter().copied().find(|&s| s != prev).unwrap_or(prev)
            }
            _ => initial_button
                .filter(|b| occupied.contains(b))
                .unwrap_or(occupied[0]),
        };
        let other = occupied.into_iter().find(|&s| s != button).unwrap_or(button);
        BlindAssignment {
            button,
            small_blind: Some(button),
            big_blind: other,
        }
    }

    /// BB anchors on `last_bb_seat` and always moves forward exactly one
    /// occupied seat each hand (spec §4.6: "BB MUST move forward one
    /// occupied seat each hand"). SB and button are then *derived backward*
    /// from the new BB, not forward from the button pointer — deriving
    /// forward from the button can skip a live BB entirely once a seat
    /// between the old button and old BB busts.
    ///
    /// SB is dead (posts nothing) in two disjoint cases, both from spec
    /// §4.6: the seat counter-clockwise of BB also sat BB last hand (a
    /// vacated seat let BB "catch up" to the old SB position), or it sat SB
    /// last hand (no player posts small blind two hands running). Button is
    /// whichever raw seat sits counter-clockwise of SB, occupied or not.
    fn resolve_rotated(&self, initial_button: Option<SeatIndex>) -> BlindAssignment {
        let Some(last_bb) = self.last_bb_seat else {
            // First hand for this ring: seed the button and derive forward.
            let button = initial_button.unwrap_or_else(|| self.occupied_seats()[0]);
            let sb_candidate = self.next_occupied_clockwise(button).unwrap_or(button);
            let big_blind = self
                .next_occupied_clockwise(sb_candidate)
                .unwrap_or(sb_candidate);
            return BlindAssignment {
                button,
                small_blind: Some(sb_candidate),
                big_blind,
            };
        };

        let big_blind = self.next_occupied_clockwise(last_bb).unwrap_or(last_bb);
        let sb_candidate = self
            .next_occupied_counterclockwise(big_blind)
            .unwrap_or(big_blind);
        let button = self.raw_prev_seat(sb_candidate);
        let button_is_dead = self.seats[button].is_none();

        let sb_dead = (button_is_dead && self.last_bb_seat == Some(sb_candidate))
            || self.last_small_blind_seat == Some(sb_candidate);
        let small_blind = if sb_dead { None } else { Some(sb_candidate) };

        BlindAssignment {
            button,
            small_blind,
            big_blind,
        }
    }
}
