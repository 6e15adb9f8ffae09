//! Betting Round Driver (spec §4.4): sequences action requests for a single
//! street, validates responses against the legal action set, enforces
//! min-raise / reopen rules, and tracks whether the round has ended.

use std::collections::HashSet;

use crate::entities::{ActionKind, SeatIndex, Usd, ValidAction};

/// Outcome of re-requesting a timed-out or invalid action (spec §7, §5):
/// both modes feed back into the same driver state transitions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RequestOutcome {
    Decided { kind: ActionKind, amount: Option<Usd> },
    TimedOut,
}

/// Drives exactly one betting round (one street). Owns `current_bet`,
/// `min_raise`, `to_act`, and `acted_set`; does not own player chip stacks
/// or fold state — the hand state machine supplies those as needed.
#[derive(Clone, Debug)]
pub struct BettingRoundDriver {
    pub current_bet: Usd,
    pub min_raise: Usd,
    pub to_act: SeatIndex,
    big_blind: Usd,
    acted_set: HashSet<SeatIndex>,
}

impl BettingRoundDriver {
    #[must_use]
    pub fn new(to_act: SeatIndex, current_bet: Usd, min_raise: Usd, big_blind: Usd) -> Self {
        Self {
            current_bet,
            min_raise,
            to_act,
            big_blind,
            acted_set: HashSet::new(),
        }
    }

    #[must_use]
    pub fn has_acted(&self, seat: SeatIndex) -> bool {
        self.acted_set.contains(&seat)
    }

    /// Whether `seat` may still raise. Cleared on every full raise; an
    /// under-minimum all-in raise leaves already-acted seats in the set, so
    /// they lose the raise option without losing call/fold (spec §4.4,
    /// "does NOT reopen the action").
    fn raise_is_open(&self, seat: SeatIndex) -> bool {
        !self.acted_set.contains(&seat)
    }

    /// Legal actions for `seat`, given its current per-street bet and
    /// remaining chips (spec §4.4 legal-action derivation).
    #[must_use]
    pub fn legal_actions(&self, seat: SeatIndex, player_bet: Usd, player_chips: Usd) -> Vec<ValidAction> {
        let to_call = self.current_bet.saturating_sub(player_bet);
        let mut actions = Vec::new();

        if to_call == 0 {
            actions.push(ValidAction::Check);
            if self.current_bet == 0 && player_chips > 0 {
                let min = self.min_raise.max(self.big_blind).min(player_chips);
                actions.push(ValidAction::Bet {
                    min,
                    max: player_chips,
                });
            } else if self.current_bet > 0 && self.raise_is_open(seat) && player_chips > 0 {
                // The big-blind option (or any player whose posted bet
                // already equals current_bet) may still raise over it.
                let min_total = (self.current_bet + self.min_raise).min(player_bet + player_chips);
                if min_total > self.current_bet {
                    actions.push(ValidAction::Raise {
                        min: min_total,
                        max: player_bet + player_chips,
                    });
                }
            }
            if player_chips > 0 {
                actions.push(ValidAction::AllIn {
                    amount: player_bet + player_chips,
                });
            }
        } else if player_chips > to_call {
            actions.push(ValidAction::Fold);
            actions.push(ValidAction::Call { amount: to_call });
            if self.raise_is_open(seat) {
                let max_total = player_bet + player_chips;
                let min_total = (self.current_bet + self.min_raise).min(max_total);
                if min_total > self.current_bet {
                    actions.push(ValidAction::Raise {
                        min: min_total,
                        max: max_total,
                    });
                }
            }
            actions.push(ValidAction::AllIn {
                amount: player_bet + player_chips,
            });
        } else {
            actions.push(ValidAction::Fold);
            actions.push(ValidAction::AllIn {
                amount: player_bet + player_chips,
            });
        }

        actions
    }

    /// Validate a proposed action against the currently legal set.
    #[must_use]
    pub fn is_legal(&self, seat: SeatIndex, player_bet: Usd, player_chips: Usd, kind: ActionKind, amount: Option<Usd>) -> bool {
        let legal = self.legal_actions(seat, player_bet, player_chips);
        legal.iter().any(|action| matches(*action, kind, amount))
    }

    /// Apply a validated action's effect on round state (spec §4.4 steps
    /// 2-4). `new_street_total` is the seat's street-bet *after* the action;
    /// for FOLD, use [`BettingRoundDriver::fold`] instead (it does not move
    /// `current_bet`). Advancing `to_act` is the caller's responsibility
    /// (step 5), since only the seating ring knows which seat is next.
    pub fn apply_action(&mut self, seat: SeatIndex, new_street_total: Usd) {
        if new_street_total > self.current_bet {
            let increment = new_street_total - self.current_bet;
            let is_full_raise = increment >= self.min_raise;
            self.current_bet = new_street_total;
            if is_full_raise {
                self.min_raise = increment;
                self.acted_set.clear();
            }
        }
        self.acted_set.insert(seat);
    }

    pub fn fold(&mut self, seat: SeatIndex) {
        self.acted_set.insert(seat);
    }

    pub fn set_to_act(&mut self, seat: SeatIndex) {
        self.to_act = seat;
    }

    /// Round-termination check for the "every ACTIVE player has matched"
    /// case (spec §4.4). `active_seats` must already exclude FOLDED and
    /// ALL_IN players; `street_bet` returns a seat's current-street bet.
    #[must_use]
    pub fn is_round_over(&self, active_seats: &[SeatIndex], street_bet: impl Fn(SeatIndex) -> Usd) -> bool {
        active_seats
            .iter()
            .all(|&seat| self.acted_set.contains(&seat) && street_bet(seat) == self.current_bet)
    }
}

fn matches(legal: ValidAction, kind: ActionKind, amount: Option<Usd>) -> bool {
    match (legal, kind) {
        (ValidAction::Fold, ActionKind::Fold) => true,
        (ValidAction::Check, ActionKind::Check) => true,
        (ValidAction::Call { amount: call_amt }, ActionKind::Call) => amount == Some(call_amt) || amount.is_none(),
        (ValidAction::Bet { min, max }, ActionKind::Bet) => {
            amount.is_some_and(|a| a >= min && a <= max)
        }
        (ValidAction::Raise { min, max }, ActionKind::Raise) => {
            amount.is_some_and(|a| a >= min && a <= max)
        }
        (ValidAction::AllIn { amount: all_in_amt }, ActionKind::AllIn) => {
            amount == Some(all_in_amt) || amount.is_none()
        }
        _ => false,
    }
}
