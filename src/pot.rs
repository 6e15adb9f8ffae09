//! Pot Manager (spec §4.3): partitions a hand's wagers into main and side
//! pots with correct eligibility, and computes showdown payouts.

use std::collections::{HashMap, HashSet};

use crate::entities::{PlayerId, SeatIndex, Usd};
use crate::eval::EvaluatedHand;

/// A single pot: an amount, the per-player contribution level it closed at,
/// and the non-folded players who contributed at least that level.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pot {
    pub amount: Usd,
    pub cap: Usd,
    pub eligible_players: Vec<PlayerId>,
}

/// One payout line: `(player, pot_index, amount)` per spec §4.3.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Payout {
    pub player: PlayerId,
    pub pot_index: usize,
    pub amount: Usd,
}

#[derive(Clone, Debug, Default)]
pub struct PotManager {
    contributions: HashMap<PlayerId, Usd>,
    folded: HashSet<PlayerId>,
    pots: Vec<Pot>,
}

impl PotManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a chip movement from `player` into the pot. Debiting the
    /// player's chip stack is the caller's responsibility (the betting
    /// driver); this is the single place cumulative contribution is tracked.
    pub fn record_bet(&mut self, player: PlayerId, amount: Usd) {
        *self.contributions.entry(player).or_insert(0) += amount;
    }

    pub fn mark_folded(&mut self, player: PlayerId) {
        self.folded.insert(player);
    }

    #[must_use]
    pub fn cumulative_contribution(&self, player: PlayerId) -> Usd {
        self.contributions.get(&player).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total_contributed(&self) -> Usd {
        self.contributions.values().sum()
    }

    #[must_use]
    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }

    /// Recompute the full pot partition from cumulative contributions and
    /// current fold state (spec §4.3 protocol). Levels are the distinct
    /// cumulative contributions among still-contending (non-folded)
    /// players. Every player's money (folded included) is distributed into
    /// bands by clamping their contribution to each band's range, so a
    /// folded short stack's contribution lands entirely in the lowest pot
    /// it reaches rather than being dropped when it falls short of the
    /// lowest non-folded level (spec §8 "folded short-stack contribution
    /// remains in the lowest pot; is not refunded").
    pub fn settle_street(&mut self) -> &[Pot] {
        let mut levels: Vec<Usd> = self
            .contributions
            .iter()
            .filter(|(player, amount)| **amount > 0 && !self.folded.contains(player))
            .map(|(_, amount)| *amount)
            .collect();
        levels.sort_unstable();
        levels.dedup();

        let mut pots = Vec::with_capacity(levels.len());
        let mut previous: Usd = 0;
        for level in levels {
            let amount: Usd = self
                .contributions
                .values()
                .map(|&contributed| contributed.min(level) - contributed.min(previous))
                .sum();
            let eligible_players: Vec<PlayerId> = self
                .contributions
                .iter()
                .filter(|(player, amount)| **amount >= level && !self.folded.contains(player))
                .map(|(player, _)| *player)
                .collect();
            log::debug!(
                "settled pot at cap={level} amount={amount} eligible={}",
                eligible_players.len()
            );
            pots.push(Pot {
                amount,
                cap: level,
                eligible_players,
            });
            previous = level;
        }
        self.pots = pots;
        &self.pots
    }

    /// Award every pot to its sole eligible player (spec §4.5 "hand-over-by-fold").
    /// Each pot produced by the final `settle_street()` call in this situation
    /// has exactly one eligible player, since only one non-folded player remains.
    #[must_use]
    pub fn award_sole_eligible(&self) -> Vec<Payout> {
        self.pots
            .iter()
            .enumerate()
            .filter_map(|(idx, pot)| {
                pot.eligible_players.first().map(|player| Payout {
                    player: *player,
                    pot_index: idx,
                    amount: pot.amount,
                })
            })
            .collect()
    }

    /// Distribute each pot, in creation order, to its best-ranked eligible
    /// participant(s). Ties split as evenly as possible; the odd-chip
    /// remainder goes one chip at a time starting from the first seat left
    /// of the button among the tied winners (Open Question 2, resolved).
    #[must_use]
    pub fn calculate_payouts(
        &self,
        evaluations: &HashMap<PlayerId, EvaluatedHand>,
        seat_of: &HashMap<PlayerId, SeatIndex>,
        button_seat: SeatIndex,
        num_seats: usize,
    ) -> Vec<Payout> {
        let mut payouts = Vec::new();
        for (idx, pot) in self.pots.iter().enumerate() {
            let best = pot
                .eligible_players
                .iter()
                .filter_map(|p| evaluations.get(p))
                .max();
            let Some(best) = best else {
                continue;
            };

            let mut winners: Vec<PlayerId> = pot
                .eligible_players
                .iter()
                .filter(|p| evaluations.get(p) == Some(best))
                .copied()
                .collect();

            winners.sort_by_key(|player| {
                let seat = seat_of.get(player).copied().unwrap_or(0);
                (seat + num_seats - (button_seat + 1) % num_seats) % num_seats
            });

            let share_count = winners.len() as Usd;
            let share = pot.amount / share_count;
            let remainder = pot.amount % share_count;
            for (rank, player) in winners.into_iter().enumerate() {
                let extra = if (rank as Usd) < remainder { 1 } else { 0 };
                payouts.push(Payout {
                    player,
                    pot_index: idx,
                    amount: share + extra,
                });
            }
        }
        payouts
    }
}
