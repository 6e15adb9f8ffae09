//! Hand State Machine (spec §4.5): sequences a single hand from blind
//! posting through showdown or fold, dealing each street, driving the
//! betting round for it, and finalizing chip movement in the order the
//! terminal-event contract requires.

use std::collections::HashMap;

use crate::betting::BettingRoundDriver;
use crate::cards::Deck;
use crate::entities::{
    ActionKind, Card, PlayerRecord, PlayerStatus, SeatIndex, Usd, ValidAction,
};
use crate::error::{HoldemError, HoldemResult};
use crate::event::{Event, EventSink, ShowdownHand, Street};
use crate::eval::HandEvaluator;
use crate::pot::PotManager;
use crate::seating::SeatingRing;

/// Where a hand currently is in its lifecycle (spec §4.5).
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Phase {
    Waiting,
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
    Complete,
}

/// Drives exactly one hand to completion. Owns the deck, pot manager,
/// current betting round, and the pluggable evaluator for the duration of
/// the hand; the seating ring is borrowed per call (spec §5 "seating ring
/// mutated only between hands" — this is true of seat *assignment*; the
/// `PlayerRecord`s it holds still carry the per-hand transient fields this
/// state machine updates in place).
pub struct Hand {
    phase: Phase,
    board: Vec<Card>,
    button: SeatIndex,
    small_blind_seat: Option<SeatIndex>,
    big_blind_seat: SeatIndex,
    big_blind_amount: Usd,
    participants: Vec<SeatIndex>,
    pot: PotManager,
    betting: Option<BettingRoundDriver>,
    deck: Deck,
    evaluator: Box<dyn HandEvaluator>,
    settled_pot_count: usize,
}

impl Hand {
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    #[must_use]
    pub fn button(&self) -> SeatIndex {
        self.button
    }

    #[must_use]
    pub fn small_blind_seat(&self) -> Option<SeatIndex> {
        self.small_blind_seat
    }

    #[must_use]
    pub fn big_blind_seat(&self) -> SeatIndex {
        self.big_blind_seat
    }

    #[must_use]
    pub fn participants(&self) -> &[SeatIndex] {
        &self.participants
    }

    pub fn pot(&self) -> &PotManager {
        &self.pot
    }

    /// Seat currently awaiting an action, if the hand is mid-betting-round.
    #[must_use]
    pub fn to_act(&self) -> Option<SeatIndex> {
        self.betting.as_ref().map(|b| b.to_act)
    }

    #[must_use]
    pub fn legal_actions(&self, ring: &SeatingRing, seat: SeatIndex) -> Vec<ValidAction> {
        let Some(betting) = &self.betting else {
            return Vec::new();
        };
        let Some(player) = ring.get(seat) else {
            return Vec::new();
        };
        betting.legal_actions(seat, player.street_bet, player.chips)
    }

    /// WAITING → PRE_FLOP (spec §4.5): lock seating, resolve blinds, post
    /// them, deal hole cards, and open the pre-flop betting round.
    pub fn start(
        ring: &mut SeatingRing,
        small_blind: Usd,
        big_blind: Usd,
        initial_button: Option<SeatIndex>,
        mut deck: Deck,
        evaluator: Box<dyn HandEvaluator>,
        sink: &mut dyn EventSink,
    ) -> HoldemResult<Self> {
        let occupied = ring.occupied_count();
        if occupied < 2 {
            return Err(HoldemError::NotEnoughPlayers {
                needed: 2,
                have: occupied,
            });
        }

        for seat in ring.occupied_seats() {
            if let Some(player) = ring.get_mut(seat) {
                player.reset_for_new_hand();
                if player.status == PlayerStatus::Waiting {
                    player.status = PlayerStatus::Active;
                }
            }
        }

        let assignment = ring.resolve_blinds(initial_button);
        let mut pot = PotManager::new();

        sink.emit(Event::HandStarted {
            dealer_button: assignment.button,
            players: ring
                .occupied_seats()
                .into_iter()
                .filter_map(|s| ring.get(s).map(|p| p.id))
                .collect(),
        });

        if let Some(sb_seat) = assignment.small_blind {
            post_blind(ring, &mut pot, sb_seat, small_blind, sink);
        }
        post_blind(ring, &mut pot, assignment.big_blind, big_blind, sink);

        let participants = occupied_order_from(ring, assignment.button)
            .into_iter()
            .filter(|&s| ring.get(s).is_some_and(|p| p.status != PlayerStatus::SittingOut))
            .collect::<Vec<_>>();

        let hands = deck.draw_hole_cards(participants.len())?;
        for (&seat, hole) in participants.iter().zip(hands.into_iter()) {
            let player = ring.get_mut(seat).expect("participant seat occupied");
            player.hole_cards = Some(hole);
            sink.emit(Event::CardsDealt {
                player_id: player.id,
                card_count: hole.len(),
            });
        }

        let current_bet = ring
            .get(assignment.big_blind)
            .map(|p| p.street_bet)
            .unwrap_or(big_blind);
        let to_act = next_seat_matching(ring, assignment.big_blind, is_active)
            .unwrap_or(assignment.big_blind);

        let mut hand = Self {
            phase: Phase::PreFlop,
            board: Vec::with_capacity(5),
            button: assignment.button,
            small_blind_seat: assignment.small_blind,
            big_blind_seat: assignment.big_blind,
            big_blind_amount: big_blind,
            participants,
            pot,
            betting: Some(BettingRoundDriver::new(to_act, current_bet, big_blind, big_blind)),
            deck,
            evaluator,
            settled_pot_count: 0,
        };
        hand.request_action(ring, sink);
        Ok(hand)
    }

    /// Apply a validated player action and advance the hand as far as the
    /// resulting state allows (round continuation, street transition, or
    /// hand completion). Callers are responsible for invalid-action retry
    /// policy (spec §7) before calling this with a final decision.
    pub fn apply_action(
        &mut self,
        ring: &mut SeatingRing,
        seat: SeatIndex,
        kind: ActionKind,
        amount: Option<Usd>,
        sink: &mut dyn EventSink,
    ) -> HoldemResult<()> {
        let Some(betting) = &self.betting else {
            return Err(HoldemError::NoActionPending { seat });
        };
        if betting.to_act != seat {
            return Err(HoldemError::NoActionPending { seat });
        }

        let (street_bet, chips) = {
            let player = ring
                .get(seat)
                .ok_or(HoldemError::NoActionPending { seat })?;
            (player.street_bet, player.chips)
        };
        if !betting.is_legal(seat, street_bet, chips, kind, amount) {
            return Err(HoldemError::InvalidAction {
                seat,
                attempted: kind,
                amount,
            });
        }

        let player_id = ring.get(seat).expect("checked above").id;
        match kind {
            ActionKind::Fold => {
                let player = ring.get_mut(seat).expect("checked above");
                player.status = PlayerStatus::Folded;
                player.last_action = Some(ActionKind::Fold);
                self.pot.mark_folded(player_id);
                self.betting.as_mut().unwrap().fold(seat);
            }
            ActionKind::Check => {
                let player = ring.get_mut(seat).expect("checked above");
                player.last_action = Some(ActionKind::Check);
                let total = player.street_bet;
                self.betting.as_mut().unwrap().apply_action(seat, total);
            }
            ActionKind::Call => {
                let current_bet = self.betting.as_ref().unwrap().current_bet;
                let player = ring.get_mut(seat).expect("checked above");
                let delta = current_bet - player.street_bet;
                player.chips -= delta;
                player.street_bet = current_bet;
                player.hand_contribution += delta;
                player.last_action = Some(ActionKind::Call);
                if player.chips == 0 {
                    player.status = PlayerStatus::AllIn;
                }
                self.pot.record_bet(player_id, delta);
                self.betting.as_mut().unwrap().apply_action(seat, current_bet);
            }
            ActionKind::Bet | ActionKind::Raise => {
                let new_total = amount.ok_or(HoldemError::InvalidAction {
                    seat,
                    attempted: kind,
                    amount,
                })?;
                let player = ring.get_mut(seat).expect("checked above");
                let delta = new_total - player.street_bet;
                player.chips -= delta;
                player.street_bet = new_total;
                player.hand_contribution += delta;
                player.last_action = Some(kind);
                if player.chips == 0 {
                    player.status = PlayerStatus::AllIn;
                }
                self.pot.record_bet(player_id, delta);
                self.betting.as_mut().unwrap().apply_action(seat, new_total);
            }
            ActionKind::AllIn => {
                let player = ring.get_mut(seat).expect("checked above");
                let delta = player.chips;
                let new_total = player.street_bet + delta;
                player.chips = 0;
                player.street_bet = new_total;
                player.hand_contribution += delta;
                player.status = PlayerStatus::AllIn;
                player.last_action = Some(ActionKind::AllIn);
                self.pot.record_bet(player_id, delta);
                self.betting.as_mut().unwrap().apply_action(seat, new_total);
            }
        }

        sink.emit(Event::PlayerAction {
            player_id,
            action: kind,
            amount,
        });
        sink.emit(Event::PotUpdated {
            total: self.pot.total_contributed(),
            player_bet: None,
        });

        self.advance(ring, sink)
    }

    /// Decide what happens after an action: another request, a street
    /// transition, or hand completion.
    fn advance(&mut self, ring: &mut SeatingRing, sink: &mut dyn EventSink) -> HoldemResult<()> {
        if contending_seats(ring, &self.participants).len() <= 1 {
            return self.finish_by_fold(ring, sink);
        }

        let actives = active_seats(ring, &self.participants);
        let betting = self.betting.as_ref().expect("mid-round");
        let round_over = actives.is_empty()
            || betting.is_round_over(&actives, |s| ring.get(s).map(|p| p.street_bet).unwrap_or(0));

        if round_over {
            self.advance_phase(ring, sink)
        } else {
            let current = betting.to_act;
            let next = next_seat_matching(ring, current, is_active).expect("an active seat remains");
            self.betting.as_mut().unwrap().set_to_act(next);
            self.request_action(ring, sink);
            Ok(())
        }
    }

    fn request_action(&self, ring: &SeatingRing, sink: &mut dyn EventSink) {
        let Some(betting) = &self.betting else { return };
        let Some(player) = ring.get(betting.to_act) else {
            return;
        };
        let to_call = betting.current_bet.saturating_sub(player.street_bet);
        sink.emit(Event::ActionRequested {
            player_id: player.id,
            to_call,
            min_raise: betting.min_raise,
            max_raise: player.street_bet + player.chips,
        });
    }

    /// Settle the street's pot, emitting `side-pot:created` for any newly
    /// formed pot, then move to the next phase.
    fn advance_phase(&mut self, ring: &mut SeatingRing, sink: &mut dyn EventSink) -> HoldemResult<()> {
        loop {
            self.settle_and_announce_pots(sink);
            for seat in ring.occupied_seats() {
                if let Some(player) = ring.get_mut(seat) {
                    player.reset_for_new_street();
                }
            }
            let street_name = match self.phase {
                Phase::PreFlop => Street::PreFlop,
                Phase::Flop => Street::Flop,
                Phase::Turn => Street::Turn,
                Phase::River => Street::River,
                Phase::Waiting | Phase::Showdown | Phase::Complete => {
                    return Err(HoldemError::InvariantViolation(
                        "advance_phase called outside a betting street".into(),
                    ));
                }
            };
            sink.emit(Event::RoundEnded { street: street_name });

            match self.phase {
                Phase::PreFlop => {
                    let flop = self.deck.draw_flop_three()?;
                    self.board.extend(flop);
                    self.phase = Phase::Flop;
                    sink.emit(Event::CardsCommunity {
                        street: Street::Flop,
                        cards: flop.to_vec(),
                    });
                }
                Phase::Flop => {
                    let turn = self.deck.draw_turn_one()?;
                    self.board.push(turn);
                    self.phase = Phase::Turn;
                    sink.emit(Event::CardsCommunity {
                        street: Street::Turn,
                        cards: vec![turn],
                    });
                }
                Phase::Turn => {
                    let river = self.deck.draw_river_one()?;
                    self.board.push(river);
                    self.phase = Phase::River;
                    sink.emit(Event::CardsCommunity {
                        street: Street::River,
                        cards: vec![river],
                    });
                }
                Phase::River => {
                    self.phase = Phase::Showdown;
                    self.betting = None;
                    return self.finish_showdown(ring, sink);
                }
                Phase::Waiting | Phase::Showdown | Phase::Complete => unreachable!(),
            }

            sink.emit(Event::RoundStarted {
                street: match self.phase {
                    Phase::Flop => Street::Flop,
                    Phase::Turn => Street::Turn,
                    Phase::River => Street::River,
                    _ => unreachable!(),
                },
                community_cards: self.board.clone(),
            });

            let actives = active_seats(ring, &self.participants);
            if actives.len() >= 2 {
                let to_act = next_seat_matching(ring, self.button, is_active).unwrap_or(self.button);
                self.betting = Some(BettingRoundDriver::new(
                    to_act,
                    0,
                    self.big_blind_amount,
                    self.big_blind_amount,
                ));
                self.request_action(ring, sink);
                return Ok(());
            }
            // Fewer than two players can still act (the rest are all-in or
            // folded): deal remaining streets without requesting action.
            self.betting = None;
        }
    }

    fn settle_and_announce_pots(&mut self, sink: &mut dyn EventSink) {
        let pots = self.pot.settle_street().to_vec();
        for (idx, pot) in pots.iter().enumerate().skip(self.settled_pot_count) {
            sink.emit(Event::SidePotCreated {
                pot_index: idx,
                amount: pot.amount,
                eligible_players: pot.eligible_players.clone(),
            });
        }
        self.settled_pot_count = pots.len();
    }

    /// Hand-over-by-fold (spec §4.5): exactly one non-folded player remains;
    /// they win every pot they're eligible for. No showdown reveal.
    fn finish_by_fold(&mut self, ring: &mut SeatingRing, sink: &mut dyn EventSink) -> HoldemResult<()> {
        self.betting = None;
        self.settle_and_announce_pots(sink);
        let payouts = self.pot.award_sole_eligible();
        self.finish_hand(ring, payouts, Vec::new(), Vec::new(), sink)
    }

    /// SHOWDOWN → COMPLETE (spec §4.5): evaluate every non-folded
    /// participant's best five-of-seven and pay out accordingly.
    fn finish_showdown(&mut self, ring: &mut SeatingRing, sink: &mut dyn EventSink) -> HoldemResult<()> {
        self.settle_and_announce_pots(sink);

        let contenders = contending_seats(ring, &self.participants);
        let mut evaluations = HashMap::new();
        let mut seat_of = HashMap::new();
        let mut showdown_hands = Vec::new();
        let mut showdown_participants = Vec::new();

        for &seat in &contenders {
            let player = ring.get(seat).expect("contending seat occupied");
            let hole = player.hole_cards.expect("contender has hole cards");
            let evaluated = self.evaluator.evaluate(&hole, &self.board);
            seat_of.insert(player.id, seat);
            showdown_participants.push(player.id);
            showdown_hands.push(ShowdownHand {
                player_id: player.id,
                hole_cards: hole,
                best_hand: evaluated.clone(),
            });
            evaluations.insert(player.id, evaluated);
        }

        let payouts = self
            .pot
            .calculate_payouts(&evaluations, &seat_of, self.button, ring.num_seats());
        self.finish_hand(ring, payouts, showdown_hands, showdown_participants, sink)
    }

    /// Credit chips, detect eliminations, and emit the terminal events in
    /// the hard-contracted order: `chips:awarded`* → `player:eliminated`* →
    /// `hand:ended` (spec §4.5, §6).
    fn finish_hand(
        &mut self,
        ring: &mut SeatingRing,
        payouts: Vec<crate::pot::Payout>,
        showdown_hands: Vec<ShowdownHand>,
        showdown_participants: Vec<crate::entities::PlayerId>,
        sink: &mut dyn EventSink,
    ) -> HoldemResult<()> {
        let mut totals: HashMap<crate::entities::PlayerId, Usd> = HashMap::new();
        for payout in &payouts {
            *totals.entry(payout.player).or_insert(0) += payout.amount;
        }

        let mut winners = Vec::new();
        for (&player_id, &amount) in &totals {
            let seat = ring.seat_of(player_id);
            if let Some(seat) = seat {
                if let Some(player) = ring.get_mut(seat) {
                    player.chips += amount;
                }
            }
            winners.push(player_id);
            log::info!("{player_id} awarded {amount}");
        }
        // Stable emission order: iterate in payout order rather than the
        // HashMap's, so identical runs produce identical event sequences.
        let mut emitted = std::collections::HashSet::new();
        for payout in &payouts {
            if emitted.insert(payout.player) {
                let total = ring
                    .seat_of(payout.player)
                    .and_then(|s| ring.get(s))
                    .map(|p| p.chips)
                    .unwrap_or(0);
                sink.emit(Event::ChipsAwarded {
                    player_id: payout.player,
                    amount: totals[&payout.player],
                    total,
                });
            }
        }

        for &seat in &self.participants {
            if let Some(player) = ring.get(seat) {
                if player.chips == 0 {
                    let player_id = player.id;
                    sink.emit(Event::PlayerEliminated { player_id });
                    log::warn!("{player_id} eliminated");
                }
            }
        }

        sink.emit(Event::HandEnded {
            winners,
            board: self.board.clone(),
            payouts,
            showdown_hands,
            showdown_participants,
        });

        self.phase = Phase::Complete;
        Ok(())
    }
}

fn post_blind(
    ring: &mut SeatingRing,
    pot: &mut PotManager,
    seat: SeatIndex,
    amount: Usd,
    sink: &mut dyn EventSink,
) {
    let Some(player) = ring.get_mut(seat) else {
        return;
    };
    let posted = amount.min(player.chips);
    player.chips -= posted;
    player.street_bet = posted;
    player.hand_contribution += posted;
    if player.chips == 0 {
        player.status = PlayerStatus::AllIn;
    }
    let player_id = player.id;
    pot.record_bet(player_id, posted);
    sink.emit(Event::PotUpdated {
        total: pot.total_contributed(),
        player_bet: Some((player_id, posted)),
    });
}

fn is_active(player: &PlayerRecord) -> bool {
    player.status == PlayerStatus::Active
}

fn next_seat_matching(
    ring: &SeatingRing,
    from: SeatIndex,
    pred: impl Fn(&PlayerRecord) -> bool,
) -> Option<SeatIndex> {
    let n = ring.num_seats();
    (1..=n)
        .map(|offset| (from + offset) % n)
        .find(|&seat| ring.get(seat).is_some_and(&pred))
}

fn occupied_order_from(ring: &SeatingRing, start: SeatIndex) -> Vec<SeatIndex> {
    let n = ring.num_seats();
    (1..=n)
        .map(|offset| (start + offset) % n)
        .filter(|&seat| ring.get(seat).is_some())
        .collect()
}

fn active_seats(ring: &SeatingRing, participants: &[SeatIndex]) -> Vec<SeatIndex> {
    participants
        .iter()
        .copied()
        .filter(|&s| ring.get(s).is_some_and(is_active))
        .collect()
}

fn contending_seats(ring: &SeatingRing, participants: &[SeatIndex]) -> Vec<SeatIndex> {
    participants
        .iter()
        .copied()
        .filter(|&s| ring.get(s).is_some_and(PlayerRecord::is_contending))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{PlayerId, Suit};
    use crate::eval::StandardEvaluator;
    use crate::event::VecEventSink;

    fn ring_with(stacks: &[Usd]) -> SeatingRing {
        let mut ring = SeatingRing::new(stacks.len());
        for (seat, &chips) in stacks.iter().enumerate() {
            let player = PlayerRecord::new(PlayerId::new(), format!("p{seat}"), chips);
            ring.seat_player(player);
        }
        ring
    }

    fn card(rank: u8, suit: Suit) -> Card {
        Card(rank, suit)
    }

    #[test]
    fn heads_up_sb_folds_to_bb_matches_spec_scenario_1() {
        let mut ring = ring_with(&[1000, 1000]);
        let deck = Deck::new_shuffled_with_seed(1);
        let mut sink = VecEventSink::default();
        let mut hand = Hand::start(
            &mut ring,
            10,
            20,
            Some(0),
            deck,
            Box::new(StandardEvaluator),
            &mut sink,
        )
        .unwrap();

        // Heads-up: button (seat 0) is SB and acts first pre-flop.
        let to_act = hand.to_act().unwrap();
        assert_eq!(to_act, 0);
        hand.apply_action(&mut ring, 0, ActionKind::Fold, None, &mut sink).unwrap();

        assert_eq!(hand.phase(), Phase::Complete);
        assert_eq!(ring.get(0).unwrap().chips, 990);
        assert_eq!(ring.get(1).unwrap().chips, 1010);
    }

    #[test]
    fn three_player_raise_takes_it_down_matches_spec_scenario_2() {
        let mut ring = ring_with(&[1000, 1000, 1000]);
        let deck = Deck::new_shuffled_with_seed(2);
        let mut sink = VecEventSink::default();
        let mut hand = Hand::start(
            &mut ring,
            10,
            20,
            Some(0),
            deck,
            Box::new(StandardEvaluator),
            &mut sink,
        )
        .unwrap();

        assert_eq!(hand.to_act(), Some(0));
        hand.apply_action(&mut ring, 0, ActionKind::Raise, Some(100), &mut sink).unwrap();
        hand.apply_action(&mut ring, 1, ActionKind::Fold, None, &mut sink).unwrap();
        hand.apply_action(&mut ring, 2, ActionKind::Fold, None, &mut sink).unwrap();

        assert_eq!(hand.phase(), Phase::Complete);
        assert_eq!(ring.get(0).unwrap().chips, 1030);
        assert_eq!(ring.get(1).unwrap().chips, 990);
        assert_eq!(ring.get(2).unwrap().chips, 980);
    }

    #[test]
    fn three_way_all_in_side_pot_matches_spec_scenario_3() {
        let mut ring = ring_with(&[100, 300, 1000]);
        let hole = [
            [card(14, Suit::Spade), card(14, Suit::Heart)],
            [card(13, Suit::Diamond), card(13, Suit::Heart)],
            [card(12, Suit::Club), card(12, Suit::Heart)],
        ];
        let deck = Deck::rigged_alternating(
            &hole,
            card(2, Suit::Spade),
            [card(3, Suit::Diamond), card(5, Suit::Spade), card(7, Suit::Heart)],
            card(2, Suit::Diamond),
            card(9, Suit::Heart),
            card(2, Suit::Heart),
            card(11, Suit::Club),
        );
        let mut sink = VecEventSink::default();
        // button = seat 2 so blinds land on seat 0 (SB) / seat 1 (BB),
        // matching the spec's "seat 0/1/2 stacks 100/300/1000" framing where
        // seat 2 is last to act and has the deepest stack.
        let mut hand = Hand::start(
            &mut ring,
            10,
            20,
            Some(2),
            deck,
            Box::new(StandardEvaluator),
            &mut sink,
        )
        .unwrap();

        // Pre-flop: seat 2 (UTG, no blind posted) acts first, shoves; both
        // blinds call all-in behind it.
        assert_eq!(hand.to_act(), Some(2));
        hand.apply_action(&mut ring, 2, ActionKind::AllIn, Some(1000), &mut sink).unwrap();
        hand.apply_action(&mut ring, 0, ActionKind::AllIn, Some(100), &mut sink).unwrap();
        hand.apply_action(&mut ring, 1, ActionKind::AllIn, Some(300), &mut sink).unwrap();

        assert_eq!(hand.phase(), Phase::Complete);
        assert_eq!(ring.get(0).unwrap().chips, 300);
        assert_eq!(ring.get(1).unwrap().chips, 400);
        assert_eq!(ring.get(2).unwrap().chips, 700);
    }

    #[test]
    fn dead_button_hand_posts_only_big_blind_matches_spec_scenario_6() {
        let mut ring = ring_with(&[1000, 1000, 1000, 1000]);
        let _ = ring.resolve_blinds(Some(0)); // hand 1: button 0, SB 1, BB 2
        ring.remove_player(1); // seat 1 busts during hand 1

        let deck = Deck::new_shuffled_with_seed(3);
        let mut sink = VecEventSink::default();
        let hand = Hand::start(
            &mut ring,
            10,
            20,
            None,
            deck,
            Box::new(StandardEvaluator),
            &mut sink,
        )
        .unwrap();

        assert_eq!(hand.button(), 1); // dead button: seat 1 is now empty
        assert_eq!(ring.get(3).unwrap().street_bet, 20); // BB posted on schedule
        assert_eq!(ring.get(2).unwrap().street_bet, 0); // dead SB: no blind posted
        assert_eq!(ring.get(0).unwrap().street_bet, 0);
    }
}
