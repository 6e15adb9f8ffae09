//! Game Orchestrator (spec §4.7): the public-facing object that seats
//! players, starts and drives hands to completion, emits the event stream,
//! and exposes the deterministic simulation entry point. Everything below
//! this module (hand, betting, pot, seating) is driven from here; nothing
//! above it (network transport, lobby/matchmaking) is in scope (spec §1).

use std::collections::HashMap;

use crate::cards::Deck;
use crate::constants::MAX_INVALID_ACTION_RETRIES;
use crate::entities::{ActionKind, PlayerId, PlayerRecord, SeatIndex, TableConfig, Usd};
use crate::error::{HoldemError, HoldemResult, StartOutcome};
use crate::event::{Event, EventSink, VecEventSink};
use crate::eval::{HandEvaluator, StandardEvaluator};
use crate::hand::Hand;
use crate::player::{GameStateSnapshot, PlayerAdapter, PlayerSnapshot};
use crate::seating::SeatingRing;

/// Wraps a caller's [`EventSink`] so every emitted event also reaches each
/// seated adapter's [`PlayerAdapter::receive_event`] (spec §4.8: adapters
/// observe the public event stream, not just their own turn to act).
struct FanoutSink<'a> {
    inner: &'a mut dyn EventSink,
    adapters: &'a mut HashMap<PlayerId, Box<dyn PlayerAdapter>>,
}

impl EventSink for FanoutSink<'_> {
    fn emit(&mut self, event: Event) {
        for adapter in self.adapters.values_mut() {
            adapter.receive_event(&event);
        }
        self.inner.emit(event);
    }
}

/// Runs one `Hand::apply_action` call through a [`FanoutSink`] so the
/// resulting events reach every adapter, not just the observer sink.
fn apply_action_with_fanout(
    hand: &mut Hand,
    ring: &mut SeatingRing,
    seat: SeatIndex,
    kind: ActionKind,
    amount: Option<Usd>,
    sink: &mut dyn EventSink,
    adapters: &mut HashMap<PlayerId, Box<dyn PlayerAdapter>>,
) -> HoldemResult<()> {
    let mut fanout = FanoutSink { inner: sink, adapters };
    hand.apply_action(ring, seat, kind, amount, &mut fanout)
}

/// A table: seating, configuration, the adapters occupying each seat, and
/// the hand currently in progress (if any). Owns the single `EventSink`
/// every hand emits into (spec §9 "single emitter per table").
pub struct Table {
    config: TableConfig,
    ring: SeatingRing,
    adapters: HashMap<PlayerId, Box<dyn PlayerAdapter>>,
    game_number: u64,
    current_hand: Option<Hand>,
}

impl Table {
    /// Build a table from a validated configuration (spec §7 `ConfigurationError`).
    pub fn new(config: TableConfig) -> HoldemResult<Self> {
        config.validate()?;
        Ok(Self {
            ring: SeatingRing::new(config.max_players),
            config,
            adapters: HashMap::new(),
            game_number: 0,
            current_hand: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Seat a new player with an initial buy-in, clamped to the table's
    /// buy-in bounds (spec §3 `TableConfig.min_buy_in`/`max_buy_in`). The
    /// adapter is built from the assigned [`PlayerId`] so its own notion of
    /// "who am I" always matches the seated record.
    pub fn add_player(
        &mut self,
        display_name: impl Into<String>,
        buy_in: Usd,
        make_adapter: impl FnOnce(PlayerId) -> Box<dyn PlayerAdapter>,
    ) -> HoldemResult<PlayerId> {
        let buy_in = buy_in.clamp(self.config.min_buy_in, self.config.max_buy_in);
        let id = PlayerId::new();
        let player = PlayerRecord::new(id, display_name, buy_in);
        let seat = self
            .ring
            .seat_player(player)
            .ok_or(HoldemError::SeatCapacityViolation {
                capacity: self.config.max_players,
                min_players: self.config.min_players,
            })?;
        self.adapters.insert(id, make_adapter(id));
        log::info!("player {id} seated at {seat} with {buy_in} chips");
        Ok(id)
    }

    /// Remove a player between hands, returning their remaining chip stack
    /// (the cash-out half of spec §4.7's buy-in/cash-out operation). Refuses
    /// while a hand is in progress: per spec §5, the seating ring is only
    /// mutated between hands.
    pub fn remove_player(&mut self, player_id: PlayerId) -> HoldemResult<Usd> {
        if self.current_hand.is_some() {
            return Err(HoldemError::InvariantViolation(
                "cannot remove a player mid-hand".into(),
            ));
        }
        let seat = self
            .ring
            .seat_of(player_id)
            .ok_or(HoldemError::InvariantViolation(format!(
                "player {player_id} not seated"
            )))?;
        let record = self
            .ring
            .remove_player(seat)
            .ok_or(HoldemError::InvariantViolation(format!(
                "seat {seat} unexpectedly empty"
            )))?;
        self.adapters.remove(&player_id);
        Ok(record.chips)
    }

    /// Add chips to a seated player's stack between hands (the buy-in half).
    pub fn add_chips(&mut self, player_id: PlayerId, amount: Usd) -> HoldemResult<()> {
        let seat = self
            .ring
            .seat_of(player_id)
            .ok_or(HoldemError::InvariantViolation(format!(
                "player {player_id} not seated"
            )))?;
        let player = self
            .ring
            .get_mut(seat)
            .expect("seat_of returned an occupied seat");
        player.chips += amount;
        Ok(())
    }

    /// Validate that a hand can start without mutating any state (spec §7
    /// "failures never mutate chip balances").
    pub fn try_start_hand(&self) -> StartOutcome {
        let occupied = self.ring.occupied_count();
        if occupied < self.config.min_players {
            return StartOutcome::failed("not enough players").with_details(format!(
                "need {}, have {occupied}",
                self.config.min_players
            ));
        }
        let eligible = self
            .ring
            .occupied_seats()
            .into_iter()
            .filter(|&s| self.ring.get(s).is_some_and(|p| p.chips > 0))
            .count();
        if eligible < 2 {
            return StartOutcome::failed("fewer than two players hold chips");
        }
        StartOutcome::ok()
    }

    /// Build a fresh evaluator and deck for the next hand. Broken out so
    /// tests can substitute a rigged deck via [`Table::start_hand_with_deck`].
    fn default_deck(&self) -> Deck {
        Deck::new_shuffled(None)
    }

    fn default_evaluator(&self) -> Box<dyn HandEvaluator> {
        Box::new(StandardEvaluator)
    }

    /// Start a new hand using a fresh shuffled deck (spec §4.5 WAITING → PRE_FLOP).
    pub fn start_hand(&mut self, sink: &mut dyn EventSink) -> HoldemResult<()> {
        let deck = self.default_deck();
        let evaluator = self.default_evaluator();
        self.start_hand_with_deck(deck, evaluator, sink)
    }

    /// Start a new hand with an explicit deck/evaluator, for rigged-deck
    /// tests and simulation-mode determinism.
    pub fn start_hand_with_deck(
        &mut self,
        deck: Deck,
        evaluator: Box<dyn HandEvaluator>,
        sink: &mut dyn EventSink,
    ) -> HoldemResult<()> {
        if self.current_hand.is_some() {
            return Err(HoldemError::InvariantViolation(
                "a hand is already in progress".into(),
            ));
        }
        let occupied = self.ring.occupied_count();
        if occupied < self.config.min_players {
            return Err(HoldemError::NotEnoughPlayers {
                needed: self.config.min_players,
                have: occupied,
            });
        }
        self.game_number += 1;
        if self.game_number == 1 {
            let players = self
                .ring
                .occupied_seats()
                .into_iter()
                .filter_map(|s| self.ring.get(s).map(|p| p.id))
                .collect();
            FanoutSink {
                inner: &mut *sink,
                adapters: &mut self.adapters,
            }
            .emit(Event::GameStarted {
                game_number: self.game_number,
                players,
            });
        }
        let hand = Hand::start(
            &mut self.ring,
            self.config.small_blind,
            self.config.big_blind,
            self.config.initial_button,
            deck,
            evaluator,
            &mut FanoutSink {
                inner: &mut *sink,
                adapters: &mut self.adapters,
            },
        )?;

        // `Event::CardsDealt` carries only a count, not the cards themselves,
        // so private cards are delivered directly from the ring rather than
        // through the event stream.
        for &seat in hand.participants() {
            if let Some(player) = self.ring.get(seat) {
                if let Some(hole) = player.hole_cards {
                    if let Some(adapter) = self.adapters.get_mut(&player.id) {
                        adapter.receive_private_cards(&hole);
                    }
                }
            }
        }
        self.current_hand = Some(hand);
        Ok(())
    }

    /// Build the adapter-facing snapshot for the seat currently to act.
    fn snapshot(&self, hand: &Hand) -> Option<GameStateSnapshot> {
        let to_act = hand.to_act()?;
        let mut players = HashMap::new();
        for &seat in hand.participants() {
            if let Some(player) = self.ring.get(seat) {
                players.insert(
                    player.id,
                    PlayerSnapshot {
                        chips: player.chips,
                        bet: player.street_bet,
                        total_bet: player.hand_contribution,
                        status: player.status,
                        last_action: player.last_action,
                    },
                );
            }
        }
        let to_act_player = self.ring.get(to_act)?;
        let valid_actions = hand.legal_actions(&self.ring, to_act);
        let to_call = valid_actions
            .iter()
            .find_map(|a| match a {
                crate::entities::ValidAction::Call { amount } => Some(*amount),
                _ => None,
            })
            .unwrap_or(0);
        let (min_raise, max_raise) = valid_actions
            .iter()
            .find_map(|a| match a {
                crate::entities::ValidAction::Raise { min, max } => Some((*min, *max)),
                crate::entities::ValidAction::Bet { min, max } => Some((*min, *max)),
                _ => None,
            })
            .unwrap_or((0, 0));

        Some(GameStateSnapshot {
            phase: hand.phase(),
            pot: hand.pot().total_contributed(),
            current_bet: to_act_player.street_bet,
            community_cards: hand.board().to_vec(),
            players,
            to_act: Some(to_act_player.id),
            valid_actions,
            to_call,
            min_raise,
            max_raise,
            dealer_button: hand.button(),
        })
    }

    /// Drive the in-progress hand to completion, pulling a decision from
    /// each to-act seat's adapter in turn (spec §4.7 data flow). Applies the
    /// invalid-action retry policy of spec §7: re-request once with
    /// diagnostics, then auto-FOLD-if-facing-bet / auto-CHECK-otherwise.
    pub async fn play_hand(&mut self, sink: &mut dyn EventSink) -> HoldemResult<()> {
        loop {
            let Some(hand) = self.current_hand.as_ref() else {
                return Ok(());
            };
            if hand.phase() == crate::hand::Phase::Complete {
                break;
            }
            let Some(snapshot) = self.snapshot(hand) else {
                // Between streets with no action pending: nothing to drive
                // here, the hand machine already advanced past this point
                // internally. This only happens if a caller inspects state
                // mid-deal, so just wait for the next external call.
                break;
            };
            let to_act_seat = hand.to_act().expect("snapshot implies to_act");
            let player_id = snapshot.to_act.expect("snapshot implies to_act");

            let mut retries = 0u8;
            loop {
                let adapter = self
                    .adapters
                    .get_mut(&player_id)
                    .ok_or(HoldemError::InvariantViolation(format!(
                        "no adapter registered for {player_id}"
                    )))?;
                let action = adapter.act(&snapshot).await;
                let hand = self.current_hand.as_mut().expect("checked above");
                match apply_action_with_fanout(
                    hand,
                    &mut self.ring,
                    to_act_seat,
                    action.kind,
                    action.amount,
                    sink,
                    &mut self.adapters,
                ) {
                    Ok(()) => break,
                    Err(HoldemError::InvalidAction { .. }) if retries < MAX_INVALID_ACTION_RETRIES => {
                        retries += 1;
                        log::warn!(
                            "player {player_id} sent an invalid action, re-requesting (attempt {retries})"
                        );
                        continue;
                    }
                    Err(HoldemError::InvalidAction { .. }) => {
                        let fallback = if snapshot.to_call > 0 {
                            ActionKind::Fold
                        } else {
                            ActionKind::Check
                        };
                        log::warn!(
                            "player {player_id} exhausted retries, auto-resolving to {fallback}"
                        );
                        apply_action_with_fanout(
                            hand,
                            &mut self.ring,
                            to_act_seat,
                            fallback,
                            None,
                            sink,
                            &mut self.adapters,
                        )?;
                        break;
                    }
                    Err(err) => return Err(err),
                }
            }
        }
        self.current_hand = None;
        Ok(())
    }

    /// Synchronous "run hand to completion" entry point for simulation mode
    /// (spec §5). Adapters used in this mode must resolve `act` without
    /// suspending; a minimal single-threaded runtime drives the otherwise
    /// async [`PlayerAdapter::act`] calls to completion inline.
    pub fn play_hand_sync(&mut self, sink: &mut dyn EventSink) -> HoldemResult<()> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .map_err(|e| HoldemError::InvariantViolation(e.to_string()))?;
        runtime.block_on(self.play_hand(sink))
    }

    #[must_use]
    pub fn ring(&self) -> &SeatingRing {
        &self.ring
    }
}

/// Aggregate results of a bulk-simulation run (spec §6 `run_simulations`).
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct SimulationStats {
    pub total_simulations: u64,
    pub successful_simulations: u64,
    pub success_rate: f64,
    pub average_pot: f64,
    pub player_wins: HashMap<PlayerId, u64>,
}

/// Run `count` hands back to back in simulation mode, collecting aggregate
/// statistics (spec §6 bulk-simulation entry point). Each hand's outcome is
/// independent; a hand that fails to start (not enough chip-holding players)
/// stops the run early rather than spinning forever.
pub fn run_simulations(table: &mut Table, count: u64) -> SimulationStats {
    let mut stats = SimulationStats::default();
    for _ in 0..count {
        let outcome = table.try_start_hand();
        if !outcome.success {
            log::info!("simulation run stopped early: {:?}", outcome.reason);
            break;
        }
        stats.total_simulations += 1;
        let mut sink = VecEventSink::default();
        if table.start_hand(&mut sink).is_err() {
            continue;
        }
        if table.play_hand_sync(&mut sink).is_err() {
            continue;
        }
        stats.successful_simulations += 1;

        let mut pot_total: Usd = 0;
        for event in &sink.0 {
            match event {
                Event::HandEnded { payouts, .. } => {
                    for payout in payouts {
                        pot_total += payout.amount;
                        *stats.player_wins.entry(payout.player).or_insert(0) += 1;
                    }
                }
                _ => {}
            }
        }
        let n = stats.successful_simulations as f64;
        stats.average_pot += (pot_total as f64 - stats.average_pot) / n;
    }
    stats.success_rate = if stats.total_simulations > 0 {
        stats.successful_simulations as f64 / stats.total_simulations as f64
    } else {
        0.0
    };
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::ScriptedAdapter;

    fn table_with_two_players(sb_script: Vec<(ActionKind, Option<Usd>)>, bb_script: Vec<(ActionKind, Option<Usd>)>) -> (Table, PlayerId, PlayerId) {
        let config = TableConfig {
            small_blind: 10,
            big_blind: 20,
            min_buy_in: 1000,
            max_buy_in: 1000,
            min_players: 2,
            max_players: 6,
            initial_button: Some(0),
            simulation_mode: true,
        };
        let mut table = Table::new(config).expect("valid config");
        let sb = table
            .add_player("sb", 1000, |id| Box::new(ScriptedAdapter::new(id, sb_script)))
            .expect("seat sb");
        let bb = table
            .add_player("bb", 1000, |id| Box::new(ScriptedAdapter::new(id, bb_script)))
            .expect("seat bb");
        (table, sb, bb)
    }

    #[test]
    fn try_start_hand_fails_with_too_few_chip_holders() {
        let config = TableConfig::default();
        let table = Table::new(config).expect("valid config");
        let outcome = table.try_start_hand();
        assert!(!outcome.success);
    }

    #[test]
    fn heads_up_hand_runs_to_completion_via_scripted_adapters() {
        let (mut table, sb, bb) = table_with_two_players(
            vec![(ActionKind::Fold, None)],
            vec![],
        );
        let outcome = table.try_start_hand();
        assert!(outcome.success);
        let mut sink = VecEventSink::default();
        table.start_hand(&mut sink).expect("hand starts");
        table.play_hand_sync(&mut sink).expect("hand completes");

        assert!(matches!(sink.0.last(), Some(Event::HandEnded { .. })));
        let sb_chips = table.ring().get(table.ring().seat_of(sb).unwrap()).unwrap().chips;
        let bb_chips = table.ring().get(table.ring().seat_of(bb).unwrap()).unwrap().chips;
        assert_eq!(sb_chips, 990);
        assert_eq!(bb_chips, 1010);
    }

    #[test]
    fn remove_player_returns_remaining_stack_and_frees_the_seat() {
        let (mut table, sb, _bb) = table_with_two_players(vec![], vec![]);
        table.add_chips(sb, 500).expect("buy more chips");
        let cashed_out = table.remove_player(sb).expect("cash out between hands");
        assert_eq!(cashed_out, 1500);
        assert!(table.ring().seat_of(sb).is_none());
    }

    #[test]
    fn remove_player_is_refused_mid_hand() {
        let (mut table, sb, _bb) = table_with_two_players(vec![(ActionKind::Fold, None)], vec![]);
        let mut sink = VecEventSink::default();
        table.start_hand(&mut sink).expect("hand starts");
        assert!(table.remove_player(sb).is_err());
    }

    #[test]
    fn run_simulations_reports_aggregate_stats() {
        let (mut table, _sb, _bb) = table_with_two_players(
            vec![(ActionKind::Fold, None)],
            vec![],
        );
        // Folding SB every hand eventually drains them; bound the run.
        let stats = run_simulations(&mut table, 3);
        assert!(stats.total_simulations >= 1);
        assert_eq!(stats.successful_simulations, stats.total_simulations);
        assert!((stats.success_rate - 1.0).abs() < f64::EPSILON || stats.success_rate == 0.0);
    }
}
