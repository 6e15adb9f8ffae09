//! Player Adapter Contract (spec §4.8 / GLOSSARY): the capability an
//! external agent must satisfy to sit at a table — produce an action from a
//! game-state snapshot, receive private cards, and observe public events.
//! No network transport lives here (out of scope, spec §1); this module
//! defines the trait boundary a transport would sit behind.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::entities::{Action, ActionKind, Card, PlayerId, SeatIndex, Usd, ValidAction};
use crate::event::Event;
use crate::hand::Phase;

/// One player's public-facing state, as seen by every adapter at the table
/// (spec §6 game-state snapshot `players` map).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PlayerSnapshot {
    pub chips: Usd,
    pub bet: Usd,
    pub total_bet: Usd,
    pub status: crate::entities::PlayerStatus,
    pub last_action: Option<ActionKind>,
}

/// Game-state snapshot passed to an adapter on its turn (spec §6).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GameStateSnapshot {
    pub phase: Phase,
    pub pot: Usd,
    pub current_bet: Usd,
    pub community_cards: Vec<Card>,
    pub players: HashMap<PlayerId, PlayerSnapshot>,
    pub to_act: Option<PlayerId>,
    pub valid_actions: Vec<ValidAction>,
    pub to_call: Usd,
    pub min_raise: Usd,
    pub max_raise: Usd,
    pub dealer_button: SeatIndex,
}

/// The capability a seat's occupant must provide (spec §4.8). Implementors
/// decide how `act` resolves: a bot computes synchronously and returns
/// immediately, an interactive client suspends until a human responds.
#[async_trait]
pub trait PlayerAdapter: Send {
    /// Produce an action for the current snapshot. Called only when it is
    /// this adapter's seat's turn; the snapshot's `valid_actions` bounds
    /// what the driver will accept (spec §4.4) — returning anything else is
    /// not an error here, it simply gets rejected and re-requested upstream
    /// (spec §7 retry policy).
    async fn act(&mut self, snapshot: &GameStateSnapshot) -> Action;

    /// Deliver this adapter's own hole cards, once, right after the deal.
    fn receive_private_cards(&mut self, cards: &[Card]);

    /// Observe a public event. Adapters that don't need the stream (e.g. a
    /// pure scripted bot) may ignore this.
    fn receive_event(&mut self, event: &Event);
}

/// A fixed sequence of actions played back in order, for tests and
/// deterministic simulation (spec §4.8, simplified from the teacher's
/// difficulty-parametrized bot down to a plain lookup). When the sequence
/// runs out, it folds if facing a bet and checks otherwise, mirroring the
/// orchestrator's own timeout fallback (spec §7) so a short script never
/// produces an illegal action.
#[derive(Clone, Debug, Default)]
pub struct ScriptedAdapter {
    player_id: PlayerId,
    script: Vec<(ActionKind, Option<Usd>)>,
    cursor: usize,
    hole_cards: Option<[Card; 2]>,
}

impl ScriptedAdapter {
    #[must_use]
    pub fn new(player_id: PlayerId, script: Vec<(ActionKind, Option<Usd>)>) -> Self {
        Self {
            player_id,
            script,
            cursor: 0,
            hole_cards: None,
        }
    }

    #[must_use]
    pub fn hole_cards(&self) -> Option<[Card; 2]> {
        self.hole_cards
    }

    fn fallback(&self, snapshot: &GameStateSnapshot) -> Action {
        if snapshot.to_call > 0 {
            Action::new(self.player_id, ActionKind::Fold, None)
        } else {
            Action::new(self.player_id, ActionKind::Check, None)
        }
    }
}

#[async_trait]
impl PlayerAdapter for ScriptedAdapter {
    async fn act(&mut self, snapshot: &GameStateSnapshot) -> Action {
        let Some(&(kind, amount)) = self.script.get(self.cursor) else {
            return self.fallback(snapshot);
        };
        self.cursor += 1;
        Action::new(self.player_id, kind, amount)
    }

    fn receive_private_cards(&mut self, cards: &[Card]) {
        if let [a, b] = cards {
            self.hole_cards = Some([*a, *b]);
        }
    }

    fn receive_event(&mut self, _event: &Event) {}
}

/// An adapter for the interactive path: `act` suspends on a channel until
/// the orchestrator's transport layer (out of scope here) sends back the
/// human's choice. Unbounded `mpsc`, not `oneshot`, since one adapter spans
/// many turns across a hand rather than a single request/response. Never
/// constructed when `TableConfig::simulation_mode` is set (spec §5 "player
/// adapters in this mode must return decisions without suspending").
pub struct ChannelAdapter {
    player_id: PlayerId,
    request_tx: tokio::sync::mpsc::UnboundedSender<GameStateSnapshot>,
    response_rx: tokio::sync::mpsc::UnboundedReceiver<Action>,
    hole_cards: Option<[Card; 2]>,
    events: Vec<Event>,
}

impl ChannelAdapter {
    #[must_use]
    pub fn new(
        player_id: PlayerId,
        request_tx: tokio::sync::mpsc::UnboundedSender<GameStateSnapshot>,
        response_rx: tokio::sync::mpsc::UnboundedReceiver<Action>,
    ) -> Self {
        Self {
            player_id,
            request_tx,
            response_rx,
            hole_cards: None,
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn hole_cards(&self) -> Option<[Card; 2]> {
        self.hole_cards
    }

    #[must_use]
    pub fn received_events(&self) -> &[Event] {
        &self.events
    }
}

#[async_trait]
impl PlayerAdapter for ChannelAdapter {
    async fn act(&mut self, snapshot: &GameStateSnapshot) -> Action {
        if self.request_tx.send(snapshot.clone()).is_err() {
            log::warn!(
                "player {} transport dropped, falling back to fold/check",
                self.player_id
            );
            return if snapshot.to_call > 0 {
                Action::new(self.player_id, ActionKind::Fold, None)
            } else {
                Action::new(self.player_id, ActionKind::Check, None)
            };
        }
        match self.response_rx.recv().await {
            Some(action) => action,
            None => {
                log::warn!(
                    "player {} response channel closed, falling back to fold/check",
                    self.player_id
                );
                if snapshot.to_call > 0 {
                    Action::new(self.player_id, ActionKind::Fold, None)
                } else {
                    Action::new(self.player_id, ActionKind::Check, None)
                }
            }
        }
    }

    fn receive_private_cards(&mut self, cards: &[Card]) {
        if let [a, b] = cards {
            self.hole_cards = Some([*a, *b]);
        }
    }

    fn receive_event(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(to_call: Usd) -> GameStateSnapshot {
        GameStateSnapshot {
            phase: Phase::PreFlop,
            pot: 30,
            current_bet: to_call,
            community_cards: Vec::new(),
            players: HashMap::new(),
            to_act: None,
            valid_actions: Vec::new(),
            to_call,
            min_raise: 20,
            max_raise: 1000,
            dealer_button: 0,
        }
    }

    #[tokio::test]
    async fn scripted_adapter_plays_back_in_order_then_falls_back() {
        let id = PlayerId::new();
        let mut adapter = ScriptedAdapter::new(
            id,
            vec![(ActionKind::Call, Some(20)), (ActionKind::Raise, Some(60))],
        );
        let first = adapter.act(&snapshot(20)).await;
        assert_eq!(first.kind, ActionKind::Call);
        let second = adapter.act(&snapshot(40)).await;
        assert_eq!(second.kind, ActionKind::Raise);
        // script exhausted: facing a bet falls back to fold.
        let third = adapter.act(&snapshot(40)).await;
        assert_eq!(third.kind, ActionKind::Fold);
        // facing no bet falls back to check.
        let fourth = adapter.act(&snapshot(0)).await;
        assert_eq!(fourth.kind, ActionKind::Check);
    }

    #[test]
    fn scripted_adapter_stores_private_cards() {
        let mut adapter = ScriptedAdapter::new(PlayerId::new(), Vec::new());
        let cards = [
            Card(14, crate::entities::Suit::Spade),
            Card(13, crate::entities::Suit::Heart),
        ];
        adapter.receive_private_cards(&cards);
        assert_eq!(adapter.hole_cards(), Some(cards));
    }

    #[tokio::test]
    async fn channel_adapter_round_trips_a_decision() {
        let id = PlayerId::new();
        let (req_tx, mut req_rx) = tokio::sync::mpsc::unbounded_channel();
        let (resp_tx, resp_rx) = tokio::sync::mpsc::unbounded_channel();
        let mut adapter = ChannelAdapter::new(id, req_tx, resp_rx);

        let handle = tokio::spawn(async move { adapter.act(&snapshot(20)).await });
        let forwarded = req_rx.recv().await.expect("snapshot forwarded");
        assert_eq!(forwarded.to_call, 20);
        resp_tx
            .send(Action::new(id, ActionKind::Call, Some(20)))
            .expect("send response");
        let action = handle.await.expect("task completes");
        assert_eq!(action.kind, ActionKind::Call);
    }

    #[tokio::test]
    async fn channel_adapter_falls_back_when_transport_is_dropped() {
        let id = PlayerId::new();
        let (req_tx, req_rx) = tokio::sync::mpsc::unbounded_channel();
        let (_resp_tx, resp_rx) = tokio::sync::mpsc::unbounded_channel();
        drop(req_rx);
        let mut adapter = ChannelAdapter::new(id, req_tx, resp_rx);
        let action = adapter.act(&snapshot(20)).await;
        assert_eq!(action.kind, ActionKind::Fold);
    }
}
