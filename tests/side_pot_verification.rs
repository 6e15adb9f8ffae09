//! Integration tests driving `Hand` + `SeatingRing` + a rigged `Deck` through
//! full hands that exercise pot and side-pot settlement (spec §8 scenarios
//! 3, 4, 5): all-in side pots, a split pot between identical hands, and a
//! three-way chop where everyone plays the board.

use holdem_core::cards::Deck;
use holdem_core::entities::{ActionKind, Card, PlayerId, PlayerRecord, Suit};
use holdem_core::event::VecEventSink;
use holdem_core::eval::StandardEvaluator;
use holdem_core::hand::{Hand, Phase};
use holdem_core::seating::SeatingRing;

fn card(rank: u8, suit: Suit) -> Card {
    Card(rank, suit)
}

fn ring_with(stacks: &[u32]) -> SeatingRing {
    let mut ring = SeatingRing::new(stacks.len());
    for &stack in stacks {
        ring.seat_player(PlayerRecord::new(PlayerId::new(), "p", stack));
    }
    ring
}

/// Spec §8 scenario 3: three-way all-in creates a main pot and a side pot;
/// the short stack is eligible only for the main pot.
#[test]
fn three_way_all_in_creates_main_and_side_pot_scenario_3() {
    let mut ring = ring_with(&[100, 300, 1000]);
    let hole = [
        [card(14, Suit::Spade), card(14, Suit::Heart)], // seat 0: AA
        [card(13, Suit::Diamond), card(13, Suit::Heart)], // seat 1: KK
        [card(12, Suit::Club), card(12, Suit::Heart)],  // seat 2: QQ
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
    // button = seat 2, so blinds land on seat 0 (SB) / seat 1 (BB); seat 2
    // is UTG with no blind posted and acts first.
    let mut hand = Hand::start(&mut ring, 10, 20, Some(2), deck, Box::new(StandardEvaluator), &mut sink)
        .expect("hand starts");

    assert_eq!(hand.to_act(), Some(2));
    hand.apply_action(&mut ring, 2, ActionKind::AllIn, Some(1000), &mut sink)
        .expect("seat 2 shoves");
    hand.apply_action(&mut ring, 0, ActionKind::AllIn, Some(100), &mut sink)
        .expect("seat 0 shoves");
    hand.apply_action(&mut ring, 1, ActionKind::AllIn, Some(300), &mut sink)
        .expect("seat 1 shoves");

    assert_eq!(hand.phase(), Phase::Complete);
    // Main pot (300 = 100*3) goes to seat 0's AA; side pot (400 = (300-100)*2)
    // goes to seat 1's KK; seat 2's extra (700 = 1000-300) returns uncalled.
    assert_eq!(ring.get(0).unwrap().chips, 300);
    assert_eq!(ring.get(1).unwrap().chips, 400);
    assert_eq!(ring.get(2).unwrap().chips, 700);
    // Chip conservation: 100 + 300 + 1000 in, same total out.
    let total_after: u32 = [0, 1, 2].iter().map(|&s| ring.get(s).unwrap().chips).sum();
    assert_eq!(total_after, 1400);
}

/// Spec §8 scenario 4: two players both hold AA; the board runs out low and
/// rainbow, so the board's kickers decide nothing and the pot splits evenly.
#[test]
fn split_pot_between_identical_hands_scenario_4() {
    let mut ring = ring_with(&[1000, 1000]);
    let sb = 0;
    let bb = 1;

    let deck = Deck::rigged_alternating(
        &[
            [card(14, Suit::Spade), card(14, Suit::Heart)], // sb: AA
            [card(14, Suit::Club), card(14, Suit::Diamond)], // bb: AA
        ],
        card(3, Suit::Diamond),
        [card(2, Suit::Club), card(5, Suit::Diamond), card(7, Suit::Heart)],
        card(3, Suit::Heart),
        card(9, Suit::Spade),
        card(3, Suit::Spade),
        card(11, Suit::Club),
    );

    let mut sink = VecEventSink::default();
    let mut hand = Hand::start(&mut ring, 10, 20, Some(sb), deck, Box::new(StandardEvaluator), &mut sink)
        .expect("hand starts");

    // Preflop: SB calls to 20, BB checks its option.
    hand.apply_action(&mut ring, sb, ActionKind::Call, None, &mut sink)
        .expect("sb calls");
    hand.apply_action(&mut ring, bb, ActionKind::Check, None, &mut sink)
        .expect("bb checks");
    // Flop: BB acts first heads-up post-flop.
    hand.apply_action(&mut ring, bb, ActionKind::Check, None, &mut sink)
        .expect("bb checks flop");
    hand.apply_action(&mut ring, sb, ActionKind::Check, None, &mut sink)
        .expect("sb checks flop");
    // Turn: BB bets 20, SB calls.
    hand.apply_action(&mut ring, bb, ActionKind::Bet, Some(20), &mut sink)
        .expect("bb bets turn");
    hand.apply_action(&mut ring, sb, ActionKind::Call, None, &mut sink)
        .expect("sb calls turn");
    // River: BB bets 20 again, SB calls.
    hand.apply_action(&mut ring, bb, ActionKind::Bet, Some(20), &mut sink)
        .expect("bb bets river");
    hand.apply_action(&mut ring, sb, ActionKind::Call, None, &mut sink)
        .expect("sb calls river");

    assert_eq!(hand.phase(), Phase::Complete);
    // Each contributed 60 (20 preflop + 20 turn + 20 river); pot of 120
    // splits evenly, so both end the hand exactly where they started.
    assert_eq!(ring.get(sb).unwrap().chips, 1000);
    assert_eq!(ring.get(bb).unwrap().chips, 1000);
}

/// Spec §8 scenario 5: the board itself (AAKKQ) is the best hand for all
/// three players, so the pot chops three ways.
#[test]
fn three_way_split_on_the_board_scenario_5() {
    let mut ring = ring_with(&[1000, 1000, 1000]);
    let p0 = 0;
    let p1 = 1;
    let p2 = 2;

    let deck = Deck::rigged_alternating(
        &[
            [card(2, Suit::Club), card(2, Suit::Spade)], // p0: 22
            [card(3, Suit::Club), card(3, Suit::Spade)], // p1: 33
            [card(4, Suit::Club), card(4, Suit::Spade)], // p2: 44
        ],
        card(6, Suit::Diamond),
        [card(14, Suit::Spade), card(14, Suit::Heart), card(13, Suit::Diamond)],
        card(7, Suit::Heart),
        card(13, Suit::Club),
        card(8, Suit::Spade),
        card(12, Suit::Heart),
    );

    let mut sink = VecEventSink::default();
    // button = p0, so blinds land on p1 (SB) / p2 (BB); p0 is UTG and acts
    // first pre-flop.
    let mut hand = Hand::start(&mut ring, 10, 20, Some(p0), deck, Box::new(StandardEvaluator), &mut sink)
        .expect("hand starts");

    hand.apply_action(&mut ring, p0, ActionKind::Call, None, &mut sink)
        .expect("p0 calls");
    hand.apply_action(&mut ring, p1, ActionKind::Call, None, &mut sink)
        .expect("p1 calls");
    hand.apply_action(&mut ring, p2, ActionKind::Check, None, &mut sink)
        .expect("p2 checks");

    // Every remaining street: everyone checks through, in post-flop order
    // starting with the seat after the button (p1, p2, p0).
    for _ in 0..3 {
        hand.apply_action(&mut ring, p1, ActionKind::Check, None, &mut sink)
            .expect("p1 checks");
        hand.apply_action(&mut ring, p2, ActionKind::Check, None, &mut sink)
            .expect("p2 checks");
        hand.apply_action(&mut ring, p0, ActionKind::Check, None, &mut sink)
            .expect("p0 checks");
    }

    assert_eq!(hand.phase(), Phase::Complete);
    // Each contributed exactly 20 (the blinds/call); pot of 60 chops three
    // ways, so everyone ends the hand exactly where they started.
    assert_eq!(ring.get(p0).unwrap().chips, 1000);
    assert_eq!(ring.get(p1).unwrap().chips, 1000);
    assert_eq!(ring.get(p2).unwrap().chips, 1000);
}
