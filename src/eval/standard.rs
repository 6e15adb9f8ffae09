//! Brute-force best-5-of-7 evaluator (spec §4.2 supplement).
//!
//! Grounded on the teacher's `Rank`/`SubHand` total order: rank classes are
//! compared first, kickers break ties within a class, high to low.

use crate::entities::{Card, RankClass, Value};
use crate::eval::{EvaluatedHand, HandEvaluator};

/// Reference evaluator: tries every 5-card subset of the combined hole and
/// board cards and keeps the strongest. `C(7, 5) = 21` combinations at most,
/// cheap enough to not warrant a faster algorithm in this crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardEvaluator;

impl HandEvaluator for StandardEvaluator {
    fn evaluate(&self, hole: &[Card], board: &[Card]) -> EvaluatedHand {
        let mut all: Vec<Card> = Vec::with_capacity(hole.len() + board.len());
        all.extend_from_slice(hole);
        all.extend_from_slice(board);

        let mut best: Option<EvaluatedHand> = None;
        for combo in combinations(&all, 5) {
            let candidate = evaluate_five(&combo);
            if best.as_ref().is_none_or(|b| candidate > *b) {
                best = Some(candidate);
            }
        }
        best.expect("at least 5 cards required to evaluate a hand")
    }
}

fn combinations(cards: &[Card], k: usize) -> Vec<Vec<Card>> {
    let n = cards.len();
    if k > n {
        return Vec::new();
    }
    let mut result = Vec::new();
    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        result.push(indices.iter().map(|&i| cards[i]).collect());

        let mut i = k;
        let advance = loop {
            if i == 0 {
                break None;
            }
            i -= 1;
            if indices[i] != i + n - k {
                break Some(i);
            }
        };
        let Some(i) = advance else {
            return result;
        };
        indices[i] += 1;
        for j in i + 1..k {
            indices[j] = indices[j - 1] + 1;
        }
    }
}

fn evaluate_five(cards: &[Card]) -> EvaluatedHand {
    let mut values: Vec<Value> = cards.iter().map(Card::rank).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = cards.windows(2).all(|w| w[0].suit() == w[1].suit());
    let straight_high = straight_high_card(&values);

    let mut counts: Vec<(Value, usize)> = Vec::new();
    for &v in &values {
        match counts.iter_mut().find(|(cv, _)| *cv == v) {
            Some((_, c)) => *c += 1,
            None => counts.push((v, 1)),
        }
    }
    counts.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

    let mut sorted_cards = cards.to_vec();
    sorted_cards.sort_unstable_by(|a, b| b.rank().cmp(&a.rank()));

    let (rank_class, tiebreak) = match (&counts[..], is_flush, straight_high) {
        (_, true, Some(high)) => (RankClass::StraightFlush, vec![high]),
        ([(q, 4), (k, 1)], ..) => (RankClass::FourOfAKind, vec![*q, *k]),
        ([(t, 3), (p, 2)], ..) => (RankClass::FullHouse, vec![*t, *p]),
        (_, true, None) => (RankClass::Flush, values.clone()),
        (_, false, Some(high)) => (RankClass::Straight, vec![high]),
        ([(t, 3), (k1, 1), (k2, 1)], ..) => (RankClass::ThreeOfAKind, vec![*t, *k1, *k2]),
        ([(p1, 2), (p2, 2), (k, 1)], ..) => (RankClass::TwoPair, vec![*p1, *p2, *k]),
        ([(p, 2), (k1, 1), (k2, 1), (k3, 1)], ..) => (RankClass::Pair, vec![*p, *k1, *k2, *k3]),
        _ => (RankClass::HighCard, values.clone()),
    };

    let rank_class = if rank_class == RankClass::StraightFlush && tiebreak.as_slice() == [14] {
        RankClass::RoyalFlush
    } else {
        rank_class
    };

    EvaluatedHand {
        rank_class,
        tiebreak,
        cards: sorted_cards,
    }
}

/// Returns the high card of a straight if the five values form one,
/// accounting for the ace-low wheel (A-2-3-4-5, high card 5).
fn straight_high_card(descending_values: &[Value]) -> Option<Value> {
    let mut unique: Vec<Value> = descending_values.to_vec();
    unique.dedup();
    if unique.len() != 5 {
        return None;
    }
    if unique[0] - unique[4] == 4 {
        return Some(unique[0]);
    }
    if unique == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}
