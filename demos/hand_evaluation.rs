//! Demonstrates the `HandEvaluator` boundary: evaluating hole+board cards
//! into a ranked [`EvaluatedHand`] and comparing several at once.

use holdem_core::entities::{Card, Suit};
use holdem_core::eval::{EvaluatedHand, HandEvaluator, StandardEvaluator};

fn show(label: &str, hole: &[Card], board: &[Card], evaluated: &EvaluatedHand) {
    println!("{label}: hole {hole:?}, board {board:?} -> {}", evaluated.description());
}

fn main() {
    let evaluator = StandardEvaluator;

    println!("=== Evaluating a single seven-card hand ===");
    let hole = [Card(14, Suit::Heart), Card(13, Suit::Heart)];
    let board = [
        Card(12, Suit::Heart),
        Card(11, Suit::Heart),
        Card(10, Suit::Heart),
        Card(9, Suit::Spade),
        Card(2, Suit::Club),
    ];
    let evaluated = evaluator.evaluate(&hole, &board);
    show("Royal flush draw realized", &hole, &board, &evaluated);

    println!("\n=== Comparing two pairs on a shared board ===");
    let board = [Card(10, Suit::Club), Card(9, Suit::Diamond), Card(2, Suit::Spade)];
    let hole_a = [Card(14, Suit::Spade), Card(14, Suit::Heart)];
    let hole_b = [Card(13, Suit::Spade), Card(13, Suit::Heart)];
    let eval_a = evaluator.evaluate(&hole_a, &board);
    let eval_b = evaluator.evaluate(&hole_b, &board);
    show("Hand A (pocket aces)", &hole_a, &board, &eval_a);
    show("Hand B (pocket kings)", &hole_b, &board, &eval_b);
    match eval_a.cmp(&eval_b) {
        std::cmp::Ordering::Greater => println!("Winner: Hand A"),
        std::cmp::Ordering::Less => println!("Winner: Hand B"),
        std::cmp::Ordering::Equal => println!("Split pot"),
    }

    println!("\n=== Every rank class on a five-card board ===");
    let examples: [(&str, [Card; 2], [Card; 3]); 9] = [
        (
            "Straight flush",
            [Card(9, Suit::Heart), Card(8, Suit::Heart)],
            [Card(7, Suit::Heart), Card(6, Suit::Heart), Card(5, Suit::Heart)],
        ),
        (
            "Four of a kind",
            [Card(8, Suit::Spade), Card(8, Suit::Heart)],
            [Card(8, Suit::Diamond), Card(8, Suit::Club), Card(2, Suit::Spade)],
        ),
        (
            "Full house",
            [Card(10, Suit::Spade), Card(10, Suit::Heart)],
            [Card(10, Suit::Diamond), Card(6, Suit::Club), Card(6, Suit::Spade)],
        ),
        (
            "Flush",
            [Card(13, Suit::Club), Card(11, Suit::Club)],
            [Card(8, Suit::Club), Card(5, Suit::Club), Card(3, Suit::Club)],
        ),
        (
            "Straight",
            [Card(10, Suit::Spade), Card(9, Suit::Heart)],
            [Card(8, Suit::Diamond), Card(7, Suit::Club), Card(6, Suit::Spade)],
        ),
        (
            "Three of a kind",
            [Card(7, Suit::Spade), Card(7, Suit::Heart)],
            [Card(7, Suit::Diamond), Card(12, Suit::Club), Card(3, Suit::Spade)],
        ),
        (
            "Two pair",
            [Card(12, Suit::Spade), Card(12, Suit::Heart)],
            [Card(5, Suit::Diamond), Card(5, Suit::Club), Card(2, Suit::Spade)],
        ),
        (
            "One pair",
            [Card(9, Suit::Spade), Card(9, Suit::Heart)],
            [Card(13, Suit::Diamond), Card(7, Suit::Club), Card(4, Suit::Spade)],
        ),
        (
            "High card",
            [Card(14, Suit::Spade), Card(12, Suit::Heart)],
            [Card(10, Suit::Diamond), Card(7, Suit::Club), Card(3, Suit::Spade)],
        ),
    ];

    for (name, hole, board) in examples {
        let evaluated = evaluator.evaluate(&hole, &board);
        println!("{name}: {}", evaluated.description());
    }
}
