//! Move catalog tests.
//!
//! These tests verify the beats-relation: totality, antisymmetry and
//! the fixed dominance cycle.

use proptest::prelude::*;
use rps_engine::{Move, MoveCatalog, Outcome};

fn any_move() -> impl Strategy<Value = Move> {
    prop::sample::select(MoveCatalog::all_moves().to_vec())
}

/// Test the catalog order is fixed and stable.
#[test]
fn test_all_moves_order() {
    let first = MoveCatalog::all_moves();
    let second = MoveCatalog::all_moves();

    assert_eq!(first, &[Move::Rock, Move::Paper, Move::Scissors]);
    assert_eq!(first, second);
    for (i, mv) in first.iter().enumerate() {
        assert_eq!(mv.index(), i);
    }
}

/// Test exactly the three cyclic wins exist.
#[test]
fn test_cyclic_dominance() {
    let mut wins = Vec::new();
    for &a in MoveCatalog::all_moves() {
        for &b in MoveCatalog::all_moves() {
            if MoveCatalog::resolve(a, b) == Outcome::Wins {
                wins.push((a, b));
            }
        }
    }

    assert_eq!(
        wins,
        vec![
            (Move::Rock, Move::Scissors),
            (Move::Paper, Move::Rock),
            (Move::Scissors, Move::Paper),
        ]
    );
}

/// Test each move beats exactly one and loses to exactly one.
#[test]
fn test_each_move_has_one_prey_and_one_predator() {
    for &a in MoveCatalog::all_moves() {
        let outcomes: Vec<_> = MoveCatalog::all_moves()
            .iter()
            .map(|&b| MoveCatalog::resolve(a, b))
            .collect();

        assert_eq!(outcomes.iter().filter(|&&o| o == Outcome::Wins).count(), 1);
        assert_eq!(outcomes.iter().filter(|&&o| o == Outcome::Loses).count(), 1);
        assert_eq!(outcomes.iter().filter(|&&o| o == Outcome::Ties).count(), 1);
    }
}

/// Test parsed moves resolve the same as enum moves.
#[test]
fn test_parsed_moves_resolve() {
    let rock: Move = "piedra".parse().unwrap();
    let scissors: Move = "scissors".parse().unwrap();
    assert_eq!(MoveCatalog::resolve(rock, scissors), Outcome::Wins);
}

proptest! {
    #[test]
    fn prop_never_both_win(a in any_move(), b in any_move()) {
        let forward = MoveCatalog::resolve(a, b);
        let backward = MoveCatalog::resolve(b, a);
        prop_assert!(!(forward == Outcome::Wins && backward == Outcome::Wins));
        prop_assert_eq!(forward.reversed(), backward);
    }

    #[test]
    fn prop_self_ties(a in any_move()) {
        prop_assert_eq!(MoveCatalog::resolve(a, a), Outcome::Ties);
        prop_assert!(!a.beats(a));
    }

    #[test]
    fn prop_ties_only_on_identical(a in any_move(), b in any_move()) {
        prop_assert_eq!(MoveCatalog::resolve(a, b) == Outcome::Ties, a == b);
    }

    #[test]
    fn prop_parse_identifier(a in any_move()) {
        prop_assert_eq!(a.id().parse::<Move>().unwrap(), a);
        prop_assert_eq!(a.id().to_uppercase().parse::<Move>().unwrap(), a);
    }
}
