//! Game session tests.
//!
//! These tests drive `GameSession` through its state machine with an
//! injected opponent, including the reset/stale-ticket race.

use proptest::prelude::*;
use rps_engine::{
    GameError, GameSession, Move, MoveCatalog, Outcome, Score, ScriptedOpponent, SessionConfig,
    SessionSnapshot, TurnState, UniformOpponent,
};

/// Test a player win is scored once and reported.
#[test]
fn test_rock_beats_scissors() {
    let mut session = GameSession::default();
    let ticket = session.submit_move(Move::Rock).unwrap();
    let report = session
        .resolve(ticket, &mut ScriptedOpponent::always(Move::Scissors))
        .unwrap();

    assert_eq!(report.outcome, Outcome::Wins);
    assert_eq!(report.score, Score::new(1, 0));

    let snapshot = session.snapshot();
    assert_eq!(snapshot.turn_state, TurnState::Resolved);
    assert_eq!(snapshot.player_move, Some(Move::Rock));
    assert_eq!(snapshot.opponent_move, Some(Move::Scissors));
    assert_eq!(snapshot.outcome, Some(Outcome::Wins));
    assert_eq!(snapshot.score, Score::new(1, 0));
}

/// Test a tie leaves the score untouched.
#[test]
fn test_paper_ties_paper() {
    let mut session = GameSession::default();
    let ticket = session.submit_move(Move::Paper).unwrap();
    let report = session
        .resolve(ticket, &mut ScriptedOpponent::always(Move::Paper))
        .unwrap();

    assert_eq!(report.outcome, Outcome::Ties);
    assert_eq!(session.score(), Score::new(0, 0));
    assert_eq!(session.turn_state(), TurnState::Resolved);
}

/// Test submissions while awaiting resolution are debounced.
#[test]
fn test_submit_while_awaiting_is_noop() {
    let mut session = GameSession::default();
    session.submit_move(Move::Rock).unwrap();
    let before = session.snapshot();

    assert!(session.submit_move(Move::Paper).is_none());
    assert!(session.submit_move(Move::Scissors).is_none());
    assert_eq!(session.snapshot(), before);

    assert_eq!(session.try_submit_move(Move::Paper), Err(GameError::Busy));
    assert_eq!(session.snapshot(), before);
}

/// Test a reset during a pending turn survives the original timer firing.
#[test]
fn test_reset_while_awaiting_discards_resolution() {
    let mut session = GameSession::default();
    let ticket = session.submit_move(Move::Rock).unwrap();

    session.reset();
    let report = session.resolve(ticket, &mut ScriptedOpponent::always(Move::Scissors));

    assert!(report.is_none());
    assert_eq!(session.turn_state(), TurnState::Idle);
    assert_eq!(session.score(), Score::new(0, 0));
}

/// Test repeated resets are idempotent.
#[test]
fn test_reset_is_idempotent() {
    let mut session = GameSession::default();
    let ticket = session.submit_move(Move::Paper).unwrap();
    session.resolve(ticket, &mut ScriptedOpponent::always(Move::Rock));
    assert_eq!(session.score(), Score::new(1, 0));

    for _ in 0..3 {
        session.reset();
        assert_eq!(session.snapshot(), SessionSnapshot::default());
    }
}

/// Test a resolved session accepts the next turn.
#[test]
fn test_resolved_reenters_awaiting() {
    let mut session = GameSession::default();
    let mut opponent = ScriptedOpponent::new([Move::Scissors, Move::Paper]).unwrap();

    let first = session.submit_move(Move::Rock).unwrap();
    session.resolve(first, &mut opponent).unwrap();

    let second = session.submit_move(Move::Rock).unwrap();
    let snapshot = session.snapshot();
    assert_eq!(snapshot.turn_state, TurnState::AwaitingResolution);
    assert_eq!(snapshot.opponent_move, None);
    assert_eq!(snapshot.outcome, None);
    assert_eq!(snapshot.score, Score::new(1, 0));

    let report = session.resolve(second, &mut opponent).unwrap();
    assert_eq!(report.outcome, Outcome::Loses);
    assert_eq!(session.score(), Score::new(1, 1));
    assert_eq!(session.turns_played(), 2);
}

/// Test the ticket carries the configured delay.
#[test]
fn test_ticket_delay_from_config() {
    let config = SessionConfig::default().with_resolution_delay(std::time::Duration::from_millis(20));
    let mut session = GameSession::new(config);
    let ticket = session.submit_move(Move::Rock).unwrap();
    assert_eq!(ticket.delay(), std::time::Duration::from_millis(20));
}

/// Test resolving a boxed uniform opponent.
#[test]
fn test_boxed_uniform_opponent() {
    let mut session = GameSession::default();
    let mut opponent: Box<dyn rps_engine::OpponentPolicy> = Box::new(UniformOpponent::new(3));

    for _ in 0..20 {
        let ticket = session.submit_move(Move::Rock).unwrap();
        let report = session.resolve(ticket, &mut opponent).unwrap();
        assert_eq!(report.outcome, MoveCatalog::resolve(Move::Rock, report.opponent));
    }
    assert_eq!(session.turns_played(), 20);
}

#[derive(Clone, Debug)]
enum Step {
    Submit(Move),
    Resolve(Move),
    ResolveStale(Move),
    Reset,
}

fn any_move() -> impl Strategy<Value = Move> {
    prop::sample::select(MoveCatalog::all_moves().to_vec())
}

fn any_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        any_move().prop_map(Step::Submit),
        any_move().prop_map(Step::Resolve),
        any_move().prop_map(Step::ResolveStale),
        Just(Step::Reset),
    ]
}

proptest! {
    /// Score only grows between resets, by at most one counter per
    /// resolution, and turn state always agrees with the stored moves.
    #[test]
    fn prop_session_invariants(steps in prop::collection::vec(any_step(), 0..64)) {
        let mut session = GameSession::default();
        let mut pending = None;
        let mut stale = Vec::new();

        for step in steps {
            let before = session.score();
            match step {
                Step::Submit(mv) => {
                    if let Some(ticket) = session.submit_move(mv) {
                        pending = Some(ticket);
                    }
                }
                Step::Resolve(opp) => {
                    if let Some(ticket) = pending.take() {
                        let report = session
                            .resolve(ticket, &mut ScriptedOpponent::always(opp))
                            .unwrap();
                        let after = session.score();
                        let gained = after.total() - before.total();
                        prop_assert_eq!(gained, u64::from(report.outcome != Outcome::Ties));
                        prop_assert!(after.player >= before.player);
                        prop_assert!(after.opponent >= before.opponent);
                    }
                }
                Step::ResolveStale(opp) => {
                    if let Some(ticket) = stale.pop() {
                        let snapshot = session.snapshot();
                        prop_assert!(session
                            .resolve(ticket, &mut ScriptedOpponent::always(opp))
                            .is_none());
                        prop_assert_eq!(session.snapshot(), snapshot);
                    }
                }
                Step::Reset => {
                    if let Some(ticket) = pending.take() {
                        stale.push(ticket);
                    }
                    session.reset();
                    prop_assert_eq!(session.snapshot(), SessionSnapshot::default());
                }
            }

            let snapshot = session.snapshot();
            match snapshot.turn_state {
                TurnState::Idle => {
                    prop_assert!(snapshot.player_move.is_none());
                    prop_assert!(snapshot.opponent_move.is_none());
                }
                TurnState::AwaitingResolution => {
                    prop_assert!(snapshot.player_move.is_some());
                    prop_assert!(snapshot.opponent_move.is_none());
                    prop_assert!(pending.is_some());
                }
                TurnState::Resolved => {
                    prop_assert!(snapshot.player_move.is_some());
                    prop_assert!(snapshot.opponent_move.is_some());
                    prop_assert!(snapshot.outcome.is_some());
                }
            }
        }
    }
}
