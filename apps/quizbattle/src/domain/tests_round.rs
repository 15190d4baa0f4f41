use crate::domain::fixtures::{fresh_round, CORRECT_IDS, INCORRECT_IDS};
use crate::domain::roster::Roster;
use crate::domain::round::{pass_turn, select_answer};
use crate::domain::scoring::commit_round_scores;
use crate::errors::domain::ValidationKind;

#[test]
fn correct_pick_adds_ten_and_keeps_turn() {
    let (mut m, mut round) = fresh_round();

    let outcome = select_answer(&mut m, &mut round, 1).unwrap();

    assert!(outcome.correct);
    assert!(!outcome.turn_switched);
    assert_eq!(outcome.round_score_after, 10);
    assert_eq!(m.active(), 1);
    assert_eq!(round.round_score(1), 10);
    assert_eq!(round.round_score(2), 0);
}

#[test]
fn incorrect_pick_wipes_score_and_switches_turn() {
    let (mut m, mut round) = fresh_round();
    select_answer(&mut m, &mut round, 1).unwrap();
    select_answer(&mut m, &mut round, 2).unwrap();
    assert_eq!(round.round_score(1), 20);

    let outcome = select_answer(&mut m, &mut round, 8).unwrap();

    assert!(!outcome.correct);
    assert!(outcome.turn_switched);
    assert_eq!(outcome.picked_by, 1);
    assert_eq!(outcome.active_after, 2);
    assert_eq!(round.round_score(1), 0);
    assert_eq!(m.active(), 2);
}

#[test]
fn incorrect_pick_leaves_opponent_score_alone() {
    let (mut m, mut round) = fresh_round();
    select_answer(&mut m, &mut round, 8).unwrap(); // 1 misses, 2 active
    select_answer(&mut m, &mut round, 1).unwrap(); // 2 scores 10
    assert!(pass_turn(&mut m, &round).is_some()); // back to 1

    select_answer(&mut m, &mut round, 9).unwrap(); // 1 misses again

    assert_eq!(round.round_score(2), 10);
    assert_eq!(m.active(), 2);
}

#[test]
fn reselecting_an_answer_is_a_noop() {
    let (mut m, mut round) = fresh_round();
    select_answer(&mut m, &mut round, 1).unwrap();
    let before = round.clone();
    let active_before = m.active();

    let outcome = select_answer(&mut m, &mut round, 1).unwrap();

    assert!(outcome.already_selected);
    assert_eq!(round, before);
    assert_eq!(m.active(), active_before);
}

#[test]
fn reselecting_an_incorrect_answer_does_not_switch_again() {
    let (mut m, mut round) = fresh_round();
    select_answer(&mut m, &mut round, 8).unwrap();
    assert_eq!(m.active(), 2);

    let outcome = select_answer(&mut m, &mut round, 8).unwrap();

    assert!(outcome.already_selected);
    assert!(!outcome.turn_switched);
    assert_eq!(m.active(), 2);
}

#[test]
fn unknown_answer_is_rejected_without_change() {
    let (mut m, mut round) = fresh_round();
    let before = round.clone();

    let err = select_answer(&mut m, &mut round, 42).unwrap_err();

    assert!(err.is_validation(&ValidationKind::UnknownAnswer));
    assert_eq!(round, before);
}

#[test]
fn all_incorrect_found_unlocks_end_round() {
    let (mut m, mut round) = fresh_round();
    for id in INCORRECT_IDS {
        assert!(!round.end_round_available());
        select_answer(&mut m, &mut round, id).unwrap();
    }
    assert!(round.all_incorrect_found());
    assert!(round.end_round_available());
}

#[test]
fn all_correct_found_unlocks_end_round() {
    let (mut m, mut round) = fresh_round();
    let mut last = None;
    for id in CORRECT_IDS {
        last = Some(select_answer(&mut m, &mut round, id).unwrap());
    }
    let last = last.unwrap();
    assert!(last.round_end_available);
    assert!(round.all_correct_found());
    assert_eq!(round.round_score(1), 70);
}

#[test]
fn picks_after_round_is_decided_are_rejected() {
    let (mut m, mut round) = fresh_round();
    for id in INCORRECT_IDS {
        select_answer(&mut m, &mut round, id).unwrap();
    }

    let err = select_answer(&mut m, &mut round, 1).unwrap_err();

    assert!(err.is_validation(&ValidationKind::RoundAlreadyDecided));
    assert!(!round.is_selected(1));
}

#[test]
fn pass_requires_positive_round_score() {
    let (mut m, round) = fresh_round();

    assert_eq!(pass_turn(&mut m, &round), None);
    assert_eq!(m.active(), 1);
}

#[test]
fn pass_switches_turn_and_keeps_scores() {
    let (mut m, mut round) = fresh_round();
    select_answer(&mut m, &mut round, 1).unwrap();

    assert_eq!(pass_turn(&mut m, &round), Some(2));
    assert_eq!(round.round_score(1), 10);
    assert_eq!(round.round_score(2), 0);
}

#[test]
fn zero_scoring_player_cannot_pass_back() {
    let (mut m, mut round) = fresh_round();
    select_answer(&mut m, &mut round, 1).unwrap();
    pass_turn(&mut m, &round).unwrap();

    // Player 2 has nothing banked yet.
    assert_eq!(pass_turn(&mut m, &round), None);
    assert_eq!(m.active(), 2);

    select_answer(&mut m, &mut round, 2).unwrap();
    assert_eq!(pass_turn(&mut m, &round), Some(1));

    // Player 1 still holds 10, so the pass chain may continue.
    assert_eq!(pass_turn(&mut m, &round), Some(2));
}

#[test]
fn pass_is_blocked_once_round_is_decided() {
    let (mut m, mut round) = fresh_round();
    for id in CORRECT_IDS {
        select_answer(&mut m, &mut round, id).unwrap();
    }
    assert_eq!(pass_turn(&mut m, &round), None);
}

#[test]
fn scenario_miss_then_opponent_scores() {
    // P1 picks A1, then A8; P2 picks A2; the round is then committed.
    let mut roster = Roster::with_default_players();
    let (mut m, mut round) = fresh_round();

    select_answer(&mut m, &mut round, 1).unwrap();
    assert_eq!((round.round_score(1), m.active()), (10, 1));

    select_answer(&mut m, &mut round, 8).unwrap();
    assert_eq!((round.round_score(1), m.active()), (0, 2));

    select_answer(&mut m, &mut round, 2).unwrap();
    assert_eq!(round.round_score(2), 10);
    assert!(!round.end_round_available());

    commit_round_scores(&mut roster, &round).unwrap();

    assert_eq!(roster.get(1).unwrap().score, 0);
    assert_eq!(roster.get(2).unwrap().score, 10);
}
