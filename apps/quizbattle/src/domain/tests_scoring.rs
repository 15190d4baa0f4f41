use crate::domain::fixtures::{fresh_round, QuestionFixtures};
use crate::domain::roster::Roster;
use crate::domain::round::{select_answer, RoundState};
use crate::domain::scoring::commit_round_scores;
use crate::domain::state::Match;

#[test]
fn commit_adds_only_positive_round_scores() {
    let mut roster = Roster::with_default_players();
    let (mut m, mut round) = fresh_round();
    select_answer(&mut m, &mut round, 1).unwrap();
    select_answer(&mut m, &mut round, 8).unwrap();
    select_answer(&mut m, &mut round, 2).unwrap();

    let applied = commit_round_scores(&mut roster, &round).unwrap();

    assert_eq!(applied.len(), 1);
    assert_eq!(applied.get(&2), Some(&10));
    assert_eq!(roster.get(1).unwrap().score, 0);
    assert_eq!(roster.get(2).unwrap().score, 10);
}

#[test]
fn commit_of_all_zero_round_changes_nothing() {
    let mut roster = Roster::with_default_players();
    let (_, round) = fresh_round();
    let before = roster.clone();

    let applied = commit_round_scores(&mut roster, &round).unwrap();

    assert!(applied.is_empty());
    assert_eq!(roster, before);
}

#[test]
fn commit_order_does_not_change_final_totals() {
    // {P1: 10, P2: 0} and {P1: 0, P2: 20} in either order.
    let build = |first_scores: bool| {
        let mut roster = Roster::with_default_players();
        let mut rounds = Vec::new();

        let mut m = Match::new([1, 2]);
        let mut r1 = RoundState::new(QuestionFixtures::standard(1), m.participants());
        select_answer(&mut m, &mut r1, 1).unwrap();
        rounds.push(r1);

        let mut m = Match::new([2, 1]);
        let mut r2 = RoundState::new(QuestionFixtures::standard(2), m.participants());
        select_answer(&mut m, &mut r2, 1).unwrap();
        select_answer(&mut m, &mut r2, 2).unwrap();
        rounds.push(r2);

        if !first_scores {
            rounds.reverse();
        }
        for r in &rounds {
            commit_round_scores(&mut roster, r).unwrap();
        }
        (roster.get(1).unwrap().score, roster.get(2).unwrap().score)
    };

    assert_eq!(build(true), (10, 20));
    assert_eq!(build(false), (10, 20));
}

#[test]
fn commit_accumulates_on_existing_totals() {
    let mut roster = Roster::with_default_players();
    roster.credit(1, 40).unwrap();
    let (mut m, mut round) = fresh_round();
    select_answer(&mut m, &mut round, 3).unwrap();

    commit_round_scores(&mut roster, &round).unwrap();

    assert_eq!(roster.get(1).unwrap().score, 50);
}
