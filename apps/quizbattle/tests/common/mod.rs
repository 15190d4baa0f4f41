#![allow(dead_code)]

pub mod proptest_prelude;

use quizbattle::domain::parse_question_set;
use quizbattle::domain::provider::QuestionDeck;
use quizbattle::{InMemoryRosterRepo, MatchController, RosterService};
use quizbattle_test_support::fixtures::question_set_json;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    quizbattle_test_support::logging::init();
}

pub type MemoryController = MatchController<InMemoryRosterRepo, QuestionDeck>;

/// Deck of standard questions (answers 1-7 correct, 8-10 incorrect).
pub fn deck(ids: &[u32]) -> QuestionDeck {
    let set = parse_question_set(&question_set_json(ids)).expect("fixture set is valid");
    QuestionDeck::new(set)
}

/// Controller over an in-memory roster with the two default players and
/// questions with the given ids. The repo handle shares state with the
/// controller's copy.
pub fn controller_with_questions(ids: &[u32]) -> (MemoryController, InMemoryRosterRepo) {
    let repo = InMemoryRosterRepo::new();
    let roster = RosterService::load(repo.clone()).expect("in-memory load");
    (MatchController::new(roster, deck(ids)), repo)
}

/// Controller already in `InRound` for players 1 and 2.
pub fn controller_in_round() -> (MemoryController, InMemoryRosterRepo) {
    let (mut ctl, repo) = controller_with_questions(&[1, 2, 3]);
    ctl.start_match().expect("start");
    ctl.begin_match(&[1, 2]).expect("begin");
    (ctl, repo)
}

/// Pick every incorrect answer so the round becomes decided.
pub fn exhaust_incorrect(ctl: &mut MemoryController) {
    for id in [8, 9, 10] {
        ctl.select_answer(id).expect("pick");
    }
}

pub fn total(ctl: &MemoryController, id: u32) -> u32 {
    ctl.roster()
        .roster()
        .get(id)
        .map(|p| p.score)
        .expect("player exists")
}

/// The opponent misses every incorrect answer while the active player keeps
/// passing, so the active player's round score survives and the round ends
/// decided. Needs a positive round score for the active player.
pub fn close_keeping_active_score(ctl: &mut MemoryController) {
    for id in [8, 9, 10] {
        assert!(ctl.pass_turn().expect("pass"), "pass should switch the turn");
        ctl.select_answer(id).expect("pick");
    }
}

/// Active player banks 10, then the round closes with that score intact.
pub fn bank_ten_and_close(ctl: &mut MemoryController) {
    ctl.select_answer(1).expect("pick");
    close_keeping_active_score(ctl);
}
