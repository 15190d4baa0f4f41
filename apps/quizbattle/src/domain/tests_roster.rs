use crate::domain::roster::Roster;
use crate::errors::domain::{NotFoundKind, ValidationKind};

#[test]
fn default_roster_has_two_named_players() {
    let roster = Roster::with_default_players();
    let names: Vec<&str> = roster.players().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Player 1", "Player 2"]);
    assert!(roster.players().iter().all(|p| p.score == 0));
}

#[test]
fn add_player_uses_max_id_plus_one() {
    let mut roster = Roster::with_default_players();
    roster.remove_player(1);

    let added = roster.add_player();

    assert_eq!(added.id, 3);
    assert_eq!(added.name, "Player 3");
}

#[test]
fn add_player_on_empty_roster_starts_at_one() {
    let mut roster = Roster::new();
    assert_eq!(roster.add_player().id, 1);
}

#[test]
fn removing_the_highest_id_frees_it_for_reuse() {
    let mut roster = Roster::with_default_players();
    roster.add_player(); // 3
    roster.remove_player(3);
    assert_eq!(roster.add_player().id, 3);
}

#[test]
fn rename_accepts_blank_names() {
    let mut roster = Roster::with_default_players();
    assert!(roster.rename_player(1, ""));
    assert_eq!(roster.get(1).unwrap().name, "");
}

#[test]
fn rename_unknown_player_is_a_noop() {
    let mut roster = Roster::with_default_players();
    let before = roster.clone();
    assert!(!roster.rename_player(99, "Ghost"));
    assert_eq!(roster, before);
}

#[test]
fn remove_absent_player_is_a_noop() {
    let mut roster = Roster::with_default_players();
    assert!(!roster.remove_player(99));
    assert_eq!(roster.len(), 2);
}

#[test]
fn reset_all_scores_zeroes_everyone() {
    let mut roster = Roster::with_default_players();
    roster.credit(1, 30).unwrap();
    roster.credit(2, 10).unwrap();

    roster.reset_all_scores();

    assert!(roster.players().iter().all(|p| p.score == 0));
}

#[test]
fn select_for_match_keeps_given_order() {
    let roster = Roster::with_default_players();
    let [first, second] = roster.select_for_match(&[2, 1]).unwrap();
    assert_eq!((first.id, second.id), (2, 1));
}

#[test]
fn select_for_match_rejects_duplicates() {
    let roster = Roster::with_default_players();
    let err = roster.select_for_match(&[1, 1]).unwrap_err();
    assert!(err.is_validation(&ValidationKind::InvalidSelection));
}

#[test]
fn select_for_match_rejects_wrong_counts() {
    let mut roster = Roster::with_default_players();
    roster.add_player();
    for ids in [&[][..], &[1][..], &[1, 2, 3][..]] {
        let err = roster.select_for_match(ids).unwrap_err();
        assert!(err.is_validation(&ValidationKind::InvalidSelection));
    }
}

#[test]
fn select_for_match_rejects_unknown_players() {
    let roster = Roster::with_default_players();
    let err = roster.select_for_match(&[1, 7]).unwrap_err();
    assert!(err.is_validation(&ValidationKind::InvalidSelection));
}

#[test]
fn credit_unknown_player_is_not_found() {
    let mut roster = Roster::with_default_players();
    let err = roster.credit(42, 10).unwrap_err();
    assert!(err.is_not_found(&NotFoundKind::Player));
}

#[test]
fn leaderboard_sorts_by_score_and_keeps_ties_stable() {
    let mut roster = Roster::with_default_players();
    roster.add_player();
    roster.credit(3, 20).unwrap();

    let order: Vec<u32> = roster.leaderboard().iter().map(|p| p.id).collect();

    assert_eq!(order, [3, 1, 2]);
}
