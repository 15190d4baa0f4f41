//! Public snapshot API for observing controller state without exposing internals.

use serde::Serialize;

use crate::domain::player::PlayerId;
use crate::domain::question::AnswerId;
use crate::domain::roster::Roster;
use crate::domain::round::RoundState;
use crate::domain::state::{Match, Phase};

/// Top-level snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchSnapshot {
    pub phase: Phase,
    pub matches_completed: u32,
    pub questions_loaded: usize,
    pub reset_pending: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<MatchView>,
    pub leaderboard: Vec<Standing>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchView {
    /// 1 or 2.
    pub sub_round: u8,
    pub active: PlayerId,
    pub participants: Vec<ParticipantView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<RoundView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParticipantView {
    pub id: PlayerId,
    pub name: String,
    /// Committed total.
    pub score: u32,
    /// Uncommitted points in the current round.
    pub round_score: u32,
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundView {
    pub question_id: u32,
    pub question: String,
    pub answers: Vec<AnswerView>,
    pub correct_found: usize,
    pub incorrect_found: usize,
    pub all_correct_found: bool,
    pub all_incorrect_found: bool,
    pub end_round_available: bool,
    /// Active player may pass right now.
    pub can_pass: bool,
}

/// Correctness is only revealed once an answer has been picked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnswerView {
    pub id: AnswerId,
    pub text: String,
    pub selected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Standing {
    /// 1-based position.
    pub rank: usize,
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
}

/// Inputs gathered by the controller for [`build_snapshot`].
pub struct SnapshotArgs<'a> {
    pub phase: Phase,
    pub roster: &'a Roster,
    pub current: Option<&'a Match>,
    pub round: Option<&'a RoundState>,
    pub matches_completed: u32,
    pub questions_loaded: usize,
    pub reset_pending: bool,
}

pub fn build_snapshot(args: SnapshotArgs<'_>) -> MatchSnapshot {
    let leaderboard = args
        .roster
        .leaderboard()
        .into_iter()
        .enumerate()
        .map(|(i, p)| Standing {
            rank: i + 1,
            id: p.id,
            name: p.name.clone(),
            score: p.score,
        })
        .collect();

    let current = args
        .current
        .map(|m| match_view(args.roster, m, args.round));

    MatchSnapshot {
        phase: args.phase,
        matches_completed: args.matches_completed,
        questions_loaded: args.questions_loaded,
        reset_pending: args.reset_pending,
        current,
        leaderboard,
    }
}

fn match_view(roster: &Roster, m: &Match, round: Option<&RoundState>) -> MatchView {
    let participants = m
        .participants()
        .iter()
        .map(|&id| {
            let (name, score) = roster
                .get(id)
                .map(|p| (p.name.clone(), p.score))
                .unwrap_or_default();
            ParticipantView {
                id,
                name,
                score,
                round_score: round.map_or(0, |r| r.round_score(id)),
                is_active: id == m.active(),
            }
        })
        .collect();

    MatchView {
        sub_round: m.sub_round().number(),
        active: m.active(),
        participants,
        round: round.map(|r| round_view(m, r)),
    }
}

fn round_view(m: &Match, round: &RoundState) -> RoundView {
    let question = round.question();
    let answers = question
        .answers()
        .iter()
        .map(|a| {
            let selected = round.is_selected(a.id);
            AnswerView {
                id: a.id,
                text: a.text.clone(),
                selected,
                correct: selected.then_some(a.correct),
            }
        })
        .collect();

    RoundView {
        question_id: question.id(),
        question: question.text().to_string(),
        answers,
        correct_found: round.correct_found(),
        incorrect_found: round.incorrect_found(),
        all_correct_found: round.all_correct_found(),
        all_incorrect_found: round.all_incorrect_found(),
        end_round_available: round.end_round_available(),
        can_pass: round.round_score(m.active()) > 0 && !round.end_round_available(),
    }
}
