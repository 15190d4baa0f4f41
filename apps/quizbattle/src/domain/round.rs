use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::player::PlayerId;
use crate::domain::question::{AnswerId, Question};
use crate::domain::rules::{
    ANSWERS_PER_QUESTION, CORRECT_ANSWERS_PER_QUESTION, INCORRECT_ANSWERS_PER_QUESTION,
    POINTS_PER_CORRECT_ANSWER,
};
use crate::domain::state::Match;
use crate::errors::domain::{DomainError, ValidationKind};

/// Per-sub-round state. Created fresh for each question; round scores are
/// uncommitted until the round ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    question: Question,
    /// Picked answer ids, in pick order.
    selected: Vec<AnswerId>,
    round_scores: BTreeMap<PlayerId, u32>,
}

impl RoundState {
    pub fn new(question: Question, participants: [PlayerId; 2]) -> Self {
        Self {
            question,
            selected: Vec::with_capacity(ANSWERS_PER_QUESTION),
            round_scores: participants.iter().map(|&id| (id, 0)).collect(),
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn selected(&self) -> &[AnswerId] {
        &self.selected
    }

    pub fn is_selected(&self, id: AnswerId) -> bool {
        self.selected.contains(&id)
    }

    pub fn round_score(&self, id: PlayerId) -> u32 {
        self.round_scores.get(&id).copied().unwrap_or(0)
    }

    pub fn round_scores(&self) -> &BTreeMap<PlayerId, u32> {
        &self.round_scores
    }

    pub fn correct_found(&self) -> usize {
        self.count_selected(true)
    }

    pub fn incorrect_found(&self) -> usize {
        self.count_selected(false)
    }

    pub fn all_correct_found(&self) -> bool {
        self.correct_found() == CORRECT_ANSWERS_PER_QUESTION
    }

    pub fn all_incorrect_found(&self) -> bool {
        self.incorrect_found() == INCORRECT_ANSWERS_PER_QUESTION
    }

    /// True once every correct or every incorrect answer has been picked.
    /// Nothing ends the round automatically; this only unlocks `end_round`.
    pub fn end_round_available(&self) -> bool {
        self.all_correct_found() || self.all_incorrect_found()
    }

    fn count_selected(&self, correct: bool) -> usize {
        self.selected
            .iter()
            .filter_map(|id| self.question.answer(*id))
            .filter(|a| a.correct == correct)
            .count()
    }
}

/// What a single pick did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOutcome {
    pub answer_id: AnswerId,
    /// The pick had already been made; nothing changed.
    pub already_selected: bool,
    pub correct: bool,
    /// Player who made the pick.
    pub picked_by: PlayerId,
    pub points_awarded: u32,
    /// Picker's round score after the pick.
    pub round_score_after: u32,
    pub turn_switched: bool,
    pub active_after: PlayerId,
    pub round_end_available: bool,
}

/// Apply a pick for the active player.
///
/// A correct pick adds ten points to the picker's round score. An incorrect
/// pick wipes the picker's round score and hands the turn over.
/// Re-picking an answer is a no-op.
pub fn select_answer(
    current: &mut Match,
    round: &mut RoundState,
    answer_id: AnswerId,
) -> Result<AnswerOutcome, DomainError> {
    let picker = current.active();

    if round.is_selected(answer_id) {
        let correct = round
            .question
            .answer(answer_id)
            .map(|a| a.correct)
            .unwrap_or(false);
        return Ok(AnswerOutcome {
            answer_id,
            already_selected: true,
            correct,
            picked_by: picker,
            points_awarded: 0,
            round_score_after: round.round_score(picker),
            turn_switched: false,
            active_after: picker,
            round_end_available: round.end_round_available(),
        });
    }

    let correct = round
        .question
        .answer(answer_id)
        .map(|a| a.correct)
        .ok_or_else(|| {
            DomainError::validation(
                ValidationKind::UnknownAnswer,
                format!(
                    "Answer {answer_id} is not part of question {}",
                    round.question.id()
                ),
            )
        })?;

    if round.end_round_available() {
        return Err(DomainError::validation(
            ValidationKind::RoundAlreadyDecided,
            "Round is decided; end the round to continue",
        ));
    }

    round.selected.push(answer_id);

    let score = round.round_scores.entry(picker).or_insert(0);
    let (points_awarded, turn_switched) = if correct {
        *score += POINTS_PER_CORRECT_ANSWER;
        (POINTS_PER_CORRECT_ANSWER, false)
    } else {
        *score = 0;
        current.switch_active();
        (0, true)
    };
    let round_score_after = *score;

    Ok(AnswerOutcome {
        answer_id,
        already_selected: false,
        correct,
        picked_by: picker,
        points_awarded,
        round_score_after,
        turn_switched,
        active_after: current.active(),
        round_end_available: round.end_round_available(),
    })
}

/// Pass the turn without banking anything.
///
/// Only allowed while the active player holds a positive round score and the
/// round is still open; otherwise nothing happens and `None` is returned.
pub fn pass_turn(current: &mut Match, round: &RoundState) -> Option<PlayerId> {
    if round.round_score(current.active()) == 0 || round.end_round_available() {
        return None;
    }
    Some(current.switch_active())
}
