use super::question::{Answer, AnswerId, Question};
use super::state::Match;
use super::round::RoundState;

/// Answer ids 1..=7 are correct, 8..=10 are incorrect.
pub const CORRECT_IDS: [AnswerId; 7] = [1, 2, 3, 4, 5, 6, 7];
pub const INCORRECT_IDS: [AnswerId; 3] = [8, 9, 10];

/// Centralized builders for hardcoded questions in unit tests.
pub struct QuestionFixtures;

impl QuestionFixtures {
    /// A valid question laid out as `A1..A7` correct and `A8..A10` incorrect.
    pub fn standard(id: u32) -> Question {
        let answers = (1..=10)
            .map(|answer_id| Answer {
                id: answer_id,
                text: format!("A{answer_id}"),
                correct: answer_id <= 7,
            })
            .collect();
        Question::new_unchecked(id, format!("Question {id}"), answers)
    }

    /// The same question serialized in the exchange format.
    pub fn standard_record_json(id: u32) -> serde_json::Value {
        serde_json::to_value(Self::standard(id)).expect("fixture question serializes")
    }
}

/// Match between players 1 and 2 (1 starts) with a fresh standard round.
pub fn fresh_round() -> (Match, RoundState) {
    let m = Match::new([1, 2]);
    let round = RoundState::new(QuestionFixtures::standard(1), m.participants());
    (m, round)
}
