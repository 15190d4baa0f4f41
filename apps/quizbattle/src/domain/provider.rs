//! Question sequencing.
//!
//! The controller only talks to the [`QuestionProvider`] trait. The cursor
//! keeps its position across matches; only `replace` and `rewind` move it
//! back to the start.

use tracing::debug;

use crate::domain::question::{Answer, Question, QuestionSet};
use crate::errors::domain::DomainError;

pub trait QuestionProvider {
    /// Question at the cursor; advances the cursor, wrapping after the last one.
    fn next_question(&mut self) -> Result<Question, DomainError>;

    /// Swap in a new, already validated set and reset the cursor.
    fn replace(&mut self, set: QuestionSet);

    fn rewind(&mut self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory question sequence with a circular cursor.
#[derive(Debug, Clone, Default)]
pub struct QuestionDeck {
    set: QuestionSet,
    cursor: usize,
}

impl QuestionDeck {
    pub fn new(set: QuestionSet) -> Self {
        Self { set, cursor: 0 }
    }

    /// Deck seeded with the built-in questions.
    pub fn sample() -> Self {
        Self::new(sample_questions())
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn question_set(&self) -> &QuestionSet {
        &self.set
    }
}

impl QuestionProvider for QuestionDeck {
    fn next_question(&mut self) -> Result<Question, DomainError> {
        let question = self
            .set
            .get(self.cursor)
            .cloned()
            .ok_or_else(DomainError::no_questions)?;
        self.cursor = (self.cursor + 1) % self.set.len();
        debug!(question_id = question.id(), next_cursor = self.cursor, "Drew question");
        Ok(question)
    }

    fn replace(&mut self, set: QuestionSet) {
        self.set = set;
        self.cursor = 0;
    }

    fn rewind(&mut self) {
        self.cursor = 0;
    }

    fn len(&self) -> usize {
        self.set.len()
    }
}

fn question(id: u32, text: &str, correct: [&str; 7], incorrect: [&str; 3]) -> Question {
    let answers = correct
        .iter()
        .map(|t| (t, true))
        .chain(incorrect.iter().map(|t| (t, false)))
        .zip(1u32..)
        .map(|((text, correct), id)| Answer {
            id,
            text: (*text).to_string(),
            correct,
        })
        .collect();
    Question::new_unchecked(id, text.to_string(), answers)
}

/// The two questions shipped with the game.
pub fn sample_questions() -> QuestionSet {
    QuestionSet::from_validated(vec![
        question(
            1,
            "Which of these are planets in our solar system?",
            ["Mercury", "Venus", "Earth", "Jupiter", "Saturn", "Neptune", "Uranus"],
            ["Pluto", "Ceres", "Eris"],
        ),
        question(
            2,
            "Which of these are prime numbers?",
            ["2", "3", "5", "7", "11", "13", "17"],
            ["9", "15", "21"],
        ),
    ])
}
