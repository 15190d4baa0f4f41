//! Questions and answers.
//!
//! A `Question` can only be obtained through validation
//! (see [`crate::domain::question_set`]), so every value carries exactly
//! ten answers, seven of them correct, with unique answer ids.

use serde::Serialize;

pub type QuestionId = u32;
pub type AnswerId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub id: AnswerId,
    pub text: String,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    #[serde(rename = "question")]
    text: String,
    answers: Vec<Answer>,
}

impl Question {
    /// Only the validator constructs questions.
    pub(crate) fn new_unchecked(id: QuestionId, text: String, answers: Vec<Answer>) -> Self {
        Self { id, text, answers }
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Answers in their authored order.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn answer(&self, id: AnswerId) -> Option<&Answer> {
        self.answers.iter().find(|a| a.id == id)
    }

    pub fn correct_answers(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter().filter(|a| a.correct)
    }

    pub fn incorrect_answers(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter().filter(|a| !a.correct)
    }
}

/// An ordered, validated collection of questions. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub(crate) fn from_validated(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Export in the exchange format accepted by [`crate::domain::question_set::parse_question_set`].
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
