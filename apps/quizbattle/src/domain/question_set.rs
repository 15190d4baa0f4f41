//! Question set exchange format: strict parsing and aggregated validation.
//!
//! The exchange format is a JSON array of
//! `{ "id": int, "question": string, "answers": [{ "id": int, "text": string, "correct": bool }] }`.
//! Every element is checked and every problem is reported; a set with any
//! problem is rejected as a whole.

use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Deserialize;
use serde_json::Value;

use crate::domain::question::{Answer, AnswerId, Question, QuestionId, QuestionSet};
use crate::domain::rules::{ANSWERS_PER_QUESTION, CORRECT_ANSWERS_PER_QUESTION};
use crate::errors::domain::{DomainError, ValidationKind};

/// Wire shape of one question.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionRecord {
    pub id: QuestionId,
    pub question: String,
    pub answers: Vec<AnswerRecord>,
}

/// Wire shape of one answer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswerRecord {
    pub id: AnswerId,
    pub text: String,
    pub correct: bool,
}

/// One problem found while validating a question set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionIssue {
    /// Position in the imported array; `None` for problems with the document itself.
    pub index: Option<usize>,
    pub question_id: Option<QuestionId>,
    pub problem: String,
}

impl QuestionIssue {
    fn document(problem: impl Into<String>) -> Self {
        Self {
            index: None,
            question_id: None,
            problem: problem.into(),
        }
    }

    fn at(index: usize, question_id: Option<QuestionId>, problem: impl Into<String>) -> Self {
        Self {
            index: Some(index),
            question_id,
            problem: problem.into(),
        }
    }
}

impl Display for QuestionIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match (self.index, self.question_id) {
            (Some(i), Some(id)) => write!(f, "question #{i} (id {id}): {}", self.problem),
            (Some(i), None) => write!(f, "question #{i}: {}", self.problem),
            _ => write!(f, "{}", self.problem),
        }
    }
}

/// Parse and validate a question set, collecting every issue.
pub fn validate_question_set(json: &str) -> Result<QuestionSet, Vec<QuestionIssue>> {
    let document: Value = serde_json::from_str(json)
        .map_err(|e| vec![QuestionIssue::document(format!("not valid JSON: {e}"))])?;

    let Value::Array(items) = document else {
        return Err(vec![QuestionIssue::document(
            "top-level value must be an array of questions",
        )]);
    };

    let mut issues = Vec::new();
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let id_hint = item
            .get("id")
            .and_then(Value::as_u64)
            .and_then(|id| QuestionId::try_from(id).ok());
        match serde_json::from_value::<QuestionRecord>(item) {
            Ok(record) => records.push((index, record)),
            Err(e) => issues.push(QuestionIssue::at(index, id_hint, format!("bad shape: {e}"))),
        }
    }

    // Shape errors already recorded; still check what did parse so the
    // report covers the whole document.
    match validate_indexed(records) {
        Ok(set) if issues.is_empty() => Ok(set),
        Ok(_) => Err(issues),
        Err(mut more) => {
            issues.append(&mut more);
            Err(issues)
        }
    }
}

/// Parse a question set, mapping any issues to one `MalformedQuestionSet` error.
pub fn parse_question_set(json: &str) -> Result<QuestionSet, DomainError> {
    validate_question_set(json).map_err(issues_to_error)
}

fn validate_indexed(
    records: Vec<(usize, QuestionRecord)>,
) -> Result<QuestionSet, Vec<QuestionIssue>> {
    let mut issues = Vec::new();
    let mut seen_ids = HashSet::new();

    for (index, record) in &records {
        let index = *index;
        if !seen_ids.insert(record.id) {
            issues.push(QuestionIssue::at(
                index,
                Some(record.id),
                "duplicate question id",
            ));
        }
        issues.extend(check_record(index, record));
    }

    if !issues.is_empty() {
        return Err(issues);
    }

    let questions = records
        .into_iter()
        .map(|(_, record)| {
            let answers = record
                .answers
                .into_iter()
                .map(|a| Answer {
                    id: a.id,
                    text: a.text,
                    correct: a.correct,
                })
                .collect();
            Question::new_unchecked(record.id, record.question, answers)
        })
        .collect();

    Ok(QuestionSet::from_validated(questions))
}

fn check_record(index: usize, record: &QuestionRecord) -> Vec<QuestionIssue> {
    let mut issues = Vec::new();
    let id = Some(record.id);

    if record.question.trim().is_empty() {
        issues.push(QuestionIssue::at(index, id, "question text is empty"));
    }

    if record.answers.len() != ANSWERS_PER_QUESTION {
        issues.push(QuestionIssue::at(
            index,
            id,
            format!(
                "expected exactly {ANSWERS_PER_QUESTION} answers, found {}",
                record.answers.len()
            ),
        ));
    }

    let correct = record.answers.iter().filter(|a| a.correct).count();
    if correct != CORRECT_ANSWERS_PER_QUESTION {
        issues.push(QuestionIssue::at(
            index,
            id,
            format!("expected exactly {CORRECT_ANSWERS_PER_QUESTION} correct answers, found {correct}"),
        ));
    }

    let mut answer_ids = HashSet::new();
    for answer in &record.answers {
        if !answer_ids.insert(answer.id) {
            issues.push(QuestionIssue::at(
                index,
                id,
                format!("duplicate answer id {}", answer.id),
            ));
        }
    }

    issues
}

fn issues_to_error(issues: Vec<QuestionIssue>) -> DomainError {
    let listed = issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    DomainError::validation(
        ValidationKind::MalformedQuestionSet,
        format!("question set rejected with {} problem(s): {listed}", issues.len()),
    )
}
