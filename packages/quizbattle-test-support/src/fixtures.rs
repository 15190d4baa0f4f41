//! Question-set JSON builders in the exchange format.

use serde_json::{json, Value};

/// A valid question: answers 1-7 correct, 8-10 incorrect.
pub fn standard_question(id: u32) -> Value {
    question_with_correct(id, 7)
}

/// A question whose first `correct` answers (of 10) are correct.
pub fn question_with_correct(id: u32, correct: u32) -> Value {
    let answers: Vec<Value> = (1..=10u32)
        .map(|a| json!({ "id": a, "text": format!("Answer {a}"), "correct": a <= correct }))
        .collect();
    json!({ "id": id, "question": format!("Question {id}"), "answers": answers })
}

/// JSON document holding one valid question per id.
pub fn question_set_json(ids: &[u32]) -> String {
    Value::Array(ids.iter().map(|&id| standard_question(id)).collect()).to_string()
}
