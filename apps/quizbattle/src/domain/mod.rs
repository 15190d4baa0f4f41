//! Domain layer: pure game logic types and helpers.

pub mod player;
pub mod provider;
pub mod question;
pub mod question_set;
pub mod roster;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_roster;
#[cfg(test)]
mod tests_round;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use player::{Player, PlayerId};
pub use provider::{sample_questions, QuestionDeck, QuestionProvider};
pub use question::{Answer, AnswerId, Question, QuestionId, QuestionSet};
pub use question_set::{parse_question_set, validate_question_set, QuestionIssue};
pub use roster::Roster;
pub use round::{pass_turn, select_answer, AnswerOutcome, RoundState};
pub use scoring::{commit_round_scores, RoundCommit};
pub use snapshot::MatchSnapshot;
pub use state::{Match, Phase, SubRound};
