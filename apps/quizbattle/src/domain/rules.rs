use crate::domain::player::PlayerId;

/// Every question offers exactly this many answers.
pub const ANSWERS_PER_QUESTION: usize = 10;
pub const CORRECT_ANSWERS_PER_QUESTION: usize = 7;
pub const INCORRECT_ANSWERS_PER_QUESTION: usize = ANSWERS_PER_QUESTION - CORRECT_ANSWERS_PER_QUESTION;

/// Flat award for each correct pick; there is no other scoring formula.
pub const POINTS_PER_CORRECT_ANSWER: u32 = 10;

pub const MATCH_PARTICIPANTS: usize = 2;

/// Players seeded into an empty, never-saved roster.
pub const DEFAULT_PLAYER_COUNT: usize = 2;

pub fn default_player_name(id: PlayerId) -> String {
    format!("Player {id}")
}
