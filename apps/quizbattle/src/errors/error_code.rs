//! Error codes for the Quiz Battle engine.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and are the strings a host
//! application shows or matches on.

use core::fmt;

/// Centralized error codes for the Quiz Battle engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Match setup
    /// Selection was not exactly two distinct, existing players
    InvalidSelection,
    /// Roster has fewer players than a match needs
    InvalidMatchSize,

    // Round play
    /// Answer id is not part of the current question
    UnknownAnswer,
    /// A pick was attempted after the round was decided
    RoundAlreadyDecided,
    /// Operation is not valid in the current phase
    PhaseMismatch,
    /// Reset confirmation did not match the pending request
    InvalidResetToken,
    /// General validation error
    ValidationError,

    // Question data
    /// Imported question set failed validation
    MalformedQuestionSet,
    /// Question source is empty
    NoQuestionsAvailable,

    // Resource Not Found
    /// Player not found
    PlayerNotFound,
    /// General not found error
    NotFound,

    // System Errors
    StorageError,
    StoreBusy,
    ConfigError,
    Internal,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Match setup
            Self::InvalidSelection => "INVALID_SELECTION",
            Self::InvalidMatchSize => "INVALID_MATCH_SIZE",

            // Round play
            Self::UnknownAnswer => "UNKNOWN_ANSWER",
            Self::RoundAlreadyDecided => "ROUND_ALREADY_DECIDED",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::InvalidResetToken => "INVALID_RESET_TOKEN",
            Self::ValidationError => "VALIDATION_ERROR",

            // Question data
            Self::MalformedQuestionSet => "MALFORMED_QUESTION_SET",
            Self::NoQuestionsAvailable => "NO_QUESTIONS_AVAILABLE",

            // Resource Not Found
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            // System Errors
            Self::StorageError => "STORAGE_ERROR",
            Self::StoreBusy => "STORE_BUSY",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
