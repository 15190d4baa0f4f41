//! Domain-level error type used across services and adapters.
//!
//! This error type is I/O- and storage-agnostic. Services return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Rule and input violations raised by the pure domain layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Match selection was not exactly two distinct, existing players.
    InvalidSelection,
    /// Roster is too small to start a match.
    InvalidMatchSize,
    /// Imported question set failed shape or answer-count validation.
    MalformedQuestionSet,
    /// Answer id does not belong to the current question.
    UnknownAnswer,
    /// A new pick was attempted after the round was decided.
    RoundAlreadyDecided,
    /// Operation is not valid in the current phase.
    PhaseMismatch,
    /// Reset confirmation did not match the pending request.
    InvalidResetToken,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    /// The question source is empty.
    Questions,
    Player,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or game rule violation
    Validation(ValidationKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    pub fn no_questions() -> Self {
        Self::not_found(NotFoundKind::Questions, "No questions available")
    }

    pub fn phase_mismatch(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::PhaseMismatch, detail)
    }

    pub fn is_validation(&self, kind: &ValidationKind) -> bool {
        matches!(self, DomainError::Validation(k, _) if k == kind)
    }

    pub fn is_not_found(&self, kind: &NotFoundKind) -> bool {
        matches!(self, DomainError::NotFound(k, _) if k == kind)
    }
}
