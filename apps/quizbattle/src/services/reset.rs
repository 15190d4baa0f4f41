//! Two-step confirmation for aborting back to setup.

use std::fmt;
use std::str::FromStr;

use ulid::Ulid;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Single-use token identifying one pending reset request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResetToken(Ulid);

impl ResetToken {
    pub fn generate() -> Self {
        Self(Ulid::new())
    }
}

impl fmt::Display for ResetToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ResetToken {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s.trim()).map(Self).map_err(|e| {
            AppError::invalid(
                ErrorCode::InvalidResetToken,
                format!("not a reset token: {e}"),
            )
        })
    }
}

/// What the caller must confirm before the reset happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetRequest {
    pub token: ResetToken,
    pub description: String,
}
