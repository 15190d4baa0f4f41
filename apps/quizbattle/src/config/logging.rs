use std::str::FromStr;

use crate::config::storage::var_or;
use crate::error::AppError;

pub const LOG_FORMAT_VAR: &str = "QUIZBATTLE_LOG_FORMAT";

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,quizbattle=debug";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Compact,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            other => Err(AppError::config(format!(
                "{LOG_FORMAT_VAR} must be 'json' or 'compact', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let format = var_or(LOG_FORMAT_VAR, "json")?.parse()?;
        Ok(Self { format })
    }
}
