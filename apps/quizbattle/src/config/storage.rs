use std::env;
use std::path::{Path, PathBuf};

use crate::error::AppError;

pub const DATA_DIR_VAR: &str = "QUIZBATTLE_DATA_DIR";
pub const ROSTER_FILE_VAR: &str = "QUIZBATTLE_ROSTER_FILE";
pub const QUESTIONS_FILE_VAR: &str = "QUIZBATTLE_QUESTIONS_FILE";

/// Where the roster and question set live on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub roster_file: PathBuf,
    pub questions_file: PathBuf,
}

impl StorageConfig {
    /// Default file names under `data_dir`.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            roster_file: PathBuf::from("roster.json"),
            questions_file: PathBuf::from("questions.json"),
        }
    }

    /// Build from `QUIZBATTLE_*` environment variables, with defaults.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            data_dir: PathBuf::from(var_or(DATA_DIR_VAR, "./data")?),
            roster_file: PathBuf::from(var_or(ROSTER_FILE_VAR, "roster.json")?),
            questions_file: PathBuf::from(var_or(QUESTIONS_FILE_VAR, "questions.json")?),
        })
    }

    pub fn roster_path(&self) -> PathBuf {
        resolve(&self.data_dir, &self.roster_file)
    }

    pub fn questions_path(&self) -> PathBuf {
        resolve(&self.data_dir, &self.questions_file)
    }
}

/// Relative file names resolve against the data dir.
fn resolve(data_dir: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        data_dir.join(file)
    }
}

/// Env var value, `default` when unset. Set-but-blank is an error.
pub(crate) fn var_or(name: &str, default: &str) -> Result<String, AppError> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Err(AppError::config(format!(
            "{name} is set but empty"
        ))),
        Ok(value) => Ok(value),
        Err(env::VarError::NotPresent) => Ok(default.to_string()),
        Err(e) => Err(AppError::config(format!("{name}: {e}"))),
    }
}
