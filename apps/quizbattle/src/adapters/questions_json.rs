//! Question set stored in the exchange format.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::adapters::json_file;
use crate::domain::question::QuestionSet;
use crate::domain::question_set::parse_question_set;
use crate::error::AppError;
use crate::repos::questions::QuestionRepo;

/// JSON file backed [`QuestionRepo`]. Loads are validated like imports.
#[derive(Debug, Clone)]
pub struct JsonQuestionStore {
    path: PathBuf,
}

impl JsonQuestionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuestionRepo for JsonQuestionStore {
    fn load(&self) -> Result<Option<QuestionSet>, AppError> {
        let Some(contents) = json_file::read_optional(&self.path)? else {
            return Ok(None);
        };

        let set = parse_question_set(&contents).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "stored question set rejected");
            AppError::from(e)
        })?;
        info!(path = %self.path.display(), questions = set.len(), "question set loaded");
        Ok(Some(set))
    }

    fn save(&self, set: &QuestionSet) -> Result<(), AppError> {
        let json = set.to_json_pretty()?;
        json_file::write_atomic(&self.path, &json)
    }
}
