use crate::domain::question::QuestionSet;
use crate::error::AppError;

/// Storage for the imported question set.
pub trait QuestionRepo {
    /// Stored set, validated. `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<QuestionSet>, AppError>;
    fn save(&self, set: &QuestionSet) -> Result<(), AppError>;
}
