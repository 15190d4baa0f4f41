//! Wiring of the file-backed controller.

use tracing::info;

use crate::adapters::questions_json::JsonQuestionStore;
use crate::adapters::roster_json::JsonRosterStore;
use crate::config::storage::StorageConfig;
use crate::domain::provider::{sample_questions, QuestionDeck};
use crate::error::AppError;
use crate::repos::questions::QuestionRepo;
use crate::repos::roster::RosterRepo;
use crate::services::match_flow::MatchController;
use crate::services::roster::RosterService;

pub type FileMatchController = MatchController<JsonRosterStore, QuestionDeck>;

/// Controller over the JSON stores in `config`.
pub fn open_controller(config: &StorageConfig) -> Result<FileMatchController, AppError> {
    info!(data_dir = %config.data_dir.display(), "opening file stores");
    open_controller_with(
        JsonRosterStore::new(config.roster_path()),
        &JsonQuestionStore::new(config.questions_path()),
    )
}

/// Controller over any pair of repositories.
///
/// Uses the stored question set if there is one, otherwise the built-in
/// sample questions. Nothing is written back on open.
pub fn open_controller_with<R: RosterRepo, Q: QuestionRepo>(
    roster_repo: R,
    questions: &Q,
) -> Result<MatchController<R, QuestionDeck>, AppError> {
    let roster = RosterService::load(roster_repo)?;

    let set = match questions.load()? {
        Some(set) => set,
        None => {
            info!("no stored questions, using samples");
            sample_questions()
        }
    };

    info!(
        players = roster.roster().len(),
        questions = set.len(),
        "controller ready"
    );
    Ok(MatchController::new(roster, QuestionDeck::new(set)))
}

/// Persist the controller's current question set to the JSON store in `config`.
pub fn save_questions<R: RosterRepo>(
    config: &StorageConfig,
    controller: &MatchController<R, QuestionDeck>,
) -> Result<(), AppError> {
    store_questions(&JsonQuestionStore::new(config.questions_path()), controller)
}

/// Persist the controller's current question set to `questions`.
pub fn store_questions<R: RosterRepo, Q: QuestionRepo>(
    questions: &Q,
    controller: &MatchController<R, QuestionDeck>,
) -> Result<(), AppError> {
    let set = controller.provider().question_set();
    questions.save(set)?;
    info!(questions = set.len(), "question set saved");
    Ok(())
}
