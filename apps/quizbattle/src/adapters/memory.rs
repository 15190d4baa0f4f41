//! In-memory repositories for tests and embedding.
//!
//! Clones share state, so a test can keep a handle to inspect what the
//! service saved.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::question::QuestionSet;
use crate::domain::roster::Roster;
use crate::error::AppError;
use crate::repos::questions::QuestionRepo;
use crate::repos::roster::RosterRepo;

#[derive(Debug, Default)]
struct RosterSlot {
    stored: Option<Roster>,
    saves: usize,
    fail_saves: bool,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryRosterRepo {
    inner: Arc<Mutex<RosterSlot>>,
}

impl InMemoryRosterRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roster(roster: Roster) -> Self {
        let repo = Self::new();
        repo.inner.lock().stored = Some(roster);
        repo
    }

    /// Make every following save fail with a storage error (or succeed again).
    pub fn set_fail_saves(&self, fail: bool) {
        self.inner.lock().fail_saves = fail;
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.inner.lock().saves
    }

    pub fn stored(&self) -> Option<Roster> {
        self.inner.lock().stored.clone()
    }
}

impl RosterRepo for InMemoryRosterRepo {
    fn load(&self) -> Result<Option<Roster>, AppError> {
        Ok(self.inner.lock().stored.clone())
    }

    fn save(&self, roster: &Roster) -> Result<(), AppError> {
        let mut slot = self.inner.lock();
        if slot.fail_saves {
            return Err(AppError::storage("in-memory roster save disabled"));
        }
        slot.stored = Some(roster.clone());
        slot.saves += 1;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionRepo {
    inner: Arc<Mutex<Option<QuestionSet>>>,
}

impl InMemoryQuestionRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_set(set: QuestionSet) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(set))),
        }
    }

    pub fn stored(&self) -> Option<QuestionSet> {
        self.inner.lock().clone()
    }
}

impl QuestionRepo for InMemoryQuestionRepo {
    fn load(&self) -> Result<Option<QuestionSet>, AppError> {
        Ok(self.inner.lock().clone())
    }

    fn save(&self, set: &QuestionSet) -> Result<(), AppError> {
        *self.inner.lock() = Some(set.clone());
        Ok(())
    }
}
