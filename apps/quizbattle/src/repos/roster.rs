//! Roster persistence seam.

use crate::domain::roster::Roster;
use crate::error::AppError;

/// Storage for the player roster.
///
/// `load` returns `Ok(None)` when nothing has been stored yet. `save`
/// replaces the stored roster as a whole.
pub trait RosterRepo {
    fn load(&self) -> Result<Option<Roster>, AppError>;
    fn save(&self, roster: &Roster) -> Result<(), AppError>;
}
