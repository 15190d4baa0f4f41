//! Roster domain service.

use tracing::{debug, info};

use crate::domain::player::{Player, PlayerId};
use crate::domain::roster::Roster;
use crate::domain::round::RoundState;
use crate::domain::scoring::{commit_round_scores, RoundCommit};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::repos::roster::RosterRepo;

/// Owns the live roster and persists it after every mutation.
///
/// Mutations run against a clone that is only swapped in once the save
/// succeeded, so a failed save leaves the roster exactly as it was.
pub struct RosterService<R: RosterRepo> {
    repo: R,
    roster: Roster,
}

impl<R: RosterRepo> RosterService<R> {
    pub fn new(repo: R, roster: Roster) -> Self {
        Self { repo, roster }
    }

    /// Start from the stored roster, or the two default players if none is stored.
    pub fn load(repo: R) -> Result<Self, AppError> {
        let roster = match repo.load()? {
            Some(roster) => roster,
            None => {
                info!("no stored roster, starting with default players");
                Roster::with_default_players()
            }
        };
        Ok(Self::new(repo, roster))
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    fn mutate<T>(
        &mut self,
        f: impl FnOnce(&mut Roster) -> Result<T, DomainError>,
    ) -> Result<T, AppError> {
        let mut next = self.roster.clone();
        let out = f(&mut next)?;
        self.repo.save(&next)?;
        self.roster = next;
        Ok(out)
    }

    pub fn add_player(&mut self) -> Result<Player, AppError> {
        let player = self.mutate(|r| Ok(r.add_player().clone()))?;
        info!(player_id = player.id, "player added");
        Ok(player)
    }

    /// Returns `false` (and saves nothing) for an unknown id.
    pub fn rename_player(&mut self, id: PlayerId, name: impl Into<String>) -> Result<bool, AppError> {
        if self.roster.get(id).is_none() {
            return Ok(false);
        }
        let name = name.into();
        self.mutate(|r| Ok(r.rename_player(id, name)))?;
        debug!(player_id = id, "player renamed");
        Ok(true)
    }

    /// Returns `false` (and saves nothing) for an unknown id.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<bool, AppError> {
        if self.roster.get(id).is_none() {
            return Ok(false);
        }
        self.mutate(|r| Ok(r.remove_player(id)))?;
        info!(player_id = id, "player removed");
        Ok(true)
    }

    pub fn reset_all_scores(&mut self) -> Result<(), AppError> {
        self.mutate(|r| {
            r.reset_all_scores();
            Ok(())
        })?;
        info!(players = self.roster.len(), "all scores reset");
        Ok(())
    }

    /// Bank the positive round scores into the totals with a single save.
    pub fn commit_round(&mut self, round: &RoundState) -> Result<RoundCommit, AppError> {
        let applied = self.mutate(|r| commit_round_scores(r, round))?;
        for (player_id, points) in &applied {
            info!(player_id, points, "round score committed");
        }
        Ok(applied)
    }
}
