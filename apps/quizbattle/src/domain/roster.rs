//! The roster: every known player and their cumulative score.

use std::collections::HashSet;

use crate::domain::player::{Player, PlayerId};
use crate::domain::rules::{DEFAULT_PLAYER_COUNT, MATCH_PARTICIPANTS};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roster used when nothing has been stored yet.
    pub fn with_default_players() -> Self {
        let mut roster = Self::new();
        for _ in 0..DEFAULT_PLAYER_COUNT {
            roster.add_player();
        }
        roster
    }

    /// Build from already-known players, keeping their order.
    pub fn from_players(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Append a player with id `max + 1` (or 1 on an empty roster).
    pub fn add_player(&mut self) -> &Player {
        let id = self.players.iter().map(|p| p.id).max().map_or(1, |max| max + 1);
        self.players.push(Player::new(id));
        &self.players[self.players.len() - 1]
    }

    /// Set a player's name. Blank names are accepted as-is.
    ///
    /// Returns `false` when no player has `id`.
    pub fn rename_player(&mut self, id: PlayerId, name: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(player) => {
                player.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Remove a player; absent ids are ignored. Returns whether anything was removed.
    pub fn remove_player(&mut self, id: PlayerId) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.id != id);
        self.players.len() != before
    }

    pub fn reset_all_scores(&mut self) {
        for player in &mut self.players {
            player.score = 0;
        }
    }

    /// Validate a match selection and return the players in the given order.
    ///
    /// The first player becomes the active player of sub-round 1.
    pub fn select_for_match(&self, ids: &[PlayerId]) -> Result<[&Player; 2], DomainError> {
        if ids.len() != MATCH_PARTICIPANTS {
            return Err(DomainError::validation(
                ValidationKind::InvalidSelection,
                format!(
                    "Select exactly {MATCH_PARTICIPANTS} players, got {}",
                    ids.len()
                ),
            ));
        }

        let distinct: HashSet<PlayerId> = ids.iter().copied().collect();
        if distinct.len() != ids.len() {
            return Err(DomainError::validation(
                ValidationKind::InvalidSelection,
                format!("Player {} selected twice", ids[0]),
            ));
        }

        let lookup = |id: PlayerId| {
            self.get(id).ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::InvalidSelection,
                    format!("Player {id} is not on the roster"),
                )
            })
        };

        Ok([lookup(ids[0])?, lookup(ids[1])?])
    }

    /// Add committed round points to a player's total.
    pub fn credit(&mut self, id: PlayerId, points: u32) -> Result<u32, DomainError> {
        let player = self.get_mut(id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Player, format!("Player {id} not found"))
        })?;
        player.score = player.score.saturating_add(points);
        Ok(player.score)
    }

    /// Players ordered by score, highest first; ties keep roster order.
    pub fn leaderboard(&self) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }
}
