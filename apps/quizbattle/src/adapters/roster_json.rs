//! Roster stored as `{"players": {"<id>": {"name": ..., "score": ...}}}`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::adapters::json_file;
use crate::domain::player::{Player, PlayerId};
use crate::domain::roster::Roster;
use crate::error::AppError;
use crate::repos::roster::RosterRepo;

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RosterDocument {
    players: BTreeMap<PlayerId, PlayerRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlayerRecord {
    name: String,
    score: u32,
}

impl From<&Roster> for RosterDocument {
    fn from(roster: &Roster) -> Self {
        let players = roster
            .players()
            .iter()
            .map(|p| {
                (
                    p.id,
                    PlayerRecord {
                        name: p.name.clone(),
                        score: p.score,
                    },
                )
            })
            .collect();
        Self { players }
    }
}

impl From<RosterDocument> for Roster {
    // Ids are assigned ascending, so id order is insertion order.
    fn from(doc: RosterDocument) -> Self {
        let players = doc
            .players
            .into_iter()
            .map(|(id, rec)| Player {
                id,
                name: rec.name,
                score: rec.score,
            })
            .collect();
        Roster::from_players(players)
    }
}

/// JSON file backed [`RosterRepo`].
#[derive(Debug, Clone)]
pub struct JsonRosterStore {
    path: PathBuf,
}

impl JsonRosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterRepo for JsonRosterStore {
    fn load(&self) -> Result<Option<Roster>, AppError> {
        let Some(contents) = json_file::read_optional(&self.path)? else {
            debug!(path = %self.path.display(), "no stored roster");
            return Ok(None);
        };

        let doc: RosterDocument = serde_json::from_str(&contents).map_err(|e| {
            AppError::storage(format!(
                "roster file {} is malformed: {e}",
                self.path.display()
            ))
        })?;
        let roster = Roster::from(doc);
        info!(path = %self.path.display(), players = roster.len(), "roster loaded");
        Ok(Some(roster))
    }

    fn save(&self, roster: &Roster) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(&RosterDocument::from(roster))?;
        json_file::write_atomic(&self.path, &json)
    }
}
