use serde::{Deserialize, Serialize};

use crate::domain::rules::default_player_name;

pub type PlayerId = u32;

/// A roster entry. `score` is cumulative across matches and only changes
/// when a round is committed or scores are reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            name: default_player_name(id),
            score: 0,
        }
    }
}
