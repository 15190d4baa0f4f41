use serde::{Deserialize, Serialize};

use crate::domain::player::PlayerId;

/// Controller phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Setup: roster editing, question import.
    Idle,
    /// Waiting for two players to be chosen.
    SelectingPlayers,
    /// A sub-round is being played.
    InRound,
    /// Round scores committed; waiting for the next step.
    RoundComplete,
}

/// Which of the two questions of a match is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubRound {
    First,
    Second,
}

impl SubRound {
    /// 1-based number for display.
    pub fn number(self) -> u8 {
        match self {
            SubRound::First => 1,
            SubRound::Second => 2,
        }
    }
}

/// A two-player match. At most one participant is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    participants: [PlayerId; 2],
    sub_round: SubRound,
    active: PlayerId,
}

impl Match {
    /// New match in sub-round 1 with `participants[0]` active.
    pub fn new(participants: [PlayerId; 2]) -> Self {
        Self {
            participants,
            sub_round: SubRound::First,
            active: participants[0],
        }
    }

    pub fn participants(&self) -> [PlayerId; 2] {
        self.participants
    }

    pub fn sub_round(&self) -> SubRound {
        self.sub_round
    }

    pub fn active(&self) -> PlayerId {
        self.active
    }

    /// The participant who is not `id`.
    #[inline]
    pub fn opponent_of(&self, id: PlayerId) -> PlayerId {
        if self.participants[0] == id {
            self.participants[1]
        } else {
            self.participants[0]
        }
    }

    /// Hand the turn to the other participant; returns the new active player.
    pub fn switch_active(&mut self) -> PlayerId {
        self.active = self.opponent_of(self.active);
        self.active
    }

    /// Sub-round 2 opens with the player who did not open sub-round 1.
    pub fn enter_second_sub_round(&mut self) {
        self.sub_round = SubRound::Second;
        self.active = self.participants[1];
    }
}
