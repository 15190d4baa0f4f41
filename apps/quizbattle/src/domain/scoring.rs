use std::collections::BTreeMap;

use crate::domain::player::PlayerId;
use crate::domain::roster::Roster;
use crate::domain::round::RoundState;
use crate::errors::domain::DomainError;

/// Round points banked into each player's total.
pub type RoundCommit = BTreeMap<PlayerId, u32>;

/// Add every positive round score to the matching roster total.
///
/// Zero entries are skipped. Returns the deltas that were applied.
pub fn commit_round_scores(roster: &mut Roster, round: &RoundState) -> Result<RoundCommit, DomainError> {
    let mut applied = RoundCommit::new();
    for (&player_id, &points) in round.round_scores() {
        if points == 0 {
            continue;
        }
        roster.credit(player_id, points)?;
        applied.insert(player_id, points);
    }
    Ok(applied)
}
