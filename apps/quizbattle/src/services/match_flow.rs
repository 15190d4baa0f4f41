//! Match orchestration: phases, sub-rounds, commits and resets.
//!
//! The controller is the only owner of the live [`Match`] and
//! [`RoundState`]. Every action takes `&mut self` and either completes or
//! returns an error with the controller unchanged.

use tracing::{debug, info, warn};

use crate::domain::player::{Player, PlayerId};
use crate::domain::provider::QuestionProvider;
use crate::domain::question::AnswerId;
use crate::domain::question_set::parse_question_set;
use crate::domain::round::{self, AnswerOutcome, RoundState};
use crate::domain::rules::MATCH_PARTICIPANTS;
use crate::domain::scoring::RoundCommit;
use crate::domain::snapshot::{build_snapshot, MatchSnapshot, SnapshotArgs};
use crate::domain::state::{Match, Phase, SubRound};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::roster::RosterRepo;
use crate::services::reset::{ResetRequest, ResetToken};
use crate::services::roster::RosterService;

const RESET_DESCRIPTION: &str =
    "Abort the current match, reset every player's score to 0 and restart questions from the first one";

pub struct MatchController<R: RosterRepo, P: QuestionProvider> {
    roster: RosterService<R>,
    provider: P,
    phase: Phase,
    current: Option<Match>,
    round: Option<RoundState>,
    matches_completed: u32,
    pending_reset: Option<ResetToken>,
}

impl<R: RosterRepo, P: QuestionProvider> MatchController<R, P> {
    pub fn new(roster: RosterService<R>, provider: P) -> Self {
        Self {
            roster,
            provider,
            phase: Phase::Idle,
            current: None,
            round: None,
            matches_completed: 0,
            pending_reset: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn roster(&self) -> &RosterService<R> {
        &self.roster
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn current_match(&self) -> Option<&Match> {
        self.current.as_ref()
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    pub fn matches_completed(&self) -> u32 {
        self.matches_completed
    }

    pub fn reset_pending(&self) -> bool {
        self.pending_reset.is_some()
    }

    fn expect_phase(&self, expected: Phase, action: &str) -> Result<(), AppError> {
        if self.phase != expected {
            return Err(DomainError::phase_mismatch(format!(
                "{action} requires phase {expected:?}, current phase is {:?}",
                self.phase
            ))
            .into());
        }
        Ok(())
    }

    fn expect_setup(&self, action: &str) -> Result<(), AppError> {
        match self.phase {
            Phase::Idle | Phase::SelectingPlayers => Ok(()),
            other => Err(DomainError::phase_mismatch(format!(
                "{action} is only allowed outside a match, current phase is {other:?}"
            ))
            .into()),
        }
    }

    fn current_sub_round(&self) -> Option<SubRound> {
        self.current.as_ref().map(Match::sub_round)
    }

    /// Drop any match in progress and go back to `Idle`. Scores stay as they are.
    fn abort_to_idle(&mut self) {
        self.current = None;
        self.round = None;
        self.phase = Phase::Idle;
    }

    /// Pull the next question for `m` and enter `InRound`.
    fn start_sub_round(&mut self, m: Match) -> Result<(), AppError> {
        let question = match self.provider.next_question() {
            Ok(q) => q,
            Err(e) => {
                warn!(
                    participants = ?m.participants(),
                    sub_round = m.sub_round().number(),
                    "no questions available, aborting match"
                );
                self.abort_to_idle();
                return Err(e.into());
            }
        };

        info!(
            question_id = question.id(),
            sub_round = m.sub_round().number(),
            active = m.active(),
            "sub-round started"
        );
        self.round = Some(RoundState::new(question, m.participants()));
        self.current = Some(m);
        self.phase = Phase::InRound;
        Ok(())
    }

    /// Enter player selection.
    ///
    /// From `Idle` this needs at least two players on the roster. From a
    /// finished second sub-round it closes the match like [`Self::finish_match`].
    pub fn start_match(&mut self) -> Result<(), AppError> {
        match self.phase {
            Phase::Idle => {
                let players = self.roster.roster().len();
                if players < MATCH_PARTICIPANTS {
                    return Err(DomainError::validation(
                        ValidationKind::InvalidMatchSize,
                        format!(
                            "A match needs {MATCH_PARTICIPANTS} players, the roster has {players}"
                        ),
                    )
                    .into());
                }
                self.phase = Phase::SelectingPlayers;
                info!(players, "player selection started");
                Ok(())
            }
            Phase::RoundComplete if self.current_sub_round() == Some(SubRound::Second) => {
                self.finish_match()
            }
            other => Err(DomainError::phase_mismatch(format!(
                "cannot start a match from phase {other:?}"
            ))
            .into()),
        }
    }

    /// Pick the two participants and start sub-round 1.
    pub fn begin_match(&mut self, player_ids: &[PlayerId]) -> Result<(), AppError> {
        self.expect_phase(Phase::SelectingPlayers, "begin_match")?;

        let [first, second] = self.roster.roster().select_for_match(player_ids)?;
        let participants = [first.id, second.id];
        info!(?participants, "match begins");

        self.start_sub_round(Match::new(participants))
    }

    /// Apply a pick for the active player.
    pub fn select_answer(&mut self, answer_id: AnswerId) -> Result<AnswerOutcome, AppError> {
        self.expect_phase(Phase::InRound, "select_answer")?;
        let (Some(m), Some(round)) = (self.current.as_mut(), self.round.as_mut()) else {
            return Err(AppError::internal("in-round phase without match state"));
        };

        let outcome = round::select_answer(m, round, answer_id)?;
        debug!(
            player_id = outcome.picked_by,
            answer_id,
            correct = outcome.correct,
            already_selected = outcome.already_selected,
            round_score = outcome.round_score_after,
            active = outcome.active_after,
            round_end_available = outcome.round_end_available,
            "answer selected"
        );
        Ok(outcome)
    }

    /// Hand the turn over while keeping the banked round score.
    ///
    /// Returns `false` when passing is not allowed right now (zero round
    /// score or a decided round); nothing changes in that case.
    pub fn pass_turn(&mut self) -> Result<bool, AppError> {
        self.expect_phase(Phase::InRound, "pass_turn")?;
        let (Some(m), Some(round)) = (self.current.as_mut(), self.round.as_ref()) else {
            return Err(AppError::internal("in-round phase without match state"));
        };

        let from = m.active();
        match round::pass_turn(m, round) {
            Some(to) => {
                debug!(player_id = from, to, round_score = round.round_score(from), "turn passed");
                Ok(true)
            }
            None => {
                debug!(player_id = from, "pass ignored");
                Ok(false)
            }
        }
    }

    /// Close the current sub-round and bank the positive round scores.
    ///
    /// Allowed at any point of the sub-round; `end_round_available` on the
    /// round is a hint for the host, not a precondition.
    pub fn end_round(&mut self) -> Result<RoundCommit, AppError> {
        self.expect_phase(Phase::InRound, "end_round")?;
        let Some(round) = self.round.as_ref() else {
            return Err(AppError::internal("in-round phase without round state"));
        };
        let decided = round.end_round_available();

        let applied = self.roster.commit_round(round)?;
        self.phase = Phase::RoundComplete;
        info!(
            sub_round = self.current_sub_round().map_or(0, SubRound::number),
            committed = applied.len(),
            decided,
            "round ended"
        );
        Ok(applied)
    }

    /// Start sub-round 2; the second participant opens.
    pub fn advance_to_second_round(&mut self) -> Result<(), AppError> {
        self.expect_phase(Phase::RoundComplete, "advance_to_second_round")?;
        let Some(mut m) = self.current.clone() else {
            return Err(AppError::internal("round-complete phase without match state"));
        };
        if m.sub_round() != SubRound::First {
            return Err(DomainError::phase_mismatch(
                "the second sub-round has already been played",
            )
            .into());
        }

        m.enter_second_sub_round();
        self.start_sub_round(m)
    }

    /// Close a match after its second sub-round and return to player selection.
    pub fn finish_match(&mut self) -> Result<(), AppError> {
        self.expect_phase(Phase::RoundComplete, "finish_match")?;
        if self.current_sub_round() != Some(SubRound::Second) {
            return Err(DomainError::phase_mismatch(
                "finish_match requires the second sub-round to be complete",
            )
            .into());
        }

        self.matches_completed += 1;
        self.current = None;
        self.round = None;
        self.phase = Phase::SelectingPlayers;
        info!(matches_completed = self.matches_completed, "match finished");
        Ok(())
    }

    /// First step of abort-to-setup. Replaces any earlier pending request.
    pub fn request_reset(&mut self) -> ResetRequest {
        let token = ResetToken::generate();
        if self.pending_reset.replace(token).is_some() {
            debug!("earlier reset request superseded");
        }
        info!(%token, phase = ?self.phase, "reset requested");
        ResetRequest {
            token,
            description: RESET_DESCRIPTION.to_string(),
        }
    }

    /// Second step of abort-to-setup: zero every score and go back to `Idle`.
    pub fn confirm_reset(&mut self, token: ResetToken) -> Result<(), AppError> {
        if self.pending_reset != Some(token) {
            return Err(DomainError::validation(
                ValidationKind::InvalidResetToken,
                "Reset token does not match a pending request",
            )
            .into());
        }

        self.roster.reset_all_scores()?;
        self.pending_reset = None;
        self.abort_to_idle();
        self.provider.rewind();
        info!(%token, "reset confirmed");
        Ok(())
    }

    /// Drop the pending reset request. Returns whether one was pending.
    pub fn cancel_reset(&mut self) -> bool {
        let cancelled = self.pending_reset.take().is_some();
        if cancelled {
            info!("reset cancelled");
        }
        cancelled
    }

    /// Validate and swap in a new question set. Returns the number of questions.
    ///
    /// A rejected import leaves the current set and cursor untouched.
    pub fn import_questions(&mut self, json: &str) -> Result<usize, AppError> {
        let set = parse_question_set(json).map_err(|e| {
            warn!(error = %e, "question import rejected");
            AppError::from(e)
        })?;

        let count = set.len();
        self.provider.replace(set);
        info!(questions = count, phase = ?self.phase, "questions imported");
        Ok(count)
    }

    pub fn add_player(&mut self) -> Result<Player, AppError> {
        self.expect_setup("add_player")?;
        self.roster.add_player()
    }

    pub fn rename_player(&mut self, id: PlayerId, name: impl Into<String>) -> Result<bool, AppError> {
        self.expect_setup("rename_player")?;
        self.roster.rename_player(id, name)
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Result<bool, AppError> {
        self.expect_setup("remove_player")?;
        self.roster.remove_player(id)
    }

    pub fn reset_all_scores(&mut self) -> Result<(), AppError> {
        self.expect_setup("reset_all_scores")?;
        self.roster.reset_all_scores()
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        build_snapshot(SnapshotArgs {
            phase: self.phase,
            roster: self.roster.roster(),
            current: self.current.as_ref(),
            round: self.round.as_ref(),
            matches_completed: self.matches_completed,
            questions_loaded: self.provider.len(),
            reset_pending: self.pending_reset.is_some(),
        })
    }
}
