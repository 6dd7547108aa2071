use super::GameState;
use crate::error::{GameError, GameResult};
use crate::game::{determine_outcome, tally_votes, Outcome, VoteTally};
use crate::types::*;

impl GameState {
    /// Fix the voting order to the current roster order and hand the device
    /// to the first player. Returns the first voter.
    pub fn start_voting(&mut self) -> GameResult<Option<PlayerId>> {
        let round = self.round.as_mut().ok_or(GameError::NoActiveRound)?;
        round.start_voting(&self.players);

        tracing::info!("Voting started with {} voters", round.voting_order.len());
        Ok(round.current_voter_id.clone())
    }

    /// Set or clear the expected voter directly. Setting one requires voting
    /// to have started; clearing is always allowed.
    pub fn set_current_voter(&mut self, player_id: Option<PlayerId>) -> GameResult<()> {
        if let Some(id) = &player_id {
            self.require_player(id)?;
        }
        let round = self.round_mut()?;
        if player_id.is_some() && !round.voting_started() {
            return Err(GameError::VotingNotStarted);
        }
        round.set_current_voter(player_id);
        Ok(())
    }

    /// Record a vote and advance to the next player who has not voted, in one
    /// step. Returns the new current voter, `None` once everyone has voted.
    pub fn submit_vote(&mut self, voter_id: &str, voted_id: &str) -> GameResult<Option<PlayerId>> {
        self.require_player(voter_id)?;
        self.require_player(voted_id)?;

        let round = self.round.as_mut().ok_or(GameError::NoActiveRound)?;
        if !round.voting_started() {
            return Err(GameError::VotingNotStarted);
        }
        let next = round.record_vote(&self.players, voter_id, voted_id);

        tracing::debug!(
            "Vote recorded from {} ({} of {} cast)",
            voter_id,
            round.votes.len(),
            self.players.len()
        );
        if next.is_none() {
            tracing::info!("All votes are in");
        }
        Ok(next)
    }

    pub fn tally(&self) -> GameResult<VoteTally> {
        Ok(tally_votes(&self.players, &self.round_ref()?.votes))
    }

    pub fn outcome(&self) -> GameResult<Outcome> {
        let round = self.round_ref()?;
        let tally = tally_votes(&self.players, &round.votes);
        Ok(determine_outcome(round, &tally))
    }
}
