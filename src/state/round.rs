use super::GameState;
use crate::error::GameResult;
use crate::game::{create_round, pick_question_pair};
use crate::types::*;

impl GameState {
    /// Pick a question and imposters and start a fresh round, replacing any
    /// round in progress
    pub fn start_game(&mut self) -> GameResult<&Round> {
        let pool = self.catalog.pool(&self.config.selected_categories);
        let pick = pick_question_pair(
            &pool,
            &self.recent_question_ids,
            self.config.recent_window,
            &mut self.rng,
        )?;

        let round = create_round(
            &self.players,
            self.config.imposter_count,
            pick.pair,
            &mut self.rng,
        );
        self.recent_question_ids = pick.next_recent;

        tracing::info!(
            "Round started with question {} and {} imposter(s)",
            round.question_pair.id,
            round.imposter_ids.len()
        );

        Ok(&*self.round.insert(round))
    }

    /// New question, new imposters, empty answers and votes
    pub fn play_again(&mut self) -> GameResult<&Round> {
        self.start_game()
    }

    /// Discard the current round and return to configuration
    pub fn reset_to_settings(&mut self) {
        if self.round.take().is_some() {
            tracing::info!("Round discarded, back to settings");
        }
    }

    /// The question text a player should see in the current round
    pub fn question_for_player(&self, player_id: &str) -> GameResult<&str> {
        Ok(self.round_ref()?.assigned_question(player_id))
    }
}
