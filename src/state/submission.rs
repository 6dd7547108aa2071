use super::GameState;
use crate::error::GameResult;

impl GameState {
    /// Record a player's answer. Resubmitting overwrites; empty text is
    /// accepted as is.
    pub fn submit_answer(&mut self, player_id: &str, text: String) -> GameResult<()> {
        self.require_player(player_id)?;
        let round = self.round_mut()?;
        round.submit_answer(player_id, text);

        tracing::debug!(
            "Answer recorded for {} ({} answered)",
            player_id,
            round.completed_player_ids.len()
        );
        Ok(())
    }

    /// Whether every roster player has submitted an answer
    pub fn all_answered(&self) -> GameResult<bool> {
        let round = self.round_ref()?;
        Ok(self.players.iter().all(|p| round.has_answered(&p.id)))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::GameError;
    use crate::state::test_state;

    #[test]
    fn test_submit_answer_requires_round() {
        let mut state = test_state(3, 2);
        let id = state.players()[0].id.clone();

        assert_eq!(
            state.submit_answer(&id, "hi".to_string()),
            Err(GameError::NoActiveRound)
        );
    }

    #[test]
    fn test_submit_answer_rejects_unknown_player() {
        let mut state = test_state(3, 2);
        state.start_game().unwrap();

        assert_eq!(
            state.submit_answer("stranger", "hi".to_string()),
            Err(GameError::UnknownPlayer("stranger".to_string()))
        );
        assert!(state.round().unwrap().answers.is_empty());
    }

    #[test]
    fn test_all_answered() {
        let mut state = test_state(3, 2);
        state.start_game().unwrap();
        let ids: Vec<String> = state.players().iter().map(|p| p.id.clone()).collect();

        assert!(!state.all_answered().unwrap());

        state.submit_answer(&ids[0], "a".to_string()).unwrap();
        state.submit_answer(&ids[0], "b".to_string()).unwrap();
        state.submit_answer(&ids[1], String::new()).unwrap();
        assert!(!state.all_answered().unwrap());

        state.submit_answer(&ids[2], "c".to_string()).unwrap();
        assert!(state.all_answered().unwrap());
        assert_eq!(state.round().unwrap().completed_player_ids.len(), 3);
        assert_eq!(state.round().unwrap().answers[&ids[0]], "b");
    }
}
