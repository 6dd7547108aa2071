use super::GameState;
use crate::game::max_imposters;
use crate::types::*;

impl GameState {
    /// Append a player named "Player N". Ignored at the maximum roster size or
    /// while a round is in progress.
    pub fn add_player(&mut self) -> Option<Player> {
        if self.round.is_some() {
            tracing::debug!("Ignoring add_player during an active round");
            return None;
        }
        if self.players.len() >= MAX_PLAYERS {
            return None;
        }

        let player = Player::new(format!("Player {}", self.players.len() + 1));
        self.players.push(player.clone());
        self.cap_imposter_count();

        tracing::info!("Added player {} ({} total)", player.id, self.players.len());
        Some(player)
    }

    /// Remove the most recently added player. Ignored at the minimum roster
    /// size or while a round is in progress.
    pub fn remove_player(&mut self) -> Option<Player> {
        if self.round.is_some() {
            tracing::debug!("Ignoring remove_player during an active round");
            return None;
        }
        if self.players.len() <= MIN_PLAYERS {
            return None;
        }

        let player = self.players.pop()?;
        self.cap_imposter_count();

        tracing::info!(
            "Removed player {} ({} remaining)",
            player.id,
            self.players.len()
        );
        Some(player)
    }

    /// Rename a player. The name is stored as given, blank included.
    /// Returns false for an unknown id.
    pub fn update_player_name(&mut self, player_id: &str, name: String) -> bool {
        match self.players.iter_mut().find(|p| p.id == player_id) {
            Some(player) => {
                player.name = name;
                true
            }
            None => false,
        }
    }

    /// Keep the configured imposter count within what the roster allows
    fn cap_imposter_count(&mut self) {
        let max = max_imposters(self.players.len());
        if self.config.imposter_count > max {
            self.config.imposter_count = max;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::state::test_state;
    use crate::types::*;

    #[test]
    fn test_add_player_default_name() {
        let mut state = test_state(5, 1);
        let player = state.add_player().unwrap();

        assert_eq!(player.name, "Player 6");
        assert_eq!(state.players().len(), 6);
        assert_eq!(state.players().last(), Some(&player));
    }

    #[test]
    fn test_add_player_stops_at_max() {
        let mut state = test_state(MAX_PLAYERS - 1, 1);
        assert!(state.add_player().is_some());
        assert!(state.add_player().is_none());
        assert_eq!(state.players().len(), MAX_PLAYERS);
    }

    #[test]
    fn test_remove_player_removes_last() {
        let mut state = test_state(5, 1);
        let last = state.players()[4].clone();

        let removed = state.remove_player().unwrap();
        assert_eq!(removed, last);
        assert_eq!(state.players().len(), 4);
    }

    #[test]
    fn test_remove_player_stops_at_min() {
        let mut state = test_state(4, 1);
        assert!(state.remove_player().is_some());
        assert!(state.remove_player().is_none());
        assert_eq!(state.players().len(), MIN_PLAYERS);
    }

    #[test]
    fn test_roster_locked_during_round() {
        let mut state = test_state(5, 1);
        state.start_game().unwrap();

        assert!(state.add_player().is_none());
        assert!(state.remove_player().is_none());
        assert_eq!(state.players().len(), 5);

        state.reset_to_settings();
        assert!(state.add_player().is_some());
    }

    #[test]
    fn test_update_player_name() {
        let mut state = test_state(3, 1);
        let id = state.players()[1].id.clone();

        assert!(state.update_player_name(&id, "Zoe".to_string()));
        assert_eq!(state.players()[1].name, "Zoe");

        assert!(state.update_player_name(&id, String::new()));
        assert_eq!(state.players()[1].name, "");

        assert!(!state.update_player_name("missing", "Nobody".to_string()));
    }

    #[test]
    fn test_removing_players_caps_imposter_count() {
        let mut state = test_state(9, 1);
        state.set_imposter_count(3);
        assert_eq!(state.config().imposter_count, 3);

        // 8 players allow at most 2 imposters
        state.remove_player();
        assert_eq!(state.config().imposter_count, 2);
    }
}
