mod game;
mod player;
mod round;
mod submission;
mod vote;

use crate::catalog::QuestionCatalog;
use crate::config::AppConfig;
use crate::error::{GameError, GameResult};
use crate::types::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Single owner of everything a session mutates: the roster and settings,
/// the current round, and the recent-question history. The presentation
/// layer drives it one operation at a time.
#[derive(Debug)]
pub struct GameState {
    players: Vec<Player>,
    config: GameConfig,
    round: Option<Round>,
    /// Most recent first, survives across rounds
    recent_question_ids: Vec<QuestionId>,
    catalog: QuestionCatalog,
    rng: StdRng,
}

impl GameState {
    /// Default roster, OS-seeded randomness
    pub fn new(catalog: QuestionCatalog) -> Self {
        let names: Vec<String> = DEFAULT_PLAYER_NAMES.iter().map(|s| s.to_string()).collect();
        Self::with_rng(catalog, &names, StdRng::from_os_rng())
    }

    /// Build the session described by the runtime configuration
    pub fn from_config(config: &AppConfig) -> GameResult<Self> {
        let catalog = config.load_catalog()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut state = Self::with_rng(catalog, &config.player_names, rng);
        state.config.recent_window = config.recent_window;
        Ok(state)
    }

    /// Seed the roster from `names`, padded with "Player N" up to the minimum
    /// and truncated at the maximum roster size
    pub fn with_rng(catalog: QuestionCatalog, names: &[String], rng: StdRng) -> Self {
        let mut players: Vec<Player> = names
            .iter()
            .take(MAX_PLAYERS)
            .map(|name| Player::new(name.clone()))
            .collect();
        while players.len() < MIN_PLAYERS {
            players.push(Player::new(format!("Player {}", players.len() + 1)));
        }

        tracing::info!(
            "New session with {} players and {} questions",
            players.len(),
            catalog.len()
        );

        Self {
            players,
            config: GameConfig::default(),
            round: None,
            recent_question_ids: Vec::new(),
            catalog,
            rng,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn recent_question_ids(&self) -> &[QuestionId] {
        &self.recent_question_ids
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn has_player(&self, player_id: &str) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    fn require_player(&self, player_id: &str) -> GameResult<()> {
        if self.has_player(player_id) {
            Ok(())
        } else {
            Err(GameError::UnknownPlayer(player_id.to_string()))
        }
    }

    fn round_ref(&self) -> GameResult<&Round> {
        self.round.as_ref().ok_or(GameError::NoActiveRound)
    }

    fn round_mut(&mut self) -> GameResult<&mut Round> {
        self.round.as_mut().ok_or(GameError::NoActiveRound)
    }
}

#[cfg(test)]
pub(crate) fn test_state(player_count: usize, seed: u64) -> GameState {
    let names: Vec<String> = (1..=player_count).map(|i| format!("P{}", i)).collect();
    let catalog = QuestionCatalog::builtin().unwrap();
    GameState::with_rng(catalog, &names, StdRng::seed_from_u64(seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster() {
        let state = GameState::new(QuestionCatalog::builtin().unwrap());
        let names: Vec<&str> = state.players().iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["Alex", "Lucas", "Nic", "Dimi", "Steli"]);
        assert!(state.round().is_none());
        assert!(state.recent_question_ids().is_empty());
        assert_eq!(state.config().imposter_count, 1);
        assert!(state.config().show_category);
    }

    #[test]
    fn test_short_roster_is_padded() {
        let names = vec!["Solo".to_string()];
        let catalog = QuestionCatalog::builtin().unwrap();
        let state = GameState::with_rng(catalog, &names, StdRng::seed_from_u64(0));
        let names: Vec<&str> = state.players().iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["Solo", "Player 2", "Player 3"]);
    }

    #[test]
    fn test_long_roster_is_truncated() {
        let state = test_state(150, 0);
        assert_eq!(state.players().len(), MAX_PLAYERS);
    }

    #[test]
    fn test_from_config_applies_settings() {
        let config = AppConfig {
            recent_window: 3,
            player_names: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            seed: Some(99),
            ..AppConfig::default()
        };
        let state = GameState::from_config(&config).unwrap();

        assert_eq!(state.players().len(), 4);
        assert_eq!(state.config().recent_window, 3);
    }

    #[test]
    fn test_from_config_reports_missing_catalog() {
        let config = AppConfig {
            questions_path: Some("/nonexistent/questions.json".into()),
            ..AppConfig::default()
        };
        assert!(matches!(
            GameState::from_config(&config),
            Err(GameError::CatalogLoad(_))
        ));
    }
}
