//! Runtime configuration loaded from environment variables

use crate::catalog::QuestionCatalog;
use crate::error::GameResult;
use crate::types::{DEFAULT_PLAYER_NAMES, DEFAULT_RECENT_WINDOW};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Replacement question catalog (None = built-in)
    pub questions_path: Option<PathBuf>,
    /// Number of recent questions avoided when picking
    pub recent_window: usize,
    /// Names the roster starts with
    pub player_names: Vec<String>,
    /// Fixed RNG seed for reproducible sessions
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            questions_path: None,
            recent_window: DEFAULT_RECENT_WINDOW,
            player_names: DEFAULT_PLAYER_NAMES.iter().map(|s| s.to_string()).collect(),
            seed: None,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

fn parsed_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = non_empty_var(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}: not a valid number", key, raw);
            None
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let recent_window = match parsed_var::<usize>("IMPOSTER_RECENT_WINDOW") {
            Some(0) => {
                tracing::warn!("IMPOSTER_RECENT_WINDOW must be at least 1, using default");
                defaults.recent_window
            }
            Some(window) => window,
            None => defaults.recent_window,
        };

        let player_names = non_empty_var("IMPOSTER_PLAYERS")
            .map(|raw| raw.split(',').map(|name| name.trim().to_string()).collect())
            .unwrap_or(defaults.player_names);

        Self {
            questions_path: non_empty_var("IMPOSTER_QUESTIONS_PATH").map(PathBuf::from),
            recent_window,
            player_names,
            seed: parsed_var("IMPOSTER_SEED"),
        }
    }

    /// Load the configured catalog, or the built-in one
    pub fn load_catalog(&self) -> GameResult<QuestionCatalog> {
        match &self.questions_path {
            Some(path) => QuestionCatalog::from_path(path),
            None => QuestionCatalog::builtin(),
        }
    }
}
