use crate::types::PlayerId;

/// Result type for game operations
pub type GameResult<T> = Result<T, GameError>;

/// Caller mistakes the engine refuses to paper over. Gameplay fallbacks
/// (exhausted recency window, empty category filter, roster at its bounds)
/// are not errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    #[error("No active round")]
    NoActiveRound,

    #[error("Voting has not started")]
    VotingNotStarted,

    #[error("Unknown player: {0}")]
    UnknownPlayer(PlayerId),

    #[error("Question catalog is empty")]
    EmptyCatalog,

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to load question catalog: {0}")]
    CatalogLoad(String),
}

impl GameError {
    /// Stable code sent to the presentation layer
    pub fn code(&self) -> &'static str {
        match self {
            GameError::NoActiveRound => "NO_ACTIVE_ROUND",
            GameError::VotingNotStarted => "VOTING_NOT_STARTED",
            GameError::UnknownPlayer(_) => "UNKNOWN_PLAYER",
            GameError::EmptyCatalog => "EMPTY_CATALOG",
            GameError::InvalidConfiguration(_) => "INVALID_CONFIGURATION",
            GameError::CatalogLoad(_) => "CATALOG_LOAD_FAILED",
        }
    }
}
