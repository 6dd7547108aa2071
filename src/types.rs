use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque ID types for type safety
pub type PlayerId = String;
pub type QuestionId = String;

/// Roster size bounds, inclusive
pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 100;

/// How many recently used questions are avoided when picking the next one
pub const DEFAULT_RECENT_WINDOW: usize = 8;

/// Names the roster starts with
pub const DEFAULT_PLAYER_NAMES: &[&str] = &["Alex", "Lucas", "Nic", "Dimi", "Steli"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    /// Stored verbatim, may be blank. Use `game::display_name` for labels.
    pub name: String,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestionPair {
    pub id: QuestionId,
    pub category: String,
    /// Shown to everyone who is not an imposter
    pub main: String,
    /// Shown to imposters
    pub alt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub imposter_count: usize,
    pub show_category: bool,
    /// Empty means every category
    pub selected_categories: Vec<String>,
    pub recent_window: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            imposter_count: 1,
            show_category: true,
            selected_categories: Vec::new(),
            recent_window: DEFAULT_RECENT_WINDOW,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundPhase {
    Answering,
    Voting,
    Results,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub question_pair: QuestionPair,
    pub imposter_ids: Vec<PlayerId>,
    pub answers: HashMap<PlayerId, String>,
    pub completed_player_ids: Vec<PlayerId>,
    pub voting_order: Vec<PlayerId>,
    pub current_voter_id: Option<PlayerId>,
    /// voter id -> voted-for id
    pub votes: HashMap<PlayerId, PlayerId>,
}

impl Round {
    pub fn new(question_pair: QuestionPair, imposter_ids: Vec<PlayerId>) -> Self {
        Self {
            question_pair,
            imposter_ids,
            answers: HashMap::new(),
            completed_player_ids: Vec::new(),
            voting_order: Vec::new(),
            current_voter_id: None,
            votes: HashMap::new(),
        }
    }

    pub fn is_imposter(&self, player_id: &str) -> bool {
        self.imposter_ids.iter().any(|id| id == player_id)
    }

    /// The question text a player should see. Unknown ids get the main question.
    pub fn assigned_question(&self, player_id: &str) -> &str {
        if self.is_imposter(player_id) {
            &self.question_pair.alt
        } else {
            &self.question_pair.main
        }
    }

    /// Record (or overwrite) an answer
    pub fn submit_answer(&mut self, player_id: &str, text: String) {
        self.answers.insert(player_id.to_string(), text);
        if !self.completed_player_ids.iter().any(|id| id == player_id) {
            self.completed_player_ids.push(player_id.to_string());
        }
    }

    pub fn has_answered(&self, player_id: &str) -> bool {
        self.completed_player_ids.iter().any(|id| id == player_id)
    }

    /// Voting follows roster order; the first player votes first
    pub fn start_voting(&mut self, players: &[Player]) {
        self.voting_order = players.iter().map(|p| p.id.clone()).collect();
        self.current_voter_id = self.voting_order.first().cloned();
    }

    /// True once `start_voting` has fixed the voting order
    pub fn voting_started(&self) -> bool {
        !self.voting_order.is_empty()
    }

    pub fn set_current_voter(&mut self, player_id: Option<PlayerId>) {
        self.current_voter_id = player_id;
    }

    /// Record a vote and move the current voter to the first player in roster
    /// order who has not voted yet. Returns that player, or `None` once everyone
    /// has voted.
    pub fn record_vote(
        &mut self,
        players: &[Player],
        voter_id: &str,
        voted_id: &str,
    ) -> Option<PlayerId> {
        self.votes.insert(voter_id.to_string(), voted_id.to_string());
        let next = crate::game::next_voter(players, &self.votes);
        self.current_voter_id = next.clone();
        next
    }

    pub fn phase(&self) -> RoundPhase {
        if self.current_voter_id.is_some() {
            RoundPhase::Voting
        } else if self.voting_order.is_empty() {
            RoundPhase::Answering
        } else {
            RoundPhase::Results
        }
    }
}
