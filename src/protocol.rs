use crate::game::{Outcome, VoteTally};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Operations a presentation layer can request, one per line of input
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum Command {
    // Roster and settings
    AddPlayer,
    RemovePlayer,
    RenamePlayer {
        player_id: PlayerId,
        name: String,
    },
    SetImposterCount {
        count: usize,
    },
    SetShowCategory {
        enabled: bool,
    },
    SetSelectedCategories {
        categories: Vec<String>,
    },
    ListCategories,

    // Round lifecycle
    StartGame,
    PlayAgain,
    ResetToSettings,
    GetQuestion {
        player_id: PlayerId,
    },
    SubmitAnswer {
        player_id: PlayerId,
        text: String,
    },
    StartVoting,
    SetCurrentVoter {
        #[serde(default)]
        player_id: Option<PlayerId>,
    },
    SubmitVote {
        voter_id: PlayerId,
        voted_id: PlayerId,
    },
    GetResults,
    GetState,
}

/// Public view of a round. Leaves out the imposters and the question texts
/// so it can be shown to whoever holds the device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundView {
    pub question_id: QuestionId,
    pub category: String,
    pub phase: RoundPhase,
    pub imposter_count: usize,
    pub answers: HashMap<PlayerId, String>,
    pub completed_player_ids: Vec<PlayerId>,
    pub voting_order: Vec<PlayerId>,
    pub current_voter_id: Option<PlayerId>,
    pub votes_cast: usize,
}

impl From<&Round> for RoundView {
    fn from(round: &Round) -> Self {
        Self {
            question_id: round.question_pair.id.clone(),
            category: round.question_pair.category.clone(),
            phase: round.phase(),
            imposter_count: round.imposter_ids.len(),
            answers: round.answers.clone(),
            completed_player_ids: round.completed_player_ids.clone(),
            voting_order: round.voting_order.clone(),
            current_voter_id: round.current_voter_id.clone(),
            votes_cast: round.votes.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedPlayer {
    pub player_id: PlayerId,
    /// Blank names are replaced with "Player N"
    pub name: String,
    pub votes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum Event {
    Roster {
        players: Vec<Player>,
        imposter_count: usize,
        effective_imposter_count: usize,
    },
    Settings {
        config: GameConfig,
        effective_imposter_count: usize,
    },
    Categories {
        categories: Vec<String>,
    },
    RoundStarted {
        round: RoundView,
    },
    Question {
        player_id: PlayerId,
        question: String,
        /// Present only when the category is shown to players
        #[serde(skip_serializing_if = "Option::is_none")]
        category: Option<String>,
    },
    AnswerRecorded {
        player_id: PlayerId,
        answered: usize,
        all_answered: bool,
    },
    VotingStarted {
        voting_order: Vec<PlayerId>,
        current_voter_id: Option<PlayerId>,
    },
    Voter {
        current_voter_id: Option<PlayerId>,
    },
    VoteRecorded {
        voter_id: PlayerId,
        next_voter_id: Option<PlayerId>,
    },
    Results {
        question_pair: QuestionPair,
        answers: HashMap<PlayerId, String>,
        /// Most voted first
        ranking: Vec<RankedPlayer>,
        tally: VoteTally,
        outcome: Outcome,
    },
    State {
        players: Vec<Player>,
        config: GameConfig,
        effective_imposter_count: usize,
        round: Option<RoundView>,
        recent_question_ids: Vec<QuestionId>,
    },
    Error {
        code: String,
        msg: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_wire_format() {
        let cmd: Command =
            serde_json::from_str(r#"{"t":"submit_vote","voter_id":"a","voted_id":"b"}"#).unwrap();
        assert!(matches!(
            cmd,
            Command::SubmitVote { ref voter_id, ref voted_id } if voter_id == "a" && voted_id == "b"
        ));

        let cmd: Command = serde_json::from_str(r#"{"t":"set_current_voter"}"#).unwrap();
        assert!(matches!(cmd, Command::SetCurrentVoter { player_id: None }));

        let cmd: Command = serde_json::from_str(r#"{"t":"start_game"}"#).unwrap();
        assert!(matches!(cmd, Command::StartGame));
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert!(serde_json::from_str::<Command>(r#"{"t":"reveal_imposters"}"#).is_err());
    }

    #[test]
    fn test_round_view_hides_imposters() {
        let pair = QuestionPair {
            id: "q".to_string(),
            category: "Fun".to_string(),
            main: "Main text".to_string(),
            alt: "Alt text".to_string(),
        };
        let round = Round::new(pair, vec!["secret-id".to_string()]);

        let json = serde_json::to_string(&Event::RoundStarted {
            round: RoundView::from(&round),
        })
        .unwrap();

        assert!(json.contains(r#""t":"round_started""#));
        assert!(json.contains(r#""phase":"ANSWERING""#));
        assert!(!json.contains("secret-id"));
        assert!(!json.contains("Alt text"));
    }

    #[test]
    fn test_question_event_omits_hidden_category() {
        let json = serde_json::to_string(&Event::Question {
            player_id: "p".to_string(),
            question: "Q?".to_string(),
            category: None,
        })
        .unwrap();
        assert!(!json.contains("category"));
    }
}
