//! Command dispatch
//!
//! Maps each presentation-layer command onto one `GameState` operation and
//! reports the resulting state as an event. Engine errors become
//! `Event::Error` with a stable code.

use crate::error::GameError;
use crate::game::{display_name, VoteTally};
use crate::protocol::{Command, Event, RankedPlayer, RoundView};
use crate::state::GameState;

fn error_event(e: GameError) -> Event {
    tracing::warn!("Command failed: {}", e);
    Event::Error {
        code: e.code().to_string(),
        msg: e.to_string(),
    }
}

/// Results-screen order with display labels
fn ranking(state: &GameState, tally: &VoteTally) -> Vec<RankedPlayer> {
    let players = state.players();
    tally
        .ranking(players)
        .into_iter()
        .map(|(player, votes)| {
            let index = players
                .iter()
                .position(|p| p.id == player.id)
                .unwrap_or_default();
            RankedPlayer {
                player_id: player.id.clone(),
                name: display_name(players, index),
                votes,
            }
        })
        .collect()
}

fn roster_event(state: &GameState) -> Event {
    Event::Roster {
        players: state.players().to_vec(),
        imposter_count: state.config().imposter_count,
        effective_imposter_count: state.effective_imposter_count(),
    }
}

fn settings_event(state: &GameState) -> Event {
    Event::Settings {
        config: state.config().clone(),
        effective_imposter_count: state.effective_imposter_count(),
    }
}

fn state_event(state: &GameState) -> Event {
    Event::State {
        players: state.players().to_vec(),
        config: state.config().clone(),
        effective_imposter_count: state.effective_imposter_count(),
        round: state.round().map(RoundView::from),
        recent_question_ids: state.recent_question_ids().to_vec(),
    }
}

/// Apply one command and describe what happened
pub fn handle_command(cmd: Command, state: &mut GameState) -> Event {
    match cmd {
        // Roster changes at the bounds or during a round are ignored; the
        // roster event shows the unchanged list.
        Command::AddPlayer => {
            state.add_player();
            roster_event(state)
        }

        Command::RemovePlayer => {
            state.remove_player();
            roster_event(state)
        }

        Command::RenamePlayer { player_id, name } => {
            if !state.update_player_name(&player_id, name) {
                tracing::debug!("Rename ignored for unknown player {}", player_id);
            }
            roster_event(state)
        }

        Command::SetImposterCount { count } => {
            state.set_imposter_count(count);
            settings_event(state)
        }

        Command::SetShowCategory { enabled } => {
            state.set_show_category(enabled);
            settings_event(state)
        }

        Command::SetSelectedCategories { categories } => {
            state.set_selected_categories(categories);
            settings_event(state)
        }

        Command::ListCategories => Event::Categories {
            categories: state.catalog().categories(),
        },

        Command::StartGame => match state.start_game() {
            Ok(round) => Event::RoundStarted {
                round: RoundView::from(round),
            },
            Err(e) => error_event(e),
        },

        Command::PlayAgain => match state.play_again() {
            Ok(round) => Event::RoundStarted {
                round: RoundView::from(round),
            },
            Err(e) => error_event(e),
        },

        Command::ResetToSettings => {
            state.reset_to_settings();
            settings_event(state)
        }

        Command::GetQuestion { player_id } => match state.question_for_player(&player_id) {
            Ok(question) => {
                let question = question.to_string();
                let category = state
                    .config()
                    .show_category
                    .then(|| state.round().map(|r| r.question_pair.category.clone()))
                    .flatten();
                Event::Question {
                    player_id,
                    question,
                    category,
                }
            }
            Err(e) => error_event(e),
        },

        Command::SubmitAnswer { player_id, text } => {
            if let Err(e) = state.submit_answer(&player_id, text) {
                return error_event(e);
            }
            let answered = state
                .round()
                .map(|r| r.completed_player_ids.len())
                .unwrap_or(0);
            Event::AnswerRecorded {
                player_id,
                answered,
                all_answered: state.all_answered().unwrap_or(false),
            }
        }

        Command::StartVoting => match state.start_voting() {
            Ok(current_voter_id) => Event::VotingStarted {
                voting_order: state
                    .round()
                    .map(|r| r.voting_order.clone())
                    .unwrap_or_default(),
                current_voter_id,
            },
            Err(e) => error_event(e),
        },

        Command::SetCurrentVoter { player_id } => {
            match state.set_current_voter(player_id.clone()) {
                Ok(()) => Event::Voter {
                    current_voter_id: player_id,
                },
                Err(e) => error_event(e),
            }
        }

        Command::SubmitVote { voter_id, voted_id } => {
            match state.submit_vote(&voter_id, &voted_id) {
                Ok(next_voter_id) => Event::VoteRecorded {
                    voter_id,
                    next_voter_id,
                },
                Err(e) => error_event(e),
            }
        }

        Command::GetResults => {
            let (tally, outcome) = match (state.tally(), state.outcome()) {
                (Ok(tally), Ok(outcome)) => (tally, outcome),
                (Err(e), _) | (_, Err(e)) => return error_event(e),
            };
            match state.round() {
                Some(round) => Event::Results {
                    question_pair: round.question_pair.clone(),
                    answers: round.answers.clone(),
                    ranking: ranking(state, &tally),
                    tally,
                    outcome,
                },
                None => error_event(GameError::NoActiveRound),
            }
        }

        Command::GetState => state_event(state),
    }
}
