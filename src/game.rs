//! Round engine: question selection, imposter selection and vote tallying.
//!
//! Everything here is a pure function of its inputs plus a caller-supplied
//! random source, so the state layer and tests decide where randomness comes
//! from.

use crate::error::{GameError, GameResult};
use crate::types::*;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Result of picking a question: the pair and the updated recency history
#[derive(Debug, Clone)]
pub struct QuestionPick {
    pub pair: QuestionPair,
    /// Most recent first, at most `max_recent` entries
    pub next_recent: Vec<QuestionId>,
}

/// Pick a question uniformly at random, skipping recently used ones.
///
/// When every candidate is in `recent_ids` the whole pool is used instead.
pub fn pick_question_pair<R: Rng + ?Sized>(
    pairs: &[&QuestionPair],
    recent_ids: &[QuestionId],
    max_recent: usize,
    rng: &mut R,
) -> GameResult<QuestionPick> {
    let available: Vec<&QuestionPair> = pairs
        .iter()
        .copied()
        .filter(|pair| !recent_ids.contains(&pair.id))
        .collect();

    let pool: &[&QuestionPair] = if available.is_empty() {
        if !pairs.is_empty() {
            tracing::warn!(
                "All {} candidate questions used recently, ignoring history",
                pairs.len()
            );
        }
        pairs
    } else {
        &available
    };

    let pair = (*pool.choose(rng).ok_or(GameError::EmptyCatalog)?).clone();

    let next_recent: Vec<QuestionId> = std::iter::once(pair.id.clone())
        .chain(recent_ids.iter().cloned())
        .take(max_recent)
        .collect();

    Ok(QuestionPick { pair, next_recent })
}

/// Shuffle the roster and take the first `count` ids. Does not clamp `count`
/// beyond the roster size.
pub fn choose_imposters<R: Rng + ?Sized>(
    players: &[Player],
    count: usize,
    rng: &mut R,
) -> Vec<PlayerId> {
    let mut ids: Vec<PlayerId> = players.iter().map(|p| p.id.clone()).collect();
    ids.shuffle(rng);
    ids.truncate(count);
    ids
}

/// Largest allowed imposter count for a roster: at most a third of the
/// players, always leaving two non-imposters, never below one.
pub fn max_imposters(roster_len: usize) -> usize {
    (roster_len / 3).min(roster_len.saturating_sub(2)).max(1)
}

/// Clamp a requested imposter count into `[1, max_imposters(roster_len)]`
pub fn clamp_imposter_count(requested: usize, roster_len: usize) -> usize {
    requested.clamp(1, max_imposters(roster_len))
}

/// Build a fresh round. The imposter count is clamped here so callers cannot
/// produce an unfair round by skipping validation.
pub fn create_round<R: Rng + ?Sized>(
    players: &[Player],
    imposter_count: usize,
    question_pair: QuestionPair,
    rng: &mut R,
) -> Round {
    let count = clamp_imposter_count(imposter_count, players.len());
    if count != imposter_count {
        tracing::debug!(
            "Clamped imposter count from {} to {} for {} players",
            imposter_count,
            count,
            players.len()
        );
    }
    Round::new(question_pair, choose_imposters(players, count, rng))
}

/// First player, in roster order, without a recorded vote
pub fn next_voter(players: &[Player], votes: &HashMap<PlayerId, PlayerId>) -> Option<PlayerId> {
    players
        .iter()
        .find(|p| !votes.contains_key(&p.id))
        .map(|p| p.id.clone())
}

/// Label for a player: the trimmed name, or "Player N" when blank
pub fn display_name(players: &[Player], index: usize) -> String {
    match players.get(index).map(|p| p.name.trim()) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("Player {}", index + 1),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoteTally {
    /// One entry per roster player, zero included
    pub counts: HashMap<PlayerId, u32>,
    pub max_votes: u32,
    /// Every player sharing the maximum, in roster order. Ties are not broken.
    pub top_ids: Vec<PlayerId>,
}

impl VoteTally {
    /// Players ordered by votes received (descending), ties by name ignoring case
    pub fn ranking<'a>(&self, players: &'a [Player]) -> Vec<(&'a Player, u32)> {
        let mut ranked: Vec<(&Player, u32)> = players
            .iter()
            .map(|p| (p, self.counts.get(&p.id).copied().unwrap_or(0)))
            .collect();
        ranked.sort_by(|a, b| {
            b.1.cmp(&a.1)
                .then_with(|| a.0.name.to_lowercase().cmp(&b.0.name.to_lowercase()))
        });
        ranked
    }
}

/// Count votes per player. Votes for ids outside the roster are dropped.
pub fn tally_votes(players: &[Player], votes: &HashMap<PlayerId, PlayerId>) -> VoteTally {
    let mut counts: HashMap<PlayerId, u32> = players.iter().map(|p| (p.id.clone(), 0)).collect();

    for voted_id in votes.values() {
        if let Some(count) = counts.get_mut(voted_id) {
            *count += 1;
        }
    }

    let max_votes = counts.values().copied().max().unwrap_or(0);
    let top_ids = players
        .iter()
        .filter(|p| counts.get(&p.id) == Some(&max_votes))
        .map(|p| p.id.clone())
        .collect();

    VoteTally {
        counts,
        max_votes,
        top_ids,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Group,
    Imposters,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Outcome {
    pub winner: Winner,
    pub imposter_ids: Vec<PlayerId>,
    pub top_ids: Vec<PlayerId>,
    pub max_votes: u32,
}

/// The group wins when any of the most-voted players is an imposter, so a
/// tie between an imposter and a non-imposter goes to the group.
pub fn determine_outcome(round: &Round, tally: &VoteTally) -> Outcome {
    let caught = tally.top_ids.iter().any(|id| round.is_imposter(id));
    Outcome {
        winner: if caught {
            Winner::Group
        } else {
            Winner::Imposters
        },
        imposter_ids: round.imposter_ids.clone(),
        top_ids: tally.top_ids.clone(),
        max_votes: tally.max_votes,
    }
}
