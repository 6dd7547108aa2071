//! Static question bank.
//!
//! The built-in catalog is embedded at compile time; a replacement can be
//! loaded from a JSON file with the same shape.

use crate::error::{GameError, GameResult};
use crate::types::QuestionPair;
use std::collections::HashSet;
use std::path::Path;

const BUILTIN_QUESTIONS: &str = include_str!("../data/questions.json");

/// Read-only, non-empty collection of question pairs
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    pairs: Vec<QuestionPair>,
}

impl QuestionCatalog {
    /// Validate and wrap a list of pairs. Rejects empty lists and duplicate ids.
    pub fn new(pairs: Vec<QuestionPair>) -> GameResult<Self> {
        if pairs.is_empty() {
            return Err(GameError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for pair in &pairs {
            if !seen.insert(pair.id.as_str()) {
                return Err(GameError::InvalidConfiguration(format!(
                    "Duplicate question id '{}'",
                    pair.id
                )));
            }
        }

        Ok(Self { pairs })
    }

    pub fn builtin() -> GameResult<Self> {
        Self::from_json(BUILTIN_QUESTIONS)
    }

    pub fn from_json(json: &str) -> GameResult<Self> {
        let pairs: Vec<QuestionPair> =
            serde_json::from_str(json).map_err(|e| GameError::CatalogLoad(e.to_string()))?;
        Self::new(pairs)
    }

    pub fn from_path(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| GameError::CatalogLoad(format!("{}: {}", path.display(), e)))?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            "Loaded {} questions from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn pairs(&self) -> &[QuestionPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&QuestionPair> {
        self.pairs.iter().find(|p| p.id == id)
    }

    /// Distinct categories in catalog order
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.pairs
            .iter()
            .filter(|p| seen.insert(p.category.as_str()))
            .map(|p| p.category.clone())
            .collect()
    }

    /// Candidate pool for the selected categories. An empty selection means
    /// every category; a selection matching nothing falls back to the whole
    /// catalog.
    pub fn pool(&self, selected: &[String]) -> Vec<&QuestionPair> {
        if selected.is_empty() {
            return self.pairs.iter().collect();
        }

        let filtered: Vec<&QuestionPair> = self
            .pairs
            .iter()
            .filter(|p| selected.contains(&p.category))
            .collect();

        if filtered.is_empty() {
            tracing::warn!(
                "No questions match categories {:?}, using the full catalog",
                selected
            );
            self.pairs.iter().collect()
        } else {
            filtered
        }
    }
}
