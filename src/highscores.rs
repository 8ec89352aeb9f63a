//! Top-5 high-score table persisted as a JSON list.

use std::fs;
use std::path::Path;

use crate::error::GameError;

pub const TABLE_SIZE: usize = 5;

/// Scores in descending order, never more than `TABLE_SIZE`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighScores {
    scores: Vec<u32>,
}

impl Default for HighScores {
    fn default() -> Self {
        Self {
            scores: vec![0; TABLE_SIZE],
        }
    }
}

impl HighScores {
    /// Build a table from arbitrary scores: sorted descending, truncated.
    pub fn from_scores(mut scores: Vec<u32>) -> Self {
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.truncate(TABLE_SIZE);
        Self { scores }
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn best(&self) -> u32 {
        self.scores.first().copied().unwrap_or(0)
    }

    /// Add a finished session's score.
    pub fn record(&mut self, score: u32) {
        self.scores.push(score);
        self.scores.sort_unstable_by(|a, b| b.cmp(a));
        self.scores.truncate(TABLE_SIZE);
    }

    pub fn read(path: &Path) -> Result<Self, GameError> {
        let contents = fs::read_to_string(path).map_err(|e| GameError::io(path, e))?;
        let scores: Vec<u32> =
            serde_json::from_str(&contents).map_err(|source| GameError::ScoreFormat {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_scores(scores))
    }

    /// Read the table; a missing or corrupt file yields five zeros.
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(table) => table,
            Err(err) => {
                log::warn!("{err}. Starting with an empty high-score table.");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), GameError> {
        let json = serde_json::to_string(&self.scores).map_err(|source| {
            GameError::ScoreFormat {
                path: path.to_path_buf(),
                source,
            }
        })?;
        fs::write(path, json).map_err(|e| GameError::io(path, e))
    }

    /// Record a session's score and persist the table.  A failed write is
    /// logged; the in-memory table keeps the score either way.
    pub fn record_session(&mut self, score: u32, path: &Path) {
        self.record(score);
        match self.save(path) {
            Ok(()) => log::info!("Recorded {score} kills. High scores: {:?}", self.scores),
            Err(err) => log::error!("Could not save high scores: {err}"),
        }
    }
}
