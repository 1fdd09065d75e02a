//! High score leaderboard system
//!
//! Persisted through a [`HighscoreStore`] slot, keeps the top `max_scores`
//! entries sorted from highest to lowest.

pub mod csv;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::persistence;
use crate::platform::{Clock, HighscoreStore, SystemClock};
use crate::settings::HighscoreConfig;

/// Name recorded when a player leaves theirs blank
pub const ANONYMOUS: &str = "Anonymous";

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighscoreEntry {
    /// Player name
    pub name: String,
    /// Points scored; `None` when an imported score was not a number
    pub score: Option<i64>,
    /// Date the score was recorded
    pub date: String,
}

impl HighscoreEntry {
    pub fn new(name: impl Into<String>, score: i64, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: Some(score),
            date: date.into(),
        }
    }

    /// Score as displayed and exported (`NaN` for a missing score)
    pub fn score_label(&self) -> String {
        match self.score {
            Some(score) => score.to_string(),
            None => "NaN".to_string(),
        }
    }
}

/// Sort highest first and drop everything past `max_scores`.
/// Missing scores rank last; ties keep their current order.
fn rank(entries: &mut Vec<HighscoreEntry>, max_scores: usize) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(max_scores);
}

/// High score leaderboard
#[derive(Debug)]
pub struct HighscoreManager<S: HighscoreStore, C: Clock = SystemClock> {
    entries: Vec<HighscoreEntry>,
    config: HighscoreConfig,
    store: S,
    clock: C,
}

impl<S: HighscoreStore> HighscoreManager<S> {
    /// Board with default settings, dated by the system clock
    pub fn new(store: S) -> Self {
        Self::with_config(store, SystemClock, HighscoreConfig::default())
    }

    /// Board holding at most `max_scores` entries
    pub fn with_max_scores(store: S, max_scores: usize) -> Self {
        Self::with_config(store, SystemClock, HighscoreConfig::with_max_scores(max_scores))
    }
}

impl<S: HighscoreStore, C: Clock> HighscoreManager<S, C> {
    /// Load the board from `store`. Anything unreadable starts an empty board.
    pub fn with_config(store: S, clock: C, config: HighscoreConfig) -> Self {
        let mut entries = persistence::load_entries(&store);
        let stored = entries.len();
        rank(&mut entries, config.max_scores);
        if entries.len() < stored {
            log::info!(
                "Dropped {} stored high scores beyond capacity {}",
                stored - entries.len(),
                config.max_scores
            );
        }

        Self {
            entries,
            config,
            store,
            clock,
        }
    }

    pub fn config(&self) -> &HighscoreConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn max_scores(&self) -> usize {
        self.config.max_scores
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<i64> {
        self.entries.first().and_then(|e| e.score)
    }

    /// Check if a score qualifies for the leaderboard
    pub fn is_highscore(&self, score: i64) -> bool {
        if self.entries.len() < self.config.max_scores {
            return true;
        }
        // Full board: must beat the lowest entry
        self.entries
            .last()
            .is_some_and(|lowest| lowest.score.is_none_or(|s| score > s))
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: i64) -> Option<usize> {
        if score <= 0 || !self.is_highscore(score) {
            return None;
        }
        let rank = self
            .entries
            .iter()
            .position(|e| e.score.is_none_or(|s| score > s));
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a new score if it is positive and qualifies.
    /// Returns false without touching the board or the store otherwise.
    pub fn add_highscore(&mut self, name: &str, score: i64) -> bool {
        if score <= 0 || !self.is_highscore(score) {
            log::debug!("Rejected score {} for {:?}", score, name);
            return false;
        }

        let name = if name.is_empty() { ANONYMOUS } else { name };
        self.entries
            .push(HighscoreEntry::new(name, score, self.clock.today()));
        rank(&mut self.entries, self.config.max_scores);
        log::debug!("Added score {} for {:?}", score, name);

        self.persist();
        true
    }

    /// Snapshot of the board, highest first
    pub fn get_highscores(&self) -> Vec<HighscoreEntry> {
        self.entries.clone()
    }

    /// Borrowed view of the board, highest first
    pub fn entries(&self) -> &[HighscoreEntry] {
        &self.entries
    }

    /// Render the board in the configured CSV dialect
    pub fn to_csv(&self) -> Result<String> {
        csv::write_csv(&self.entries, self.config.csv_dialect)
    }

    /// Merge every parsed CSV row into the board, then re-rank.
    /// Imported rows skip the qualification check. Returns the number of rows
    /// parsed, not the number that survived truncation.
    pub fn import_from_csv(&mut self, content: &str) -> usize {
        let rows = csv::parse_csv(content, self.config.csv_dialect, self.config.import_policy);
        let count = rows.len();

        if count > 0 {
            self.entries.extend(rows);
            rank(&mut self.entries, self.config.max_scores);
            self.persist();
        }

        log::info!("Imported {} high scores from CSV", count);
        count
    }

    /// Remove every entry and persist the empty board
    pub fn clear_highscores(&mut self) {
        self.entries.clear();
        self.persist();
    }

    fn persist(&mut self) {
        if let Err(e) = persistence::save_entries(&mut self.store, &self.entries) {
            log::warn!("Failed to save high scores: {}", e);
        }
    }
}
