// src/ledger.rs

//! Best scores per (category, difficulty) and per-category leaderboards.

use crate::{
    config::{KNOWN_CATEGORIES, LEADERBOARD_SIZE, MIXED_CATEGORY},
    error::AppResult,
    models::{leaderboard::LeaderboardEntry, question::ALL},
    storage::{KeyValueStore, write_json},
};

pub fn high_score_key(category: &str, difficulty: &str) -> String {
    format!("quizHighScore_{}_{}", category, difficulty)
}

pub fn leaderboard_key(category: &str) -> String {
    format!("leaderboard_{}", category)
}

/// Sorts best-first and keeps the top entries. The sort is stable, so equal
/// scores stay in arrival order.
fn rank(entries: &mut Vec<LeaderboardEntry>) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(LEADERBOARD_SIZE);
}

/// Score bookkeeping over any key-value store.
pub struct ScoreLedger<'s, S: KeyValueStore + ?Sized> {
    store: &'s mut S,
}

impl<'s, S: KeyValueStore + ?Sized> ScoreLedger<'s, S> {
    pub fn new(store: &'s mut S) -> Self {
        Self { store }
    }

    /// Best score recorded for the exact pair, 0 when there is none.
    ///
    /// An unreadable stored value counts as 0.
    pub fn high_score(&self, category: &str, difficulty: &str) -> AppResult<u32> {
        let key = high_score_key(category, difficulty);
        let Some(raw) = self.store.get(&key)? else {
            return Ok(0);
        };

        match raw.trim().parse::<u32>() {
            Ok(best) => Ok(best),
            Err(e) => {
                tracing::warn!("Ignoring unreadable high score under {}: {}", key, e);
                Ok(0)
            }
        }
    }

    /// Stores `score` if it beats the current best and returns the best as it
    /// was before this call.
    pub fn record_high_score(&mut self, category: &str, difficulty: &str, score: u32) -> AppResult<u32> {
        let previous = self.high_score(category, difficulty)?;

        if score > previous {
            write_json(&mut *self.store, &high_score_key(category, difficulty), &score)?;
            tracing::info!(
                "New high score for {} ({}): {} -> {}",
                category,
                difficulty,
                previous,
                score
            );
        }

        Ok(previous)
    }

    fn stored_list(&self, category: &str) -> AppResult<Vec<LeaderboardEntry>> {
        let key = leaderboard_key(category);
        let Some(raw) = self.store.get(&key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(list) => Ok(list),
            Err(e) => {
                tracing::warn!("Ignoring unreadable leaderboard under {}: {}", key, e);
                Ok(Vec::new())
            }
        }
    }

    /// Adds an entry to a category's list, keeping it ranked and capped.
    pub fn record_leaderboard_entry(&mut self, category: &str, entry: LeaderboardEntry) -> AppResult<()> {
        let mut list = self.stored_list(category)?;
        list.push(entry);
        rank(&mut list);

        write_json(&mut *self.store, &leaderboard_key(category), &list)?;
        Ok(())
    }

    /// Ranked entries for one category, or the merged top entries for "All".
    ///
    /// The "All" view merges the already-capped lists of every known category
    /// plus "Mixed", so an entry dropped from its own list never reappears.
    pub fn load_leaderboard(&self, category: &str) -> AppResult<Vec<LeaderboardEntry>> {
        let mut entries = Vec::new();

        if category.eq_ignore_ascii_case(ALL) {
            for cat in KNOWN_CATEGORIES.iter().copied().chain([MIXED_CATEGORY]) {
                entries.extend(self.stored_list(cat)?);
            }
        } else {
            entries = self.stored_list(category)?;
        }

        rank(&mut entries);
        Ok(entries)
    }
}
