// src/models/leaderboard.rs

use serde::{Deserialize, Serialize};

/// One recorded quiz outcome, shown as a row in a ranked list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Display name of the player ("Guest" when playing without a profile).
    pub user: String,
    pub avatar: String,
    pub score: u32,
    pub total: u32,
    /// Difficulty label of the run, "All" included.
    pub difficulty: String,
    pub date: chrono::DateTime<chrono::Utc>,
}

/// Final outcome of a finished run together with the best-score delta.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
    pub category: String,
    pub difficulty: String,
    pub previous_best: u32,
    pub new_best: u32,
}
