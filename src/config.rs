// src/config.rs

use std::env;
use std::path::PathBuf;
use dotenvy::dotenv;

/// Questions in an All/All ("Mixed") run.
pub const MIXED_QUESTION_COUNT: usize = 10;

/// Entries kept per leaderboard list.
pub const LEADERBOARD_SIZE: usize = 10;

/// Seconds per question, by difficulty.
pub const EASY_SECONDS: u32 = 20;
pub const MEDIUM_SECONDS: u32 = 15;
pub const HARD_SECONDS: u32 = 10;

pub const GUEST_NAME: &str = "Guest";
pub const GUEST_AVATAR: &str = "🧠";

/// Leaderboard category used when the category filter is "All".
pub const MIXED_CATEGORY: &str = "Mixed";

/// Categories merged, in this order, when viewing the "All" leaderboard.
/// `MIXED_CATEGORY` is appended after these.
pub const KNOWN_CATEGORIES: [&str; 8] = [
    "HTML",
    "CSS",
    "JavaScript",
    "GK",
    "Web",
    "CoreJava",
    "OOP",
    "DSA",
];

/// Avatars offered when creating a profile.
pub const AVATARS: [&str; 6] = ["🦉", "🦊", "🐼", "🐙", "🚀", "🎯"];

#[derive(Debug, Clone)]
pub struct Config {
    pub questions_path: PathBuf,
    pub store_path: PathBuf,
    pub share_url: String,
    pub tick_millis: u64,
    pub log_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let questions_path = env::var("QUIZ_QUESTIONS_PATH")
            .unwrap_or_else(|_| "questions.json".to_string())
            .into();

        let store_path = env::var("QUIZ_STORE_PATH")
            .unwrap_or_else(|_| "quiz-store.json".to_string())
            .into();

        let share_url = env::var("QUIZ_SHARE_URL")
            .unwrap_or_else(|_| "https://example.com/quiz/".to_string());

        let tick_millis = env::var("QUIZ_TICK_MILLIS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(1000);

        let log_dir = env::var("QUIZ_LOG_DIR")
            .unwrap_or_else(|_| "logs".to_string())
            .into();

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        Self {
            questions_path,
            store_path,
            share_url,
            tick_millis,
            log_dir,
            rust_log,
        }
    }
}
