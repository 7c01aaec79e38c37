// src/console/share.rs

use url::Url;

use crate::models::{leaderboard::QuizResult, question::ALL};

/// One-line brag about a finished run.
pub fn share_message(result: &QuizResult) -> String {
    let category = if result.category == ALL {
        "All Categories"
    } else {
        &result.category
    };
    let difficulty = if result.difficulty == ALL {
        "All Levels"
    } else {
        &result.difficulty
    };

    format!(
        "I scored {}/{} in the {} quiz ({})!",
        result.score, result.total, category, difficulty
    )
}

pub fn whatsapp_link(result: &QuizResult, quiz_url: &str) -> Result<Url, url::ParseError> {
    let text = format!("{} Try it here: {}", share_message(result), quiz_url);
    Url::parse_with_params("https://wa.me/", &[("text", text)])
}

pub fn linkedin_link(quiz_url: &str) -> Result<Url, url::ParseError> {
    Url::parse_with_params(
        "https://www.linkedin.com/sharing/share-offsite/",
        &[("url", quiz_url)],
    )
}

/// Text put on the clipboard by "copy link" style sharing.
pub fn copy_text(result: &QuizResult, quiz_url: &str) -> String {
    format!("{} {}", share_message(result), quiz_url)
}
