// src/models/question.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::{EASY_SECONDS, HARD_SECONDS, MEDIUM_SECONDS, MIXED_CATEGORY};
use crate::error::AppError;

/// Label used on either filter axis to mean "no filter".
pub const ALL: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Seconds on the countdown for each question of this difficulty.
    pub fn time_limit(self) -> u32 {
        match self {
            Difficulty::Easy => EASY_SECONDS,
            Difficulty::Medium => MEDIUM_SECONDS,
            Difficulty::Hard => HARD_SECONDS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(AppError::InvalidInput(format!(
                "Unknown difficulty '{}'. Use Easy, Medium, Hard or All.",
                other
            ))),
        }
    }
}

/// A single immutable quiz question.
///
/// Serialized the way the question source stores it: the question text under
/// `question` and the correct choice repeated verbatim under `answer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,

    /// Choices in source order. Display order is shuffled per session.
    pub choices: Vec<String>,

    /// The designated correct choice; always one of `choices`.
    pub answer: String,

    pub category: String,

    pub difficulty: Difficulty,
}

impl Question {
    pub fn is_correct(&self, choice: &str) -> bool {
        self.answer == choice
    }
}

/// Question as it arrives from the source, before checking that it is usable.
#[derive(Debug, Deserialize, Validate)]
pub struct QuestionRecord {
    #[validate(length(min = 1, message = "question text cannot be empty"))]
    pub question: String,
    #[validate(custom(function = validate_choices))]
    pub choices: Vec<String>,
    pub answer: String,
    #[validate(length(min = 1, message = "category cannot be empty"))]
    pub category: String,
    pub difficulty: Difficulty,
}

fn validate_choices(choices: &[String]) -> Result<(), validator::ValidationError> {
    if choices.len() < 2 {
        return Err(validator::ValidationError::new("at_least_two_choices"));
    }
    Ok(())
}

impl TryFrom<QuestionRecord> for Question {
    type Error = AppError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        if let Err(validation_errors) = record.validate() {
            return Err(AppError::LoadError(format!(
                "invalid question '{}': {}",
                record.question, validation_errors
            )));
        }

        if !record.choices.iter().any(|c| c == &record.answer) {
            return Err(AppError::LoadError(format!(
                "question '{}' has answer '{}' which is not one of its choices",
                record.question, record.answer
            )));
        }

        Ok(Question {
            text: record.question,
            choices: record.choices,
            answer: record.answer,
            category: record.category,
            difficulty: record.difficulty,
        })
    }
}

/// Top-level shape of the question source file.
#[derive(Debug, Deserialize)]
pub struct QuestionSource {
    #[serde(default)]
    pub questions: Vec<QuestionRecord>,
}

/// One axis of the quiz selection: everything, or one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }
}

/// The category/difficulty pair a quiz run is started with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub category: Filter<String>,
    pub difficulty: Filter<Difficulty>,
}

impl Default for Selection {
    fn default() -> Self {
        Self::all()
    }
}

impl Selection {
    pub fn all() -> Self {
        Self {
            category: Filter::All,
            difficulty: Filter::All,
        }
    }

    /// Builds a selection from display labels, where "All" (any case) means no
    /// filter on that axis.
    pub fn parse(category: &str, difficulty: &str) -> Result<Self, AppError> {
        let category = category.trim();
        if category.is_empty() {
            return Err(AppError::InvalidInput("Please choose a category.".to_string()));
        }

        let category = if category.eq_ignore_ascii_case(ALL) {
            Filter::All
        } else {
            Filter::Only(category.to_string())
        };

        let difficulty = if difficulty.trim().eq_ignore_ascii_case(ALL) {
            Filter::All
        } else {
            Filter::Only(difficulty.parse()?)
        };

        Ok(Self {
            category,
            difficulty,
        })
    }

    pub fn matches(&self, question: &Question) -> bool {
        self.category.matches(&question.category) && self.difficulty.matches(&question.difficulty)
    }

    /// Both axes unfiltered.
    pub fn is_mixed(&self) -> bool {
        self.category.is_all() && self.difficulty.is_all()
    }

    pub fn category_label(&self) -> &str {
        match &self.category {
            Filter::All => ALL,
            Filter::Only(category) => category,
        }
    }

    pub fn difficulty_label(&self) -> &str {
        match self.difficulty {
            Filter::All => ALL,
            Filter::Only(difficulty) => difficulty.as_str(),
        }
    }

    /// Leaderboard list this run's result is filed under.
    pub fn leaderboard_category(&self) -> &str {
        match &self.category {
            Filter::All => MIXED_CATEGORY,
            Filter::Only(category) => category,
        }
    }

    /// Countdown length per question; an unfiltered difficulty counts as Medium.
    pub fn time_limit(&self) -> u32 {
        match self.difficulty {
            Filter::All => Difficulty::Medium.time_limit(),
            Filter::Only(difficulty) => difficulty.time_limit(),
        }
    }
}
