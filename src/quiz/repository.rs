// src/quiz/repository.rs

use std::fs;
use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    models::question::{Difficulty, Filter, Question, QuestionSource, Selection},
};

/// The full question set, loaded once and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct QuestionRepository {
    questions: Vec<Question>,
}

impl QuestionRepository {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Parses a question source document.
    ///
    /// Any invalid question fails the whole load; the caller keeps an empty
    /// repository rather than a partial one.
    pub fn from_json_str(raw: &str) -> AppResult<Self> {
        let source: QuestionSource = serde_json::from_str(raw)
            .map_err(|e| AppError::LoadError(format!("could not parse questions: {}", e)))?;

        let questions = source
            .questions
            .into_iter()
            .map(Question::try_from)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self { questions })
    }

    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::LoadError(format!("could not read {}: {}", path.display(), e))
        })?;

        let repository = Self::from_json_str(&raw)?;
        tracing::info!(
            "Loaded {} questions from {}",
            repository.len(),
            path.display()
        );
        Ok(repository)
    }

    /// Questions matching both axes of the selection, as a fresh copy.
    pub fn filter(&self, selection: &Selection) -> Vec<Question> {
        self.questions
            .iter()
            .filter(|q| selection.matches(q))
            .cloned()
            .collect()
    }

    /// Convenience over [`filter`](Self::filter) taking the two axes directly.
    pub fn filter_by(
        &self,
        category: &Filter<String>,
        difficulty: &Filter<Difficulty>,
    ) -> Vec<Question> {
        self.filter(&Selection {
            category: category.clone(),
            difficulty: difficulty.clone(),
        })
    }

    /// Distinct category tags, in the order they first appear.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for q in &self.questions {
            if !seen.contains(&q.category.as_str()) {
                seen.push(&q.category);
            }
        }
        seen
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
