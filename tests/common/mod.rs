// tests/common/mod.rs
#![allow(dead_code)]

use rand::{SeedableRng, rngs::StdRng};
use trivia_quiz::{
    AppState,
    models::question::{Difficulty, Question},
    quiz::{QuestionRepository, QuizSession},
    storage::MemoryStore,
};

/// A question whose correct choice is always "right".
pub fn question(text: &str, category: &str, difficulty: Difficulty) -> Question {
    Question {
        text: text.to_string(),
        choices: vec![
            "right".to_string(),
            "wrong A".to_string(),
            "wrong B".to_string(),
            "wrong C".to_string(),
        ],
        answer: "right".to_string(),
        category: category.to_string(),
        difficulty,
    }
}

/// `count` questions cycling through a few categories and all difficulties.
pub fn mixed_repository(count: usize) -> QuestionRepository {
    let categories = ["HTML", "CSS", "GK", "DSA"];
    let difficulties = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
    let questions = (0..count)
        .map(|i| {
            question(
                &format!("Q{}", i),
                categories[i % categories.len()],
                difficulties[i % difficulties.len()],
            )
        })
        .collect();
    QuestionRepository::new(questions)
}

/// Q1, Q2, Q3 in GK, all Hard.
pub fn three_hard_gk() -> QuestionRepository {
    QuestionRepository::new(vec![
        question("Q1", "GK", Difficulty::Hard),
        question("Q2", "GK", Difficulty::Hard),
        question("Q3", "GK", Difficulty::Hard),
    ])
}

pub fn seeded_session(seed: u64) -> QuizSession<StdRng> {
    QuizSession::with_rng(StdRng::seed_from_u64(seed))
}

pub fn seeded_app(repository: QuestionRepository, seed: u64) -> AppState<StdRng> {
    AppState::with_rng(
        repository,
        Box::new(MemoryStore::new()),
        StdRng::seed_from_u64(seed),
    )
}

/// Index of the correct choice among the displayed ones.
pub fn correct_index(choices: &[String]) -> usize {
    choices.iter().position(|c| c == "right").expect("correct choice shown")
}

pub fn wrong_index(choices: &[String]) -> usize {
    choices.iter().position(|c| c != "right").expect("wrong choice shown")
}
