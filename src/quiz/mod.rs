// src/quiz/mod.rs

pub mod repository;
pub mod session;
pub mod timer;

pub use repository::QuestionRepository;
pub use session::{Phase, Progress, QuizSession, Reveal, SessionSnapshot};
pub use timer::Countdown;
