// src/quiz/session.rs

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use serde::Serialize;

use super::{repository::QuestionRepository, timer::Countdown};
use crate::{
    config::MIXED_QUESTION_COUNT,
    error::{AppError, AppResult},
    models::{
        leaderboard::QuizResult,
        question::{Question, Selection},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// No run in progress.
    Idle,
    /// A question is shown and the countdown is live.
    Running,
    /// The current question is locked and its answer revealed.
    Answered,
    /// Every question has been completed; score and total are frozen.
    Finished,
}

/// What gets revealed once a question is locked, by answer or by timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reveal {
    /// Index of the correct choice in the displayed order.
    pub correct_choice: usize,
    /// Index the user picked; `None` when the time ran out.
    pub selected: Option<usize>,
    pub correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// 1-based number of the question on screen, clamped to `total`.
    pub current: usize,
    pub total: usize,
    pub completed: usize,
}

/// Everything a presentation layer needs to draw the quiz.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub category: String,
    pub difficulty: String,
    pub question: Option<String>,
    pub choices: Vec<String>,
    pub reveal: Option<Reveal>,
    pub progress: Progress,
    pub time_remaining: u32,
    pub score: u32,
    /// Filled in once a finished run has been recorded.
    pub result: Option<QuizResult>,
}

/// One run through a filtered, shuffled question list.
///
/// Generic over the random source so tests can seed it.
#[derive(Debug)]
pub struct QuizSession<R = StdRng> {
    rng: R,
    selection: Selection,
    questions: Vec<Question>,
    index: usize,
    score: u32,
    completed: usize,
    answered: bool,
    choices: Vec<String>,
    countdown: Countdown,
    reveal: Option<Reveal>,
    phase: Phase,
}

impl QuizSession<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for QuizSession<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> QuizSession<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            selection: Selection::all(),
            questions: Vec::new(),
            index: 0,
            score: 0,
            completed: 0,
            answered: false,
            choices: Vec::new(),
            countdown: Countdown::default(),
            reveal: None,
            phase: Phase::Idle,
        }
    }

    /// Begins a new run, discarding whatever run was in progress.
    ///
    /// Fails without touching the current run when nothing matches the
    /// selection.
    pub fn start(&mut self, selection: Selection, repository: &QuestionRepository) -> AppResult<()> {
        let mut questions = repository.filter(&selection);

        if questions.is_empty() {
            return Err(AppError::NoContent(
                "No questions yet for this combination. Try another one!".to_string(),
            ));
        }

        questions.shuffle(&mut self.rng);

        if selection.is_mixed() && questions.len() > MIXED_QUESTION_COUNT {
            questions.truncate(MIXED_QUESTION_COUNT);
        }

        tracing::info!(
            "Starting quiz: category={} difficulty={} questions={}",
            selection.category_label(),
            selection.difficulty_label(),
            questions.len()
        );

        self.selection = selection;
        self.questions = questions;
        self.index = 0;
        self.score = 0;
        self.completed = 0;
        self.enter_question();
        Ok(())
    }

    fn enter_question(&mut self) {
        let mut choices = self.questions[self.index].choices.clone();
        choices.shuffle(&mut self.rng);

        self.choices = choices;
        self.answered = false;
        self.reveal = None;
        self.countdown.start(self.selection.time_limit());
        self.phase = Phase::Running;

        tracing::debug!("Question {} of {}", self.index + 1, self.questions.len());
    }

    /// Locks the current question with the choice at `choice` (displayed order).
    ///
    /// Returns `Ok(None)` when the question was already locked; only the first
    /// answer counts.
    pub fn answer(&mut self, choice: usize) -> AppResult<Option<Reveal>> {
        match self.phase {
            Phase::Running => {}
            Phase::Answered => return Ok(None),
            Phase::Idle | Phase::Finished => {
                return Err(AppError::InvalidState(
                    "There is no question to answer. Start a quiz first.".to_string(),
                ));
            }
        }

        if choice >= self.choices.len() {
            return Err(AppError::InvalidInput(format!(
                "Pick a choice between 1 and {}.",
                self.choices.len()
            )));
        }

        Ok(self.lock(Some(choice)))
    }

    /// Advances the countdown one unit, timing the question out when it expires.
    pub fn tick(&mut self) -> Option<Reveal> {
        if self.phase != Phase::Running || self.answered {
            return None;
        }

        if self.countdown.tick() {
            return self.time_out();
        }
        None
    }

    /// Locks the current question with no answer. No-op once answered.
    pub fn time_out(&mut self) -> Option<Reveal> {
        if self.phase != Phase::Running {
            return None;
        }
        tracing::debug!("Time is up on question {}", self.index + 1);
        self.lock(None)
    }

    fn lock(&mut self, selected: Option<usize>) -> Option<Reveal> {
        if self.answered {
            return None;
        }
        self.answered = true;
        self.countdown.stop();

        let question = &self.questions[self.index];
        let correct = selected
            .map(|i| question.is_correct(&self.choices[i]))
            .unwrap_or(false);
        if correct {
            self.score += 1;
        }

        let correct_choice = self
            .choices
            .iter()
            .position(|c| question.is_correct(c))
            .unwrap_or_default();

        let reveal = Reveal {
            correct_choice,
            selected,
            correct,
        };
        self.reveal = Some(reveal);
        self.phase = Phase::Answered;
        Some(reveal)
    }

    /// Moves past an answered question, to the next one or to `Finished`.
    pub fn advance(&mut self) -> AppResult<Phase> {
        if self.phase != Phase::Answered {
            return Err(AppError::InvalidState(
                "Answer the current question first.".to_string(),
            ));
        }

        let total = self.questions.len();
        if self.completed < total {
            self.completed += 1;
        }

        self.index += 1;
        if self.index < total {
            self.enter_question();
        } else {
            self.countdown.stop();
            self.completed = total;
            self.index = total;
            self.phase = Phase::Finished;
            tracing::info!("Quiz finished: {}/{}", self.score, total);
        }

        Ok(self.phase)
    }

    /// Abandons the run and returns to `Idle`. Persisted scores are untouched.
    pub fn restart(&mut self) {
        self.countdown.stop();
        self.selection = Selection::all();
        self.questions.clear();
        self.index = 0;
        self.score = 0;
        self.completed = 0;
        self.answered = false;
        self.choices.clear();
        self.reveal = None;
        self.phase = Phase::Idle;
    }

    pub fn progress(&self) -> Progress {
        let total = self.questions.len();
        let current = if total == 0 {
            0
        } else if self.index >= total {
            total
        } else {
            self.index + 1
        };

        Progress {
            current,
            total,
            completed: self.completed,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn time_remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::Running | Phase::Answered => self.questions.get(self.index),
            Phase::Idle | Phase::Finished => None,
        }
    }

    /// Choices of the current question, in displayed order.
    pub fn choices(&self) -> &[String] {
        match self.phase {
            Phase::Running | Phase::Answered => &self.choices,
            Phase::Idle | Phase::Finished => &[],
        }
    }

    pub fn revealed(&self) -> Option<Reveal> {
        self.reveal
    }

    /// Questions of this run in play order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            category: self.selection.category_label().to_string(),
            difficulty: self.selection.difficulty_label().to_string(),
            question: self.current_question().map(|q| q.text.clone()),
            choices: self.choices().to_vec(),
            reveal: self.revealed(),
            progress: self.progress(),
            time_remaining: self.time_remaining(),
            score: self.score,
            result: None,
        }
    }
}
