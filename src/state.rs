// src/state.rs

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    error::AppResult,
    ledger::ScoreLedger,
    models::{
        leaderboard::{LeaderboardEntry, QuizResult},
        question::Selection,
        user::UserProfile,
    },
    profile::{ProfileStore, Theme, guest_profile},
    quiz::{Phase, QuestionRepository, QuizSession, Reveal, SessionSnapshot},
    storage::KeyValueStore,
};

/// The one context object behind every user command.
///
/// Owns the loaded questions, the persistent store, the signed-in player and
/// the current run. `start`, `login` and `restart` are its reset points.
pub struct AppState<R = StdRng> {
    repository: QuestionRepository,
    store: Box<dyn KeyValueStore>,
    session: QuizSession<R>,
    current_user: Option<UserProfile>,
    last_result: Option<QuizResult>,
}

impl AppState<StdRng> {
    pub fn new(repository: QuestionRepository, store: Box<dyn KeyValueStore>) -> Self {
        Self::with_rng(repository, store, StdRng::from_entropy())
    }
}

impl<R: Rng> AppState<R> {
    pub fn with_rng(repository: QuestionRepository, store: Box<dyn KeyValueStore>, rng: R) -> Self {
        Self {
            repository,
            store,
            session: QuizSession::with_rng(rng),
            current_user: None,
            last_result: None,
        }
    }

    pub fn repository(&self) -> &QuestionRepository {
        &self.repository
    }

    pub fn session(&self) -> &QuizSession<R> {
        &self.session
    }

    pub fn current_user(&self) -> Option<&UserProfile> {
        self.current_user.as_ref()
    }

    pub fn login(&mut self, name: &str, pin: &str, avatar: Option<&str>) -> AppResult<UserProfile> {
        let profile = ProfileStore::new(&mut *self.store).login(name, pin, avatar)?;
        self.current_user = Some(profile.clone());
        Ok(profile)
    }

    pub fn play_as_guest(&mut self) -> UserProfile {
        let guest = guest_profile();
        self.current_user = Some(guest.clone());
        guest
    }

    pub fn last_used_name(&mut self) -> AppResult<Option<String>> {
        ProfileStore::new(&mut *self.store).last_used_name()
    }

    /// Starts a new run. Plays as the guest when nobody has signed in.
    pub fn start(&mut self, selection: Selection) -> AppResult<SessionSnapshot> {
        self.session.start(selection, &self.repository)?;

        if self.current_user.is_none() {
            self.current_user = Some(guest_profile());
        }
        self.last_result = None;
        Ok(self.snapshot())
    }

    /// Answers with the 0-based choice in displayed order.
    pub fn answer(&mut self, choice: usize) -> AppResult<SessionSnapshot> {
        self.session.answer(choice)?;
        Ok(self.snapshot())
    }

    /// One unit of the repeating timer. Returns the reveal when the current
    /// question just timed out.
    pub fn tick(&mut self) -> Option<Reveal> {
        self.session.tick()
    }

    pub fn advance(&mut self) -> AppResult<SessionSnapshot> {
        if self.session.advance()? == Phase::Finished {
            self.record_result()?;
        }
        Ok(self.snapshot())
    }

    pub fn restart(&mut self) -> SessionSnapshot {
        self.session.restart();
        self.last_result = None;
        self.snapshot()
    }

    fn record_result(&mut self) -> AppResult<()> {
        let selection = self.session.selection().clone();
        let score = self.session.score();
        let total = self.session.total() as u32;
        let player = self.current_user.clone().unwrap_or_else(guest_profile);

        let mut ledger = ScoreLedger::new(&mut *self.store);

        let previous_best = ledger.record_high_score(
            selection.category_label(),
            selection.difficulty_label(),
            score,
        )?;

        ledger.record_leaderboard_entry(
            selection.leaderboard_category(),
            LeaderboardEntry {
                user: player.name,
                avatar: player.avatar,
                score,
                total,
                difficulty: selection.difficulty_label().to_string(),
                date: chrono::Utc::now(),
            },
        )?;

        self.last_result = Some(QuizResult {
            score,
            total,
            category: selection.category_label().to_string(),
            difficulty: selection.difficulty_label().to_string(),
            previous_best,
            new_best: previous_best.max(score),
        });
        Ok(())
    }

    pub fn last_result(&self) -> Option<&QuizResult> {
        self.last_result.as_ref()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snapshot = self.session.snapshot();
        snapshot.result = self.last_result.clone();
        snapshot
    }

    pub fn view_leaderboard(&mut self, category: &str) -> AppResult<Vec<LeaderboardEntry>> {
        ScoreLedger::new(&mut *self.store).load_leaderboard(category)
    }

    /// Best score on record for a selection, as shown before starting.
    pub fn best_score(&mut self, selection: &Selection) -> AppResult<u32> {
        ScoreLedger::new(&mut *self.store)
            .high_score(selection.category_label(), selection.difficulty_label())
    }

    pub fn theme(&mut self) -> AppResult<Theme> {
        ProfileStore::new(&mut *self.store).theme()
    }

    pub fn toggle_theme(&mut self) -> AppResult<Theme> {
        ProfileStore::new(&mut *self.store).toggle_theme()
    }
}
