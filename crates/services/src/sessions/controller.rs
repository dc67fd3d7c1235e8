use chrono::{DateTime, Utc};
use quiz_core::model::{
    Language, Level, LevelCatalog, LevelId, Page, QuestionCount, QuizResult, QuizSettings,
    UserProfile,
};

use crate::Clock;
use crate::error::{Action, SessionError};
use crate::profile::ProfileAggregator;

use super::state::SessionState;
use super::view::SessionSnapshot;

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Drives one user session: home → setup → quiz → results.
///
/// Every transition either applies fully or returns an error with nothing
/// changed. Finishing a quiz is the only way the profile moves.
#[derive(Debug, Clone)]
pub struct SessionController {
    state: SessionState,
    language: Language,
    catalog: LevelCatalog,
    profile: ProfileAggregator,
    clock: Clock,
}

impl SessionController {
    /// Start a session on the home page with the given starting profile.
    #[must_use]
    pub fn new(catalog: LevelCatalog, profile: UserProfile) -> Self {
        Self {
            state: SessionState::Home,
            language: Language::default(),
            catalog,
            profile: ProfileAggregator::new(profile),
            clock: Clock::system(),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    // ─── ACCESSORS ─────────────────────────────────────────────────────────────

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.state.page()
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn selected_level(&self) -> Option<&Level> {
        self.state.level()
    }

    #[must_use]
    pub fn settings(&self) -> Option<&QuizSettings> {
        self.state.settings()
    }

    #[must_use]
    pub fn result(&self) -> Option<&QuizResult> {
        self.state.result()
    }

    #[must_use]
    pub fn attempt(&self) -> Option<u32> {
        self.state.attempt()
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.state.completed_at()
    }

    #[must_use]
    pub fn profile(&self) -> &UserProfile {
        self.profile.profile()
    }

    /// Consume the session, handing back the final profile.
    #[must_use]
    pub fn into_profile(self) -> UserProfile {
        self.profile.into_profile()
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            page: self.page(),
            language: self.language,
            selected_level: self.selected_level().map(Level::id),
            settings: self.settings().cloned(),
            result: self.result().cloned(),
            attempt: self.attempt(),
            completed_at: self.completed_at(),
            profile: self.profile().clone(),
        }
    }

    // ─── TRANSITIONS ───────────────────────────────────────────────────────────

    /// Pick a level on the home page and open quiz setup with default settings.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` when not on the home page and
    /// `SessionError::UnknownLevel` if the catalog has no such level.
    pub fn select_level(&mut self, id: LevelId) -> Result<(), SessionError> {
        if !matches!(self.state, SessionState::Home) {
            return Err(self.reject(Action::SelectLevel));
        }
        let level = self
            .catalog
            .get(id)
            .cloned()
            .ok_or(SessionError::UnknownLevel(id))?;
        let settings = QuizSettings::new(self.language, id);

        log::debug!("level {id} selected, language {}", self.language);
        self.state = SessionState::QuizSetupActive { level, settings };
        Ok(())
    }

    /// Confirm the question count and begin the first attempt.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` when not on quiz setup and
    /// `SessionError::InvalidQuestionCount` for a zero count.
    pub fn start_quiz(&mut self, number_of_questions: u32) -> Result<(), SessionError> {
        let SessionState::QuizSetupActive { level, settings } = &self.state else {
            return Err(self.reject(Action::StartQuiz));
        };
        let count = QuestionCount::new(number_of_questions)?;
        let level = level.clone();
        let settings = settings.clone().with_question_count(count);

        log::debug!("quiz started: {} questions at {}", count, settings.level());
        self.state = SessionState::QuizActive {
            level,
            settings,
            attempt: 1,
        };
        Ok(())
    }

    /// Record a finished quiz, fold it into the profile and show results.
    ///
    /// Returns the updated profile.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` when no quiz is running,
    /// `SessionError::InvalidResult` if the result breaks its invariant and
    /// `SessionError::Profile` if the profile counters would overflow.
    pub fn complete_quiz(&mut self, result: QuizResult) -> Result<&UserProfile, SessionError> {
        let SessionState::QuizActive {
            level,
            settings,
            attempt,
        } = &self.state
        else {
            return Err(self.reject(Action::CompleteQuiz));
        };
        result.validate()?;
        let (level, settings, attempt) = (level.clone(), settings.clone(), *attempt);

        self.profile.fold(&result)?;
        log::debug!(
            "attempt {attempt} completed: {}/{}",
            result.correct_answers(),
            result.total_questions()
        );
        self.state = SessionState::ResultsActive {
            level,
            settings,
            result,
            attempt,
            completed_at: self.clock.now(),
        };
        Ok(self.profile.profile())
    }

    /// Same as [`SessionController::complete_quiz`] for collaborators that only
    /// track counts.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` when no quiz is running and
    /// `SessionError::InvalidResult` if `correct > total` or `total == 0`.
    pub fn complete_quiz_with_counts(
        &mut self,
        correct_answers: u32,
        total_questions: u32,
    ) -> Result<&UserProfile, SessionError> {
        if !matches!(self.state, SessionState::QuizActive { .. }) {
            return Err(self.reject(Action::CompleteQuiz));
        }
        let result = QuizResult::new(correct_answers, total_questions)?;
        self.complete_quiz(result)
    }

    /// Take the same quiz again from the results page.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` when not on the results page.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        let SessionState::ResultsActive {
            level,
            settings,
            attempt,
            ..
        } = &self.state
        else {
            return Err(self.reject(Action::Restart));
        };
        let level = level.clone();
        let settings = settings.clone();
        let attempt = attempt.saturating_add(1);

        log::debug!("restarting quiz, attempt {attempt}");
        self.state = SessionState::QuizActive {
            level,
            settings,
            attempt,
        };
        Ok(())
    }

    /// Return to the home page, dropping any level, settings or result.
    ///
    /// Allowed from every page; an unfinished quiz is discarded without
    /// touching the profile.
    pub fn go_home(&mut self) {
        self.discard_flow(Page::Home);
        self.state = SessionState::Home;
    }

    /// Jump to an informational page, or home.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` for quiz setup, quiz and results,
    /// which are only reachable through their own triggers.
    pub fn navigate(&mut self, page: Page) -> Result<(), SessionError> {
        if page == Page::Home {
            self.go_home();
            return Ok(());
        }
        let Some(next) = SessionState::informational(page) else {
            return Err(self.reject(Action::Navigate(page)));
        };
        self.discard_flow(page);
        self.state = next;
        Ok(())
    }

    /// Switch the display language. Page and existing settings are unchanged.
    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        log::debug!("language switched to {}", self.language);
        self.language
    }

    fn discard_flow(&self, target: Page) {
        if let SessionState::QuizActive { attempt, .. } = &self.state {
            log::debug!("attempt {attempt} abandoned for {target}");
        }
    }

    fn reject(&self, action: Action) -> SessionError {
        let page = self.page();
        log::warn!("rejected {action} on {page}");
        SessionError::InvalidTransition { page, action }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
