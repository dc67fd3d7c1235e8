use chrono::{DateTime, Utc};
use quiz_core::model::{Level, Page, QuizResult, QuizSettings};

/// Where the session currently is, with the data that page needs.
///
/// The quiz pages carry their settings (and the results page its result), so a
/// collaborator rendering them never sees a missing value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Home,
    About,
    Contact,
    Help,
    Profile,
    QuizSetupActive {
        level: Level,
        settings: QuizSettings,
    },
    QuizActive {
        level: Level,
        settings: QuizSettings,
        attempt: u32,
    },
    ResultsActive {
        level: Level,
        settings: QuizSettings,
        result: QuizResult,
        attempt: u32,
        completed_at: DateTime<Utc>,
    },
}

impl SessionState {
    /// State for one of the informational pages; `None` for any other page.
    #[must_use]
    pub fn informational(page: Page) -> Option<Self> {
        match page {
            Page::About => Some(Self::About),
            Page::Contact => Some(Self::Contact),
            Page::Help => Some(Self::Help),
            Page::Profile => Some(Self::Profile),
            _ => None,
        }
    }

    #[must_use]
    pub fn page(&self) -> Page {
        match self {
            SessionState::Home => Page::Home,
            SessionState::About => Page::About,
            SessionState::Contact => Page::Contact,
            SessionState::Help => Page::Help,
            SessionState::Profile => Page::Profile,
            SessionState::QuizSetupActive { .. } => Page::QuizSetup,
            SessionState::QuizActive { .. } => Page::Quiz,
            SessionState::ResultsActive { .. } => Page::Results,
        }
    }

    #[must_use]
    pub fn level(&self) -> Option<&Level> {
        match self {
            SessionState::QuizSetupActive { level, .. }
            | SessionState::QuizActive { level, .. }
            | SessionState::ResultsActive { level, .. } => Some(level),
            _ => None,
        }
    }

    #[must_use]
    pub fn settings(&self) -> Option<&QuizSettings> {
        match self {
            SessionState::QuizSetupActive { settings, .. }
            | SessionState::QuizActive { settings, .. }
            | SessionState::ResultsActive { settings, .. } => Some(settings),
            _ => None,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<&QuizResult> {
        match self {
            SessionState::ResultsActive { result, .. } => Some(result),
            _ => None,
        }
    }

    /// 1-based attempt number while quizzing or viewing results.
    #[must_use]
    pub fn attempt(&self) -> Option<u32> {
        match self {
            SessionState::QuizActive { attempt, .. }
            | SessionState::ResultsActive { attempt, .. } => Some(*attempt),
            _ => None,
        }
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        match self {
            SessionState::ResultsActive { completed_at, .. } => Some(*completed_at),
            _ => None,
        }
    }
}
