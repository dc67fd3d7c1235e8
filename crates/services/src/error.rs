//! Shared error types for the services crate.

use std::fmt;

use thiserror::Error;

use quiz_core::model::{LevelId, Page, QuestionCountError, QuizResultError};

/// Session trigger named in transition errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectLevel,
    StartQuiz,
    CompleteQuiz,
    Restart,
    Navigate(Page),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::SelectLevel => f.write_str("select level"),
            Action::StartQuiz => f.write_str("start quiz"),
            Action::CompleteQuiz => f.write_str("complete quiz"),
            Action::Restart => f.write_str("restart quiz"),
            Action::Navigate(page) => write!(f, "navigate to {page}"),
        }
    }
}

/// Errors emitted by `ProfileAggregator::fold`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FoldError {
    #[error(transparent)]
    InvalidResult(#[from] QuizResultError),
    #[error("profile counters overflowed")]
    Overflow,
}

/// Errors emitted by `SessionController` transitions.
///
/// Every variant leaves the session and profile exactly as they were.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("cannot {action} from the {page} page")]
    InvalidTransition { page: Page, action: Action },
    #[error("level {0} is not in the catalog")]
    UnknownLevel(LevelId),
    #[error("invalid question count: {0}")]
    InvalidQuestionCount(#[from] QuestionCountError),
    #[error("invalid quiz result: {0}")]
    InvalidResult(#[from] QuizResultError),
    #[error("profile update failed: {0}")]
    Profile(FoldError),
}

impl From<FoldError> for SessionError {
    fn from(err: FoldError) -> Self {
        match err {
            FoldError::InvalidResult(inner) => SessionError::InvalidResult(inner),
            other => SessionError::Profile(other),
        }
    }
}
