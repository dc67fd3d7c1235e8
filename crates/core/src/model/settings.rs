use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;
use thiserror::Error;

use crate::model::{Language, LevelId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionCountError {
    #[error("number of questions must be > 0")]
    Zero,

    #[error("number of questions must be a positive integer, got {raw:?}")]
    NotAPositiveInteger { raw: String },
}

//
// ─── QUESTION COUNT ────────────────────────────────────────────────────────────
//

/// Number of questions in a quiz. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionCount(NonZeroU32);

impl QuestionCount {
    /// Count proposed on the setup page before the user picks one.
    pub const DEFAULT: QuestionCount = QuestionCount(NonZeroU32::new(10).unwrap());

    /// # Errors
    ///
    /// Returns `QuestionCountError::Zero` for `0`.
    pub fn new(value: u32) -> Result<Self, QuestionCountError> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(QuestionCountError::Zero)
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for QuestionCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuestionCount {
    type Err = QuestionCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| QuestionCountError::NotAPositiveInteger { raw: s.to_string() })?;
        if value == 0 {
            return Err(QuestionCountError::Zero);
        }
        u32::try_from(value)
            .map_err(|_| QuestionCountError::NotAPositiveInteger { raw: s.to_string() })
            .and_then(Self::new)
    }
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Configuration handed to the quiz-taking collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSettings {
    language: Language,
    level: LevelId,
    number_of_questions: QuestionCount,
}

impl QuizSettings {
    /// Settings as first proposed for a level: the default question count.
    #[must_use]
    pub fn new(language: Language, level: LevelId) -> Self {
        Self {
            language,
            level,
            number_of_questions: QuestionCount::DEFAULT,
        }
    }

    /// Returns a copy with the confirmed question count.
    #[must_use]
    pub fn with_question_count(mut self, count: QuestionCount) -> Self {
        self.number_of_questions = count;
        self
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn level(&self) -> LevelId {
        self.level
    }

    #[must_use]
    pub fn number_of_questions(&self) -> QuestionCount {
        self.number_of_questions
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
