use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizResultError {
    #[error("a quiz result must cover at least one question")]
    NoQuestions,

    #[error("correct answers ({correct}) exceed total questions ({total})")]
    CorrectExceedsTotal { correct: u32, total: u32 },

    #[error("too many question outcomes for a single quiz: {len}")]
    TooManyOutcomes { len: usize },
}

//
// ─── QUESTION OUTCOME ──────────────────────────────────────────────────────────
//

/// Per-question detail recorded by the quiz-taking collaborator.
///
/// The session layer carries it to the results page untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOutcome {
    pub prompt: String,
    pub expected: String,
    pub given: String,
    pub correct: bool,
}

//
// ─── QUIZ RESULT ───────────────────────────────────────────────────────────────
//

/// Score of one finished quiz attempt.
///
/// Invariant: `0 < total_questions` and `correct_answers <= total_questions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawQuizResult")]
pub struct QuizResult {
    correct_answers: u32,
    total_questions: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    outcomes: Vec<QuestionOutcome>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuizResult {
    correct_answers: u32,
    total_questions: u32,
    #[serde(default)]
    outcomes: Vec<QuestionOutcome>,
}

impl TryFrom<RawQuizResult> for QuizResult {
    type Error = QuizResultError;

    fn try_from(raw: RawQuizResult) -> Result<Self, Self::Error> {
        Self::new(raw.correct_answers, raw.total_questions)
            .map(|result| result.with_outcomes(raw.outcomes))
    }
}

impl QuizResult {
    /// # Errors
    ///
    /// Returns `QuizResultError::NoQuestions` when `total_questions` is zero and
    /// `QuizResultError::CorrectExceedsTotal` when more answers are correct than asked.
    pub fn new(correct_answers: u32, total_questions: u32) -> Result<Self, QuizResultError> {
        check_counts(correct_answers, total_questions)?;
        Ok(Self {
            correct_answers,
            total_questions,
            outcomes: Vec::new(),
        })
    }

    /// Derive the counts from a list of answered questions.
    ///
    /// # Errors
    ///
    /// Returns `QuizResultError::NoQuestions` for an empty list and
    /// `QuizResultError::TooManyOutcomes` if the length does not fit in `u32`.
    pub fn from_outcomes(outcomes: Vec<QuestionOutcome>) -> Result<Self, QuizResultError> {
        let total_questions = u32::try_from(outcomes.len())
            .map_err(|_| QuizResultError::TooManyOutcomes { len: outcomes.len() })?;
        let correct = outcomes.iter().filter(|outcome| outcome.correct).count();
        // bounded by total_questions
        let correct_answers = u32::try_from(correct)
            .map_err(|_| QuizResultError::TooManyOutcomes { len: outcomes.len() })?;

        let result = Self::new(correct_answers, total_questions)?;
        Ok(result.with_outcomes(outcomes))
    }

    fn with_outcomes(mut self, outcomes: Vec<QuestionOutcome>) -> Self {
        self.outcomes = outcomes;
        self
    }

    /// Re-checks the count invariant.
    ///
    /// # Errors
    ///
    /// Same conditions as [`QuizResult::new`].
    pub fn validate(&self) -> Result<(), QuizResultError> {
        check_counts(self.correct_answers, self.total_questions)
    }

    #[must_use]
    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn outcomes(&self) -> &[QuestionOutcome] {
        &self.outcomes
    }

    /// Percentage of correct answers, unrounded: `(correct / total) * 100`.
    #[must_use]
    pub fn score_percent(&self) -> f64 {
        f64::from(self.correct_answers) / f64::from(self.total_questions) * 100.0
    }
}

fn check_counts(correct: u32, total: u32) -> Result<(), QuizResultError> {
    if total == 0 {
        return Err(QuizResultError::NoQuestions);
    }
    if correct > total {
        return Err(QuizResultError::CorrectExceedsTotal { correct, total });
    }
    Ok(())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
