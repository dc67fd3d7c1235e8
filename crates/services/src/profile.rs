use quiz_core::model::{QuizResult, UserProfile};

use crate::error::FoldError;

/// Points awarded per correct answer.
pub const POINTS_PER_CORRECT: u32 = 10;

/// Owns the user profile and folds finished quizzes into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileAggregator {
    profile: UserProfile,
}

impl ProfileAggregator {
    #[must_use]
    pub fn new(profile: UserProfile) -> Self {
        Self { profile }
    }

    #[must_use]
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    #[must_use]
    pub fn into_profile(self) -> UserProfile {
        self.profile
    }

    /// Incorporate one quiz result into the running totals.
    ///
    /// The new average weights the previous (already rounded) average by the
    /// prior quiz count, then rounds half-up. Rounding error compounds across
    /// quizzes; callers depend on that exact sequence.
    ///
    /// # Errors
    ///
    /// Returns `FoldError::InvalidResult` if the result breaks its count invariant
    /// and `FoldError::Overflow` if a counter would wrap. The profile is untouched
    /// on error.
    pub fn fold(&mut self, result: &QuizResult) -> Result<&UserProfile, FoldError> {
        result.validate()?;

        let current = &self.profile;
        let points_earned = result
            .correct_answers()
            .checked_mul(POINTS_PER_CORRECT)
            .ok_or(FoldError::Overflow)?;
        let total_points = current
            .total_points()
            .checked_add(points_earned)
            .ok_or(FoldError::Overflow)?;
        let total_quizzes = current
            .total_quizzes()
            .checked_add(1)
            .ok_or(FoldError::Overflow)?;
        let average_score = running_average(
            current.average_score(),
            current.total_quizzes(),
            result.score_percent(),
        );

        let next = current.with_stats(total_points, total_quizzes, average_score);
        log::info!(
            "profile updated: +{points_earned} points, {total_quizzes} quizzes, average {average_score}%"
        );
        self.profile = next;
        Ok(&self.profile)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn running_average(previous_average: u32, previous_quizzes: u32, score_percent: f64) -> u32 {
    let weighted = f64::from(previous_average) * f64::from(previous_quizzes);
    let mean = (weighted + score_percent) / (f64::from(previous_quizzes) + 1.0);
    round_half_up(mean).clamp(0.0, 100.0) as u32
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
