use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileError {
    #[error("username cannot be empty")]
    EmptyUsername,

    #[error("average score must be within 0..=100, got {0}")]
    AverageOutOfRange(u32),
}

/// Cumulative statistics for the single local user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    username: String,
    member_since: NaiveDate,
    total_points: u32,
    total_quizzes: u32,
    average_score: u32,
    achievements: u32,
}

impl UserProfile {
    /// Fresh profile with zeroed statistics.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::EmptyUsername` if the name is blank.
    pub fn new(username: impl Into<String>, member_since: NaiveDate) -> Result<Self, ProfileError> {
        Self::from_parts(username, member_since, 0, 0, 0, 0)
    }

    /// Rebuild a profile from known statistics.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::EmptyUsername` for a blank name and
    /// `ProfileError::AverageOutOfRange` if `average_score > 100`.
    pub fn from_parts(
        username: impl Into<String>,
        member_since: NaiveDate,
        total_points: u32,
        total_quizzes: u32,
        average_score: u32,
        achievements: u32,
    ) -> Result<Self, ProfileError> {
        let username = username.into().trim().to_string();
        if username.is_empty() {
            return Err(ProfileError::EmptyUsername);
        }
        if average_score > 100 {
            return Err(ProfileError::AverageOutOfRange(average_score));
        }
        Ok(Self {
            username,
            member_since,
            total_points,
            total_quizzes,
            average_score,
            achievements,
        })
    }

    /// The demo profile a new session starts from.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            username: "QuizUser123".to_string(),
            member_since: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            total_points: 1250,
            total_quizzes: 24,
            average_score: 78,
            achievements: 5,
        }
    }

    /// Same identity with replaced quiz statistics. Achievements are kept and
    /// the average is capped at 100.
    #[must_use]
    pub fn with_stats(&self, total_points: u32, total_quizzes: u32, average_score: u32) -> Self {
        Self {
            total_points,
            total_quizzes,
            average_score: average_score.min(100),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn member_since(&self) -> NaiveDate {
        self.member_since
    }

    /// Month and year label, e.g. `Jan 2025`.
    #[must_use]
    pub fn member_since_label(&self) -> String {
        self.member_since.format("%b %Y").to_string()
    }

    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    #[must_use]
    pub fn total_quizzes(&self) -> u32 {
        self.total_quizzes
    }

    /// Rounded running average, as a whole percentage.
    #[must_use]
    pub fn average_score(&self) -> u32 {
        self.average_score
    }

    #[must_use]
    pub fn achievements(&self) -> u32 {
        self.achievements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn seed_matches_demo_values() {
        let profile = UserProfile::seed();
        assert_eq!(profile.username(), "QuizUser123");
        assert_eq!(profile.member_since_label(), "Jan 2025");
        assert_eq!(profile.total_points(), 1250);
        assert_eq!(profile.total_quizzes(), 24);
        assert_eq!(profile.average_score(), 78);
        assert_eq!(profile.achievements(), 5);
    }

    #[test]
    fn new_profile_starts_at_zero() {
        let profile = UserProfile::new("  ana  ", date()).unwrap();
        assert_eq!(profile.username(), "ana");
        assert_eq!(profile.total_quizzes(), 0);
        assert_eq!(profile.average_score(), 0);
    }

    #[test]
    fn rejects_blank_username_and_bad_average() {
        assert_eq!(
            UserProfile::new("   ", date()).unwrap_err(),
            ProfileError::EmptyUsername
        );
        assert_eq!(
            UserProfile::from_parts("a", date(), 0, 0, 101, 0).unwrap_err(),
            ProfileError::AverageOutOfRange(101)
        );
    }

    #[test]
    fn with_stats_keeps_identity_and_achievements() {
        let profile = UserProfile::seed();
        let next = profile.with_stats(1330, 25, 78);
        assert_eq!(next.username(), profile.username());
        assert_eq!(next.member_since(), profile.member_since());
        assert_eq!(next.achievements(), 5);
        assert_eq!(next.total_points(), 1330);
        assert_eq!(profile.with_stats(0, 0, 150).average_score(), 100);
    }
}
