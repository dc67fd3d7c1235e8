use chrono::{DateTime, Utc};
use serde::Serialize;

use quiz_core::model::{Language, LevelId, Page, QuizResult, QuizSettings, UserProfile};

/// Read-only copy of everything a presentation layer renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub page: Page,
    pub language: Language,
    pub selected_level: Option<LevelId>,
    pub settings: Option<QuizSettings>,
    pub result: Option<QuizResult>,
    pub attempt: Option<u32>,
    pub completed_at: Option<DateTime<Utc>>,
    pub profile: UserProfile,
}

impl SessionSnapshot {
    /// Pretty JSON rendering, used by debug views.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if a field cannot be encoded.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
