use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::Language;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LevelCatalogError {
    #[error("level catalog cannot be empty")]
    Empty,

    #[error("level {0} appears more than once in the catalog")]
    DuplicateLevel(LevelId),

    #[error("unknown level id: {raw}")]
    UnknownId { raw: String },
}

//
// ─── LEVEL ID ──────────────────────────────────────────────────────────────────
//

/// Difficulty tier a quiz is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelId {
    Beginner,
    Intermediate,
    Advanced,
}

impl LevelId {
    pub const ALL: [LevelId; 3] = [LevelId::Beginner, LevelId::Intermediate, LevelId::Advanced];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LevelId::Beginner => "beginner",
            LevelId::Intermediate => "intermediate",
            LevelId::Advanced => "advanced",
        }
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LevelId {
    type Err = LevelCatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        LevelId::ALL
            .into_iter()
            .find(|id| id.as_str() == needle)
            .ok_or_else(|| LevelCatalogError::UnknownId { raw: s.to_string() })
    }
}

//
// ─── LEVEL ─────────────────────────────────────────────────────────────────────
//

/// Catalog entry describing one difficulty level.
///
/// Display data only; the session logic keys everything off [`LevelId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    id: LevelId,
    name_english: String,
    name_tamil: String,
    color: String,
    grade: String,
}

impl Level {
    #[must_use]
    pub fn new(
        id: LevelId,
        name_english: impl Into<String>,
        name_tamil: impl Into<String>,
        color: impl Into<String>,
        grade: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name_english: name_english.into(),
            name_tamil: name_tamil.into(),
            color: color.into(),
            grade: grade.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> LevelId {
        self.id
    }

    /// Display name in the requested language.
    #[must_use]
    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::English => &self.name_english,
            Language::Tamil => &self.name_tamil,
        }
    }

    /// CSS-style hex color, e.g. `#4CAF50`.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Grade-range label, e.g. `Grades 6-7`.
    #[must_use]
    pub fn grade(&self) -> &str {
        &self.grade
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Ordered, read-only set of levels offered on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    /// Builds a catalog from an ordered list of levels.
    ///
    /// # Errors
    ///
    /// Returns `LevelCatalogError::Empty` for an empty list and
    /// `LevelCatalogError::DuplicateLevel` if an id repeats.
    pub fn new(levels: Vec<Level>) -> Result<Self, LevelCatalogError> {
        if levels.is_empty() {
            return Err(LevelCatalogError::Empty);
        }
        for (idx, level) in levels.iter().enumerate() {
            if levels[..idx].iter().any(|prev| prev.id == level.id) {
                return Err(LevelCatalogError::DuplicateLevel(level.id));
            }
        }
        Ok(Self { levels })
    }

    /// The three stock levels, beginner through advanced.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            levels: vec![
                Level::new(LevelId::Beginner, "Beginner", "தொடக்க", "#4CAF50", "Grades 6-7"),
                Level::new(
                    LevelId::Intermediate,
                    "Intermediate",
                    "இடைநிலை",
                    "#2196F3",
                    "Grades 8-10",
                ),
                Level::new(LevelId::Advanced, "Advanced", "மேம்பட்ட", "#9C27B0", "Grades 11-12"),
            ],
        }
    }

    #[must_use]
    pub fn get(&self, id: LevelId) -> Option<&Level> {
        self.levels.iter().find(|level| level.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
