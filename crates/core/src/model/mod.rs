mod language;
mod level;
mod page;
mod profile;
mod result;
mod settings;

pub use language::{Language, LanguageParseError};
pub use level::{Level, LevelCatalog, LevelCatalogError, LevelId};
pub use page::{Page, PageParseError};
pub use profile::{ProfileError, UserProfile};
pub use result::{QuestionOutcome, QuizResult, QuizResultError};
pub use settings::{QuestionCount, QuestionCountError, QuizSettings};
