use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown page: {raw}")]
pub struct PageParseError {
    pub raw: String,
}

/// Navigable screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Page {
    Home,
    About,
    Contact,
    Help,
    Profile,
    QuizSetup,
    Quiz,
    Results,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::About,
        Page::Contact,
        Page::Help,
        Page::Profile,
        Page::QuizSetup,
        Page::Quiz,
        Page::Results,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Contact => "contact",
            Page::Help => "help",
            Page::Profile => "profile",
            Page::QuizSetup => "quizSetup",
            Page::Quiz => "quiz",
            Page::Results => "results",
        }
    }

    /// Static pages that can be opened from anywhere without session data.
    #[must_use]
    pub fn is_informational(self) -> bool {
        matches!(self, Page::About | Page::Contact | Page::Help | Page::Profile)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = PageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Page::ALL
            .into_iter()
            .find(|page| page.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| PageParseError { raw: s.to_string() })
    }
}
