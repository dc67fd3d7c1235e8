use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown language: {raw}")]
pub struct LanguageParseError {
    pub raw: String,
}

/// Display language of the session.
///
/// Closed two-value set; switching is always a flip between the pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Tamil,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Tamil];

    /// Returns the other supported language.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Tamil,
            Language::Tamil => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => f.write_str("English"),
            Language::Tamil => f.write_str("Tamil"),
        }
    }
}

impl FromStr for Language {
    type Err = LanguageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "ta" | "tamil" => Ok(Language::Tamil),
            _ => Err(LanguageParseError { raw: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_the_pair() {
        assert_eq!(Language::English.toggled(), Language::Tamil);
        assert_eq!(Language::Tamil.toggled(), Language::English);
        assert_eq!(Language::English.toggled().toggled(), Language::English);
        for language in Language::ALL {
            assert_ne!(language, language.toggled());
        }
    }

    #[test]
    fn parses_codes_and_names() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!(" Tamil ".parse::<Language>().unwrap(), Language::Tamil);
        assert_eq!("TA".parse::<Language>().unwrap(), Language::Tamil);
        let err = "fr".parse::<Language>().unwrap_err();
        assert_eq!(err.raw, "fr");
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::English);
    }
}
