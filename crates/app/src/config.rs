use std::fmt;

use quiz_core::model::Language;

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLanguage { raw: String },
    InvalidSeed { raw: String },
    EmptyUsername,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLanguage { raw } => write!(f, "invalid --lang value: {raw}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::EmptyUsername => write!(f, "--user cannot be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

/// Startup options, from flags with environment fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub language: Language,
    pub username: Option<String>,
    pub seed: Option<u64>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Run(Config),
    Help,
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  quiz-master [--lang <en|ta>] [--user <name>] [--seed <u64>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --lang en, demo profile QuizUser123, random seed");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_LANGUAGE, QUIZ_USERNAME, QUIZ_SEED, RUST_LOG");
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_language(raw: String) -> Result<Language, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidLanguage { raw })
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim().parse().map_err(|_| ArgsError::InvalidSeed { raw })
}

fn parse_username(raw: String) -> Result<String, ArgsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ArgsError::EmptyUsername);
    }
    Ok(trimmed.to_string())
}

impl Config {
    /// Parse command-line arguments (program name already skipped).
    ///
    /// `env` looks up environment variables; flags win over the environment.
    ///
    /// # Errors
    ///
    /// Returns `ArgsError` for unknown flags, missing values, or values that
    /// do not parse.
    pub fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Invocation, ArgsError> {
        let mut language = env("QUIZ_LANGUAGE")
            .map(parse_language)
            .transpose()?
            .unwrap_or_default();
        let mut username = env("QUIZ_USERNAME").map(parse_username).transpose()?;
        let mut seed = env("QUIZ_SEED").map(parse_seed).transpose()?;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--lang" => language = parse_language(require_value(&mut args, "--lang")?)?,
                "--user" => username = Some(parse_username(require_value(&mut args, "--user")?)?),
                "--seed" => seed = Some(parse_seed(require_value(&mut args, "--seed")?)?),
                "--help" | "-h" => return Ok(Invocation::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Invocation::Run(Config {
            language,
            username,
            seed,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn run(invocation: Invocation) -> Config {
        match invocation {
            Invocation::Run(config) => config,
            Invocation::Help => panic!("expected a run config"),
        }
    }

    #[test]
    fn defaults_without_flags() {
        let config = run(Config::parse(args(&[]), no_env).unwrap());
        assert_eq!(config.language, Language::English);
        assert_eq!(config.username, None);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn flags_override_environment() {
        let env = |key: &str| match key {
            "QUIZ_LANGUAGE" => Some("en".to_string()),
            "QUIZ_SEED" => Some("1".to_string()),
            _ => None,
        };
        let config = run(
            Config::parse(args(&["--lang", "ta", "--seed", "99", "--user", " kavi "]), env)
                .unwrap(),
        );
        assert_eq!(config.language, Language::Tamil);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.username.as_deref(), Some("kavi"));
    }

    #[test]
    fn environment_is_used_when_flags_absent() {
        let env = |key: &str| (key == "QUIZ_LANGUAGE").then(|| "tamil".to_string());
        let config = run(Config::parse(args(&[]), env).unwrap());
        assert_eq!(config.language, Language::Tamil);
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(
            Config::parse(args(&["--seed"]), no_env).unwrap_err(),
            ArgsError::MissingValue { flag: "--seed" }
        );
        assert_eq!(
            Config::parse(args(&["--lang", "fr"]), no_env).unwrap_err(),
            ArgsError::InvalidLanguage { raw: "fr".into() }
        );
        assert_eq!(
            Config::parse(args(&["--seed", "-1"]), no_env).unwrap_err(),
            ArgsError::InvalidSeed { raw: "-1".into() }
        );
        assert_eq!(
            Config::parse(args(&["--user", "  "]), no_env).unwrap_err(),
            ArgsError::EmptyUsername
        );
        assert_eq!(
            Config::parse(args(&["--verbose"]), no_env).unwrap_err(),
            ArgsError::UnknownArg("--verbose".into())
        );
    }

    #[test]
    fn help_flag_short_circuits() {
        assert_eq!(
            Config::parse(args(&["--help", "--bogus"]), no_env).unwrap(),
            Invocation::Help
        );
    }
}
